use serde::Serialize;

use crate::models::reference::{Country, EducationLevel, JobType, State};

/// Fixed form field names for the dependent location selects.
pub const COUNTRY_FIELD: &str = "country_id";
pub const STATE_FIELD: &str = "state_id";

/// One `<option>` in a select. Id 0 is the non-selectable placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: i32,
    pub label: String,
}

fn with_placeholder(
    placeholder: &str,
    options: impl Iterator<Item = SelectOption>,
) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: 0,
        label: placeholder.to_string(),
    })
    .chain(options)
    .collect()
}

pub fn country_options(countries: &[Country]) -> Vec<SelectOption> {
    with_placeholder(
        "Select Country",
        countries.iter().map(|c| SelectOption {
            value: c.id,
            label: c.country_name.clone(),
        }),
    )
}

pub fn state_options(states: &[State]) -> Vec<SelectOption> {
    with_placeholder(
        "Select State",
        states.iter().map(|s| SelectOption {
            value: s.id,
            label: s.state_name.clone(),
        }),
    )
}

pub fn education_level_options(levels: &[EducationLevel]) -> Vec<SelectOption> {
    with_placeholder(
        "Any Education Level",
        levels.iter().map(|e| SelectOption {
            value: e.id,
            label: e.education_level_name.clone(),
        }),
    )
}

pub fn job_type_options(types: &[JobType]) -> Vec<SelectOption> {
    with_placeholder(
        "Select Job Type",
        types.iter().map(|t| SelectOption {
            value: t.id,
            label: t.job_type_name.clone(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_start_with_placeholder_row() {
        let countries = vec![Country {
            id: 1,
            country_name: "United States".to_string(),
        }];
        let options = country_options(&countries);

        assert_eq!(options[0].value, 0);
        assert_eq!(options[0].label, "Select Country");
        assert_eq!(options[1].value, 1);
        assert_eq!(options[1].label, "United States");
    }

    #[test]
    fn field_names_are_the_dom_contract() {
        assert_eq!(COUNTRY_FIELD, "country_id");
        assert_eq!(STATE_FIELD, "state_id");
    }

    #[test]
    fn education_placeholder_reads_any() {
        let options = education_level_options(&[]);
        assert_eq!(options[0].label, "Any Education Level");
    }
}
