//! Typed adapter over the per-user key/value profile store.
//!
//! Property key names are a compatibility contract with the existing settings
//! store and must not change: global properties are stored under their bare
//! name, grouped properties under `"Group.Leaf"`.

pub mod handlers;
pub mod provider;
pub mod typed;

use crate::errors::AppError;

/// Storage key names for every registered profile property.
pub mod keys {
    pub const USER_NAME: &str = "UserName";
    pub const EMAIL: &str = "Email";
    pub const FIRST_NAME: &str = "FirstName";
    pub const LAST_NAME: &str = "LastName";
    pub const JOBSEEKER_RESUME_ID: &str = "JobSeeker.ResumeID";
    pub const EMPLOYER_COMPANY_ID: &str = "Employer.CompanyID";
}

/// A registered profile property definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileProperty {
    pub name: &'static str,
    /// Whether the property may be read/written for anonymous users.
    /// Enforced by the identity layer, not here.
    #[allow(dead_code)]
    pub allows_anonymous: bool,
}

/// The fixed property registry. Reads and writes against any name not listed
/// here fail with a configuration error rather than silently defaulting.
pub const PROPERTIES: &[ProfileProperty] = &[
    ProfileProperty {
        name: keys::USER_NAME,
        allows_anonymous: false,
    },
    ProfileProperty {
        name: keys::EMAIL,
        allows_anonymous: false,
    },
    ProfileProperty {
        name: keys::FIRST_NAME,
        allows_anonymous: true,
    },
    ProfileProperty {
        name: keys::LAST_NAME,
        allows_anonymous: true,
    },
    ProfileProperty {
        name: keys::JOBSEEKER_RESUME_ID,
        allows_anonymous: false,
    },
    ProfileProperty {
        name: keys::EMPLOYER_COMPANY_ID,
        allows_anonymous: false,
    },
];

/// Looks up a property definition by its storage key name.
pub fn property(name: &str) -> Option<&'static ProfileProperty> {
    PROPERTIES.iter().find(|p| p.name == name)
}

/// Resolves a property name against the registry, failing if unregistered.
pub fn require_property(name: &str) -> Result<&'static ProfileProperty, AppError> {
    property(name)
        .ok_or_else(|| AppError::Profile(format!("Profile property '{name}' is not configured")))
}
