//! View-model helpers behind the templated front end's form widgets.
//! The strings, field names, and thresholds here are behavioral contracts
//! with the existing client-side glue (character counter, delete
//! confirmation, country/state selects) and must not drift.

pub mod confirm;
pub mod counter;
pub mod handlers;
pub mod selects;
