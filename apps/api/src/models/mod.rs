pub mod company;
pub mod favorite;
pub mod job_posting;
pub mod reference;
pub mod resume;
pub mod user;
