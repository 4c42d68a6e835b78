//! Use cases (application services)

pub mod assess_symptoms;
pub mod handle_message;
