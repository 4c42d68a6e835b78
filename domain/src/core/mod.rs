//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`text`]: case-folded keyword matching used by every rule table

pub mod error;
pub mod text;
