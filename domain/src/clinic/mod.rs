//! Clinic catalog and recommendation

pub mod catalog;
pub mod recommender;

pub use catalog::{CLINICS, Clinic, ClinicId, find_clinic};
pub use recommender::{ClinicRecommendation, get_clinic_recommendation};
