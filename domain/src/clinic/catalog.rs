//! Clinic catalog

use serde::{Deserialize, Serialize};

/// Clinic identifier as used by the booking backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClinicId(pub u32);

impl std::fmt::Display for ClinicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clinic {
    pub id: ClinicId,
    pub name: &'static str,
}

pub static CLINICS: [Clinic; 2] = [
    Clinic {
        id: ClinicId(6),
        name: "Apollo Health Center - Anna Nagar",
    },
    Clinic {
        id: ClinicId(7),
        name: "Fortis Malar Hospital - Adyar",
    },
];

/// Look up a clinic by id
pub fn find_clinic(id: ClinicId) -> Option<&'static Clinic> {
    CLINICS.iter().find(|clinic| clinic.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_clinic() {
        assert_eq!(
            find_clinic(ClinicId(7)).map(|c| c.name),
            Some("Fortis Malar Hospital - Adyar")
        );
        assert!(find_clinic(ClinicId(1)).is_none());
    }

    #[test]
    fn test_clinic_id_serializes_as_number() {
        assert_eq!(serde_json::to_string(&ClinicId(6)).unwrap(), "6");
    }
}
