use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Entity, EntityKind, Id, Identified};
use crate::util::time::months_after;

/// Months before expiry at which a certificate is flagged for renewal
pub const EXPIRY_WARNING_MONTHS: u32 = 6;

/// Quality certification held by the company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(rename = "Id", default)]
    pub id: Id,
    pub name: String,
    pub issuing_body: String,
    pub number: String,
    pub valid_until: NaiveDate,
}

impl Certification {
    /// Whether the certificate lapses within the warning window from `today`
    pub fn expiring_soon(&self, today: NaiveDate) -> bool {
        self.valid_until < months_after(today, EXPIRY_WARNING_MONTHS)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationPatch {
    pub name: Option<String>,
    pub issuing_body: Option<String>,
    pub number: Option<String>,
    pub valid_until: Option<NaiveDate>,
}

impl Identified for Certification {
    const KIND: EntityKind = EntityKind::Certification;

    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Certification {
    type Patch = CertificationPatch;

    fn set_id(&mut self, id: Id) {
        self.id = id;
    }

    fn apply(&mut self, patch: CertificationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(issuing_body) = patch.issuing_body {
            self.issuing_body = issuing_body;
        }
        if let Some(number) = patch.number {
            self.number = number;
        }
        if let Some(valid_until) = patch.valid_until {
            self.valid_until = valid_until;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cert(valid_until: &str) -> Certification {
        Certification {
            id: Id::new(1),
            name: "ISO 9001:2015".to_string(),
            issuing_body: "BSI".to_string(),
            number: "FM 12345".to_string(),
            valid_until: valid_until.parse().unwrap(),
        }
    }

    #[test]
    fn test_expiring_soon_window() {
        let today: NaiveDate = "2024-01-15".parse().unwrap();
        assert!(cert("2024-03-01").expiring_soon(today));
        assert!(cert("2024-07-14").expiring_soon(today));
        assert!(!cert("2024-07-15").expiring_soon(today));
        assert!(!cert("2026-01-01").expiring_soon(today));
    }

    #[test]
    fn test_already_expired_counts_as_expiring() {
        let today: NaiveDate = "2024-01-15".parse().unwrap();
        assert!(cert("2023-12-31").expiring_soon(today));
    }

    #[test]
    fn test_fixture_field_names() {
        let json = r#"{"Id": 4, "name": "AS9100D", "issuingBody": "NQA",
                       "number": "AS-7781", "validUntil": "2026-09-30"}"#;
        let parsed: Certification = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.issuing_body, "NQA");
        assert_eq!(parsed.valid_until, NaiveDate::from_ymd_opt(2026, 9, 30).unwrap());
    }
}
