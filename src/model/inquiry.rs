use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityKind, Id, Identified};

/// Contact form inquiry categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InquiryType {
    QuoteRequest,
    TechnicalQuestion,
    Partnership,
    General,
}

impl InquiryType {
    pub const ALL: [InquiryType; 4] = [
        InquiryType::QuoteRequest,
        InquiryType::TechnicalQuestion,
        InquiryType::Partnership,
        InquiryType::General,
    ];

    /// Form value submitted for this type
    pub fn value(self) -> &'static str {
        match self {
            InquiryType::QuoteRequest => "quote-request",
            InquiryType::TechnicalQuestion => "technical-question",
            InquiryType::Partnership => "partnership",
            InquiryType::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InquiryType::QuoteRequest => "Quote Request",
            InquiryType::TechnicalQuestion => "Technical Question",
            InquiryType::Partnership => "Partnership Opportunity",
            InquiryType::General => "General Information",
        }
    }
}

/// Reference to a file the visitor attached; contents are never transferred
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentRef {
    pub name: String,
    #[serde(default)]
    pub size_bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Contact form payload as entered by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquirySubmission {
    pub inquiry_type: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub attachments: Vec<AttachmentRef>,
}

/// Stored inquiry; held only for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    #[serde(rename = "Id")]
    pub id: Id,
    #[serde(flatten)]
    pub submission: InquirySubmission,
    pub timestamp: DateTime<Utc>,
}

impl Identified for Inquiry {
    const KIND: EntityKind = EntityKind::Inquiry;

    fn id(&self) -> Id {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inquiry_serializes_flat() {
        let inquiry = Inquiry {
            id: Id::new(1),
            submission: InquirySubmission {
                inquiry_type: InquiryType::QuoteRequest.value().to_string(),
                company_name: "Acme".to_string(),
                ..Default::default()
            },
            timestamp: "2024-05-01T12:00:00Z".parse().unwrap(),
        };
        let value = serde_json::to_value(&inquiry).unwrap();
        assert_eq!(value["Id"], 1);
        assert_eq!(value["inquiryType"], "quote-request");
        assert_eq!(value["companyName"], "Acme");
        assert_eq!(value["timestamp"], "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_submission_tolerates_missing_fields() {
        let submission: InquirySubmission =
            serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(submission.email, "a@b.co");
        assert!(submission.attachments.is_empty());
    }
}
