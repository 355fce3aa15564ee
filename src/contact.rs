//! Contact form: client-side validation and the submit flow

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::model::{AttachmentRef, Inquiry, InquirySubmission};
use crate::store::{InquiryInbox, StoreError};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Editable contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    InquiryType,
    CompanyName,
    ContactName,
    Email,
    Phone,
    Message,
}

/// Per-field validation messages
pub type FieldErrors = BTreeMap<ContactField, &'static str>;

/// Check the required fields; never touches a store
pub fn validate(submission: &InquirySubmission) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if submission.inquiry_type.is_empty() {
        errors.insert(ContactField::InquiryType, "Please select an inquiry type");
    }
    if submission.company_name.is_empty() {
        errors.insert(ContactField::CompanyName, "Company name is required");
    }
    if submission.contact_name.is_empty() {
        errors.insert(ContactField::ContactName, "Contact name is required");
    }
    if submission.email.is_empty() {
        errors.insert(ContactField::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&submission.email) {
        errors.insert(ContactField::Email, "Please enter a valid email");
    }
    if submission.message.is_empty() {
        errors.insert(
            ContactField::Message,
            "Please provide details about your inquiry",
        );
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Result of [`ContactForm::submit`]
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; see [`ContactForm::errors`]
    Invalid,
    /// Stored; the form has been reset
    Submitted(Inquiry),
    /// The store failed; the form keeps its values for a retry
    Failed(StoreError),
}

/// Contact form state
#[derive(Debug, Default)]
pub struct ContactForm {
    values: InquirySubmission,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &InquirySubmission {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Update a field and clear its error
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::InquiryType => self.values.inquiry_type = value,
            ContactField::CompanyName => self.values.company_name = value,
            ContactField::ContactName => self.values.contact_name = value,
            ContactField::Email => self.values.email = value,
            ContactField::Phone => self.values.phone = value,
            ContactField::Message => self.values.message = value,
        }
        self.errors.remove(&field);
    }

    pub fn add_attachment(&mut self, attachment: AttachmentRef) {
        self.values.attachments.push(attachment);
    }

    pub fn remove_attachment(&mut self, index: usize) -> Option<AttachmentRef> {
        (index < self.values.attachments.len()).then(|| self.values.attachments.remove(index))
    }

    pub async fn submit(&mut self, inbox: &dyn InquiryInbox) -> SubmitOutcome {
        if let Err(errors) = validate(&self.values) {
            self.errors = errors;
            return SubmitOutcome::Invalid;
        }
        self.errors.clear();

        match inbox.submit_inquiry(self.values.clone()).await {
            Ok(inquiry) => {
                self.values = InquirySubmission::default();
                SubmitOutcome::Submitted(inquiry)
            }
            Err(e) => {
                warn!("Inquiry submission failed: {}", e);
                SubmitOutcome::Failed(e)
            }
        }
    }
}
