use std::sync::RwLock;

use async_trait::async_trait;
use tracing::info;

use super::{Latency, StoreError, StoreResult, find_by_id};
use crate::model::{EntityKind, Id, Inquiry, InquirySubmission};
use crate::util::time;

/// Destination for contact form submissions
#[async_trait]
pub trait InquiryInbox: Send + Sync {
    async fn submit_inquiry(&self, submission: InquirySubmission) -> StoreResult<Inquiry>;
}

/// Inquiries received since start-up
pub struct InquiryStore {
    inquiries: RwLock<Vec<Inquiry>>,
    latency: Latency,
}

impl InquiryStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            inquiries: RwLock::new(Vec::new()),
            latency,
        }
    }

    /// Record a submission; identifiers count up from 1 in arrival order
    pub async fn submit(&self, submission: InquirySubmission) -> StoreResult<Inquiry> {
        self.latency.pause().await;
        let mut data = self.inquiries.write().map_err(|_| StoreError::poisoned())?;
        let id = u32::try_from(data.len())
            .ok()
            .and_then(|count| count.checked_add(1))
            .map(Id::new)
            .ok_or(StoreError::IdsExhausted(EntityKind::Inquiry))?;
        let inquiry = Inquiry {
            id,
            submission,
            timestamp: time::now(),
        };
        data.push(inquiry.clone());
        info!(
            "Inquiry {} received ({}) from {}",
            inquiry.id, inquiry.submission.inquiry_type, inquiry.submission.company_name
        );
        Ok(inquiry)
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Inquiry>> {
        self.latency.pause().await;
        let data = self.inquiries.read().map_err(|_| StoreError::poisoned())?;
        Ok(data.clone())
    }

    pub async fn get_by_id(&self, id: Id) -> StoreResult<Inquiry> {
        self.latency.pause().await;
        let data = self.inquiries.read().map_err(|_| StoreError::poisoned())?;
        find_by_id(&data, id)
    }
}

#[async_trait]
impl InquiryInbox for InquiryStore {
    async fn submit_inquiry(&self, submission: InquirySubmission) -> StoreResult<Inquiry> {
        self.submit(submission).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(company: &str) -> InquirySubmission {
        InquirySubmission {
            inquiry_type: "general".to_string(),
            company_name: company.to_string(),
            contact_name: "Pat Doe".to_string(),
            email: "pat@example.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_assigns_sequential_ids() {
        let store = InquiryStore::new(Latency::none());
        let first = store.submit(submission("Acme")).await.unwrap();
        let second = store.submit(submission("Globex")).await.unwrap();
        assert_eq!(first.id, Id::new(1));
        assert_eq!(second.id, Id::new(2));
        assert!(second.timestamp >= first.timestamp);
        assert_eq!(store.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let store = InquiryStore::new(Latency::none());
        store.submit(submission("Acme")).await.unwrap();
        let found = store.get_by_id(Id::new(1)).await.unwrap();
        assert_eq!(found.submission.company_name, "Acme");
        assert!(store.get_by_id(Id::new(2)).await.is_err());
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = InquiryStore::new(Latency::none());
        assert!(store.get_all().await.unwrap().is_empty());
    }
}
