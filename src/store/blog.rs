use tracing::debug;

use super::{Latency, StoreResult, find_by_id};
use crate::filter::{self, Filter};
use crate::model::{BlogPost, Id};

/// Posts returned by [`BlogStore::get_featured`] at most
pub const FEATURED_LIMIT: usize = 3;
/// Default length of [`BlogStore::get_recent`]
pub const RECENT_LIMIT: usize = 5;
/// Default length of [`BlogStore::get_related`]
pub const RELATED_LIMIT: usize = 3;

/// Read-only store of insights articles
pub struct BlogStore {
    posts: Vec<BlogPost>,
    latency: Latency,
}

/// Newest first; equal dates keep collection order
fn newest_first(mut posts: Vec<BlogPost>) -> Vec<BlogPost> {
    posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    posts
}

impl BlogStore {
    pub fn new(posts: Vec<BlogPost>, latency: Latency) -> Self {
        Self { posts, latency }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts matching `filter`, newest first
    pub async fn get_all(&self, filter: &Filter) -> StoreResult<Vec<BlogPost>> {
        self.latency.pause().await;
        let posts = newest_first(filter::apply(&self.posts, filter));
        debug!("Blog query {:?} matched {} posts", filter, posts.len());
        Ok(posts)
    }

    pub async fn get_by_id(&self, id: Id) -> StoreResult<BlogPost> {
        self.latency.pause().await;
        find_by_id(&self.posts, id)
    }

    /// Posts whose category label equals `category`, newest first
    pub async fn get_by_category(&self, category: &str) -> StoreResult<Vec<BlogPost>> {
        self.latency.pause().await;
        Ok(newest_first(
            self.posts
                .iter()
                .filter(|post| post.category.label() == category)
                .cloned()
                .collect(),
        ))
    }

    /// Up to three featured posts, newest first
    pub async fn get_featured(&self) -> StoreResult<Vec<BlogPost>> {
        self.latency.pause().await;
        let mut posts = newest_first(self.posts.iter().filter(|p| p.featured).cloned().collect());
        posts.truncate(FEATURED_LIMIT);
        Ok(posts)
    }

    /// The `limit` most recent posts
    pub async fn get_recent(&self, limit: usize) -> StoreResult<Vec<BlogPost>> {
        self.latency.pause().await;
        let mut posts = newest_first(self.posts.clone());
        posts.truncate(limit);
        Ok(posts)
    }

    /// Other posts in the same category as `post`, newest first
    pub async fn get_related(&self, post: &BlogPost, limit: usize) -> StoreResult<Vec<BlogPost>> {
        let mut related: Vec<BlogPost> = self
            .get_by_category(post.category.label())
            .await?
            .into_iter()
            .filter(|candidate| candidate.id != post.id)
            .collect();
        related.truncate(limit);
        Ok(related)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlogCategory;
    use crate::store::StoreError;

    fn post(id: u32, date: &str, category: BlogCategory, featured: bool) -> BlogPost {
        BlogPost {
            id: Id::new(id),
            title: format!("Post {}", id),
            excerpt: "Short summary".to_string(),
            content: "Body text".to_string(),
            category,
            tags: vec!["CNC".to_string()],
            author: "Mike Thompson".to_string(),
            published_at: date.parse().unwrap(),
            read_time: 5,
            featured,
        }
    }

    fn store() -> BlogStore {
        BlogStore::new(
            vec![
                post(1, "2024-01-01", BlogCategory::Quality, true),
                post(2, "2024-03-01", BlogCategory::CompanyNews, true),
                post(3, "2024-02-01", BlogCategory::Quality, false),
                post(4, "2024-04-10", BlogCategory::Quality, true),
                post(5, "2024-05-20", BlogCategory::IndustryInsights, true),
            ],
            Latency::none(),
        )
    }

    fn ids(posts: &[BlogPost]) -> Vec<u32> {
        posts.iter().map(|p| p.id.get()).collect()
    }

    #[tokio::test]
    async fn test_get_recent_orders_by_date() {
        let store = BlogStore::new(
            vec![
                post(1, "2024-01-01", BlogCategory::Quality, false),
                post(2, "2024-03-01", BlogCategory::Quality, false),
                post(3, "2024-02-01", BlogCategory::Quality, false),
            ],
            Latency::none(),
        );
        assert_eq!(ids(&store.get_recent(2).await.unwrap()), vec![2, 3]);
        assert_eq!(ids(&store.get_recent(RECENT_LIMIT).await.unwrap()), vec![2, 3, 1]);
    }

    #[tokio::test]
    async fn test_get_featured_caps_at_three() {
        let featured = store().get_featured().await.unwrap();
        assert_eq!(ids(&featured), vec![5, 4, 2]);
        assert!(featured.iter().all(|p| p.featured));
    }

    #[tokio::test]
    async fn test_get_by_category_sorted() {
        let quality = store().get_by_category("Quality").await.unwrap();
        assert_eq!(ids(&quality), vec![4, 3, 1]);
        assert!(store().get_by_category("Careers").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_all_filters_and_sorts() {
        let store = store();
        let all = store.get_all(&Filter::default()).await.unwrap();
        assert_eq!(ids(&all), vec![5, 4, 2, 3, 1]);

        let news = store
            .get_all(&Filter::default().with_category("Company News"))
            .await
            .unwrap();
        assert_eq!(ids(&news), vec![2]);

        let by_tag = store
            .get_all(&Filter::default().with_search("cnc"))
            .await
            .unwrap();
        assert_eq!(by_tag.len(), 5);

        let everything = store
            .get_all(&Filter::default().with_category("all"))
            .await
            .unwrap();
        assert_eq!(everything.len(), 5);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let err = store().get_by_id(Id::new(77)).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
        assert_eq!(err.to_string(), "Blog post not found");
    }

    #[tokio::test]
    async fn test_get_related_excludes_self() {
        let store = store();
        let current = store.get_by_id(Id::new(3)).await.unwrap();
        let related = store.get_related(&current, RELATED_LIMIT).await.unwrap();
        assert_eq!(ids(&related), vec![4, 1]);
    }

    #[tokio::test]
    async fn test_queries_do_not_reorder_collection() {
        let store = store();
        store.get_recent(2).await.unwrap();
        assert_eq!(ids(&store.posts), vec![1, 2, 3, 4, 5]);
    }
}
