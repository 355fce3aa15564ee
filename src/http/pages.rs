//! Page endpoints: each one fetches, derives and returns the view state a
//! page renders from

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::Uri;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::content::{self, ContactMethod, DepartmentContact, Highlight, Hours, Milestone, Stat, TeamMember, TestingArea};
use super::error::{ApiError, ApiResult};
use crate::filter::{ALL_CATEGORIES, Filter};
use crate::model::{BlogCategory, BlogPost, Capability, Certification, Id, InquiryType, Product};
use crate::store::blog::RELATED_LIMIT;
use crate::store::{Catalog, Repository};
use crate::util::time;
use crate::view::{self, Block, ListingPage, ProductBrowser, QUOTE_PAGE};

const HOME_PRODUCTS: usize = 3;
const HOME_CERTIFICATIONS: usize = 6;

type Shared = State<Arc<Catalog>>;

/// Certification with its render-time expiry warning
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationView {
    #[serde(flatten)]
    certification: Certification,
    expiring_soon: bool,
}

fn with_expiry(certifications: Vec<Certification>) -> Vec<CertificationView> {
    let today = time::today();
    certifications
        .into_iter()
        .map(|certification| CertificationView {
            expiring_soon: certification.expiring_soon(today),
            certification,
        })
        .collect()
}

/// Empty-result copy shown in place of a grid
#[derive(Debug, Serialize)]
pub struct EmptyState {
    title: &'static str,
    description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SelectOption {
    value: String,
    label: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    featured_products: Vec<Product>,
    certifications: Vec<CertificationView>,
    stats: &'static [Stat],
    services: &'static [Highlight],
}

async fn home(State(catalog): Shared) -> ApiResult<Json<HomePage>> {
    let (mut products, mut certifications) = futures::try_join!(
        catalog.products.get_all(),
        catalog.certifications.get_all()
    )
    .map_err(|e| {
        debug!("Home page fetch failed: {}", e);
        ApiError::PageUnavailable("Failed to load data. Please try again.".to_string())
    })?;

    products.truncate(HOME_PRODUCTS);
    certifications.truncate(HOME_CERTIFICATIONS);
    Ok(Json(HomePage {
        featured_products: products,
        certifications: with_expiry(certifications),
        stats: &content::HOME_STATS,
        services: &content::HOME_SERVICES,
    }))
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    search: Option<String>,
    category: Option<String>,
    /// Product whose detail overlay is open
    selected: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    product: Product,
    #[serde(skip_serializing_if = "Option::is_none")]
    spec_sheet_url: Option<String>,
    quote_url: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    products: Vec<Product>,
    categories: Vec<String>,
    total: usize,
    summary: String,
    filter: Filter,
    filters_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<EmptyState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<ProductDetail>,
}

async fn products(
    State(catalog): Shared,
    Query(query): Query<ProductsQuery>,
) -> ApiResult<Json<ProductsPage>> {
    let mut browser = ProductBrowser::new();

    let ticket = browser.listing.begin_load();
    let categories = match futures::try_join!(
        catalog.products.get_all(),
        catalog.products.get_categories()
    ) {
        Ok((products, categories)) => {
            browser.listing.finish_load(ticket, Ok(products));
            categories
        }
        Err(e) => {
            browser.listing.finish_load(ticket, Err(e));
            Vec::new()
        }
    };
    if let Some(message) = browser.listing.state().error() {
        return Err(ApiError::PageUnavailable(message.to_string()));
    }

    browser.listing.set_filter(Filter {
        search: query.search,
        category: query.category,
    });

    if let Some(selected) = query.selected.as_deref() {
        let id = Id::parse(selected)?;
        if !browser.view_details(id) {
            debug!("Product {} is not in the visible grid", id);
        }
    }
    let detail = browser.detail.selected().map(|product| ProductDetail {
        spec_sheet_url: (!product.specifications.is_empty())
            .then(|| format!("/api/products/{}/specifications.txt", product.id)),
        product: product.clone(),
        quote_url: QUOTE_PAGE,
    });

    let listing = &browser.listing;
    let empty = listing.visible().is_empty().then_some(EmptyState {
        title: "No products found",
        description: "Try adjusting your search criteria or browse all categories to find what you're looking for.",
    });
    Ok(Json(ProductsPage {
        products: listing.visible().to_vec(),
        categories,
        total: listing.total(),
        summary: listing.summary(),
        filter: listing.filter().clone(),
        filters_active: listing.filter().is_active(),
        empty,
        detail,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitiesPage {
    capabilities: Vec<Capability>,
    process_highlights: &'static [Highlight],
}

async fn capabilities(State(catalog): Shared) -> ApiResult<Json<CapabilitiesPage>> {
    let capabilities = catalog.capabilities.get_all().await.map_err(|e| {
        debug!("Capabilities fetch failed: {}", e);
        ApiError::PageUnavailable("Failed to load capabilities. Please try again.".to_string())
    })?;
    Ok(Json(CapabilitiesPage {
        capabilities,
        process_highlights: &content::PROCESS_HIGHLIGHTS,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityPage {
    certifications: Vec<CertificationView>,
    processes: &'static [Highlight],
    testing: &'static [TestingArea],
}

async fn quality(State(catalog): Shared) -> ApiResult<Json<QualityPage>> {
    let certifications = catalog.certifications.get_all().await.map_err(|e| {
        debug!("Certifications fetch failed: {}", e);
        ApiError::PageUnavailable("Failed to load certifications. Please try again.".to_string())
    })?;
    Ok(Json(QualityPage {
        certifications: with_expiry(certifications),
        processes: &content::QUALITY_PROCESSES,
        testing: &content::TESTING_AREAS,
    }))
}

#[derive(Debug, Serialize)]
pub struct AboutPage {
    milestones: &'static [Milestone],
    team: &'static [TeamMember],
    values: &'static [Highlight],
}

async fn about() -> Json<AboutPage> {
    Json(AboutPage {
        milestones: &content::MILESTONES,
        team: &content::TEAM,
        values: &content::VALUES,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    inquiry_types: Vec<SelectOption>,
    methods: &'static [ContactMethod],
    departments: &'static [DepartmentContact],
    hours: &'static [Hours],
    submit_url: &'static str,
}

async fn contact() -> Json<ContactPage> {
    let inquiry_types = InquiryType::ALL
        .iter()
        .map(|kind| SelectOption {
            value: kind.value().to_string(),
            label: kind.label().to_string(),
        })
        .collect();
    Json(ContactPage {
        inquiry_types,
        methods: &content::CONTACT_METHODS,
        departments: &content::DEPARTMENTS,
        hours: &content::BUSINESS_HOURS,
        submit_url: "/api/inquiries",
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct InsightsQuery {
    search: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsPage {
    posts: Vec<BlogPost>,
    categories: Vec<SelectOption>,
    count: String,
    summary: String,
    filter: Filter,
    filters_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    empty: Option<EmptyState>,
}

fn category_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: ALL_CATEGORIES.to_string(),
        label: "All Categories".to_string(),
    }];
    options.extend(BlogCategory::SECTIONS.iter().map(|category| SelectOption {
        value: category.label().to_string(),
        label: category.label().to_string(),
    }));
    options
}

/// "1 post found", "4 posts found"
fn count_label(count: usize) -> String {
    let noun = if count == 1 { "post" } else { "posts" };
    format!("{} {} found", count, noun)
}

async fn insights(
    State(catalog): Shared,
    Query(query): Query<InsightsQuery>,
) -> ApiResult<Json<InsightsPage>> {
    let mut listing = ListingPage::new("blog posts");

    let ticket = listing.begin_load();
    let result = catalog.blog.get_all(&Filter::default()).await;
    listing.finish_load(ticket, result);
    if let Some(message) = listing.state().error() {
        return Err(ApiError::PageUnavailable(message.to_string()));
    }

    listing.set_filter(Filter {
        search: query.search,
        category: query.category,
    });

    let filters_active = listing.filter().is_active();
    let empty = listing.visible().is_empty().then_some(EmptyState {
        title: "No blog posts found",
        description: if filters_active {
            "Try adjusting your search terms or filters"
        } else {
            "Check back soon for the latest insights"
        },
    });
    Ok(Json(InsightsPage {
        posts: listing.visible().to_vec(),
        categories: category_options(),
        count: count_label(listing.visible().len()),
        summary: listing.summary(),
        filter: listing.filter().clone(),
        filters_active,
        empty,
    }))
}

#[derive(Debug, Serialize)]
pub struct PostPage {
    post: BlogPost,
    /// `post.content` parsed for rendering
    body: Vec<Block>,
    related: Vec<BlogPost>,
}

async fn insight(State(catalog): Shared, Path(id): Path<String>) -> ApiResult<Json<PostPage>> {
    let post = catalog.blog.get_by_id(Id::parse(&id)?).await?;
    let related = match catalog.blog.get_related(&post, RELATED_LIMIT).await {
        Ok(related) => related,
        Err(e) => {
            warn!("Could not load related posts for {}: {}", post.id, e);
            Vec::new()
        }
    };
    Ok(Json(PostPage {
        body: view::content::parse(&post.content),
        post,
        related,
    }))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::PageNotFound(uri.path().to_string())
}

/// Page routes at the site root
pub fn routes() -> Router<Arc<Catalog>> {
    Router::new()
        .route("/", get(home))
        .route("/products", get(products))
        .route("/capabilities", get(capabilities))
        .route("/quality", get(quality))
        .route("/about", get(about))
        .route("/contact", get(contact))
        .route("/insights", get(insights))
        .route("/insights/:id", get(insight))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_label() {
        assert_eq!(count_label(0), "0 posts found");
        assert_eq!(count_label(1), "1 post found");
        assert_eq!(count_label(7), "7 posts found");
    }

    #[test]
    fn test_category_options_lead_with_all() {
        let options = category_options();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].value, "all");
        assert_eq!(options[0].label, "All Categories");
        assert_eq!(options[4].value, "Quality");
    }
}
