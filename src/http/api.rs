//! JSON CRUD API over the entity stores

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use crate::contact;
use crate::filter::Filter;
use crate::model::{BlogPost, Entity, Id, Inquiry, InquirySubmission, Product};
use crate::store::blog::RECENT_LIMIT;
use crate::store::{BlogStore, Catalog, FixtureStore, InquiryStore, Repository};
use crate::util::time;
use crate::view::spec_sheet;

type StoreState<T> = State<Arc<FixtureStore<T>>>;

/// `GET|POST /` and `GET|PATCH|DELETE /:id` for one fixture store
fn crud_routes<T>() -> Router<Arc<FixtureStore<T>>>
where
    T: Entity + Serialize + DeserializeOwned,
    T::Patch: DeserializeOwned,
{
    Router::new()
        .route("/", get(list::<T>).post(create::<T>))
        .route(
            "/:id",
            get(fetch::<T>).patch(update::<T>).delete(remove::<T>),
        )
}

async fn list<T>(State(store): StoreState<T>) -> ApiResult<Json<Vec<T>>>
where
    T: Entity + Serialize,
{
    Ok(Json(store.get_all().await?))
}

async fn fetch<T>(State(store): StoreState<T>, Path(id): Path<String>) -> ApiResult<Json<T>>
where
    T: Entity + Serialize,
{
    Ok(Json(store.get_by_id(Id::parse(&id)?).await?))
}

async fn create<T>(
    State(store): StoreState<T>,
    Json(record): Json<T>,
) -> ApiResult<(StatusCode, Json<T>)>
where
    T: Entity + Serialize + DeserializeOwned,
{
    Ok((StatusCode::CREATED, Json(store.create(record).await?)))
}

async fn update<T>(
    State(store): StoreState<T>,
    Path(id): Path<String>,
    Json(patch): Json<T::Patch>,
) -> ApiResult<Json<T>>
where
    T: Entity + Serialize,
    T::Patch: DeserializeOwned,
{
    Ok(Json(store.update(Id::parse(&id)?, patch).await?))
}

async fn remove<T>(State(store): StoreState<T>, Path(id): Path<String>) -> ApiResult<Json<T>>
where
    T: Entity + Serialize,
{
    Ok(Json(store.delete(Id::parse(&id)?).await?))
}

async fn product_categories(State(store): StoreState<Product>) -> ApiResult<Json<Vec<String>>> {
    Ok(Json(store.get_categories().await?))
}

async fn products_in_category(
    State(store): StoreState<Product>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(store.get_by_category(&category).await?))
}

/// Specification sheet as a text download
async fn product_spec_sheet(
    State(store): StoreState<Product>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let product = store.get_by_id(Id::parse(&id)?).await?;
    let sheet = spec_sheet(&product, time::today())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", sheet.file_name),
            ),
        ],
        sheet.body,
    )
        .into_response())
}

#[derive(Debug, Deserialize)]
struct BlogQuery {
    search: Option<String>,
    category: Option<String>,
}

impl From<BlogQuery> for Filter {
    fn from(query: BlogQuery) -> Self {
        Filter {
            search: query.search,
            category: query.category,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecentQuery {
    limit: Option<usize>,
}

async fn blog_list(
    State(blog): State<Arc<BlogStore>>,
    Query(query): Query<BlogQuery>,
) -> ApiResult<Json<Vec<BlogPost>>> {
    Ok(Json(blog.get_all(&query.into()).await?))
}

async fn blog_post(
    State(blog): State<Arc<BlogStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<BlogPost>> {
    Ok(Json(blog.get_by_id(Id::parse(&id)?).await?))
}

async fn blog_category(
    State(blog): State<Arc<BlogStore>>,
    Path(category): Path<String>,
) -> ApiResult<Json<Vec<BlogPost>>> {
    Ok(Json(blog.get_by_category(&category).await?))
}

async fn blog_featured(State(blog): State<Arc<BlogStore>>) -> ApiResult<Json<Vec<BlogPost>>> {
    Ok(Json(blog.get_featured().await?))
}

async fn blog_recent(
    State(blog): State<Arc<BlogStore>>,
    Query(query): Query<RecentQuery>,
) -> ApiResult<Json<Vec<BlogPost>>> {
    Ok(Json(
        blog.get_recent(query.limit.unwrap_or(RECENT_LIMIT)).await?,
    ))
}

async fn submit_inquiry(
    State(inquiries): State<Arc<InquiryStore>>,
    Json(submission): Json<InquirySubmission>,
) -> ApiResult<(StatusCode, Json<Inquiry>)> {
    contact::validate(&submission).map_err(ApiError::Validation)?;
    Ok((StatusCode::CREATED, Json(inquiries.submit(submission).await?)))
}

async fn list_inquiries(State(inquiries): State<Arc<InquiryStore>>) -> ApiResult<Json<Vec<Inquiry>>> {
    Ok(Json(inquiries.get_all().await?))
}

async fn fetch_inquiry(
    State(inquiries): State<Arc<InquiryStore>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Inquiry>> {
    Ok(Json(inquiries.get_by_id(Id::parse(&id)?).await?))
}

/// Routes mounted under `/api`
pub fn routes(catalog: &Catalog) -> Router {
    let products = crud_routes::<Product>()
        .route("/categories", get(product_categories))
        .route("/category/:category", get(products_in_category))
        .route("/:id/specifications.txt", get(product_spec_sheet))
        .with_state(catalog.products.clone());

    let blog = Router::new()
        .route("/", get(blog_list))
        .route("/featured", get(blog_featured))
        .route("/recent", get(blog_recent))
        .route("/category/:category", get(blog_category))
        .route("/:id", get(blog_post))
        .with_state(catalog.blog.clone());

    let inquiries = Router::new()
        .route("/", get(list_inquiries).post(submit_inquiry))
        .route("/:id", get(fetch_inquiry))
        .with_state(catalog.inquiries.clone());

    Router::new()
        .nest("/products", products)
        .nest(
            "/capabilities",
            crud_routes().with_state(catalog.capabilities.clone()),
        )
        .nest(
            "/certifications",
            crud_routes().with_state(catalog.certifications.clone()),
        )
        .nest("/blog", blog)
        .nest("/inquiries", inquiries)
}
