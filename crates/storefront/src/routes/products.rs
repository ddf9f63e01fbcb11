//! Shop listing and product detail handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use luxestore_core::{Category, MAX_QUANTITY, Product};

use crate::catalog::{Listing, SortOrder};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Shop listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
}

/// A department link in the filter sidebar.
#[derive(Debug, Clone)]
pub struct DepartmentLink {
    pub href: String,
    pub label: &'static str,
    pub count: usize,
    pub active: bool,
}

/// Product listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop.html")]
pub struct ShopTemplate {
    pub page: PageContext,
    pub title: String,
    /// `?category=` value carried through the sort form.
    pub category_param: Option<String>,
    pub departments: Vec<DepartmentLink>,
    pub sort: SortOrder,
    pub sort_options: &'static [SortOrder],
    pub products: Vec<Product>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "product.html")]
pub struct ProductTemplate {
    pub page: PageContext,
    pub product: Product,
    pub related: Vec<Product>,
    pub max_quantity: u32,
}

/// Display the full listing, optionally filtered by `?category=`.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    let slug = query.category.clone().unwrap_or_default();
    let mut template = render_listing(&state, page, &slug, query.sort.as_deref());
    template.category_param = query.category.filter(|c| !c.is_empty());
    template
}

/// Display a listing pre-filtered by department (`/shop/men`).
#[instrument(skip(state, page))]
pub async fn category(
    State(state): State<AppState>,
    page: PageContext,
    Path(slug): Path<String>,
    Query(query): Query<ShopQuery>,
) -> impl IntoResponse {
    render_listing(&state, page, &slug, query.sort.as_deref())
}

fn render_listing(
    state: &AppState,
    page: PageContext,
    slug: &str,
    sort: Option<&str>,
) -> ShopTemplate {
    let catalog = state.catalog();
    let listing = Listing::from_slug(slug);
    let sort = SortOrder::from_query(sort);

    // Unknown departments show an empty listing rather than a 404
    let products = listing.map_or_else(Vec::new, |listing| {
        catalog.list(listing, sort).into_iter().cloned().collect()
    });
    if listing.is_none() {
        tracing::debug!(slug, "Unknown shop category");
    }

    let departments = std::iter::once(Listing::All)
        .chain(Category::ALL.into_iter().map(Listing::Department))
        .chain(std::iter::once(Listing::NewArrivals))
        .map(|l| DepartmentLink {
            href: match l {
                Listing::All => "/shop".to_string(),
                other => format!("/shop/{}", other.slug()),
            },
            label: l.title(),
            count: catalog.count(l),
            active: listing == Some(l),
        })
        .collect();

    ShopTemplate {
        page,
        title: listing.map_or("Shop", Listing::title).to_string(),
        category_param: None,
        departments,
        sort,
        sort_options: &SortOrder::ALL,
        products,
    }
}

/// Display product detail page.
///
/// # Errors
///
/// Returns `AppError::NotFound` when no product has this slug.
#[instrument(skip(state, page))]
pub async fn show(
    State(state): State<AppState>,
    page: PageContext,
    Path(slug): Path<String>,
) -> Result<ProductTemplate> {
    let catalog = state.catalog();
    let product = catalog
        .find_by_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("product {slug}")))?;

    Ok(ProductTemplate {
        page,
        related: catalog.related(product).into_iter().cloned().collect(),
        product: product.clone(),
        max_quantity: MAX_QUANTITY,
    })
}
