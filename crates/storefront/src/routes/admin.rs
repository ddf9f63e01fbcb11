//! Admin dashboard handlers.
//!
//! The dashboard is a read-only showcase over mock figures and the live
//! catalog. It is not gated behind a role check.

use std::str::FromStr;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::instrument;

use luxestore_core::{OrderStatus, Product};

use crate::content::{
    self, ADMIN_STATS, AdminOrder, AdminStat, Customer, TOP_PRODUCTS, TOTAL_ORDERS, TopProduct,
};
use crate::filters;
use crate::middleware::PageContext;
use crate::state::AppState;

/// Admin sidebar tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Products,
    Orders,
    Customers,
    Settings,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Products,
        Self::Orders,
        Self::Customers,
        Self::Settings,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Customers => "Customers",
            Self::Settings => "Settings",
        }
    }

    /// Parse `?tab=`; unknown values show the dashboard.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::ALL.into_iter().find(|tab| tab.as_str() == v))
            .unwrap_or_default()
    }
}

/// Admin query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub tab: Option<String>,
    /// Order status filter; blank or `all` shows every order.
    pub status: Option<String>,
    /// Customer search text.
    pub q: Option<String>,
}

/// Admin dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub page: PageContext,
    pub tab: AdminTab,
    pub tabs: &'static [AdminTab],
    pub stats: &'static [AdminStat],
    pub recent_orders: Vec<AdminOrder>,
    pub top_products: &'static [TopProduct],
    pub products: Vec<Product>,
    pub orders: Vec<AdminOrder>,
    pub statuses: &'static [OrderStatus],
    pub status: Option<OrderStatus>,
    pub total_orders: usize,
    pub customers: Vec<Customer>,
    pub query: String,
}

impl AdminTemplate {
    /// `?status=` value currently selected in the filter.
    #[must_use]
    pub fn status_value(&self) -> &'static str {
        self.status.map_or("all", OrderStatus::as_str)
    }
}

/// Display the admin dashboard.
#[instrument(skip(state, page))]
pub async fn index(
    State(state): State<AppState>,
    page: PageContext,
    Query(query): Query<AdminQuery>,
) -> impl IntoResponse {
    let tab = AdminTab::from_query(query.tab.as_deref());
    let status = query
        .status
        .as_deref()
        .and_then(|s| OrderStatus::from_str(s).ok());
    let search = query.q.unwrap_or_default();

    AdminTemplate {
        page,
        tab,
        tabs: &AdminTab::ALL,
        stats: &ADMIN_STATS,
        recent_orders: content::admin_orders(None),
        top_products: &TOP_PRODUCTS,
        products: state.catalog().all().to_vec(),
        orders: content::admin_orders(status),
        statuses: &OrderStatus::ALL,
        status,
        total_orders: TOTAL_ORDERS,
        customers: content::search_customers(&search),
        query: search,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(AdminTab::from_query(Some("customers")), AdminTab::Customers);
        assert_eq!(AdminTab::from_query(Some("")), AdminTab::Dashboard);
        assert_eq!(AdminTab::from_query(None), AdminTab::Dashboard);
    }
}
