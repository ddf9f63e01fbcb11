//! Account page handlers.
//!
//! Anonymous visitors get a sign-in prompt instead of a redirect; signed-in
//! users see a tabbed page selected with `?tab=`.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use luxestore_core::{Address, Order, User};

use crate::content::{
    self, NOTIFICATION_PREFERENCES, PRIVACY_PREFERENCES, Preference, WISHLIST, WishlistItem,
};
use crate::filters;
use crate::middleware::PageContext;

/// Account page tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountTab {
    #[default]
    Profile,
    Orders,
    Wishlist,
    Settings,
}

impl AccountTab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Orders, Self::Wishlist, Self::Settings];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Orders => "orders",
            Self::Wishlist => "wishlist",
            Self::Settings => "settings",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Orders => "Orders",
            Self::Wishlist => "Wishlist",
            Self::Settings => "Settings",
        }
    }

    /// Parse `?tab=`; unknown values show the profile.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value
            .and_then(|v| Self::ALL.into_iter().find(|tab| tab.as_str() == v))
            .unwrap_or_default()
    }
}

/// Account query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct AccountQuery {
    pub tab: Option<String>,
}

/// Account page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub page: PageContext,
    pub user: User,
    pub tab: AccountTab,
    pub tabs: &'static [AccountTab],
    pub shipping_address: Address,
    pub orders: Vec<Order>,
    pub wishlist: &'static [WishlistItem],
    pub notifications: &'static [Preference],
    pub privacy: &'static [Preference],
}

/// Sign-in prompt shown to anonymous visitors.
#[derive(Template, WebTemplate)]
#[template(path = "account/access.html")]
pub struct AccountAccessTemplate {
    pub page: PageContext,
}

/// Display the account page.
#[instrument(skip(page))]
pub async fn index(page: PageContext, Query(query): Query<AccountQuery>) -> Response {
    let Some(user) = page.user.clone() else {
        return AccountAccessTemplate { page }.into_response();
    };

    let tab = AccountTab::from_query(query.tab.as_deref());
    AccountTemplate {
        page,
        shipping_address: user
            .shipping_address
            .clone()
            .unwrap_or_else(content::default_address),
        user,
        tab,
        tabs: &AccountTab::ALL,
        orders: content::account_orders(),
        wishlist: &WISHLIST,
        notifications: &NOTIFICATION_PREFERENCES,
        privacy: &PRIVACY_PREFERENCES,
    }
    .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_from_query() {
        assert_eq!(AccountTab::from_query(Some("orders")), AccountTab::Orders);
        assert_eq!(AccountTab::from_query(Some("wishlist")), AccountTab::Wishlist);
        assert_eq!(AccountTab::from_query(Some("bogus")), AccountTab::Profile);
        assert_eq!(AccountTab::from_query(None), AccountTab::Profile);
    }
}
