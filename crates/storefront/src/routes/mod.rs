//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! POST /newsletter             - Newsletter sign-up
//!
//! # Shop
//! GET  /shop                   - Product listing (?category=&sort=)
//! GET  /shop/{category}        - Listing for one department
//! GET  /product/{slug}         - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add to cart
//! POST /cart/update            - Set a line's quantity
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Remove every line
//! POST /cart/coupon            - Apply a coupon code
//! GET  /cart/count             - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout               - Checkout form
//! POST /checkout               - Place order
//!
//! # Auth
//! GET  /login                  - Login page
//! POST /login                  - Login action
//! POST /login/demo             - Demo account login
//! GET  /register               - Register page
//! POST /register               - Register action
//! POST /logout                 - Logout action
//!
//! # Account & admin
//! GET  /account                - Account (?tab=)
//! GET  /admin                  - Admin dashboard (?tab=&status=&q=)
//! ```

pub mod account;
pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the shop routes router.
pub fn shop_routes() -> Router<AppState> {
    Router::new()
        .route("/shop", get(products::index))
        .route("/shop/{category}", get(products::category))
        .route("/product/{slug}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/coupon", post(cart::apply_coupon))
        .route("/count", get(cart::count))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/login/demo", post(auth::login_demo))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/newsletter", post(home::subscribe))
        .merge(shop_routes())
        .nest("/cart", cart_routes())
        .route(
            "/checkout",
            get(checkout::show).post(checkout::place_order),
        )
        .merge(auth_routes())
        .route("/account", get(account::index))
        .route("/admin", get(admin::index))
}
