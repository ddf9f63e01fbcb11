//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every mutation is a form POST
//! that loads the cart, applies one [`CartAction`], stores it back and
//! redirects (post/redirect/get), so a refresh never repeats an add.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use luxestore_core::{Cart, CartAction, CartItem, Coupon, OrderSummary, ProductId, VariantKey};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::{Flash, session};
use crate::state::AppState;

/// Shown when `LUXE20` is accepted.
pub const COUPON_APPLIED: &str = "Coupon applied successfully!";

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
    pub quantity: Option<u32>,
    pub color: Option<String>,
    pub size: Option<String>,
    /// Page to return to; defaults to the cart.
    pub redirect_to: Option<String>,
}

/// Identifies one cart line.
#[derive(Debug, Deserialize)]
pub struct LineForm {
    pub product_id: String,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl LineForm {
    fn key(self) -> VariantKey {
        VariantKey::new(ProductId::new(self.product_id), self.color, self.size)
    }
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: String,
    pub color: Option<String>,
    pub size: Option<String>,
    pub quantity: u32,
}

/// Coupon form data.
#[derive(Debug, Deserialize)]
pub struct CouponForm {
    #[serde(default)]
    pub code: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart.html")]
pub struct CartTemplate {
    pub page: PageContext,
    pub cart: Cart,
    pub summary: OrderSummary,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Only same-site paths are accepted as redirect targets.
fn local_path(target: Option<&str>) -> Option<&str> {
    target.filter(|t| t.starts_with('/') && !t.starts_with("//") && !t.contains('\\'))
}

/// Load the cart, apply one action and store the result.
async fn update_cart(session: &Session, action: CartAction) -> Result<Cart> {
    let cart = luxestore_core::reduce(session::load_cart(session).await, action);
    session::save_cart(session, &cart).await?;
    Ok(cart)
}

/// Display cart page.
#[instrument(skip_all)]
pub async fn show(session: Session, page: PageContext) -> impl IntoResponse {
    let cart = session::load_cart(&session).await;
    let coupon = session::load_coupon(&session).await;

    CartTemplate {
        page,
        summary: OrderSummary::for_cart(&cart, coupon),
        cart,
    }
}

/// Add item to cart.
///
/// Name, price and image come from the catalog, never from the form.
///
/// # Errors
///
/// Returns `AppError::NotFound` for an unknown product and
/// `AppError::BadRequest` for a color or size the product does not offer.
#[instrument(skip(state, session))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let product = state
        .catalog()
        .find_by_id(&ProductId::new(form.product_id.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("product {}", form.product_id)))?;

    let key = VariantKey::new(product.id.clone(), form.color, form.size);
    if let Some(color) = &key.color
        && !product.colors.contains(color)
    {
        return Err(AppError::BadRequest(format!("unknown color {color}")));
    }
    if let Some(size) = &key.size
        && !product.sizes.contains(size)
    {
        return Err(AppError::BadRequest(format!("unknown size {size}")));
    }

    let item = CartItem {
        id: key.id,
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
        quantity: form.quantity.unwrap_or(1),
        color: key.color,
        size: key.size,
    };
    update_cart(&session, CartAction::Add(item)).await?;

    add_breadcrumb("cart", "Added to cart", Some(&[("product_id", product.id.as_str())]));
    session::set_flash(&session, Flash::success(format!("{} added to your cart", product.name)))
        .await?;

    let target = local_path(form.redirect_to.as_deref()).unwrap_or("/cart");
    Ok(Redirect::to(target))
}

/// Update cart item quantity.
///
/// Quantities below 1 are ignored (use remove instead); larger ones are
/// capped at `MAX_QUANTITY`.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let key = VariantKey::new(ProductId::new(form.product_id), form.color, form.size);
    let action = CartAction::SetLineQuantity(key, form.quantity);
    update_cart(&session, action).await?;
    Ok(Redirect::to("/cart"))
}

/// Remove item from cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<LineForm>) -> Result<Redirect> {
    update_cart(&session, CartAction::RemoveLine(form.key())).await?;
    Ok(Redirect::to("/cart"))
}

/// Remove every item from the cart.
#[instrument(skip_all)]
pub async fn clear(session: Session) -> Result<Redirect> {
    update_cart(&session, CartAction::Clear).await?;
    Ok(Redirect::to("/cart"))
}

/// Apply a coupon code.
///
/// An unrecognised code also removes any coupon applied earlier.
#[instrument(skip(session))]
pub async fn apply_coupon(session: Session, Form(form): Form<CouponForm>) -> Result<Redirect> {
    let (coupon, flash) = match Coupon::parse(&form.code) {
        Ok(coupon) => (Some(coupon), Flash::success(COUPON_APPLIED)),
        Err(e) => (None, Flash::error(e.to_string())),
    };

    session::save_coupon(&session, coupon).await?;
    session::set_flash(&session, flash).await?;
    Ok(Redirect::to("/cart"))
}

/// Get cart count badge fragment.
#[instrument(skip_all)]
pub async fn count(session: Session) -> impl IntoResponse {
    CartCountTemplate {
        count: session::load_cart(&session).await.item_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_target_must_be_local() {
        assert_eq!(local_path(Some("/product/silk-blouse")), Some("/product/silk-blouse"));
        assert_eq!(local_path(Some("/")), Some("/"));
        assert_eq!(local_path(Some("//evil.example")), None);
        assert_eq!(local_path(Some("https://evil.example")), None);
        assert_eq!(local_path(Some("/\\evil.example")), None);
        assert_eq!(local_path(None), None);
    }

    #[test]
    fn test_line_form_key_ignores_blank_variants() {
        let form = LineForm {
            product_id: "3".to_string(),
            color: Some(String::new()),
            size: None,
        };
        let key = form.key();
        assert_eq!(key.id, ProductId::new("3"));
        assert!(key.color.is_none());
    }
}
