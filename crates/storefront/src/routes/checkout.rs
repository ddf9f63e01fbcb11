//! Checkout route handlers.
//!
//! The checkout form posts back to itself. Invalid submissions re-render the
//! form with the submitted values and one message per offending field; a
//! valid one renders the confirmation and empties the cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use luxestore_core::{Cart, FieldErrors, FormData, OrderSummary, PaymentMethod};

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::session;
use crate::services::orders::{Confirmation, OrderError};
use crate::state::AppState;

/// Countries offered in the shipping form; the first is the default.
pub const COUNTRIES: [&str; 7] = [
    "United States",
    "Canada",
    "United Kingdom",
    "Australia",
    "France",
    "Germany",
    "Japan",
];

/// A text input on the checkout form.
#[derive(Debug, Clone, Copy)]
pub struct InputField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub placeholder: &'static str,
    pub autocomplete: &'static str,
}

const fn input(
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    autocomplete: &'static str,
) -> InputField {
    InputField {
        name,
        label,
        kind,
        placeholder: "",
        autocomplete,
    }
}

/// Shipping inputs, in form order. `country` is a select rendered separately.
pub const SHIPPING_FIELDS: [InputField; 8] = [
    input("first_name", "First Name", "text", "given-name"),
    input("last_name", "Last Name", "text", "family-name"),
    input("email", "Email Address", "email", "email"),
    input("phone", "Phone Number", "tel", "tel"),
    input("address", "Street Address", "text", "street-address"),
    input("city", "City", "text", "address-level2"),
    input("state", "State / Province", "text", "address-level1"),
    input("zip_code", "ZIP / Postal Code", "text", "postal-code"),
];

/// Card inputs, only validated for credit card payments.
pub const CARD_FIELDS: [InputField; 4] = [
    InputField {
        placeholder: "1234 5678 9012 3456",
        ..input("card_number", "Card Number", "text", "cc-number")
    },
    input("card_name", "Name on Card", "text", "cc-name"),
    InputField {
        placeholder: "MM/YY",
        ..input("expiry", "Expiry Date", "text", "cc-exp")
    },
    InputField {
        placeholder: "123",
        ..input("cvv", "CVV", "text", "cc-csc")
    },
];

/// An option in the country select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryOption {
    pub name: &'static str,
    pub selected: bool,
}

/// Checkout page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout.html")]
pub struct CheckoutTemplate {
    pub page: PageContext,
    pub cart: Cart,
    pub summary: OrderSummary,
    pub form: FormData,
    pub errors: FieldErrors,
    pub payment: PaymentMethod,
    pub shipping_fields: &'static [InputField],
    pub card_fields: &'static [InputField],
    pub countries: &'static [&'static str],
}

impl CheckoutTemplate {
    fn new(
        page: PageContext,
        cart: Cart,
        summary: OrderSummary,
        form: FormData,
        errors: FieldErrors,
    ) -> Self {
        Self {
            page,
            payment: PaymentMethod::from_form(&form),
            cart,
            summary,
            form,
            errors,
            shipping_fields: &SHIPPING_FIELDS,
            card_fields: &CARD_FIELDS,
            countries: &COUNTRIES,
        }
    }

    /// Selected country, defaulting to the first option.
    #[must_use]
    pub fn country(&self) -> &str {
        self.form.present("country").unwrap_or(COUNTRIES[0])
    }

    /// Country select options with the current choice marked.
    #[must_use]
    pub fn country_options(&self) -> Vec<CountryOption> {
        let selected = self.country();
        self.countries
            .iter()
            .map(|&name| CountryOption {
                name,
                selected: name == selected,
            })
            .collect()
    }

    #[must_use]
    pub fn is_paypal(&self) -> bool {
        self.payment == PaymentMethod::PayPal
    }
}

/// Order confirmation template.
#[derive(Template, WebTemplate)]
#[template(path = "order_confirmation.html")]
pub struct ConfirmationTemplate {
    pub page: PageContext,
    pub confirmation: Confirmation,
}

/// Display the checkout form.
#[instrument(skip_all)]
pub async fn show(session: Session, page: PageContext) -> impl IntoResponse {
    let cart = session::load_cart(&session).await;
    let coupon = session::load_coupon(&session).await;
    let summary = OrderSummary::for_checkout(&cart, coupon);

    CheckoutTemplate::new(page, cart, summary, FormData::new(), FieldErrors::new())
}

/// Handle checkout form submission.
///
/// On success the cart and coupon are cleared before the confirmation is
/// rendered.
#[instrument(skip_all)]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    mut page: PageContext,
    Form(form): Form<FormData>,
) -> Result<Response> {
    let cart = session::load_cart(&session).await;
    let coupon = session::load_coupon(&session).await;

    match state.orders().place_order(&cart, coupon, &form).await {
        Ok(confirmation) => {
            session::clear_checkout(&session).await?;
            add_breadcrumb(
                "checkout",
                "Order placed",
                Some(&[("order_id", confirmation.order_id.as_str())]),
            );
            page.cart_count = 0;
            Ok(ConfirmationTemplate { page, confirmation }.into_response())
        }
        Err(OrderError::EmptyCart) => Ok(Redirect::to("/checkout").into_response()),
        Err(OrderError::Invalid(errors)) => {
            let summary = OrderSummary::for_checkout(&cart, coupon);
            Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate::new(page, cart, summary, form, errors),
            )
                .into_response())
        }
    }
}
