//! Authentication route handlers.
//!
//! Sign-in and registration are mocks: after the forms validate, any
//! credentials are accepted and a fabricated user is stored in the session.

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

use luxestore_core::validation::{INVALID_EMAIL, validate_login, validate_register};
use luxestore_core::{FieldErrors, FormData, User};

use crate::error::Result;
use crate::filters;
use crate::middleware::{PageContext, clear_current_user, set_current_user};
use crate::models::{Flash, session};
use crate::services::auth::{AuthError, DEMO_EMAIL, DEMO_PASSWORD};
use crate::state::AppState;

/// Where users land after signing in or registering.
const AFTER_SIGN_IN: &str = "/account";

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub page: PageContext,
    pub form: FormData,
    pub errors: FieldErrors,
    pub demo_email: &'static str,
    pub demo_password: &'static str,
}

impl LoginTemplate {
    fn new(page: PageContext, form: FormData, errors: FieldErrors) -> Self {
        Self {
            page,
            form,
            errors,
            demo_email: DEMO_EMAIL,
            demo_password: DEMO_PASSWORD,
        }
    }
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub page: PageContext,
    pub form: FormData,
    pub errors: FieldErrors,
}

/// Drop secrets before a form is echoed back into a page.
fn without_passwords(mut form: FormData) -> FormData {
    form.remove("password");
    form.remove("confirm_password");
    form
}

/// Map a service rejection onto the form field it concerns.
fn field_error(error: &AuthError) -> FieldErrors {
    let mut errors = FieldErrors::new();
    match error {
        AuthError::InvalidEmail(_) => errors.insert("email", INVALID_EMAIL),
        AuthError::MissingName => errors.insert("name", "Name is required"),
    }
    errors
}

async fn sign_in(session: &Session, user: &User) -> Result<Response> {
    set_current_user(session, user).await?;
    Ok(Redirect::to(AFTER_SIGN_IN).into_response())
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
///
/// Signed-in visitors go straight to their account.
#[instrument(skip_all)]
pub async fn login_page(page: PageContext) -> Response {
    if page.user.is_some() {
        return Redirect::to(AFTER_SIGN_IN).into_response();
    }
    LoginTemplate::new(page, FormData::new(), FieldErrors::new()).into_response()
}

/// Handle login form submission.
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<FormData>,
) -> Result<Response> {
    let errors = validate_login(&form);
    if !errors.is_empty() {
        let template = LoginTemplate::new(page, without_passwords(form), errors);
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response());
    }

    let email = form.value("email").trim();
    match state.auth().login(email, form.value("password")).await {
        Ok(user) => sign_in(&session, &user).await,
        Err(e) => {
            tracing::warn!(error = %e, "Sign-in rejected");
            let template = LoginTemplate::new(page, without_passwords(form), field_error(&e));
            Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
        }
    }
}

/// One-click sign-in as the demo account.
#[instrument(skip_all)]
pub async fn login_demo(State(state): State<AppState>, session: Session) -> Result<Response> {
    match state.auth().login_demo().await {
        Ok(user) => sign_in(&session, &user).await,
        Err(e) => {
            tracing::error!(error = %e, "Demo sign-in failed");
            session::set_flash(&session, Flash::error("Demo sign-in is unavailable")).await?;
            Ok(Redirect::to("/login").into_response())
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
#[instrument(skip_all)]
pub async fn register_page(page: PageContext) -> Response {
    if page.user.is_some() {
        return Redirect::to(AFTER_SIGN_IN).into_response();
    }
    RegisterTemplate {
        page,
        form: FormData::new(),
        errors: FieldErrors::new(),
    }
    .into_response()
}

/// Handle registration form submission.
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    page: PageContext,
    Form(form): Form<FormData>,
) -> Result<Response> {
    let mut errors = validate_register(&form);

    if errors.is_empty() {
        let email = form.value("email").trim();
        match state
            .auth()
            .register(form.value("name"), email, form.value("password"))
            .await
        {
            Ok(user) => return sign_in(&session, &user).await,
            Err(e) => {
                tracing::warn!(error = %e, "Registration rejected");
                errors = field_error(&e);
            }
        }
    }

    let template = RegisterTemplate {
        page,
        form: without_passwords(form),
        errors,
    };
    Ok((StatusCode::UNPROCESSABLE_ENTITY, template).into_response())
}

// =============================================================================
// Logout
// =============================================================================

/// Sign out. The cart is kept.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    session::set_flash(&session, Flash::success("You have been signed out.")).await?;
    Ok(Redirect::to("/"))
}
