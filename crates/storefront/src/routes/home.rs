//! Home page and newsletter sign-up.

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

use luxestore_core::Product;

use crate::content::{CATEGORY_TILES, CategoryTile, HERO_SLIDES, HeroSlide, TESTIMONIALS, Testimonial};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::PageContext;
use crate::models::{Flash, session};
use crate::state::AppState;

/// Shown after a successful sign-up.
pub const NEWSLETTER_SUCCESS: &str =
    "Thank you for subscribing! We've sent a confirmation email to your inbox.";

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub page: PageContext,
    pub slides: &'static [HeroSlide],
    pub categories: &'static [CategoryTile],
    pub featured: Vec<Product>,
    pub new_arrivals: Vec<Product>,
    pub testimonials: &'static [Testimonial],
}

/// Newsletter form data.
#[derive(Debug, Deserialize)]
pub struct NewsletterForm {
    #[serde(default)]
    pub email: String,
}

/// Display the home page.
#[instrument(skip_all)]
pub async fn home(State(state): State<AppState>, page: PageContext) -> impl IntoResponse {
    let catalog = state.catalog();

    HomeTemplate {
        page,
        slides: &HERO_SLIDES,
        categories: &CATEGORY_TILES,
        featured: catalog.featured().into_iter().cloned().collect(),
        new_arrivals: catalog.new_arrivals().into_iter().cloned().collect(),
        testimonials: &TESTIMONIALS,
    }
}

/// Handle the newsletter sign-up form.
///
/// The outcome is shown as a notice on the home page.
#[instrument(skip_all)]
pub async fn subscribe(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<NewsletterForm>,
) -> Result<Redirect> {
    let flash = match state.newsletter().subscribe(&form.email).await {
        Ok(()) => {
            add_breadcrumb("newsletter", "Subscribed", None);
            Flash::success(NEWSLETTER_SUCCESS)
        }
        Err(message) => Flash::error(message),
    };

    session::set_flash(&session, flash).await?;
    Ok(Redirect::to("/#newsletter"))
}
