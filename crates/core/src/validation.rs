//! Multi-field form validation.
//!
//! Each validator takes the submitted form as a flat name → value map and
//! returns one message per failing field. An empty [`FieldErrors`] means
//! the form is acceptable. Validation never fails as a `Result`; bad input
//! is reported inline next to the field.
//!
//! A field is *missing* when it is absent or blank after trimming.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::Email;

/// Stricter shape used by the newsletter box: no `@` inside the parts.
static NEWSLETTER_EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid regex")
});

static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{16}$").expect("Invalid regex"));

static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}/\d{2}$").expect("Invalid regex"));

static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{3,4}$").expect("Invalid regex"));

pub const REQUIRED: &str = "This field is required";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Fields every checkout must fill in.
pub const CHECKOUT_REQUIRED_FIELDS: [&str; 9] = [
    "first_name",
    "last_name",
    "email",
    "phone",
    "address",
    "city",
    "state",
    "zip_code",
    "country",
];

/// Minimum password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A submitted form: field name → raw value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(BTreeMap<String, String>);

impl FormData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value of a field, if submitted.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Raw value, or `""` when absent. Handy for re-filling form inputs.
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or_default()
    }

    /// Trimmed value, or `None` when absent or blank.
    #[must_use]
    pub fn present(&self, field: &str) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether a checkbox-style field was ticked.
    #[must_use]
    pub fn is_checked(&self, field: &str) -> bool {
        matches!(
            self.present(field).map(str::to_ascii_lowercase).as_deref(),
            Some("on" | "true" | "1" | "yes")
        )
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }

    /// Drop a field, e.g. so a password is never echoed back into a form.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Per-field error messages. At most one message per field; the first one
/// recorded wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `field` unless it already has one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Payment choice on the checkout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Credit,
    PayPal,
}

impl PaymentMethod {
    /// Read the `payment_method` field; anything but `paypal` is card.
    #[must_use]
    pub fn from_form(form: &FormData) -> Self {
        match form.present("payment_method") {
            Some(v) if v.eq_ignore_ascii_case("paypal") => Self::PayPal,
            _ => Self::Credit,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::PayPal => "paypal",
        }
    }
}

fn check_email(form: &FormData, errors: &mut FieldErrors, missing: &str) {
    match form.present("email") {
        None => errors.insert("email", missing),
        Some(email) if !Email::is_well_formed(email) => errors.insert("email", INVALID_EMAIL),
        Some(_) => {}
    }
}

/// Validate the checkout form.
#[must_use]
pub fn validate_checkout(form: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in CHECKOUT_REQUIRED_FIELDS {
        if form.present(field).is_none() {
            errors.insert(field, REQUIRED);
        }
    }
    if let Some(email) = form.present("email")
        && !Email::is_well_formed(email)
    {
        errors.insert("email", INVALID_EMAIL);
    }

    if PaymentMethod::from_form(form) == PaymentMethod::Credit {
        match form.present("card_number") {
            None => errors.insert("card_number", "Card number is required"),
            Some(number) => {
                let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
                if !CARD_NUMBER_RE.is_match(&digits) {
                    errors.insert("card_number", "Please enter a valid 16-digit card number");
                }
            }
        }

        if form.present("card_name").is_none() {
            errors.insert("card_name", "Name on card is required");
        }

        match form.present("expiry") {
            None => errors.insert("expiry", "Expiry date is required"),
            Some(expiry) if !EXPIRY_RE.is_match(expiry) => {
                errors.insert("expiry", "Please use MM/YY format");
            }
            Some(_) => {}
        }

        match form.present("cvv") {
            None => errors.insert("cvv", "CVV is required"),
            Some(cvv) if !CVV_RE.is_match(cvv) => errors.insert("cvv", "Please enter a valid CVV"),
            Some(_) => {}
        }
    }

    errors
}

/// Validate the sign-in form.
#[must_use]
pub fn validate_login(form: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_email(form, &mut errors, "Email is required");
    if form.present("password").is_none() {
        errors.insert("password", "Password is required");
    }
    errors
}

/// Validate the registration form.
#[must_use]
pub fn validate_register(form: &FormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if form.present("name").is_none() {
        errors.insert("name", "Name is required");
    }
    check_email(form, &mut errors, "Email is required");

    // Passwords are compared as typed; whitespace is significant.
    let password = form.get("password").filter(|p| !p.is_empty());
    match password {
        None => errors.insert("password", "Password is required"),
        Some(p) if p.chars().count() < MIN_PASSWORD_LENGTH => {
            errors.insert("password", "Password must be at least 8 characters");
        }
        Some(_) => {}
    }

    match form.get("confirm_password").filter(|c| !c.is_empty()) {
        None => errors.insert("confirm_password", "Please confirm your password"),
        Some(confirm) if Some(confirm) != password => {
            errors.insert("confirm_password", "Passwords do not match");
        }
        Some(_) => {}
    }

    if !form.is_checked("agree_terms") {
        errors.insert("agree_terms", "You must agree to the Terms of Service");
    }

    errors
}

/// Validate a newsletter sign-up address.
///
/// # Errors
///
/// Returns the inline message to show under the input.
pub fn validate_newsletter_email(email: &str) -> Result<(), &'static str> {
    if NEWSLETTER_EMAIL_RE.is_match(email.trim()) {
        Ok(())
    } else {
        Err(INVALID_EMAIL)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn valid_checkout() -> FormData {
        [
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("email", "jane@example.com"),
            ("phone", "555-0100"),
            ("address", "1 Main St"),
            ("city", "Springfield"),
            ("state", "IL"),
            ("zip_code", "62701"),
            ("country", "United States"),
            ("payment_method", "credit"),
            ("card_number", "4242 4242 4242 4242"),
            ("card_name", "Jane Doe"),
            ("expiry", "12/27"),
            ("cvv", "123"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_valid_checkout_passes() {
        assert!(validate_checkout(&valid_checkout()).is_empty());
    }

    #[test]
    fn test_checkout_four_digit_cvv_and_unspaced_card() {
        let mut form = valid_checkout();
        form.insert("cvv", "1234");
        form.insert("card_number", "4242424242424242");
        assert!(validate_checkout(&form).is_empty());
    }

    #[test]
    fn test_checkout_flags_each_missing_required_field() {
        for field in CHECKOUT_REQUIRED_FIELDS {
            let mut form = valid_checkout();
            form.insert(field, "   ");
            let errors = validate_checkout(&form);
            assert_eq!(errors.get(field), Some(REQUIRED), "field {field}");
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn test_checkout_rejects_malformed_email() {
        let mut form = valid_checkout();
        form.insert("email", "jane.example.com");
        assert_eq!(validate_checkout(&form).get("email"), Some(INVALID_EMAIL));
    }

    #[test]
    fn test_checkout_card_rules() {
        let cases = [
            ("card_number", "", "Card number is required"),
            ("card_number", "4242 4242 4242", "Please enter a valid 16-digit card number"),
            ("card_number", "4242-4242-4242-4242", "Please enter a valid 16-digit card number"),
            ("card_name", "", "Name on card is required"),
            ("expiry", "", "Expiry date is required"),
            ("expiry", "1227", "Please use MM/YY format"),
            ("expiry", "1/27", "Please use MM/YY format"),
            ("cvv", "", "CVV is required"),
            ("cvv", "12", "Please enter a valid CVV"),
            ("cvv", "12345", "Please enter a valid CVV"),
        ];
        for (field, value, message) in cases {
            let mut form = valid_checkout();
            form.insert(field, value);
            assert_eq!(validate_checkout(&form).get(field), Some(message), "{field}={value:?}");
        }
    }

    #[test]
    fn test_checkout_defaults_to_card_payment() {
        let mut form = valid_checkout();
        form.remove("payment_method");
        form.remove("cvv");
        assert_eq!(validate_checkout(&form).get("cvv"), Some("CVV is required"));
    }

    #[test]
    fn test_checkout_paypal_skips_card_fields() {
        let mut form = valid_checkout();
        form.insert("payment_method", "paypal");
        for field in ["card_number", "card_name", "expiry", "cvv"] {
            form.remove(field);
        }
        assert!(validate_checkout(&form).is_empty());
    }

    #[test]
    fn test_login() {
        let empty = validate_login(&FormData::new());
        assert_eq!(empty.get("email"), Some("Email is required"));
        assert_eq!(empty.get("password"), Some("Password is required"));

        let bad: FormData = [("email", "nope"), ("password", "x")].into_iter().collect();
        let errors = validate_login(&bad);
        assert_eq!(errors.get("email"), Some(INVALID_EMAIL));
        assert!(!errors.has("password"));

        let good: FormData = [("email", "demo@luxestore.com"), ("password", "password123")]
            .into_iter()
            .collect();
        assert!(validate_login(&good).is_empty());
    }

    fn registration() -> FormData {
        [
            ("name", "Jane Doe"),
            ("email", "jane@example.com"),
            ("password", "correcthorse"),
            ("confirm_password", "correcthorse"),
            ("agree_terms", "on"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_register_valid() {
        assert!(validate_register(&registration()).is_empty());
    }

    #[test]
    fn test_register_passwords_are_not_trimmed() {
        let mut form = registration();
        form.insert("password", "        ");
        form.insert("confirm_password", "        ");
        let errors = validate_register(&form);
        assert!(!errors.has("password"));
        assert!(!errors.has("confirm_password"));

        let mut form = registration();
        form.insert("password", "abcdefgh");
        form.insert("confirm_password", "abcdefgh ");
        assert_eq!(
            validate_register(&form).get("confirm_password"),
            Some("Passwords do not match")
        );

        let mut form = registration();
        form.insert("password", " abcdef ");
        form.insert("confirm_password", " abcdef ");
        assert!(validate_register(&form).is_empty());
    }

    #[test]
    fn test_register_rules() {
        let mut form = registration();
        form.insert("password", "short");
        form.insert("confirm_password", "short");
        assert_eq!(
            validate_register(&form).get("password"),
            Some("Password must be at least 8 characters")
        );

        let mut form = registration();
        form.insert("confirm_password", "different1");
        assert_eq!(
            validate_register(&form).get("confirm_password"),
            Some("Passwords do not match")
        );

        let mut form = registration();
        form.remove("confirm_password");
        form.remove("agree_terms");
        form.insert("name", " ");
        let errors = validate_register(&form);
        assert_eq!(errors.get("confirm_password"), Some("Please confirm your password"));
        assert_eq!(
            errors.get("agree_terms"),
            Some("You must agree to the Terms of Service")
        );
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn test_newsletter_email() {
        assert!(validate_newsletter_email("reader@example.com").is_ok());
        assert_eq!(validate_newsletter_email("reader@example"), Err(INVALID_EMAIL));
        assert_eq!(validate_newsletter_email("a@b@c.com"), Err(INVALID_EMAIL));
        assert_eq!(validate_newsletter_email(""), Err(INVALID_EMAIL));
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.insert("email", "first");
        errors.insert("email", "second");
        assert_eq!(errors.get("email"), Some("first"));
        assert_eq!(errors.len(), 1);
    }
}
