//! Storefront user and address types.

use serde::{Deserialize, Serialize};

use super::{Email, UserId, UserRole};

/// A signed-in shopper.
///
/// There is no account database: a `User` is fabricated at sign-in or
/// registration and lives only in the visitor's session until logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
}

impl User {
    /// Whether this user may see staff-only pages.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Up to two uppercase initials for avatar placeholders ("John Doe" → "JD").
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    /// Single-line rendering for compact display.
    #[must_use]
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.line1, self.city, self.state, self.zip, self.country
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: UserId::new("1"),
            name: name.to_string(),
            email: Email::parse("john@example.com").unwrap(),
            role: UserRole::User,
            avatar: None,
            shipping_address: None,
            billing_address: None,
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user("John Doe").initials(), "JD");
        assert_eq!(user("cher").initials(), "C");
        assert_eq!(user("Mary Ann Smith").initials(), "MA");
        assert_eq!(user("").initials(), "");
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let json = r#"{"id":"1","name":"John Doe","email":"john@example.com"}"#;
        let parsed: User = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.role, UserRole::User);
        assert!(parsed.avatar.is_none());
        assert!(!parsed.is_admin());
    }

    #[test]
    fn test_address_one_line() {
        let address = Address {
            line1: "123 Fashion Ave".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip: "10001".to_string(),
            country: "United States".to_string(),
        };
        assert_eq!(
            address.one_line(),
            "123 Fashion Ave, New York, NY 10001, United States"
        );
    }
}
