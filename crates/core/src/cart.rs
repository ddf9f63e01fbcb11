//! Shopping cart state container.
//!
//! A [`Cart`] is an ordered list of [`CartItem`] lines with two invariants:
//!
//! - every line has `1 <= quantity <= MAX_QUANTITY`
//! - no two lines share a [`VariantKey`] (product id, color, size)
//!
//! All operations are total. Requests that would break an invariant are
//! absorbed: adding an existing variant merges into its line, a zero
//! quantity on add counts as one, setting a quantity below one is ignored
//! and anything above [`MAX_QUANTITY`] is clamped to it.
//!
//! The cart can be driven either through its methods or through the pure
//! reducer [`reduce`], which maps `(Cart, CartAction)` to the next `Cart`.

use serde::{Deserialize, Serialize};

use crate::types::{Money, ProductId};

/// Most units a single line can hold.
pub const MAX_QUANTITY: u32 = 99;

/// Identity of a cart line: the same product in a different color or size
/// is a different line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub id: ProductId,
    pub color: Option<String>,
    pub size: Option<String>,
}

impl VariantKey {
    /// Build a key, treating blank color/size values as absent.
    #[must_use]
    pub fn new(id: ProductId, color: Option<String>, size: Option<String>) -> Self {
        Self {
            id,
            color: non_blank(color),
            size: non_blank(size),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// One line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl CartItem {
    /// The line's variant identity.
    #[must_use]
    pub fn key(&self) -> VariantKey {
        VariantKey {
            id: self.id.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
        }
    }

    fn matches(&self, key: &VariantKey) -> bool {
        self.id == key.id && self.color == key.color && self.size == key.size
    }

    /// Price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Money {
        self.price * self.quantity
    }

    /// Whether the line already holds [`MAX_QUANTITY`] units.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.quantity >= MAX_QUANTITY
    }

    /// "Black / M" when both variant tags are present.
    #[must_use]
    pub fn variant_label(&self) -> Option<String> {
        match (&self.color, &self.size) {
            (Some(color), Some(size)) => Some(format!("{color} / {size}")),
            (Some(only), None) | (None, Some(only)) => Some(only.clone()),
            (None, None) => None,
        }
    }
}

/// A state transition on the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Merge into the line with the same variant key, or append.
    Add(CartItem),
    /// Drop every line of a product.
    Remove(ProductId),
    /// Drop a single variant line.
    RemoveLine(VariantKey),
    /// Set the quantity of every line of a product.
    SetQuantity(ProductId, u32),
    /// Set the quantity of a single variant line.
    SetLineQuantity(VariantKey, u32),
    /// Empty the cart.
    Clear,
}

/// Ordered collection of cart lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines (the header badge number).
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Σ price × quantity, computed from the current lines on every call.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Look up a line by variant key.
    #[must_use]
    pub fn line(&self, key: &VariantKey) -> Option<&CartItem> {
        self.items.iter().find(|item| item.matches(key))
    }

    /// Add an item, merging into an existing line with the same variant key.
    ///
    /// A quantity of zero is treated as one and the merged quantity is
    /// clamped to [`MAX_QUANTITY`]. Blank color/size tags are normalized to
    /// `None` before matching.
    pub fn add(&mut self, mut item: CartItem) {
        item.quantity = item.quantity.clamp(1, MAX_QUANTITY);
        item.color = non_blank(item.color);
        item.size = non_blank(item.size);

        let key = item.key();
        if let Some(existing) = self.items.iter_mut().find(|line| line.matches(&key)) {
            existing.quantity = existing
                .quantity
                .saturating_add(item.quantity)
                .min(MAX_QUANTITY);
        } else {
            self.items.push(item);
        }
    }

    /// Remove every line for `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Remove the line with `key`. Returns whether it existed.
    pub fn remove_line(&mut self, key: &VariantKey) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(key));
        self.items.len() != before
    }

    /// Set the quantity of every line for `id`.
    ///
    /// Quantities below one are rejected and leave the cart unchanged;
    /// larger ones are clamped to [`MAX_QUANTITY`]. Returns whether any line
    /// was updated.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        let quantity = quantity.min(MAX_QUANTITY);
        let mut updated = false;
        for item in self.items.iter_mut().filter(|item| &item.id == id) {
            item.quantity = quantity;
            updated = true;
        }
        updated
    }

    /// Set the quantity of the line with `key`.
    ///
    /// Quantities below one are rejected and leave the cart unchanged;
    /// larger ones are clamped to [`MAX_QUANTITY`]. Returns whether the line
    /// was updated.
    pub fn set_line_quantity(&mut self, key: &VariantKey, quantity: u32) -> bool {
        if quantity < 1 {
            return false;
        }
        let quantity = quantity.min(MAX_QUANTITY);
        match self.items.iter_mut().find(|item| item.matches(key)) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove all lines.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Apply an action in place.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add(item) => self.add(item),
            CartAction::Remove(id) => {
                self.remove(&id);
            }
            CartAction::RemoveLine(key) => {
                self.remove_line(&key);
            }
            CartAction::SetQuantity(id, quantity) => {
                self.set_quantity(&id, quantity);
            }
            CartAction::SetLineQuantity(key, quantity) => {
                self.set_line_quantity(&key, quantity);
            }
            CartAction::Clear => self.clear(),
        }
    }
}

/// Pure reducer: the cart that results from applying `action` to `cart`.
#[must_use]
pub fn reduce(mut cart: Cart, action: CartAction) -> Cart {
    cart.apply(action);
    cart
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64, quantity: u32, color: Option<&str>, size: Option<&str>) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Money::from_cents(cents),
            image: format!("/img/{id}.jpg"),
            quantity,
            color: color.map(str::to_string),
            size: size.map(str::to_string),
        }
    }

    fn key(id: &str, color: Option<&str>, size: Option<&str>) -> VariantKey {
        VariantKey::new(
            ProductId::new(id),
            color.map(str::to_string),
            size.map(str::to_string),
        )
    }

    #[test]
    fn test_add_same_variant_merges_quantity() {
        let mut cart = Cart::new();
        cart.add(item("1", 29_999, 1, Some("Black"), Some("M")));
        cart.add(item("1", 29_999, 2, Some("Black"), Some("M")));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_add_different_variant_appends() {
        let mut cart = Cart::new();
        cart.add(item("1", 29_999, 1, Some("Black"), Some("M")));
        cart.add(item("1", 29_999, 1, Some("Navy"), Some("M")));
        cart.add(item("1", 29_999, 1, Some("Black"), Some("L")));
        cart.add(item("2", 49_999, 1, None, None));

        assert_eq!(cart.line_count(), 4);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut cart = Cart::new();
        cart.add(item("3", 100, 1, None, None));
        cart.add(item("1", 100, 1, None, None));
        cart.add(item("3", 100, 1, None, None));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_add_zero_quantity_counts_as_one() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 0, None, None));
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_add_clamps_to_max_quantity() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, u32::MAX, None, None));
        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY);
        assert!(cart.items()[0].is_full());

        cart.add(item("1", 100, u32::MAX, None, None));
        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_item_count_never_overflows() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, u32::MAX, None, None));
        cart.add(item("2", 100, u32::MAX, None, None));
        assert_eq!(cart.item_count(), 2 * MAX_QUANTITY);

        let stored: Cart = serde_json::from_value(serde_json::json!([
            {"id": "1", "name": "A", "price": "1.00", "image": "", "quantity": u32::MAX},
            {"id": "2", "name": "B", "price": "1.00", "image": "", "quantity": u32::MAX},
        ]))
        .unwrap();
        assert_eq!(stored.item_count(), u32::MAX);
    }

    #[test]
    fn test_set_quantity_clamps_to_max_quantity() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 1, Some("Black"), None));
        cart.add(item("2", 100, 1, None, None));

        assert!(cart.set_line_quantity(&key("1", Some("Black"), None), 1_000));
        assert!(cart.set_quantity(&ProductId::new("2"), u32::MAX));

        assert_eq!(cart.items()[0].quantity, MAX_QUANTITY);
        assert_eq!(cart.items()[1].quantity, MAX_QUANTITY);
    }

    #[test]
    fn test_add_blank_variant_tags_match_absent_ones() {
        let mut cart = Cart::new();
        cart.add(item("3", 18_999, 1, None, None));
        cart.add(item("3", 18_999, 1, Some(""), Some("  ")));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert!(cart.items()[0].color.is_none());
    }

    #[test]
    fn test_subtotal_tracks_every_mutation() {
        let mut cart = Cart::new();
        assert_eq!(cart.subtotal(), Money::ZERO);

        cart.add(item("1", 29_999, 1, Some("Black"), Some("M")));
        assert_eq!(cart.subtotal(), Money::from_cents(29_999));

        cart.add(item("2", 49_999, 2, None, None));
        assert_eq!(cart.subtotal(), Money::from_cents(129_997));

        cart.set_quantity(&ProductId::new("2"), 1);
        assert_eq!(cart.subtotal(), Money::from_cents(79_998));

        cart.remove(&ProductId::new("1"));
        assert_eq!(cart.subtotal(), Money::from_cents(49_999));

        cart.clear();
        assert_eq!(cart.subtotal(), Money::ZERO);
    }

    #[test]
    fn test_subtotal_equals_sum_of_line_totals() {
        let mut cart = Cart::new();
        cart.add(item("1", 29_999, 3, None, None));
        cart.add(item("3", 18_999, 2, Some("Tan"), None));
        cart.add(item("105", 12_999, 1, None, None));

        let expected: Money = cart
            .items()
            .iter()
            .map(|i| i.price * i.quantity)
            .sum();
        assert_eq!(cart.subtotal(), expected);
        assert_eq!(cart.subtotal(), Money::from_cents(29_999 * 3 + 18_999 * 2 + 12_999));
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 1, None, None));

        assert!(!cart.set_quantity(&ProductId::new("1"), 0));
        assert_eq!(cart.items()[0].quantity, 1);

        cart.set_quantity(&ProductId::new("1"), 4);
        assert!(!cart.set_line_quantity(&key("1", None, None), 0));
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_set_quantity_applies_to_all_variants_of_product() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 1, Some("Black"), Some("M")));
        cart.add(item("1", 100, 1, Some("Navy"), Some("S")));
        cart.add(item("2", 100, 1, None, None));

        assert!(cart.set_quantity(&ProductId::new("1"), 5));
        assert_eq!(cart.item_count(), 11);
    }

    #[test]
    fn test_set_line_quantity_targets_one_variant() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 1, Some("Black"), Some("M")));
        cart.add(item("1", 100, 1, Some("Navy"), Some("S")));

        assert!(cart.set_line_quantity(&key("1", Some("Navy"), Some("S")), 3));
        assert_eq!(cart.line(&key("1", Some("Black"), Some("M"))).unwrap().quantity, 1);
        assert_eq!(cart.line(&key("1", Some("Navy"), Some("S"))).unwrap().quantity, 3);
        assert!(!cart.set_line_quantity(&key("9", None, None), 3));
    }

    #[test]
    fn test_remove_by_id_drops_all_variants() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 1, Some("Black"), Some("M")));
        cart.add(item("1", 100, 1, Some("Navy"), Some("S")));
        cart.add(item("2", 100, 1, None, None));

        assert!(cart.remove(&ProductId::new("1")));
        assert_eq!(cart.line_count(), 1);
        assert!(!cart.remove(&ProductId::new("1")));
    }

    #[test]
    fn test_remove_line_drops_one_variant() {
        let mut cart = Cart::new();
        cart.add(item("1", 100, 1, Some("Black"), Some("M")));
        cart.add(item("1", 100, 1, Some("Navy"), Some("S")));

        assert!(cart.remove_line(&key("1", Some("Black"), Some("M"))));
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].color.as_deref(), Some("Navy"));
    }

    #[test]
    fn test_reducer_matches_methods() {
        let actions = vec![
            CartAction::Add(item("1", 29_999, 1, Some("Black"), Some("M"))),
            CartAction::Add(item("1", 29_999, 1, Some("Black"), Some("M"))),
            CartAction::Add(item("2", 49_999, 1, None, None)),
            CartAction::SetQuantity(ProductId::new("2"), 0),
            CartAction::SetLineQuantity(key("1", Some("Black"), Some("M")), 4),
            CartAction::RemoveLine(key("9", None, None)),
        ];

        let cart = actions.into_iter().fold(Cart::new(), reduce);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[1].quantity, 1);
        assert_eq!(cart.subtotal(), Money::from_cents(29_999 * 4 + 49_999));

        let cleared = reduce(cart, CartAction::Clear);
        assert!(cleared.is_empty());
    }

    #[test]
    fn test_variant_label() {
        assert_eq!(
            item("1", 1, 1, Some("Black"), Some("M")).variant_label().as_deref(),
            Some("Black / M")
        );
        assert_eq!(item("1", 1, 1, None, Some("M")).variant_label().as_deref(), Some("M"));
        assert_eq!(item("1", 1, 1, None, None).variant_label(), None);
    }

    #[test]
    fn test_serializes_as_plain_list() {
        let mut cart = Cart::new();
        cart.add(item("2", 49_999, 1, None, None));

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["id"], "2");
        assert_eq!(json[0]["price"], "499.99");

        let back: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(back, cart);
    }
}
