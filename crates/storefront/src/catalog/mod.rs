//! Static product catalog.
//!
//! The store sells a fixed list of products compiled into the binary. The
//! catalog answers the listing, detail and "you may also like" queries the
//! shop pages need.

mod products;

pub(crate) use products::unsplash as unsplash_url;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use luxestore_core::{Category, Product, ProductId};

/// Maximum number of related products shown under a product.
pub const RELATED_LIMIT: usize = 4;

/// Listing sort order selected on the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [Self; 5] = [
        Self::Featured,
        Self::PriceLow,
        Self::PriceHigh,
        Self::NameAsc,
        Self::NameDesc,
    ];

    /// Query-string value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    /// Label for the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::NameAsc => "Name: A to Z",
            Self::NameDesc => "Name: Z to A",
        }
    }

    /// Parse a query-string value; anything unrecognised is `Featured`.
    #[must_use]
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::Featured => Ordering::Equal,
            Self::PriceLow => a.price.cmp(&b.price),
            Self::PriceHigh => b.price.cmp(&a.price),
            Self::NameAsc => name_key(a).cmp(&name_key(b)),
            Self::NameDesc => name_key(b).cmp(&name_key(a)),
        }
    }
}

fn name_key(product: &Product) -> String {
    product.name.to_lowercase()
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| format!("unknown sort order: {s}"))
    }
}

/// Which slice of the catalog a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Listing {
    #[default]
    All,
    Department(Category),
    NewArrivals,
}

impl Listing {
    /// Resolve a `/shop/{slug}` or `?category=` value.
    ///
    /// Returns `None` for slugs the shop does not know.
    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.trim().to_ascii_lowercase().as_str() {
            "" | "all" => Some(Self::All),
            "new-arrivals" => Some(Self::NewArrivals),
            other => other.parse::<Category>().ok().map(Self::Department),
        }
    }

    /// Slug used in links and filter state.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Department(category) => category.slug(),
            Self::NewArrivals => "new-arrivals",
        }
    }

    /// Page heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Department(category) => category.label(),
            Self::NewArrivals => "New Arrivals",
        }
    }

    fn includes(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Department(category) => product.category == category,
            Self::NewArrivals => product.is_new,
        }
    }
}

/// The store's product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in sample catalog.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(products::sample_products())
    }

    /// Every product in catalog order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn find_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.slug == slug)
    }

    #[must_use]
    pub fn find_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products in a listing, in catalog order.
    #[must_use]
    pub fn filter(&self, listing: Listing) -> Vec<&Product> {
        self.products.iter().filter(|p| listing.includes(p)).collect()
    }

    /// Products in a listing, sorted. The sort is stable, so ties keep
    /// catalog order.
    #[must_use]
    pub fn list(&self, listing: Listing, order: SortOrder) -> Vec<&Product> {
        let mut products = self.filter(listing);
        sort(&mut products, order);
        products
    }

    /// Up to four other products from the same category.
    #[must_use]
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Home page "Featured" row.
    #[must_use]
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| products::FEATURED_IDS.contains(&p.id.as_str()))
            .collect()
    }

    /// Home page "New Arrivals" row.
    #[must_use]
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.filter(Listing::NewArrivals)
    }

    /// Number of products per department, for the filter sidebar.
    #[must_use]
    pub fn count(&self, listing: Listing) -> usize {
        self.products.iter().filter(|p| listing.includes(p)).count()
    }
}

/// Sort a product listing in place.
pub fn sort(products: &mut [&Product], order: SortOrder) {
    products.sort_by(|a, b| order.compare(a, b));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use luxestore_core::Money;

    use super::*;

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_sample_catalog_has_twelve_unique_products() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.all().len(), 12);

        let mut slugs: Vec<&str> = catalog.all().iter().map(|p| p.slug.as_str()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), 12);
    }

    #[test]
    fn test_find_by_slug_and_id() {
        let catalog = Catalog::sample();
        let dress = catalog.find_by_slug("silk-evening-dress").unwrap();
        assert_eq!(dress.id, ProductId::new("1"));
        assert_eq!(dress.price, Money::from_cents(29_999));
        assert_eq!(catalog.find_by_id(&ProductId::new("2")).unwrap().slug, "tailored-wool-suit");
        assert!(catalog.find_by_slug("missing").is_none());
    }

    #[test]
    fn test_sort_orders() {
        let catalog = Catalog::sample();

        let low = catalog.list(Listing::All, SortOrder::PriceLow);
        assert!(low.windows(2).all(|w| w[0].price <= w[1].price));
        assert_eq!(low[0].name, "Cashmere Scarf");

        let high = catalog.list(Listing::All, SortOrder::PriceHigh);
        assert_eq!(high[0].name, "Italian Leather Jacket");

        let az = catalog.list(Listing::All, SortOrder::NameAsc);
        assert_eq!(az[0].name, "Cashmere Scarf");
        assert_eq!(az[11].name, "Wool Overcoat");

        let za = catalog.list(Listing::All, SortOrder::NameDesc);
        assert_eq!(names(&za), names(&az).into_iter().rev().collect::<Vec<_>>());

        let featured = catalog.list(Listing::All, SortOrder::Featured);
        assert_eq!(names(&featured), names(&catalog.all().iter().collect::<Vec<_>>()));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_featured() {
        assert_eq!(SortOrder::from_query(Some("popularity")), SortOrder::Featured);
        assert_eq!(SortOrder::from_query(None), SortOrder::Featured);
        assert_eq!(SortOrder::from_query(Some("price-high")), SortOrder::PriceHigh);
    }

    #[test]
    fn test_listing_filters() {
        let catalog = Catalog::sample();

        let men = catalog.filter(Listing::Department(Category::Men));
        assert_eq!(men.len(), 4);
        assert!(men.iter().all(|p| p.category == Category::Men));

        let new = catalog.new_arrivals();
        assert_eq!(new.len(), 6);
        assert!(new.iter().all(|p| p.is_new));

        assert_eq!(Listing::from_slug("women"), Some(Listing::Department(Category::Women)));
        assert_eq!(Listing::from_slug("new-arrivals"), Some(Listing::NewArrivals));
        assert_eq!(Listing::from_slug("sale"), None);
    }

    #[test]
    fn test_related_same_category_excluding_self() {
        let catalog = Catalog::sample();
        let dress = catalog.find_by_slug("silk-evening-dress").unwrap();
        let related = catalog.related(dress);

        assert!(related.len() <= RELATED_LIMIT);
        assert!(!related.is_empty());
        assert!(related.iter().all(|p| p.category == Category::Women && p.id != dress.id));
    }

    #[test]
    fn test_related_is_capped_at_four() {
        let catalog = Catalog::sample();
        // Women has five products, so one is always left out.
        let sweater = catalog.find_by_slug("cashmere-sweater").unwrap();
        assert_eq!(catalog.related(sweater).len(), 4);
    }

    #[test]
    fn test_featured_is_first_four_ids() {
        let catalog = Catalog::sample();
        let ids: Vec<&str> = catalog.featured().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}
