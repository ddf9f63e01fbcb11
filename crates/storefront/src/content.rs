//! Display-only mock content.
//!
//! Everything here is fixed sample data rendered by the home, account and
//! admin pages: carousel slides, testimonials, a wishlist, order history and
//! the admin dashboard figures. None of it is ever mutated.

use chrono::NaiveDate;

use luxestore_core::{Address, Category, Money, Order, OrderId, OrderLine, OrderStatus, ProductId};

use crate::catalog::unsplash_url;

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => NaiveDate::MIN,
    }
}

// =============================================================================
// Home page
// =============================================================================

/// One slide of the home page hero carousel.
#[derive(Debug, Clone, Copy)]
pub struct HeroSlide {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    photo: (&'static str, u32),
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

impl HeroSlide {
    #[must_use]
    pub fn image(&self) -> String {
        unsplash_url(self.photo.0, self.photo.1)
    }
}

pub const HERO_SLIDES: [HeroSlide; 3] = [
    HeroSlide {
        title: "Luxury Redefined",
        subtitle: "Fall/Winter Collection 2023",
        description: "Elevate your style with our premium luxury clothing collection.",
        photo: ("1490481651871-ab68de25d43d", 2070),
        cta_label: "Shop Collection",
        cta_href: "/shop",
    },
    HeroSlide {
        title: "Elegance in Black",
        subtitle: "Exclusive Designer Pieces",
        description: "Discover our handcrafted designer pieces made with premium materials.",
        photo: ("1515886657613-9f3515b0c78f", 2020),
        cta_label: "Explore Now",
        cta_href: "/shop/women",
    },
    HeroSlide {
        title: "Timeless Sophistication",
        subtitle: "Signature Collection",
        description: "Invest in timeless pieces that transcend seasonal trends.",
        photo: ("1539109136881-3be0616acf4b", 2074),
        cta_label: "Discover More",
        cta_href: "/shop/new-arrivals",
    },
];

/// A "Shop by Category" tile.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTile {
    pub category: Category,
    photo: (&'static str, u32),
}

impl CategoryTile {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.category.label()
    }

    #[must_use]
    pub fn href(&self) -> String {
        format!("/shop/{}", self.category.slug())
    }

    #[must_use]
    pub fn image(&self) -> String {
        unsplash_url(self.photo.0, self.photo.1)
    }
}

pub const CATEGORY_TILES: [CategoryTile; 3] = [
    CategoryTile {
        category: Category::Men,
        photo: ("1617137968427-85924c800a22", 1974),
    },
    CategoryTile {
        category: Category::Women,
        photo: ("1581044777550-4cfa60707c03", 1972),
    },
    CategoryTile {
        category: Category::Accessories,
        photo: ("1611085583191-a3b181a88401", 1974),
    },
];

/// Highest rating a testimonial can carry.
pub const MAX_RATING: u8 = 5;

/// One star of a rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub filled: bool,
}

/// A customer quote on the home page.
#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    avatar: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Testimonial {
    #[must_use]
    pub fn avatar(&self) -> String {
        unsplash_url(self.avatar, 1974)
    }

    /// Always `MAX_RATING` stars, the first `rating` of them filled.
    #[must_use]
    pub fn stars(&self) -> Vec<Star> {
        (1..=MAX_RATING)
            .map(|i| Star {
                filled: i <= self.rating,
            })
            .collect()
    }
}

pub const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Sophia Reynolds",
        role: "Fashion Influencer",
        avatar: "1494790108377-be9c29b29330",
        rating: 5,
        text: "The quality of LuxeStore clothing is unmatched. Each piece feels luxurious and the attention to detail is remarkable. I've received countless compliments on my outfits from their latest collection.",
    },
    Testimonial {
        name: "James Wilson",
        role: "Business Executive",
        avatar: "1507003211169-0a1dd7228f2d",
        rating: 5,
        text: "As someone who values quality and style, LuxeStore has become my go-to for professional attire. Their tailored suits are impeccably crafted and the customer service is exceptional.",
    },
    Testimonial {
        name: "Emma Thompson",
        role: "Art Director",
        avatar: "1534528741775-53994a69daeb",
        rating: 4,
        text: "LuxeStore offers the perfect blend of contemporary design and timeless elegance. Their pieces have become staples in my wardrobe, versatile enough for both work and special occasions.",
    },
    Testimonial {
        name: "Michael Chen",
        role: "Photographer",
        avatar: "1539571696357-5a69c17a67c6",
        rating: 5,
        text: "The aesthetic and quality of LuxeStore clothing is perfect for my photoshoots. The materials photograph beautifully and my clients are always impressed with the sophisticated look.",
    },
];

// =============================================================================
// Account page
// =============================================================================

/// A saved wishlist entry.
#[derive(Debug, Clone, Copy)]
pub struct WishlistItem {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Money,
    pub category: Category,
    photo: (&'static str, u32),
}

impl WishlistItem {
    #[must_use]
    pub fn image(&self) -> String {
        unsplash_url(self.photo.0, self.photo.1)
    }
}

pub const WISHLIST: [WishlistItem; 3] = [
    WishlistItem {
        id: "w1",
        name: "Silk Dress",
        price: Money::from_cents(17_999),
        category: Category::Women,
        photo: ("1595777457583-95e059d581b8", 1983),
    },
    WishlistItem {
        id: "w2",
        name: "Leather Boots",
        price: Money::from_cents(24_999),
        category: Category::Accessories,
        photo: ("1543163521-1bf539c55dd2", 1980),
    },
    WishlistItem {
        id: "w3",
        name: "Designer Watch",
        price: Money::from_cents(39_999),
        category: Category::Accessories,
        photo: ("1524592094714-0f0654e20314", 1999),
    },
];

/// Order history shown on the account page.
#[must_use]
pub fn account_orders() -> Vec<Order> {
    let line = |id: &str, name: &str, photo: (&str, u32), cents: i64| OrderLine {
        product_id: ProductId::new(id),
        name: name.to_string(),
        image: unsplash_url(photo.0, photo.1),
        price: Money::from_cents(cents),
        quantity: 1,
    };

    vec![
        Order {
            id: OrderId::new("LUX-123456"),
            date: date(2023, 11, 15),
            status: OrderStatus::Delivered,
            items: vec![
                line(
                    "p1",
                    "Leather Jacket",
                    ("1520975954732-35dd22299614", 1974),
                    19_999,
                ),
                line(
                    "p2",
                    "Designer Jeans",
                    ("1542272604-787c3835535d", 1926),
                    14_998,
                ),
            ],
            total: Money::from_cents(34_997),
        },
        Order {
            id: OrderId::new("LUX-789012"),
            date: date(2023, 10, 28),
            status: OrderStatus::Shipped,
            items: vec![line(
                "p3",
                "Cashmere Sweater",
                ("1576566588028-4147f3842f27", 1964),
                12_999,
            )],
            total: Money::from_cents(12_999),
        },
    ]
}

/// Shipping address shown for users who have not saved one.
#[must_use]
pub fn default_address() -> Address {
    Address {
        line1: "123 Fashion Street".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        zip: "10001".to_string(),
        country: "United States".to_string(),
    }
}

/// A notification or privacy toggle on the settings tab.
#[derive(Debug, Clone, Copy)]
pub struct Preference {
    pub key: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

pub const NOTIFICATION_PREFERENCES: [Preference; 3] = [
    Preference {
        key: "email_notifications",
        label: "Email Notifications",
        description: "Receive order updates and account alerts by email",
        enabled: true,
    },
    Preference {
        key: "sms_notifications",
        label: "SMS Notifications",
        description: "Receive shipping updates by text message",
        enabled: false,
    },
    Preference {
        key: "marketing",
        label: "Marketing Emails",
        description: "Hear about new collections and exclusive offers",
        enabled: true,
    },
];

pub const PRIVACY_PREFERENCES: [Preference; 1] = [Preference {
    key: "data_sharing",
    label: "Data Sharing",
    description: "Allow us to use your data to personalize your experience",
    enabled: false,
}];

// =============================================================================
// Admin dashboard
// =============================================================================

/// Direction of a month-over-month change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Neutral,
}

impl Trend {
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Neutral => "trend-neutral",
        }
    }
}

/// A headline figure on the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct AdminStat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
}

pub const ADMIN_STATS: [AdminStat; 4] = [
    AdminStat {
        label: "Total Sales",
        value: "$24,780",
        change: "+12%",
        trend: Trend::Up,
    },
    AdminStat {
        label: "Total Orders",
        value: "156",
        change: "+8%",
        trend: Trend::Up,
    },
    AdminStat {
        label: "Total Customers",
        value: "1,245",
        change: "+15%",
        trend: Trend::Up,
    },
    AdminStat {
        label: "Products",
        value: "86",
        change: "+3",
        trend: Trend::Neutral,
    },
];

/// Number of orders the store reports in total.
pub const TOTAL_ORDERS: usize = 156;

/// A row of the admin order tables.
#[derive(Debug, Clone, Copy)]
pub struct AdminOrder {
    pub id: &'static str,
    pub customer: &'static str,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub total: Money,
}

pub const RECENT_ORDERS: [AdminOrder; 5] = [
    AdminOrder {
        id: "LUX-123456",
        customer: "John Doe",
        date: date(2023, 11, 15),
        status: OrderStatus::Delivered,
        total: Money::from_cents(34_997),
    },
    AdminOrder {
        id: "LUX-789012",
        customer: "Jane Smith",
        date: date(2023, 11, 14),
        status: OrderStatus::Shipped,
        total: Money::from_cents(12_999),
    },
    AdminOrder {
        id: "LUX-345678",
        customer: "Robert Johnson",
        date: date(2023, 11, 13),
        status: OrderStatus::Processing,
        total: Money::from_cents(49_995),
    },
    AdminOrder {
        id: "LUX-901234",
        customer: "Emily Davis",
        date: date(2023, 11, 12),
        status: OrderStatus::Delivered,
        total: Money::from_cents(8_999),
    },
    AdminOrder {
        id: "LUX-567890",
        customer: "Michael Brown",
        date: date(2023, 11, 11),
        status: OrderStatus::Cancelled,
        total: Money::from_cents(19_999),
    },
];

/// Orders for the admin orders tab, optionally narrowed to one status.
#[must_use]
pub fn admin_orders(status: Option<OrderStatus>) -> Vec<AdminOrder> {
    RECENT_ORDERS
        .into_iter()
        .filter(|order| status.is_none_or(|s| order.status == s))
        .collect()
}

/// A best seller on the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct TopProduct {
    pub name: &'static str,
    pub sales: u32,
    photo: (&'static str, u32),
}

impl TopProduct {
    #[must_use]
    pub fn image(&self) -> String {
        unsplash_url(self.photo.0, self.photo.1)
    }
}

pub const TOP_PRODUCTS: [TopProduct; 4] = [
    TopProduct {
        name: "Leather Jacket",
        sales: 28,
        photo: ("1520975954732-35dd22299614", 1974),
    },
    TopProduct {
        name: "Designer Jeans",
        sales: 24,
        photo: ("1542272604-787c3835535d", 1926),
    },
    TopProduct {
        name: "Cashmere Sweater",
        sales: 22,
        photo: ("1576566588028-4147f3842f27", 1964),
    },
    TopProduct {
        name: "Silk Dress",
        sales: 19,
        photo: ("1595777457583-95e059d581b8", 1983),
    },
];

/// A row of the admin customers tab.
#[derive(Debug, Clone, Copy)]
pub struct Customer {
    pub name: &'static str,
    pub email: &'static str,
    pub joined: NaiveDate,
    pub orders: u32,
    pub spent: Money,
}

pub const CUSTOMERS: [Customer; 5] = [
    Customer {
        name: "John Doe",
        email: "john.doe@example.com",
        joined: date(2023, 10, 15),
        orders: 5,
        spent: Money::from_cents(84_995),
    },
    Customer {
        name: "Jane Smith",
        email: "jane.smith@example.com",
        joined: date(2023, 9, 22),
        orders: 3,
        spent: Money::from_cents(52_997),
    },
    Customer {
        name: "Robert Johnson",
        email: "robert.johnson@example.com",
        joined: date(2023, 11, 5),
        orders: 1,
        spent: Money::from_cents(49_995),
    },
    Customer {
        name: "Emily Davis",
        email: "emily.davis@example.com",
        joined: date(2023, 8, 17),
        orders: 7,
        spent: Money::from_cents(124_993),
    },
    Customer {
        name: "Michael Brown",
        email: "michael.brown@example.com",
        joined: date(2023, 10, 30),
        orders: 2,
        spent: Money::from_cents(37_998),
    },
];

/// Customers whose name or email contains `query`, ignoring case.
///
/// A blank query matches everyone.
#[must_use]
pub fn search_customers(query: &str) -> Vec<Customer> {
    let needle = query.trim().to_lowercase();
    CUSTOMERS
        .into_iter()
        .filter(|c| {
            needle.is_empty()
                || c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
        })
        .collect()
}
