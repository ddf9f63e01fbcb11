use luxestore_core::{Category, Money, Product, ProductId};

/// Products shown in the home page "Featured" row.
pub(super) const FEATURED_IDS: [&str; 4] = ["1", "2", "3", "4"];

const APPAREL_SIZES: [&str; 5] = ["XS", "S", "M", "L", "XL"];
const MENS_SIZES: [&str; 5] = ["S", "M", "L", "XL", "XXL"];
const SUIT_SIZES: [&str; 5] = ["46", "48", "50", "52", "54"];
const SHOE_SIZES: [&str; 6] = ["36", "37", "38", "39", "40", "41"];
const ONE_SIZE: [&str; 1] = ["One Size"];

pub(crate) fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/photo-{photo}?q=80&w={width}&auto=format&fit=crop")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

struct Seed<'a> {
    id: &'a str,
    name: &'a str,
    category: Category,
    cents: i64,
    photo: (&'a str, u32),
    slug: &'a str,
    is_new: bool,
    sizes: &'a [&'a str],
    colors: &'a [&'a str],
    description: &'a str,
    details: &'a [&'a str],
    gallery: &'a [(&'a str, u32)],
}

impl Seed<'_> {
    fn build(self) -> Product {
        let image = unsplash(self.photo.0, self.photo.1);
        let mut images = vec![image.clone()];
        images.extend(self.gallery.iter().map(|(photo, width)| unsplash(photo, *width)));

        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            category: self.category,
            price: Money::from_cents(self.cents),
            image,
            slug: self.slug.to_string(),
            is_new: self.is_new,
            sizes: strings(self.sizes),
            colors: strings(self.colors),
            description: self.description.to_string(),
            details: strings(self.details),
            images,
            in_stock: true,
        }
    }
}

#[allow(clippy::too_many_lines)]
pub(super) fn sample_products() -> Vec<Product> {
    vec![
        Seed {
            id: "1",
            name: "Silk Evening Dress",
            category: Category::Women,
            cents: 29_999,
            photo: ("1595777457583-95e059d581b8", 1983),
            slug: "silk-evening-dress",
            is_new: false,
            sizes: &APPAREL_SIZES,
            colors: &["Black", "Navy", "Burgundy"],
            description: "Elevate your evening attire with our luxurious silk evening dress. Crafted from the finest silk, this dress features a flattering silhouette with a subtle sheen that catches the light beautifully. The elegant design includes a sweetheart neckline and a tasteful side slit for ease of movement.",
            details: &[
                "Premium 100% silk fabric",
                "Fully lined",
                "Side slit for comfort and style",
                "Hidden back zipper",
                "Dry clean only",
            ],
            gallery: &[
                ("1515372039744-b8f02a3ae446", 1976),
                ("1550639525-c97d455acf70", 1974),
            ],
        }
        .build(),
        Seed {
            id: "2",
            name: "Tailored Wool Suit",
            category: Category::Men,
            cents: 49_999,
            photo: ("1594938298603-c8148c4dae35", 2080),
            slug: "tailored-wool-suit",
            is_new: false,
            sizes: &SUIT_SIZES,
            colors: &["Charcoal", "Navy", "Black"],
            description: "Make a statement with our impeccably tailored wool suit. Crafted from premium Italian wool, this suit offers both comfort and sophistication. The modern cut provides a sleek silhouette while maintaining ease of movement for all-day wear.",
            details: &[
                "Premium Italian wool",
                "Half-canvas construction",
                "Two-button closure",
                "Four interior pockets",
                "Dry clean only",
            ],
            gallery: &[
                ("1617127365659-c47fa864d8bc", 1974),
                ("1598032895397-b9472444bf93", 1780),
            ],
        }
        .build(),
        Seed {
            id: "3",
            name: "Leather Crossbody Bag",
            category: Category::Accessories,
            cents: 18_999,
            photo: ("1590874103328-eac38a683ce7", 2076),
            slug: "leather-crossbody-bag",
            is_new: false,
            sizes: &ONE_SIZE,
            colors: &["Tan", "Black", "Oxblood"],
            description: "A compact crossbody cut from full-grain vegetable-tanned leather. The adjustable strap and magnetic flap make it an everyday companion that softens and darkens beautifully with wear.",
            details: &[
                "Full-grain vegetable-tanned leather",
                "Adjustable shoulder strap",
                "Magnetic flap closure",
                "Interior slip pocket",
                "Brass hardware",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "4",
            name: "Cashmere Sweater",
            category: Category::Women,
            cents: 24_999,
            photo: ("1576566588028-4147f3842f27", 1964),
            slug: "cashmere-sweater",
            is_new: false,
            sizes: &APPAREL_SIZES,
            colors: &["Camel", "Ivory", "Charcoal"],
            description: "Knitted from two-ply Mongolian cashmere, this relaxed crew-neck sweater is impossibly soft and light enough to layer through every season.",
            details: &[
                "100% Mongolian cashmere",
                "Two-ply knit",
                "Ribbed cuffs and hem",
                "Relaxed fit",
                "Hand wash cold",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "101",
            name: "Velvet Evening Gown",
            category: Category::Women,
            cents: 34_999,
            photo: ("1566174053879-31528523f8ae", 2030),
            slug: "velvet-evening-gown",
            is_new: true,
            sizes: &APPAREL_SIZES,
            colors: &["Emerald", "Midnight", "Ruby"],
            description: "A floor-length gown in plush silk-blend velvet with a draped cowl neckline and an open back. Designed to move gracefully from the first toast to the last dance.",
            details: &[
                "Silk-blend velvet",
                "Draped cowl neckline",
                "Open back with button loop",
                "Floor-length hem",
                "Dry clean only",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "102",
            name: "Italian Leather Jacket",
            category: Category::Men,
            cents: 59_999,
            photo: ("1520975954732-35dd22299614", 1974),
            slug: "italian-leather-jacket",
            is_new: true,
            sizes: &MENS_SIZES,
            colors: &["Black", "Cognac"],
            description: "Cut from supple Italian lambskin, this biker-inspired jacket pairs a streamlined silhouette with hand-finished seams and a quilted satin lining.",
            details: &[
                "Italian lambskin leather",
                "Quilted satin lining",
                "Asymmetric zip front",
                "Zipped cuffs",
                "Professional leather clean only",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "103",
            name: "Designer Sunglasses",
            category: Category::Accessories,
            cents: 19_999,
            photo: ("1511499767150-a48a237f0083", 1980),
            slug: "designer-sunglasses",
            is_new: true,
            sizes: &ONE_SIZE,
            colors: &["Tortoise", "Black"],
            description: "Hand-polished acetate frames with polarized lenses and full UV400 protection. Supplied with a leather case and microfibre cloth.",
            details: &[
                "Hand-polished acetate frame",
                "Polarized lenses",
                "UV400 protection",
                "Leather case included",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "104",
            name: "Silk Blouse",
            category: Category::Women,
            cents: 17_999,
            photo: ("1551163943-3f7fffb9d770", 2070),
            slug: "silk-blouse",
            is_new: true,
            sizes: &APPAREL_SIZES,
            colors: &["Ivory", "Blush", "Black"],
            description: "A fluid silk crepe de chine blouse with a soft point collar and mother-of-pearl buttons. Tuck it into tailoring or wear it loose over denim.",
            details: &[
                "100% silk crepe de chine",
                "Mother-of-pearl buttons",
                "Point collar",
                "Button cuffs",
                "Dry clean only",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "105",
            name: "Cashmere Scarf",
            category: Category::Accessories,
            cents: 12_999,
            photo: ("1520903920243-00d872a2d1c9", 1974),
            slug: "cashmere-scarf",
            is_new: true,
            sizes: &ONE_SIZE,
            colors: &["Grey", "Camel", "Navy"],
            description: "An oversized scarf woven from pure cashmere with hand-twisted fringe. Generous enough to wear as a wrap on cold evenings.",
            details: &[
                "100% cashmere",
                "Hand-twisted fringe",
                "200 x 70 cm",
                "Hand wash cold",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "106",
            name: "Tailored Dress Shirt",
            category: Category::Men,
            cents: 14_999,
            photo: ("1598033129183-c4f50c736f10", 1925),
            slug: "tailored-dress-shirt",
            is_new: true,
            sizes: &MENS_SIZES,
            colors: &["White", "Sky Blue", "Pink"],
            description: "A crisp two-fold cotton poplin shirt with a spread collar and single-button barrel cuffs, cut slim through the body for a sharp line under a jacket.",
            details: &[
                "Two-fold cotton poplin",
                "Spread collar",
                "Barrel cuffs",
                "Slim fit",
                "Machine wash warm",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "201",
            name: "Wool Overcoat",
            category: Category::Men,
            cents: 39_999,
            photo: ("1544022613-e87ca75a784a", 1974),
            slug: "wool-overcoat",
            is_new: false,
            sizes: &MENS_SIZES,
            colors: &["Camel", "Charcoal"],
            description: "A single-breasted overcoat in dense virgin wool with a notch lapel and a knee-length cut that sits neatly over a suit.",
            details: &[
                "Virgin wool blend",
                "Notch lapel",
                "Fully lined",
                "Two flap pockets",
                "Dry clean only",
            ],
            gallery: &[],
        }
        .build(),
        Seed {
            id: "202",
            name: "Leather Ankle Boots",
            category: Category::Women,
            cents: 27_999,
            photo: ("1543163521-1bf539c55dd2", 1980),
            slug: "leather-ankle-boots",
            is_new: false,
            sizes: &SHOE_SIZES,
            colors: &["Black", "Chocolate"],
            description: "Almond-toe ankle boots in smooth calf leather on a stacked block heel, with an inside zip for easy wear.",
            details: &[
                "Calf leather upper",
                "Leather lining",
                "5 cm stacked block heel",
                "Inside zip",
                "Made in Spain",
            ],
            gallery: &[],
        }
        .build(),
    ]
}
