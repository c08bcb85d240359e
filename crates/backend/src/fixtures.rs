//! Static fixture dataset.
//!
//! The catalog and user list a real backend would keep in its database.
//! Read-only for the process lifetime, and always injected - engines never
//! reach for a global.

use velocity_core::{Category, Price, ProductId, UserId};

use crate::models::{Product, User};

/// Immutable seed catalog of users and products.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    users: Vec<User>,
    products: Vec<Product>,
}

impl FixtureStore {
    /// Create a fixture store from explicit data.
    #[must_use]
    pub const fn new(users: Vec<User>, products: Vec<Product>) -> Self {
        Self { users, products }
    }

    /// The demo's seed dataset: five numbered users and a six-item
    /// sportswear catalog.
    #[must_use]
    pub fn seed() -> Self {
        let users = (1..=5)
            .map(|n| User {
                id: UserId::new(format!("user{n}")),
                username: format!("user{n}"),
                password: format!("user@{n}"),
            })
            .collect();

        let products = vec![
            product(
                "prod1",
                "Air Zoom Pegasus",
                120,
                Category::Men,
                "https://images.unsplash.com/photo-1542291026-7eec264c27ff",
                "Premium running shoes with responsive cushioning",
                &["7", "8", "9", "10", "11"],
            ),
            product(
                "prod2",
                "React Infinity",
                160,
                Category::Women,
                "https://images.unsplash.com/photo-1606107557195-0e29a4b5b4aa",
                "Designed for long-distance comfort",
                &["6", "7", "8", "9", "10"],
            ),
            product(
                "prod3",
                "Dri-FIT Training Shirt",
                35,
                Category::Men,
                "https://images.unsplash.com/photo-1618354691714-7d92150909db",
                "Moisture-wicking performance tee",
                &["S", "M", "L", "XL"],
            ),
            product(
                "prod4",
                "Pro Compression Tights",
                65,
                Category::Women,
                "https://images.unsplash.com/photo-1506629082955-511b1aa562c8",
                "High-performance compression fit",
                &["XS", "S", "M", "L"],
            ),
            product(
                "prod5",
                "Court Vision Basketball",
                85,
                Category::Men,
                "https://images.unsplash.com/photo-1608231387042-66d1773070a5",
                "Classic basketball sneakers",
                &["8", "9", "10", "11", "12"],
            ),
            product(
                "prod6",
                "Windrunner Jacket",
                100,
                Category::Women,
                "https://images.unsplash.com/photo-1551488831-00ddcb6c6bd3",
                "Lightweight weather-resistant jacket",
                &["XS", "S", "M", "L", "XL"],
            ),
        ];

        Self::new(users, products)
    }

    /// All fixture users.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// All fixture products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a user by username (exact match).
    #[must_use]
    pub fn user_by_username(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.username == username)
    }

    /// Look up a product by id.
    #[must_use]
    pub fn product_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == *id)
    }
}

/// Build a catalog record; image variants share the base URL with different
/// width parameters, as the demo's CDN links do.
fn product(
    id: &str,
    name: &str,
    price: i64,
    category: Category,
    image_base: &str,
    description: &str,
    sizes: &[&str],
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        price: Price::from(price),
        category,
        image: format!("{image_base}?w=800"),
        thumbnail: format!("{image_base}?w=200"),
        description: description.to_string(),
        sizes: sizes.iter().map(ToString::to_string).collect(),
    }
}
