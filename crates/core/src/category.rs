//! Keyword-based product categorizer.
//!
//! The feed carries no category data, so categories are derived from the
//! product name: the first keyword that appears as a substring of the
//! lower-cased name decides the category. Table order is significant and
//! must be preserved - "frozen fish fingers" is meat ("fish" comes
//! first), not frozen food.

use serde::{Deserialize, Serialize};

/// Fallback category for names matching no keyword.
pub const FALLBACK_CATEGORY: &str = "Other/Miscellaneous";

/// Ordered (keyword, category) table. First match wins.
const KEYWORDS: &[(&str, &str)] = &[
    ("milk", "Fresh Food/Dairy"),
    ("bread", "Fresh Food/Bakery"),
    ("juice", "Beverages/Juices"),
    ("coffee", "Beverages/Coffee"),
    ("tea", "Beverages/Tea"),
    ("water", "Beverages/Water"),
    ("soda", "Beverages/Soft Drinks"),
    ("coca-cola", "Beverages/Soft Drinks"),
    ("pepsi", "Beverages/Soft Drinks"),
    ("meat", "Fresh Food/Meat"),
    ("chicken", "Fresh Food/Meat"),
    ("beef", "Fresh Food/Meat"),
    ("pork", "Fresh Food/Meat"),
    ("fish", "Fresh Food/Meat"),
    ("fruit", "Fresh Food/Fruits"),
    ("apple", "Fresh Food/Fruits"),
    ("banana", "Fresh Food/Fruits"),
    ("vegetable", "Fresh Food/Vegetables"),
    ("potato", "Fresh Food/Vegetables"),
    ("tomato", "Fresh Food/Vegetables"),
    ("cleaning", "Household/Cleaning"),
    ("detergent", "Household/Cleaning"),
    ("soap", "Household/Cleaning"),
    ("paper", "Household/Paper Products"),
    ("toilet", "Household/Paper Products"),
    ("tissue", "Household/Paper Products"),
    ("pet", "Household/Pet Supplies"),
    ("dog", "Household/Pet Supplies"),
    ("cat", "Household/Pet Supplies"),
    ("frozen", "Frozen Foods/Frozen Meals"),
    ("ice cream", "Frozen Foods/Ice Cream"),
    ("chips", "Snacks/Chips"),
    ("chocolate", "Snacks/Candy"),
    ("candy", "Snacks/Candy"),
    ("cookies", "Snacks/Cookies"),
    ("biscuit", "Snacks/Cookies"),
    ("health", "Personal Care/Health"),
    ("beauty", "Personal Care/Beauty"),
    ("baby", "Personal Care/Baby Care"),
    ("diaper", "Personal Care/Baby Care"),
];

/// Static main-category tree used to list filter options.
pub const CATEGORY_TREE: &[(&str, &[&str])] = &[
    ("Groceries", &["Pantry", "Canned Goods", "Baking", "Condiments"]),
    ("Fresh Food", &["Fruits", "Vegetables", "Meat", "Dairy", "Bakery"]),
    ("Beverages", &["Soft Drinks", "Coffee", "Tea", "Juices", "Water"]),
    ("Household", &["Cleaning", "Laundry", "Paper Products", "Pet Supplies"]),
    ("Personal Care", &["Health", "Beauty", "Baby Care"]),
    ("Frozen Foods", &["Frozen Meals", "Ice Cream", "Frozen Vegetables"]),
    ("Snacks", &["Chips", "Cookies", "Candy", "Nuts"]),
    ("Other", &["Miscellaneous"]),
];

/// A hierarchical `"Main/Sub"` category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Wrap an existing category label.
    #[must_use]
    pub const fn new(label: String) -> Self {
        Self(label)
    }

    /// The fallback category.
    #[must_use]
    pub fn other() -> Self {
        Self(FALLBACK_CATEGORY.to_owned())
    }

    /// The full `"Main/Sub"` label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The main category (text before the first `/`).
    #[must_use]
    pub fn main(&self) -> &str {
        self.0.split('/').next().unwrap_or("")
    }

    /// The subcategory (text after the first `/`), empty if absent.
    #[must_use]
    pub fn sub(&self) -> &str {
        self.0.split_once('/').map_or("", |(_, sub)| sub)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derive a category from a product name.
///
/// Lower-cases the name and returns the category of the first keyword in
/// table order that appears as a substring, or the fallback category when
/// none match. Pure function, no side effects.
#[must_use]
pub fn categorize(product_name: &str) -> Category {
    let name = product_name.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map_or_else(Category::other, |(_, category)| {
            Category::new((*category).to_owned())
        })
}
