//! Search and category filtering of feed products.

use crate::product::Product;

/// A main- or sub-category selection in a filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    /// Matches every category.
    #[default]
    All,
    /// Matches one named category exactly.
    Only(String),
}

impl CategorySelection {
    fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == category,
        }
    }
}

impl From<Option<String>> for CategorySelection {
    fn from(selection: Option<String>) -> Self {
        selection.map_or(Self::All, Self::Only)
    }
}

/// Combined search-term and category filter.
///
/// A product matches when its name contains the search term
/// (case-insensitive; an empty term matches everything) and both category
/// selections accept its derived category.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive substring to look for in product names.
    pub search: String,
    /// Main-category selection.
    pub main: CategorySelection,
    /// Subcategory selection.
    pub sub: CategorySelection,
}

impl ProductFilter {
    /// Whether the product passes this filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let matches_search = self.search.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        matches_search
            && self.main.matches(product.category.main())
            && self.sub.matches(product.category.sub())
    }

    /// Apply the filter to a product slice, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
