//! Search-term filtering over the catalog.

use crate::product::Product;

/// Whether a product matches a search term.
///
/// Case-insensitive substring match against the title or the category. An
/// empty term matches everything.
#[must_use]
pub fn matches_term(product: &Product, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let term = term.to_lowercase();
    product.title.to_lowercase().contains(&term)
        || product.category.to_lowercase().contains(&term)
}

/// Filter products by a search term, preserving catalog order.
///
/// The term is trimmed before matching; a blank term keeps the full list.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let term = term.trim();
    products
        .iter()
        .filter(|product| matches_term(product, term))
        .collect()
}
