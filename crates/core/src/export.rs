//! Plain-text shopping list export.
//!
//! Human-readable, not machine-parsed: retailer and generation date as a
//! header, one block per item with price, category and any savings, then
//! an item-count and totals footer.

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::RETAILER_DISPLAY;
use crate::list::ListItem;
use crate::totals::{item_savings, savings_percentage, total_price, total_savings};
use crate::types::PriceError;

/// Render the export text for a set of list items.
///
/// # Errors
///
/// Returns `PriceError` if any item carries malformed price text.
pub fn render(items: &[ListItem], generated_on: NaiveDate) -> Result<String, PriceError> {
    let mut out = String::new();
    let _ = writeln!(out, "{RETAILER_DISPLAY} Shopping List");
    let _ = writeln!(out, "Generated on {}", generated_on.format("%Y-%m-%d"));

    for item in items {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", item.title);
        let _ = writeln!(out, "  Price: {} x {}", item.current_price, item.quantity);
        let _ = writeln!(out, "  Category: {}", item.category);
        let saving = item_savings(item)?;
        if saving > Decimal::ZERO {
            let _ = writeln!(out, "  Savings: R{saving:.2}");
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Total Items: {}", items.len());
    let _ = writeln!(out, "Total Price: R{:.2}", total_price(items)?);
    let _ = writeln!(
        out,
        "Total Savings: R{:.2} ({}%)",
        total_savings(items)?,
        savings_percentage(items)?
    );

    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::category::categorize;
    use crate::list::ListItem;
    use crate::product::Product;

    fn item(name: &str, price: &str, old: Option<&str>, quantity: u32) -> ListItem {
        let product = Product {
            name: name.to_owned(),
            price: price.to_owned(),
            old: old.map(str::to_owned),
            image_url: None,
            promotion: None,
            category: categorize(name),
        };
        let mut item = ListItem::from_product(&product);
        item.quantity = quantity;
        item
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).unwrap()
    }

    #[test]
    fn test_header_and_totals() {
        let items = vec![
            item("Rice 2kg", "R10", None, 2),
            item("Instant Coffee", "R20", Some("R25"), 1),
        ];
        let text = render(&items, date()).unwrap();
        assert!(text.starts_with("Pick n Pay Shopping List\nGenerated on 2026-08-28\n"));
        assert!(text.contains("Total Items: 2"));
        assert!(text.contains("Total Price: R40.00"));
        assert!(text.contains("Total Savings: R5.00 (11.1%)"));
    }

    #[test]
    fn test_item_block() {
        let items = vec![item("Instant Coffee", "R20", Some("R25"), 2)];
        let text = render(&items, date()).unwrap();
        assert!(text.contains("Instant Coffee\n  Price: R20 x 2\n  Category: Beverages/Coffee\n  Savings: R10.00\n"));
    }

    #[test]
    fn test_no_savings_line_without_discount() {
        let items = vec![item("Rice 2kg", "R10", None, 1)];
        let text = render(&items, date()).unwrap();
        // The footer always has a "Total Savings" line; only the
        // per-item (indented) savings line must be absent.
        assert!(!text.contains("  Savings:"));
        assert!(text.contains("Total Savings: R0.00 (0%)"));
    }

    #[test]
    fn test_malformed_price_fails() {
        let items = vec![item("Rice 2kg", "cheap", None, 1)];
        assert!(render(&items, date()).is_err());
    }
}
