//! Price and savings aggregation over list items.
//!
//! All arithmetic is decimal. Malformed price text stops the computation
//! with a `PriceError` rather than folding a garbage value into the
//! total.

use rust_decimal::Decimal;

use crate::list::ListItem;
use crate::types::PriceError;

/// Sum of `current_price * quantity` over the items.
///
/// # Errors
///
/// Returns `PriceError` if any item carries malformed price text.
pub fn total_price(items: &[ListItem]) -> Result<Decimal, PriceError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        Ok(total + item.unit_price()?.amount() * Decimal::from(item.quantity))
    })
}

/// Sum of per-item savings, each clamped at zero.
///
/// Per item: `max(0, (old - current) * quantity)`, where `old` falls back
/// to the current price when the feed has no pre-promotion price. The
/// clamp is deliberate - a price increase never reduces total savings.
///
/// # Errors
///
/// Returns `PriceError` if any item carries malformed price text.
pub fn total_savings(items: &[ListItem]) -> Result<Decimal, PriceError> {
    items.iter().try_fold(Decimal::ZERO, |total, item| {
        let saving = item_savings(item)?;
        Ok(total + saving.max(Decimal::ZERO))
    })
}

/// Unclamped savings for one item: `(old - current) * quantity`.
///
/// # Errors
///
/// Returns `PriceError` if the item carries malformed price text.
pub fn item_savings(item: &ListItem) -> Result<Decimal, PriceError> {
    let current = item.unit_price()?.amount();
    let old = item.old_unit_price()?.amount();
    Ok((old - current) * Decimal::from(item.quantity))
}

/// Total savings as a percentage of the old-price total, rounded to one
/// decimal. Zero when the old-price total is zero.
///
/// # Errors
///
/// Returns `PriceError` if any item carries malformed price text.
pub fn savings_percentage(items: &[ListItem]) -> Result<Decimal, PriceError> {
    let old_total = items.iter().try_fold(Decimal::ZERO, |total, item| {
        Ok::<_, PriceError>(total + item.old_unit_price()?.amount() * Decimal::from(item.quantity))
    })?;

    if old_total.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let savings = total_savings(items)?;
    Ok((savings / old_total * Decimal::from(100)).round_dp(1))
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

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_weekly_list_scenario() {
        // R10 x 2 plus R20 x 1 (was R25).
        let items = vec![
            item("Rice 2kg", "R10", None, 2),
            item("Instant Coffee", "R20", Some("R25"), 1),
        ];
        assert_eq!(total_price(&items).unwrap(), dec("40"));
        assert_eq!(total_savings(&items).unwrap(), dec("5"));
    }

    #[test]
    fn test_price_increase_clamped_to_zero() {
        // Old price below current: contributes nothing, not a negative.
        let items = vec![
            item("Soap Bar", "R12", Some("R10"), 3),
            item("Dog Food", "R50", Some("R60"), 1),
        ];
        assert_eq!(total_savings(&items).unwrap(), dec("10"));
    }

    #[test]
    fn test_missing_old_price_means_no_saving() {
        let items = vec![item("Rice 2kg", "R10", None, 4)];
        assert_eq!(total_savings(&items).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_empty_items() {
        assert_eq!(total_price(&[]).unwrap(), Decimal::ZERO);
        assert_eq!(total_savings(&[]).unwrap(), Decimal::ZERO);
        assert_eq!(savings_percentage(&[]).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_malformed_price_propagates() {
        let items = vec![item("Rice 2kg", "ten rand", None, 1)];
        assert!(total_price(&items).is_err());
        assert!(total_savings(&items).is_err());
    }

    #[test]
    fn test_savings_percentage() {
        // Old total R50, savings R5 -> 10.0%.
        let items = vec![
            item("Rice 2kg", "R10", None, 2),
            item("Instant Coffee", "R25", Some("R30"), 1),
        ];
        assert_eq!(savings_percentage(&items).unwrap(), dec("10.0"));
    }
}
