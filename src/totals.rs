//! The amounts derived from the items and taxes of an invoice.

use crate::model::{Item, TaxInfo};

/// The computed amounts of an invoice.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Totals {
    /// The sum of the item amounts.
    pub subtotal: f64,

    /// The VAT on the subtotal.
    pub vat: f64,

    /// The retention on the subtotal.
    pub retention: f64,

    /// The discount on the subtotal. It is reported but does not reduce the total.
    pub discount: f64,

    /// What the client has to pay.
    pub total: f64,
}

impl Totals {
    /// Computes the totals of a list of items.
    ///
    /// The items are summed in order.
    pub fn compute(items: &[Item], tax: &TaxInfo, discount: f64) -> Totals {
        let subtotal = items.iter().fold(0.0, |acc, item| acc + item.amount());
        let vat = tax.vat_amount(subtotal);
        let retention = tax.retention_amount(subtotal);

        Totals {
            subtotal,
            vat,
            retention,
            discount: subtotal * discount / 100.0,
            total: subtotal + vat - retention,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn widgets() -> Vec<Item> {
        vec![Item::new("Widget", 2, 10.0)]
    }

    #[test_case(21.0, 0.0, 4.2, 0.0, 24.2 ; "vat only")]
    #[test_case(0.0, 15.0, 0.0, 3.0, 17.0 ; "retention only")]
    #[test_case(21.0, 15.0, 4.2, 3.0, 21.2 ; "vat and retention")]
    #[test_case(0.0, 0.0, 0.0, 0.0, 20.0 ; "no taxes")]
    fn widget_totals(vat: f64, retention: f64, vat_amount: f64, retained: f64, total: f64) {
        let totals = Totals::compute(&widgets(), &TaxInfo::new(vat, retention), 0.0);
        assert_eq!(totals.subtotal, 20.0);
        assert!((totals.vat - vat_amount).abs() < 1e-9);
        assert!((totals.retention - retained).abs() < 1e-9);
        assert!((totals.total - total).abs() < 1e-9);
    }

    #[test]
    fn subtotal_follows_item_order() {
        let items = vec![
            Item::new("a", 3, 0.1),
            Item::new("b", 1, 1e16),
            Item::new("c", 7, 2.5),
        ];
        let expected = ((0.0 + 3.0 * 0.1) + 1e16) + 7.0 * 2.5;
        let totals = Totals::compute(&items, &TaxInfo::default(), 0.0);
        assert_eq!(totals.subtotal, expected);
    }

    #[test]
    fn total_is_subtotal_plus_vat_minus_retention() {
        let items = vec![Item::new("a", 3, 33.33), Item::new("b", 12, 7.05)];
        let tax = TaxInfo::new(10.0, 7.0);
        let totals = Totals::compute(&items, &tax, 0.0);
        assert_eq!(
            totals.total,
            totals.subtotal + tax.vat_amount(totals.subtotal) - tax.retention_amount(totals.subtotal)
        );
    }

    #[test]
    fn discount_does_not_reduce_total() {
        let with = Totals::compute(&widgets(), &TaxInfo::new(21.0, 0.0), 10.0);
        let without = Totals::compute(&widgets(), &TaxInfo::new(21.0, 0.0), 0.0);
        assert_eq!(with.discount, 2.0);
        assert_eq!(with.total, without.total);
    }

    #[test]
    fn empty_invoice_is_zero() {
        let totals = Totals::compute(&[], &TaxInfo::new(21.0, 15.0), 0.0);
        assert_eq!(totals.total, 0.0);
    }
}
