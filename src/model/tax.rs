//! Tax percentages applied to an invoice.

use serde::{Deserialize, Serialize};

/// The VAT and retention percentages of an invoice.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxInfo {
    /// The VAT percentage, added to the subtotal.
    pub vat: f64,

    /// The retention percentage, withheld from the payment.
    pub retention: f64,
}

impl TaxInfo {
    /// Creates a tax info from its percentages.
    pub fn new(vat: f64, retention: f64) -> TaxInfo {
        TaxInfo { vat, retention }
    }

    /// Returns the VAT amount of a base.
    ///
    /// ```
    /// # use billdex::model::TaxInfo;
    /// assert_eq!(TaxInfo::new(21.0, 0.0).vat_amount(20.0), 4.2);
    /// ```
    pub fn vat_amount(&self, base: f64) -> f64 {
        base * self.vat / 100.0
    }

    /// Returns the retained amount of a base.
    pub fn retention_amount(&self, base: f64) -> f64 {
        base * self.retention / 100.0
    }

    /// Whether the invoice is exempt from VAT.
    pub fn is_vat_exempt(&self) -> bool {
        self.vat == 0.0
    }

    /// Whether part of the payment is withheld.
    pub fn has_retention(&self) -> bool {
        self.retention != 0.0
    }
}
