//! The invoice record and its items.

use std::result;

use chrono::{Duration, NaiveDate};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::{Client, Freelancer, Notes, Payment, TaxInfo};

/// Serializes a due duration as a whole number of days.
pub fn serialize_days<S: Serializer>(
    due: &Duration,
    serializer: S,
) -> result::Result<S::Ok, S::Error> {
    serializer.serialize_i64(due.num_days())
}

/// Deserializes a due duration from a whole number of days, refusing negative values.
pub fn deserialize_days<'a, D: Deserializer<'a>>(deserializer: D) -> Result<Duration, D::Error> {
    let days = i64::deserialize(deserializer)?;
    if days < 0 {
        return Err(de::Error::custom(format!(
            "due must not be negative, got {} days",
            days
        )));
    }
    Ok(Duration::days(days))
}

/// The life cycle of an invoice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Still being edited.
    Draft,

    /// Sent to the client.
    Issued,

    /// Paid by the client.
    Paid,
}

impl Default for Status {
    fn default() -> Status {
        Status::Draft
    }
}

/// A billed line of an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// What is billed.
    pub description: String,

    /// How many units are billed.
    pub quantity: u32,

    /// The price of one unit.
    pub rate: f64,

    /// A VAT percentage specific to this item. Kept on the record, the totals use the invoice
    /// taxes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,
}

impl Item {
    /// Creates an item without VAT override.
    pub fn new<S: Into<String>>(description: S, quantity: u32, rate: f64) -> Item {
        Item {
            description: description.into(),
            quantity,
            rate,
            vat: None,
        }
    }

    /// Returns the billed amount of the item.
    ///
    /// ```
    /// # use billdex::model::Item;
    /// assert_eq!(Item::new("Widget", 2, 10.0).amount(), 20.0);
    /// ```
    pub fn amount(&self) -> f64 {
        f64::from(self.quantity) * self.rate
    }
}

/// An invoice, as stored in the invoice store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// The id of the invoice, unique in the store.
    pub id: String,

    /// Where the invoice is in its life cycle.
    #[serde(default)]
    pub status: Status,

    /// The path to the logo printed in the header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// The issuer.
    pub from: Freelancer,

    /// The receiver.
    pub to: Client,

    /// The issue date.
    date: NaiveDate,

    /// The delay after which the invoice is due.
    #[serde(rename = "due_days")]
    #[serde(serialize_with = "serialize_days")]
    #[serde(deserialize_with = "deserialize_days")]
    due: Duration,

    /// The billed items, in order of addition.
    #[serde(default)]
    pub items: Vec<Item>,

    /// The taxes.
    pub tax: TaxInfo,

    /// The discount percentage.
    #[serde(default)]
    pub discount: f64,

    /// The currency code, e.g. "EUR".
    pub currency: String,

    /// The payment details.
    pub payment: Payment,

    /// The notes printed at the bottom of the page.
    pub notes: Notes,
}

impl Invoice {
    /// Creates an invoice without items.
    ///
    /// A negative due delay is clamped to zero.
    pub fn new<S: Into<String>>(
        id: S,
        from: Freelancer,
        to: Client,
        date: NaiveDate,
        due: Duration,
    ) -> Invoice {
        Invoice {
            id: id.into(),
            status: Status::Draft,
            logo: None,
            from,
            to,
            date,
            due: due.max(Duration::zero()),
            items: vec![],
            tax: TaxInfo::default(),
            discount: 0.0,
            currency: String::new(),
            payment: Payment::default(),
            notes: Notes::default(),
        }
    }

    /// Returns the issue date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the delay after which the invoice is due.
    pub fn due(&self) -> Duration {
        self.due
    }

    /// Returns the date at which the invoice is due.
    pub fn due_date(&self) -> NaiveDate {
        self.date + self.due
    }

    /// Appends items to the invoice.
    pub fn add_items<I: IntoIterator<Item = Item>>(&mut self, items: I) {
        self.items.extend(items);
    }
}
