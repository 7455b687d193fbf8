//! The parties of an invoice and the payment details.

use serde::{Deserialize, Serialize};

/// The issuer of the invoices, read from the configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Freelancer {
    /// The company name.
    pub company: String,

    /// The full name.
    pub name: String,

    /// The email address.
    pub email: String,

    /// The phone number.
    pub phone: String,

    /// The VAT identification number.
    pub vat_id: String,

    /// The street address.
    pub address1: String,

    /// The city, region and zip code.
    pub address2: String,
}

/// The receiver of an invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Client {
    /// The id of the client in the client store.
    pub id: String,

    /// The name of the client.
    pub name: String,

    /// The VAT identification number.
    pub vat_id: String,

    /// The street address.
    pub address1: String,

    /// The city, region and zip code.
    pub address2: String,

    /// The phone number.
    pub phone: String,
}

/// Where the invoice should be paid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payment {
    /// The bank account holder.
    pub holder: String,

    /// The IBAN of the account.
    pub iban: String,

    /// The SWIFT/BIC code of the bank.
    pub swift: String,
}
