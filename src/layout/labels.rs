//! The fixed texts printed on an invoice, in the supported languages.

use crate::{Error, Result};

/// The labels of an invoice.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels {
    /// The title of the page.
    pub title: &'static str,

    /// The label of the invoice id.
    pub invoice: &'static str,

    /// The label of the issue date.
    pub date: &'static str,

    /// The label of the due date.
    pub due: &'static str,

    /// The heading of the issuer.
    pub from: &'static str,

    /// The heading of the receiver.
    pub to: &'static str,

    /// The header of the description column.
    pub description: &'static str,

    /// The header of the quantity column.
    pub quantity: &'static str,

    /// The header of the rate column.
    pub rate: &'static str,

    /// The header of the amount column.
    pub amount: &'static str,

    /// The heading of the payment box.
    pub payment_info: &'static str,

    /// The prefix of the account holder.
    pub holder: &'static str,

    /// The prefix of the IBAN.
    pub iban: &'static str,

    /// The prefix of the SWIFT code.
    pub swift: &'static str,

    /// The label of the subtotal row.
    pub subtotal: &'static str,

    /// The label of the VAT row.
    pub vat: &'static str,

    /// The label of the retention row.
    pub retention: &'static str,

    /// The label of the total row.
    pub total: &'static str,

    /// The watermark of drafts.
    pub draft: &'static str,
}

impl Labels {
    /// The english labels.
    pub fn english() -> Labels {
        Labels {
            title: "INVOICE",
            invoice: "Invoice",
            date: "Date",
            due: "Due",
            from: "From",
            to: "To",
            description: "Description",
            quantity: "Quantity",
            rate: "Rate",
            amount: "Amount",
            payment_info: "Payment Info",
            holder: "Holder: ",
            iban: "IBAN: ",
            swift: "Swift: ",
            subtotal: "Subtotal",
            vat: "VAT",
            retention: "IRPF",
            total: "Total",
            draft: "DRAFT",
        }
    }

    /// The spanish labels.
    pub fn spanish() -> Labels {
        Labels {
            title: "FACTURA",
            invoice: "Factura",
            date: "Fecha",
            due: "Vence",
            from: "De",
            to: "Para",
            description: "Descripción",
            quantity: "Cantidad",
            rate: "Precio",
            amount: "Importe",
            payment_info: "Información de Pago",
            holder: "Titular: ",
            iban: "IBAN: ",
            swift: "Swift: ",
            subtotal: "Subtotal",
            vat: "IVA",
            retention: "IRPF",
            total: "Total",
            draft: "BORRADOR",
        }
    }

    /// Returns the labels of a language code, `en` or `es`.
    pub fn for_language(language: &str) -> Result<Labels> {
        match language {
            "en" => Ok(Labels::english()),
            "es" => Ok(Labels::spanish()),
            other => Err(Error::UnsupportedLanguage(String::from(other))),
        }
    }
}

impl Default for Labels {
    fn default() -> Labels {
        Labels::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("en", "VAT" ; "english")]
    #[test_case("es", "IVA" ; "spanish")]
    fn known_languages(language: &str, vat: &str) {
        assert_eq!(Labels::for_language(language).unwrap().vat, vat);
    }

    #[test]
    fn unknown_language_is_an_error() {
        match Labels::for_language("fr") {
            Err(Error::UnsupportedLanguage(lang)) => assert_eq!(lang, "fr"),
            _ => panic!("expected an unsupported language"),
        }
    }
}
