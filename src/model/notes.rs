//! The notes printed at the bottom of an invoice.

use serde::{Deserialize, Serialize};

use crate::model::TaxInfo;

/// The note texts of the configuration, from which the notes of new invoices are picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteTexts {
    /// The note printed on every invoice.
    pub no_due: String,

    /// The legal notice of invoices exempt from VAT.
    pub vat_0: String,

    /// The legal notice of invoices subject to retention.
    pub retention_not_0: String,
}

/// The notes of an invoice.
///
/// The default note is always present, the two legal notices only when the tax configuration
/// calls for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    /// The note printed on every invoice.
    pub default: String,

    /// The notice of a zero VAT invoice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_exempt: Option<String>,

    /// The notice of an invoice with a non zero retention.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retention: Option<String>,
}

impl Notes {
    /// Creates notes with only a default note.
    pub fn new<S: Into<String>>(default: S) -> Notes {
        Notes {
            default: default.into(),
            vat_exempt: None,
            retention: None,
        }
    }

    /// Picks the notes matching a tax configuration.
    pub fn for_tax<S: Into<String>>(default: S, tax: &TaxInfo, texts: &NoteTexts) -> Notes {
        Notes {
            default: default.into(),
            vat_exempt: if tax.is_vat_exempt() {
                Some(texts.vat_0.clone())
            } else {
                None
            },
            retention: if tax.has_retention() {
                Some(texts.retention_not_0.clone())
            } else {
                None
            },
        }
    }

    /// Returns the notes in printing order: default first, then the VAT notice, then the
    /// retention notice. Absent notices leave no gap.
    ///
    /// ```
    /// # use billdex::model::Notes;
    /// let mut notes = Notes::new("Thanks");
    /// notes.retention = Some(String::from("Retained"));
    /// assert_eq!(notes.to_ordered_notes(), vec!["Thanks", "Retained"]);
    /// ```
    pub fn to_ordered_notes(&self) -> Vec<&str> {
        let mut notes = vec![self.default.as_str()];
        notes.extend(self.vat_exempt.as_deref());
        notes.extend(self.retention.as_deref());
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts() -> NoteTexts {
        NoteTexts {
            no_due: String::from("Pay within 28 days."),
            vat_0: String::from("Exempt from VAT."),
            retention_not_0: String::from("Subject to retention."),
        }
    }

    #[test]
    fn picks_notices_from_taxes() {
        let notes = Notes::for_tax("Thanks", &TaxInfo::new(0.0, 15.0), &texts());
        assert_eq!(
            notes.to_ordered_notes(),
            vec!["Thanks", "Exempt from VAT.", "Subject to retention."]
        );

        let notes = Notes::for_tax("Thanks", &TaxInfo::new(21.0, 0.0), &texts());
        assert_eq!(notes.to_ordered_notes(), vec!["Thanks"]);
    }

    #[test]
    fn ordering_is_stable() {
        let notes = Notes::for_tax("Thanks", &TaxInfo::new(0.0, 7.0), &texts());
        assert_eq!(notes.to_ordered_notes(), notes.to_ordered_notes());
    }

    #[test]
    fn absent_notices_are_not_serialized() {
        let json = serde_json::to_string(&Notes::new("Thanks")).unwrap();
        assert_eq!(json, r#"{"default":"Thanks"}"#);
    }
}
