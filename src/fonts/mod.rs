//! This module contains everything that helps us dealing with fonts.

pub mod manager;
pub mod styles;

use freetype::{face, Face, Library};
use printpdf::{IndirectFontRef, PdfDocumentReference, Pt};

use crate::Result;

/// A font that contains the printpdf object font needed to render text and the freetype font
/// needed to measure text.
#[derive(Debug)]
pub struct Font {
    /// The freetype face.
    freetype: Face,

    /// The printpdf font.
    printpdf: IndirectFontRef,
}

impl Font {
    /// Creates a font from a byte array and registers it in a pdf document.
    pub fn from_bytes(
        bytes: &[u8],
        library: &Library,
        document: &PdfDocumentReference,
    ) -> Result<Font> {
        Ok(Font {
            freetype: library.new_memory_face(bytes.to_vec(), 0)?,
            printpdf: document.add_external_font(bytes)?,
        })
    }

    /// Computes the text width of the font at a specified size.
    pub fn text_width(&self, text: &str, scale: Pt) -> Pt {
        let units_per_em = match self.freetype.em_size() {
            0 => 1000,
            units => units,
        };

        let sum_width = text.chars().fold(0, |acc, ch| {
            let is_ok = self
                .freetype
                .load_char(ch as usize, face::LoadFlag::NO_SCALE)
                .is_ok();

            if is_ok {
                acc + self.freetype.glyph().metrics().horiAdvance
            } else {
                acc
            }
        });

        Pt(sum_width as f64 * scale.0 / f64::from(units_per_em))
    }

    /// Returns the family and style of the font, e.g. "Inter Bold".
    pub fn name(&self) -> Option<String> {
        match (self.freetype.family_name(), self.freetype.style_name()) {
            (Some(family), Some(style)) => Some(format!("{} {}", family, style)),
            _ => None,
        }
    }

    /// Returns a reference to the printpdf font.
    pub fn printpdf(&self) -> &IndirectFontRef {
        &self.printpdf
    }
}
