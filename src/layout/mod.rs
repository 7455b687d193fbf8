//! This module lays out an invoice on a single page.
//!
//! The layout owns no state besides the surface it draws on: the pen position travels from
//! section to section in a [`Cursor`].

pub mod constants;
pub mod cursor;
pub mod labels;
pub mod sections;

use printpdf::Pt;
use serde::{Deserialize, Serialize};

use crate::config::{deserialize_pt, serialize_pt};
use crate::fonts::styles::{Rgb8, TextStyle};
use crate::surface::{Align, Primitive, Surface};
use crate::Result;

pub use cursor::Cursor;
pub use labels::Labels;

/// The size and margin of the page.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// The width of the page.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub width: Pt,

    /// The height of the page.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub height: Pt,

    /// The margin on every side of the page.
    #[serde(serialize_with = "serialize_pt")]
    #[serde(deserialize_with = "deserialize_pt")]
    pub margin: Pt,
}

impl PageGeometry {
    /// An A4 page with 40pt margins.
    pub fn a4() -> PageGeometry {
        PageGeometry {
            width: Pt(595.0),
            height: Pt(842.0),
            margin: Pt(40.0),
        }
    }

    /// Returns the right end of the writable area.
    pub fn right(&self) -> Pt {
        self.width - self.margin
    }

    /// Returns the width between the margins.
    pub fn text_width(&self) -> Pt {
        self.width - self.margin - self.margin
    }
}

impl Default for PageGeometry {
    fn default() -> PageGeometry {
        PageGeometry::a4()
    }
}

/// Draws the sections of an invoice on a surface.
pub struct Layout<'a, S: Surface> {
    /// Where the primitives go.
    surface: &'a mut S,

    /// The page the invoice is laid out on.
    page: PageGeometry,

    /// The fixed texts.
    labels: &'a Labels,

    /// Whether text cells are outlined.
    debug: bool,
}

impl<'a, S: Surface> Layout<'a, S> {
    /// Creates a layout drawing on a surface.
    pub fn new(surface: &'a mut S, page: PageGeometry, labels: &'a Labels) -> Layout<'a, S> {
        Layout {
            surface,
            page,
            labels,
            debug: false,
        }
    }

    /// Outlines every text cell, to see where things are.
    pub fn with_debug(mut self, debug: bool) -> Layout<'a, S> {
        self.debug = debug;
        self
    }

    /// Returns the page geometry.
    pub fn page(&self) -> PageGeometry {
        self.page
    }

    /// Returns a cursor at the top left corner of the writable area.
    pub fn start(&self) -> Cursor {
        Cursor::new(self.page.margin, self.page.margin)
    }

    /// Writes some text in a cell at the cursor, and moves the cursor past the cell.
    ///
    /// Empty cells only move the cursor, unless they are outlined.
    fn cell(
        &mut self,
        cursor: &mut Cursor,
        width: Pt,
        text: &str,
        style: TextStyle,
        align: Align,
    ) -> Result<()> {
        if !text.is_empty() || self.debug {
            self.surface.draw(Primitive::Text {
                x: cursor.x,
                y: cursor.y,
                width,
                text: String::from(text),
                style,
                align,
                border: self.debug,
            })?;
        }

        cursor.advance(width);
        Ok(())
    }

    /// Draws a horizontal rule.
    fn rule(&mut self, from: Pt, to: Pt, y: Pt, color: Rgb8) -> Result<()> {
        self.surface.draw(Primitive::Line {
            from: (from, y),
            to: (to, y),
            color,
        })
    }
}
