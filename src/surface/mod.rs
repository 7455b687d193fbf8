//! Drawing surfaces: where the primitives computed by the layout end up.
//!
//! Coordinates are in points from the top left corner of the page, `y` growing downwards.

pub mod pdf;
pub mod recorder;

use std::fmt;
use std::path::{Path, PathBuf};

use printpdf::Pt;

use crate::assets;
use crate::fonts::styles::{Rgb8, TextStyle};
use crate::Result;

pub use pdf::PdfSurface;
pub use recorder::Recorder;

/// The horizontal alignment of some text in its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    /// Against the left edge.
    Left,

    /// In the middle.
    Center,

    /// Against the right edge.
    Right,
}

/// How a watermark is composed with what lies below.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Blend {
    /// The opacity of the watermark.
    pub alpha: f64,

    /// Whether the overlay blend mode is used.
    pub overlay: bool,
}

/// A positioned drawing operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Some text in a cell of a given width.
    Text {
        /// The left of the cell.
        x: Pt,

        /// The top of the cell.
        y: Pt,

        /// The width of the cell, used for alignment.
        width: Pt,

        /// The text.
        text: String,

        /// The style of the text.
        style: TextStyle,

        /// The alignment of the text in the cell.
        align: Align,

        /// Whether the outline of the cell is drawn.
        border: bool,
    },

    /// A straight stroked line.
    Line {
        /// The start of the line.
        from: (Pt, Pt),

        /// The end of the line.
        to: (Pt, Pt),

        /// The stroke color.
        color: Rgb8,
    },

    /// A filled and stroked rectangle.
    Rect {
        /// The left of the rectangle.
        x: Pt,

        /// The top of the rectangle.
        y: Pt,

        /// The width of the rectangle.
        width: Pt,

        /// The height of the rectangle.
        height: Pt,

        /// The fill and stroke color.
        color: Rgb8,
    },

    /// An image scaled to a box.
    Image {
        /// The path to the image file.
        path: PathBuf,

        /// The left of the image.
        x: Pt,

        /// The top of the image.
        y: Pt,

        /// The displayed width.
        width: Pt,

        /// The displayed height.
        height: Pt,
    },

    /// Some text composed over the page.
    Watermark {
        /// The left of the text.
        x: Pt,

        /// The top of the text.
        y: Pt,

        /// The text.
        text: String,

        /// The style of the text.
        style: TextStyle,

        /// How the text is composed.
        blend: Blend,
    },
}

impl Primitive {
    /// Returns the text of a text or watermark primitive.
    pub fn text(&self) -> Option<&str> {
        match self {
            Primitive::Text { text, .. } | Primitive::Watermark { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Returns the top of the primitive.
    pub fn top(&self) -> Pt {
        match self {
            Primitive::Text { y, .. }
            | Primitive::Rect { y, .. }
            | Primitive::Image { y, .. }
            | Primitive::Watermark { y, .. } => *y,
            Primitive::Line { from, .. } => from.1,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Primitive::Text {
                x,
                y,
                width,
                text,
                style,
                align,
                ..
            } => write!(
                fmt,
                "text {:.1} {:.1} w={:.1} {:?} [{}] {:?}",
                x.0, y.0, width.0, align, style, text
            ),
            Primitive::Line { from, to, color } => write!(
                fmt,
                "line {:.1} {:.1} -> {:.1} {:.1} {}",
                (from.0).0,
                (from.1).0,
                (to.0).0,
                (to.1).0,
                color
            ),
            Primitive::Rect {
                x,
                y,
                width,
                height,
                color,
            } => write!(
                fmt,
                "rect {:.1} {:.1} {:.1}x{:.1} {}",
                x.0, y.0, width.0, height.0, color
            ),
            Primitive::Image {
                path,
                x,
                y,
                width,
                height,
            } => write!(
                fmt,
                "image {:.1} {:.1} {:.1}x{:.1} {}",
                x.0,
                y.0,
                width.0,
                height.0,
                path.display()
            ),
            Primitive::Watermark {
                x,
                y,
                text,
                style,
                blend,
            } => write!(
                fmt,
                "watermark {:.1} {:.1} [{}] alpha={} overlay={} {:?}",
                x.0, y.0, style, blend.alpha, blend.overlay, text
            ),
        }
    }
}

/// Something primitives can be drawn on.
pub trait Surface {
    /// Draws a primitive. Any failure aborts the document.
    fn draw(&mut self, primitive: Primitive) -> Result<()>;

    /// Returns the width and height in pixels of an image.
    fn image_size(&self, path: &Path) -> Result<(u32, u32)> {
        assets::image_dimensions(path)
    }
}
