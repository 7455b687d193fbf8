//! The text styles of an invoice.

use std::fmt;

use printpdf::Pt;

/// The weight of a font. Invoices only need two of them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// The regular weight.
    Regular,

    /// The bold weight.
    Bold,
}

impl Weight {
    /// Returns the name under which the font of this weight is registered.
    pub fn font_name(self) -> &'static str {
        match self {
            Weight::Regular => "regular",
            Weight::Bold => "bold",
        }
    }
}

/// An 8 bit rgb color.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb8(pub u8, pub u8, pub u8);

impl Rgb8 {
    /// The color of rules.
    pub const BLUE: Rgb8 = Rgb8(0, 0, 200);

    /// The color of the payment box and of the draft mark.
    pub const GRAY: Rgb8 = Rgb8(192, 192, 192);

    /// The color of regular text.
    pub const BLACK: Rgb8 = Rgb8(24, 24, 24);

    /// The color of labels.
    pub const LAVENDER: Rgb8 = Rgb8(128, 128, 192);

    /// Returns the components between 0 and 1.
    pub fn unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        )
    }

    /// Mixes the color with a white background, as a color painted with this opacity would
    /// look on paper.
    pub fn over_white(self, alpha: f64) -> Rgb8 {
        let mix = |c: u8| (f64::from(c) * alpha + 255.0 * (1.0 - alpha)).round() as u8;
        Rgb8(mix(self.0), mix(self.1), mix(self.2))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// The style of some text: weight, size and color.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// The weight of the font.
    pub weight: Weight,

    /// The size of the font.
    pub size: Pt,

    /// The color of the text.
    pub color: Rgb8,
}

impl TextStyle {
    /// The style of values.
    pub fn normal() -> TextStyle {
        TextStyle {
            weight: Weight::Regular,
            size: Pt(10.0),
            color: Rgb8::BLACK,
        }
    }

    /// The style of labels.
    pub fn subtle() -> TextStyle {
        TextStyle {
            weight: Weight::Regular,
            size: Pt(12.0),
            color: Rgb8::LAVENDER,
        }
    }

    /// The style of the total row.
    pub fn total() -> TextStyle {
        TextStyle {
            weight: Weight::Bold,
            size: Pt(14.0),
            color: Rgb8::LAVENDER,
        }
    }

    /// The style of the title.
    pub fn title() -> TextStyle {
        TextStyle {
            weight: Weight::Bold,
            size: Pt(24.0),
            color: Rgb8::BLACK,
        }
    }

    /// The style of the draft watermark.
    pub fn draft() -> TextStyle {
        TextStyle {
            weight: Weight::Bold,
            size: Pt(92.0),
            color: Rgb8::GRAY,
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "{} {} {}",
            self.weight.font_name(),
            self.size.0,
            self.color
        )
    }
}
