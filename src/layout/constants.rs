//! Various constants used for laying out the sections of an invoice.

use printpdf::Pt;

/// The format of the dates printed in the header.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Vertical rhythm.
/// The height of a regular line.
pub const LINE_HEIGHT: Pt = Pt(20.0);

/// The height of a line in the parties and payment blocks.
pub const PARTY_LINE_HEIGHT: Pt = Pt(18.0);

/// The gap below the title.
pub const TITLE_GAP: Pt = Pt(36.0);

/// The extra gap after each note.
pub const NOTE_GAP: Pt = Pt(5.0);

// Header.
/// The left of the header info block.
pub const HEADER_INFO_X: Pt = Pt(400.0);

/// The width of the header info block, in which the title is centered.
pub const HEADER_INFO_WIDTH: Pt = Pt(155.0);

/// The width of a header label.
pub const HEADER_LABEL_WIDTH: Pt = Pt(45.0);

/// The width of the colon between a header label and its value.
pub const HEADER_SEPARATOR_WIDTH: Pt = Pt(10.0);

/// The width of a header value.
pub const HEADER_VALUE_WIDTH: Pt = Pt(100.0);

/// The height at which the logo is displayed.
pub const LOGO_HEIGHT: Pt = Pt(100.0);

/// The header never ends above this.
pub const HEADER_MIN_HEIGHT: Pt = Pt(160.0);

// Parties.
/// The width of the issuer column.
pub const FROM_WIDTH: Pt = Pt(250.0);

/// The left of the receiver column.
pub const TO_X: Pt = Pt(320.0);

/// The width of the receiver column.
pub const TO_WIDTH: Pt = Pt(275.0);

// Items.
/// The width of the description column.
pub const ITEM_DESC_WIDTH: Pt = Pt(300.0);

/// The width of the quantity column.
pub const ITEM_QTY_WIDTH: Pt = Pt(60.0);

/// The width of the rate column.
pub const ITEM_RATE_WIDTH: Pt = Pt(75.0);

/// The width of the amount column.
pub const ITEM_AMOUNT_WIDTH: Pt = Pt(80.0);

// Payment.
/// The width of the payment box.
pub const PAYMENT_BOX_WIDTH: Pt = Pt(260.0);

/// The height of the payment box.
pub const PAYMENT_BOX_HEIGHT: Pt = Pt(60.0);

/// The inner padding of the payment box.
pub const PAYMENT_PADDING: Pt = Pt(5.0);

// Draft overlay.
/// How many times the draft mark is printed.
pub const DRAFT_REPEAT: usize = 4;

/// The opacity of the draft mark.
pub const DRAFT_ALPHA: f64 = 0.65;

/// The vertical distance between two draft marks.
pub const DRAFT_VERTICAL_SHIFT: Pt = Pt(200.0);

/// Odd draft marks start this far from the right edge of the page.
pub const DRAFT_HORIZONTAL_SHIFT: Pt = Pt(350.0);
