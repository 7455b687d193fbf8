//! The sections of an invoice, from top to bottom.

use std::path::PathBuf;

use printpdf::Pt;

use crate::fonts::styles::{Rgb8, TextStyle};
use crate::footnotes::{Footnotes, NoteKind};
use crate::layout::constants::*;
use crate::layout::{Cursor, Layout};
use crate::model::{currency_symbol, Client, Freelancer, Invoice, Payment, TaxInfo};
use crate::surface::{Align, Blend, Primitive, Surface};
use crate::totals::Totals;
use crate::{Error, Result};

fn money(value: f64, symbol: &str) -> String {
    format!("{:.2}{}", value, symbol)
}

impl<'a, S: Surface> Layout<'a, S> {
    /// Draws the title, the id and dates of the invoice, and the logo if any.
    ///
    /// The returned cursor is marked below the lowest of the info block and the logo, and never
    /// above the minimal header height.
    pub fn header(&mut self, cursor: Cursor, invoice: &Invoice) -> Result<Cursor> {
        let labels = self.labels;
        let top = cursor.y;
        let mut cursor = cursor;

        cursor.at_x(HEADER_INFO_X);
        self.cell(
            &mut cursor,
            HEADER_INFO_WIDTH,
            labels.title,
            TextStyle::title(),
            Align::Center,
        )?;
        cursor.br(TITLE_GAP);

        let date = invoice.date().format(DATE_FORMAT).to_string();
        let due = invoice.due_date().format(DATE_FORMAT).to_string();

        for (label, value) in &[
            (labels.invoice, invoice.id.as_str()),
            (labels.date, date.as_str()),
            (labels.due, due.as_str()),
        ] {
            cursor.at_x(HEADER_INFO_X);
            let subtle = TextStyle::subtle();
            self.cell(&mut cursor, HEADER_LABEL_WIDTH, label, subtle, Align::Left)?;
            self.cell(&mut cursor, HEADER_SEPARATOR_WIDTH, ":", subtle, Align::Left)?;
            self.cell(
                &mut cursor,
                HEADER_VALUE_WIDTH,
                value,
                TextStyle::normal(),
                Align::Right,
            )?;
            cursor.br(LINE_HEIGHT);
        }
        cursor.mark();

        if let Some(logo) = &invoice.logo {
            let path = PathBuf::from(logo);
            let (width, height) = self.surface.image_size(&path)?;
            if width == 0 || height == 0 {
                return Err(Error::EmptyImage(path));
            }

            let displayed = Pt(f64::from(width) * LOGO_HEIGHT.0 / f64::from(height));
            trace!("logo {} displayed at {:.1}x{:.1}", logo, displayed.0, LOGO_HEIGHT.0);

            self.surface.draw(Primitive::Image {
                path,
                x: self.page.margin,
                y: top,
                width: displayed,
                height: LOGO_HEIGHT,
            })?;

            cursor.at_y(top);
            cursor.br(LOGO_HEIGHT + LINE_HEIGHT);
            cursor.mark();
        }

        cursor.floor(HEADER_MIN_HEIGHT);
        Ok(cursor)
    }

    /// Draws a rule at the lowest position reached, followed by a blank line.
    pub fn divider(&mut self, cursor: Cursor) -> Result<Cursor> {
        let mut cursor = cursor;
        cursor.settle();
        self.rule(self.page.margin, self.page.right(), cursor.y, Rgb8::BLUE)?;
        cursor.br(LINE_HEIGHT);
        Ok(cursor)
    }

    /// Writes the non empty optional lines of a column.
    fn column_lines(&mut self, cursor: &mut Cursor, x: Pt, width: Pt, lines: &[&str]) -> Result<()> {
        for line in lines.iter().filter(|line| !line.is_empty()) {
            cursor.at_x(x);
            self.cell(cursor, width, line, TextStyle::normal(), Align::Left)?;
            cursor.br(PARTY_LINE_HEIGHT);
        }
        Ok(())
    }

    /// Draws the issuer and the receiver side by side.
    ///
    /// Each column has its label and the name of the party, then the lines that are filled in.
    pub fn parties(&mut self, cursor: Cursor, from: &Freelancer, to: &Client) -> Result<Cursor> {
        let labels = self.labels;
        let left_x = cursor.x;

        let mut left = cursor;
        self.cell(&mut left, FROM_WIDTH, labels.from, TextStyle::subtle(), Align::Left)?;
        left.br(LINE_HEIGHT);
        self.cell(&mut left, FROM_WIDTH, &from.name, TextStyle::normal(), Align::Left)?;
        left.br(PARTY_LINE_HEIGHT);
        self.column_lines(
            &mut left,
            left_x,
            FROM_WIDTH,
            &[
                from.company.as_str(),
                from.vat_id.as_str(),
                from.address1.as_str(),
                from.address2.as_str(),
                from.phone.as_str(),
            ],
        )?;
        left.br(LINE_HEIGHT);
        left.mark();

        let mut right = cursor;
        right.at_x(TO_X);
        self.cell(&mut right, TO_WIDTH, labels.to, TextStyle::subtle(), Align::Left)?;
        right.br(LINE_HEIGHT);
        right.at_x(TO_X);
        self.cell(&mut right, TO_WIDTH, &to.name, TextStyle::normal(), Align::Left)?;
        right.br(PARTY_LINE_HEIGHT);
        self.column_lines(
            &mut right,
            TO_X,
            TO_WIDTH,
            &[
                to.vat_id.as_str(),
                to.address1.as_str(),
                to.address2.as_str(),
                to.phone.as_str(),
            ],
        )?;
        right.mark();

        Ok(Cursor::join(left, right))
    }

    /// Writes a row of the item table.
    fn row(&mut self, cursor: &mut Cursor, cells: [&str; 4], style: TextStyle) -> Result<()> {
        let columns = [
            (ITEM_DESC_WIDTH, Align::Left),
            (ITEM_QTY_WIDTH, Align::Right),
            (ITEM_RATE_WIDTH, Align::Right),
            (ITEM_AMOUNT_WIDTH, Align::Right),
        ];

        for (text, (width, align)) in cells.iter().zip(columns.iter()) {
            self.cell(cursor, *width, text, style, *align)?;
        }

        cursor.br(LINE_HEIGHT);
        Ok(())
    }

    /// Draws the item table, then the payment box and the totals side by side.
    pub fn items(
        &mut self,
        cursor: Cursor,
        invoice: &Invoice,
        totals: &Totals,
        footnotes: &Footnotes,
    ) -> Result<Cursor> {
        let labels = self.labels;
        let symbol = currency_symbol(&invoice.currency);
        let mut cursor = cursor;

        self.row(
            &mut cursor,
            [labels.description, labels.quantity, labels.rate, labels.amount],
            TextStyle::subtle(),
        )?;

        for item in &invoice.items {
            let quantity = item.quantity.to_string();
            let rate = money(item.rate, symbol);
            let amount = money(item.amount(), symbol);
            self.row(
                &mut cursor,
                [item.description.as_str(), &quantity, &rate, &amount],
                TextStyle::normal(),
            )?;
        }

        cursor.br(LINE_HEIGHT);

        let payment = self.payment(cursor, &invoice.payment)?;
        let totals = self.totals(cursor, totals, &invoice.tax, footnotes, symbol)?;

        Ok(Cursor::join(payment, totals))
    }

    /// Draws the payment box.
    fn payment(&mut self, cursor: Cursor, payment: &Payment) -> Result<Cursor> {
        let labels = self.labels;
        let mut cursor = cursor;

        self.cell(
            &mut cursor,
            PAYMENT_BOX_WIDTH,
            labels.payment_info,
            TextStyle::subtle(),
            Align::Left,
        )?;
        cursor.br(LINE_HEIGHT);

        self.surface.draw(Primitive::Rect {
            x: self.page.margin,
            y: cursor.y,
            width: PAYMENT_BOX_WIDTH,
            height: PAYMENT_BOX_HEIGHT,
            color: Rgb8::GRAY,
        })?;
        cursor.br(PAYMENT_PADDING);

        let lines = [
            (labels.holder, &payment.holder, PARTY_LINE_HEIGHT),
            (labels.iban, &payment.iban, PARTY_LINE_HEIGHT),
            (labels.swift, &payment.swift, LINE_HEIGHT),
        ];

        for (label, value, height) in &lines {
            cursor.at_x(self.page.margin + PAYMENT_PADDING);
            let text = format!("{}{}", label, value);
            let width = PAYMENT_BOX_WIDTH - PAYMENT_PADDING - PAYMENT_PADDING;
            self.cell(&mut cursor, width, &text, TextStyle::normal(), Align::Left)?;
            cursor.br(*height);
        }

        cursor.mark();
        Ok(cursor)
    }

    /// Draws the totals rows, under a rule.
    fn totals(
        &mut self,
        cursor: Cursor,
        totals: &Totals,
        tax: &TaxInfo,
        footnotes: &Footnotes,
        symbol: &str,
    ) -> Result<Cursor> {
        let labels = self.labels;
        let mut cursor = cursor;

        cursor.br(LINE_HEIGHT);
        let rule_x = self.page.margin + ITEM_DESC_WIDTH;
        self.rule(rule_x, self.page.right(), cursor.y, Rgb8::BLUE)?;
        cursor.br(Pt(LINE_HEIGHT.0 / 2.0));

        let normal = TextStyle::normal();

        let subtotal = money(totals.subtotal, symbol);
        self.row(&mut cursor, ["", labels.subtotal, "", &subtotal], normal)?;

        let vat_label = footnotes.marked(labels.vat, NoteKind::VatExempt);
        let vat_rate = format!("{:.0}%", tax.vat);
        let vat = money(totals.vat, symbol);
        self.row(&mut cursor, ["", &vat_label, &vat_rate, &vat], normal)?;

        if tax.has_retention() {
            let label = footnotes.marked(labels.retention, NoteKind::Retention);
            let rate = format!("-{:.0}%", tax.retention);
            let retention = money(-totals.retention, symbol);
            self.row(&mut cursor, ["", &label, &rate, &retention], normal)?;
        }

        let total = money(totals.total, symbol);
        self.row(
            &mut cursor,
            ["", labels.total, "", &total],
            TextStyle::total(),
        )?;

        cursor.mark();
        Ok(cursor)
    }

    /// Draws the notes, anchored to the bottom of the page.
    pub fn notes(&mut self, cursor: Cursor, footnotes: &Footnotes) -> Result<Cursor> {
        let mut cursor = cursor;
        let height = Pt(LINE_HEIGHT.0 * footnotes.len() as f64);
        cursor.at_y(self.page.height - self.page.margin - height);

        for note in footnotes.iter() {
            let width = self.page.text_width();
            self.cell(&mut cursor, width, &note.line(), TextStyle::normal(), Align::Left)?;
            cursor.br(LINE_HEIGHT + NOTE_GAP);
        }

        cursor.mark();
        Ok(cursor)
    }

    /// Draws the draft watermark over the page.
    pub fn draft_overlay(&mut self) -> Result<()> {
        let labels = self.labels;

        for i in 0..DRAFT_REPEAT {
            let x = if i % 2 == 1 {
                self.page.width - DRAFT_HORIZONTAL_SHIFT
            } else {
                self.page.margin
            };
            let y = self.page.margin + Pt(DRAFT_VERTICAL_SHIFT.0 * i as f64);

            self.surface.draw(Primitive::Watermark {
                x,
                y,
                text: String::from(labels.draft),
                style: TextStyle::draft(),
                blend: Blend {
                    alpha: DRAFT_ALPHA,
                    overlay: true,
                },
            })?;
        }

        Ok(())
    }
}
