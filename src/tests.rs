//! End to end tests, laying out whole invoices on a recorder.

use chrono::{Duration, NaiveDate};
use printpdf::Pt;

use crate::document::{Assembler, DumpRenderer};
use crate::layout::{Labels, PageGeometry};
use crate::model::{Client, Freelancer, Invoice, Item, NoteTexts, Notes, Payment, TaxInfo};
use crate::surface::{Primitive, Recorder};

fn freelancer() -> Freelancer {
    Freelancer {
        company: String::from("Studio Ltd"),
        name: String::from("Jane Doe"),
        email: String::from("jane@example.com"),
        phone: String::from("+34 600000000"),
        vat_id: String::from("ES12345678A"),
        address1: String::from("1 Main Street"),
        address2: String::from("Madrid, 28001"),
    }
}

fn client() -> Client {
    Client {
        id: String::from("acme"),
        name: String::from("Acme Corp"),
        vat_id: String::from("ESB1234567"),
        address1: String::from("2 Side Street"),
        address2: String::from("Barcelona, 08001"),
        phone: String::new(),
    }
}

fn invoice(vat: f64, retention: f64) -> Invoice {
    let mut invoice = Invoice::new(
        "F24-001",
        freelancer(),
        client(),
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        Duration::days(30),
    );

    invoice.currency = String::from("EUR");
    invoice.tax = TaxInfo::new(vat, retention);
    invoice.payment = Payment {
        holder: String::from("Jane Doe"),
        iban: String::from("ES00 0000 0000 00 0000000000"),
        swift: String::from("ABCDESMMXXX"),
    };

    let mut notes = Notes::new("Thanks for your business.");
    if vat == 0.0 {
        notes.vat_exempt = Some(String::from("VAT exempt."));
    }
    if retention != 0.0 {
        notes.retention = Some(String::from("Retention applies."));
    }
    invoice.notes = notes;

    invoice.add_items(vec![Item::new("Widget", 2, 10.0)]);
    invoice
}

fn renderer() -> DumpRenderer {
    Assembler::new(Recorder::new(), PageGeometry::a4(), Labels::english())
}

fn render(invoice: &Invoice, draft: bool) -> DumpRenderer {
    let mut renderer = renderer();
    renderer.assemble(invoice, draft).unwrap();
    renderer
}

fn top_of(recorder: &Recorder, text: &str) -> Pt {
    recorder
        .find_text(text)
        .map(Primitive::top)
        .unwrap_or_else(|| panic!("{:?} was not drawn", text))
}

fn rules(recorder: &Recorder) -> Vec<((Pt, Pt), (Pt, Pt))> {
    recorder
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

fn notes(recorder: &Recorder) -> Vec<&str> {
    let texts = recorder.texts();
    let first = texts
        .iter()
        .position(|t| t.ends_with("Thanks for your business."))
        .unwrap();
    texts[first..].to_vec()
}

#[test]
fn vat_only_invoice() {
    let renderer = render(&invoice(21.0, 0.0), false);
    let recorder = renderer.surface();
    let texts = recorder.texts();

    for expected in &["20.00€", "4.20€", "24.20€", "VAT", "21%", "Subtotal", "Total"] {
        assert!(texts.contains(expected), "{} is missing", expected);
    }

    assert!(!texts.contains(&"IRPF"));
    assert!(!texts.iter().any(|t| t.starts_with("VAT*")));
    assert_eq!(notes(recorder), vec!["Thanks for your business."]);
}

#[test]
fn vat_exempt_invoice_with_retention() {
    let renderer = render(&invoice(0.0, 15.0), false);
    let recorder = renderer.surface();
    let texts = recorder.texts();

    for expected in &["VAT*", "0%", "0.00€", "IRPF**", "-15%", "-3.00€", "17.00€"] {
        assert!(texts.contains(expected), "{} is missing", expected);
    }

    assert_eq!(
        notes(recorder),
        vec![
            "Thanks for your business.",
            "*VAT exempt.",
            "**Retention applies."
        ]
    );
}

#[test]
fn retention_alone_has_one_mark() {
    let renderer = render(&invoice(21.0, 15.0), false);
    let texts = renderer.surface().texts();

    assert!(texts.contains(&"VAT"));
    assert!(texts.contains(&"IRPF*"));
    assert!(texts.contains(&"21.20€"));
    assert_eq!(
        notes(renderer.surface()),
        vec!["Thanks for your business.", "*Retention applies."]
    );
}

#[test]
fn header_values() {
    let renderer = render(&invoice(21.0, 0.0), false);
    let recorder = renderer.surface();

    assert_eq!(top_of(recorder, "INVOICE"), Pt(40.0));
    assert_eq!(top_of(recorder, "F24-001"), Pt(76.0));
    assert_eq!(top_of(recorder, "2024-01-31"), Pt(96.0));
    assert_eq!(top_of(recorder, "2024-03-01"), Pt(116.0));
}

#[test]
fn sections_follow_the_lowest_column() {
    let renderer = render(&invoice(21.0, 0.0), false);
    let recorder = renderer.surface();
    let rules = rules(recorder);

    // the header is floored at 160
    assert_eq!((rules[0].0).1, Pt(160.0));

    // the issuer column has six lines and a blank one, the receiver column four lines
    assert_eq!((rules[1].0).1, Pt(180.0 + 20.0 + 6.0 * 18.0 + 20.0));
    assert_eq!(top_of(recorder, "Description"), Pt(348.0));

    // the totals rule starts one line below the payment label
    assert_eq!(top_of(recorder, "Payment Info"), Pt(408.0));
    assert_eq!(rules[2].0, (Pt(340.0), Pt(428.0)));
    assert_eq!(rules[2].1, (Pt(555.0), Pt(428.0)));
    assert_eq!(top_of(recorder, "Subtotal"), Pt(438.0));
}

#[test]
fn receiver_column_can_be_the_lowest() {
    let mut invoice = invoice(21.0, 0.0);
    invoice.from = Freelancer {
        name: String::from("Jane Doe"),
        ..Freelancer::default()
    };
    invoice.to.phone = String::from("+34 900000000");

    let renderer = render(&invoice, false);
    let rules = rules(renderer.surface());

    // the receiver column has five lines, the issuer column only one
    assert_eq!((rules[1].0).1, Pt(180.0 + 20.0 + 5.0 * 18.0));
}

#[test]
fn empty_names_still_take_a_line() {
    let mut invoice = invoice(21.0, 0.0);
    invoice.from = Freelancer::default();
    invoice.to = Client::default();

    let renderer = render(&invoice, false);
    let rules = rules(renderer.surface());

    // label, name line and the trailing blank line of the issuer column
    assert_eq!((rules[1].0).1, Pt(180.0 + 20.0 + 18.0 + 20.0));
}

#[test]
fn missing_notice_falls_back_to_the_configuration() {
    let mut invoice = invoice(0.0, 0.0);
    invoice.notes = Notes::new("Thanks for your business.");

    let mut renderer = renderer().with_note_texts(NoteTexts {
        no_due: String::new(),
        vat_0: String::from("Exempt under article 20."),
        retention_not_0: String::new(),
    });
    renderer.assemble(&invoice, false).unwrap();

    assert!(renderer.surface().texts().contains(&"VAT*"));
    assert_eq!(
        notes(renderer.surface()),
        vec!["Thanks for your business.", "*Exempt under article 20."]
    );
}

#[test]
fn notes_are_anchored_to_the_bottom() {
    let renderer = render(&invoice(0.0, 15.0), false);
    let recorder = renderer.surface();

    assert_eq!(top_of(recorder, "Thanks for your business."), Pt(842.0 - 40.0 - 60.0));
    assert_eq!(top_of(recorder, "*VAT exempt."), Pt(842.0 - 40.0 - 60.0 + 25.0));
}

#[test]
fn logo_keeps_its_aspect_ratio() {
    let mut invoice = invoice(21.0, 0.0);
    invoice.logo = Some(String::from("static/logo.png"));

    let mut renderer = Assembler::new(
        Recorder::new().with_image("static/logo.png", 400, 200),
        PageGeometry::a4(),
        Labels::english(),
    );
    renderer.assemble(&invoice, false).unwrap();

    let image = renderer
        .surface()
        .primitives()
        .iter()
        .find(|p| matches!(p, Primitive::Image { .. }))
        .cloned();

    match image {
        Some(Primitive::Image {
            x,
            y,
            width,
            height,
            ..
        }) => {
            assert_eq!((x, y), (Pt(40.0), Pt(40.0)));
            assert_eq!((width, height), (Pt(200.0), Pt(100.0)));
        }
        _ => panic!("the logo was not drawn"),
    }
}

#[test]
fn draft_overlay_alternates_sides() {
    let renderer = render(&invoice(21.0, 0.0), true);

    let marks: Vec<(Pt, Pt)> = renderer
        .surface()
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Watermark { x, y, text, .. } if text == "DRAFT" => Some((*x, *y)),
            _ => None,
        })
        .collect();

    assert_eq!(
        marks,
        vec![
            (Pt(40.0), Pt(40.0)),
            (Pt(245.0), Pt(240.0)),
            (Pt(40.0), Pt(440.0)),
            (Pt(245.0), Pt(640.0)),
        ]
    );

    // the watermark is drawn over everything else
    assert!(matches!(
        renderer.surface().primitives().last(),
        Some(Primitive::Watermark { .. })
    ));
}

#[test]
fn debug_outlines_every_cell() {
    let mut renderer = renderer().with_debug(true);
    renderer.assemble(&invoice(21.0, 0.0), false).unwrap();

    let cells: Vec<&Primitive> = renderer
        .surface()
        .primitives()
        .iter()
        .filter(|p| matches!(p, Primitive::Text { .. }))
        .collect();

    assert!(cells
        .iter()
        .all(|p| matches!(p, Primitive::Text { border: true, .. })));

    // empty cells of the totals rows are drawn too
    assert!(cells.iter().any(|p| p.text() == Some("")));
}

#[test]
fn spanish_labels() {
    let mut renderer = Assembler::new(Recorder::new(), PageGeometry::a4(), Labels::spanish());
    renderer.assemble(&invoice(21.0, 0.0), true).unwrap();
    let texts = renderer.surface().texts();

    for expected in &["FACTURA", "Fecha", "IVA", "Importe", "BORRADOR"] {
        assert!(texts.contains(expected), "{} is missing", expected);
    }
}
