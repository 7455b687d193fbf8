#[macro_use]
extern crate log;

use std::env::current_dir;
use std::error::Error;
use std::fs::create_dir_all;
use std::path::PathBuf;
use std::process::exit;
use std::str::FromStr;

use clap::{
    crate_description, crate_version, value_t, App, AppSettings, Arg, ArgMatches,
    SubCommand,
};

use billdex::assets;
use billdex::config::{Config, CONFIG_FILE};
use billdex::document::{Assembler, DocumentService};
use billdex::model::{Invoice, Item};
use billdex::service::{ClientService, InvoiceService, NewClient, NewInvoice};
use billdex::surface::{PdfSurface, Recorder};
use billdex::totals::Totals;
use billdex::Error as BError;

macro_rules! unwrap {
    ($e: expr, $error: expr) => {
        match $e {
            Some(e) => e,
            None => return Err(Box::new($error)),
        }
    };
}

fn main() {
    let matches = app().get_matches();

    let level = if matches.is_present("verbose") {
        log::LevelFilter::Trace
    } else {
        log::LevelFilter::Info
    };
    beautylog::init(level).ok();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        exit(1);
    }
}

fn app() -> App<'static, 'static> {
    App::new("billdex")
        .version(crate_version!())
        .about(crate_description!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .global(true)
                .help("Logs everything"),
        )
        .subcommand(
            SubCommand::with_name("init")
                .about("Creates a new default billdex project")
                .arg(Arg::with_name("TITLE").required(false)),
        )
        .subcommand(
            SubCommand::with_name("client")
                .about("Lists the clients")
                .arg(
                    Arg::with_name("filter")
                        .long("filter")
                        .short("f")
                        .takes_value(true)
                        .help("Only lists clients whose id or name contains this"),
                )
                .subcommand(
                    SubCommand::with_name("create")
                        .about("Creates a client")
                        .arg(opt("id", "The id of the client, client-VAT_ID by default"))
                        .arg(opt("name", "The name of the client").required(true))
                        .arg(opt("vat", "The VAT number of the client").required(true))
                        .arg(opt("address1", "The street address"))
                        .arg(opt("address2", "The city, region and zip code"))
                        .arg(opt("phone", "The phone number")),
                ),
        )
        .subcommand(
            SubCommand::with_name("invoice")
                .about("Lists the invoices")
                .subcommand(
                    SubCommand::with_name("create")
                        .about("Creates an invoice")
                        .arg(opt("client", "The id of the client").required(true))
                        .arg(opt("id", "The sequence number, the next free one by default"))
                        .arg(opt("due", "How many days until the invoice is due"))
                        .arg(opt("vat", "The VAT percentage"))
                        .arg(opt("retention", "The retention percentage"))
                        .arg(opt("note", "The note printed on the invoice")),
                )
                .subcommand(
                    SubCommand::with_name("item")
                        .about("Adds an item to an invoice")
                        .arg(opt("invoice", "The id of the invoice").required(true))
                        .arg(opt("desc", "What is billed").required(true))
                        .arg(opt("rate", "The price of one unit").required(true))
                        .arg(opt("quantity", "How many units are billed").default_value("1"))
                        .arg(opt("vat", "A VAT percentage specific to this item")),
                ),
        )
        .subcommand(
            SubCommand::with_name("pdf")
                .about("Renders an invoice")
                .arg(opt("invoice", "The id of the invoice").required(true))
                .arg(
                    Arg::with_name("draft")
                        .long("draft")
                        .short("d")
                        .help("Adds the draft watermark"),
                )
                .arg(
                    Arg::with_name("dump")
                        .long("dump")
                        .help("Writes the list of drawn primitives instead of a pdf"),
                ),
        )
}

fn opt(name: &'static str, help: &'static str) -> Arg<'static, 'static> {
    Arg::with_name(name).long(name).takes_value(true).help(help)
}

fn optional<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, clap::Error> {
    if matches.is_present(name) {
        value_t!(matches, name, T).map(Some)
    } else {
        Ok(None)
    }
}

fn text(matches: &ArgMatches, name: &str) -> String {
    String::from(matches.value_of(name).unwrap_or(""))
}

fn load_config() -> Result<Config, Box<dyn Error>> {
    let current_dir = unwrap!(current_dir().ok(), BError::CannotReadCurrentDir);
    let path = Config::discover(current_dir)?;
    Ok(Config::load(path)?)
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn Error>> {
    match matches.subcommand() {
        ("init", Some(init)) => run_init(init),
        ("client", Some(client)) => run_client(client),
        ("invoice", Some(invoice)) => run_invoice(invoice),
        ("pdf", Some(pdf)) => run_pdf(pdf),
        _ => Ok(()),
    }
}

fn run_init(init: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let mut current_dir = PathBuf::from(unwrap!(current_dir().ok(), BError::CannotReadCurrentDir));
    let current_dir_name = current_dir.clone();
    let current_dir_name = unwrap!(current_dir_name.file_name(), BError::CannotReadCurrentDir);
    let current_dir_name = unwrap!(current_dir_name.to_str(), BError::CannotReadCurrentDir);

    // Initialize the project
    let title = match init.value_of("TITLE") {
        // If a title was given, we will create a directory for the project
        Some(title) => {
            current_dir.push(title);
            title
        }

        // If no title was given, use current_dir_name
        None => current_dir_name,
    };

    let config = Config::with_title(title);

    for dir in config.dirs.all().iter() {
        create_dir_all(current_dir.join(dir))?;
    }
    create_dir_all(current_dir.join(&config.dirs.assets).join("fonts"))?;

    current_dir.push(CONFIG_FILE);
    if current_dir.is_file() {
        warn!("{} already exists, keeping it", current_dir.display());
    } else {
        config.save(&current_dir)?;
        info!("wrote {}", current_dir.display());
    }

    Ok(())
}

fn run_client(client: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let service = ClientService::new(&config);

    if let Some(create) = client.subcommand_matches("create") {
        let created = service.create(NewClient {
            id: create.value_of("id").map(String::from),
            name: text(create, "name"),
            vat_id: text(create, "vat"),
            address1: text(create, "address1"),
            address2: text(create, "address2"),
            phone: text(create, "phone"),
        })?;
        println!("Client created: {}", created.id);
        return Ok(());
    }

    for client in service.list(client.value_of("filter"))? {
        println!("{:<24} {:<32} {}", client.id, client.name, client.vat_id);
    }

    Ok(())
}

fn print_invoice(invoice: &Invoice) {
    let totals = Totals::compute(&invoice.items, &invoice.tax, invoice.discount);
    println!(
        "{:<12} {} {:<24} {:>12.2} {}",
        invoice.id,
        invoice.date(),
        invoice.to.name,
        totals.total,
        invoice.currency
    );
}

fn run_invoice(invoice: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let service = InvoiceService::new(&config);

    match invoice.subcommand() {
        ("create", Some(create)) => {
            let created = service.create(NewInvoice {
                client: text(create, "client"),
                sequence: optional(create, "id")?,
                date: None,
                due_days: optional(create, "due")?,
                vat: optional(create, "vat")?,
                retention: optional(create, "retention")?,
                note: create.value_of("note").map(String::from),
            })?;
            println!("Invoice created: {}", created.id);
        }

        ("item", Some(item)) => {
            let id = text(item, "invoice");
            let new_item = Item {
                description: text(item, "desc"),
                quantity: value_t!(item, "quantity", u32)?,
                rate: value_t!(item, "rate", f64)?,
                vat: optional(item, "vat")?,
            };
            let updated = service.add_items(&id, vec![new_item])?;
            println!("Invoice {} updated", updated.id);
        }

        _ => {
            for invoice in service.list(|_| true)? {
                print_invoice(&invoice);
            }
        }
    }

    Ok(())
}

fn run_pdf(pdf: &ArgMatches) -> Result<(), Box<dyn Error>> {
    let config = load_config()?;
    let id = text(pdf, "invoice");
    let draft = pdf.is_present("draft");

    let invoice = InvoiceService::new(&config).read(&id)?;
    let labels = config.labels()?;
    let service = DocumentService::new(&config.dirs.pdf);

    let path = if pdf.is_present("dump") {
        let renderer = Assembler::new(Recorder::new(), config.page, labels)
            .with_note_texts(config.notes.clone())
            .with_debug(config.debug);
        service.render(renderer, &invoice, draft)?
    } else {
        let regular = assets::load_font(&config.fonts.regular)?;
        let bold = assets::load_font(&config.fonts.bold)?;
        let surface = PdfSurface::new(
            &invoice.id,
            config.page.width,
            config.page.height,
            &regular,
            &bold,
        )?;
        let renderer = Assembler::new(surface, config.page, labels)
            .with_note_texts(config.notes.clone())
            .with_debug(config.debug);
        service.render(renderer, &invoice, draft)?
    };

    println!("Generated {} for {}", path.display(), id);
    Ok(())
}
