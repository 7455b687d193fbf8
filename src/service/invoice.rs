//! Creating and editing invoices.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::config::Config;
use crate::model::{Client, Invoice, Item, Notes, TaxInfo};
use crate::store::JsonStore;
use crate::{Error, Result};

/// What is needed to create an invoice. Missing values come from the configuration.
#[derive(Debug, Clone, Default)]
pub struct NewInvoice {
    /// The id of the client in the client store.
    pub client: String,

    /// The sequence number of the id. The next free one if absent.
    pub sequence: Option<u32>,

    /// The issue date. Today if absent.
    pub date: Option<NaiveDate>,

    /// How many days after issue the invoice is due.
    pub due_days: Option<u32>,

    /// The VAT percentage.
    pub vat: Option<f64>,

    /// The retention percentage.
    pub retention: Option<f64>,

    /// The default note.
    pub note: Option<String>,
}

/// Creates, reads and edits the invoices of a project.
pub struct InvoiceService<'a> {
    /// The configuration of the project.
    config: &'a Config,

    /// The invoice store.
    invoices: JsonStore<Invoice>,

    /// The client store, to resolve the receivers of new invoices.
    clients: JsonStore<Client>,
}

impl<'a> InvoiceService<'a> {
    /// Creates a service using the directories of a configuration.
    pub fn new(config: &'a Config) -> InvoiceService<'a> {
        InvoiceService {
            config,
            invoices: JsonStore::new(&config.dirs.invoice),
            clients: JsonStore::new(&config.dirs.client),
        }
    }

    /// Creates and stores an invoice.
    pub fn create(&self, request: NewInvoice) -> Result<Invoice> {
        let client = self
            .clients
            .read(&request.client)?
            .ok_or_else(|| Error::NotFound {
                kind: "client",
                id: request.client.clone(),
            })?;

        let format = self.config.id_format()?;
        let date = request.date.unwrap_or_else(|| Local::now().date_naive());
        let year = date.year();

        let sequence = match request.sequence.filter(|n| *n > 0) {
            Some(sequence) => sequence,
            None => format.next_sequence(year, |id| self.invoices.exists(id)),
        };
        let id = format.render(year, sequence);

        let defaults = &self.config.invoice;
        let default_tax = defaults.tax();
        let tax = TaxInfo::new(
            request.vat.unwrap_or(default_tax.vat),
            request.retention.unwrap_or(default_tax.retention),
        );
        let due = match request.due_days {
            Some(days) => Duration::days(i64::from(days)),
            None => defaults.due(),
        };
        let note = request
            .note
            .unwrap_or_else(|| self.config.notes.no_due.clone());

        let mut invoice = Invoice::new(id, self.config.freelancer.clone(), client, date, due);
        invoice.logo = defaults.logo.clone().filter(|logo| !logo.is_empty());
        invoice.tax = tax;
        invoice.currency = defaults.currency.clone();
        invoice.payment = self.config.payment.clone();
        invoice.notes = Notes::for_tax(note, &tax, &self.config.notes);

        self.invoices.create(&invoice)?;
        info!("created invoice {}", invoice.id);

        Ok(invoice)
    }

    /// Reads an invoice.
    pub fn read(&self, id: &str) -> Result<Invoice> {
        self.invoices.read(id)?.ok_or_else(|| Error::NotFound {
            kind: "invoice",
            id: String::from(id),
        })
    }

    /// Appends items to an invoice and stores it.
    pub fn add_items<I: IntoIterator<Item = Item>>(&self, id: &str, items: I) -> Result<Invoice> {
        let mut invoice = self.read(id)?;
        invoice.add_items(items);
        self.invoices.update(&invoice)?;
        info!("invoice {} now has {} items", invoice.id, invoice.items.len());
        Ok(invoice)
    }

    /// Lists the invoices satisfying a predicate, sorted by id.
    pub fn list<F: Fn(&Invoice) -> bool>(&self, predicate: F) -> Result<Vec<Invoice>> {
        self.invoices.list(predicate)
    }
}
