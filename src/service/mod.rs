//! The operations of the command line tool, on top of the stores and the configuration.

pub mod client;
pub mod invoice;

pub use client::{ClientService, NewClient};
pub use invoice::{InvoiceService, NewInvoice};
