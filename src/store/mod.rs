//! Record stores: where invoices and clients are kept between runs.

pub mod json;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{Client, Invoice};

pub use json::JsonStore;

/// Something that can be stored, identified by a unique id.
pub trait Record: Serialize + DeserializeOwned {
    /// The name of this kind of records, used in error messages.
    const KIND: &'static str;

    /// Returns the id of the record.
    fn id(&self) -> &str;
}

impl Record for Invoice {
    const KIND: &'static str = "invoice";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for Client {
    const KIND: &'static str = "client";

    fn id(&self) -> &str {
        &self.id
    }
}
