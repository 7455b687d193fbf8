//! The records an invoice is made of.

pub mod currency;
pub mod invoice;
pub mod notes;
pub mod party;
pub mod tax;

pub use currency::currency_symbol;
pub use invoice::{Invoice, Item, Status};
pub use notes::{NoteTexts, Notes};
pub use party::{Client, Freelancer, Payment};
pub use tax::TaxInfo;
