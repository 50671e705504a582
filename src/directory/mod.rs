//! In-memory contact directory.
//!
//! The directory owns every record and keys it by the record's name.

mod contact_directory;
mod pages;
mod record_mut;

pub use contact_directory::ContactDirectory;
pub use pages::Pages;
pub use record_mut::RecordMut;
