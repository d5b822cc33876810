//! Input documents for scoring
//!
//! Two JSON documents drive every score: the package [`Manifest`] and the
//! dependency [`LockDocument`]. Both are held as parsed JSON values and queried
//! lazily by the metric functions, so a document that is missing keys or has an
//! unexpected shape is still loadable. Shape problems only surface when a metric
//! asks for the offending field, where they become metric failures rather than
//! load failures.
//!
//! Reading and parsing the files is done by [`load_documents`], which reports
//! missing files and malformed JSON before any scoring is attempted.

mod loader;
mod lock_document;
mod manifest;

pub use loader::load_documents;
pub use lock_document::{LockDocument, PackageRecord};
pub use manifest::Manifest;
