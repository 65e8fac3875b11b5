//! Event handlers.

mod catalogue_handler;

pub use catalogue_handler::{CatalogueHandler, START_COMMAND};
