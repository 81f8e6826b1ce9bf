//! Core types for RPM Life.
//!
//! This crate provides everything the server and CLI share:
//! - the record types (`Category`, `RpmBlock`, `CalendarEvent`)
//! - `store`, the JSON-file backed repository for each resource
//! - `config`, the global configuration

pub mod config;
pub mod error;
pub mod model;
pub mod record;
pub mod resource;
pub mod store;

pub use error::{RpmError, RpmResult};
pub use model::*;
pub use record::Record;
pub use resource::Resource;
pub use store::Store;
