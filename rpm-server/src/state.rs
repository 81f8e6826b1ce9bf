use std::path::Path;

use anyhow::Result;
use rpm_core::store::{Store, Stores};
use rpm_core::{CalendarEvent, Category, Record, RpmBlock};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    stores: Stores,
}

impl AppState {
    /// Open the stores in `data_dir`, creating empty store files if missing.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let stores = Stores::open(data_dir);

        for path in stores.ensure_all()? {
            tracing::info!("created empty store {}", path.display());
        }

        Ok(AppState { stores })
    }
}

/// Access to the store of one resource type.
pub trait StoreOf<R: Record> {
    fn store_of(&self) -> &Store<R>;
}

impl StoreOf<Category> for AppState {
    fn store_of(&self) -> &Store<Category> {
        &self.stores.categories
    }
}

impl StoreOf<CalendarEvent> for AppState {
    fn store_of(&self) -> &Store<CalendarEvent> {
        &self.stores.calendar_events
    }
}

impl StoreOf<RpmBlock> for AppState {
    fn store_of(&self) -> &Store<RpmBlock> {
        &self.stores.rpm_blocks
    }
}
