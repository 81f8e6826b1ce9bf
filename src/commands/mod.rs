pub mod config;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod show;
pub mod update;

use std::io::Read;

use anyhow::{Context, Result};
use rpm_core::Record;

/// Run `$body` with `$store` bound to the store of `$resource`.
macro_rules! with_store {
    ($stores:expr, $resource:expr, |$store:ident| $body:expr) => {
        match $resource {
            rpm_core::Resource::Categories => {
                let $store = &$stores.categories;
                $body
            }
            rpm_core::Resource::CalendarEvents => {
                let $store = &$stores.calendar_events;
                $body
            }
            rpm_core::Resource::RpmBlocks => {
                let $store = &$stores.rpm_blocks;
                $body
            }
        }
    };
}

/// The JSON payload: `--data` if given, otherwise all of stdin.
pub fn read_input(data: Option<String>) -> Result<String> {
    match data {
        Some(data) => Ok(data),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read JSON from stdin")?;
            Ok(input)
        }
    }
}

pub fn parse_record<R: Record>(input: &str) -> Result<R> {
    serde_json::from_str(input)
        .with_context(|| format!("Invalid {} JSON", R::RESOURCE.label().to_lowercase()))
}
