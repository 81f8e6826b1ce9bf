use anyhow::Result;
use owo_colors::OwoColorize;
use rpm_core::Record;
use rpm_core::store::Store;

use crate::render::Render;

pub fn run<R: Record + Render>(store: &Store<R>, json: bool) -> Result<()> {
    let records = store.list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("{}", "No records found".dimmed());
        return Ok(());
    }

    for record in &records {
        println!("{}", record.render());
    }

    Ok(())
}
