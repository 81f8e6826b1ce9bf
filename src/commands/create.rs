use anyhow::Result;
use owo_colors::OwoColorize;
use rpm_core::Record;
use rpm_core::store::Store;

use super::parse_record;
use crate::render::Render;

pub fn run<R: Record + Render>(store: &Store<R>, input: &str) -> Result<()> {
    let record: R = parse_record(input)?;
    let created = store.create(record)?;

    println!("{} {}", "Created".green(), created.render());
    Ok(())
}
