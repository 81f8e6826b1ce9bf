use anyhow::Result;
use owo_colors::OwoColorize;
use rpm_core::Record;
use rpm_core::store::Store;

use super::parse_record;
use crate::render::Render;

pub fn run<R: Record + Render>(store: &Store<R>, id: &str, input: &str) -> Result<()> {
    let record: R = parse_record(input)?;
    let updated = store.update(id, record)?;

    println!("{} {}", "Updated".yellow(), updated.render());
    Ok(())
}
