use anyhow::Result;
use owo_colors::OwoColorize;
use rpm_core::Record;
use rpm_core::store::Store;

pub fn run<R: Record>(store: &Store<R>, id: &str) -> Result<()> {
    store.delete(id)?;

    println!("{} {} {}", "Deleted".red(), store.label(), id.dimmed());
    Ok(())
}
