use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use rpm_core::store::Stores;

pub fn run(stores: &Stores, data_dir: &Path) -> Result<()> {
    let created = stores.ensure_all()?;

    if created.is_empty() {
        println!("{}", format!("Stores already exist in {}", data_dir.display()).dimmed());
        return Ok(());
    }

    for path in created {
        println!("{} {}", "+".green(), path.display());
    }

    Ok(())
}
