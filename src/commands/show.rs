use anyhow::Result;
use rpm_core::Record;
use rpm_core::store::Store;

pub fn run<R: Record>(store: &Store<R>, id: &str) -> Result<()> {
    let record = store.get(id)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
