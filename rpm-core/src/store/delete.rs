use super::{Store, lock};
use crate::error::RpmResult;
use crate::record::Record;

impl<R: Record> Store<R> {
    pub fn delete(&self, id: &str) -> RpmResult<()> {
        let _lock = lock::exclusive(&self.lock_path)?;
        let mut records: Vec<R> = self.file.read_all()?;

        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(self.not_found(id));
        }

        self.file.write_all(&records)?;

        tracing::debug!(
            resource = R::RESOURCE.slug(),
            id,
            count = records.len(),
            "deleted record"
        );
        Ok(())
    }
}
