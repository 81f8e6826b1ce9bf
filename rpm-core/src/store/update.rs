use super::{Store, lock};
use crate::error::RpmResult;
use crate::record::Record;

impl<R: Record> Store<R> {
    /// Replace the record with `id` by `record`, keeping the original id.
    pub fn update(&self, id: &str, mut record: R) -> RpmResult<R> {
        record.validate()?;

        let _lock = lock::exclusive(&self.lock_path)?;
        let mut records: Vec<R> = self.file.read_all()?;

        let Some(slot) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(self.not_found(id));
        };

        record.set_id(id.to_string());
        record.normalize();
        *slot = record.clone();

        self.file.write_all(&records)?;

        tracing::debug!(resource = R::RESOURCE.slug(), id, "updated record");
        Ok(record)
    }
}
