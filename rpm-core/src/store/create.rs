use super::{Store, lock};
use crate::error::RpmResult;
use crate::record::{Record, new_id};

impl<R: Record> Store<R> {
    /// Append `record` under a freshly generated id and return what was stored.
    ///
    /// Any id on the incoming record is discarded.
    pub fn create(&self, mut record: R) -> RpmResult<R> {
        record.validate()?;

        let _lock = lock::exclusive(&self.lock_path)?;
        let mut records: Vec<R> = self.file.read_all()?;

        let mut id = new_id();
        while records.iter().any(|r| r.id() == id) {
            id = new_id();
        }
        record.set_id(id);
        record.normalize();

        records.push(record.clone());
        self.file.write_all(&records)?;

        tracing::debug!(
            resource = R::RESOURCE.slug(),
            id = record.id(),
            count = records.len(),
            "created record"
        );
        Ok(record)
    }
}
