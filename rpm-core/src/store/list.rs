use super::{Store, lock};
use crate::error::RpmResult;
use crate::record::Record;

impl<R: Record> Store<R> {
    /// All records, in file order.
    pub fn list(&self) -> RpmResult<Vec<R>> {
        let _lock = lock::shared(&self.lock_path)?;
        self.file.read_all()
    }

    pub fn get(&self, id: &str) -> RpmResult<R> {
        let _lock = lock::shared(&self.lock_path)?;
        self.file
            .read_all::<R>()?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| self.not_found(id))
    }
}
