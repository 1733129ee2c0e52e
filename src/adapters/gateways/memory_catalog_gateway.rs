//! MemoryCatalogGateway - In-memory catalog repository

use parking_lot::Mutex;

use crate::domain::entities::Record;
use crate::domain::errors::CatalogError;
use crate::domain::repositories::CatalogRepository;

/// In-memory catalog repository for tests and embedding hosts
#[derive(Default)]
pub struct MemoryCatalogGateway {
    records: Mutex<Vec<Record>>,
    fail_saves: Mutex<Option<String>>,
    save_count: Mutex<usize>,
}

impl MemoryCatalogGateway {
    /// Create a new empty gateway
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with initial records
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Make every subsequent save fail with `reason` (`None` to recover)
    pub fn set_fail_saves(&self, reason: Option<&str>) {
        *self.fail_saves.lock() = reason.map(str::to_string);
    }

    /// Snapshot of the stored records
    pub fn stored(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        *self.save_count.lock()
    }
}

impl CatalogRepository for MemoryCatalogGateway {
    fn load(&self) -> Result<Vec<Record>, CatalogError> {
        Ok(self.records.lock().clone())
    }

    fn save(&self, records: &[Record]) -> Result<(), CatalogError> {
        if let Some(reason) = self.fail_saves.lock().as_ref() {
            return Err(CatalogError::Persistence(reason.clone()));
        }
        *self.records.lock() = records.to_vec();
        *self.save_count.lock() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Platform;

    #[test]
    fn test_save_and_load() {
        let gateway = MemoryCatalogGateway::new();
        let records = vec![Record::new("Doom", Platform::Steam).with_favourite(true)];

        gateway.save(&records).unwrap();

        let loaded = gateway.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].favourite);
        assert_eq!(gateway.save_count(), 1);
    }

    #[test]
    fn test_failed_save_keeps_previous() {
        let gateway =
            MemoryCatalogGateway::with_records(vec![Record::new("Doom", Platform::Steam)]);
        gateway.set_fail_saves(Some("disk full"));

        let err = gateway.save(&[]).unwrap_err();
        assert_eq!(err, CatalogError::Persistence("disk full".to_string()));
        assert_eq!(gateway.stored().len(), 1);
        assert_eq!(gateway.save_count(), 0);

        gateway.set_fail_saves(None);
        gateway.save(&[]).unwrap();
        assert!(gateway.stored().is_empty());
    }
}
