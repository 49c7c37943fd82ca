pub mod file;
pub mod memory;

use anyhow::Result;

use crate::domain::models::Storage;
use crate::domain::models::StorageName;

pub type StorageBox = Box<dyn Storage + Send + Sync>;

pub struct StorageManager {}

impl StorageManager {
    pub fn get(name: StorageName) -> Result<StorageBox> {
        if name == StorageName::File {
            return Ok(Box::<file::FileStorage>::default());
        }

        return Ok(Box::<memory::MemoryStorage>::default());
    }
}
