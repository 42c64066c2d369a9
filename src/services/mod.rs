// Service exports
pub mod storage;

pub use storage::{MemStorage, Storage, StorageError};
