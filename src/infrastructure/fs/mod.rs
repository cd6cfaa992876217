//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus the run lock.

mod local;
mod lock;
#[cfg(test)]
mod mock;

pub use local::LocalFs;
pub use lock::{RunLock, LOCK_FILE_NAME};
#[cfg(test)]
pub use mock::MockFileSystem;
