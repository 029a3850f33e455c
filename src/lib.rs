//! Filesystem primitives for ledger checkpoint storage.
//!
//! Small synchronous building blocks used by the node's data-management
//! layer: directory existence/creation/removal, process-exclusive advisory
//! file locks, pid probes, and the hex-sharded naming scheme for archived
//! checkpoint files.

pub mod error;
pub mod layout;
pub mod lock;
pub mod ops;
pub mod process;

pub use error::{Error, Result};
pub use layout::{base_name, checkpoint_hex, remote_dir, remote_name, shard_dir};
pub use lock::LockRegistry;
pub use ops::{deltree, exists, mkdir, mkpath};
pub use process::{current_pid, process_exists};
