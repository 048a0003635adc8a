//! Services layer (ports + adapters).
//!
//! - `ports`: pure contracts/types used across the app (kernel-facing).
//! - `adapters`: OS/runtime specific implementations (IO/async).

pub mod adapters;
pub mod host;
pub mod persistence;
pub mod ports;

pub use host::EditorHost;
pub use persistence::{PersistenceBridge, STORAGE_KEY};
