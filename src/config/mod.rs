//! Configuration for the audit ledger
//!
//! Path resolution and user-tunable settings (buffer sizes, critical action
//! list, default query count).

pub mod paths;
pub mod settings;

pub use paths::AuditPaths;
pub use settings::Settings;
