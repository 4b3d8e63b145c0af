//! User settings for the audit ledger
//!
//! Manages the tunable knobs of the engine: in-memory buffer bounds, the
//! eviction batch size, the default query result count, and the set of
//! action names that require immediate durability.

use serde::{Deserialize, Serialize};

use super::paths::AuditPaths;
use crate::error::AuditError;
use crate::policy;

/// User settings for the audit ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Maximum number of entries held in memory before eviction
    #[serde(default = "default_max_in_memory")]
    pub max_in_memory: usize,

    /// Number of oldest entries removed (and persisted) per eviction
    #[serde(default = "default_eviction_batch")]
    pub eviction_batch: usize,

    /// Result count used by count-only queries when none is given
    #[serde(default = "default_query_count")]
    pub default_query_count: usize,

    /// Action names that are written to the log file immediately on capture
    #[serde(default = "default_critical_actions")]
    pub critical_actions: Vec<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_in_memory() -> usize {
    1000
}

fn default_eviction_batch() -> usize {
    500
}

fn default_query_count() -> usize {
    50
}

fn default_critical_actions() -> Vec<String> {
    policy::DEFAULT_CRITICAL_ACTIONS
        .iter()
        .map(|a| a.to_string())
        .collect()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_in_memory: default_max_in_memory(),
            eviction_batch: default_eviction_batch(),
            default_query_count: default_query_count(),
            critical_actions: default_critical_actions(),
        }
    }
}

impl Settings {
    /// Check the settings for values the engine cannot run with
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.max_in_memory == 0 {
            return Err(AuditError::Config(
                "max_in_memory must be greater than zero".into(),
            ));
        }
        if self.eviction_batch == 0 {
            return Err(AuditError::Config(
                "eviction_batch must be greater than zero".into(),
            ));
        }
        if self.default_query_count == 0 {
            return Err(AuditError::Config(
                "default_query_count must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AuditPaths) -> Result<Self, AuditError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AuditError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| AuditError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AuditPaths) -> Result<(), AuditError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AuditError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| AuditError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
