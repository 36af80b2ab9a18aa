// ABOUTME: Validation tunables loaded from defaults or environment variables
// ABOUTME: Whole-number exemptions, upload size ceiling, and upload MIME allow-list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;
use tiizi_core::constants::{env_config, numeric, uploads};
use tiizi_core::errors::{AppError, AppResult};
use tracing::info;

use crate::validation::{NumericRules, UploadRules};

/// Tunable validation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Numeric field names allowed to hold fractional values
    pub integer_exempt_fields: BTreeSet<String>,
    /// Largest accepted upload in bytes
    pub max_upload_bytes: u64,
    /// Accepted upload MIME types
    pub allowed_upload_types: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            integer_exempt_fields: BTreeSet::from([numeric::DURATION_SEC_FIELD.to_owned()]),
            max_upload_bytes: uploads::MAX_FILE_SIZE_BYTES,
            allowed_upload_types: uploads::ALLOWED_IMAGE_TYPES
                .iter()
                .map(|mime| (*mime).to_owned())
                .collect(),
        }
    }
}

/// Split a comma separated list, dropping blank entries
fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

impl ValidationConfig {
    /// Load settings from the environment, falling back to defaults for
    /// unset variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when `TIIZI_MAX_UPLOAD_BYTES` is not an unsigned integer
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(env_config::INTEGER_EXEMPT_FIELDS) {
            config.integer_exempt_fields = parse_list(&raw).into_iter().collect();
        }

        if let Ok(raw) = env::var(env_config::MAX_UPLOAD_BYTES) {
            config.max_upload_bytes = raw.trim().parse().map_err(|e| {
                AppError::config_invalid(format!(
                    "{} must be an unsigned integer, got '{raw}'",
                    env_config::MAX_UPLOAD_BYTES
                ))
                .with_source(e)
            })?;
        }

        if let Ok(raw) = env::var(env_config::ALLOWED_UPLOAD_TYPES) {
            let types = parse_list(&raw);
            if types.is_empty() {
                return Err(AppError::config_invalid(format!(
                    "{} must list at least one MIME type",
                    env_config::ALLOWED_UPLOAD_TYPES
                )));
            }
            config.allowed_upload_types = types;
        }

        info!(
            integer_exempt_fields = ?config.integer_exempt_fields,
            max_upload_bytes = config.max_upload_bytes,
            "Loaded validation configuration"
        );
        Ok(config)
    }

    /// Numeric rules using the configured exemptions
    #[must_use]
    pub fn numeric_rules(&self) -> NumericRules {
        NumericRules::new(self.integer_exempt_fields.iter().cloned())
    }

    /// Upload rules using the configured allow-list and ceiling
    #[must_use]
    pub fn upload_rules(&self) -> UploadRules {
        UploadRules::new(self.allowed_upload_types.iter().cloned(), self.max_upload_bytes)
    }
}
