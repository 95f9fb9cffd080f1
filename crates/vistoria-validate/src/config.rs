//! Import settings loaded from TOML.
//!
//! ```toml
//! encoding = "windows-1252"
//!
//! [preview]
//! max_invalid = 20
//! max_valid = 5
//!
//! [aliases]
//! endereco = ["Local", "Rua"]
//! status = ["Andamento"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vistoria_ingest::EncodingHint;
use vistoria_map::AliasTable;
use vistoria_model::{CanonicalField, PreviewLimits};

use crate::error::ConfigError;

/// On-disk import configuration. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Encoding label; absent or `auto` means UTF-8 with fallback.
    pub encoding: Option<String>,
    pub preview: PreviewLimits,
    /// Extra header aliases keyed by canonical field name.
    pub aliases: BTreeMap<String, Vec<String>>,
}

impl ImportConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let config: Self = contents.parse().map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), "loaded import config");
        Ok(config)
    }

    /// Resolves labels and field names into [`ImportOptions`].
    pub fn options(&self) -> Result<ImportOptions, ConfigError> {
        let encoding = match &self.encoding {
            Some(label) => EncodingHint::from_label(label)?,
            None => EncodingHint::Auto,
        };
        let mut aliases = AliasTable::default();
        for (name, extra) in &self.aliases {
            let field: CanonicalField = name.parse()?;
            let added = aliases.extend(field, extra.iter().cloned());
            debug!(field = field.as_str(), added, "extended alias table");
        }
        Ok(ImportOptions {
            encoding,
            aliases,
            preview: self.preview,
        })
    }
}

impl FromStr for ImportConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// Resolved settings for one import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOptions {
    pub encoding: EncodingHint,
    pub aliases: AliasTable,
    pub preview: PreviewLimits,
}
