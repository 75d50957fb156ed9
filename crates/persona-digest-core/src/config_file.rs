use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::collection::DiscoveryOrder;
use crate::summarize::SummaryConfig;
use crate::{Config, DigestError};

/// Name of the per-root config file, looked up next to the collections.
pub const ROOT_CONFIG_FILE: &str = ".persona-digest.toml";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub summary: Option<SummarySection>,
    pub collections: Option<CollectionsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummarySection {
    pub min_sentence_chars: Option<usize>,
    pub max_sentences: Option<usize>,
    pub title_max_chars: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollectionsSection {
    pub sorted: Option<bool>,
}

impl ConfigFile {
    /// Resolve into a runtime [`Config`], filling unset values with defaults.
    pub fn resolve(&self) -> Config {
        let defaults = SummaryConfig::default();
        let summary = self.summary.as_ref();
        let sorted = self
            .collections
            .as_ref()
            .and_then(|c| c.sorted)
            .unwrap_or(false);

        Config {
            summary: SummaryConfig {
                min_sentence_chars: summary
                    .and_then(|s| s.min_sentence_chars)
                    .unwrap_or(defaults.min_sentence_chars),
                max_sentences: summary
                    .and_then(|s| s.max_sentences)
                    .unwrap_or(defaults.max_sentences),
                title_max_chars: summary
                    .and_then(|s| s.title_max_chars)
                    .unwrap_or(defaults.title_max_chars),
            },
            order: if sorted {
                DiscoveryOrder::Sorted
            } else {
                DiscoveryOrder::Listing
            },
        }
    }
}

/// Platform config directory path: `<config_dir>/persona-digest/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("persona-digest").join("config.toml"))
}

/// Load config by cascading `<root>/.persona-digest.toml` over platform config.
/// Root values override platform values.
pub fn load_config(root: &Path) -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let local = load_from_path(&root.join(ROOT_CONFIG_FILE));

    match (platform, local) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(l)) => l,
        (Some(p), Some(l)) => merge(p, l),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparseable config file");
            None
        }
    }
}

/// Load a config the user named explicitly. Unlike [`load_from_path`],
/// a missing or malformed file is an error.
pub fn load_explicit(path: &Path) -> Result<ConfigFile, DigestError> {
    let content = std::fs::read_to_string(path).map_err(|source| DigestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| DigestError::Config {
        path: path.to_path_buf(),
        source,
    })
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        summary: Some(SummarySection {
            min_sentence_chars: overlay
                .summary
                .as_ref()
                .and_then(|s| s.min_sentence_chars)
                .or_else(|| base.summary.as_ref().and_then(|s| s.min_sentence_chars)),
            max_sentences: overlay
                .summary
                .as_ref()
                .and_then(|s| s.max_sentences)
                .or_else(|| base.summary.as_ref().and_then(|s| s.max_sentences)),
            title_max_chars: overlay
                .summary
                .as_ref()
                .and_then(|s| s.title_max_chars)
                .or_else(|| base.summary.as_ref().and_then(|s| s.title_max_chars)),
        }),
        collections: Some(CollectionsSection {
            sorted: overlay
                .collections
                .as_ref()
                .and_then(|c| c.sorted)
                .or_else(|| base.collections.as_ref().and_then(|c| c.sorted)),
        }),
    }
}
