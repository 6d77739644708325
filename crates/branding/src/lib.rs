#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use designsystem::{parse_hex, ColorToken, Rgba, SharedTheme, ThemeMode, TokenError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

static QUALIFIER: &str = "chat";
static ORGANIZATION: &str = "mosaic";
static APPLICATION: &str = "design";

/// Per-deployment branding document stored as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandingConfig {
    /// Preferred theme mode; `None` keeps the application default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<ThemeMode>,
    /// Token slug to hex color replacements.
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

impl BrandingConfig {
    /// Adds an override entry, replacing any previous value for the slug.
    pub fn set(&mut self, slug: impl Into<String>, color: impl Into<String>) {
        self.overrides.insert(slug.into(), color.into());
    }
}

/// Errors raised when reading or writing branding files.
#[derive(Debug, Error)]
pub enum BrandingError {
    /// Wraps underlying IO errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Wraps JSON serialization issues.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Reader/writer responsible for persisting [`BrandingConfig`].
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(default_config_path())
    }
}

impl ConfigStore {
    /// Creates a store rooted at the given path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the branding document, or returns the default when none exists.
    pub fn load(&self) -> Result<BrandingConfig, BrandingError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no branding file, using defaults");
            return Ok(BrandingConfig::default());
        }
        let bytes = fs::read(&self.path)?;
        let config = serde_json::from_slice(&bytes)?;
        Ok(config)
    }

    /// Persists the branding document to disk.
    pub fn save(&self, config: &BrandingConfig) -> Result<(), BrandingError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let buffer = serde_json::to_vec_pretty(config)?;
        fs::write(&self.path, buffer)?;
        Ok(())
    }

    /// Returns the backing file path, primarily used in diagnostics.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn default_config_path() -> PathBuf {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .map(|dirs| dirs.config_dir().join("branding.json"))
        .unwrap_or_else(|| PathBuf::from("branding.json"))
}

/// Outcome of installing a branding document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrandingReport {
    /// Overrides successfully installed.
    pub applied: usize,
    /// Entries skipped because the slug or color was not usable.
    pub skipped: usize,
}

/// Installs the branding overrides on the shared theme.
///
/// Unknown token slugs and malformed color literals are warned about and
/// skipped; they are developer-time mistakes, not runtime failures.
pub fn apply(config: &BrandingConfig, theme: &SharedTheme) -> BrandingReport {
    if let Some(mode) = config.mode {
        theme.set_mode(mode);
    }

    let mut report = BrandingReport::default();
    for (slug, value) in &config.overrides {
        match resolve_entry(slug, value) {
            Ok((token, color)) => {
                theme.set_override(token, Some(color));
                report.applied += 1;
            }
            Err(error) => {
                warn!(%slug, %value, %error, "skipping branding override");
                report.skipped += 1;
            }
        }
    }
    debug!(
        applied = report.applied,
        skipped = report.skipped,
        "branding applied"
    );
    report
}

fn resolve_entry(slug: &str, value: &str) -> Result<(ColorToken, Rgba), TokenError> {
    let token = ColorToken::from_slug(slug)?;
    let color = parse_hex(value)?;
    Ok((token, color))
}

#[cfg(test)]
mod tests {
    use designsystem::{ColorToken, SharedTheme, ThemeMode};
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("branding.json");
        let store = ConfigStore::new(path.clone());

        let mut config = BrandingConfig::default();
        config.mode = Some(ThemeMode::Dark);
        config.set("bg-accent-rest", "#4f3dc2");
        store.save(&config).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), BrandingConfig::default());
    }

    #[test]
    fn apply_installs_valid_overrides() {
        let theme = SharedTheme::new(ThemeMode::Light);
        let mut config = BrandingConfig::default();
        config.mode = Some(ThemeMode::Dark);
        config.set("bg-accent-rest", "#4f3dc2");
        config.set("text-link-external", "#0f5e63");

        let report = apply(&config, &theme);
        assert_eq!(report, BrandingReport { applied: 2, skipped: 0 });
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(
            theme.resolve(ColorToken::BgAccentRest),
            parse_hex("#4f3dc2").unwrap()
        );
    }

    #[test]
    fn apply_skips_unusable_entries_without_failing() {
        let theme = SharedTheme::new(ThemeMode::Light);
        let default = theme.resolve(ColorToken::BgAccentRest);

        let mut config = BrandingConfig::default();
        config.set("bg-accent-rest", "not-a-color");
        config.set("made-up-token", "#4f3dc2");

        let report = apply(&config, &theme);
        assert_eq!(report, BrandingReport { applied: 0, skipped: 2 });
        assert_eq!(theme.resolve(ColorToken::BgAccentRest), default);
        assert_eq!(theme.snapshot().override_count(), 0);
    }

    #[test]
    fn apply_is_idempotent() {
        let theme = SharedTheme::new(ThemeMode::Light);
        let mut config = BrandingConfig::default();
        config.set("bg-accent-rest", "#4f3dc2");

        apply(&config, &theme);
        apply(&config, &theme);
        assert_eq!(theme.snapshot().override_count(), 1);
    }
}
