//! Runtime access to the SVG icons embedded at build time.
//!
//! `build.rs` turns every file in `icons/` into an [`IconName`] variant with
//! its markup compiled in, so the icon set ships inside the binary and new
//! glyphs only require dropping an SVG next to the others and rebuilding.

use std::{borrow::Cow, collections::HashMap};

use gpui::{AssetSource, Result, SharedString};
use once_cell::sync::Lazy;

include!(concat!(env!("OUT_DIR"), "/icon_names.rs"));

static ICONS_BY_PATH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    IconName::ALL
        .iter()
        .map(|icon| (icon.asset_path(), icon.source()))
        .collect()
});

static ICONS_BY_STEM: Lazy<HashMap<&'static str, IconName>> = Lazy::new(|| {
    IconName::ALL
        .iter()
        .map(|icon| (icon.stem(), *icon))
        .collect()
});

/// Asset source serving the embedded SVG table to GPUI.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconAssetSource;

impl AssetSource for IconAssetSource {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        Ok(ICONS_BY_PATH
            .get(path)
            .map(|svg| Cow::Borrowed(svg.as_bytes())))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        if path.is_empty() {
            return Ok(vec![SharedString::new_static("mosaic/icons")]);
        }

        if path == "mosaic/icons" {
            return Ok(IconName::ALL
                .iter()
                .map(|icon| SharedString::from(icon.asset_path()))
                .collect());
        }

        Ok(vec![])
    }
}

/// Helpers for working with the embedded icon set.
#[derive(Debug, Default, Clone, Copy)]
pub struct IconLoader;

impl IconLoader {
    /// Returns the [`AssetSource`] exposing the embedded icons.
    #[must_use]
    pub const fn asset_source() -> IconAssetSource {
        IconAssetSource
    }

    /// Resolves an icon by its file stem.
    #[must_use]
    pub fn resolve(stem: &str) -> Option<IconName> {
        ICONS_BY_STEM.get(stem).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_resolves_by_stem() {
        for icon in IconName::ALL {
            assert_eq!(IconLoader::resolve(icon.stem()), Some(*icon));
            assert!(icon.source().contains("<svg"));
        }
    }

    #[test]
    fn asset_source_serves_listed_paths() {
        let source = IconLoader::asset_source();
        for path in source.list("mosaic/icons").unwrap() {
            assert!(source.load(path.as_ref()).unwrap().is_some());
        }
        assert!(source.load("mosaic/icons/unknown.svg").unwrap().is_none());
    }
}
