#![doc = include_str!("../README.md")]
#![warn(clippy::pedantic, missing_docs, unreachable_pub)]

pub mod decorative;
pub mod gradients;
pub mod icons;
pub mod theme;
pub mod tokens;

pub use decorative::{
    content_index, content_sum, DecorativeColor, DECORATIVE_PAIRS, DECORATIVE_PALETTE_SIZE,
};
pub use gpui::Rgba;
pub use icons::{IconAssetSource, IconLoader, IconName};
pub use theme::{SharedTheme, Theme};
pub use tokens::{parse_hex, to_hex, ColorToken, ThemeMode, TokenError};

/// Wires the design system asset source into a GPUI application.
#[must_use]
pub fn install_defaults(app: gpui::Application) -> gpui::Application {
    app.with_assets(IconLoader::asset_source())
}
