//! Semantic color tokens generated from the Mosaic design specification.
//!
//! The token set is closed: every identifier is an enum variant with a fixed
//! light and dark default, so resolution is total and unknown identifiers are
//! unrepresentable. String slugs exist only at the edges (branding files,
//! diagnostics) and round-trip through [`ColorToken::from_slug`].

use std::collections::HashMap;
use std::str::FromStr;

use gpui::{rgb, rgba, Rgba};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Light or dark rendering mode.
///
/// The mode is an explicit input to every color lookup rather than an ambient
/// environment query, so resolution stays a pure function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light canvas with dark foregrounds.
    #[default]
    Light,
    /// Dark canvas with light foregrounds.
    Dark,
}

impl ThemeMode {
    /// Returns the mode's stable slug.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = TokenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(TokenError::UnknownMode(other.to_owned())),
        }
    }
}

/// Errors raised by token lookups and color parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Raised when a slug does not name any generated token.
    #[error("unknown color token '{0}'")]
    UnknownToken(String),
    /// Raised when a mode name is neither `light` nor `dark`.
    #[error("unknown theme mode '{0}'")]
    UnknownMode(String),
    /// Raised when a color literal is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color literal '{0}'")]
    InvalidColor(String),
}

/// A semantic color token addressable by UI components.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorToken {
    IconPrimary,
    IconSecondary,
    IconTertiary,
    IconQuaternary,
    IconOnSolidPrimary,
    IconAccentTertiary,
    IconCriticalPrimary,
    TextPrimary,
    TextSecondary,
    TextPlaceholder,
    TextDisabled,
    TextActionPrimary,
    TextActionAccent,
    TextOnSolidPrimary,
    TextCriticalPrimary,
    TextLinkExternal,
    BgCanvasDefault,
    BgCanvasDisabled,
    BgSubtlePrimary,
    BgSubtleSecondary,
    BgActionPrimaryRest,
    BgActionPrimaryHovered,
    BgActionPrimaryPressed,
    BgActionPrimaryDisabled,
    BgAccentRest,
    BgCriticalPrimary,
    BorderInteractivePrimary,
    BorderInteractiveHovered,
    BorderDisabled,
    BorderFocused,
    BgDecorative1,
    BgDecorative2,
    BgDecorative3,
    BgDecorative4,
    BgDecorative5,
    BgDecorative6,
    TextDecorative1,
    TextDecorative2,
    TextDecorative3,
    TextDecorative4,
    TextDecorative5,
    TextDecorative6,
}

/// One generated row: token, slug, light default, dark default.
type TokenRow = (ColorToken, &'static str, u32, u32);

/// Generated defaults. Row order mirrors the enum declaration so that
/// `token as usize` indexes its own row.
const TOKEN_TABLE: &[TokenRow] = &[
    (ColorToken::IconPrimary, "icon-primary", 0x1b1d22, 0xf4f6fa),
    (ColorToken::IconSecondary, "icon-secondary", 0x666d80, 0xa9b2bc),
    (ColorToken::IconTertiary, "icon-tertiary", 0x8d97a5, 0x8d97a5),
    (ColorToken::IconQuaternary, "icon-quaternary", 0xc1c6cd, 0x4a5057),
    (
        ColorToken::IconOnSolidPrimary,
        "icon-on-solid-primary",
        0xffffff,
        0xffffff,
    ),
    (
        ColorToken::IconAccentTertiary,
        "icon-accent-tertiary",
        0x0c8a68,
        0x21bb89,
    ),
    (
        ColorToken::IconCriticalPrimary,
        "icon-critical-primary",
        0xd51928,
        0xfd3f4d,
    ),
    (ColorToken::TextPrimary, "text-primary", 0x1b1d22, 0xf4f6fa),
    (ColorToken::TextSecondary, "text-secondary", 0x666d80, 0xa9b2bc),
    (
        ColorToken::TextPlaceholder,
        "text-placeholder",
        0x8d97a5,
        0x8d97a5,
    ),
    (ColorToken::TextDisabled, "text-disabled", 0xc1c6cd, 0x4a5057),
    (
        ColorToken::TextActionPrimary,
        "text-action-primary",
        0x1b1d22,
        0xf4f6fa,
    ),
    (
        ColorToken::TextActionAccent,
        "text-action-accent",
        0x0c8a68,
        0x21bb89,
    ),
    (
        ColorToken::TextOnSolidPrimary,
        "text-on-solid-primary",
        0xffffff,
        0xffffff,
    ),
    (
        ColorToken::TextCriticalPrimary,
        "text-critical-primary",
        0xd51928,
        0xfd3f4d,
    ),
    (
        ColorToken::TextLinkExternal,
        "text-link-external",
        0x0467dd,
        0x368bff,
    ),
    (
        ColorToken::BgCanvasDefault,
        "bg-canvas-default",
        0xffffff,
        0x101317,
    ),
    (
        ColorToken::BgCanvasDisabled,
        "bg-canvas-disabled",
        0xf0f2f5,
        0x16191d,
    ),
    (
        ColorToken::BgSubtlePrimary,
        "bg-subtle-primary",
        0xe1e6ec,
        0x26282d,
    ),
    (
        ColorToken::BgSubtleSecondary,
        "bg-subtle-secondary",
        0xf0f2f5,
        0x1a1d21,
    ),
    (
        ColorToken::BgActionPrimaryRest,
        "bg-action-primary-rest",
        0x1b1d22,
        0x0b6e54,
    ),
    (
        ColorToken::BgActionPrimaryHovered,
        "bg-action-primary-hovered",
        0x3a3d44,
        0x0d8266,
    ),
    (
        ColorToken::BgActionPrimaryPressed,
        "bg-action-primary-pressed",
        0x52565f,
        0x084f3c,
    ),
    (
        ColorToken::BgActionPrimaryDisabled,
        "bg-action-primary-disabled",
        0xf0f2f5,
        0x26282d,
    ),
    (ColorToken::BgAccentRest, "bg-accent-rest", 0x0c8a68, 0x21bb89),
    (
        ColorToken::BgCriticalPrimary,
        "bg-critical-primary",
        0xd51928,
        0xfd3f4d,
    ),
    (
        ColorToken::BorderInteractivePrimary,
        "border-interactive-primary",
        0x8d97a5,
        0x666d80,
    ),
    (
        ColorToken::BorderInteractiveHovered,
        "border-interactive-hovered",
        0x666d80,
        0x8d97a5,
    ),
    (ColorToken::BorderDisabled, "border-disabled", 0xe1e6ec, 0x26282d),
    (ColorToken::BorderFocused, "border-focused", 0x0467dd, 0x368bff),
    (ColorToken::BgDecorative1, "bg-decorative-1", 0xe3f7d9, 0x143013),
    (ColorToken::BgDecorative2, "bg-decorative-2", 0xd9f4f6, 0x0b3331),
    (ColorToken::BgDecorative3, "bg-decorative-3", 0xe9e6fc, 0x201d4d),
    (ColorToken::BgDecorative4, "bg-decorative-4", 0xfae6fc, 0x3e1347),
    (ColorToken::BgDecorative5, "bg-decorative-5", 0xffe6f0, 0x451127),
    (ColorToken::BgDecorative6, "bg-decorative-6", 0xffeadd, 0x40230c),
    (
        ColorToken::TextDecorative1,
        "text-decorative-1",
        0x2b5d12,
        0xb8f36b,
    ),
    (
        ColorToken::TextDecorative2,
        "text-decorative-2",
        0x0f5e63,
        0x86e6e0,
    ),
    (
        ColorToken::TextDecorative3,
        "text-decorative-3",
        0x4f3dc2,
        0xc2b6ff,
    ),
    (
        ColorToken::TextDecorative4,
        "text-decorative-4",
        0x9421a3,
        0xec9ff7,
    ),
    (
        ColorToken::TextDecorative5,
        "text-decorative-5",
        0xbd275e,
        0xff9dc4,
    ),
    (
        ColorToken::TextDecorative6,
        "text-decorative-6",
        0xb8530d,
        0xf4a368,
    ),
];

static SLUG_INDEX: Lazy<HashMap<&'static str, ColorToken>> = Lazy::new(|| {
    TOKEN_TABLE
        .iter()
        .map(|(token, slug, _, _)| (*slug, *token))
        .collect()
});

impl ColorToken {
    /// Iterates every generated token in declaration order.
    pub fn all() -> impl Iterator<Item = ColorToken> {
        TOKEN_TABLE.iter().map(|(token, _, _, _)| *token)
    }

    fn row(self) -> &'static TokenRow {
        let row = &TOKEN_TABLE[self as usize];
        debug_assert_eq!(row.0, self, "token table out of sync with enum order");
        row
    }

    /// Returns the token's kebab-case slug as used in branding files.
    #[must_use]
    pub fn slug(self) -> &'static str {
        self.row().1
    }

    /// Looks a token up by its slug.
    pub fn from_slug(slug: &str) -> Result<Self, TokenError> {
        SLUG_INDEX
            .get(slug)
            .copied()
            .ok_or_else(|| TokenError::UnknownToken(slug.to_owned()))
    }

    /// Returns the generated default color for the given mode.
    #[must_use]
    pub fn default_color(self, mode: ThemeMode) -> Rgba {
        let row = self.row();
        match mode {
            ThemeMode::Light => rgb(row.2),
            ThemeMode::Dark => rgb(row.3),
        }
    }
}

/// Parses a `#rrggbb` or `#rrggbbaa` color literal.
pub fn parse_hex(value: &str) -> Result<Rgba, TokenError> {
    let invalid = || TokenError::InvalidColor(value.to_owned());
    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    let parsed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
    match digits.len() {
        6 => Ok(rgb(parsed)),
        8 => Ok(rgba(parsed)),
        _ => Err(invalid()),
    }
}

/// Formats a color as a lowercase `#rrggbb` or `#rrggbbaa` literal.
#[must_use]
pub fn to_hex(color: Rgba) -> String {
    let channel = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u32;
    if (color.a - 1.0).abs() < f32::EPSILON {
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(color.r),
            channel(color.g),
            channel(color.b)
        )
    } else {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            channel(color.r),
            channel(color.g),
            channel(color.b),
            channel(color.a)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum_order() {
        for (index, (token, _, _, _)) in TOKEN_TABLE.iter().enumerate() {
            assert_eq!(*token as usize, index);
        }
    }

    #[test]
    fn slugs_round_trip() {
        for token in ColorToken::all() {
            assert_eq!(ColorToken::from_slug(token.slug()).unwrap(), token);
        }
    }

    #[test]
    fn unknown_slug_is_rejected() {
        assert_eq!(
            ColorToken::from_slug("bg-action-secondary"),
            Err(TokenError::UnknownToken("bg-action-secondary".into()))
        );
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("dark".parse::<ThemeMode>().unwrap(), ThemeMode::Dark);
        assert!(matches!(
            "sepia".parse::<ThemeMode>(),
            Err(TokenError::UnknownMode(name)) if name == "sepia"
        ));
    }

    #[test]
    fn hex_literals_round_trip() {
        let color = parse_hex("#0c8a68").unwrap();
        assert_eq!(to_hex(color), "#0c8a68");
        let translucent = parse_hex("#0c8a6880").unwrap();
        assert_eq!(to_hex(translucent), "#0c8a6880");
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for literal in ["0c8a68", "#0c8a6", "#xyzxyz", "#", ""] {
            assert!(matches!(
                parse_hex(literal),
                Err(TokenError::InvalidColor(_))
            ));
        }
    }

    #[test]
    fn token_contrast_ratios() {
        let pairs = [
            (ColorToken::TextPrimary, ColorToken::BgCanvasDefault),
            (ColorToken::IconOnSolidPrimary, ColorToken::BgActionPrimaryRest),
            (ColorToken::TextCriticalPrimary, ColorToken::BgCanvasDefault),
        ];
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            for (foreground, background) in pairs {
                let ratio = contrast_ratio(
                    foreground.default_color(mode),
                    background.default_color(mode),
                );
                assert!(
                    ratio >= 4.5,
                    "{}/{} contrast {ratio} below threshold in {} mode",
                    foreground.slug(),
                    background.slug(),
                    mode.as_str()
                );
            }
        }
    }

    fn contrast_ratio(foreground: Rgba, background: Rgba) -> f32 {
        let l1 = relative_luminance(foreground);
        let l2 = relative_luminance(background);
        let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    fn relative_luminance(color: Rgba) -> f32 {
        let linear = |value: f32| {
            if value <= 0.04045 {
                value / 12.92
            } else {
                ((value + 0.055) / 1.055).powf(2.4)
            }
        };
        0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
    }
}
