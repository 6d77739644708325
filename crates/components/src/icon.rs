//! Token-tinted SVG icon element.

use designsystem::{ColorToken, IconName, SharedTheme};
use gpui::{px, svg, App, IntoElement, RenderOnce, Styled, Window};

/// Standard icon sizes used across the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconSize {
    /// 16px, inline with body text.
    Small,
    /// 24px, the default touch-friendly size.
    #[default]
    Medium,
    /// 32px, headers and empty states.
    Large,
}

impl IconSize {
    /// Edge length in pixels.
    #[must_use]
    pub fn pixels(self) -> f32 {
        match self {
            Self::Small => 16.0,
            Self::Medium => 24.0,
            Self::Large => 32.0,
        }
    }
}

/// An icon rendered from the bundled SVG set and tinted with a semantic token.
#[derive(IntoElement)]
pub struct TokenIcon {
    name: IconName,
    theme: SharedTheme,
    token: ColorToken,
    size: IconSize,
}

impl TokenIcon {
    /// Creates an icon tinted with [`ColorToken::IconPrimary`].
    pub fn new(name: IconName, theme: SharedTheme) -> Self {
        Self {
            name,
            theme,
            token: ColorToken::IconPrimary,
            size: IconSize::default(),
        }
    }

    /// Replaces the tint token.
    #[must_use]
    pub fn token(mut self, token: ColorToken) -> Self {
        self.token = token;
        self
    }

    /// Replaces the icon size.
    #[must_use]
    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }
}

impl RenderOnce for TokenIcon {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        svg()
            .path(self.name.asset_path())
            .size(px(self.size.pixels()))
            .text_color(self.theme.resolve(self.token))
            .flex_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_map_to_pixels() {
        assert_eq!(IconSize::Small.pixels(), 16.0);
        assert_eq!(IconSize::Medium.pixels(), 24.0);
        assert_eq!(IconSize::Large.pixels(), 32.0);
        assert_eq!(IconSize::default(), IconSize::Medium);
    }
}
