//! Theme context owning the token override table.
//!
//! The context is constructed by the application's composition root and
//! handed to components explicitly; nothing in this module reaches for
//! process globals. [`SharedTheme`] is the cloneable handle used across
//! windows, guarding the override table with a reader-writer lock so readers
//! observe either the previous or the new value of an override, never a torn
//! one.

use std::{
    collections::HashMap,
    rc::Rc,
    sync::{Arc, RwLock},
};

use gpui::{App, Rgba};
use gpui_component::theme::{
    Theme as UiTheme, ThemeConfig, ThemeConfigColors, ThemeMode as UiThemeMode,
};

use crate::decorative::{content_index, DecorativeColor, DECORATIVE_PAIRS};
use crate::tokens::{to_hex, ColorToken, ThemeMode};

/// Mutable theme context: the active mode plus the token override table.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    mode: ThemeMode,
    overrides: HashMap<ColorToken, Rgba>,
}

impl Theme {
    /// Creates a context with no overrides.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            overrides: HashMap::new(),
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Switches the active mode. Overrides are mode-independent and survive
    /// the switch.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }

    /// Resolves a token to a concrete color, honoring any active override.
    /// Total: every token has a generated default for the active mode.
    #[must_use]
    pub fn resolve(&self, token: ColorToken) -> Rgba {
        self.overrides
            .get(&token)
            .copied()
            .unwrap_or_else(|| token.default_color(self.mode))
    }

    /// Installs or clears an override. `None` reverts the token to its
    /// generated default. Last write wins; repeating a write is a no-op.
    pub fn set_override(&mut self, token: ColorToken, color: Option<Rgba>) {
        match color {
            Some(color) => {
                self.overrides.insert(token, color);
            }
            None => {
                self.overrides.remove(&token);
            }
        }
    }

    /// Removes every active override.
    pub fn clear_overrides(&mut self) {
        self.overrides.clear();
    }

    /// Number of tokens currently overridden.
    #[must_use]
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Decorative pairing for an identity string, resolved through the
    /// override table so branded decorative tokens take effect here too.
    #[must_use]
    pub fn decorative_color(&self, content_id: &str) -> DecorativeColor {
        let (background, text) = DECORATIVE_PAIRS[content_index(content_id)];
        DecorativeColor {
            background: self.resolve(background),
            text: self.resolve(text),
        }
    }
}

/// Cloneable handle sharing one [`Theme`] across windows and components.
#[derive(Debug, Clone, Default)]
pub struct SharedTheme {
    inner: Arc<RwLock<Theme>>,
}

impl SharedTheme {
    /// Creates a fresh shared context.
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Theme::new(mode))),
        }
    }

    /// Returns the active mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.inner.read().expect("theme lock poisoned").mode()
    }

    /// Switches the active mode.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.inner
            .write()
            .expect("theme lock poisoned")
            .set_mode(mode);
    }

    /// Resolves a token, honoring any active override.
    #[must_use]
    pub fn resolve(&self, token: ColorToken) -> Rgba {
        self.inner.read().expect("theme lock poisoned").resolve(token)
    }

    /// Installs or clears an override.
    pub fn set_override(&self, token: ColorToken, color: Option<Rgba>) {
        self.inner
            .write()
            .expect("theme lock poisoned")
            .set_override(token, color);
    }

    /// Removes every active override.
    pub fn clear_overrides(&self) {
        self.inner
            .write()
            .expect("theme lock poisoned")
            .clear_overrides();
    }

    /// Decorative pairing for an identity string.
    #[must_use]
    pub fn decorative_color(&self, content_id: &str) -> DecorativeColor {
        self.inner
            .read()
            .expect("theme lock poisoned")
            .decorative_color(content_id)
    }

    /// Clones the current state, e.g. for diffing in tests or diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> Theme {
        self.inner.read().expect("theme lock poisoned").clone()
    }

    /// Maps the resolved palette onto gpui-component's global theme so stock
    /// widgets in host applications pick up the token colors.
    pub fn apply(&self, cx: &mut App) {
        if !cx.has_global::<UiTheme>() {
            gpui_component::theme::init(cx);
        }

        let light = Rc::new(self.config_for(ThemeMode::Light));
        let dark = Rc::new(self.config_for(ThemeMode::Dark));

        let theme = UiTheme::global_mut(cx);
        theme.light_theme = light.clone();
        theme.dark_theme = dark.clone();

        let mode = self.mode();
        let selected = match mode {
            ThemeMode::Light => light,
            ThemeMode::Dark => dark,
        };
        theme.apply_config(&selected);
        theme.mode = match mode {
            ThemeMode::Light => UiThemeMode::Light,
            ThemeMode::Dark => UiThemeMode::Dark,
        };
    }

    fn config_for(&self, mode: ThemeMode) -> ThemeConfig {
        let mut snapshot = self.snapshot();
        snapshot.set_mode(mode);
        let hex = |token: ColorToken| Some(to_hex(snapshot.resolve(token)).into());

        let mut colors = ThemeConfigColors::default();
        colors.primary = hex(ColorToken::BgActionPrimaryRest);
        colors.primary_foreground = hex(ColorToken::TextOnSolidPrimary);
        colors.accent = hex(ColorToken::BgAccentRest);
        colors.accent_foreground = hex(ColorToken::TextOnSolidPrimary);
        colors.background = hex(ColorToken::BgCanvasDefault);
        colors.popover = hex(ColorToken::BgSubtleSecondary);
        colors.popover_foreground = hex(ColorToken::TextPrimary);
        colors.border = hex(ColorToken::BorderInteractivePrimary);
        colors.muted = hex(ColorToken::BgSubtlePrimary);
        colors.muted_foreground = hex(ColorToken::TextSecondary);
        colors.danger = hex(ColorToken::BgCriticalPrimary);

        let mut config = ThemeConfig::default();
        config.is_default = matches!(mode, ThemeMode::Light);
        config.mode = match mode {
            ThemeMode::Light => UiThemeMode::Light,
            ThemeMode::Dark => UiThemeMode::Dark,
        };
        config.name = mode.as_str().into();
        config.radius = Some(8);
        config.shadow = Some(true);
        config.colors = colors;
        config
    }
}

#[cfg(test)]
mod tests {
    use gpui::rgb;

    use super::*;

    #[test]
    fn resolution_without_overrides_matches_defaults() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let theme = Theme::new(mode);
            for token in ColorToken::all() {
                assert_eq!(theme.resolve(token), token.default_color(mode));
            }
        }
    }

    #[test]
    fn override_round_trip() {
        let mut theme = Theme::new(ThemeMode::Light);
        let brand = rgb(0x4f3dc2);
        let default = ColorToken::BgAccentRest.default_color(ThemeMode::Light);

        theme.set_override(ColorToken::BgAccentRest, Some(brand));
        assert_eq!(theme.resolve(ColorToken::BgAccentRest), brand);

        theme.set_override(ColorToken::BgAccentRest, None);
        assert_eq!(theme.resolve(ColorToken::BgAccentRest), default);
    }

    #[test]
    fn set_override_is_idempotent() {
        let mut theme = Theme::new(ThemeMode::Dark);
        let brand = rgb(0x0467dd);
        theme.set_override(ColorToken::IconAccentTertiary, Some(brand));
        theme.set_override(ColorToken::IconAccentTertiary, Some(brand));
        assert_eq!(theme.override_count(), 1);
        assert_eq!(theme.resolve(ColorToken::IconAccentTertiary), brand);

        theme.set_override(ColorToken::IconAccentTertiary, None);
        theme.set_override(ColorToken::IconAccentTertiary, None);
        assert_eq!(theme.override_count(), 0);
    }

    #[test]
    fn overrides_survive_mode_switches() {
        let mut theme = Theme::new(ThemeMode::Light);
        let brand = rgb(0xb8530d);
        theme.set_override(ColorToken::TextLinkExternal, Some(brand));
        theme.set_mode(ThemeMode::Dark);
        assert_eq!(theme.resolve(ColorToken::TextLinkExternal), brand);
        assert_eq!(
            theme.resolve(ColorToken::TextPrimary),
            ColorToken::TextPrimary.default_color(ThemeMode::Dark)
        );
    }

    #[test]
    fn decorative_pairs_resolve_through_overrides() {
        let mut theme = Theme::new(ThemeMode::Light);
        // "%" sums to 37, which lands on the second palette entry.
        let pair = theme.decorative_color("%");
        assert_eq!(
            pair.background,
            ColorToken::BgDecorative2.default_color(ThemeMode::Light)
        );

        let brand = rgb(0x123456);
        theme.set_override(ColorToken::BgDecorative2, Some(brand));
        assert_eq!(theme.decorative_color("%").background, brand);
    }

    #[test]
    fn shared_handle_views_one_table() {
        let shared = SharedTheme::new(ThemeMode::Light);
        let sibling = shared.clone();
        let brand = rgb(0x21bb89);

        shared.set_override(ColorToken::BgActionPrimaryRest, Some(brand));
        assert_eq!(sibling.resolve(ColorToken::BgActionPrimaryRest), brand);

        sibling.clear_overrides();
        assert_eq!(shared.snapshot().override_count(), 0);
    }
}
