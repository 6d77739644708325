//! Circular composer send button.

use designsystem::{ColorToken, IconName, SharedTheme, ThemeMode};
use gpui::prelude::FluentBuilder;
use gpui::{
    div, px, svg, App, ElementId, InteractiveElement, IntoElement, MouseButton, MouseDownEvent,
    ParentElement, RenderOnce, StatefulInteractiveElement, Styled, Window,
};

type SendClickHandler = Box<dyn Fn(&MouseDownEvent, &mut Window, &mut App) + 'static>;

/// Picks the icon tint for the send glyph.
///
/// The rest tint is mode dependent: the light palette sits the glyph on a
/// solid dark circle, while the dark palette pairs the primary icon color
/// with the deep accent disc.
#[must_use]
pub fn send_icon_token(disabled: bool, mode: ThemeMode) -> ColorToken {
    if disabled {
        return ColorToken::IconQuaternary;
    }
    match mode {
        ThemeMode::Light => ColorToken::IconOnSolidPrimary,
        ThemeMode::Dark => ColorToken::IconPrimary,
    }
}

fn send_background_token(disabled: bool) -> ColorToken {
    if disabled {
        ColorToken::BgActionPrimaryDisabled
    } else {
        ColorToken::BgActionPrimaryRest
    }
}

/// Round send button used at the trailing edge of the message composer.
#[derive(IntoElement)]
pub struct SendButton {
    id: ElementId,
    theme: SharedTheme,
    disabled: bool,
    on_click: Option<SendClickHandler>,
}

impl SendButton {
    /// Creates an enabled send button bound to the given theme context.
    pub fn new(id: impl Into<ElementId>, theme: SharedTheme) -> Self {
        Self {
            id: id.into(),
            theme,
            disabled: false,
            on_click: None,
        }
    }

    /// Sets the disabled state.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the click handler. Ignored while disabled.
    #[must_use]
    pub fn on_click(
        mut self,
        handler: impl Fn(&MouseDownEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }
}

impl RenderOnce for SendButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mode = self.theme.mode();
        let background = self.theme.resolve(send_background_token(self.disabled));
        let icon_color = self.theme.resolve(send_icon_token(self.disabled, mode));
        let hovered = self.theme.resolve(ColorToken::BgActionPrimaryHovered);
        let pressed = self.theme.resolve(ColorToken::BgActionPrimaryPressed);

        let mut button = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .size(px(36.0))
            .rounded_full()
            .bg(background)
            .child(
                svg()
                    .path(IconName::SendSolid.asset_path())
                    .size(px(24.0))
                    .text_color(icon_color),
            )
            .when(!self.disabled, |this| {
                this.hover(|this| this.bg(hovered))
                    .active(|this| this.bg(pressed))
            });

        if self.disabled {
            button = button.cursor_not_allowed();
        } else {
            button = button.cursor_pointer();
            if let Some(on_click) = self.on_click {
                button = button.on_mouse_down(MouseButton::Left, on_click);
            }
        }

        button
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tint_ignores_the_mode() {
        assert_eq!(
            send_icon_token(true, ThemeMode::Light),
            ColorToken::IconQuaternary
        );
        assert_eq!(
            send_icon_token(true, ThemeMode::Dark),
            ColorToken::IconQuaternary
        );
    }

    #[test]
    fn enabled_tint_follows_the_mode() {
        assert_eq!(
            send_icon_token(false, ThemeMode::Light),
            ColorToken::IconOnSolidPrimary
        );
        assert_eq!(
            send_icon_token(false, ThemeMode::Dark),
            ColorToken::IconPrimary
        );
    }

    #[test]
    fn background_reflects_the_disabled_state() {
        assert_eq!(
            send_background_token(false),
            ColorToken::BgActionPrimaryRest
        );
        assert_eq!(
            send_background_token(true),
            ColorToken::BgActionPrimaryDisabled
        );
    }
}
