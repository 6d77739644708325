//! Identity avatar with a deterministic decorative fallback.

use designsystem::SharedTheme;
use gpui::{
    div, px, AnyElement, App, FontWeight, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window,
};
use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Uppercased first grapheme of a display name, used as the fallback glyph.
#[must_use]
pub fn initial(display_name: &str) -> String {
    display_name
        .graphemes(true)
        .next()
        .map(str::to_uppercase)
        .unwrap_or_default()
}

/// Circular avatar colored from the decorative palette.
///
/// The same `content_id` always resolves to the same background and text
/// pair, so a user keeps their color across sessions and across clients.
#[derive(IntoElement)]
pub struct Avatar {
    theme: SharedTheme,
    content_id: SharedString,
    display_name: SharedString,
    size: f32,
    children: SmallVec<[AnyElement; 2]>,
}

impl Avatar {
    /// Creates an avatar keyed on a stable content identifier.
    pub fn new(
        theme: SharedTheme,
        content_id: impl Into<SharedString>,
        display_name: impl Into<SharedString>,
    ) -> Self {
        Self {
            theme,
            content_id: content_id.into(),
            display_name: display_name.into(),
            size: 32.0,
            children: SmallVec::new(),
        }
    }

    /// Sets the avatar diameter in pixels.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Appends an overlay element, such as a presence dot.
    #[must_use]
    pub fn child(mut self, child: impl IntoElement) -> Self {
        self.children.push(child.into_any_element());
        self
    }
}

impl RenderOnce for Avatar {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.theme.decorative_color(&self.content_id);
        let glyph: SharedString = initial(&self.display_name).into();

        div()
            .flex()
            .items_center()
            .justify_center()
            .size(px(self.size))
            .rounded_full()
            .bg(colors.background)
            .text_color(colors.text)
            .text_size(px(self.size * 0.45))
            .font_weight(FontWeight::MEDIUM)
            .child(glyph)
            .children(self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_takes_the_first_grapheme() {
        assert_eq!(initial("alice"), "A");
        assert_eq!(initial("émile"), "É");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn initial_keeps_combining_marks_together() {
        // LATIN SMALL LETTER E followed by COMBINING ACUTE ACCENT.
        assert_eq!(initial("e\u{0301}lise"), "E\u{0301}");
    }
}
