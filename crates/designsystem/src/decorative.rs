//! Deterministic identity coloring over a fixed palette of six pairs.
//!
//! Rooms, users, and other identity strings get a stable background/text
//! pairing without any per-object storage. The index is a pure function of
//! the identifier, and it must stay in sync with the hash our web client
//! computes so a user sees the same avatar colors on every platform.

use gpui::Rgba;
use unicode_segmentation::UnicodeSegmentation;

use crate::tokens::ColorToken;

/// Number of decorative pairs in the fixed palette.
pub const DECORATIVE_PALETTE_SIZE: usize = 6;

/// Token pairs `(background, text)` backing the palette. Index math depends
/// on this ordering, so it is part of the contract.
pub const DECORATIVE_PAIRS: [(ColorToken, ColorToken); DECORATIVE_PALETTE_SIZE] = [
    (ColorToken::BgDecorative1, ColorToken::TextDecorative1),
    (ColorToken::BgDecorative2, ColorToken::TextDecorative2),
    (ColorToken::BgDecorative3, ColorToken::TextDecorative3),
    (ColorToken::BgDecorative4, ColorToken::TextDecorative4),
    (ColorToken::BgDecorative5, ColorToken::TextDecorative5),
    (ColorToken::BgDecorative6, ColorToken::TextDecorative6),
];

/// Background and text colors assigned to an identity string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecorativeColor {
    /// Fill behind the avatar or pill.
    pub background: Rgba,
    /// Foreground rendered atop [`DecorativeColor::background`].
    pub text: Rgba,
}

/// Sums the first Unicode scalar of each user-perceived character.
///
/// Iteration is by extended grapheme cluster, taking only the first scalar of
/// each cluster. Switching to code points or UTF-16 units would change the
/// colors users already see, so the iteration semantics are load-bearing.
#[must_use]
pub fn content_sum(content_id: &str) -> u64 {
    content_id
        .graphemes(true)
        .filter_map(|grapheme| grapheme.chars().next())
        .map(|scalar| u64::from(u32::from(scalar)))
        .sum()
}

/// Palette index for a content identifier. Stable across runs and platforms;
/// the empty string maps to index 0.
#[must_use]
pub fn content_index(content_id: &str) -> usize {
    index_for(content_sum(content_id), DECORATIVE_PALETTE_SIZE)
}

fn index_for(sum: u64, palette_size: usize) -> usize {
    // A zero-size palette would make the modulo undefined.
    if palette_size == 0 {
        return 0;
    }
    (sum % palette_size as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixed vectors shared with the web client's implementation.
    const PARITY_VECTORS: &[(&str, u64, usize)] = &[
        ("", 0, 0),
        ("%", 37, 1),
        ("abc", 294, 0),
        ("!room", 478, 4),
        ("@alice:matrix.org", 1667, 5),
        // "e" followed by a combining acute accent forms one grapheme; only
        // the base scalar counts.
        ("e\u{0301}", 101, 5),
        ("e\u{e9}", 334, 4),
        // Thumbs up with a skin tone modifier is a single grapheme.
        ("\u{1f44d}\u{1f3fd}", 128_077, 1),
    ];

    #[test]
    fn parity_vectors_hold() {
        for (input, sum, index) in PARITY_VECTORS {
            assert_eq!(content_sum(input), *sum, "sum for {input:?}");
            assert_eq!(content_index(input), *index, "index for {input:?}");
        }
    }

    #[test]
    fn selection_is_deterministic() {
        for (input, _, _) in PARITY_VECTORS {
            assert_eq!(content_index(input), content_index(input));
        }
    }

    #[test]
    fn congruent_sums_share_a_slot() {
        // 'j' is 106 and 'p' is 112; both are 4 modulo the palette size.
        assert_eq!(content_index("j"), content_index("p"));
        assert_eq!(content_index("j"), 4);
    }

    #[test]
    fn empty_palette_guards_the_modulo() {
        assert_eq!(index_for(37, 0), 0);
    }

    #[test]
    fn palette_tokens_are_distinct() {
        for (position, (background, text)) in DECORATIVE_PAIRS.iter().enumerate() {
            assert_ne!(background, text);
            for (other_background, _) in DECORATIVE_PAIRS.iter().skip(position + 1) {
                assert_ne!(background, other_background);
            }
        }
    }
}
