//! Length-based post-processing of rendered excuses.

use crate::request::Length;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Rendered text longer than this is cut back to its first sentence when a
/// Short excuse was requested.
pub const SHORT_CHAR_LIMIT: usize = 140;

/// Courtesy sentences appended to Long excuses.
pub const CLOSING_PHRASES: [&str; 3] = [
    " Thank you for your patience.",
    " I appreciate your understanding and will keep you informed.",
    " Please let me know if a different time works better.",
];

/// Apply the requested length policy to rendered text.
///
/// - Short: when the text exceeds [`SHORT_CHAR_LIMIT`] characters, keep only
///   the first sentence (up to the first ". " boundary) and re-append the
///   period. Text without such a boundary is kept whole.
/// - Medium: unchanged.
/// - Long: append one of [`CLOSING_PHRASES`] chosen uniformly with the
///   supplied rng. This draw happens after template selection, so a seeded
///   run picks the same closing sentence every time.
///
/// The result is trimmed of surrounding whitespace in all cases.
pub fn adjust_length(text: &str, length: Length, rng: &mut SmallRng) -> String {
    let adjusted = match length {
        Length::Short => {
            if text.chars().count() > SHORT_CHAR_LIMIT {
                let first = text.split(". ").next().unwrap_or(text);
                format!("{}.", first)
            } else {
                text.to_string()
            }
        }
        Length::Medium => text.to_string(),
        Length::Long => match CLOSING_PHRASES.choose(rng) {
            Some(phrase) => format!("{}{}", text, phrase),
            None => text.to_string(),
        },
    };

    adjusted.trim().to_string()
}
