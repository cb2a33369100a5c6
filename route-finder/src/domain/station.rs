//! Station identity types.

use std::fmt;

use serde::Serialize;

/// Characters after which the next letter starts a new capitalised word part.
const WORD_BREAKS: [char; 3] = ['-', '(', '/'];

/// A normalized station name, used as the vertex identity in the network graph.
///
/// Normalization collapses all whitespace runs (including newlines from
/// schematic labels) into single spaces, trims the ends, and title-cases
/// each word. Two spellings that differ only in case or spacing produce
/// the same key, so lookups are case-insensitive but display-stable.
///
/// # Examples
///
/// ```
/// use route_finder::domain::StationKey;
///
/// let key = StationKey::normalize("  kenyatta\nAVENUE ").unwrap();
/// assert_eq!(key.as_str(), "Kenyatta Avenue");
///
/// // Blank names are schematic-only and have no key
/// assert!(StationKey::normalize(" \n ").is_none());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    /// Normalize a raw station name.
    ///
    /// Every letter is lowercased first, then the first letter of each word
    /// part is uppercased when that maps to a single character. The result
    /// is a fixed point: normalizing a key again returns the same key.
    ///
    /// Returns `None` if the name is empty after trimming.
    pub fn normalize(raw: &str) -> Option<Self> {
        let mut out = String::with_capacity(raw.len());

        for word in raw.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            let mut capitalise = true;
            for c in word.chars().flat_map(char::to_lowercase) {
                out.push(if capitalise { title_letter(c) } else { c });
                capitalise = WORD_BREAKS.contains(&c);
            }
        }

        if out.is_empty() { None } else { Some(Self(out)) }
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against the normalized name.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl fmt::Debug for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationKey({})", self.0)
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Uppercase form of a lowercase letter, or the letter itself when its
/// uppercase form is more than one character (`ß` would become `SS`).
fn title_letter(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
