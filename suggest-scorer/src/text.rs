//! Textual similarity derived from Levenshtein edit distance.
//!
//! Strings are compared exactly as given, one Unicode scalar value at a
//! time. Case folding, trimming, and diacritic removal are left to the
//! caller.

#![forbid(unsafe_code)]

use suggest_core::ScoreType;
use suggest_core::scorer::clamp_unit;

use crate::{InputRole, ScoreError};

/// Minimum number of single-character insertions, deletions, and
/// substitutions turning `a` into `b`.
///
/// # Examples
/// ```
/// use suggest_scorer::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    char_edit_distance(&left, &right)
}

/// Normalised similarity of two strings in `0.0..=1.0`.
///
/// Two empty strings are a perfect match.
///
/// # Examples
/// ```
/// use suggest_scorer::similarity;
///
/// assert_eq!(similarity("cafe", "cafe"), 1.0);
/// assert_eq!(similarity("", ""), 1.0);
/// assert_eq!(similarity("", "abc"), 0.0);
/// ```
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let left: Vec<char> = a.chars().collect();
    let right: Vec<char> = b.chars().collect();
    let longest = left.len().max(right.len());
    normalise(char_edit_distance(&left, &right), longest)
}

/// Scores how closely a query term matches a candidate name.
///
/// The default scorer accepts strings of any length. Because the edit
/// distance costs `O(len(a) * len(b))` time, services facing untrusted input
/// should set a cap with [`StringMatchScorer::with_max_chars`].
///
/// # Examples
/// ```
/// use suggest_scorer::StringMatchScorer;
///
/// # fn main() -> Result<(), suggest_scorer::ScoreError> {
/// let scorer = StringMatchScorer::new();
/// assert_eq!(scorer.score("cafe", "cafe")?, 1.0);
/// assert_eq!(scorer.score("", "abc")?, 0.0);
///
/// let capped = StringMatchScorer::new().with_max_chars(3);
/// assert!(capped.score("cafe", "caf").is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringMatchScorer {
    max_chars: Option<usize>,
}

impl StringMatchScorer {
    /// Construct a scorer without a length cap.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_chars: None }
    }

    /// Reject inputs longer than `limit` characters.
    #[must_use]
    pub const fn with_max_chars(mut self, limit: usize) -> Self {
        self.max_chars = Some(limit);
        self
    }

    /// Return the configured length cap, if any.
    #[must_use]
    pub const fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    /// Return the normalised similarity of `query` and `name`.
    ///
    /// # Errors
    /// Returns [`ScoreError::InputTooLong`] when either string exceeds the
    /// configured cap.
    pub fn score(&self, query: &str, name: &str) -> Result<f64, ScoreError> {
        self.measure(query, name, ScoreType::Normalised)
    }

    /// Compare two strings on the requested scale.
    ///
    /// [`ScoreType::Raw`] yields the edit distance itself; every other scale
    /// is normalised.
    ///
    /// # Errors
    /// Returns [`ScoreError::InputTooLong`] when either string exceeds the
    /// configured cap.
    #[expect(
        clippy::cast_precision_loss,
        reason = "edit distances are bounded by the capped input length"
    )]
    pub fn measure(
        &self,
        query: &str,
        name: &str,
        score_type: ScoreType,
    ) -> Result<f64, ScoreError> {
        self.check_length(query, InputRole::Query)?;
        self.check_length(name, InputRole::Candidate)?;

        let left: Vec<char> = query.chars().collect();
        let right: Vec<char> = name.chars().collect();
        let distance = char_edit_distance(&left, &right);
        Ok(match score_type {
            ScoreType::Raw => distance as f64,
            _ => normalise(distance, left.len().max(right.len())),
        })
    }

    fn check_length(&self, text: &str, role: InputRole) -> Result<(), ScoreError> {
        let Some(limit) = self.max_chars else {
            return Ok(());
        };
        // Byte length bounds the char count, so most inputs skip the scan.
        if text.len() <= limit {
            return Ok(());
        }
        let chars = text.chars().count();
        if chars > limit {
            return Err(ScoreError::InputTooLong { role, chars, limit });
        }
        Ok(())
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "normalising divides the distance by the longer input length"
)]
fn normalise(distance: usize, longest: usize) -> f64 {
    if longest == 0 {
        return 1.0;
    }
    clamp_unit(1.0 - distance as f64 / longest as f64)
}

fn char_edit_distance(a: &[char], b: &[char]) -> usize {
    // Keep the row as short as possible; the distance is symmetric.
    let (outer, inner) = if a.len() < b.len() { (b, a) } else { (a, b) };

    // `previous[j]` is the distance between the consumed prefix of `outer`
    // and `inner[..j]`.
    let mut previous: Vec<usize> = (0..=inner.len()).collect();
    let mut current: Vec<usize> = Vec::with_capacity(inner.len() + 1);

    for (row, &outer_char) in outer.iter().enumerate() {
        current.clear();
        current.push(row + 1);
        for (&inner_char, window) in inner.iter().zip(previous.windows(2)) {
            let &[diagonal, above] = window else {
                continue;
            };
            let left = current.last().copied().unwrap_or(row + 1);
            let substitution = diagonal + usize::from(outer_char != inner_char);
            current.push(substitution.min(above + 1).min(left + 1));
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous.last().copied().unwrap_or(0)
}
