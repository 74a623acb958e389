//! Highest-scoring word finder
//!
//! A word's score is the sum of the code points of its characters. The
//! sentence is split on single spaces, sorted, and folded into an
//! [`Accumulator`] that starts at the seed `(97, "a")`.

use serde::Serialize;

/// Sum of the code points of a word's characters
pub type Score = u64;

/// Score the fold starts from (the code point of `'a'`)
pub const SEED_SCORE: Score = 97;

/// Word the fold starts from
pub const SEED_WORD: &str = "a";

/// Score a word by summing the code point of every character
pub fn score(word: &str) -> Score {
    word.chars().map(|c| Score::from(u32::from(c))).sum()
}

/// Split on `' '` literally and sort ascending by native string order.
///
/// Consecutive, leading or trailing spaces yield empty words.
pub fn sorted_words(sentence: &str) -> Vec<&str> {
    let mut words: Vec<&str> = sentence.split(' ').collect();
    words.sort();
    words
}

/// Best (score, word) pair seen so far during the fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accumulator<'a> {
    pub score: Score,
    pub word: &'a str,
}

impl<'a> Accumulator<'a> {
    pub fn seed() -> Self {
        Self {
            score: SEED_SCORE,
            word: SEED_WORD,
        }
    }

    /// Offer a candidate; it replaces the current best only when it scores strictly higher
    pub fn offer(self, word: &'a str) -> Self {
        let candidate = score(word);
        if candidate > self.score {
            log::trace!("{:?} ({}) replaces {:?} ({})", word, candidate, self.word, self.score);
            Self {
                score: candidate,
                word,
            }
        } else {
            self
        }
    }

    /// True while nothing has beaten the seed
    pub fn is_seed(&self) -> bool {
        *self == Self::seed()
    }
}

impl Default for Accumulator<'_> {
    fn default() -> Self {
        Self::seed()
    }
}

/// Fold the sorted words of `sentence` and return the full accumulator
pub fn find_best(sentence: &str) -> Accumulator<'_> {
    sorted_words(sentence)
        .into_iter()
        .fold(Accumulator::seed(), Accumulator::offer)
}

/// Return the highest-scoring word of `sentence`.
///
/// Ties go to the lexicographically smallest word, and the seed `"a"` is
/// returned when no word scores above 97.
pub fn find_highest(sentence: &str) -> &str {
    find_best(sentence).word
}

/// One word's visit during the fold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoldStep<'a> {
    /// 1-based position in the sorted sequence
    pub position: usize,
    pub word: &'a str,
    pub score: Score,
    /// Whether this word became the new best
    pub replaced: bool,
    /// Best after this step
    pub best: Accumulator<'a>,
}

/// Replay the fold and record every step
pub fn trace(sentence: &str) -> Vec<FoldStep<'_>> {
    let mut best = Accumulator::seed();
    sorted_words(sentence)
        .into_iter()
        .enumerate()
        .map(|(i, word)| {
            let next = best.offer(word);
            let replaced = next != best;
            best = next;
            FoldStep {
                position: i + 1,
                word,
                score: score(word),
                replaced,
                best,
            }
        })
        .collect()
}
