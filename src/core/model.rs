//! Unified Result Model
//!
//! Every command maps its output to this model before rendering.

use serde::{Deserialize, Serialize};

use crate::core::score::{Accumulator, FoldStep, Score};

/// The kind of result item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Winner,
    Step,
}

/// Best (score, word) pair carried after a fold step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Best {
    pub word: String,
    pub score: Score,
}

impl From<&Accumulator<'_>> for Best {
    fn from(acc: &Accumulator<'_>) -> Self {
        Self {
            word: acc.word.to_string(),
            score: acc.score,
        }
    }
}

/// The unified result item that all commands produce
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultItem {
    /// The kind of this result
    pub kind: Kind,

    pub word: String,

    pub score: Score,

    /// 1-based position in the sorted word sequence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Whether the word replaced the running best
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaced: Option<bool>,

    /// Running best after this step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<Best>,

    /// True when no word beat the seed and the seed word was returned
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub seed: bool,
}

impl ResultItem {
    /// Create a winner result from the final accumulator
    pub fn winner(acc: &Accumulator<'_>) -> Self {
        Self {
            kind: Kind::Winner,
            word: acc.word.to_string(),
            score: acc.score,
            position: None,
            replaced: None,
            best: None,
            seed: acc.is_seed(),
        }
    }

    /// Create a step result from one fold step
    pub fn step(step: &FoldStep<'_>) -> Self {
        Self {
            kind: Kind::Step,
            word: step.word.to_string(),
            score: step.score,
            position: Some(step.position),
            replaced: Some(step.replaced),
            best: Some(Best::from(&step.best)),
            seed: false,
        }
    }
}

/// Result set containing multiple result items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub items: Vec<ResultItem>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: ResultItem) {
        self.items.push(item);
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = ResultItem>) {
        self.items.extend(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for ResultSet {
    type Item = ResultItem;
    type IntoIter = std::vec::IntoIter<ResultItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<ResultItem> for ResultSet {
    fn from_iter<T: IntoIterator<Item = ResultItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
