//! Explain command - replays the fold so ties and the seed are visible

use anyhow::{Context, Result};
use std::io::Write;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::score::{trace, Accumulator};

/// Build the result set for `explain`: one step item per sorted word, then the winner
pub fn explain(sentence: &str) -> ResultSet {
    let steps = trace(sentence);
    let best = steps
        .last()
        .map(|step| step.best)
        .unwrap_or_else(Accumulator::seed);

    let mut result_set = ResultSet::new();
    result_set.extend(steps.iter().map(ResultItem::step));
    result_set.push(ResultItem::winner(&best));
    log::debug!("explain produced {} items", result_set.len());
    result_set
}

/// Run the explain command
pub fn run_explain<W: Write>(sentence: &str, config: RenderConfig, out: W) -> Result<()> {
    let renderer = Renderer::with_config(config);
    renderer
        .render_to(&explain(sentence), out)
        .context("Failed to write explanation")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Kind;
    use crate::core::render::OutputFormat;
    use crate::core::score::find_highest;

    #[test]
    fn test_explain_steps_then_winner() {
        let set = explain("volcano climbing");
        let kinds: Vec<_> = set.items.iter().map(|i| i.kind).collect();
        assert_eq!(kinds, vec![Kind::Step, Kind::Step, Kind::Winner]);
        assert_eq!(set.items[2].word, "climbing");
    }

    #[test]
    fn test_explain_tie_is_not_replaced() {
        let set = explain("ba ab");
        assert_eq!(set.items[0].word, "ab");
        assert_eq!(set.items[0].replaced, Some(true));
        assert_eq!(set.items[1].word, "ba");
        assert_eq!(set.items[1].replaced, Some(false));
        assert_eq!(set.items[2].word, "ab");
    }

    #[test]
    fn test_explain_agrees_with_find() {
        for sentence in ["", "A B", "b  c", "man i need a taxi up to ubud"] {
            let set = explain(sentence);
            let winner = set.items.last().unwrap();
            assert_eq!(winner.word, find_highest(sentence));
        }
    }

    #[test]
    fn test_run_explain_jsonl() {
        let mut buf = Vec::new();
        run_explain("b", RenderConfig::new(OutputFormat::Jsonl), &mut buf).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"kind\":\"step\""));
        assert!(lines[1].contains("\"kind\":\"winner\""));
    }
}
