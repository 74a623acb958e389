//! Find command - the highest-scoring word of a sentence

use anyhow::{Context, Result};
use std::io::Write;

use crate::core::model::{ResultItem, ResultSet};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::score::find_best;

/// Sentence used when no subcommand is given
pub const DEMO_SENTENCE: &str = "volcano climbing";

/// Build the result set for `find`
pub fn find(sentence: &str) -> ResultSet {
    let best = find_best(sentence);
    log::debug!("best of {:?}: {:?} ({})", sentence, best.word, best.score);

    let mut result_set = ResultSet::new();
    result_set.push(ResultItem::winner(&best));
    result_set
}

/// Run the find command
pub fn run_find<W: Write>(sentence: &str, config: RenderConfig, out: W) -> Result<()> {
    let renderer = Renderer::with_config(config);
    renderer
        .render_to(&find(sentence), out)
        .context("Failed to write result")
}

/// Run the demo invocation
pub fn run_demo<W: Write>(config: RenderConfig, out: W) -> Result<()> {
    run_find(DEMO_SENTENCE, config, out)
}
