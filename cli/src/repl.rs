use anyhow::Result;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::time::Instant;
use textdex_core::{DocId, Index, ScoredDoc};

pub const EXIT_COMMAND: &str = "exit";

#[derive(Serialize)]
pub struct HitOut<'a> {
    pub rank: usize,
    pub doc_id: DocId,
    pub score: f64,
    pub source: &'a str,
}

pub fn hits_out<'a>(index: &'a Index, hits: &[ScoredDoc]) -> Vec<HitOut<'a>> {
    hits.iter()
        .enumerate()
        .map(|(i, h)| HitOut {
            rank: i + 1,
            doc_id: h.doc_id,
            score: h.score,
            source: index.document(h.doc_id).map(|d| d.source_id.as_str()).unwrap_or(""),
        })
        .collect()
}

pub fn print_hits<W: Write>(index: &Index, hits: &[ScoredDoc], top: usize, out: &mut W) -> Result<()> {
    let shown = &hits[..hits.len().min(top)];
    if shown.is_empty() {
        writeln!(out, "No matching documents found.")?;
        return Ok(());
    }
    writeln!(out, "Top {} results:", shown.len())?;
    for hit in hits_out(index, shown) {
        writeln!(out, "[{}] Score: {} | File: {}", hit.rank, hit.score, hit.source)?;
    }
    Ok(())
}

/// Answer one input line: completions for the last word, spelling hints,
/// then the ranked results for the line as typed.
pub fn answer<W: Write>(index: &Index, line: &str, top: usize, out: &mut W) -> Result<()> {
    if let Some(last) = line.split_whitespace().last() {
        let completions = index.autocomplete(last);
        if !completions.is_empty() {
            writeln!(out, "Autocomplete: {}", completions.join(" "))?;
        }
    }

    let correction = index.correct_query(line);
    for c in &correction.corrections {
        writeln!(out, "Did you mean '{}' instead of '{}'?", c.suggestion, c.original)?;
    }
    if correction.is_changed() {
        writeln!(out, "Corrected query: {}", correction.corrected_query)?;
    }

    let start = Instant::now();
    let hits = index.search(line);
    let elapsed = start.elapsed();
    tracing::debug!(query = line, hits = hits.len(), ?elapsed, "search finished");

    writeln!(out)?;
    writeln!(out, "Results found: {}", hits.len())?;
    writeln!(out, "Search time: {} seconds", elapsed.as_secs_f64())?;
    print_hits(index, &hits, top, out)
}

/// Prompt for queries until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(index: &Index, input: R, out: &mut W, top: usize) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "\nEnter search query (or type '{EXIT_COMMAND}' to quit): ")?;
        out.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim() == EXIT_COMMAND {
            break;
        }
        answer(index, &line, top, out)?;
    }
    Ok(())
}
