//! Text shaping for the results pane
//!
//! Pure functions so the rendered content can be checked without a terminal.

use serde_json::Value;

use crate::api::Source;

/// Raw data as 2-space indented JSON
pub fn format_raw_data(raw_data: &Value) -> String {
    serde_json::to_string_pretty(raw_data).unwrap_or_else(|_| raw_data.to_string())
}

/// Lines of one citation block; the period line is omitted when absent or empty
pub fn source_block(source: &Source) -> Vec<String> {
    let mut lines = vec![
        source.dataset.clone(),
        format!("Region: {}", source.region),
        format!("File: {}", source.file),
    ];
    if let Some(period) = source.display_period() {
        lines.push(format!("Period: {}", period));
    }
    lines.push(source.description.clone());
    lines
}

/// One block per source, in payload order
pub fn source_blocks(sources: &[Source]) -> Vec<Vec<String>> {
    sources.iter().map(source_block).collect()
}

/// Columns between tab stops when a tab is expanded
const TAB_WIDTH: usize = 4;

/// Greedy word wrap that keeps the text as written
///
/// Explicit line breaks, leading indentation, and runs of spaces inside a line
/// are kept; tabs expand to the next tab stop. Only the whitespace at a soft
/// break is dropped. Words longer than `width` are split.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return text.split('\n').map(|p| expand_tabs(p.trim_end_matches('\r'))).collect();
    }

    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let paragraph = expand_tabs(paragraph.trim_end_matches('\r'));
        let mut current: Vec<char> = Vec::new();
        let mut emitted = false;

        for (is_space, run) in runs(&paragraph) {
            if is_space && current.is_empty() && emitted {
                // Whitespace at a soft break
                continue;
            }

            if current.len() + run.len() <= width {
                current.extend(run);
                continue;
            }

            if is_space && !current.is_empty() {
                lines.push(current.drain(..).collect());
                emitted = true;
                continue;
            }

            while current.last().is_some_and(|c| *c == ' ') {
                current.pop();
            }
            if !current.is_empty() {
                lines.push(current.drain(..).collect());
                emitted = true;
            }

            let mut run = run;
            while run.len() > width {
                lines.push(run.drain(..width).collect());
                emitted = true;
            }
            current = run;
        }

        if !current.is_empty() || !emitted {
            lines.push(current.into_iter().collect());
        }
    }

    lines
}

/// Consecutive runs of whitespace and non-whitespace characters
fn runs(text: &str) -> Vec<(bool, Vec<char>)> {
    let mut runs: Vec<(bool, Vec<char>)> = Vec::new();
    for c in text.chars() {
        let is_space = c.is_whitespace();
        match runs.last_mut() {
            Some((space, run)) if *space == is_space => run.push(c),
            _ => runs.push((is_space, vec![c])),
        }
    }
    runs
}

fn expand_tabs(line: &str) -> String {
    let mut expanded = String::with_capacity(line.len());
    let mut column = 0;
    for c in line.chars() {
        if c == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            expanded.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            expanded.push(c);
            column += 1;
        }
    }
    expanded
}

/// Split a line into `width`-character chunks, keeping indentation
pub fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    if width == 0 || chars.len() <= width {
        return vec![line.to_string()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod format_tests;
