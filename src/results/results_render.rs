use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::format::{format_raw_data, hard_wrap, source_blocks, wrap_text};
use crate::api::QueryResult;
use crate::app::{App, Focus};
use crate::theme;
use crate::widgets::scrollbar::render_vertical_scrollbar;

const INDENT: &str = "  ";

/// Build every line of the results pane for a content width
///
/// The sources section is rebuilt from the payload each time, so an empty
/// source list shows "No sources cited" rather than an earlier query's sources.
pub fn build_lines(result: &QueryResult, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let body_width = width.saturating_sub(INDENT.len());

    lines.push(section_header("Answer"));
    for line in wrap_text(&result.answer, body_width) {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(line, Style::default().fg(theme::results::ANSWER)),
        ]));
    }

    lines.push(Line::default());
    lines.push(section_header(&format!("Sources ({})", result.sources.len())));

    if result.sources.is_empty() {
        lines.push(Line::from(vec![
            Span::raw(INDENT),
            Span::styled(
                "No sources cited",
                Style::default().fg(theme::results::NO_SOURCES),
            ),
        ]));
    }

    for (i, block) in source_blocks(&result.sources).into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        let last = block.len() - 1;
        for (row, text) in block.into_iter().enumerate() {
            let style = if row == 0 {
                theme::results::DATASET
            } else if row == last {
                Style::default().fg(theme::results::SOURCE_DESCRIPTION)
            } else {
                Style::default().fg(theme::results::SOURCE_DETAIL)
            };
            for wrapped in wrap_text(&text, body_width) {
                lines.push(Line::from(vec![
                    Span::raw(INDENT),
                    Span::styled(wrapped, style),
                ]));
            }
        }
    }

    lines.push(Line::default());
    lines.push(section_header("Raw Data"));
    for json_line in format_raw_data(&result.raw_data).lines() {
        for chunk in hard_wrap(json_line, body_width) {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(chunk, Style::default().fg(theme::results::RAW_DATA)),
            ]));
        }
    }

    lines
}

fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        theme::results::SECTION_HEADER,
    ))
}

pub fn render_pane(app: &mut App, frame: &mut Frame, area: Rect) {
    let Some(result) = app.ui.results() else {
        return;
    };

    let focused = app.focus == Focus::ResultsPane;
    let border_color = if focused {
        theme::results::BORDER_FOCUSED
    } else {
        theme::results::BORDER_UNFOCUSED
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            " Results ",
            Style::default().fg(theme::results::TITLE),
        )))
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    // Leave the right border column for the scrollbar
    let lines = build_lines(result, inner.width.saturating_sub(1) as usize);
    let total_lines = lines.len();

    app.results_scroll.update_bounds(total_lines, inner.height);
    let offset = app.results_scroll.offset;

    let paragraph = Paragraph::new(lines).block(block).scroll((offset, 0));
    frame.render_widget(paragraph, area);

    render_vertical_scrollbar(
        frame,
        area,
        total_lines,
        inner.height as usize,
        offset as usize,
        theme::results::SCROLLBAR,
    );
}

#[cfg(test)]
#[path = "results_render_tests.rs"]
mod results_render_tests;
