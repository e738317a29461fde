use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::ExampleQueries;
use crate::theme;

/// Lines of the example list: a header per category, numbered questions below
pub fn build_lines(examples: &ExampleQueries) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut number = 1;

    for (i, group) in examples.groups().iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            group.category.clone(),
            theme::examples::CATEGORY,
        )));
        for query in &group.queries {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  Alt+{} ", number),
                    Style::default().fg(theme::examples::SHORTCUT),
                ),
                Span::styled(query.clone(), Style::default().fg(theme::examples::QUERY)),
            ]));
            number += 1;
        }
    }

    lines
}

pub fn render_panel(examples: &ExampleQueries, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Line::from(Span::styled(
            " Try an example ",
            Style::default().fg(theme::examples::TITLE),
        )))
        .border_style(Style::default().fg(theme::examples::BORDER));

    frame.render_widget(Paragraph::new(build_lines(examples)).block(block), area);
}
