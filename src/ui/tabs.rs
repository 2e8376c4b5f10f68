//! Tabs widget rendering.
//!
//! Displays tab headers for switching between the menu views.

use crate::app::App;
use crate::catalog::filter::Tab;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Render the tabs widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Displays the four menu tabs horizontally (Recent, Blocks, Embeds, Saved)
/// and highlights the active one. Searching bypasses tab partitioning, so
/// the bar is dimmed while a search is active.
pub fn render_tabs(app: &App, area: Rect, buf: &mut Buffer) {
    let active_tab = app.active_tab();
    let searching = app.filter.search_active();

    let mut spans = Vec::new();
    for (i, tab) in Tab::ALL.iter().enumerate() {
        let is_active = *tab == active_tab && !searching;
        let style = if is_active {
            Style::default()
                .fg(Color::Yellow)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let tab_text = if is_active {
            format!("▶ {} ◀", tab.label())
        } else {
            format!("  {}  ", tab.label())
        };
        spans.push(Span::styled(tab_text, style));
    }

    if searching {
        spans.push(Span::styled(
            "  (searching all blocks)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let line = Line::from(spans);

    let paragraph = Paragraph::new(line)
        .block(Block::default().title("Tabs").borders(Borders::ALL))
        .alignment(ratatui::layout::Alignment::Center);

    Widget::render(paragraph, area, buf);
}
