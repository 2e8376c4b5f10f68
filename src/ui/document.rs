//! Document pane rendering.
//!
//! Displays the blocks placed into the working document this session.

use crate::app::App;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Render the document pane.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// One line per placed block, in insertion order. Titles are resolved
/// through the registry; a name the registry no longer knows falls back to
/// the raw block name. Initial attributes carried by the insertion are shown
/// inline when present.
pub fn render_document(app: &App, area: Rect, buf: &mut Buffer) {
    let title = format!("Document ({} blocks)", app.document.len());

    if app.document.is_empty() {
        let list = List::new(vec![ListItem::new(Span::styled(
            "Empty document - press Enter to insert the selected block",
            Style::default().fg(Color::Gray),
        ))])
        .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let items: Vec<ListItem> = app
        .document
        .iter()
        .enumerate()
        .map(|(i, insertion)| {
            let display = app
                .registry
                .get_type(&insertion.name)
                .map(|b| b.title.clone())
                .unwrap_or_else(|| insertion.name.clone());

            let mut spans = vec![
                Span::styled(format!("{:>3}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(display, Style::default().fg(Color::White)),
            ];
            if !insertion.attributes.is_empty() {
                let attrs = serde_json::Value::Object(insertion.attributes.clone()).to_string();
                spans.push(Span::styled(
                    format!("  {}", attrs),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    Widget::render(list, area, buf);
}
