//! Block menu widget rendering.
//!
//! Displays the filtered block menu with category headers, selection
//! highlighting, and disabled markers.

use crate::app::App;
use crate::catalog::filter::{self, MenuView};
use crate::catalog::types::BlockType;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

/// Render the block menu widget.
///
/// # Arguments
/// * `app` - Application state
/// * `area` - Area to render in
/// * `buf` - Buffer to render to
///
/// # Details
/// Flat views render one line per block. Grouped views interleave category
/// header lines (not selectable) with their member blocks. Use-once blocks
/// already placed in the document carry an "in document" marker and render
/// dimmed. An empty view shows the no-results message.
pub fn render_menu(app: &App, area: Rect, buf: &mut Buffer) {
    let view = app.menu_view();
    let title = format!("Blocks ({})", view.len());

    if view.is_empty() {
        let list = List::new(vec![ListItem::new(Span::styled(
            filter::empty_message(app.active_tab(), app.filter.search_active()),
            Style::default().fg(Color::Gray),
        ))])
        .block(Block::default().title(title).borders(Borders::ALL));
        Widget::render(list, area, buf);
        return;
    }

    let selected_index = app.selected_index.min(view.len().saturating_sub(1));
    let placed = app.placed_names();

    let mut items: Vec<ListItem> = Vec::new();
    let mut selected_line: Option<usize> = None;
    let mut item_idx = 0usize;

    let push_block = |items: &mut Vec<ListItem>,
                          selected_line: &mut Option<usize>,
                          item_idx: &mut usize,
                          block: &BlockType| {
        let is_selected = *item_idx == selected_index;
        let disabled = filter::is_disabled(block, &placed);
        if is_selected {
            *selected_line = Some(items.len());
        }

        let title_style = if disabled {
            Style::default().fg(Color::DarkGray)
        } else if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let mut spans = vec![
            Span::styled(block.title.clone(), title_style),
            Span::styled(
                format!("  ({})", block.name),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if disabled {
            spans.push(Span::styled(
                "  [in document]",
                Style::default().fg(Color::Red),
            ));
        }

        let base_style = if is_selected {
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        items.push(ListItem::new(Line::from(spans)).style(base_style));
        *item_idx += 1;
    };

    match &view {
        MenuView::Empty => unreachable!("empty view handled above"),
        MenuView::Flat(blocks) => {
            for block in blocks {
                push_block(&mut items, &mut selected_line, &mut item_idx, block);
            }
        }
        MenuView::Grouped { groups, ungrouped } => {
            for group in groups {
                items.push(ListItem::new(Line::from(Span::styled(
                    format!("── {} ──", group.category.title),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))));
                for block in &group.items {
                    push_block(&mut items, &mut selected_line, &mut item_idx, block);
                }
            }
            if !ungrouped.is_empty() {
                items.push(ListItem::new(Line::from(Span::styled(
                    "── Other ──",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))));
                for block in ungrouped {
                    push_block(&mut items, &mut selected_line, &mut item_idx, block);
                }
            }
        }
    }

    let mut list_state = ListState::default();
    list_state.select(selected_line);

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        );

    StatefulWidget::render(list, area, buf, &mut list_state);
}
