use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use textwrap::wrap;
use unicode_width::UnicodeWidthStr;

use crate::app::Messages;
use crate::domain::{FieldAttr, FieldEntry};
use crate::form::FormState;

use super::UiContext;

pub(crate) fn render_rows(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &mut FormState,
    ctx: &UiContext<'_>,
) {
    let block = Block::default().title("Fields").borders(Borders::ALL);

    if state.is_empty() {
        let placeholder = Paragraph::new("No fields. Ctrl+N adds one.").block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    adjust_scroll_offset(state, area.height);
    let wrap_width = area.width.saturating_sub(6).max(8) as usize;

    let mut items = Vec::with_capacity(state.len());
    let mut heights = Vec::with_capacity(state.len());
    let mut cursor_column = None;
    for (idx, entry) in state.entries.iter().enumerate() {
        let focus = (idx == state.row).then_some(state.column);
        let rendered = build_row_line(entry, focus, ctx.messages);
        if idx == state.row {
            cursor_column = rendered.cursor_column;
        }
        let mut lines = vec![rendered.line];
        if let Some(errors) = ctx.errors {
            for issue in errors.issues_for(idx) {
                let message =
                    format!("✗ {}: {}", issue.attr.key(), ctx.messages.for_attr(issue.attr));
                for segment in wrap(&message, wrap_width) {
                    lines.push(Line::from(Span::styled(
                        format!("    {segment}"),
                        Style::default().fg(Color::Red),
                    )));
                }
            }
        }
        heights.push(lines.len());
        items.push(ListItem::new(lines));
    }

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("» ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.row));
    *list_state.offset_mut() = state.scroll_offset;
    frame.render_stateful_widget(list, area, &mut list_state);

    if let Some(column) = cursor_column
        && state.row >= state.scroll_offset
    {
        let lines_before: usize = heights[state.scroll_offset..state.row].iter().sum();
        let cursor_y = area.y.saturating_add(1).saturating_add(lines_before as u16);
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(2)
            .saturating_add(column);
        if cursor_y < area.y.saturating_add(area.height.saturating_sub(1)) {
            frame.set_cursor_position((cursor_x, cursor_y));
        }
    }
}

fn adjust_scroll_offset(state: &mut FormState, height: u16) {
    let window = height.saturating_sub(2) as usize;
    if window == 0 {
        state.scroll_offset = 0;
        return;
    }
    if state.row < state.scroll_offset {
        state.scroll_offset = state.row;
    } else if state.row >= state.scroll_offset + window {
        state.scroll_offset = state.row + 1 - window;
    }
}

struct RowRender {
    line: Line<'static>,
    /// Display-width offset of the focused text cell's insertion point,
    /// relative to the row start. `None` when the type cell is focused.
    cursor_column: Option<u16>,
}

fn build_row_line(entry: &FieldEntry, focus: Option<FieldAttr>, messages: &Messages) -> RowRender {
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut width = 0usize;
    let mut cursor_column = None;

    fn push(spans: &mut Vec<Span<'static>>, width: &mut usize, span: Span<'static>) {
        *width += UnicodeWidthStr::width(span.content.as_ref());
        spans.push(span);
    }

    for attr in FieldAttr::ALL {
        let focused = focus == Some(attr);
        let bracket_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let (open, close) = if attr == FieldAttr::Type {
            ("‹", "›")
        } else {
            ("[", "]")
        };

        push(&mut spans, &mut width, Span::styled(open, bracket_style));
        let raw = entry.attr(attr);
        if raw.is_empty() && attr != FieldAttr::Type {
            let placeholder = match attr {
                FieldAttr::Name => messages.name_placeholder.clone(),
                _ => messages.value_placeholder.clone(),
            };
            if focused {
                cursor_column = Some(width as u16);
            }
            push(
                &mut spans,
                &mut width,
                Span::styled(
                    placeholder,
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
            );
        } else {
            let content_style = if focused {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            push(
                &mut spans,
                &mut width,
                Span::styled(raw.to_string(), content_style),
            );
            if focused && attr != FieldAttr::Type {
                cursor_column = Some(width as u16);
            }
        }
        push(&mut spans, &mut width, Span::styled(close, bracket_style));
        if attr != FieldAttr::Value {
            push(&mut spans, &mut width, Span::raw("  "));
        }
    }

    RowRender {
        line: Line::from(spans),
        cursor_column,
    }
}
