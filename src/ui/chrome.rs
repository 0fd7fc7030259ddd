use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::UiContext;

pub(crate) fn render_header(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let mut title = ctx.messages.form_title.clone();
    if ctx.dirty {
        title.push_str(" •");
    }
    let header = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

pub(crate) fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let mut status_spans = vec![Span::raw(ctx.status.to_string())];
    if let Some(errors) = ctx.errors
        && !errors.is_empty()
    {
        status_spans.push(Span::styled(
            format!("  • {} issue(s)", errors.issue_count()),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let mut lines = vec![Line::from(status_spans)];
    if let Some(help) = ctx.help {
        lines.push(Line::from(Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let footer = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
