//! Terminal rendering.
//!
//! The screen is a title line, an optional error banner, the lessons
//! table, the expanded-row detail, the paginator and a key hint line.
//! Everything is drawn from a [`RenderContext`]; nothing here mutates
//! application state.

mod table;
mod theme;

pub use table::{checkbox, column_label, header_checkbox, truncate};
pub use theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_ERROR,
    COLOR_HEADER, SPINNER_FRAMES,
};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::view_state::RenderContext;

const HELP_LINE: &str =
    "j/k move · space select · a all · enter expand · 1/2/3 sort · n/p page · +/- size · r reload · q quit";

const DETAIL_HEIGHT: u16 = 3;

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

pub fn render(frame: &mut Frame, ctx: &RenderContext<'_>) {
    let area = frame.area();

    let banner_height = u16::from(ctx.error.is_some());
    let detail_height = if ctx.table.expanded_row().is_some() {
        DETAIL_HEIGHT
    } else {
        0
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(banner_height),
            Constraint::Min(3),
            Constraint::Length(detail_height),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_title(frame, chunks[0], ctx);
    if let Some(message) = &ctx.error {
        render_error_banner(frame, chunks[1], message);
    }
    table::render_table(frame, chunks[2], &ctx.table, ctx.cursor);
    if detail_height > 0 {
        table::render_detail(frame, chunks[3], &ctx.table);
    }
    table::render_paginator(frame, chunks[4], &ctx.table);
    render_help(frame, chunks[5]);
}

fn render_title(frame: &mut Frame, area: Rect, ctx: &RenderContext<'_>) {
    let mut spans = vec![Span::styled(
        truncate(ctx.title, area.width.saturating_sub(4) as usize),
        Style::default()
            .fg(COLOR_ACCENT)
            .add_modifier(Modifier::BOLD),
    )];
    if ctx.table.loading {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            spinner_frame(ctx.tick),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("✗ {}", message),
            Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (esc to dismiss)", Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = truncate(HELP_LINE, area.width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(help, Style::default().fg(COLOR_DIM))),
        area,
    );
}
