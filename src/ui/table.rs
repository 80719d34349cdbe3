//! Lessons table, expanded-row detail and paginator footer.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::{SortDirection, SortField};
use crate::view_state::{HeaderCheckbox, RowView, TableViewState};

use super::theme::{
    COLOR_ACCENT, COLOR_ACTIVE, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_DIM, COLOR_HEADER,
};

const CHECKBOX_WIDTH: u16 = 3;
const SEQ_WIDTH: u16 = 4;
const DURATION_WIDTH: u16 = 9;

pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn header_checkbox(state: HeaderCheckbox) -> &'static str {
    match state {
        HeaderCheckbox::Unchecked => "[ ]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Checked => "[x]",
    }
}

/// Column label with a sort arrow when it is the active column.
pub fn column_label(field: SortField, active: SortField, direction: SortDirection) -> String {
    if field != active {
        return field.label().to_string();
    }
    let arrow = match direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    };
    format!("{} {}", field.label(), arrow)
}

/// Truncate to `max_width` display columns, adding "…" if needed.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}

fn header_row(state: &TableViewState<'_>) -> Row<'static> {
    let cell = |field: SortField| {
        let style = if field == state.sort_field {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        Cell::from(column_label(field, state.sort_field, state.sort_direction)).style(style)
    };

    Row::new(vec![
        Cell::from(header_checkbox(state.header_checkbox())),
        cell(SortField::SeqNo),
        cell(SortField::Description),
        cell(SortField::Duration),
    ])
}

fn lesson_row(row: &RowView<'_>, description_width: usize) -> Row<'static> {
    let check_style = if row.selected {
        Style::default().fg(COLOR_ACTIVE)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    let marker = if row.expanded { "▾ " } else { "" };
    let description = truncate(
        &format!("{}{}", marker, row.lesson.description),
        description_width,
    );

    Row::new(vec![
        Cell::from(checkbox(row.selected)).style(check_style),
        Cell::from(row.lesson.seq_no.to_string()),
        Cell::from(description),
        Cell::from(row.lesson.duration.clone()),
    ])
}

/// Render the rows. `cursor` highlights one row.
pub fn render_table(frame: &mut Frame, area: Rect, state: &TableViewState<'_>, cursor: usize) {
    let block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));

    if state.is_empty() {
        let text = if state.loading {
            "Loading lessons…"
        } else {
            "No lessons on this page."
        };
        let placeholder = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(COLOR_DIM))))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    }

    let fixed = (CHECKBOX_WIDTH + SEQ_WIDTH + DURATION_WIDTH + 3) as usize;
    let description_width = (area.width as usize).saturating_sub(fixed).max(1);

    let rows: Vec<Row> = state
        .rows
        .iter()
        .map(|row| lesson_row(row, description_width))
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(CHECKBOX_WIDTH),
            Constraint::Length(SEQ_WIDTH),
            Constraint::Min(10),
            Constraint::Length(DURATION_WIDTH),
        ],
    )
    .header(header_row(state).style(Style::default().add_modifier(Modifier::UNDERLINED)))
    .block(block)
    .row_highlight_style(Style::default().bg(COLOR_CURSOR_BG));

    let mut table_state = TableState::default().with_selected(Some(cursor.min(state.rows.len() - 1)));
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Detail panel for the expanded row, if any.
pub fn render_detail(frame: &mut Frame, area: Rect, state: &TableViewState<'_>) {
    let Some(row) = state.expanded_row() else {
        return;
    };
    let lesson = row.lesson;
    let lines = vec![
        Line::from(Span::styled(
            lesson.description.clone(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Lesson {} · {} · id {}", lesson.seq_no, lesson.duration, lesson.id),
            Style::default().fg(COLOR_DIM),
        )),
    ];
    let detail = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::LEFT).border_style(Style::default().fg(COLOR_BORDER)));
    frame.render_widget(detail, area);
}

/// Paginator footer: range, page, size and selection count.
pub fn render_paginator(frame: &mut Frame, area: Rect, state: &TableViewState<'_>) {
    let paginator = &state.paginator;
    let mut spans = vec![
        Span::raw(paginator.range_label()),
        Span::styled("  ·  ", Style::default().fg(COLOR_DIM)),
        Span::raw(paginator.page_label()),
        Span::styled("  ·  ", Style::default().fg(COLOR_DIM)),
        Span::raw(format!("{} per page", paginator.page_size)),
    ];
    if state.selected_count > 0 {
        spans.push(Span::styled("  ·  ", Style::default().fg(COLOR_DIM)));
        spans.push(Span::styled(
            format!("{} selected", state.selected_count),
            Style::default().fg(COLOR_ACTIVE),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
