use super::app::{App, Focus};
use crate::libs::form::{FormField, TaskForm};
use crate::libs::messages::Notice;
use crate::libs::task::COLUMN_TITLES;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

const LABEL_WIDTH: usize = 13;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FormField::ALL.len() as u16 + 2), // Form
            Constraint::Length(3),                               // Actions
            Constraint::Length(3),                               // Search
            Constraint::Min(5),                                  // Table
            Constraint::Length(3),                               // Status
        ])
        .split(f.area());

    render_form(f, app, chunks[0]);
    render_actions(f, app, chunks[1]);
    render_search(f, app, chunks[2]);
    render_table(f, app, chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let form = app.manager.form();
    let lines: Vec<Line> = FormField::ALL.iter().map(|field| form_line(form, *field, app.focus == Focus::Form)).collect();

    let title = match form.backing_id() {
        Some(id) => format!("Task #{} ({:?})", id, form.mode()),
        None => format!("Task ({:?})", form.mode()),
    };
    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title).border_style(focus_style(app.focus == Focus::Form)));
    f.render_widget(paragraph, area);
}

fn form_line(form: &TaskForm, field: FormField, focused: bool) -> Line<'static> {
    let enabled = form.is_enabled(field);
    let current = focused && enabled && form.current_field() == field;
    let value = form.value(field);

    let text = match (field.is_choice(), enabled, current) {
        (true, true, _) => format!("< {} >", value),
        (false, _, true) => format!("{}▏", value),
        _ => value.to_string(),
    };
    let value_style = if current {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        Span::styled(format!("{:<width$}", field.label(), width = LABEL_WIDTH), Style::default().fg(Color::Cyan)),
        Span::styled(text, value_style),
    ])
}

fn render_actions(f: &mut Frame, app: &App, area: Rect) {
    let form = app.manager.form();
    let idle = !form.fields_enabled();
    let actions = [
        ("n", "New", idle),
        ("e", "Edit", idle),
        ("Esc", "Cancel", form.cancel_enabled()),
        ("Ctrl+S", "Save", form.save_enabled()),
        ("d", "Delete", idle),
        ("/", "Search", idle),
        ("q", "Quit", idle),
    ];

    let mut spans = Vec::new();
    for (key, label, enabled) in actions {
        let style = if enabled { Style::default().fg(Color::Green) } else { Style::default().fg(Color::DarkGray) };
        spans.push(Span::styled(format!("[{}] {}", key, label), style));
        spans.push(Span::raw("  "));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Actions")), area);
}

fn render_search(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let text = if focused { format!("{}▏", app.search_input) } else { app.manager.table().query().to_string() };

    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("Search").border_style(focus_style(focused)));
    f.render_widget(paragraph, area);
}

fn render_table(f: &mut Frame, app: &App, area: Rect) {
    let table = app.manager.table();
    let selected = table.selected_index();

    let mut state = TableState::default();
    let mut rows = Vec::new();
    for (pos, (index, task)) in table.visible_rows().enumerate() {
        if Some(index) == selected {
            state.select(Some(pos));
        }
        rows.push(Row::new(task.cells().into_iter().map(Cell::from).collect::<Vec<_>>()));
    }

    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(20),
        Constraint::Percentage(22),
        Constraint::Length(9),
        Constraint::Length(12),
        Constraint::Length(11),
        Constraint::Percentage(20),
    ];

    let title = format!("Tasks ({}/{})", table.visible_count(), table.len());
    let widget = Table::new(rows, widths)
        .header(Row::new(COLUMN_TITLES.to_vec()).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)).bottom_margin(1))
        .block(Block::default().borders(Borders::ALL).title(title).border_style(focus_style(app.focus == Focus::Table)))
        .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
        .highlight_symbol(">> ");

    f.render_stateful_widget(widget, area, &mut state);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.notice {
        Some(notice @ Notice::Success(_)) => (notice.to_string(), Style::default().fg(Color::Green)),
        Some(notice @ Notice::Info(_)) => (notice.to_string(), Style::default()),
        Some(notice @ Notice::Warning(_)) => (notice.to_string(), Style::default().fg(Color::Yellow)),
        Some(notice @ Notice::Error(_)) => (notice.to_string(), Style::default().fg(Color::Red)),
        None => (String::new(), Style::default()),
    };

    f.render_widget(Paragraph::new(text).style(style).block(Block::default().borders(Borders::ALL).title("Status")), area);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}
