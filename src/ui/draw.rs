//! Rendering for the splash and browser screens.
//!
//! Every frame is rebuilt from scratch from the current app state; there is
//! no retained widget tree to reconcile.

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::{Frame, Terminal};

use crate::permissions::Permission;
use crate::ui::app::{App, Overlay, Screen};

const UNNAMED: &str = "(unnamed)";

/// Draw one frame of the current app state.
pub fn render<B>(terminal: &mut Terminal<B>, app: &App) -> Result<()>
where
    B: Backend,
{
    terminal.draw(|frame| draw_app(frame, app))?;
    Ok(())
}

fn draw_app(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Splash => draw_splash(frame),
        Screen::Browser => draw_browser(frame, app),
    }

    match &app.overlay {
        Overlay::None => {}
        Overlay::PermissionPrompt(permission) => draw_permission_prompt(frame, *permission),
        Overlay::Actions { contact } => draw_actions(frame, &contact.name, &contact.phone_number),
    }
}

fn draw_splash(frame: &mut Frame) {
    let area = centered_rect(40, 4, frame.area());
    let lines = vec![
        Line::from(Span::styled(
            "vibeline",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Android contacts in your terminal",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_browser(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_search_bar(frame, app, chunks[0]);
    draw_contact_list(frame, app, chunks[1]);
    draw_status_line(frame, app, chunks[2]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let search = Paragraph::new(app.search_input.value())
        .block(Block::default().borders(Borders::ALL).title("Search"));
    frame.render_widget(search, area);

    if matches!(app.overlay, Overlay::None) && area.width > 2 {
        let cursor_x = (area.x + 1 + app.search_input.visual_cursor() as u16)
            .min(area.x + area.width.saturating_sub(2));
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_contact_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .binder
        .rows()
        .into_iter()
        .map(|row| {
            let name = if row.name.is_empty() {
                UNNAMED.to_string()
            } else {
                row.name
            };
            ListItem::new(Line::from(vec![
                Span::styled(name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(row.number, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Contacts ({})", app.binder.count())),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.binder.is_empty() {
        state.select(Some(app.selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let status = match &app.notice {
        Some(notice) => Paragraph::new(notice.message.as_str()).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        None => {
            let esc_label = if app.search_input.value().is_empty() {
                "quit"
            } else {
                "clear"
            };
            let hint = format!(
                "{}/{}  type to search | enter: actions | esc: {} | ctrl-c: quit",
                app.binder.count(),
                app.contacts.len(),
                esc_label,
            );
            Paragraph::new(hint).style(Style::default().fg(Color::DarkGray))
        }
    };
    frame.render_widget(status, area);
}

fn draw_permission_prompt(frame: &mut Frame, permission: Permission) {
    let area = centered_rect(46, 6, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(format!("Allow vibeline to {}?", permission)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Allow    "),
            Span::styled("[n]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Deny"),
        ]),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Permission"));
    frame.render_widget(dialog, area);
}

fn draw_actions(frame: &mut Frame, name: &str, number: &str) {
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);

    let display_name = if name.is_empty() { UNNAMED } else { name };
    let lines = vec![
        Line::from(Span::styled(
            display_name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(number.to_string()),
        Line::from(""),
        Line::from(vec![
            Span::styled("[c]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Call    "),
            Span::styled("[m]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Message    "),
            Span::styled("[esc]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Cancel"),
        ]),
    ];
    let dialog = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Contact"));
    frame.render_widget(dialog, area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
