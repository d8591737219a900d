//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::lang::strings;

use super::colors;

/// Draws the commands bar showing available actions for the current mode.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = commands_for_mode(app);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available in the current mode.
fn commands_for_mode(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.modal.is_some() {
        return vec![("Esc", "cerrar"), ("q", "salir")];
    }
    if app.page.menu_open() {
        return vec![("j/k", "navegar"), ("Enter", "ir"), ("Esc", "cerrar")];
    }
    if app.in_form_input() {
        return vec![
            ("Tab", "campo"),
            ("←/→", "opción"),
            ("Enter", "siguiente/enviar"),
            ("Esc", "salir del formulario"),
        ];
    }
    vec![
        ("j/k", "scroll"),
        ("h/l", "productos"),
        ("Enter", "detalle"),
        ("f", "filtro"),
        ("m", "menú"),
        ("Tab", "formulario"),
        ("v", "ES/EN"),
        ("?", "ayuda"),
        ("q", "salir"),
    ]
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else if app.form.is_submitting() {
        (
            format!(" {} ", strings(app.lang).submitting),
            Style::default().fg(colors::WARNING),
        )
    } else {
        (
            format!(" EventRent · {}", app.lang),
            Style::default().fg(colors::MUTED),
        )
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}
