//! Help overlay rendering.

use ratatui::{
    layout::Alignment,
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph},
    Frame,
};

use crate::constants::dialog;
use crate::layout::centered_rect;

use super::colors;

/// Draws the help overlay with the keyboard reference.
pub fn draw_help_overlay(frame: &mut Frame) {
    let area = centered_rect(dialog::HELP_WIDTH, dialog::HELP_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("Ayuda / Help ", Style::default().fg(Color::White).bold()),
        ]))
        .padding(Padding::uniform(1));

    let entries: &[(&str, &str)] = &[
        ("j/k, ↑/↓", "scroll the page"),
        ("h/l, ←/→", "move the product carousel"),
        ("1-5", "jump to a section"),
        ("g / G", "top / bottom"),
        ("Enter", "open the product detail"),
        ("f", "cycle the category filter"),
        ("m", "toggle the nav menu"),
        ("Tab", "enter the contact form"),
        ("v", "switch language (ES/EN)"),
        ("c", "copy contact details"),
        ("Esc", "close overlay / leave form"),
        ("?", "toggle this help"),
        ("q, Ctrl+C", "quit"),
    ];

    let mut content = vec![Line::from("")];
    for (key, desc) in entries {
        content.push(Line::from(vec![
            Span::styled(format!("  {key:<12}"), Style::default().fg(colors::KEY).bold()),
            Span::styled(desc.to_string(), Style::default().fg(colors::MUTED)),
        ]));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "press any key to close",
        Style::default().fg(colors::BORDER),
    )));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Left)
        .block(block);

    frame.render_widget(widget, area);
}
