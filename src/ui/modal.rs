//! Product detail modal rendering.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ModalView};
use crate::constants::dialog;
use crate::lang::strings;
use crate::layout::centered_rect;

use super::colors;

/// Draws the product detail panel over the page.
pub fn draw_modal(frame: &mut Frame, app: &App, modal: &ModalView) {
    let area = centered_rect(dialog::MODAL_WIDTH, dialog::MODAL_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(
                modal.title.clone(),
                Style::default().fg(Color::White).bold(),
            ),
            Span::styled(" ", Style::default()),
        ]))
        .title(
            Line::from(vec![
                Span::styled(" ✕ ", Style::default().fg(colors::ERROR).bold()),
            ])
            .alignment(Alignment::Right),
        )
        .padding(Padding::uniform(1));

    let mut content = Vec::new();

    // Product art reference, or nothing when the image failed to load.
    if modal.art_visible {
        content.push(Line::from(Span::styled(
            modal.image.clone(),
            Style::default().fg(colors::MUTED).italic(),
        )));
        content.push(Line::from(""));
    }

    content.push(Line::from(Span::styled(
        modal.description.clone(),
        Style::default().fg(Color::White),
    )));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        strings(app.lang).modal_features.to_string(),
        Style::default().fg(colors::PRIMARY).bold(),
    )));
    for feature in &modal.features {
        content.push(Line::from(vec![
            Span::styled(
                format!(" {} ", app.icons.check()),
                Style::default().fg(colors::SUCCESS),
            ),
            Span::styled(feature.clone(), Style::default().fg(colors::MUTED)),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(
            " cerrar ",
            Style::default().fg(colors::MUTED).add_modifier(Modifier::DIM),
        ),
    ]));

    let widget = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(widget, area);
}
