//! Nav menu overlay rendering.

use ratatui::{
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;
use crate::constants::dialog;
use crate::layout::centered_rect;
use crate::page::Section;

use super::colors;

/// Draws the nav menu with the focused link highlighted.
///
/// Link rows start two rows below the top edge; the click handler relies
/// on that offset.
pub fn draw_menu(frame: &mut Frame, app: &App) {
    let area = centered_rect(dialog::MENU_WIDTH, dialog::MENU_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled(app.icons.menu(), Style::default().fg(colors::KEY)),
            Span::styled(" EventRent ", Style::default().fg(Color::White).bold()),
        ]));

    let mut content = vec![Line::from("")];
    for (idx, section) in Section::ALL.iter().enumerate() {
        let selected = idx == app.page.menu_selected();
        let style = if selected {
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors::MUTED)
        };
        content.push(Line::from(vec![
            Span::styled(if selected { " ▸ " } else { "   " }.to_string(), style),
            Span::styled(section.label(app.lang).to_string(), style),
        ]));
    }
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("j/k", Style::default().fg(colors::KEY).bold()),
        Span::styled(" navegar  ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ir  ", Style::default().fg(colors::MUTED)),
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(" cerrar", Style::default().fg(colors::MUTED)),
    ]));

    let widget = Paragraph::new(content).block(block);
    frame.render_widget(widget, area);
}
