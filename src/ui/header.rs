//! Brand header rendering.
//!
//! The header gains an elevated treatment (brighter frame, shadow rule)
//! once the page scrolls past the threshold.

use ratatui::{
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::lang::strings;

use super::colors;

/// Draws the brand header with the menu toggle and language switcher.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let elevated = app.page.header_elevated();
    let s = strings(app.lang);

    let border_style = if elevated {
        Style::default().fg(colors::PRIMARY)
    } else {
        Style::default().fg(colors::BORDER)
    };
    let rule = if elevated { "━" } else { "─" };

    let line0 = Line::from(Span::styled(
        rule.repeat(area.width as usize),
        border_style,
    ));

    // Menu glyph, brand, language switcher.
    let mut brand_spans = vec![
        Span::styled(format!(" {} ", app.icons.menu()), Style::default().fg(colors::KEY).bold()),
        Span::styled(app.icons.logo(), Style::default().fg(colors::PRIMARY)),
        Span::styled(" EVENT", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", Style::default().fg(colors::MUTED)),
        Span::styled("RENT", Style::default().fg(Color::White).bold()),
    ];
    let used: usize = brand_spans.iter().map(|sp| sp.content.chars().count()).sum();
    let switcher = switcher_spans(app);
    let switcher_width: usize = switcher.iter().map(|sp| sp.content.chars().count()).sum();
    let pad = (area.width as usize).saturating_sub(used + switcher_width);
    brand_spans.push(Span::raw(" ".repeat(pad)));
    brand_spans.extend(switcher);
    let line1 = Line::from(brand_spans);

    let line2 = Line::from(vec![
        Span::raw("   "),
        Span::styled(s.tagline, Style::default().fg(colors::MUTED)),
    ]);

    let line3 = Line::from(Span::styled(
        rule.repeat(area.width as usize),
        border_style,
    ));

    let header = Paragraph::new(vec![line0, line1, line2, line3]);
    frame.render_widget(header, area);
}

/// The ES/EN switcher with the active variant highlighted.
fn switcher_spans(app: &App) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, lang) in [crate::lang::Language::Es, crate::lang::Language::En]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        let style = if lang == app.lang {
            Style::default().fg(colors::PRIMARY).bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        spans.push(Span::styled(lang.tag(), style));
    }
    spans.push(Span::raw(" "));
    spans
}
