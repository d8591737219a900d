//! Scrolled page rendering.
//!
//! The whole section stack renders into one line buffer which the
//! paragraph scrolls; vertical geometry comes from `layout`, so drawing
//! and mouse hit-testing can never disagree.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::form::{CounterLevel, FieldId, FormFocus, Validity};
use crate::lang::strings;
use crate::layout::{self, Block, BlockId, PageLayout};
use crate::page::Section;

use super::colors;

/// Block cursor character for input fields.
pub(crate) const BLOCK_CURSOR: &str = "█";

/// Input field prompt indicator.
pub(crate) const INPUT_INDICATOR: &str = "› ";

/// Draws the scrolled page content.
pub fn draw_page(frame: &mut Frame, area: Rect, app: &App) {
    let layout = app.layout();
    let lines = build_lines(app, &layout, area.width);
    let paragraph = Paragraph::new(lines).scroll((app.page.scroll_rows(), 0));
    frame.render_widget(paragraph, area);
}

/// Builds one line per page row, block by block.
fn build_lines(app: &App, layout: &PageLayout, width: u16) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::with_capacity(layout.total_rows() as usize);

    for block in layout.blocks() {
        // Gap rows between blocks.
        while lines.len() < block.top_row as usize {
            lines.push(Line::default());
        }

        let mut block_lines = render_block(app, block, width);
        debug_assert_eq!(block_lines.len(), block.rows as usize);
        block_lines.resize(block.rows as usize, Line::default());

        if is_reveal_target(block.id) && !app.is_revealed(block.id) {
            // Not yet scrolled into view: render faded.
            block_lines = block_lines.into_iter().map(dim_line).collect();
        }
        lines.extend(block_lines);
    }

    while lines.len() < layout.total_rows() as usize {
        lines.push(Line::default());
    }
    lines
}

fn is_reveal_target(id: BlockId) -> bool {
    matches!(
        id,
        BlockId::ServiceCard(_)
            | BlockId::CarouselCards
            | BlockId::TestimonialCard(_)
            | BlockId::ContactItem(_)
    )
}

fn dim_line(line: Line<'static>) -> Line<'static> {
    let spans = line
        .spans
        .into_iter()
        .map(|s| {
            let style = s.style.add_modifier(Modifier::DIM);
            Span::styled(s.content, style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn render_block(app: &App, block: &Block, width: u16) -> Vec<Line<'static>> {
    match block.id {
        BlockId::Hero => hero_lines(app, width),
        BlockId::Heading(section) => heading_lines(app, section),
        BlockId::ServiceCard(i) => service_lines(app, i),
        BlockId::FilterBar => filter_bar_lines(app),
        BlockId::CarouselCards => carousel_lines(app),
        BlockId::CarouselControls => vec![controls_line(app, width)],
        BlockId::TestimonialCard(i) => testimonial_lines(app, i),
        BlockId::ContactItem(i) => contact_item_lines(app, i),
        BlockId::FormField(id) => field_lines(app, id, block.rows),
        BlockId::FormSubmit => submit_lines(app),
        BlockId::FormBanner => banner_lines(app),
        BlockId::Footer => footer_lines(app, width),
    }
}

fn margin() -> Span<'static> {
    Span::raw(" ".repeat(layout::CONTENT_MARGIN_COLS as usize))
}

/// Truncates or pads to an exact character width.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

// --- Hero ---

fn hero_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    let s = strings(app.lang);
    let art: String = "░▒▓".repeat((width as usize / 3).max(1));
    vec![
        Line::default(),
        Line::from(vec![
            margin(),
            Span::styled(
                s.hero_title.to_string(),
                Style::default().fg(colors::PRIMARY).bold(),
            ),
        ]),
        Line::default(),
        Line::from(vec![
            margin(),
            Span::styled(s.hero_subtitle.to_string(), Style::default().fg(colors::MUTED)),
        ]),
        Line::default(),
        Line::default(),
        Line::from(vec![
            margin(),
            Span::styled(
                format!("[ {} ]", s.hero_cta),
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
                    .bold(),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(
            art.chars().take(width as usize).collect::<String>(),
            Style::default().fg(colors::BORDER).add_modifier(Modifier::DIM),
        )),
        Line::default(),
    ]
}

// --- Section headings ---

fn heading_lines(app: &App, section: Section) -> Vec<Line<'static>> {
    let s = strings(app.lang);
    let text = match section {
        Section::Services => s.services_heading,
        Section::Products => s.products_heading,
        Section::Testimonials => s.testimonials_heading,
        Section::Contact => s.contact_heading,
        Section::Hero => "",
    };
    vec![
        Line::from(vec![
            margin(),
            Span::styled(app.icons.logo(), Style::default().fg(colors::ACCENT)),
            Span::raw(" "),
            Span::styled(text.to_string(), Style::default().fg(colors::PRIMARY).bold()),
        ]),
        Line::default(),
    ]
}

// --- Services ---

fn service_lines(app: &App, idx: usize) -> Vec<Line<'static>> {
    let (title, desc) = strings(app.lang).services[idx];
    vec![
        Line::from(vec![
            margin(),
            Span::styled(app.icons.bullet(), Style::default().fg(colors::ACCENT)),
            Span::raw(" "),
            Span::styled(title.to_string(), Style::default().fg(Color::White).bold()),
        ]),
        Line::from(vec![
            margin(),
            Span::raw("  "),
            Span::styled(desc.to_string(), Style::default().fg(colors::MUTED)),
        ]),
        Line::from(vec![
            margin(),
            Span::styled(
                "─".repeat(32),
                Style::default().fg(colors::BORDER).add_modifier(Modifier::DIM),
            ),
        ]),
        Line::default(),
    ]
}

// --- Products: filter bar, cards, controls ---

fn filter_bar_lines(app: &App) -> Vec<Line<'static>> {
    let mut spans: Vec<Span> = vec![margin()];
    for (i, (filter, _, _)) in layout::filter_spans(app.lang).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::BORDER)));
        }
        let style = if filter == app.carousel.filter() {
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        spans.push(Span::styled(filter.label(app.lang).to_string(), style));
    }
    vec![Line::from(spans), Line::default()]
}

fn carousel_lines(app: &App) -> Vec<Line<'static>> {
    let rows = crate::constants::carousel::CARD_ROWS as usize;
    if app.carousel.item_count() == 0 {
        return empty_category_lines(app, rows);
    }

    let card_w = layout::card_cols() as usize;
    let gap = (layout::card_pitch_cols() - layout::card_cols()) as usize;
    let window: Vec<usize> = app.carousel.visible_window().to_vec();

    (0..rows)
        .map(|row| {
            let mut spans: Vec<Span> = vec![margin()];
            for (slot, catalog_idx) in window.iter().enumerate() {
                if slot > 0 {
                    spans.push(Span::raw(" ".repeat(gap)));
                }
                spans.extend(card_row(app, *catalog_idx, row, card_w));
            }
            Line::from(spans)
        })
        .collect()
}

/// One row of one product card.
fn card_row(app: &App, catalog_idx: usize, row: usize, card_w: usize) -> Vec<Span<'static>> {
    let Some(product) = app.catalog.get(catalog_idx) else {
        return vec![Span::raw(" ".repeat(card_w))];
    };
    let inner = card_w - 2;
    let border = Style::default().fg(colors::BORDER);

    match row {
        0 => vec![Span::styled(
            format!("╭{}╮", "─".repeat(inner)),
            border,
        )],
        6 => vec![Span::styled(
            format!("╰{}╯", "─".repeat(inner)),
            border,
        )],
        1 => framed(
            fit(&product.title, inner - 2),
            Style::default().fg(colors::PRIMARY).bold(),
        ),
        2 => {
            let (text, style) = if app.catalog.art_visible(catalog_idx) {
                (
                    product.image.clone(),
                    Style::default().fg(colors::MUTED).italic(),
                )
            } else {
                // Broken art is hidden, not drawn.
                (String::new(), Style::default())
            };
            framed(fit(&text, inner - 2), style)
        }
        3 => framed(
            fit(&product.description, inner - 2),
            Style::default().fg(Color::White),
        ),
        4 => framed(fit("", inner - 2), Style::default()),
        5 => framed(
            fit(product.category.label(app.lang), inner - 2),
            Style::default().fg(colors::SECONDARY),
        ),
        _ => vec![Span::raw(" ".repeat(card_w))],
    }
}

fn framed(content: String, style: Style) -> Vec<Span<'static>> {
    let border = Style::default().fg(colors::BORDER);
    vec![
        Span::styled("│ ", border),
        Span::styled(content, style),
        Span::styled(" │", border),
    ]
}

fn empty_category_lines(app: &App, rows: usize) -> Vec<Line<'static>> {
    let s = strings(app.lang);
    let mut lines = vec![Line::default(); rows];
    lines[2] = Line::from(vec![
        margin(),
        Span::styled(
            s.empty_category_title.to_string(),
            Style::default().fg(colors::PRIMARY).bold(),
        ),
    ]);
    lines[4] = Line::from(vec![
        margin(),
        Span::styled(s.empty_category_hint.to_string(), Style::default().fg(colors::MUTED)),
    ]);
    lines
}

/// Prev/next arrows and the three indicator segments, laid out to match
/// `layout::controls_hit`.
fn controls_line(app: &App, width: u16) -> Line<'static> {
    let at_start = app.carousel.current_index() == 0;
    let at_end = app.carousel.current_index() >= app.carousel.max_index();
    let active = app.carousel.active_segment();

    let arrow = |glyph: &str, dimmed: bool| {
        let style = Style::default().fg(colors::KEY).bold();
        // Half opacity at the bound, like the site controls.
        let style = if dimmed {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        };
        Span::styled(glyph.to_string(), style)
    };

    let mid = (width / 2) as usize;
    let mut spans: Vec<Span> = Vec::new();
    spans.push(Span::raw("  "));
    spans.push(arrow(app.icons.prev(), at_start));
    // Pad from column 3 to the first dot at mid-4.
    spans.push(Span::raw(" ".repeat(mid.saturating_sub(4 + 3))));
    for seg in 0..crate::constants::carousel::INDICATOR_SEGMENTS {
        if seg > 0 {
            spans.push(Span::raw("   "));
        }
        let (glyph, style) = if seg == active {
            (
                app.icons.dot_active(),
                Style::default().fg(colors::PRIMARY),
            )
        } else {
            (
                app.icons.dot_inactive(),
                Style::default().fg(colors::MUTED),
            )
        };
        spans.push(Span::styled(glyph.to_string(), style));
    }
    // Pad from mid+5 to the next arrow at width-3.
    spans.push(Span::raw(" ".repeat((width as usize).saturating_sub(mid + 5 + 3))));
    spans.push(arrow(app.icons.next(), at_end));
    Line::from(spans)
}

// --- Testimonials ---

fn testimonial_lines(app: &App, idx: usize) -> Vec<Line<'static>> {
    let (quote, author) = strings(app.lang).testimonials[idx];
    vec![
        Line::from(vec![
            margin(),
            Span::styled(
                app.icons.star().repeat(5),
                Style::default().fg(colors::WARNING),
            ),
        ]),
        Line::from(vec![
            margin(),
            Span::styled(
                format!("\u{201c}{quote}\u{201d}"),
                Style::default().fg(Color::White).italic(),
            ),
        ]),
        Line::from(vec![
            margin(),
            Span::raw("  "),
            Span::styled(format!("— {author}"), Style::default().fg(colors::MUTED)),
        ]),
        Line::default(),
    ]
}

// --- Contact ---

fn contact_item_lines(app: &App, idx: usize) -> Vec<Line<'static>> {
    let (label, value) = strings(app.lang).contact_items[idx];
    let icon = match idx {
        0 => app.icons.email(),
        1 => app.icons.phone(),
        _ => app.icons.pin(),
    };
    vec![
        Line::from(vec![
            margin(),
            Span::styled(icon.to_string(), Style::default().fg(colors::ACCENT)),
            Span::raw(" "),
            Span::styled(format!("{label}: "), Style::default().fg(Color::White).bold()),
            Span::styled(value.to_string(), Style::default().fg(colors::MUTED)),
        ]),
        Line::default(),
    ]
}

// --- Form ---

fn validity_style(validity: Validity) -> Style {
    match validity {
        Validity::Valid => Style::default().fg(colors::SUCCESS),
        Validity::Invalid => Style::default().fg(colors::ERROR),
        Validity::Empty => Style::default().fg(colors::BORDER),
    }
}

fn field_lines(app: &App, id: FieldId, rows: u16) -> Vec<Line<'static>> {
    let s = strings(app.lang);
    let focused = app.form.focus == Some(FormFocus::Field(id));
    let (validity, error) = app.form.visual(id, app.lang);

    let mut label_spans = vec![
        margin(),
        Span::styled(
            if focused { "▸ " } else { "  " }.to_string(),
            Style::default().fg(colors::KEY),
        ),
        Span::styled(
            id.label(app.lang).to_string(),
            Style::default().fg(Color::White).bold(),
        ),
    ];
    if validity == Validity::Valid {
        label_spans.push(Span::raw(" "));
        label_spans.push(Span::styled(
            app.icons.check().to_string(),
            Style::default().fg(colors::SUCCESS),
        ));
    }
    let mut lines = vec![Line::from(label_spans)];

    match id {
        FieldId::EventType => {
            let value = match app.form.event_type_selected() {
                Some(i) => s.event_types[i].to_string(),
                None => "—".to_string(),
            };
            let style = match app.form.event_type_selected() {
                Some(_) => Style::default().fg(Color::White),
                None => Style::default().fg(colors::MUTED),
            };
            lines.push(Line::from(vec![
                margin(),
                Span::styled(
                    format!("  {INPUT_INDICATOR}"),
                    validity_style(validity),
                ),
                Span::styled(format!("{} ", app.icons.prev()), Style::default().fg(colors::KEY)),
                Span::styled(value, style),
                Span::styled(format!(" {}", app.icons.next()), Style::default().fg(colors::KEY)),
            ]));
        }
        FieldId::Message => {
            // Two input rows, then the live counter.
            let value = app.form.value(id);
            let row_width = 60usize;
            let chars: Vec<char> = value.chars().collect();
            let tail = chars.len().saturating_sub(row_width * 2);
            let visible: String = chars[tail..].iter().collect();
            let (first, second) = if visible.chars().count() > row_width {
                let split: String = visible.chars().take(row_width).collect();
                let rest: String = visible.chars().skip(row_width).collect();
                (split, rest)
            } else {
                (visible, String::new())
            };
            for (i, part) in [first, second].into_iter().enumerate() {
                let mut spans = vec![
                    margin(),
                    Span::styled(
                        format!("  {INPUT_INDICATOR}"),
                        validity_style(validity),
                    ),
                    Span::styled(part, Style::default().fg(Color::White)),
                ];
                if focused && i == 1 {
                    spans.push(Span::styled(
                        BLOCK_CURSOR.to_string(),
                        Style::default()
                            .fg(colors::PRIMARY)
                            .add_modifier(Modifier::SLOW_BLINK),
                    ));
                }
                lines.push(Line::from(spans));
            }

            let counter_style = match app.form.counter_level() {
                CounterLevel::Normal => Style::default().fg(colors::MUTED),
                CounterLevel::Warning => Style::default().fg(colors::WARNING),
                CounterLevel::Danger => Style::default().fg(colors::ERROR),
            };
            lines.push(Line::from(vec![
                margin(),
                Span::raw("  "),
                Span::styled(app.form.counter_text(), counter_style),
            ]));
        }
        _ => {
            let mut spans = vec![
                margin(),
                Span::styled(
                    format!("  {INPUT_INDICATOR}"),
                    validity_style(validity),
                ),
                Span::styled(
                    app.form.value(id).to_string(),
                    Style::default().fg(Color::White),
                ),
            ];
            if focused {
                spans.push(Span::styled(
                    BLOCK_CURSOR.to_string(),
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    if let Some(msg) = error {
        lines.push(Line::from(vec![
            margin(),
            Span::raw("  "),
            Span::styled(msg, Style::default().fg(colors::ERROR)),
        ]));
    }

    lines.resize(rows as usize, Line::default());
    lines
}

fn submit_lines(app: &App) -> Vec<Line<'static>> {
    let s = strings(app.lang);
    let focused = app.form.focus == Some(FormFocus::Submit);
    let (label, style) = if app.form.is_submitting() {
        // Control is disabled for the simulated round-trip.
        (
            s.submitting,
            Style::default().fg(colors::MUTED).add_modifier(Modifier::DIM),
        )
    } else if focused {
        (
            s.submit,
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .bold(),
        )
    } else {
        (s.submit, Style::default().fg(colors::PRIMARY).bold())
    };
    vec![
        Line::from(vec![
            margin(),
            Span::raw("  "),
            Span::styled(format!("[ {label} ]"), style),
        ]),
        Line::default(),
    ]
}

fn banner_lines(app: &App) -> Vec<Line<'static>> {
    let Some(banner) = app.form.banner() else {
        return vec![Line::default(), Line::default()];
    };
    let style = if banner.is_error {
        Style::default().fg(colors::ERROR).bold()
    } else {
        Style::default().fg(colors::SUCCESS).bold()
    };
    vec![
        Line::from(vec![
            margin(),
            Span::raw("  "),
            Span::styled(banner.text.clone(), style),
        ]),
        Line::default(),
    ]
}

// --- Footer ---

fn footer_lines(app: &App, width: u16) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(colors::BORDER).add_modifier(Modifier::DIM),
        )),
        Line::from(vec![
            margin(),
            Span::styled(
                format!(
                    "© 2025 EventRent {} v{}",
                    app.icons.logo(),
                    env!("CARGO_PKG_VERSION")
                ),
                Style::default().fg(colors::MUTED),
            ),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::lang::Language;
    use std::time::Instant;

    fn app() -> App {
        App::new(
            Language::Es,
            Catalog::load(None).unwrap(),
            150,
            40,
            Instant::now(),
        )
    }

    #[test]
    fn test_line_count_matches_the_layout() {
        let a = app();
        let layout = a.layout();
        let lines = build_lines(&a, &layout, 150);
        assert_eq!(lines.len(), layout.total_rows() as usize);
    }

    #[test]
    fn test_every_block_renders_its_exact_height() {
        let a = app();
        let layout = a.layout();
        for block in layout.blocks() {
            let lines = render_block(&a, block, 150);
            assert_eq!(
                lines.len(),
                block.rows as usize,
                "height mismatch for {:?}",
                block.id
            );
        }
    }

    #[test]
    fn test_fit_pads_and_truncates() {
        assert_eq!(fit("abc", 5), "abc  ");
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("año", 3), "año"); // Char-based, not byte-based
    }

    #[test]
    fn test_visible_card_rows_align() {
        let a = app();
        let lines = carousel_lines(&a);
        assert_eq!(lines.len(), crate::constants::carousel::CARD_ROWS as usize);
        // 4 visible cards at the desktop breakpoint.
        assert_eq!(a.carousel.visible_cards(), 4);
    }

    #[test]
    fn test_cursor_is_visible() {
        assert_eq!(BLOCK_CURSOR, "█");
    }

    #[test]
    fn test_counter_renders_in_message_field() {
        let a = app();
        let lines = field_lines(&a, FieldId::Message, 4);
        let rendered: Vec<String> = lines
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.to_string())
                    .collect::<String>()
            })
            .collect();
        assert!(rendered.iter().any(|l| l.contains("0/500")));
    }
}
