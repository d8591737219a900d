//! Page geometry: where every block of the scrolled page lands, in rows.
//!
//! Both the renderer and the event layer consume this, so mouse
//! hit-testing and drawing can never disagree about where a card or a
//! form field is. Heights are deterministic functions of the form state
//! (error lines and the banner add rows).

use ratatui::layout::Rect;

use crate::catalog::{Category, Filter};
use crate::constants::{carousel, CELL_PX, ROW_PX};
use crate::form::FieldId;
use crate::lang::Language;
use crate::page::Section;

/// Left margin of the page content, in columns.
pub const CONTENT_MARGIN_COLS: u16 = 2;

/// Number of service cards on the page.
pub const N_SERVICES: usize = 4;
/// Number of testimonial cards on the page.
pub const N_TESTIMONIALS: usize = 3;
/// Number of contact detail items.
pub const N_CONTACT_ITEMS: usize = 3;

/// Card slot pitch in columns (card plus gap).
pub const fn card_pitch_cols() -> u16 {
    (carousel::CARD_WIDTH + carousel::CARD_GAP) / CELL_PX
}

/// Card width in columns.
pub const fn card_cols() -> u16 {
    carousel::CARD_WIDTH / CELL_PX
}

/// Identity of a page block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Hero,
    Heading(Section),
    ServiceCard(usize),
    FilterBar,
    CarouselCards,
    CarouselControls,
    TestimonialCard(usize),
    ContactItem(usize),
    FormField(FieldId),
    FormSubmit,
    FormBanner,
    Footer,
}

/// A block's vertical placement on the page.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub id: BlockId,
    pub top_row: u16,
    pub rows: u16,
}

impl Block {
    pub fn top_px(&self) -> u16 {
        self.top_row * ROW_PX
    }

    pub fn height_px(&self) -> u16 {
        self.rows * ROW_PX
    }

    pub fn contains_row(&self, page_row: u16) -> bool {
        page_row >= self.top_row && page_row < self.top_row + self.rows
    }
}

/// Form-dependent geometry inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormGeometry {
    /// Whether each field currently shows an error line, in
    /// `FieldId::ALL` order.
    pub errors: [bool; 5],
    /// Whether the banner row is present.
    pub banner: bool,
}

/// The computed page layout.
pub struct PageLayout {
    blocks: Vec<Block>,
    section_tops: [u16; 5],
    total_rows: u16,
}

struct LayoutBuilder {
    blocks: Vec<Block>,
    section_tops: [u16; 5],
    cursor: u16,
}

impl LayoutBuilder {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            section_tops: [0; 5],
            cursor: 0,
        }
    }

    fn section(&mut self, section: Section) {
        let idx = Section::ALL.iter().position(|s| *s == section).unwrap_or(0);
        self.section_tops[idx] = self.cursor;
    }

    fn block(&mut self, id: BlockId, rows: u16) {
        self.blocks.push(Block {
            id,
            top_row: self.cursor,
            rows,
        });
        self.cursor += rows;
    }

    fn gap(&mut self, rows: u16) {
        self.cursor += rows;
    }
}

impl PageLayout {
    /// Computes the layout for the current form state.
    pub fn compute(form: FormGeometry) -> Self {
        let mut b = LayoutBuilder::new();

        // Hero: padding, title, subtitle, cta, art.
        b.section(Section::Hero);
        b.block(BlockId::Hero, 10);

        // Services: heading plus stacked cards.
        b.section(Section::Services);
        b.block(BlockId::Heading(Section::Services), 2);
        for i in 0..N_SERVICES {
            b.block(BlockId::ServiceCard(i), 4);
            b.gap(1);
        }

        // Products: heading, filter bar, card band, controls.
        b.section(Section::Products);
        b.block(BlockId::Heading(Section::Products), 2);
        b.block(BlockId::FilterBar, 2);
        b.block(BlockId::CarouselCards, carousel::CARD_ROWS);
        b.block(BlockId::CarouselControls, 1);
        b.gap(1);

        // Testimonials.
        b.section(Section::Testimonials);
        b.block(BlockId::Heading(Section::Testimonials), 2);
        for i in 0..N_TESTIMONIALS {
            b.block(BlockId::TestimonialCard(i), 4);
            b.gap(1);
        }

        // Contact: details, then the form.
        b.section(Section::Contact);
        b.block(BlockId::Heading(Section::Contact), 2);
        for i in 0..N_CONTACT_ITEMS {
            b.block(BlockId::ContactItem(i), 2);
        }
        b.gap(1);
        for (i, field) in FieldId::ALL.iter().enumerate() {
            let rows = match field {
                // Label, input rows, counter, optional error line.
                FieldId::Message => 4 + u16::from(form.errors[i]),
                _ => 2 + u16::from(form.errors[i]),
            };
            b.block(BlockId::FormField(*field), rows);
        }
        b.block(BlockId::FormSubmit, 2);
        if form.banner {
            b.block(BlockId::FormBanner, 2);
        }
        b.gap(1);

        b.block(BlockId::Footer, 2);

        Self {
            section_tops: b.section_tops,
            total_rows: b.cursor,
            blocks: b.blocks,
        }
    }

    pub fn total_rows(&self) -> u16 {
        self.total_rows
    }

    pub fn total_px(&self) -> u16 {
        self.total_rows * ROW_PX
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// The block covering an absolute page row, if any.
    pub fn block_at_row(&self, page_row: u16) -> Option<&Block> {
        self.blocks.iter().find(|b| b.contains_row(page_row))
    }

    pub fn section_top_row(&self, section: Section) -> u16 {
        let idx = Section::ALL.iter().position(|s| *s == section).unwrap_or(0);
        self.section_tops[idx]
    }

    pub fn section_top_px(&self, section: Section) -> u16 {
        self.section_top_row(section) * ROW_PX
    }

    /// Blocks observed for the one-shot reveal effect, as
    /// `(id, top_px, height_px)`.
    pub fn reveal_blocks(&self) -> impl Iterator<Item = (BlockId, u16, u16)> + '_ {
        self.blocks
            .iter()
            .filter(|b| {
                matches!(
                    b.id,
                    BlockId::ServiceCard(_)
                        | BlockId::CarouselCards
                        | BlockId::TestimonialCard(_)
                        | BlockId::ContactItem(_)
                )
            })
            .map(|b| (b.id, b.top_px(), b.height_px()))
    }
}

/// Which carousel card slot a content column falls in, if it is on a
/// card (and not in a gap or the margin).
pub fn card_slot_at(col: u16) -> Option<usize> {
    let col = col.checked_sub(CONTENT_MARGIN_COLS)?;
    let slot = col / card_pitch_cols();
    let within = col % card_pitch_cols();
    (within < card_cols()).then_some(slot as usize)
}

/// Hits on the carousel controls row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsHit {
    Prev,
    Next,
    Indicator(usize),
}

/// Resolves a click on the controls row: prev arrow at the left edge,
/// next arrow at the right edge, indicator dots centered.
pub fn controls_hit(col: u16, viewport_cols: u16) -> Option<ControlsHit> {
    if col < CONTENT_MARGIN_COLS + 3 {
        return Some(ControlsHit::Prev);
    }
    if col + 3 >= viewport_cols.saturating_sub(CONTENT_MARGIN_COLS) {
        return Some(ControlsHit::Next);
    }
    let mid = viewport_cols / 2;
    for (i, dot_col) in [mid.saturating_sub(4), mid, mid + 4].iter().enumerate() {
        if col >= dot_col.saturating_sub(1) && col <= dot_col + 1 {
            return Some(ControlsHit::Indicator(i));
        }
    }
    None
}

/// The filter-bar entries with their column extents:
/// `(filter, start_col, width)`. The renderer and the click handler both
/// derive the bar from this.
pub fn filter_spans(lang: Language) -> Vec<(Filter, u16, u16)> {
    let mut col = CONTENT_MARGIN_COLS;
    let mut spans = Vec::with_capacity(1 + Category::ALL.len());
    let filters = std::iter::once(Filter::All)
        .chain(Category::ALL.iter().map(|c| Filter::Category(*c)));
    for filter in filters {
        let width = filter.label(lang).chars().count() as u16;
        spans.push((filter, col, width));
        col += width + 3; // " | " separator
    }
    spans
}

/// Resolves a click on the filter bar to a filter.
pub fn filter_hit(col: u16, lang: Language) -> Option<Filter> {
    filter_spans(lang)
        .into_iter()
        .find(|(_, start, width)| col >= *start && col < start + width)
        .map(|(filter, _, _)| filter)
}

/// Helper to create a centered rect using up certain percentage of the
/// available rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let width = r.width * percent_x / 100;
    let height = r.height * percent_y / 100;
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
