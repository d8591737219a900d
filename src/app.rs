//! Application state and logic.
//!
//! Each widget owns its state in a dedicated instance (carousel, form,
//! page chrome, glyph set); the app wires events to them and holds the
//! small amount of cross-widget state (active overlay, status line,
//! scroll lock).

use std::time::Instant;

use anyhow::Result;
use ratatui::layout::Rect;
use tracing::debug;

use crate::carousel::Carousel;
use crate::catalog::Catalog;
use crate::constants::{dialog, layout as chrome, scroll, CELL_PX, ROW_PX};
use crate::event::{Action, MouseAction};
use crate::form::{ContactForm, FieldId, FormFocus};
use crate::icons::IconSet;
use crate::lang::{strings, Language};
use crate::layout::{self, BlockId, ControlsHit, FormGeometry, PageLayout};
use crate::page::{Page, RevealTracker, Section};
use crate::session::SessionStore;

/// Page overflow setting; the modal locks scrolling while open and must
/// restore whatever value was active before it opened.
pub const OVERFLOW_AUTO: &str = "auto";
pub const OVERFLOW_HIDDEN: &str = "hidden";

/// Snapshot of the product shown in the detail modal.
#[derive(Debug, Clone)]
pub struct ModalView {
    pub title: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub art_visible: bool,
}

/// Status message to display to the user.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// The message text
    pub text: String,
    /// Whether this is an error message
    pub is_error: bool,
}

/// In-flight pointer press over the carousel band.
#[derive(Debug, Clone, Copy)]
struct PendingDrag {
    start_col: u16,
}

/// Main application state.
pub struct App {
    /// Active language variant
    pub lang: Language,
    /// The bound product catalog
    pub catalog: Catalog,
    /// Session-scoped storage (token stash)
    session: SessionStore,

    // --- Widgets ---
    pub carousel: Carousel,
    pub form: ContactForm,
    pub page: Page,
    pub icons: IconSet,
    reveals: RevealTracker<BlockId>,

    // --- Overlays ---
    /// Product detail modal, when open
    pub modal: Option<ModalView>,
    pub show_help: bool,

    /// Page overflow; the modal saves and restores it
    overflow: &'static str,
    saved_overflow: Option<&'static str>,

    /// Status message to display
    pub status: Option<StatusMessage>,

    drag: Option<PendingDrag>,

    /// Terminal size in cells
    cols: u16,
    rows: u16,
}

impl App {
    /// Creates the application over a bound catalog.
    pub fn new(lang: Language, catalog: Catalog, cols: u16, rows: u16, now: Instant) -> Self {
        let viewport_px = cols * CELL_PX;
        let content_px = content_rows(rows) * ROW_PX;
        let carousel = Carousel::new(&catalog, viewport_px, now);
        let mut session = SessionStore::new();
        let form = ContactForm::new(&mut session);

        let mut app = Self {
            lang,
            catalog,
            session,
            carousel,
            form,
            page: Page::new(viewport_px, content_px),
            icons: IconSet::new(now),
            reveals: RevealTracker::new(),
            modal: None,
            show_help: false,
            overflow: OVERFLOW_AUTO,
            saved_overflow: None,
            status: None,
            drag: None,
            cols,
            rows,
        };
        app.sync_scroll_extent();
        app
    }

    /// Whether the event loop should poll in form-input mode.
    pub fn in_form_input(&self) -> bool {
        self.form.focus.is_some() && self.modal.is_none() && !self.page.menu_open()
    }

    pub fn overflow(&self) -> &'static str {
        self.overflow
    }

    /// The current page layout for this form state.
    pub fn layout(&self) -> PageLayout {
        PageLayout::compute(self.form_geometry())
    }

    fn form_geometry(&self) -> FormGeometry {
        let mut errors = [false; 5];
        for (i, id) in FieldId::ALL.iter().enumerate() {
            errors[i] = self.form.visual(*id, self.lang).1.is_some();
        }
        FormGeometry {
            errors,
            banner: self.form.banner().is_some(),
        }
    }

    pub fn is_revealed(&self, id: BlockId) -> bool {
        self.reveals.is_revealed(id)
    }

    fn sync_scroll_extent(&mut self) {
        let total = self.layout().total_px();
        self.page.set_max_scroll(total);
    }

    fn screen_area(&self) -> Rect {
        Rect::new(0, 0, self.cols, self.rows)
    }

    // --- Event dispatch ---

    /// Handles an action and returns true if the app should quit.
    pub fn handle_event(&mut self, action: Action, now: Instant) -> Result<bool> {
        // Resize applies in every view.
        if let Action::Resize(cols, rows) = action {
            self.on_resize(cols, rows, now);
            return Ok(false);
        }

        // Handle help toggle from any view
        if action == Action::Help {
            self.show_help = !self.show_help;
            return Ok(false);
        }

        // If help is showing, any key closes it
        if self.show_help {
            if !matches!(action, Action::Mouse(MouseAction::Moved { .. })) {
                self.show_help = false;
            }
            return Ok(false);
        }

        if self.modal.is_some() {
            return self.handle_modal_action(action);
        }

        if self.page.menu_open() {
            return self.handle_menu_action(action);
        }

        if self.in_form_input() {
            return self.handle_form_action(action, now);
        }

        self.handle_browse_action(action, now)
    }

    /// Actions while the product modal is open.
    fn handle_modal_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Back | Action::Enter => self.close_modal(),
            Action::Mouse(MouseAction::Down { col, row }) => {
                let area = layout::centered_rect(
                    dialog::MODAL_WIDTH,
                    dialog::MODAL_HEIGHT,
                    self.screen_area(),
                );
                let inside = col >= area.x
                    && col < area.x + area.width
                    && row >= area.y
                    && row < area.y + area.height;
                let on_close =
                    row == area.y && col + 4 >= area.x + area.width && col < area.x + area.width;
                if !inside || on_close {
                    self.close_modal();
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Actions while the nav menu is open.
    fn handle_menu_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Back | Action::ToggleMenu => self.page.close_menu(),
            Action::Up => self.page.menu_move(-1),
            Action::Down => self.page.menu_move(1),
            Action::Enter => {
                // Link selection closes the menu and scrolls to the anchor.
                let section = self.page.menu_section();
                self.page.close_menu();
                self.scroll_to_section(section);
            }
            Action::Mouse(MouseAction::Down { col, row }) => {
                let area = layout::centered_rect(
                    dialog::MENU_WIDTH,
                    dialog::MENU_HEIGHT,
                    self.screen_area(),
                );
                let first_link = area.y + 2;
                if col >= area.x && col < area.x + area.width && row >= first_link {
                    let idx = (row - first_link) as usize;
                    if idx < Section::ALL.len() {
                        let section = Section::ALL[idx];
                        self.page.close_menu();
                        self.scroll_to_section(section);
                    }
                }
            }
            _ => {}
        }
        Ok(false)
    }

    /// Actions while a form field or the submit control has focus.
    fn handle_form_action(&mut self, action: Action, now: Instant) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Back => self.form.on_blur(),
            Action::FocusNext => self.form.focus_next(),
            Action::FocusPrev | Action::Up => self.form.focus_prev(),
            Action::Down => self.form.focus_next(),
            Action::Enter => match self.form.focus {
                Some(FormFocus::Submit) => self.submit_form(now),
                _ => self.form.focus_next(),
            },
            Action::Left => self.cycle_event_type(-1),
            Action::Right => self.cycle_event_type(1),
            Action::Char(c) => self.form.input_char(c),
            Action::Backspace => self.form.input_backspace(),
            Action::Mouse(mouse) => self.handle_mouse(mouse, now),
            _ => {}
        }
        self.sync_scroll_extent();
        Ok(false)
    }

    /// Browse-mode actions.
    fn handle_browse_action(&mut self, action: Action, now: Instant) -> Result<bool> {
        match action {
            Action::Quit => return Ok(true),
            Action::Up => self.scroll_by(-(scroll::STEP_ROWS as i32)),
            Action::Down => self.scroll_by(scroll::STEP_ROWS as i32),
            Action::Top => self.page.scroll_to(0),
            Action::Bottom => {
                let total = self.layout().total_px();
                self.page.scroll_to(total);
            }
            Action::Left => {
                self.carousel.advance(-1);
            }
            Action::Right => {
                self.carousel.advance(1);
            }
            Action::Enter => {
                if let Some(idx) = self.carousel.card_at_slot(0) {
                    self.open_modal(idx);
                }
            }
            Action::ToggleMenu => self.page.toggle_menu(),
            Action::CycleFilter => {
                let next = self.carousel.filter().next();
                self.carousel.set_filter(&self.catalog, next);
            }
            Action::SwitchLanguage => {
                self.lang = self.lang.toggled();
                debug!(lang = %self.lang, "language switched");
            }
            Action::Section(idx) => {
                if let Some(section) = Section::ALL.get(idx) {
                    self.scroll_to_section(*section);
                }
            }
            Action::FocusNext => {
                self.scroll_to_section(Section::Contact);
                self.form.on_focus(FormFocus::Field(FieldId::Name));
            }
            Action::FocusPrev => {
                self.scroll_to_section(Section::Contact);
                self.form.on_focus(FormFocus::Submit);
            }
            Action::Copy => self.copy_contact(),
            Action::Mouse(mouse) => self.handle_mouse(mouse, now),
            Action::Back => {}
            _ => {}
        }
        Ok(false)
    }

    // --- Mouse handling ---

    fn handle_mouse(&mut self, mouse: MouseAction, now: Instant) {
        match mouse {
            MouseAction::WheelUp => self.scroll_by(-(scroll::STEP_ROWS as i32)),
            MouseAction::WheelDown => self.scroll_by(scroll::STEP_ROWS as i32),
            MouseAction::Moved { col: _, row } => self.update_hover(row, now),
            MouseAction::Down { col, row } => {
                if self.row_in_cards_band(row) {
                    // Possible swipe: resolve on release.
                    self.drag = Some(PendingDrag { start_col: col });
                    self.carousel.drag_start(col * CELL_PX);
                } else {
                    self.handle_click(col, row, now);
                }
            }
            MouseAction::Up { col, row } => {
                if let Some(drag) = self.drag.take() {
                    let swiped = self.carousel.drag_end(col * CELL_PX);
                    if !swiped && drag.start_col == col {
                        // A stationary press on a card is a click.
                        self.handle_click(col, row, now);
                    }
                }
            }
        }
    }

    /// Pointer position over the carousel pauses auto-advance.
    fn update_hover(&mut self, row: u16, now: Instant) {
        if self.row_in_cards_band(row) {
            self.carousel.hover_enter();
        } else {
            self.carousel.hover_leave(now);
        }
    }

    fn row_in_cards_band(&self, screen_row: u16) -> bool {
        let Some(page_row) = self.screen_to_page_row(screen_row) else {
            return false;
        };
        self.layout()
            .block(BlockId::CarouselCards)
            .is_some_and(|b| b.contains_row(page_row))
    }

    /// Screen row to absolute page row, when inside the content area.
    fn screen_to_page_row(&self, screen_row: u16) -> Option<u16> {
        let top = chrome::HEADER_HEIGHT;
        let bottom = self.rows
            .saturating_sub(chrome::COMMANDS_BAR_HEIGHT + chrome::STATUS_BAR_HEIGHT);
        if screen_row < top || screen_row >= bottom {
            return None;
        }
        Some(screen_row - top + self.page.scroll_rows())
    }

    /// Resolves a click against the header chrome and the page blocks.
    fn handle_click(&mut self, col: u16, row: u16, now: Instant) {
        // Header chrome: menu toggle on the left, language switcher on
        // the right.
        if row < chrome::HEADER_HEIGHT {
            if col < 6 {
                self.page.toggle_menu();
            } else if col + 10 >= self.cols {
                self.lang = self.lang.toggled();
            }
            return;
        }

        let Some(page_row) = self.screen_to_page_row(row) else {
            return;
        };
        let layout = self.layout();
        let Some(block) = layout.block_at_row(page_row) else {
            if self.form.focus.is_some() {
                self.form.on_blur();
            }
            return;
        };

        match block.id {
            BlockId::Hero => {
                // The CTA row links to the contact section.
                if page_row == block.top_row + 6 {
                    self.scroll_to_section(Section::Contact);
                }
            }
            BlockId::FilterBar => {
                if let Some(filter) = layout::filter_hit(col, self.lang) {
                    self.carousel.set_filter(&self.catalog, filter);
                }
            }
            BlockId::CarouselCards => {
                if let Some(slot) = layout::card_slot_at(col) {
                    if let Some(idx) = self.carousel.card_at_slot(slot) {
                        self.open_modal(idx);
                    }
                }
            }
            BlockId::CarouselControls => match layout::controls_hit(col, self.cols) {
                Some(ControlsHit::Prev) => {
                    self.carousel.advance(-1);
                }
                Some(ControlsHit::Next) => {
                    self.carousel.advance(1);
                }
                Some(ControlsHit::Indicator(segment)) => {
                    self.carousel.jump_to_segment(segment);
                }
                None => {}
            },
            BlockId::ContactItem(i) => self.copy_contact_item(i),
            BlockId::FormField(id) => self.form.on_focus(FormFocus::Field(id)),
            BlockId::FormSubmit => {
                self.form.on_focus(FormFocus::Submit);
                self.submit_form(now);
            }
            _ => {
                if self.form.focus.is_some() {
                    self.form.on_blur();
                }
            }
        }
        self.sync_scroll_extent();
    }

    // --- Widget operations ---

    fn scroll_by(&mut self, delta_rows: i32) {
        if self.overflow == OVERFLOW_HIDDEN {
            return; // Scroll suspended while the modal is open
        }
        self.page.scroll_by(delta_rows);
    }

    /// Smooth-scrolls a section anchor to the top, offset by the header
    /// height.
    fn scroll_to_section(&mut self, section: Section) {
        if self.overflow == OVERFLOW_HIDDEN {
            return;
        }
        let target = self
            .layout()
            .section_top_px(section)
            .saturating_sub(chrome::HEADER_HEIGHT * ROW_PX);
        self.page.scroll_to(target);
    }

    fn cycle_event_type(&mut self, delta: i32) {
        if self.form.focus == Some(FormFocus::Field(FieldId::EventType)) {
            self.form.cycle_event_type(delta, self.lang);
        }
    }

    fn submit_form(&mut self, now: Instant) {
        let outcome = self.form.submit(now, self.lang, &self.session);
        debug!(?outcome, "form submit attempt");
        self.sync_scroll_extent();
    }

    /// Opens the product detail modal, suspending page scroll. Only one
    /// product shows at a time; prior content is overwritten.
    pub fn open_modal(&mut self, catalog_idx: usize) {
        let Some(product) = self.catalog.get(catalog_idx) else {
            return;
        };
        self.modal = Some(ModalView {
            title: product.title.clone(),
            description: product.description.clone(),
            image: product.image.clone(),
            features: self.catalog.features_for(&product.title),
            art_visible: self.catalog.art_visible(catalog_idx),
        });
        if self.saved_overflow.is_none() {
            self.saved_overflow = Some(self.overflow);
        }
        self.overflow = OVERFLOW_HIDDEN;
    }

    /// Closes the modal and restores the pre-open scroll state.
    pub fn close_modal(&mut self) {
        self.modal = None;
        self.overflow = self.saved_overflow.take().unwrap_or(OVERFLOW_AUTO);
    }

    fn copy_contact(&mut self) {
        let items = strings(self.lang).contact_items;
        let text = items
            .iter()
            .map(|(_, value)| *value)
            .collect::<Vec<_>>()
            .join(" | ");
        self.copy_to_clipboard(&text);
    }

    fn copy_contact_item(&mut self, idx: usize) {
        let items = strings(self.lang).contact_items;
        if let Some((_, value)) = items.get(idx) {
            let value = value.to_string();
            self.copy_to_clipboard(&value);
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        // Try to copy to clipboard
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text).is_ok() {
                    self.set_status(strings(self.lang).copied_contact, false);
                } else {
                    self.set_status(strings(self.lang).clipboard_unavailable, true);
                }
            }
            Err(_) => {
                self.set_status(strings(self.lang).clipboard_unavailable, true);
            }
        }
    }

    // --- Resize ---

    /// Terminal resize: the carousel re-clamps immediately; the
    /// responsive menu pass is debounced inside the page.
    fn on_resize(&mut self, cols: u16, rows: u16, now: Instant) {
        self.cols = cols;
        self.rows = rows;
        let viewport_px = cols * CELL_PX;
        let content_px = content_rows(rows) * ROW_PX;
        self.carousel.on_resize(viewport_px);
        self.page.on_resize(now, viewport_px, content_px);
        self.sync_scroll_extent();
    }

    // --- Timers ---

    /// Timer pass for everything scheduled: auto-advance, smooth scroll,
    /// debounced resize, submit completion, banner expiry, glyph probe,
    /// and the reveal observer.
    pub fn on_tick(&mut self, now: Instant) {
        self.carousel.on_tick(now);
        self.page.on_tick(now);
        self.icons.on_tick(now);
        if self.form.on_tick(now, self.lang, &mut self.session) {
            self.sync_scroll_extent();
        }

        let layout = self.layout();
        self.reveals.observe(
            layout.reveal_blocks(),
            self.page.scroll_px(),
            self.page.content_height_px(),
        );
    }

    // --- Status message helpers ---

    fn set_status(&mut self, text: &str, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            is_error,
        });
    }

    #[allow(dead_code)]
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

/// Rows available to the scrolled page content.
fn content_rows(rows: u16) -> u16 {
    rows.saturating_sub(
        chrome::HEADER_HEIGHT + chrome::COMMANDS_BAR_HEIGHT + chrome::STATUS_BAR_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::breakpoints;

    fn app() -> App {
        // 150 cols = 1200px viewport, 40 rows
        App::new(
            Language::Es,
            Catalog::load(None).unwrap(),
            150,
            40,
            Instant::now(),
        )
    }

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_modal_locks_and_restores_overflow() {
        let mut a = app();
        assert_eq!(a.overflow(), OVERFLOW_AUTO);

        a.open_modal(0);
        assert_eq!(a.overflow(), OVERFLOW_HIDDEN);
        assert!(a.modal.is_some());

        // Escape closes and restores the pre-open value.
        a.handle_event(Action::Back, now()).unwrap();
        assert!(a.modal.is_none());
        assert_eq!(a.overflow(), OVERFLOW_AUTO);
    }

    #[test]
    fn test_modal_overwrites_prior_content() {
        let mut a = app();
        a.open_modal(0);
        let first = a.modal.as_ref().unwrap().title.clone();
        a.open_modal(1);
        let second = a.modal.as_ref().unwrap().title.clone();
        assert_ne!(first, second);
        // Restore still lands on the original overflow value.
        a.close_modal();
        assert_eq!(a.overflow(), OVERFLOW_AUTO);
    }

    #[test]
    fn test_scroll_is_suspended_while_modal_open() {
        let mut a = app();
        a.open_modal(0);
        let before = a.page.scroll_px();
        a.handle_event(Action::Mouse(MouseAction::WheelDown), now())
            .unwrap();
        assert_eq!(a.page.scroll_px(), before);
    }

    #[test]
    fn test_enter_opens_modal_for_leading_card() {
        let mut a = app();
        a.handle_event(Action::Right, now()).unwrap();
        a.handle_event(Action::Enter, now()).unwrap();
        let modal = a.modal.as_ref().unwrap();
        assert_eq!(modal.title, a.catalog.get(1).unwrap().title);
        assert!(!modal.features.is_empty());
    }

    #[test]
    fn test_resize_reclamps_carousel_immediately() {
        let mut a = app();
        // 150 cols -> 4 visible. Walk to the right bound.
        while a.carousel.advance(1) {}
        let at_end = a.carousel.current_index();

        // Narrow to 59 cols = 472px -> 1 visible; max_index grows, index
        // must stay in bounds.
        a.handle_event(Action::Resize(59, 40), now()).unwrap();
        assert_eq!(a.carousel.visible_cards(), 1);
        assert!(a.carousel.current_index() <= a.carousel.max_index());
        assert_eq!(a.carousel.current_index(), at_end);
    }

    #[test]
    fn test_menu_flow_selects_section() {
        let mut a = app();
        a.handle_event(Action::ToggleMenu, now()).unwrap();
        assert!(a.page.menu_open());

        a.handle_event(Action::Down, now()).unwrap();
        a.handle_event(Action::Down, now()).unwrap();
        a.handle_event(Action::Enter, now()).unwrap();
        assert!(!a.page.menu_open());
        assert!(a.page.is_scrolling());
    }

    #[test]
    fn test_language_switch_toggles() {
        let mut a = app();
        a.handle_event(Action::SwitchLanguage, now()).unwrap();
        assert_eq!(a.lang, Language::En);
        a.handle_event(Action::SwitchLanguage, now()).unwrap();
        assert_eq!(a.lang, Language::Es);
    }

    #[test]
    fn test_filter_cycle_resets_carousel() {
        let mut a = app();
        a.handle_event(Action::Right, now()).unwrap();
        assert_eq!(a.carousel.current_index(), 1);
        a.handle_event(Action::CycleFilter, now()).unwrap();
        assert_eq!(a.carousel.current_index(), 0);
        assert_ne!(a.carousel.filter(), crate::catalog::Filter::All);
    }

    #[test]
    fn test_tab_enters_the_form() {
        let mut a = app();
        assert!(!a.in_form_input());
        a.handle_event(Action::FocusNext, now()).unwrap();
        assert!(a.in_form_input());
        assert_eq!(a.form.focus, Some(FormFocus::Field(FieldId::Name)));

        // Typing feeds the field; 'q' must not quit.
        let quit = a.handle_event(Action::Char('q'), now()).unwrap();
        assert!(!quit);
        assert_eq!(a.form.value(FieldId::Name), "q");

        a.handle_event(Action::Back, now()).unwrap();
        assert!(!a.in_form_input());
    }

    #[test]
    fn test_event_type_cycling_only_with_selector_focus() {
        let mut a = app();
        a.handle_event(Action::FocusNext, now()).unwrap(); // Name
        a.handle_event(Action::Left, now()).unwrap();
        assert_eq!(a.form.event_type_selected(), None);

        for _ in 0..3 {
            a.handle_event(Action::FocusNext, now()).unwrap();
        }
        assert_eq!(a.form.focus, Some(FormFocus::Field(FieldId::EventType)));
        a.handle_event(Action::Right, now()).unwrap();
        assert_eq!(a.form.event_type_selected(), Some(0));
    }

    #[test]
    fn test_help_overlay_toggles_and_any_key_closes() {
        let mut a = app();
        a.handle_event(Action::Help, now()).unwrap();
        assert!(a.show_help);
        a.handle_event(Action::Down, now()).unwrap();
        assert!(!a.show_help);
        // The close press is swallowed, not applied to the page.
        assert_eq!(a.page.scroll_px(), 0);
    }

    #[test]
    fn test_hover_over_cards_band_pauses_auto_advance() {
        let mut a = app();
        let layout = a.layout();
        let band = layout.block(BlockId::CarouselCards).unwrap();
        // Scroll so the band is at the top of the content area.
        a.page.scroll_to(band.top_px());
        while a.page.on_tick(now()) {}

        let band_screen_row = chrome::HEADER_HEIGHT; // Band top aligned to content top
        a.handle_event(
            Action::Mouse(MouseAction::Moved {
                col: 10,
                row: band_screen_row,
            }),
            now(),
        )
        .unwrap();
        assert!(a.carousel.is_hovered());

        a.handle_event(
            Action::Mouse(MouseAction::Moved { col: 10, row: 0 }),
            now(),
        )
        .unwrap();
        assert!(!a.carousel.is_hovered());
    }

    #[test]
    fn test_reveals_fire_once_for_visible_blocks() {
        let mut a = app();
        a.on_tick(now());
        // Service cards near the top of the page reveal on first tick.
        assert!(a.is_revealed(BlockId::ServiceCard(0)));
        // Blocks far below the fold stay unrevealed.
        assert!(!a.is_revealed(BlockId::TestimonialCard(2)));
    }

    #[test]
    fn test_section_shortcut_scrolls_with_header_offset() {
        let mut a = app();
        a.handle_event(Action::Section(2), now()).unwrap(); // Products
        assert!(a.page.is_scrolling());
        let expected = a
            .layout()
            .section_top_px(Section::Products)
            .saturating_sub(chrome::HEADER_HEIGHT * ROW_PX);
        while a.page.on_tick(now()) {}
        assert_eq!(a.page.scroll_px(), expected);
    }

    #[test]
    fn test_breakpoint_constants_cover_the_cell_model() {
        // 150 cols at 8px/cell is exactly the desktop breakpoint.
        assert_eq!(150 * CELL_PX, breakpoints::DESKTOP);
    }
}
