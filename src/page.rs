//! Page chrome state: scroll position, smooth scrolling, the nav menu,
//! header elevation, and the one-shot reveal tracker.

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Instant;

use crate::constants::{breakpoints, scroll, ROW_PX};
use crate::lang::{strings, Language};

/// The page sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Services,
    Products,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Services,
        Section::Products,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Nav link label for the section.
    pub fn label(self, lang: Language) -> &'static str {
        let idx = Section::ALL.iter().position(|s| *s == self).unwrap_or(0);
        strings(lang).nav_links[idx]
    }
}

/// Pending debounced resize deadline.
#[derive(Debug, Clone, Copy)]
struct PendingResize {
    due: Instant,
}

/// Scroll and navigation state for the page.
pub struct Page {
    scroll_px: u16,
    max_scroll_px: u16,
    /// Smooth-scroll destination, when an animation is running.
    target_px: Option<u16>,

    menu_open: bool,
    menu_selected: usize,

    pending_resize: Option<PendingResize>,
    viewport_px: u16,
    content_height_px: u16,
}

impl Page {
    pub fn new(viewport_px: u16, content_height_px: u16) -> Self {
        Self {
            scroll_px: 0,
            max_scroll_px: 0,
            target_px: None,
            menu_open: false,
            menu_selected: 0,
            pending_resize: None,
            viewport_px,
            content_height_px,
        }
    }

    pub fn scroll_px(&self) -> u16 {
        self.scroll_px
    }

    pub fn scroll_rows(&self) -> u16 {
        self.scroll_px / ROW_PX
    }

    pub fn content_height_px(&self) -> u16 {
        self.content_height_px
    }

    /// Header renders elevated once the page is scrolled past the
    /// threshold.
    pub fn header_elevated(&self) -> bool {
        self.scroll_px > scroll::HEADER_ELEVATION
    }

    /// Updates the scrollable extent (page height changes with layout).
    pub fn set_max_scroll(&mut self, total_px: u16) {
        self.max_scroll_px = total_px.saturating_sub(self.content_height_px);
        self.scroll_px = self.scroll_px.min(self.max_scroll_px);
    }

    /// Steps the scroll position, cancelling any smooth-scroll animation.
    pub fn scroll_by(&mut self, delta_rows: i32) {
        self.target_px = None;
        let delta_px = delta_rows * ROW_PX as i32;
        let next = self.scroll_px as i32 + delta_px;
        self.scroll_px = next.clamp(0, self.max_scroll_px as i32) as u16;
    }

    /// Starts a smooth scroll toward an absolute pixel offset.
    pub fn scroll_to(&mut self, target_px: u16) {
        self.target_px = Some(target_px.min(self.max_scroll_px));
    }

    pub fn is_scrolling(&self) -> bool {
        self.target_px.is_some()
    }

    /// One animation step toward the smooth-scroll target. Eases out by
    /// covering a quarter of the remaining distance, at least one row.
    fn scroll_step(&mut self) -> bool {
        let Some(target) = self.target_px else {
            return false;
        };
        let remaining = target as i32 - self.scroll_px as i32;
        if remaining == 0 {
            self.target_px = None;
            return false;
        }
        let magnitude = (remaining.unsigned_abs() / 4).max(ROW_PX as u32) as i32;
        let step = magnitude.min(remaining.abs()) * remaining.signum();
        self.scroll_px = (self.scroll_px as i32 + step) as u16;
        if self.scroll_px == target {
            self.target_px = None;
        }
        true
    }

    // --- Nav menu ---

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn menu_selected(&self) -> usize {
        self.menu_selected
    }

    /// Toggles the menu. Opening moves focus to the first link.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            self.menu_selected = 0;
        }
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn menu_move(&mut self, delta: i32) {
        let count = Section::ALL.len();
        self.menu_selected = if delta >= 0 {
            (self.menu_selected + 1) % count
        } else {
            (self.menu_selected + count - 1) % count
        };
    }

    pub fn menu_section(&self) -> Section {
        Section::ALL[self.menu_selected]
    }

    // --- Resize ---

    /// Applies new viewport dimensions immediately and schedules the
    /// debounced responsive pass. The prior pending deadline is replaced,
    /// never stacked.
    pub fn on_resize(&mut self, now: Instant, viewport_px: u16, content_height_px: u16) {
        self.viewport_px = viewport_px;
        self.content_height_px = content_height_px;
        self.pending_resize = Some(PendingResize {
            due: now + scroll::RESIZE_DEBOUNCE,
        });
    }

    /// Timer pass: smooth-scroll animation plus the debounced resize
    /// handler (which closes the menu on wide viewports).
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let mut changed = self.scroll_step();

        if let Some(pending) = self.pending_resize {
            if now >= pending.due {
                self.pending_resize = None;
                if self.viewport_px > breakpoints::TABLET && self.menu_open {
                    self.close_menu();
                }
                changed = true;
            }
        }

        changed
    }
}

/// One-shot reveal tracker: a block gains the revealed state the first
/// time it scrolls into the (margin-shrunk) visible band, then leaves the
/// observation set for good.
pub struct RevealTracker<K> {
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Copy> RevealTracker<K> {
    pub fn new() -> Self {
        Self {
            revealed: HashSet::new(),
        }
    }

    pub fn is_revealed(&self, key: K) -> bool {
        self.revealed.contains(&key)
    }

    /// Observes blocks against the current scroll window. `blocks` yields
    /// `(key, top_px, height_px)`. Returns how many newly revealed.
    pub fn observe<I>(&mut self, blocks: I, scroll_px: u16, viewport_height_px: u16) -> usize
    where
        I: IntoIterator<Item = (K, u16, u16)>,
    {
        let band_top = scroll_px as u32;
        let band_bottom = (scroll_px as u32 + viewport_height_px as u32)
            .saturating_sub(scroll::REVEAL_MARGIN as u32);

        let mut newly = 0;
        for (key, top, height) in blocks {
            if self.revealed.contains(&key) {
                continue; // One-shot: already unobserved
            }
            let top = top as u32;
            let bottom = top + height as u32;
            if top < band_bottom && bottom > band_top {
                self.revealed.insert(key);
                newly += 1;
            }
        }
        newly
    }
}

impl<K: Eq + Hash + Copy> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn page() -> Page {
        let mut p = Page::new(1200, 480); // 30 rows of content
        p.set_max_scroll(1600); // 100 rows total
        p
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut p = page();
        p.scroll_by(-5);
        assert_eq!(p.scroll_px(), 0);
        p.scroll_by(1000);
        assert_eq!(p.scroll_px(), 1600 - 480);
    }

    #[test]
    fn test_header_elevation_threshold() {
        let mut p = page();
        assert!(!p.header_elevated());
        p.scroll_by(6); // 96px
        assert!(!p.header_elevated());
        p.scroll_by(1); // 112px
        assert!(p.header_elevated());
    }

    #[test]
    fn test_smooth_scroll_reaches_target() {
        let mut p = page();
        p.scroll_to(400);
        assert!(p.is_scrolling());
        let mut steps = 0;
        while p.on_tick(Instant::now()) && steps < 200 {
            steps += 1;
        }
        assert_eq!(p.scroll_px(), 400);
        assert!(!p.is_scrolling());
        assert!(steps > 1); // Eased, not teleported
    }

    #[test]
    fn test_manual_scroll_cancels_animation() {
        let mut p = page();
        p.scroll_to(800);
        p.scroll_by(1);
        assert!(!p.is_scrolling());
    }

    #[test]
    fn test_menu_toggle_focuses_first_link() {
        let mut p = page();
        p.menu_move(1); // Stale selection from a previous open
        p.toggle_menu();
        assert!(p.menu_open());
        assert_eq!(p.menu_selected(), 0);
        p.toggle_menu();
        assert!(!p.menu_open());
    }

    #[test]
    fn test_debounced_resize_closes_menu_on_wide_viewport() {
        let mut p = page();
        p.toggle_menu();
        let now = Instant::now();
        p.on_resize(now, 900, 480);

        // Not yet due: menu stays open.
        p.on_tick(now + Duration::from_millis(100));
        assert!(p.menu_open());

        p.on_tick(now + scroll::RESIZE_DEBOUNCE + Duration::from_millis(1));
        assert!(!p.menu_open());
    }

    #[test]
    fn test_debounced_resize_keeps_menu_on_narrow_viewport() {
        let mut p = page();
        p.toggle_menu();
        let now = Instant::now();
        p.on_resize(now, 600, 480);
        p.on_tick(now + scroll::RESIZE_DEBOUNCE + Duration::from_millis(1));
        assert!(p.menu_open());
    }

    #[test]
    fn test_rapid_resizes_collapse_to_one_deadline() {
        let mut p = page();
        p.toggle_menu();
        let now = Instant::now();
        p.on_resize(now, 900, 480);
        // A second resize replaces the pending deadline.
        p.on_resize(now + Duration::from_millis(200), 600, 480);

        p.on_tick(now + scroll::RESIZE_DEBOUNCE + Duration::from_millis(1));
        assert!(p.menu_open()); // First deadline was superseded

        p.on_tick(now + Duration::from_millis(200) + scroll::RESIZE_DEBOUNCE);
        assert!(p.menu_open()); // Final width is narrow
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        let blocks = [(1u32, 0u16, 100u16), (2, 1000, 100)];

        assert_eq!(tracker.observe(blocks, 0, 480), 1);
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(2));

        // Scroll down: the second block reveals.
        assert_eq!(tracker.observe(blocks, 800, 480), 1);
        assert!(tracker.is_revealed(2));

        // Scroll back up: nothing replays.
        assert_eq!(tracker.observe(blocks, 0, 480), 0);
    }

    #[test]
    fn test_reveal_margin_shrinks_the_band() {
        let mut tracker: RevealTracker<u32> = RevealTracker::new();
        // Block starts exactly at the bottom of the margin-shrunk band.
        let top = 480 - scroll::REVEAL_MARGIN;
        assert_eq!(tracker.observe([(1u32, top, 50u16)], 0, 480), 0);
        // One pixel higher and it counts.
        assert_eq!(tracker.observe([(1u32, top - 1, 50u16)], 0, 480), 1);
    }

    #[test]
    fn test_section_labels_follow_language() {
        assert_eq!(Section::Contact.label(Language::Es), "Contacto");
        assert_eq!(Section::Contact.label(Language::En), "Contact");
    }
}
