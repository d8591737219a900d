//! Product carousel state: bounded position, category filter, auto-advance.
//!
//! Position invariant: `current_index` stays within `[0, max_index]` after
//! every mutation (filter change, resize, step, jump).

use std::time::Instant;

use crate::catalog::{Catalog, Filter};
use crate::constants::{breakpoints, carousel};

/// Number of cards visible at a given viewport width.
pub fn visible_cards_for(viewport_px: u16) -> usize {
    if viewport_px >= breakpoints::DESKTOP {
        4
    } else if viewport_px >= breakpoints::TABLET {
        3
    } else if viewport_px >= breakpoints::MOBILE {
        2
    } else {
        1
    }
}

/// Auto-advance timer. The deadline is replaced wholesale on every re-arm,
/// so a pause/resume cycle never accumulates duplicate timers.
#[derive(Debug)]
struct AutoAdvance {
    deadline: Option<Instant>,
}

impl AutoAdvance {
    fn armed(now: Instant) -> Self {
        Self {
            deadline: Some(now + carousel::AUTO_ADVANCE),
        }
    }

    fn pause(&mut self) {
        self.deadline = None;
    }

    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + carousel::AUTO_ADVANCE);
    }

    fn due(&self, now: Instant) -> bool {
        matches!(self.deadline, Some(d) if now >= d)
    }
}

/// In-flight horizontal drag.
#[derive(Debug, Clone, Copy)]
struct Drag {
    start_px: u16,
}

/// The carousel over the filtered product subsequence.
pub struct Carousel {
    filter: Filter,
    /// Catalog indexes matching the active filter, in catalog order.
    items: Vec<usize>,
    current_index: usize,
    visible_cards: usize,
    auto: AutoAdvance,
    hovered: bool,
    drag: Option<Drag>,
}

impl Carousel {
    pub fn new(catalog: &Catalog, viewport_px: u16, now: Instant) -> Self {
        Self {
            filter: Filter::All,
            items: catalog.filtered_indices(Filter::All),
            current_index: 0,
            visible_cards: visible_cards_for(viewport_px),
            auto: AutoAdvance::armed(now),
            hovered: false,
            drag: None,
        }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn visible_cards(&self) -> usize {
        self.visible_cards
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn max_index(&self) -> usize {
        self.items.len().saturating_sub(self.visible_cards)
    }

    /// Catalog indexes of the cards currently on screen, leftmost first.
    pub fn visible_window(&self) -> &[usize] {
        let end = (self.current_index + self.visible_cards).min(self.items.len());
        &self.items[self.current_index.min(end)..end]
    }

    /// Catalog index of the card in a visible slot.
    pub fn card_at_slot(&self, slot: usize) -> Option<usize> {
        self.visible_window().get(slot).copied()
    }

    /// Horizontal render offset in pixels (applied as a negative translate).
    #[allow(dead_code)]
    pub fn offset_px(&self) -> u32 {
        self.current_index as u32 * (carousel::CARD_WIDTH + carousel::CARD_GAP) as u32
    }

    /// Applies a category filter: recompute the subsequence, reset to 0.
    pub fn set_filter(&mut self, catalog: &Catalog, filter: Filter) {
        self.filter = filter;
        self.items = catalog.filtered_indices(filter);
        self.current_index = 0;
    }

    /// Moves one card forward or back; out-of-bounds moves are no-ops.
    pub fn advance(&mut self, delta: i32) -> bool {
        if delta > 0 && self.current_index < self.max_index() {
            self.current_index += 1;
            true
        } else if delta < 0 && self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Auto-advance step: one card forward, wrapping to 0 past the end.
    fn wrap_advance(&mut self) {
        if self.current_index < self.max_index() {
            self.current_index += 1;
        } else {
            self.current_index = 0;
        }
    }

    /// Recomputes the visible-card count for a new viewport width and
    /// re-clamps the position if it changed.
    pub fn on_resize(&mut self, viewport_px: u16) -> bool {
        let visible = visible_cards_for(viewport_px);
        if visible == self.visible_cards {
            return false;
        }
        self.visible_cards = visible;
        self.current_index = self.current_index.min(self.max_index());
        true
    }

    /// Position target for an indicator segment:
    /// `round(segment * max_index / 3)`, clamped.
    pub fn indicator_target(&self, segment: usize) -> usize {
        let max = self.max_index();
        let target =
            (segment as f64 * max as f64 / carousel::INDICATOR_SEGMENTS as f64).round() as usize;
        target.min(max)
    }

    /// Jumps to an indicator segment.
    pub fn jump_to_segment(&mut self, segment: usize) {
        if segment < carousel::INDICATOR_SEGMENTS {
            self.current_index = self.indicator_target(segment);
        }
    }

    /// The indicator segment covering the current position.
    pub fn active_segment(&self) -> usize {
        let max = self.max_index();
        if max == 0 {
            return 0;
        }
        let progress = self.current_index as f64 / max as f64;
        if progress < 1.0 / 3.0 {
            0
        } else if progress < 2.0 / 3.0 {
            1
        } else {
            2
        }
    }

    // --- Hover (pauses auto-advance) ---

    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.auto.pause();
    }

    pub fn hover_leave(&mut self, now: Instant) {
        if self.hovered {
            self.hovered = false;
            self.auto.arm(now);
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    // --- Drag gesture ---

    pub fn drag_start(&mut self, x_px: u16) {
        self.drag = Some(Drag { start_px: x_px });
    }

    /// Ends a drag. Past the swipe threshold, steps once in the drag
    /// direction; shorter drags do nothing.
    pub fn drag_end(&mut self, x_px: u16) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        let diff = drag.start_px as i32 - x_px as i32;
        if diff.unsigned_abs() as u16 > carousel::SWIPE_THRESHOLD {
            // Dragging left advances, dragging right goes back.
            self.advance(if diff > 0 { 1 } else { -1 })
        } else {
            false
        }
    }

    /// Timer pass. Advances (wrapping) when the auto-advance deadline has
    /// passed and the pointer is not over the carousel.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.hovered || !self.auto.due(now) {
            return false;
        }
        self.wrap_advance();
        self.auto.arm(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use std::time::Duration;

    fn catalog() -> Catalog {
        Catalog::load(None).unwrap()
    }

    fn carousel_at(viewport_px: u16) -> Carousel {
        Carousel::new(&catalog(), viewport_px, Instant::now())
    }

    #[test]
    fn test_visible_cards_breakpoints() {
        assert_eq!(visible_cards_for(1200), 4);
        assert_eq!(visible_cards_for(1600), 4);
        assert_eq!(visible_cards_for(1199), 3);
        assert_eq!(visible_cards_for(768), 3);
        assert_eq!(visible_cards_for(767), 2);
        assert_eq!(visible_cards_for(480), 2);
        assert_eq!(visible_cards_for(479), 1);
        assert_eq!(visible_cards_for(0), 1);
    }

    #[test]
    fn test_max_index_recomputes_on_resize() {
        let mut c = carousel_at(1200);
        let count = c.item_count();
        assert_eq!(c.max_index(), count - 4);
        c.on_resize(500);
        assert_eq!(c.max_index(), count - 2);
        c.on_resize(300);
        assert_eq!(c.max_index(), count - 1);
    }

    #[test]
    fn test_advance_is_bounded() {
        let mut c = carousel_at(1200);
        assert!(!c.advance(-1)); // No-op at the left bound
        assert_eq!(c.current_index(), 0);

        for _ in 0..100 {
            c.advance(1);
        }
        assert_eq!(c.current_index(), c.max_index());
        assert!(!c.advance(1)); // No-op at the right bound
    }

    #[test]
    fn test_resize_reclamps_position() {
        let mut c = carousel_at(480); // 2 visible, large max_index
        for _ in 0..c.max_index() {
            c.advance(1);
        }
        let at_end = c.current_index();
        c.on_resize(1300); // 4 visible, smaller max_index
        assert!(c.current_index() <= c.max_index());
        assert!(c.current_index() < at_end);
    }

    #[test]
    fn test_resize_without_breakpoint_change_is_noop() {
        let mut c = carousel_at(1200);
        c.advance(1);
        assert!(!c.on_resize(1400));
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn test_filter_resets_position_and_all_restores() {
        let cat = catalog();
        let mut c = Carousel::new(&cat, 1200, Instant::now());
        let full = c.item_count();
        c.advance(1);

        c.set_filter(&cat, Filter::Category(Category::Mobiliario));
        assert_eq!(c.current_index(), 0);
        assert!(c.item_count() < full);

        c.advance(1);
        c.set_filter(&cat, Filter::All);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.item_count(), full);
    }

    #[test]
    fn test_filtered_out_to_empty_keeps_invariant() {
        let cat = Catalog::from_json(
            r#"{"products": [
                {"title": "A", "image": "a.jpg", "description": "d", "category": "flores"}
            ]}"#,
        )
        .unwrap();
        let mut c = Carousel::new(&cat, 1200, Instant::now());
        c.set_filter(&cat, Filter::Category(Category::Vajilla));
        assert_eq!(c.item_count(), 0);
        assert_eq!(c.max_index(), 0);
        assert_eq!(c.current_index(), 0);
        assert!(c.visible_window().is_empty());
    }

    #[test]
    fn test_offset_tracks_card_geometry() {
        let mut c = carousel_at(1200);
        assert_eq!(c.offset_px(), 0);
        c.advance(1);
        assert_eq!(c.offset_px(), 352); // 320 + 32
        c.advance(1);
        assert_eq!(c.offset_px(), 704);
    }

    #[test]
    fn test_indicator_targets_round_and_clamp() {
        let mut c = carousel_at(1200);
        let max = c.max_index();
        assert_eq!(c.indicator_target(0), 0);
        assert_eq!(
            c.indicator_target(1),
            ((max as f64) / 3.0).round() as usize
        );
        assert_eq!(c.indicator_target(3), max);

        c.jump_to_segment(2);
        assert_eq!(
            c.current_index(),
            ((2.0 * max as f64) / 3.0).round() as usize
        );
        assert!(c.current_index() <= max);
    }

    #[test]
    fn test_active_segment_bands() {
        let mut c = carousel_at(480);
        assert_eq!(c.active_segment(), 0);
        while c.current_index() < c.max_index() {
            c.advance(1);
        }
        assert_eq!(c.active_segment(), 2);
    }

    #[test]
    fn test_drag_past_threshold_steps_once() {
        let mut c = carousel_at(1200);

        // Leftward drag of 60px advances.
        c.drag_start(300);
        assert!(c.drag_end(240));
        assert_eq!(c.current_index(), 1);

        // 40px is under the threshold.
        c.drag_start(300);
        assert!(!c.drag_end(260));
        assert_eq!(c.current_index(), 1);

        // Rightward drag goes back.
        c.drag_start(240);
        assert!(c.drag_end(300));
        assert_eq!(c.current_index(), 0);

        // Rightward drag at the left bound is a no-op.
        c.drag_start(240);
        assert!(!c.drag_end(300));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_auto_advance_wraps_and_pauses_on_hover() {
        let start = Instant::now();
        let mut c = Carousel::new(&catalog(), 1200, start);
        let later = start + carousel::AUTO_ADVANCE + Duration::from_millis(10);

        assert!(!c.on_tick(start)); // Not yet due
        assert!(c.on_tick(later));
        assert_eq!(c.current_index(), 1);

        c.hover_enter();
        let much_later = later + carousel::AUTO_ADVANCE * 3;
        assert!(!c.on_tick(much_later)); // Paused while hovered
        assert_eq!(c.current_index(), 1);

        c.hover_leave(much_later);
        assert!(!c.on_tick(much_later)); // Freshly re-armed
        assert!(c.on_tick(much_later + carousel::AUTO_ADVANCE));
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_auto_advance_wraps_to_zero_at_end() {
        let start = Instant::now();
        let mut c = Carousel::new(&catalog(), 1200, start);
        while c.current_index() < c.max_index() {
            c.advance(1);
        }
        let later = start + carousel::AUTO_ADVANCE + Duration::from_millis(10);
        assert!(c.on_tick(later));
        assert_eq!(c.current_index(), 0);
    }
}
