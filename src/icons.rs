//! Decorative glyphs with a probed plain-text fallback.
//!
//! Mirrors the site's icon-font fallback: shortly after startup the
//! terminal's glyph support is probed, and on failure every decorative
//! icon swaps to an ASCII stand-in. Purely cosmetic - nothing downstream
//! depends on which set is active.

use std::time::Instant;

use tracing::warn;

use crate::constants::icons::PROBE_DELAY;

/// The active glyph set.
pub struct IconSet {
    fancy: bool,
    probe_due: Option<Instant>,
}

impl IconSet {
    /// Starts optimistic (fancy glyphs) with the probe armed.
    pub fn new(now: Instant) -> Self {
        Self {
            fancy: true,
            probe_due: Some(now + PROBE_DELAY),
        }
    }

    /// Delayed probe: checks terminal capability once, then disarms.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.probe_due else {
            return false;
        };
        if now < due {
            return false;
        }
        self.probe_due = None;
        if !terminal_supports_glyphs() {
            warn!("terminal glyph support not detected, using text fallbacks");
            self.fancy = false;
            return true;
        }
        false
    }

    #[cfg(test)]
    fn with_fancy(fancy: bool) -> Self {
        Self {
            fancy,
            probe_due: None,
        }
    }

    pub fn logo(&self) -> &'static str {
        if self.fancy { "✦" } else { "*" }
    }

    pub fn star(&self) -> &'static str {
        if self.fancy { "★" } else { "*" }
    }

    pub fn bullet(&self) -> &'static str {
        if self.fancy { "◆" } else { "-" }
    }

    pub fn check(&self) -> &'static str {
        if self.fancy { "✓" } else { "+" }
    }

    pub fn email(&self) -> &'static str {
        if self.fancy { "✉" } else { "@" }
    }

    pub fn phone(&self) -> &'static str {
        if self.fancy { "✆" } else { "#" }
    }

    pub fn pin(&self) -> &'static str {
        if self.fancy { "⚑" } else { "^" }
    }

    pub fn prev(&self) -> &'static str {
        if self.fancy { "‹" } else { "<" }
    }

    pub fn next(&self) -> &'static str {
        if self.fancy { "›" } else { ">" }
    }

    pub fn dot_active(&self) -> &'static str {
        if self.fancy { "●" } else { "o" }
    }

    pub fn dot_inactive(&self) -> &'static str {
        if self.fancy { "○" } else { "." }
    }

    pub fn menu(&self) -> &'static str {
        if self.fancy { "≡" } else { "=" }
    }
}

/// Environment heuristic for glyph support.
fn terminal_supports_glyphs() -> bool {
    let locale = std::env::var("LC_ALL")
        .or_else(|_| std::env::var("LC_CTYPE"))
        .or_else(|_| std::env::var("LANG"))
        .ok();
    let term = std::env::var("TERM").ok();
    supports_glyphs(locale.as_deref(), term.as_deref())
}

/// A UTF-8 locale on anything but the bare console is taken as support.
fn supports_glyphs(locale: Option<&str>, term: Option<&str>) -> bool {
    let utf8 = locale
        .map(|l| {
            let l = l.to_ascii_lowercase();
            l.contains("utf-8") || l.contains("utf8")
        })
        .unwrap_or(false);
    let console = matches!(term, Some("linux") | Some("dumb"));
    utf8 && !console
}
