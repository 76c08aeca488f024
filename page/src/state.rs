//! UI state for the two interactive bits of the page: the rotating hero
//! tagline and the mobile navigation menu.
//!
//! Both are plain values so they can be tested without a browser; the
//! components wrap them in Leptos signals.

use std::time::Duration;

/// Phrases cycled above the hero title.
pub const TAGLINES: [&str; 3] = [
    "See beyond what the eyes can see.",
    "Seek insight.",
    "See beyond the mirage.",
];

/// Time between tagline changes.
pub const TAGLINE_INTERVAL: Duration = Duration::from_millis(3000);

/// Position in a fixed list of taglines.
///
/// `index < lines.len()` holds whenever the list is non-empty; an empty list
/// pins the index at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaglineRotation {
    lines: &'static [&'static str],
    index: usize,
}

impl TaglineRotation {
    /// Start at the first phrase of `lines`.
    pub fn new(lines: &'static [&'static str]) -> Self {
        Self { lines, index: 0 }
    }

    /// Index of the phrase on screen.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of phrases in the rotation.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` for a rotation with nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Step to the next phrase, wrapping at the end. Returns the new index.
    pub fn advance(&mut self) -> usize {
        if !self.lines.is_empty() {
            self.index = (self.index + 1) % self.lines.len();
        }
        self.index
    }

    /// Phrase at the current index, or `""` for an empty list.
    pub fn current(&self) -> &'static str {
        self.lines.get(self.index).copied().unwrap_or("")
    }
}

impl Default for TaglineRotation {
    fn default() -> Self {
        Self::new(&TAGLINES)
    }
}

/// Mobile menu visibility. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    /// Whether the mobile panel is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip between open and closed (menu button).
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close after a link in the panel is followed.
    pub fn close(&mut self) {
        self.open = false;
    }
}
