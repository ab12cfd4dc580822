//! Peripheral page behaviour
//!
//! Each reflector owns its own state, takes layout and scroll numbers from
//! the rendering layer and returns what to show. None of them touch the
//! contact form.

pub mod back_to_top;
pub mod banner;
pub mod counter;
pub mod lazy;
pub mod menu;
pub mod nav;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod typing;

pub use back_to_top::BackToTop;
pub use counter::{CounterAnimation, StatCounters};
pub use lazy::{ImageLoad, LazyImage, LazyImages};
pub use menu::MobileMenu;
pub use nav::{NavState, Section, StickyNav};
pub use progress::ProgressBars;
pub use reveal::ScrollReveal;
pub use theme::{MemoryThemeStore, Theme, ThemeError, ThemeStore, ThemeToggle};
pub use typing::{RotatingTyper, Typewriter, TypingFrame};

/// Whether a section whose top edge is at `section_top`, relative to the
/// viewport, has entered the screen
pub(crate) fn in_view(section_top: f64, viewport_height: f64) -> bool {
	section_top < viewport_height
}
