//! Submission workflow and page interaction state
//!
//! This module provides access to folio-pages.
//!
//! ## Architecture
//!
//! - **Workflow**: Validates, submits through a [`Transport`], reflects the result
//!   and clears the status message after a timeout
//! - **Surface**: The write-back seam between the workflow and the page
//! - **Reflectors**: Navbar, menu, theme, reveal and the other page effects
//! - **Settings**: TOML plus `FOLIO_` environment overrides
//!
//! ## Example
//!
//! ```
//! use folio::pages::{PageSettings, PortfolioPage, PageLayout, ScrollSnapshot};
//! use folio::pages::ui::{MemoryThemeStore, Section};
//!
//! let settings = PageSettings::default();
//! let mut page = PortfolioPage::new(&settings, PageLayout::default(), &MemoryThemeStore::new());
//!
//! let sections = [Section::new("home", 0.0)];
//! let effects = page.on_scroll(&ScrollSnapshot {
//!     scroll_y: 120.0,
//!     viewport_height: 900.0,
//!     sections: &sections,
//!     reveal_tops: &[],
//!     skills_top: None,
//!     about_top: None,
//! });
//! assert!(effects.nav.scrolled);
//! ```

// Re-export all folio-pages functionality
pub use folio_pages::*;
