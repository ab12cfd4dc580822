//! Sticky navbar and active-section highlighting

use crate::settings::NavSettings;

/// A page section as laid out on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
	pub id: String,
	/// Offset of the section's top from the top of the document
	pub top: f64,
}

impl Section {
	pub fn new(id: impl Into<String>, top: f64) -> Self {
		Self {
			id: id.into(),
			top,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
	/// Whether the navbar carries the `scrolled` style
	pub scrolled: bool,
	/// Id of the section the reader is in, if any
	pub active: Option<String>,
}

impl NavState {
	/// Whether a nav link pointing at `href` is highlighted
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::ui::nav::NavState;
	///
	/// let state = NavState { scrolled: true, active: Some("about".to_string()) };
	/// assert!(state.is_link_active("#about"));
	/// assert!(!state.is_link_active("#skills"));
	/// ```
	pub fn is_link_active(&self, href: &str) -> bool {
		match (&self.active, href.strip_prefix('#')) {
			(Some(active), Some(target)) => active == target,
			_ => false,
		}
	}
}

#[derive(Debug, Clone)]
pub struct StickyNav {
	sticky_offset: f64,
	section_offset: f64,
}

impl StickyNav {
	pub fn new(settings: &NavSettings) -> Self {
		Self {
			sticky_offset: settings.sticky_offset,
			section_offset: settings.section_offset,
		}
	}

	/// Recompute the navbar for a scroll position.
	///
	/// The active section is the last one, in document order, whose top
	/// minus the section offset has been scrolled past.
	pub fn on_scroll(&self, scroll_y: f64, sections: &[Section]) -> NavState {
		let active = sections
			.iter()
			.rev()
			.find(|section| scroll_y >= section.top - self.section_offset)
			.map(|section| section.id.clone());

		NavState {
			scrolled: scroll_y > self.sticky_offset,
			active,
		}
	}
}

impl Default for StickyNav {
	fn default() -> Self {
		Self::new(&NavSettings::default())
	}
}
