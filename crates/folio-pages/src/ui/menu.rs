//! Mobile navigation menu

/// Open/closed state of the hamburger menu.
///
/// The toggle button and the menu share the `active` class, so a single
/// flag drives both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
	open: bool,
}

impl MobileMenu {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Hamburger button clicked
	pub fn toggle(&mut self) -> bool {
		self.open = !self.open;
		self.open
	}

	/// Any click on the document; clicks outside the navbar close the menu
	pub fn on_document_click(&mut self, inside_navbar: bool) {
		if !inside_navbar {
			self.close();
		}
	}

	/// An in-page anchor was followed
	pub fn on_anchor_navigation(&mut self) {
		self.close();
	}

	pub fn close(&mut self) {
		self.open = false;
	}
}
