//! "Back to top" button

use crate::settings::BackToTopSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackToTop {
	threshold: f64,
}

impl BackToTop {
	pub fn new(settings: &BackToTopSettings) -> Self {
		Self {
			threshold: settings.threshold,
		}
	}

	/// Whether the button is shown at this scroll position
	pub fn is_visible(&self, scroll_y: f64) -> bool {
		scroll_y > self.threshold
	}

	/// Scroll position to (smoothly) move to when activated
	pub fn target(&self) -> f64 {
		0.0
	}
}

impl Default for BackToTop {
	fn default() -> Self {
		Self::new(&BackToTopSettings::default())
	}
}
