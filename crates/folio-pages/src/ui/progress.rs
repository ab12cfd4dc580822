//! Skill bars, filled once when the skills section first scrolls into view

use super::in_view;

/// Skill progress bars, filled to their `data-progress` percentage
#[derive(Debug, Clone)]
pub struct ProgressBars {
	percents: Vec<u8>,
	animated: bool,
}

impl ProgressBars {
	/// Percentages above 100 are clamped
	pub fn new(percents: impl IntoIterator<Item = u8>) -> Self {
		Self {
			percents: percents.into_iter().map(|p| p.min(100)).collect(),
			animated: false,
		}
	}

	pub fn is_animated(&self) -> bool {
		self.animated
	}

	/// Widths to apply, the first time the skills section is in view
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::ui::progress::ProgressBars;
	///
	/// let mut bars = ProgressBars::new([90, 75]);
	/// assert_eq!(bars.on_scroll(1200.0, 800.0), None);
	/// assert_eq!(bars.on_scroll(500.0, 800.0), Some(vec!["90%".to_string(), "75%".to_string()]));
	/// assert_eq!(bars.on_scroll(100.0, 800.0), None);
	/// ```
	pub fn on_scroll(&mut self, section_top: f64, viewport_height: f64) -> Option<Vec<String>> {
		if self.animated || !in_view(section_top, viewport_height) {
			return None;
		}
		self.animated = true;
		Some(self.percents.iter().map(|p| format!("{p}%")).collect())
	}
}
