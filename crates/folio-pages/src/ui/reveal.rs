//! Scroll-triggered reveal of `.reveal` elements

use crate::settings::RevealSettings;

/// Tracks which elements have been revealed; revealing is one-way.
#[derive(Debug, Clone)]
pub struct ScrollReveal {
	point: f64,
	revealed: Vec<bool>,
}

impl ScrollReveal {
	pub fn new(element_count: usize, settings: &RevealSettings) -> Self {
		Self {
			point: settings.point,
			revealed: vec![false; element_count],
		}
	}

	pub fn is_revealed(&self, index: usize) -> bool {
		self.revealed.get(index).copied().unwrap_or(false)
	}

	/// Check every element against the viewport.
	///
	/// `tops` are the elements' top edges relative to the viewport, in the
	/// same order as at construction. Returns the indices revealed by this
	/// call only.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::settings::RevealSettings;
	/// use folio_pages::ui::reveal::ScrollReveal;
	///
	/// let mut reveal = ScrollReveal::new(2, &RevealSettings::default());
	/// assert_eq!(reveal.on_scroll(800.0, &[650.0, 750.0]), vec![0]);
	/// assert_eq!(reveal.on_scroll(800.0, &[100.0, 600.0]), vec![1]);
	/// ```
	pub fn on_scroll(&mut self, viewport_height: f64, tops: &[f64]) -> Vec<usize> {
		let limit = viewport_height - self.point;
		self.revealed
			.iter_mut()
			.zip(tops)
			.enumerate()
			.filter_map(|(index, (revealed, &top))| {
				if !*revealed && top < limit {
					*revealed = true;
					Some(index)
				} else {
					None
				}
			})
			.collect()
	}
}
