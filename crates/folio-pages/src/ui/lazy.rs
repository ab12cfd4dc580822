//! Deferred loading of `img[data-src]` images

/// An image whose real source is held back until it intersects the
/// viewport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
	pub id: String,
	pub data_src: String,
}

impl LazyImage {
	pub fn new(id: impl Into<String>, data_src: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			data_src: data_src.into(),
		}
	}
}

/// An image ready to load: set `src`, drop `data-src`, stop observing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoad {
	pub id: String,
	pub src: String,
}

/// Observed images that have not loaded yet
#[derive(Debug, Clone, Default)]
pub struct LazyImages {
	pending: Vec<LazyImage>,
}

impl LazyImages {
	pub fn new(images: impl IntoIterator<Item = LazyImage>) -> Self {
		Self {
			pending: images.into_iter().collect(),
		}
	}

	/// Ids still being observed
	pub fn observed(&self) -> impl Iterator<Item = &str> {
		self.pending.iter().map(|image| image.id.as_str())
	}

	pub fn is_empty(&self) -> bool {
		self.pending.is_empty()
	}

	/// Handle a batch of intersection entries `(id, is_intersecting)`.
	///
	/// Intersecting images load once and are unobserved; unknown ids are
	/// ignored.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::ui::lazy::{LazyImage, LazyImages};
	///
	/// let mut images = LazyImages::new([LazyImage::new("hero", "hero.webp")]);
	/// let loads = images.on_intersect(&[("hero", true)]);
	/// assert_eq!(loads[0].src, "hero.webp");
	/// assert!(images.on_intersect(&[("hero", true)]).is_empty());
	/// ```
	pub fn on_intersect(&mut self, entries: &[(&str, bool)]) -> Vec<ImageLoad> {
		let mut loads = Vec::new();
		for &(id, intersecting) in entries {
			if !intersecting {
				continue;
			}
			if let Some(pos) = self.pending.iter().position(|image| image.id == id) {
				let image = self.pending.remove(pos);
				tracing::trace!(id = %image.id, "loading lazy image");
				loads.push(ImageLoad {
					id: image.id,
					src: image.data_src,
				});
			}
		}
		loads
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn images() -> LazyImages {
		LazyImages::new([
			LazyImage::new("avatar", "img/avatar.jpg"),
			LazyImage::new("project-1", "img/p1.png"),
			LazyImage::new("project-2", "img/p2.png"),
		])
	}

	#[rstest]
	fn test_only_intersecting_images_load(mut images: LazyImages) {
		// Act
		let loads = images.on_intersect(&[("avatar", false), ("project-1", true)]);

		// Assert
		assert_eq!(
			loads,
			[ImageLoad {
				id: "project-1".to_string(),
				src: "img/p1.png".to_string()
			}]
		);
		assert_eq!(images.observed().collect::<Vec<_>>(), ["avatar", "project-2"]);
	}

	#[rstest]
	fn test_unknown_ids_ignored(mut images: LazyImages) {
		assert!(images.on_intersect(&[("missing", true)]).is_empty());
		assert_eq!(images.observed().count(), 3);
	}

	#[rstest]
	fn test_all_loaded(mut images: LazyImages) {
		images.on_intersect(&[("avatar", true), ("project-1", true), ("project-2", true)]);

		assert!(images.is_empty());
	}
}
