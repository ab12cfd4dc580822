//! The portfolio page as a whole: every reflector, configured from
//! [`PageSettings`], behind one scroll handler.

use crate::settings::PageSettings;
use crate::ui::{
	BackToTop, CounterAnimation, LazyImage, LazyImages, MobileMenu, NavState, ProgressBars,
	ScrollReveal, Section, StatCounters, StickyNav, ThemeStore, ThemeToggle,
};

/// What the page contains, collected once at startup
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
	/// Number of `.reveal` elements
	pub reveal_count: usize,
	/// `data-progress` of each skill bar
	pub skill_percents: Vec<u8>,
	/// `data-target` of each stat
	pub stat_targets: Vec<u32>,
	pub lazy_images: Vec<LazyImage>,
}

/// Layout numbers read on a scroll event
#[derive(Debug, Clone, Copy)]
pub struct ScrollSnapshot<'a> {
	pub scroll_y: f64,
	pub viewport_height: f64,
	pub sections: &'a [Section],
	/// Viewport-relative tops of the `.reveal` elements
	pub reveal_tops: &'a [f64],
	/// Viewport-relative top of the skills section, if present
	pub skills_top: Option<f64>,
	/// Viewport-relative top of the about section, if present
	pub about_top: Option<f64>,
}

/// Everything a scroll event changed
#[derive(Debug)]
pub struct ScrollEffects {
	pub nav: NavState,
	pub revealed: Vec<usize>,
	pub skill_widths: Option<Vec<String>>,
	pub counters: Option<Vec<CounterAnimation>>,
	pub back_to_top_visible: bool,
}

#[derive(Debug)]
pub struct PortfolioPage {
	pub nav: StickyNav,
	pub menu: MobileMenu,
	pub theme: ThemeToggle,
	pub reveal: ScrollReveal,
	pub skills: ProgressBars,
	pub stats: StatCounters,
	pub back_to_top: BackToTop,
	pub images: LazyImages,
}

impl PortfolioPage {
	pub fn new(settings: &PageSettings, layout: PageLayout, store: &dyn ThemeStore) -> Self {
		Self {
			nav: StickyNav::new(&settings.nav),
			menu: MobileMenu::new(),
			theme: ThemeToggle::init(store, settings.theme.default),
			reveal: ScrollReveal::new(layout.reveal_count, &settings.reveal),
			skills: ProgressBars::new(layout.skill_percents),
			stats: StatCounters::new(layout.stat_targets),
			back_to_top: BackToTop::new(&settings.back_to_top),
			images: LazyImages::new(layout.lazy_images),
		}
	}

	pub fn on_scroll(&mut self, snapshot: &ScrollSnapshot<'_>) -> ScrollEffects {
		let vh = snapshot.viewport_height;
		ScrollEffects {
			nav: self.nav.on_scroll(snapshot.scroll_y, snapshot.sections),
			revealed: self.reveal.on_scroll(vh, snapshot.reveal_tops),
			skill_widths: snapshot
				.skills_top
				.and_then(|top| self.skills.on_scroll(top, vh)),
			counters: snapshot.about_top.and_then(|top| self.stats.on_scroll(top, vh)),
			back_to_top_visible: self.back_to_top.is_visible(snapshot.scroll_y),
		}
	}

	/// An in-page anchor link was clicked; returns the section to scroll to.
	///
	/// The menu closes only when the target exists.
	pub fn on_anchor_click<'s>(
		&mut self,
		href: &str,
		sections: &'s [Section],
	) -> Option<&'s Section> {
		let id = href.strip_prefix('#')?;
		let target = sections.iter().find(|section| section.id == id)?;
		self.menu.on_anchor_navigation();
		Some(target)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ui::{MemoryThemeStore, Theme};
	use rstest::{fixture, rstest};

	#[fixture]
	fn sections() -> Vec<Section> {
		vec![Section::new("home", 0.0), Section::new("about", 900.0)]
	}

	#[fixture]
	fn page() -> PortfolioPage {
		let layout = PageLayout {
			reveal_count: 2,
			skill_percents: vec![80],
			stat_targets: vec![12],
			lazy_images: vec![LazyImage::new("me", "me.jpg")],
		};
		PortfolioPage::new(&PageSettings::default(), layout, &MemoryThemeStore::new())
	}

	#[rstest]
	fn test_scroll_drives_every_reflector(mut page: PortfolioPage, sections: Vec<Section>) {
		// Arrange
		let snapshot = ScrollSnapshot {
			scroll_y: 750.0,
			viewport_height: 800.0,
			sections: &sections,
			reveal_tops: &[-100.0, 1200.0],
			skills_top: Some(1500.0),
			about_top: Some(150.0),
		};

		// Act
		let effects = page.on_scroll(&snapshot);

		// Assert
		assert!(effects.nav.scrolled);
		assert_eq!(effects.nav.active.as_deref(), Some("about"));
		assert_eq!(effects.revealed, [0]);
		assert!(effects.skill_widths.is_none());
		assert_eq!(effects.counters.map(|c| c.len()), Some(1));
		assert!(effects.back_to_top_visible);
	}

	#[rstest]
	fn test_missing_sections_never_animate(mut page: PortfolioPage) {
		let snapshot = ScrollSnapshot {
			scroll_y: 0.0,
			viewport_height: 800.0,
			sections: &[],
			reveal_tops: &[],
			skills_top: None,
			about_top: None,
		};

		let effects = page.on_scroll(&snapshot);

		assert!(effects.skill_widths.is_none());
		assert!(effects.counters.is_none());
		assert!(!page.stats.is_animated());
	}

	#[rstest]
	fn test_anchor_click_closes_menu(mut page: PortfolioPage, sections: Vec<Section>) {
		// Arrange
		page.menu.toggle();

		// Act
		let target = page.on_anchor_click("#about", &sections);

		// Assert
		assert_eq!(target.map(|s| s.top), Some(900.0));
		assert!(!page.menu.is_open());
	}

	#[rstest]
	#[case("#")]
	#[case("#missing")]
	#[case("about")]
	fn test_anchor_without_target_keeps_menu_open(
		mut page: PortfolioPage,
		sections: Vec<Section>,
		#[case] href: &str,
	) {
		// Arrange
		page.menu.toggle();

		// Act
		let target = page.on_anchor_click(href, &sections);

		// Assert
		assert!(target.is_none());
		assert!(page.menu.is_open());
	}

	#[rstest]
	fn test_theme_default_comes_from_settings() {
		let mut settings = PageSettings::default();
		settings.theme.default = Theme::Dark;

		let page = PortfolioPage::new(&settings, PageLayout::default(), &MemoryThemeStore::new());

		assert_eq!(page.theme.current(), Theme::Dark);
	}
}
