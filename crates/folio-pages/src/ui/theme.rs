//! Light/dark theme toggle with a persisted preference

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Mutex;

/// Storage key of the preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
	#[default]
	Light,
	Dark,
}

impl Theme {
	pub fn as_str(&self) -> &'static str {
		match self {
			Theme::Light => "light",
			Theme::Dark => "dark",
		}
	}

	pub fn toggled(&self) -> Self {
		match self {
			Theme::Light => Theme::Dark,
			Theme::Dark => Theme::Light,
		}
	}

	/// Icon shown on the toggle: the theme you would switch to
	pub fn icon(&self) -> &'static str {
		match self {
			Theme::Light => "moon",
			Theme::Dark => "sun",
		}
	}

	/// Class added to `<body>`, if any
	pub fn body_class(&self) -> Option<&'static str> {
		match self {
			Theme::Light => None,
			Theme::Dark => Some("dark-theme"),
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
	#[error("Unknown theme: {0}")]
	Unknown(String),
	#[error("Preference storage failed: {0}")]
	Storage(String),
}

impl FromStr for Theme {
	type Err = ThemeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"light" => Ok(Theme::Light),
			"dark" => Ok(Theme::Dark),
			other => Err(ThemeError::Unknown(other.to_string())),
		}
	}
}

/// Key/value preference storage (`localStorage` on the page)
pub trait ThemeStore: Send + Sync {
	fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;
	fn save(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

#[derive(Debug, Default)]
pub struct MemoryThemeStore {
	entries: Mutex<HashMap<String, String>>,
}

impl MemoryThemeStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl ThemeStore for MemoryThemeStore {
	fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
		Ok(self
			.entries
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.get(key)
			.cloned())
	}

	fn save(&self, key: &str, value: &str) -> Result<(), ThemeError> {
		self.entries
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Current theme, read once from the store and written on every toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
	current: Theme,
}

impl ThemeToggle {
	/// Read the stored preference; missing or unrecognised values fall back
	/// to `default`.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::ui::theme::{MemoryThemeStore, Theme, ThemeStore, ThemeToggle};
	///
	/// let store = MemoryThemeStore::new();
	/// store.save("theme", "dark").unwrap();
	///
	/// let toggle = ThemeToggle::init(&store, Theme::Light);
	/// assert_eq!(toggle.current(), Theme::Dark);
	/// ```
	pub fn init(store: &dyn ThemeStore, default: Theme) -> Self {
		let current = match store.load(THEME_KEY) {
			Ok(Some(value)) => value.parse().unwrap_or_else(|error| {
				tracing::warn!(%error, "ignoring stored theme preference");
				default
			}),
			Ok(None) => default,
			Err(error) => {
				tracing::warn!(%error, "theme preference unavailable");
				default
			}
		};
		Self { current }
	}

	pub fn current(&self) -> Theme {
		self.current
	}

	/// Flip the theme and persist it; the in-page theme changes even if
	/// the store rejects the write.
	pub fn toggle(&mut self, store: &dyn ThemeStore) -> Result<Theme, ThemeError> {
		self.current = self.current.toggled();
		store.save(THEME_KEY, self.current.as_str())?;
		Ok(self.current)
	}
}
