//! Page settings
//!
//! Settings are layered: built-in defaults, then an optional TOML document,
//! then `FOLIO_`-prefixed environment overrides.
//!
//! ```toml
//! [submission]
//! display_timeout_ms = 5000
//! simulated_latency_ms = 2000
//!
//! [limits]
//! message_max = 2000
//!
//! [theme]
//! default = "dark"
//! ```

use crate::ui::theme::Theme;
use folio_forms::form::ContactLimits;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "FOLIO_";

#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {value:?}")]
	InvalidOverride { key: String, value: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
	pub submission: SubmissionSettings,
	pub limits: ContactLimits,
	pub nav: NavSettings,
	pub reveal: RevealSettings,
	pub back_to_top: BackToTopSettings,
	pub theme: ThemeSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionSettings {
	/// How long the success/failure message stays visible
	pub display_timeout_ms: u64,
	/// Delay of the simulated transport
	pub simulated_latency_ms: u64,
}

impl Default for SubmissionSettings {
	fn default() -> Self {
		Self {
			display_timeout_ms: 5000,
			simulated_latency_ms: 2000,
		}
	}
}

impl SubmissionSettings {
	pub fn display_timeout(&self) -> Duration {
		Duration::from_millis(self.display_timeout_ms)
	}

	pub fn simulated_latency(&self) -> Duration {
		Duration::from_millis(self.simulated_latency_ms)
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavSettings {
	/// Scroll offset past which the navbar gets its `scrolled` style
	pub sticky_offset: f64,
	/// How far above a section's top it already counts as current
	pub section_offset: f64,
}

impl Default for NavSettings {
	fn default() -> Self {
		Self {
			sticky_offset: 100.0,
			section_offset: 200.0,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
	/// Distance from the bottom of the viewport at which elements reveal
	pub point: f64,
}

impl Default for RevealSettings {
	fn default() -> Self {
		Self { point: 100.0 }
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackToTopSettings {
	pub threshold: f64,
}

impl Default for BackToTopSettings {
	fn default() -> Self {
		Self { threshold: 500.0 }
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
	/// Theme used when no preference has been stored yet
	pub default: Theme,
}

impl PageSettings {
	/// Parse settings from a TOML document; missing keys keep their defaults
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::settings::PageSettings;
	///
	/// let settings = PageSettings::from_toml("[submission]\ndisplay_timeout_ms = 3000\n").unwrap();
	/// assert_eq!(settings.submission.display_timeout_ms, 3000);
	/// assert_eq!(settings.submission.simulated_latency_ms, 2000);
	/// ```
	pub fn from_toml(source: &str) -> SettingsResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Defaults, then `source` if given, then the process environment
	pub fn load(source: Option<&str>) -> SettingsResult<Self> {
		let settings = match source {
			Some(source) => Self::from_toml(source)?,
			None => Self::default(),
		};
		settings.with_overrides(std::env::vars())
	}

	/// Apply `FOLIO_*` overrides from the given key/value pairs.
	///
	/// Unknown keys are ignored; known keys with unparsable values fail.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::settings::PageSettings;
	/// use folio_pages::ui::theme::Theme;
	///
	/// let settings = PageSettings::default()
	///     .with_overrides([("FOLIO_THEME".to_string(), "dark".to_string())])
	///     .unwrap();
	/// assert_eq!(settings.theme.default, Theme::Dark);
	/// ```
	pub fn with_overrides<I>(mut self, vars: I) -> SettingsResult<Self>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (key, value) in vars {
			let Some(name) = key.strip_prefix(ENV_PREFIX) else {
				continue;
			};

			let invalid = || SettingsError::InvalidOverride {
				key: key.clone(),
				value: value.clone(),
			};

			match name.to_lowercase().as_str() {
				"display_timeout_ms" => {
					self.submission.display_timeout_ms =
						value.trim().parse().map_err(|_| invalid())?;
				}
				"simulated_latency_ms" => {
					self.submission.simulated_latency_ms =
						value.trim().parse().map_err(|_| invalid())?;
				}
				"theme" => {
					self.theme.default = value.trim().parse().map_err(|_| invalid())?;
				}
				_ => {}
			}
		}
		Ok(self)
	}
}
