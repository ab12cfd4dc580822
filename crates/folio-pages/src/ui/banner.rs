//! Developer console greeting and page-load timing

use std::time::Duration;

pub const GREETING: [&str; 3] = [
	"Hello Developer!",
	"Looking at the code? I like your curiosity!",
	"Feel free to reach out if you want to collaborate!",
];

/// Emit the greeting at `info` level
pub fn log_greeting() {
	for line in GREETING {
		tracing::info!(target: "folio::console", "{line}");
	}
}

/// Time from navigation start to the end of `DOMContentLoaded`, both in
/// milliseconds since the epoch. Clock skew yields zero.
pub fn load_time(navigation_start_ms: u64, dom_content_loaded_end_ms: u64) -> Duration {
	Duration::from_millis(dom_content_loaded_end_ms.saturating_sub(navigation_start_ms))
}

/// Log how long the page took to load and return it
pub fn log_load_time(navigation_start_ms: u64, dom_content_loaded_end_ms: u64) -> Duration {
	let elapsed = load_time(navigation_start_ms, dom_content_loaded_end_ms);
	tracing::info!(
		target: "folio::console",
		load_ms = elapsed.as_millis() as u64,
		"Page loaded in {}ms",
		elapsed.as_millis()
	);
	elapsed
}
