//! Decorative typing effects for the hero section
//!
//! Both effects are stepped with `tick()` so the rendering layer can drive
//! them from its own clock; `run()` drives them on the tokio timer instead.

use std::time::Duration;

pub const NAME_START_DELAY: Duration = Duration::from_millis(500);
pub const NAME_CHAR_DELAY: Duration = Duration::from_millis(150);

pub const SUBTITLE_START_DELAY: Duration = Duration::from_millis(2500);
pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
/// Pause with the whole word shown
pub const WORD_PAUSE: Duration = Duration::from_millis(2000);
/// Pause on the empty line before the next word
pub const NEXT_WORD_DELAY: Duration = Duration::from_millis(500);

pub const DEFAULT_TITLES: [&str; 5] = [
	"Frontend Developer",
	"Software Engineer",
	"UI/UX Enthusiast",
	"Web Designer",
	"Problem Solver",
];

fn prefix(chars: &[char], len: usize) -> String {
	chars[..len].iter().collect()
}

/// Types the hero name once, one character at a time
#[derive(Debug, Clone)]
pub struct Typewriter {
	chars: Vec<char>,
	typed: usize,
}

impl Typewriter {
	pub fn new(text: &str) -> Self {
		Self {
			chars: text.chars().collect(),
			typed: 0,
		}
	}

	pub fn is_done(&self) -> bool {
		self.typed >= self.chars.len()
	}

	/// Text to show after typing the next character, or `None` once the
	/// whole text is shown
	pub fn tick(&mut self) -> Option<String> {
		if self.is_done() {
			return None;
		}
		self.typed += 1;
		Some(prefix(&self.chars, self.typed))
	}

	/// Type the whole text, starting after [`NAME_START_DELAY`]
	pub async fn run<F>(mut self, mut render: F)
	where
		F: FnMut(&str),
	{
		tokio::time::sleep(NAME_START_DELAY).await;
		while let Some(text) = self.tick() {
			render(&text);
			if self.is_done() {
				break;
			}
			tokio::time::sleep(NAME_CHAR_DELAY).await;
		}
	}
}

/// One rendered step of the rotating subtitle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingFrame {
	pub text: String,
	/// Wait before the next step
	pub next_delay: Duration,
}

/// Types, pauses on, and deletes each title in turn, forever
#[derive(Debug, Clone)]
pub struct RotatingTyper {
	titles: Vec<Vec<char>>,
	title_index: usize,
	char_index: usize,
	deleting: bool,
}

impl RotatingTyper {
	/// Empty titles are skipped.
	pub fn new<I, S>(titles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			titles: titles
				.into_iter()
				.map(|title| title.as_ref().chars().collect::<Vec<_>>())
				.filter(|title| !title.is_empty())
				.collect(),
			title_index: 0,
			char_index: 0,
			deleting: false,
		}
	}

	/// Current title index
	pub fn title_index(&self) -> usize {
		self.title_index
	}

	/// Advance one step; `None` when there is nothing to type.
	///
	/// # Examples
	///
	/// ```
	/// use folio_pages::ui::typing::{RotatingTyper, WORD_PAUSE};
	///
	/// let mut typer = RotatingTyper::new(["Hi"]);
	/// assert_eq!(typer.tick().unwrap().text, "H");
	/// let full = typer.tick().unwrap();
	/// assert_eq!(full.text, "Hi");
	/// assert_eq!(full.next_delay, WORD_PAUSE);
	/// ```
	pub fn tick(&mut self) -> Option<TypingFrame> {
		let title = self.titles.get(self.title_index)?;

		let mut next_delay = if self.deleting {
			self.char_index -= 1;
			DELETE_DELAY
		} else {
			self.char_index += 1;
			TYPE_DELAY
		};
		let text = prefix(title, self.char_index);

		if !self.deleting && self.char_index == title.len() {
			self.deleting = true;
			next_delay = WORD_PAUSE;
		} else if self.deleting && self.char_index == 0 {
			self.deleting = false;
			self.title_index = (self.title_index + 1) % self.titles.len();
			next_delay = NEXT_WORD_DELAY;
		}

		Some(TypingFrame { text, next_delay })
	}

	/// Cycle through the titles, starting after [`SUBTITLE_START_DELAY`].
	///
	/// Runs until the task is aborted, or returns immediately without titles.
	pub async fn run<F>(mut self, mut render: F)
	where
		F: FnMut(&str),
	{
		if self.titles.is_empty() {
			return;
		}
		tokio::time::sleep(SUBTITLE_START_DELAY).await;
		while let Some(frame) = self.tick() {
			render(&frame.text);
			tokio::time::sleep(frame.next_delay).await;
		}
	}
}

impl Default for RotatingTyper {
	fn default() -> Self {
		Self::new(DEFAULT_TITLES)
	}
}
