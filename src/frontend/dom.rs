//! Handles to the page elements the controller works with.
//!
//! The controller never looks elements up by itself: whoever builds it passes
//! the `#query` input and the `#output` area in, and the handles live exactly as
//! long as the controller holds them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

/// Text shown in the output area while a request is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// The `#query` text input.
pub trait QueryInput: Send + Sync {
    /// Current value, read at submission time.
    fn value(&self) -> String;
}

/// The `#output` container.
pub trait OutputArea: Send + Sync {
    /// Replaces the whole content with a single text node.
    fn set_text(&self, text: &str);

    /// Replaces the whole content with one paragraph per line, in order.
    /// Lines are plain text and must never be interpreted as markup.
    fn replace_paragraphs(&self, lines: &[String]);
}

/// The `#submit` event.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the submission from navigating away from the page.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// An input whose value is set programmatically.
#[derive(Debug, Default)]
pub struct TextInput {
    value: RwLock<String>,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: RwLock::new(value.into()),
        }
    }

    pub fn set(&self, value: impl Into<String>) {
        *self.value.write().unwrap_or_else(PoisonError::into_inner) = value.into();
    }
}

impl QueryInput for TextInput {
    fn value(&self) -> String {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// What an output area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OutputContent {
    #[default]
    Empty,
    Text(String),
    Paragraphs(Vec<String>),
}

/// An output area that keeps its content in memory.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    content: RwLock<OutputContent>,
    renders: AtomicUsize,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> OutputContent {
        self.content
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of times the content was replaced.
    pub fn render_count(&self) -> usize {
        self.renders.load(Ordering::SeqCst)
    }

    fn replace(&self, content: OutputContent) {
        *self.content.write().unwrap_or_else(PoisonError::into_inner) = content;
        self.renders.fetch_add(1, Ordering::SeqCst);
    }
}

impl OutputArea for BufferedOutput {
    fn set_text(&self, text: &str) {
        self.replace(OutputContent::Text(text.to_string()));
    }

    fn replace_paragraphs(&self, lines: &[String]) {
        self.replace(OutputContent::Paragraphs(lines.to_vec()));
    }
}
