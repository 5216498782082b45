//! Search Form Controller
//!
//! Client side of `/api/search`: on submit, the current query is posted as plain
//! text and the response lines are rendered as paragraphs.
//!
//! ## Submodules
//! - **`controller`**: `SearchFormController`, the submit and render logic.
//! - **`dom`**: Handles for the `#query` input, the `#output` area and the submit event.
//! - **`transport`**: `SearchTransport` and its HTTP implementation.

pub mod controller;
pub mod dom;
pub mod transport;

pub use controller::{split_result_lines, SearchFormController};
pub use dom::{
    BufferedOutput, OutputArea, OutputContent, QueryInput, SubmitEvent, TextInput, LOADING_TEXT,
};
pub use transport::{HttpTransport, SearchTransport};
