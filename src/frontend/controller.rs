use super::dom::{OutputArea, QueryInput, SubmitEvent, LOADING_TEXT};
use super::transport::SearchTransport;

use std::sync::Arc;
use tokio::task::JoinHandle;

/// Wires a query input and an output area to the search endpoint.
///
/// Every submission starts its own request. Nothing is queued or cancelled:
/// with several requests in flight, the output area ends up showing whichever
/// response resolved last, which is not necessarily the latest submission.
#[derive(Clone)]
pub struct SearchFormController {
    input: Arc<dyn QueryInput>,
    output: Arc<dyn OutputArea>,
    transport: Arc<dyn SearchTransport>,
}

impl SearchFormController {
    pub fn new(
        input: Arc<dyn QueryInput>,
        output: Arc<dyn OutputArea>,
        transport: Arc<dyn SearchTransport>,
    ) -> Self {
        Self {
            input,
            output,
            transport,
        }
    }

    /// Handles a submission: shows [`LOADING_TEXT`] and starts the search in
    /// the background.
    ///
    /// Must be called from within a tokio runtime. The returned handle may be
    /// dropped; the search keeps running.
    pub fn on_submit(&self, event: &mut SubmitEvent) -> JoinHandle<()> {
        event.prevent_default();
        self.output.set_text(LOADING_TEXT);

        let query = self.input.value();
        let controller = self.clone();
        tokio::spawn(async move { controller.search(&query).await })
    }

    /// Sends `query` and renders one paragraph per non-empty response line.
    ///
    /// Failures are logged and leave the output area as it was.
    pub async fn search(&self, query: &str) {
        match self.transport.post_query(query).await {
            Ok(body) => {
                let lines = split_result_lines(&body);
                tracing::debug!("Rendering {} result lines", lines.len());
                self.output.replace_paragraphs(&lines);
            }
            Err(err) => tracing::error!("Search request failed: {:#}", err),
        }
    }
}

/// Splits a response body on `'\n'`, dropping empty lines.
pub fn split_result_lines(body: &str) -> Vec<String> {
    body.split('\n')
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
