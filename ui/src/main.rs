//! Terminal front-end for a running `docsearch serve`.
//!
//! Every line read from stdin is submitted through the search form controller;
//! results are printed as paragraphs separated by blank lines.

use docsearch::config::{init_tracing, Config};
use docsearch::frontend::{
    HttpTransport, OutputArea, SearchFormController, SubmitEvent, TextInput,
};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Output area backed by stdout. Each render is written under a single
/// stdout lock so concurrent renders do not interleave.
struct TerminalOutput;

impl TerminalOutput {
    fn write(&self, text: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(err) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
            tracing::error!("Failed to write output: {}", err);
        }
    }
}

impl OutputArea for TerminalOutput {
    fn set_text(&self, text: &str) {
        self.write(&format!("{text}\n"));
    }

    fn replace_paragraphs(&self, lines: &[String]) {
        if lines.is_empty() {
            self.write("(no results)\n\n");
            return;
        }

        let mut rendered = String::new();
        for line in lines {
            rendered.push_str(line);
            rendered.push_str("\n\n");
        }
        self.write(&rendered);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let server_url = std::env::args().nth(1).unwrap_or(config.server_url);

    let transport = HttpTransport::new(&server_url);
    tracing::info!("Searching against {}", transport.endpoint());

    let input = Arc::new(TextInput::default());
    let controller = SearchFormController::new(
        input.clone(),
        Arc::new(TerminalOutput),
        Arc::new(transport),
    );

    let mut pending = Vec::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        input.set(line);
        pending.retain(|handle: &tokio::task::JoinHandle<()>| !handle.is_finished());
        pending.push(controller.on_submit(&mut SubmitEvent::new()));
    }

    // stdin closed: let the requests still in flight render before exiting.
    for handle in pending {
        let _ = handle.await;
    }

    Ok(())
}
