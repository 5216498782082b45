use docsearch::cli::{execute, exit_code, parse_args, usage};
use docsearch::config::{init_tracing, Config};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "docsearch".to_string());

    let command = match parse_args(args) {
        Ok(command) => command,
        Err(err) => {
            eprint!("{}", usage(&program));
            return exit_code(&Err(err));
        }
    };

    let config = Config::from_env();
    let result = execute(command, &config, &mut std::io::stdout()).await;
    exit_code(&result)
}
