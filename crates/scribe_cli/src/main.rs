use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    scribe_cli::run().await
}
