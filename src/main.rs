//! locsync CLI
//!
//! Command-line interface for keeping localization resource files in sync.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    match locsync::run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Don't print if it's an empty error (e.g., from clap --help)
            let msg = e.to_string();
            if !msg.is_empty() {
                eprintln!("Error: {}", e);
            }

            // Return appropriate exit code
            let code = e.exit_code();
            ExitCode::from(code as u8)
        },
    }
}
