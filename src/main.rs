//! Dotforge binary entry point

use dotforge::{cli, ui};

#[tokio::main]
async fn main() {
    if let Err(e) = cli::main().await {
        ui::print_error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
