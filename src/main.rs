use clap::Parser;

use schooldesk::cli::{output, run, Cli};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    if let Err(e) = run::execute(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
