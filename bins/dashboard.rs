use clap::Parser;
use colored::Colorize;
use dashboard::cli::{run, Cli};
use dotenvy::dotenv;

#[tokio::main]
async fn main() -> std::process::ExitCode {
    dotenv().ok();
    // stdout carries the dashboard; logs only when RUST_LOG asks for them
    if std::env::var("RUST_LOG").is_ok() {
        common::utils::logging::init_logging_from_env();
    }

    let cli = Cli::parse();
    match run(cli).await {
        Ok(out) => {
            print!("{out}");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            std::process::ExitCode::FAILURE
        }
    }
}
