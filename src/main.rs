pub mod core;
pub mod handler;
pub mod inmemory_db;
pub mod session;

use clap::Parser;
use log::LevelFilter;
use tokio::io::BufReader;

use crate::session::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[clap(name = "activity-tracker", version, about = "Track short-lived activities from the terminal")]
struct Cli {
    #[clap(long, default_value = "warn", help = "Diagnostic log level, written to stderr")]
    log_level: String,

    #[clap(long, help = "Do not print the start-up banner")]
    no_banner: bool,

    #[clap(long, help = "Prompt printed before each command is read")]
    prompt: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let mut session = Session::new(SessionOptions {
        banner: !cli.no_banner,
        prompt: cli.prompt,
    });

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();
    session.run(input, &mut output).await
}
