use crate::demo::{run_demo, run_search, DemoArgs, SearchArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use homequest::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "HomeQuest Marketplace",
    about = "Run and exercise the HomeQuest property marketplace from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Search the sample catalog or a CSV export from the terminal
    Search(SearchArgs),
    /// Run an end-to-end CLI demo covering listings, search, auth, and engagement
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Search(args) => run_search(args),
        Command::Demo(args) => run_demo(args),
    }
}
