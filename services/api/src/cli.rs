use crate::explore::{run_candidate, run_explore, CandidateArgs, ExploreArgs};
use crate::server;
use candidate_explorer::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Candidate Explorer",
    about = "Browse, filter and compare election candidates from the command line",
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
    /// Filter the dataset and print options, charts, one result page and the comparison
    Explore(ExploreArgs),
    /// Print every detail of one candidate
    Candidate(CandidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured candidate dataset (JSON or CSV)
    #[arg(long)]
    pub(crate) dataset: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Explore(args) => run_explore(args),
        Command::Candidate(args) => run_candidate(args),
    }
}
