mod cli;
mod explore;
mod infra;
mod routes;
mod server;

use candidate_explorer::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
