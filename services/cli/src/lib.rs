mod cli;
mod demo;

use vantage::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
