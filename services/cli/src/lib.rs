mod cli;
mod commands;

use job_screening::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
