mod cli;
mod demo;

use talent::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
