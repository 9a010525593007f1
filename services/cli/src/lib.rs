mod cli;
mod output;

use nomad_pack::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
