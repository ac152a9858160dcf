use std::process::ExitCode;

use clap::Parser;

use vt::app;
use vt::cli::Args;
use vt::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match app::run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            app::report(&e);
            ExitCode::FAILURE
        }
    }
}
