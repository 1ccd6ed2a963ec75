//! agent-alarm CLI entry point

use std::env;
use std::process::ExitCode;

use clap::Parser;

use agent_alarm::cli::{
    app::{run_notify, EXIT_ERROR, EXIT_SUCCESS},
    args::{Cli, NotifyOptions},
    logging::init_logging,
    presenter::Presenter,
};

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { EXIT_ERROR } else { EXIT_SUCCESS };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    init_logging(cli.verbose);

    let working_directory = match cli.cwd {
        Some(path) => path,
        None => match env::current_dir() {
            Ok(path) => path,
            Err(e) => {
                Presenter::new().error(&format!("Cannot determine working directory: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };

    let options = NotifyOptions {
        trigger: cli.trigger.into(),
        message: cli.message,
        working_directory,
    };

    run_notify(options).await
}
