mod ast_files;
mod cli;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command_result::CommandResult;
pub(crate) use commands::RunnableCommand;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(cli).await,
        None => match cli.run_default().await {
            Ok(()) => return std::process::ExitCode::SUCCESS,
            Err(err) => CommandResult::failure(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        },
    };

    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// Maps a `LOG_LEVEL` environment value to a log level. `Err` carries the
/// unrecognized value.
fn parse_log_level(env_val: &str) -> Result<tracing::Level, &str> {
    match env_val.trim() {
        "DEBUG" | "debug" => Ok(tracing::Level::DEBUG),
        "INFO" | "info" => Ok(tracing::Level::INFO),
        "TRACE" | "trace" => Ok(tracing::Level::TRACE),
        "VERBOSE" | "verbose" => Ok(tracing::Level::DEBUG),
        other => Err(other),
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let mut invalid_env_val = None;
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match env_val.as_deref().map(parse_log_level) {
                Some(Ok(level)) => level,
                Some(Err(other)) => {
                    invalid_env_val = Some(other);
                    DEFAULT_LOG_LEVEL
                },
                None => DEFAULT_LOG_LEVEL,
            }
        };

    // Logs go to stderr so that `inspect` output can be piped.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(other) = invalid_env_val {
        log::warn!("Invalid `LOG_LEVEL` environment variable value: `{other}`");
    }
}
