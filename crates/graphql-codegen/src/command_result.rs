use std::process::ExitCode;

/// What a subcommand prints, and the exit code the process ends with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// Output that was produced for some inputs while others failed. Any
    /// failure makes the exit code fail.
    pub fn partial(stdout: String, failures: &[anyhow::Error]) -> Self {
        if failures.is_empty() {
            return Self::success(format_args!("{stdout}"));
        }

        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(crate::output_utils::format_failures(failures)),
            stdout: (!stdout.is_empty()).then_some(stdout),
        }
    }

    pub fn success(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }
}
