mod inspect;
mod validate;

use crate::Cli;
use crate::CommandResult;
use inspect::InspectCmd;
use validate::ValidateCmd;

pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-codegen")]
pub(crate) enum CommandEnum {
    /// Print the operations, fragments, and used types of AST payload files.
    Inspect(Box<InspectCmd>),

    /// Check that AST payload files decode, that every type reference
    /// renders, and that every by-name reference resolves.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Inspect(cmd) => cmd.run(cli).await,
            Self::Validate(cmd) => cmd.run(cli).await,
        }
    }
}
