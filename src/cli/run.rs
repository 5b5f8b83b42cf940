use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, generate::generate, init::init, page::page},
};

/// Dispatch to the command handler for the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with diagnostics and error/warning counts
/// - `Err` if the command fails (e.g., config invalid, index unreachable,
///   schema name collision)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Generate(cmd)) => generate(cmd),
        Some(Command::Page(cmd)) => page(cmd),
        Some(Command::Init) => init(),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
