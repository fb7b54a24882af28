use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{FormCommands, StepCommands};

/// Fill in multi-step forms from the command line
///
/// Each form is a linear sequence of steps: a step opens only after every step
/// before it is completed, an optional confirmation step closes the sequence
/// and the form ends with a submission. Forms are stored between invocations,
/// so a session can be resumed at any time.
#[derive(Parser)]
#[command(version, about, name = "sw")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stepwise/stepwise.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without a command, active forms are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage forms
    #[command(alias = "f")]
    Form {
        #[command(subcommand)]
        command: FormCommands,
    },
    /// Navigate and complete the steps of a form
    #[command(alias = "s")]
    Step {
        #[command(subcommand)]
        command: StepCommands,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_step_complete_with_index() {
        let args = Args::try_parse_from(["sw", "step", "complete", "3", "--index", "1"]).unwrap();
        match args.command {
            Some(Commands::Step {
                command: StepCommands::Complete(step),
            }) => {
                assert_eq!(step.id, 3);
                assert_eq!(step.index, Some(1));
            }
            _ => panic!("expected step complete"),
        }
    }

    #[test]
    fn test_create_requires_a_title() {
        assert!(Args::try_parse_from(["sw", "form", "create", "Signup"]).is_err());
    }
}
