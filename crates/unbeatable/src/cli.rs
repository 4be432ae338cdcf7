//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand, ValueEnum};
use unbeatable_core::Side;

/// Unbeatable - tic-tac-toe against a computer that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe against a perfect-play computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the TOML config file (defaults are used if it doesn't exist)
        #[arg(short, long, default_value = "unbeatable.toml")]
        config: std::path::PathBuf,
    },

    /// Print the best move for a position
    Suggest {
        /// Board in row-major notation, e.g. "X../.O./..X" (X player, O computer, . empty)
        board: String,

        /// Side to move (inferred from the mark counts if omitted)
        #[arg(short, long, value_enum)]
        side: Option<SideArg>,
    },

    /// Play every possible human line against the engine and report the results
    Verify,
}

/// Side selector for the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// The human player (X)
    Player,
    /// The computer (O)
    Ai,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Player => Side::Player,
            SideArg::Ai => Side::Ai,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_suggest_with_side() {
        let cli = Cli::try_parse_from(["unbeatable", "suggest", "X../.../...", "--side", "ai"])
            .unwrap();
        match cli.command {
            Command::Suggest { board, side } => {
                assert_eq!(board, "X../.../...");
                assert_eq!(side.map(Side::from), Some(Side::Ai));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_play_uses_default_config_path() {
        let cli = Cli::try_parse_from(["unbeatable", "play"]).unwrap();
        match cli.command {
            Command::Play { config } => assert_eq!(config, std::path::PathBuf::from("unbeatable.toml")),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
