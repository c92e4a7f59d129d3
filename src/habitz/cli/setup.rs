use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "habitz", bin_name = "habitz", version)]
#[command(about = "Track daily habits and their streaks", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List habits with their streaks (default)
    #[command(alias = "ls")]
    List,

    /// Start tracking a new habit
    #[command(alias = "n")]
    Create {
        /// Name of the habit (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Mark a habit as done today
    #[command(alias = "check")]
    Done {
        /// Name of the habit (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Show how much of today is left to keep the streak going
    Clock {
        /// Name of the habit (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Clear every recorded day of a habit
    Reset {
        /// Name of the habit (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Stop tracking a habit
    #[command(alias = "rm")]
    Remove {
        /// Name of the habit (case-insensitive)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },

    /// Check the habit file and rewrite it in canonical form
    Doctor,

    /// Print the path of the habit file
    Path,
}

/// Multi-word names arrive as separate args: `habitz done read a book`.
pub fn join_name(parts: &[String]) -> String {
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_multi_word_names() {
        let cli = Cli::try_parse_from(["habitz", "done", "read", "a", "book"]).unwrap();
        match cli.command {
            Some(Commands::Done { name }) => assert_eq!(join_name(&name), "read a book"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_means_list() {
        let cli = Cli::try_parse_from(["habitz", "-v"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.verbose);
    }

    #[test]
    fn aliases() {
        let cli = Cli::try_parse_from(["habitz", "rm", "Read"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Remove { .. })));
        let cli = Cli::try_parse_from(["habitz", "ls"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn name_is_required() {
        assert!(Cli::try_parse_from(["habitz", "create"]).is_err());
    }
}
