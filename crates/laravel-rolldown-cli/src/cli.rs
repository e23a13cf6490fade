//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Laravel asset bridge for Rolldown.
#[derive(Debug, Parser)]
#[command(name = "laravel-rolldown", version, about)]
pub struct Cli {
    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the public directory and announce the dev server to Laravel
    Dev(DevArgs),

    /// Print the resolved bundler configuration fragment as JSON
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct DevArgs {
    /// Asset entrypoints to compile (leading slashes are stripped)
    #[arg(required = true)]
    pub entry: Vec<String>,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind (0 picks a free port)
    #[arg(long, default_value_t = 5173)]
    pub port: u16,

    /// Project working directory
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,

    /// Laravel public directory, relative to the working directory
    #[arg(long, default_value = "public")]
    pub public_dir: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Asset entrypoints to compile (leading slashes are stripped)
    #[arg(required = true)]
    pub entry: Vec<String>,

    /// Host command the fragment is produced for
    #[arg(long, value_enum, default_value_t = CommandKind::Serve)]
    pub command: CommandKind,

    /// Mode used for env-file scoping
    #[arg(long, default_value = "development")]
    pub mode: String,

    /// Project working directory
    #[arg(long, default_value = ".")]
    pub cwd: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommandKind {
    Build,
    Serve,
}

impl From<CommandKind> for laravel_rolldown::BuildCommand {
    fn from(kind: CommandKind) -> Self {
        match kind {
            CommandKind::Build => Self::Build,
            CommandKind::Serve => Self::Serve,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dev_args_defaults() {
        let cli = Cli::parse_from(["laravel-rolldown", "dev", "resources/js/app.js"]);
        let Command::Dev(args) = cli.command else {
            panic!("expected dev command");
        };
        assert_eq!(args.entry, ["resources/js/app.js"]);
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 5173);
        assert_eq!(args.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_config_args_command_kind() {
        let cli = Cli::parse_from([
            "laravel-rolldown",
            "config",
            "resources/js/app.js",
            "--command",
            "build",
            "--mode",
            "production",
        ]);
        let Command::Config(args) = cli.command else {
            panic!("expected config command");
        };
        assert_eq!(args.command, CommandKind::Build);
        assert_eq!(args.mode, "production");
    }

    #[test]
    fn test_entry_is_required() {
        assert!(Cli::try_parse_from(["laravel-rolldown", "dev"]).is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "laravel-rolldown",
            "config",
            "a.js",
            "--verbose",
            "--no-color",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }
}
