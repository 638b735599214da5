//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Locate tool home directories on build agents.
#[derive(Parser, Debug)]
#[command(name = "toolhome")]
#[command(about = "Locate a tool's home directory from an executable on an agent's PATH")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ResolveArgs;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_args() {
        let cli = Cli::parse_from([
            "toolhome",
            "resolve",
            "git",
            "--relative-path",
            "..",
            "--agent-command",
            "ssh build-01 toolhome agent",
            "--progress",
            "-v",
        ]);

        assert!(cli.verbose);
        let Commands::Resolve(ResolveArgs {
            executable_name,
            relative_path,
            progress,
            agent,
            label,
            ..
        }) = cli.command
        else {
            panic!("expected resolve");
        };
        assert_eq!(executable_name, "git");
        assert_eq!(relative_path.as_deref(), Some(".."));
        assert!(progress);
        assert_eq!(label, "default");
        assert_eq!(
            agent.agent_command.as_deref(),
            Some("ssh build-01 toolhome agent")
        );
    }

    #[test]
    fn test_resolve_requires_a_name() {
        assert!(Cli::try_parse_from(["toolhome", "resolve"]).is_err());
    }

    #[test]
    fn test_agent_root_dir_flag() {
        let cli = Cli::parse_from(["toolhome", "agent", "--root-dir", "/srv/agent"]);
        let Commands::Agent { root_dir } = cli.command else {
            panic!("expected agent");
        };
        assert_eq!(root_dir, std::path::PathBuf::from("/srv/agent"));
    }
}
