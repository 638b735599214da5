//! Resolve command handler.

use anyhow::Result;
use toolhome_core::{InstallerConfig, ToolHomeResolution};

use crate::bootstrap::CliContext;
use crate::commands::ResolveArgs;
use crate::error::CliError;

/// Build the installer configuration described by `args`.
pub fn installer_config(args: &ResolveArgs) -> InstallerConfig {
    let mut config = InstallerConfig::new(args.label.clone());
    config.set_executable_name(Some(&args.executable_name));
    config.set_relative_path(args.relative_path.as_deref());
    config
}

/// Resolve the tool home and print it.
pub async fn execute(ctx: &CliContext, args: &ResolveArgs) -> Result<ToolHomeResolution> {
    let config = installer_config(args);
    let resolution = ctx
        .service
        .resolve(&config, args.search_path.as_deref(), &ctx.cancel)
        .await
        .map_err(CliError::from)?;

    println!("{}", resolution.home);
    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AgentArgs;

    fn args(name: &str, relative_path: Option<&str>) -> ResolveArgs {
        ResolveArgs {
            executable_name: name.to_string(),
            relative_path: relative_path.map(ToString::to_string),
            search_path: None,
            label: "git".to_string(),
            progress: false,
            agent: AgentArgs {
                agent_command: None,
                root_dir: ".".into(),
            },
        }
    }

    #[test]
    fn test_blank_arguments_become_absent() {
        let config = installer_config(&args(" ", Some("")));
        assert_eq!(config.executable_name(), None);
        assert_eq!(config.relative_path(), None);
    }

    #[test]
    fn test_arguments_carry_through() {
        let config = installer_config(&args("git", Some("..")));
        assert_eq!(config.label(), "git");
        assert_eq!(config.executable_name(), Some("git"));
        assert_eq!(config.relative_path(), Some(".."));
    }
}
