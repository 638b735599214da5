//! CLI entry point - the composition root.
//!
//! stdout carries exactly one line on success (the resolved path); logs,
//! progress and errors go to stderr. The exit code tells the failure kind.

use clap::Parser;

use toolhome_cli::{Cli, CliError, Commands, bootstrap, handlers, init_tracing};

async fn run(cli: Cli) -> anyhow::Result<()> {
    let verbose = cli.verbose;
    match cli.command {
        Commands::Resolve(args) => {
            let ctx = bootstrap(&args.agent, args.progress, verbose)?;
            ctx.cancel_on_ctrl_c();
            handlers::resolve::execute(&ctx, &args).await?;
        }
        Commands::Locate {
            executable_name,
            search_path,
        } => {
            handlers::locate::execute(&executable_name, search_path.as_deref())?;
        }
        Commands::Agent { root_dir } => {
            handlers::agent::execute(&root_dir).await?;
        }
    }
    Ok(())
}

/// Print `err` and pick the process exit code.
fn report(err: &anyhow::Error, verbose: bool) -> i32 {
    eprintln!("error: {err:#}");
    tracing::debug!(error = ?err, "Command failed");

    let Some(cli_err) = err.downcast_ref::<CliError>() else {
        return 1;
    };
    match cli_err {
        CliError::NotFound(not_found) if verbose => {
            eprintln!("Candidates checked:\n{}", not_found.attempts_report());
        }
        _ => {}
    }
    cli_err.exit_code()
}

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let verbose = cli.verbose;
    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => report(&e, verbose),
    };
    std::process::exit(code);
}
