//! CLI Adapter.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::commands::service::ServiceAction;
use crate::app::{api, logging};
use crate::domain::{AppError, LifecycleEvent, OperatorSettings};

#[derive(Parser)]
#[command(name = "snmpd-operator")]
#[command(version)]
#[command(about = "Install, configure and control snmpd from Juju hooks", long_about = None)]
struct Cli {
    /// TOML file overriding operator settings (paths, package and service names)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,
    /// Read charm options from a YAML file instead of config-get
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the handler for a lifecycle hook
    Hook {
        /// install, config-changed or stop
        event: LifecycleEvent,
    },
    /// Run the hook named by JUJU_DISPATCH_PATH
    Dispatch,
    /// Print the rendered snmpd.conf without changing the host
    Render,
    /// Control the managed service directly
    Service {
        #[command(subcommand)]
        command: ServiceCommand,
    },
}

#[derive(Subcommand)]
enum ServiceCommand {
    /// Start the service
    Start,
    /// Stop the service
    Stop,
    /// Restart the service
    Restart,
    /// Print whether the service is active
    Status,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse_from(hook_alias_args(std::env::args_os().collect()));
    logging::init_logging(cli.verbose);

    if let Err(e) = execute(cli) {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let settings = OperatorSettings::load(cli.settings.as_deref())?;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Hook { event } => api::run_hook(event, settings, config),
        Commands::Dispatch => {
            if api::dispatch_from_env(settings, config)?.is_none() {
                println!("ℹ️ Nothing to do for this hook");
            }
            Ok(())
        }
        Commands::Render => {
            print!("{}", api::render_preview(&settings, config)?);
            Ok(())
        }
        Commands::Service { command } => {
            let action = match command {
                ServiceCommand::Start => ServiceAction::Start,
                ServiceCommand::Stop => ServiceAction::Stop,
                ServiceCommand::Restart => ServiceAction::Restart,
                ServiceCommand::Status => {
                    let state =
                        if api::service_is_active(&settings)? { "active" } else { "inactive" };
                    println!("{}: {}", settings.service, state);
                    return Ok(());
                }
            };
            api::control_service(&settings, action)?;
            println!("✅ {} {}", settings.service, action.past_tense());
            Ok(())
        }
    }
}

/// Rewrite argv when the binary is invoked through a hook symlink.
///
/// `hooks/install` becomes `snmpd-operator hook install`, and `dispatch`
/// becomes `snmpd-operator dispatch`.
fn hook_alias_args(args: Vec<OsString>) -> Vec<OsString> {
    let Some(invoked_as) = args
        .first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
    else {
        return args;
    };

    let mut prefix: Vec<OsString> = vec!["snmpd-operator".into()];
    if invoked_as == "dispatch" {
        prefix.push("dispatch".into());
    } else if LifecycleEvent::ALL.iter().any(|event| event.hook_name() == invoked_as) {
        prefix.push("hook".into());
        prefix.push(invoked_as.into());
    } else {
        return args;
    }

    prefix.extend(args.into_iter().skip(1));
    prefix
}
