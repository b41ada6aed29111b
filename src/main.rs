//! Propel CLI entry point.

use std::io::Write;
use std::process::ExitCode;

use console::style;
use propel::argv::{build_parse_argv, get_flag_value, has_flag, ParseArgvInput};
use propel::cli::{root_command, Dispatcher, PROGRAM_NAME};
use propel::environment::snapshot_process_env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--log-level <level>` sets `propel=<level>`
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
fn init_tracing(log_level: Option<&str>) {
    let filter = log_level
        .and_then(|level| EnvFilter::try_new(format!("propel={level}")).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("propel=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(dispatcher: &mut Dispatcher, argv: Vec<String>) -> propel::Result<ExitCode> {
    let plan = dispatcher.dispatch(argv)?;

    if plan.is_root_help_or_version() {
        let args = plan.argv.iter().skip(1);
        if let Err(e) = root_command(plan.version.clone()).try_get_matches_from(args) {
            e.exit();
        }
    }

    for (key, value) in &plan.env_overrides {
        std::env::set_var(key, value);
    }

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &plan).map_err(anyhow::Error::from)?;
    writeln!(stdout)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let raw_args = std::iter::once(PROGRAM_NAME.to_string()).chain(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    let argv = build_parse_argv(&ParseArgvInput::new(PROGRAM_NAME).with_raw_args(raw_args));

    init_tracing(get_flag_value(&argv, "--log-level").value());

    if has_flag(&argv, "--no-color") {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    tracing::debug!("Propel starting with args: {:?}", argv);

    let mut dispatcher = Dispatcher::new(snapshot_process_env());
    match run(&mut dispatcher, argv) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::from(1)
        }
    }
}
