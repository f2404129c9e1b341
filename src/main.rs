#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! argsreading: apply declared flags and options to a command line and
//! report what an `ArgsReader` pulls out of it.

mod cli;
mod errors;
mod inspect;
mod types;

use tracing_subscriber::EnvFilter;

use cli::{Cli, Invocation, OutputCtx, write_error};
use errors::ToolError;
use types::ErrorOutput;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match cli::parse(args.clone()) {
        Ok(Invocation::Help) => {
            print!("{}", cli::HELP);
            return;
        }
        Ok(Invocation::Version) => {
            println!("argsreading {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Ok(Invocation::Inspect(cli)) => cli,
        Err(err) => {
            let (format, json) = cli::error_format(&args);
            write_error(&ErrorOutput::from_tool_error(&err), format, json);
            std::process::exit(err.exit_code());
        }
    };

    setup_logging(cli.debug);

    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    if let Err(err) = run(&cli, &ctx) {
        let (error_output, code) = match err.downcast_ref::<ToolError>() {
            Some(tool_err) => (ErrorOutput::from_tool_error(tool_err), tool_err.exit_code()),
            None => (ErrorOutput::internal(&err), 1),
        };
        write_error(&error_output, ctx.format, false);
        std::process::exit(code);
    }
}

fn run(cli: &Cli, ctx: &OutputCtx) -> anyhow::Result<()> {
    let result = {
        let _timer = ctx.timer("inspect");
        inspect::inspect(cli).map_err(ToolError::target)?
    };
    cli::write_inspect(&result, ctx)
}

/// All log output goes to stderr, keeping stdout clean for results.
fn setup_logging(debug: bool) {
    let level = if debug { "argsreading=trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
