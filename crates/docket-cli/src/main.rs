//! Docket CLI - Classify and validate estate documents.

use clap::Parser;
use docket_cli::commands;
use docket_cli::{fixtures, Cli, Command, Config, Formatter};
use docket_router::{Router, RouterConfig};
use tracing::{debug, warn};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> docket_cli::Result<()> {
    let cli = Cli::parse();
    docket_cli::init_logging(cli.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable CLI config");
        Config::default()
    });

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let router_config = match cli.config.as_ref().or(config.pipeline.as_ref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading pipeline config");
            RouterConfig::from_file(path)?
        }
        None => RouterConfig::default(),
    };
    let mut router = Router::from_config(&router_config)?;

    let documents = match &cli.file {
        Some(path) => fixtures::load_file(path)?,
        None => fixtures::builtin()?,
    };

    let output = match cli.command {
        None => commands::execute_process(
            cli.document_id.as_deref(),
            &documents,
            &mut router,
            &formatter,
        )?,
        Some(Command::Process(args)) => commands::execute_process(
            args.document_id.as_deref(),
            &documents,
            &mut router,
            &formatter,
        )?,
        Some(Command::List) => commands::execute_list(&documents, &formatter)?,
        Some(Command::Info) => commands::execute_info(&router, &formatter)?,
    };

    println!("{}", output);
    Ok(())
}
