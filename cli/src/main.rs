use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

use veto_cli::args::Args;
use veto_cli::exitcodes;
use veto_cli::render;
use veto_cli::session::{Session, SessionError};

fn main() -> ExitCode {
    let args = Args::parse();

    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(args.level_filter())
        .with(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target().starts_with("veto")
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("veto: could not install logger: {e}");
    }

    match run(&args) {
        Ok(()) => ExitCode::from(exitcodes::OK),
        Err(e) => {
            eprintln!("veto: error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), SessionError> {
    let mut session = Session::prepare(args)?;

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(std::io::BufReader::new(std::fs::File::open(path)?)),
        None => Box::new(std::io::stdin().lock()),
    };

    // Keep stdout clean for the JSON document
    if args.json {
        session.run(input, &mut std::io::stderr().lock())?;
    } else {
        session.run(input, &mut std::io::stdout().lock())?;
    }

    let summary = session.finish()?;
    tracing::info!(id = %summary.id, "Match ready");

    let mut stdout = std::io::stdout().lock();
    if args.json {
        let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::from)?;
        writeln!(stdout, "{json}")?;
    } else {
        for line in render::summary_lines(&summary) {
            writeln!(stdout, "{line}")?;
        }
    }

    Ok(())
}
