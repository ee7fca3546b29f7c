use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use unilog::{LogSink, LoggerBuilder, SinkKind, get_instance};

fn prompt_for_choice() -> Result<String, Box<dyn Error>> {
    print!("Choose a log sink (console/file/uppercase_file): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().lock().read_line(&mut choice)?;
    Ok(choice.trim().to_lowercase())
}

fn run() -> Result<(), Box<dyn Error>> {
    // An optional positional argument overrides the timestamped default
    // filename for file-backed sinks.
    let path = env::args().nth(1);

    let choice = prompt_for_choice()?;
    if SinkKind::from_str(&choice).is_none() {
        eprintln!("Unrecognized sink choice `{choice}`; using console.");
    }

    let mut builder = LoggerBuilder::new().with_choice(&choice);
    if let Some(path) = path {
        builder = builder.with_path(path);
    }

    let sink = builder.build_sink()?;
    let target = sink.id().to_string();
    let logger = get_instance(sink);

    logger.trace("program starting")?;
    logger.info("program started successfully")?;
    logger.warn("database connection may be unstable")?;
    logger.error("operation failed")?;
    logger.fatal("critical failure, shutting down")?;

    if target != "-" {
        println!("log written to {target}");
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("unilog_demo error: {e}");
        std::process::exit(1);
    }
}
