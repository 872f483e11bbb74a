use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use varsel::{run_pipeline, Config};

fn main() {
    // Logs go to stderr; stdout carries the report stream.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Optional: VARSEL_INPUT (default: stdin)");
            eprintln!("Optional: VARSEL_OUTPUT (default: stdout)");
            std::process::exit(1);
        }
    };

    tracing::info!("Starting varsel pipeline");
    match &config.input_path {
        Some(path) => tracing::info!("Input: {}", path.display()),
        None => tracing::info!("Input: stdin"),
    }

    let reader = match open_input(&config) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Input error: {}", e);
            std::process::exit(1);
        }
    };
    let writer = match open_output(&config) {
        Ok(writer) => writer,
        Err(e) => {
            eprintln!("Output error: {}", e);
            std::process::exit(1);
        }
    };

    match run_pipeline(reader, writer) {
        Ok(produced) => tracing::info!("Stream complete, {} reports produced", produced),
        Err(e) => {
            tracing::error!("Pipeline failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn open_input(config: &Config) -> io::Result<Box<dyn BufRead>> {
    match &config.input_path {
        Some(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
        None => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn open_output(config: &Config) -> io::Result<Box<dyn Write>> {
    match &config.output_path {
        Some(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
        None => Ok(Box::new(io::stdout())),
    }
}
