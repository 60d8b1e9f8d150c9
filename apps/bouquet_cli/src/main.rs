use std::path::PathBuf;

use anyhow::{Context, Result};
use bouquet_core::BouquetSession;
use clap::Parser;
use shared::protocol::BouquetSignal;
use tokio::{
    io::{stdin, AsyncBufReadExt, BufReader},
    sync::broadcast::{self, error::RecvError, error::TryRecvError},
};
use tokio_stream::{wrappers::LinesStream, StreamExt};
use tracing::{info, warn};

mod commands;
mod config;
mod render;

use commands::{parse_command, CliCommand, HELP};
use config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bouquet", about = "Build a flower bouquet one group at a time")]
struct Args {
    #[arg(long, default_value = "bouquet.toml")]
    config: PathBuf,
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
    #[arg(long)]
    wrapping: Option<String>,
    #[arg(long)]
    log_filter: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = config::load_settings(&args.config)?;
    if let Some(output) = args.output {
        settings.output = output;
    }
    if let Some(wrapping) = args.wrapping {
        settings.default_wrapping = wrapping;
    }
    if let Some(filter) = args.log_filter {
        settings.log_filter = filter;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.env_filter()?)
        .with_writer(std::io::stderr)
        .init();
    info!(
        output = ?settings.output,
        wrapping = %settings.default_wrapping,
        "bouquet session starting"
    );

    let mut session = BouquetSession::with_wrapping(settings.default_wrapping.clone());
    let mut signals = session.subscribe();
    let mut lines = LinesStream::new(BufReader::new(stdin()).lines());

    if settings.output == OutputFormat::Text {
        println!("Welcome! Type `start` to begin your bouquet, or `help`.");
    }

    loop {
        tokio::select! {
            line = lines.next() => {
                let Some(line) = line else { break };
                let line = line.context("failed to read command from stdin")?;
                match parse_command(&line) {
                    Ok(None) => {}
                    Ok(Some(CliCommand::Input(input))) => {
                        session.handle(input);
                    }
                    Ok(Some(CliCommand::Show)) => {
                        println!(
                            "{}",
                            render::render_draft(
                                session.groups(),
                                session.wrapping(),
                                session.description(),
                            )
                        );
                    }
                    Ok(Some(CliCommand::Help)) => println!("{HELP}"),
                    Ok(Some(CliCommand::Quit)) => break,
                    Err(err) => eprintln!("error: {err:#}"),
                }
            }
            signal = signals.recv() => match signal {
                Ok(signal) => print_signal(&signal, settings.output)?,
                Err(RecvError::Lagged(skipped)) => warn!(skipped, "signal output fell behind"),
                Err(RecvError::Closed) => break,
            },
        }
    }

    drain_signals(&mut signals, settings.output)
}

fn drain_signals(
    signals: &mut broadcast::Receiver<BouquetSignal>,
    format: OutputFormat,
) -> Result<()> {
    loop {
        match signals.try_recv() {
            Ok(signal) => print_signal(&signal, format)?,
            Err(TryRecvError::Lagged(skipped)) => warn!(skipped, "signal output fell behind"),
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return Ok(()),
        }
    }
}

fn print_signal(signal: &BouquetSignal, format: OutputFormat) -> Result<()> {
    if let Some(line) = render::render_signal(signal, format)? {
        println!("{line}");
    }
    Ok(())
}
