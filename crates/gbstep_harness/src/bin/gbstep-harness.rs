use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use gbstep::WordOrder;
use gbstep_harness::{json, protocol};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Format {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum Order {
    #[default]
    Little,
    Big,
}

impl From<Order> for WordOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Little => WordOrder::Little,
            Order::Big => WordOrder::Big,
        }
    }
}

/// Run one instruction per start-state line and print the finish state.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Start states, one per line (stdin when omitted)
    input: Option<PathBuf>,

    /// Line format for both input and output
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Byte order of 16-bit memory accesses
    #[arg(long, value_enum, default_value_t = Order::Little)]
    word_order: Order,
}

fn step_line(line: &str, format: Format, word_order: WordOrder) -> anyhow::Result<String> {
    let start = match format {
        Format::Text => protocol::decode_start(line)?,
        Format::Json => json::decode_start(line)?,
    };
    let finish = gbstep_harness::run(&start, word_order)?;
    Ok(match format {
        Format::Text => protocol::encode_finish(&finish),
        Format::Json => json::encode_finish(&finish)?,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let word_order = WordOrder::from(args.word_order);
    log::debug!("format={:?} word_order={word_order:?}", args.format);
    let mut failed = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.context("failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }
        let number = index + 1;
        match step_line(&line, args.format, word_order) {
            Ok(finish) => writeln!(out, "{finish}").context("failed to write output")?,
            Err(err) => {
                eprintln!("line {number}: {err:#}");
                failed += 1;
            }
        }
    }
    out.flush().context("failed to flush output")?;

    if failed > 0 {
        bail!("{failed} line(s) failed");
    }
    Ok(())
}
