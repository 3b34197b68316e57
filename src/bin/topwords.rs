use std::io::{BufWriter, Write};
use std::process::exit;

use clap::Parser;
use log::info;

use freqtab::config::TableConfig;
use freqtab::count::{top_k, FrequencyTable};
use freqtab::error::{FreqTabError, FreqTabResult};
use freqtab::input::Source;
use freqtab::report;
use freqtab::tokenize::count_tokens;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Report the most frequent words in a text", long_about = None)]
struct Args {
    /// File to scan, or "-" for standard input.
    input: String,

    /// How many tokens to report.
    #[clap(short = 'n', long, default_value_t = 10)]
    top: usize,

    /// Override the bucket count of the frequency table.
    #[clap(long)]
    capacity: Option<usize>,

    /// Render the report as a bordered table instead of plain lines.
    #[clap(long)]
    pretty: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("{err}");
        exit(1);
    }
}

fn run(args: &Args) -> FreqTabResult<()> {
    let source = if args.input == "-" {
        Source::from_stdin()?
    } else {
        Source::open(&args.input)?
    };

    let config = match args.capacity {
        Some(0) => {
            return Err(FreqTabError::Internal(
                "table capacity must be positive".to_string(),
            ))
        }
        Some(capacity) => TableConfig { capacity },
        None => TableConfig::default(),
    };
    let mut table = FrequencyTable::new(config);

    let total = count_tokens(source.bytes(), &mut table)?;
    info!(
        "scanned {} bytes, {} tokens, {} distinct",
        source.len(),
        total,
        table.occupied()
    );

    let ranked = top_k(table.iter(), args.top);
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.pretty {
        writeln!(out, "{}", report::pretty_format_ranked(&ranked))?;
    } else {
        report::write_ranked(&mut out, &ranked)?;
    }
    out.flush()?;
    Ok(())
}
