use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use wordgrid::io_utils::{cli_error, cli_hint, CliError};
use wordgrid::{read_grid, read_words, GridIndex, SearchConfig, SearchStats};

/// Find the most frequent words in a letter grid, reading rows left to
/// right and columns top to bottom.
#[derive(Parser)]
struct Args {
    /// Grid file, one row per line
    grid: PathBuf,
    /// Word list, a JSON array of strings
    words: PathBuf,
    /// JSON config file with max_size and number_of_results
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum number of rows and columns
    #[arg(long)]
    max_size: Option<usize>,
    /// Number of results to print
    #[arg(long)]
    results: Option<usize>,
    /// Print each word with its count
    #[arg(long)]
    counts: bool,
    /// Print results as a JSON array
    #[arg(long)]
    json: bool,
    /// Optional CSV output path for ranked results
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Show progress and timing on stderr
    #[arg(long)]
    status: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            SearchConfig::load(path).map_err(|e| cli_error("reading config", path, e))?
        }
        None => SearchConfig::default(),
    };
    if let Some(max_size) = args.max_size {
        config.max_size = max_size;
    }
    if let Some(results) = args.results {
        config.number_of_results = results;
    }
    config
        .validate()
        .map_err(|e| CliError::new(format!("Invalid search limits: {}", cli_hint(&e))))?;

    let rows = read_grid(&args.grid).map_err(|e| cli_error("reading grid", &args.grid, e))?;
    let words =
        read_words(&args.words).map_err(|e| cli_error("reading word list", &args.words, e))?;
    let index = GridIndex::with_config(&rows, config)
        .map_err(|e| cli_error("building grid", &args.grid, e))?;

    if args.status {
        eprintln!(
            "Loaded {}x{} grid and {} words",
            index.row_count(),
            index.column_count(),
            words.len()
        );
    }

    let mut stats = SearchStats::new();
    let bar = if args.status {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} letter groups {elapsed}")?,
        );
        bar
    } else {
        ProgressBar::hidden()
    };
    let ranked = index.find_with_stats(&words, &mut stats, |done, total| {
        bar.set_length(total as u64);
        bar.set_position(done as u64);
    });
    bar.finish_and_clear();

    if args.status {
        stats.report();
    }

    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| cli_error("creating csv", path, e))?;
        let mut wtr = csv::Writer::from_writer(f);
        wtr.write_record(["word", "count"])?;
        for entry in &ranked {
            let count = entry.count.to_string();
            wtr.write_record([entry.word.as_str(), count.as_str()])?;
        }
        wtr.flush().map_err(|e| cli_error("writing csv", path, e))?;
    }

    let mut stdout = std::io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut stdout, &ranked)?;
        writeln!(stdout)?;
    } else {
        for entry in &ranked {
            if args.counts {
                writeln!(stdout, "{} {}", entry.word, entry.count)?;
            } else {
                writeln!(stdout, "{}", entry.word)?;
            }
        }
    }

    Ok(())
}
