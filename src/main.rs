use std::fs::File;
use std::io::{self, Write};
use std::process;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use memmap2::Mmap;

use lindiff::{
    diff_summary, diff_with, hunks, logging, render, tokenize, DiffError, DiffOptions,
    Format, Granularity,
};

// ── input helpers ────────────────────────────────────────────────────────

/// Read-only view of an input file.  Empty files are not mapped.
enum Input {
    Mapped(Mmap),
    Empty,
}

impl Input {
    fn open(path: &str) -> Result<Self, DiffError> {
        let file = File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Input::Empty);
        }
        // SAFETY: the map is read-only and dropped before exit; inputs are
        // not expected to change while the diff runs.
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(Input::Mapped(mmap))
    }

    fn bytes(&self) -> &[u8] {
        match self {
            Input::Mapped(m) => &m[..],
            Input::Empty => &[],
        }
    }
}

fn open_or_exit(path: &str) -> Input {
    Input::open(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(2);
    })
}

fn tokenize_or_exit<'a>(path: &str, data: &'a [u8], by: Granularity) -> Vec<&'a [u8]> {
    tokenize(data, by).unwrap_or_else(|e| {
        eprintln!("Error tokenizing {}: {}", path, e);
        process::exit(2);
    })
}

// ── CLI types ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, ValueEnum)]
enum GranularityArg {
    Lines,
    Words,
    Chars,
    Bytes,
}

impl From<GranularityArg> for Granularity {
    fn from(g: GranularityArg) -> Self {
        match g {
            GranularityArg::Lines => Granularity::Lines,
            GranularityArg::Words => Granularity::Words,
            GranularityArg::Chars => Granularity::Chars,
            GranularityArg::Bytes => Granularity::Bytes,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Listing,
    Compact,
}

impl From<FormatArg> for Format {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Listing => Format::Listing,
            FormatArg::Compact => Format::Compact,
        }
    }
}

#[derive(Parser)]
#[command(about = "Minimal edit scripts in linear space (Myers 1986)")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit script turning OLD into NEW
    Diff {
        /// Original file
        old: String,

        /// Modified file
        new: String,

        /// Token granularity
        #[arg(long, value_enum, default_value_t = GranularityArg::Lines)]
        by: GranularityArg,

        /// Output format
        #[arg(long, value_enum, default_value_t = FormatArg::Compact)]
        format: FormatArg,

        /// Trim the common prefix and suffix before searching
        #[arg(long)]
        strip_affixes: bool,

        /// Log diagnostics to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Show edit script statistics
    Stats {
        /// Original file
        old: String,

        /// Modified file
        new: String,

        /// Token granularity
        #[arg(long, value_enum, default_value_t = GranularityArg::Lines)]
        by: GranularityArg,

        /// Trim the common prefix and suffix before searching
        #[arg(long)]
        strip_affixes: bool,

        /// Log diagnostics to stderr
        #[arg(long)]
        verbose: bool,
    },
}

// ── main ─────────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Diff {
            old,
            new,
            by,
            format,
            strip_affixes,
            verbose,
        } => {
            logging::init(verbose);
            let by: Granularity = by.into();
            let old_input = open_or_exit(&old);
            let new_input = open_or_exit(&new);
            let a = tokenize_or_exit(&old, old_input.bytes(), by);
            let b = tokenize_or_exit(&new, new_input.bytes(), by);

            let opts = DiffOptions {
                strip_affixes,
                verbose,
            };
            let ops = diff_with(&a, &b, |x, y| x == y, &opts)
                .unwrap_or_else(|e| {
                    eprintln!("Error computing diff: {}", e);
                    process::exit(2);
                });

            let stdout = io::stdout();
            let mut out = io::BufWriter::new(stdout.lock());
            render(&mut out, &ops, by, format.into())
                .and_then(|_| out.flush())
                .unwrap_or_else(|e| {
                    eprintln!("Error writing output: {}", e);
                    process::exit(2);
                });

            let changed = ops.iter().any(|op| op.is_change());
            process::exit(if changed { 1 } else { 0 });
        }

        Commands::Stats {
            old,
            new,
            by,
            strip_affixes,
            verbose,
        } => {
            logging::init(verbose);
            let by: Granularity = by.into();
            let old_input = open_or_exit(&old);
            let new_input = open_or_exit(&new);
            let a = tokenize_or_exit(&old, old_input.bytes(), by);
            let b = tokenize_or_exit(&new, new_input.bytes(), by);

            let t0 = Instant::now();
            let opts = DiffOptions {
                strip_affixes,
                verbose,
            };
            let ops = diff_with(&a, &b, |x, y| x == y, &opts)
                .unwrap_or_else(|e| {
                    eprintln!("Error computing diff: {}", e);
                    process::exit(2);
                });
            let elapsed = t0.elapsed();

            let stats = diff_summary(&ops);
            let unit = format!("{:?}", by).to_lowercase();
            println!("Old:          {} ({} {})", old, a.len(), unit);
            println!("New:          {} ({} {})", new, b.len(), unit);
            println!("Operations:   {}", stats.num_ops);
            println!("  Unchanged:  {}", stats.num_equal);
            println!("  Deleted:    {}", stats.num_deleted);
            println!("  Inserted:   {}", stats.num_inserted);
            println!("Distance:     {}", stats.edit_distance);
            println!("Hunks:        {}", stats.num_hunks);
            if verbose {
                for h in hunks(&ops) {
                    println!(
                        "  {:?}: old {}+{} new {}+{}",
                        h.kind(),
                        h.old_start,
                        h.old_len,
                        h.new_start,
                        h.new_len
                    );
                }
            }
            println!("Time:         {:.3}s", elapsed.as_secs_f64());
        }
    }
}
