mod render;
mod triple;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use lazyseq_core::{concat, interleaved_bits, repeat_after, Fibonacci, Geometric, Linear};
use render::{render, OutputOptions};
use tracing::debug;
use triple::Triple;

/// Longest Fibonacci prefix whose terms all fit in a `u64`
const MAX_FIBONACCI_TERMS: usize = 94;

#[derive(Parser)]
#[command(name = "lazyseq")]
#[command(about = "Build lazy numeric sequences and print their elements", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    output: OutputOptions,
}

#[derive(Subcommand)]
enum Commands {
    /// Arithmetic progression from FIRST by STRIDE up to BOUND
    #[command(allow_negative_numbers = true)]
    Linear { first: f64, stride: f64, bound: f64 },
    /// Geometric progression from INITIAL by RATIO up to BOUND
    #[command(allow_negative_numbers = true)]
    Geometric { initial: f64, ratio: f64, bound: f64 },
    /// The first TERMS Fibonacci numbers
    Fibonacci { terms: usize },
    /// Boolean pattern of TRUES evenly spaced true slots
    Bits {
        trues: usize,

        /// Falses between consecutive trues
        #[arg(short, long, default_value = "0")]
        interleave: usize,

        /// One more than the number of leading falses
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },
    /// Two arithmetic progressions, one after the other
    Concat {
        /// First progression as `first,stride,bound`
        #[arg(long, allow_hyphen_values = true)]
        first: Triple,

        /// Second progression as `first,stride,bound`
        #[arg(long, allow_hyphen_values = true)]
        second: Triple,
    },
    /// An arithmetic progression repeated a number of times
    Repeat {
        /// Repeated progression as `first,stride,bound`
        #[arg(long, allow_hyphen_values = true)]
        unit: Triple,

        /// Progression played before the repetitions (defaults to the unit)
        #[arg(long, allow_hyphen_values = true)]
        lead: Option<Triple>,

        /// Repetitions after the lead-in
        #[arg(short = 'n', long)]
        times: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lazyseq=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let options = &cli.output;

    let output = match cli.command {
        Commands::Linear { first, stride, bound } => {
            let seq = Linear::try_new(first, stride, bound)
                .context("Invalid linear progression")?;
            render(seq, options)?
        }
        Commands::Geometric { initial, ratio, bound } => {
            let seq = Geometric::try_new(initial, ratio, bound)
                .context("Invalid geometric progression")?;
            render(seq, options)?
        }
        Commands::Fibonacci { terms } => {
            ensure!(
                terms <= MAX_FIBONACCI_TERMS,
                "At most {} Fibonacci terms fit in 64 bits, {} requested",
                MAX_FIBONACCI_TERMS,
                terms
            );
            render(Fibonacci::<u64>::new(terms), options)?
        }
        Commands::Bits { trues, interleave, offset } => {
            render(interleaved_bits(trues, interleave, offset), options)?
        }
        Commands::Concat { first, second } => {
            let first = first.linear().context("Invalid --first progression")?;
            let second = second.linear().context("Invalid --second progression")?;
            render(concat(first, second), options)?
        }
        Commands::Repeat { unit, lead, times } => {
            let unit_seq = unit.linear().context("Invalid --unit progression")?;
            let lead_seq = match lead {
                Some(lead) => lead.linear().context("Invalid --lead progression")?,
                None => unit_seq,
            };
            debug!("Repeating {:?} {} times after {:?}", unit_seq, times, lead_seq);
            render(repeat_after(lead_seq, unit_seq, times), options)?
        }
    };

    println!("{}", output);
    Ok(())
}
