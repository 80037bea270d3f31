use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use lazyseq_core::Sequence;
use serde::Serialize;
use std::fmt::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One element per line
    Plain,
    /// Indexed elements in Rust debug notation
    Debug,
    /// Cursor state and elements as JSON
    Json,
}

/// Options shared by every subcommand
#[derive(Debug, Clone, Args)]
pub struct OutputOptions {
    /// Skip this many elements before printing
    #[arg(long, global = true, default_value = "0")]
    pub skip: usize,

    /// Print at most this many elements
    #[arg(long, global = true)]
    pub take: Option<usize>,

    /// Print only the element at this offset, counted after --skip
    #[arg(long, global = true, conflicts_with = "take")]
    pub at: Option<usize>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            skip: 0,
            take: None,
            at: None,
            format: OutputFormat::Plain,
        }
    }
}

#[derive(Serialize)]
struct Report<'a, S, T> {
    size: usize,
    sequence: &'a S,
    values: Vec<T>,
}

#[derive(Serialize)]
struct Element<T> {
    offset: usize,
    value: T,
}

/// Render the elements of `seq` selected by `options`
pub fn render<S>(mut seq: S, options: &OutputOptions) -> Result<String>
where
    S: Sequence + Serialize,
    S::Item: fmt::Debug + fmt::Display + Serialize,
{
    if options.skip > 0 {
        seq.advance_by(options.skip);
    }
    debug!("Rendering sequence with {} remaining elements", seq.size());

    if let Some(offset) = options.at {
        let value = seq
            .try_at(offset)
            .with_context(|| format!("Cannot read element {}", offset))?;
        return render_element(offset, value, options.format);
    }

    let values: Vec<S::Item> = match options.take {
        Some(n) => seq.iter().take(n).collect(),
        None => seq.iter().collect(),
    };

    match options.format {
        OutputFormat::Plain => {
            let lines: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            Ok(lines.join("\n"))
        }
        OutputFormat::Debug => {
            let mut out = String::new();
            write!(out, "Elements: {} of {}", values.len(), seq.size())?;
            for (i, value) in values.iter().enumerate() {
                write!(out, "\n  [{}] {:?}", i, value)?;
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let report = Report {
                size: seq.size(),
                sequence: &seq,
                values,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

fn render_element<T>(offset: usize, value: T, format: OutputFormat) -> Result<String>
where
    T: fmt::Debug + fmt::Display + Serialize,
{
    Ok(match format {
        OutputFormat::Plain => value.to_string(),
        OutputFormat::Debug => format!("[{}] {:?}", offset, value),
        OutputFormat::Json => serde_json::to_string_pretty(&Element { offset, value })?,
    })
}
