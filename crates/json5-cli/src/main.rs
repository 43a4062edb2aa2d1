//! `json5` CLI — convert, check, and format JSON / JSON5 documents.
//!
//! ## Usage
//!
//! ```sh
//! # Convert JSON5 to strict JSON (stdin → stdout)
//! echo '{ answer: 42, // comment
//!         }' | json5 convert
//!
//! # Convert from file to file, pretty-printed with 2 spaces
//! json5 convert -i config.json5 -o config.json --indent 2
//!
//! # Validate input (exit code 1 on a syntax error)
//! json5 check -i data.json --strict
//!
//! # Reformat a JSON5 document in JSON5 output rules
//! json5 fmt -i config.json5
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use json5_core::{parse, parse_json5, stringify_with, Style};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "json5", version, about = "JSON / JSON5 converter and formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert JSON5 (or strict JSON) input to strict JSON output
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per indent level (0 = compact single-line output)
        #[arg(long, default_value_t = 0)]
        indent: u8,
        /// Indent with tabs instead of spaces
        #[arg(long, conflicts_with = "indent")]
        tabs: Option<u8>,
        /// Accept only strict JSON input
        #[arg(long)]
        strict: bool,
    },
    /// Validate input and report the first syntax error, if any
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Accept only strict JSON input
        #[arg(long)]
        strict: bool,
    },
    /// Reformat input, keeping JSON5 output rules (infinity/NaN literals)
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Spaces per indent level
        #[arg(long, default_value_t = 2)]
        indent: u8,
        /// Emit CR+LF line endings
        #[arg(long)]
        crlf: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            indent,
            tabs,
            strict,
        } => {
            let text = read_input(input.as_deref())?;
            let value = if strict {
                parse(&text).context("input is not valid JSON")?
            } else {
                parse_json5(&text).context("input is not valid JSON5")?
            };
            let style = match tabs {
                Some(n) => Style::strict().tabs(n),
                None => Style::strict().spaces(indent),
            };
            let mut rendered = stringify_with(&value, &style);
            rendered.push('\n');
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input, strict } => {
            let text = read_input(input.as_deref())?;
            let result = if strict { parse(&text) } else { parse_json5(&text) };
            match result {
                Ok(_) => println!("OK"),
                Err(err) => anyhow::bail!("{err}"),
            }
        }
        Commands::Fmt {
            input,
            output,
            indent,
            crlf,
        } => {
            let text = read_input(input.as_deref())?;
            let value = parse_json5(&text).context("input is not valid JSON5")?;
            let style = Style::extended().spaces(indent).crlf(crlf);
            let mut rendered = stringify_with(&value, &style);
            rendered.push_str(if crlf { "\r\n" } else { "\n" });
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => {
            print!("{content}");
        }
    }
    Ok(())
}
