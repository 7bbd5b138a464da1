//! Output formatting for the CLI.
//!
//! Supports multiple output formats:
//! - `table` - Human-readable table (default)
//! - `json` - Structured JSON
//! - `yaml` - YAML format
//! - `jsonl` - JSON Lines (one object per line)

mod table;

pub use table::TableFormatter;

use std::io::{self, Write};

use serde::Serialize;

use crate::error::Result;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// JSON Lines format (one object per line).
    JsonLines,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "jsonl" | "jsonlines" => Ok(Self::JsonLines),
            _ => Err(crate::error::Error::invalid_arg(format!(
                "Unknown output format '{s}'. Use: table, json, yaml, jsonl"
            ))),
        }
    }
}

/// Trait for types that can be displayed as a table row.
pub trait Displayable {
    /// Display as a table row.
    fn table_row(&self) -> Vec<String>;

    /// Get column headers for table display.
    fn table_headers() -> Vec<&'static str>;
}

/// Output writer that handles format selection and terminal capabilities.
pub struct Output {
    format: OutputFormat,
    color: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output writer.
    pub fn new(format: OutputFormat, color: bool, quiet: bool) -> Self {
        Self { format, color, quiet }
    }

    /// Create an output writer from CLI options.
    pub fn from_cli(format: &str, color: &str, quiet: bool) -> Result<Self> {
        let format = OutputFormat::parse(format)?;

        let color = match color {
            "always" => true,
            "never" => false,
            _ => atty::is(atty::Stream::Stdout),
        };

        Ok(Self::new(format, color, quiet))
    }

    /// Output a single serializable value.
    ///
    /// Table mode falls back to JSON for values without a tabular shape.
    pub fn value<T: Serialize>(&self, value: &T) -> Result<()> {
        match self.format {
            OutputFormat::Yaml => {
                print!("{}", serde_yaml::to_string(value)?);
            }
            OutputFormat::JsonLines => {
                println!("{}", serde_json::to_string(value)?);
            }
            OutputFormat::Json | OutputFormat::Table => {
                println!("{}", serde_json::to_string_pretty(value)?);
            }
        }
        Ok(())
    }

    /// Output a list of items as a table.
    pub fn table<T: Displayable + Serialize>(&self, items: &[T]) -> Result<()> {
        match self.format {
            OutputFormat::Table => {
                let mut formatter = TableFormatter::new();
                formatter.headers(T::table_headers());
                for item in items {
                    formatter.row(item.table_row());
                }
                formatter.print();
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&items)?);
            }
            OutputFormat::Yaml => {
                print!("{}", serde_yaml::to_string(&items)?);
            }
            OutputFormat::JsonLines => {
                for item in items {
                    println!("{}", serde_json::to_string(item)?);
                }
            }
        }
        Ok(())
    }

    /// Print a message to stderr (info, warnings, progress).
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }

    /// Print a success message.
    pub fn success(&self, message: &str) {
        if !self.quiet {
            if self.color {
                eprintln!("\x1b[32m✓\x1b[0m {message}");
            } else {
                eprintln!("✓ {message}");
            }
        }
    }

    /// Print a warning message.
    pub fn warn(&self, message: &str) {
        if !self.quiet {
            if self.color {
                eprintln!("\x1b[33m⚠\x1b[0m {message}");
            } else {
                eprintln!("⚠ {message}");
            }
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("\x1b[31m✗\x1b[0m {message}");
        } else {
            eprintln!("✗ {message}");
        }
    }

    /// Print a line to stdout.
    pub fn line(&self, text: &str) {
        println!("{text}");
        let _ = io::stdout().flush();
    }

    /// Check if output is in quiet mode.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Get the current output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new(OutputFormat::Table, false, false)
    }
}

// atty crate functionality (inline to avoid extra dependency)
#[allow(unsafe_code)]
mod atty {
    #[allow(dead_code)]
    pub enum Stream {
        Stdout,
        Stderr,
    }

    pub fn is(stream: Stream) -> bool {
        use std::os::unix::io::AsRawFd;
        let fd = match stream {
            Stream::Stdout => std::io::stdout().as_raw_fd(),
            Stream::Stderr => std::io::stderr().as_raw_fd(),
        };
        unsafe { libc::isatty(fd) != 0 }
    }
}
