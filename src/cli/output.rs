/// Output formatting: JSON and table modes, TTY detection, debug timing.
use std::io::{IsTerminal, Write};

use anyhow::Context;
use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{ErrorOutput, InspectOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, print timing spans to stderr.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Prints elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

// --- Inspect result ---

/// Write an inspection result to stdout.
///
/// # Errors
///
/// Fails if stdout cannot be written or the result cannot be serialized.
pub fn write_inspect(result: &InspectOutput, ctx: &OutputCtx) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ctx.format {
        OutputFormat::Json => write_json(&mut out, result),
        OutputFormat::Compact => write_compact_json(&mut out, result),
        OutputFormat::Table | OutputFormat::Auto => {
            let table = inspect_table(result, ctx.no_header);
            writeln!(out, "{table}").context("failed to write table")
        }
    }
}

fn inspect_table(result: &InspectOutput, no_header: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !no_header {
        table.set_header(["KIND", "NAME", "VALUE"]);
    }
    for flag in &result.flags {
        table.add_row([
            "flag",
            flag.name.as_str(),
            if flag.present { "yes" } else { "no" },
        ]);
    }
    for option in &result.options {
        table.add_row([
            "option",
            option.name.as_str(),
            option.value.as_deref().unwrap_or(""),
        ]);
    }
    for (i, argument) in result.arguments.iter().enumerate() {
        table.add_row(["argument", &format!("#{}", i + 1), argument.as_str()]);
    }
    table
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that prints elapsed milliseconds to stderr on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            eprintln!("[debug] {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn write_json<T: Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("JSON serialization error")?;
    writeln!(out, "{s}").context("failed to write JSON")
}

fn write_compact_json<T: Serialize + ?Sized>(
    out: &mut impl Write,
    value: &T,
) -> anyhow::Result<()> {
    let s = serde_json::to_string(value).context("JSON serialization error")?;
    writeln!(out, "{s}").context("failed to write JSON")
}
