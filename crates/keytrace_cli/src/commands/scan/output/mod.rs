//! Output formatting for scan results.

mod json;
mod text;

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use anyhow::Context as _;
use keytrace_core::history::Finding;

use crate::{OutputFormat, ScanArgs};

/// Aggregate statistics for a completed scan.
#[derive(Debug)]
pub struct ScanStats {
    /// Number of commits scanned.
    pub commits_scanned: usize,
    /// Number of secret introductions found.
    pub secrets_found: usize,
    /// Wall-clock time for the scan.
    pub elapsed: Duration,
}

/// Everything needed to render scan output in any format.
#[derive(Debug)]
pub struct OutputContext<'a> {
    /// Findings to include in the output.
    pub findings: &'a [Finding],
    /// Scan statistics for the summary.
    pub stats: ScanStats,
}

/// Writes scan output to a file or stdout in the requested format.
pub fn write_output(args: &ScanArgs, ctx: &OutputContext) -> anyhow::Result<()> {
    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("failed to create output file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_format(args.format, ctx, &mut writer)
    } else {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_format(args.format, ctx, &mut writer)
    }
}

fn write_format(format: OutputFormat, ctx: &OutputContext, writer: &mut dyn std::io::Write) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => text::write(ctx, writer),
        OutputFormat::Json => json::write(ctx, writer),
    }
}
