//! Text output formatting for scan results.

use std::io::Write;

use chrono::Local;
use console::style;
use keytrace_core::history::Finding;

use super::OutputContext;
use crate::ui::{self, colors, format_duration, indicators};

/// Renders scan findings as styled, human-readable text.
pub fn write(ctx: &OutputContext, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;

    for finding in ctx.findings {
        write_finding(finding, writer)?;
    }

    write_summary(ctx, writer)?;
    writeln!(writer)?;

    Ok(())
}

fn write_finding(finding: &Finding, writer: &mut dyn Write) -> anyhow::Result<()> {
    let short_hash = finding.commit_hash.get(..7).unwrap_or(&finding.commit_hash);

    writeln!(
        writer,
        "{} {}",
        colors::error().apply_to(indicators::ERROR),
        style(finding.secret_type).bold(),
    )?;

    writeln!(
        writer,
        "  {} {} {} {} {}",
        colors::emphasis().apply_to(short_hash),
        colors::muted().apply_to("·"),
        colors::secondary().apply_to(finding.date.with_timezone(&Local).format("%Y-%m-%d").to_string()),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(&finding.author),
    )?;

    writeln!(
        writer,
        "  {} {}",
        colors::muted().apply_to("└─"),
        colors::secondary().apply_to(&finding.file_path),
    )?;

    writeln!(writer, "     {}", colors::code().apply_to(&finding.line_content))?;

    writeln!(writer)?;
    Ok(())
}

fn write_summary(ctx: &OutputContext, writer: &mut dyn Write) -> anyhow::Result<()> {
    let commits_word = ui::pluralise_word(ctx.stats.commits_scanned, "commit", "commits");
    let commits = format!("{} {commits_word}", ctx.stats.commits_scanned);
    let timing = format!("({})", format_duration(ctx.stats.elapsed));

    if ctx.findings.is_empty() {
        writeln!(
            writer,
            "{} {} {} {} {}",
            colors::success().apply_to(indicators::SUCCESS),
            colors::primary().apply_to("No secrets found"),
            colors::muted().apply_to("·"),
            colors::muted().apply_to(&commits),
            colors::muted().apply_to(&timing),
        )?;
        return Ok(());
    }

    let count = ctx.findings.len();
    let secrets_word = ui::pluralise_word(count, "secret", "secrets");

    writeln!(
        writer,
        "{} {} {} {} {}",
        colors::error().apply_to(indicators::ERROR),
        colors::primary().apply_to(format!("{count} {secrets_word} found")),
        colors::muted().apply_to("·"),
        colors::muted().apply_to(&commits),
        colors::muted().apply_to(&timing),
    )?;

    Ok(())
}
