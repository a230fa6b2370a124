//! JSON output formatting for scan results.

use std::io::Write;

use keytrace_core::history::Finding;
use serde::Serialize;

use super::OutputContext;

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    scan_type: &'static str,
    metadata: JsonMetadata,
    summary: JsonSummary,
    findings: Vec<JsonFinding>,
}

#[derive(Serialize)]
struct JsonMetadata {
    commits_scanned: usize,
    duration_ms: u64,
}

#[derive(Serialize)]
struct JsonSummary {
    secrets_found: usize,
}

#[derive(Serialize)]
struct JsonFinding {
    commit: JsonCommit,
    path: String,
    secret_type: &'static str,
    secret_value: String,
    line_content: String,
}

#[derive(Serialize)]
struct JsonCommit {
    hash: String,
    short_hash: String,
    author: String,
    date: String,
}

const VERSION: &str = "1.0";
const SCAN_TYPE: &str = "history";

/// Serialises scan findings as a pretty-printed JSON report.
pub fn write(ctx: &OutputContext, writer: &mut dyn Write) -> anyhow::Result<()> {
    let report = build_report(ctx);
    serde_json::to_writer_pretty(&mut *writer, &report)?;
    writeln!(writer)?;
    Ok(())
}

fn build_report(ctx: &OutputContext) -> JsonReport {
    JsonReport {
        version: VERSION,
        scan_type: SCAN_TYPE,
        metadata: JsonMetadata {
            commits_scanned: ctx.stats.commits_scanned,
            duration_ms: u64::try_from(ctx.stats.elapsed.as_millis()).unwrap_or(u64::MAX),
        },
        summary: JsonSummary {
            secrets_found: ctx.stats.secrets_found,
        },
        findings: ctx.findings.iter().map(convert_finding).collect(),
    }
}

fn convert_finding(finding: &Finding) -> JsonFinding {
    JsonFinding {
        commit: JsonCommit {
            hash: finding.commit_hash.clone(),
            short_hash: finding.commit_hash.get(..7).unwrap_or(&finding.commit_hash).to_string(),
            author: finding.author.clone(),
            date: finding.date.to_rfc3339(),
        },
        path: finding.file_path.clone(),
        secret_type: finding.secret_type,
        secret_value: finding.secret_value.clone(),
        line_content: finding.line_content.clone(),
    }
}
