//! Scan command - walks the full commit history for secrets.

mod output;

use std::time::Instant;

use indicatif::ProgressBar;
use keytrace_core::git::Repo;
use keytrace_core::history::{Finding, HistoryScan, ScanEvent};
use keytrace_core::scanner::LineScanner;

use self::output::{OutputContext, ScanStats};
use crate::ui::{self, exit, print_command_header};
use crate::{OutputFormat, ScanArgs};

/// Executes the `keytrace scan` command.
pub fn run(args: &ScanArgs) -> super::Result {
    let show_progress = should_show_progress(args);
    let start = Instant::now();

    if show_progress {
        print_command_header("scan");
    }

    let repo = Repo::open(&args.path)?;
    let scanner = LineScanner::builtin()?;

    let mut collector = EventCollector::new(show_progress);
    HistoryScan::new(&repo, &scanner).run(|event| collector.publish(event))?;
    let (findings, commits_scanned) = collector.finish();

    let stats = ScanStats {
        commits_scanned,
        secrets_found: findings.len(),
        elapsed: start.elapsed(),
    };
    let ctx = OutputContext {
        findings: &findings,
        stats,
    };

    output::write_output(args, &ctx)?;

    if !args.exit_zero && !findings.is_empty() {
        std::process::exit(exit::FINDINGS);
    }

    Ok(())
}

fn should_show_progress(args: &ScanArgs) -> bool {
    args.output.is_none() && matches!(args.format, OutputFormat::Text)
}

/// Consumes the scan's event stream, accumulating findings and driving the
/// terminal progress bar.
struct EventCollector {
    show_progress: bool,
    bar: Option<ProgressBar>,
    findings: Vec<Finding>,
    commits_scanned: usize,
}

impl EventCollector {
    const fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            bar: None,
            findings: Vec::new(),
            commits_scanned: 0,
        }
    }

    fn publish(&mut self, event: ScanEvent) {
        match event {
            ScanEvent::Started { total_commits } => {
                self.commits_scanned = total_commits;
                if self.show_progress && total_commits > 0 {
                    self.bar = Some(ui::create_commit_progress(total_commits));
                }
            }
            ScanEvent::Progress(progress) => {
                if let Some(bar) = &self.bar {
                    bar.set_position(u64::try_from(progress.current).unwrap_or(u64::MAX));
                }
            }
            ScanEvent::Finding(finding) => self.findings.push(finding),
            ScanEvent::Completed => {
                if let Some(bar) = &self.bar {
                    bar.finish_and_clear();
                }
            }
        }
    }

    fn finish(self) -> (Vec<Finding>, usize) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
        (self.findings, self.commits_scanned)
    }
}
