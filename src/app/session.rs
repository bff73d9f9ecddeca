//! The prompt loop and console output.

use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use colored::*;
use tokio::io::AsyncBufRead;
use tokio_util::sync::CancellationToken;

use super::prompt::{ExportPlan, PromptInput, Prompter};
use crate::config::Config;
use crate::dns::{DomainBatch, ResolutionResult, ResolveContext};
use crate::export::{export_csv, render_table};
use crate::run::{resolve_batch, BatchReport, Delivery, ResultSink};

/// Output shared by every concurrent delivery. One lock is held per table so
/// a table is never split by another domain's output.
pub type SharedOutput = Arc<Mutex<Box<dyn Write + Send>>>;

/// Shared handle to standard output.
pub fn stdout_output() -> SharedOutput {
    Arc::new(Mutex::new(Box::new(std::io::stdout())))
}

/// Prints each domain's table and saves the domains selected by the plan.
pub struct ConsoleSink {
    out: SharedOutput,
    output_dir: PathBuf,
    plan: ExportPlan,
}

impl ConsoleSink {
    pub fn new(out: SharedOutput, output_dir: PathBuf, plan: ExportPlan) -> Self {
        Self {
            out,
            output_dir,
            plan,
        }
    }
}

impl ResultSink for ConsoleSink {
    fn deliver(&self, result: &ResolutionResult) -> Delivery {
        let domain = result.domain.as_str();
        let records = result.record_strings();

        let delivery = if self.plan.should_export(domain) {
            match export_csv(&self.output_dir, domain, &records) {
                Ok(path) => Delivery::Exported(path),
                Err(e) => Delivery::ExportFailed(e),
            }
        } else {
            Delivery::Displayed
        };

        let mut text = format!(
            "{}\n{}",
            format!("DNS records for {domain}:").cyan(),
            render_table(&records)
        );
        match &delivery {
            Delivery::Displayed => {}
            Delivery::Exported(path) => {
                text.push_str(&format!(
                    "{}\n",
                    format!("Results for {domain} saved to {}", path.display()).green()
                ));
            }
            Delivery::ExportFailed(e) => {
                text.push_str(&format!(
                    "{}\n",
                    format!("Error saving {domain} to CSV: {e}").red()
                ));
            }
        }

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            log::warn!("Failed to print records for {domain}: {e}");
        }
        delivery
    }
}

/// Totals over every batch of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionReport {
    pub batches: usize,
    pub domains: usize,
    pub records: usize,
    pub exported: usize,
    pub export_failures: usize,
}

impl SessionReport {
    fn add(&mut self, report: &BatchReport) {
        self.batches += 1;
        self.domains += report.domains;
        self.records += report.records;
        self.exported += report.exported;
        self.export_failures += report.export_failures;
    }
}

/// Resolves one batch, cancelling pending lookups on Ctrl-C.
pub async fn run_batch(
    batch: &DomainBatch,
    plan: ExportPlan,
    config: &Config,
    ctx: &Arc<ResolveContext>,
    out: &SharedOutput,
) -> BatchReport {
    let sink = Arc::new(ConsoleSink::new(
        Arc::clone(out),
        config.output_dir.clone(),
        plan,
    ));
    let cancel = CancellationToken::new();
    let watcher = {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupted, cancelling pending lookups");
                cancel.cancel();
            }
        })
    };

    let report = resolve_batch(batch, Arc::clone(ctx), sink, cancel).await;
    watcher.abort();

    log::info!(
        "Batch finished: {} domain(s), {} record(s), {} saved, {} save error(s) in {:.1}s",
        report.domains,
        report.records,
        report.exported,
        report.export_failures,
        report.elapsed_seconds
    );
    report
}

/// Runs the session.
///
/// With `config.domains` set, resolves that list once. Otherwise prompts for
/// domain lists until the user exits, input ends, or Ctrl-C is pressed at a
/// prompt. Export errors are shown per domain and never end the session.
///
/// # Errors
///
/// Returns an error only if reading input or writing prompts fails.
pub async fn run_session<R, W>(
    config: &Config,
    ctx: Arc<ResolveContext>,
    prompter: &mut Prompter<R, W>,
    out: SharedOutput,
) -> Result<SessionReport>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut session = SessionReport::default();

    if let Some(list) = &config.domains {
        let batch = DomainBatch::parse(list, &config.default_domain);
        let plan = prompter
            .ask_export_plan(&batch, config.export)
            .await
            .context("Failed to read export choice")?;
        let report = run_batch(&batch, plan, config, &ctx, &out).await;
        session.add(&report);
    } else {
        loop {
            let input = tokio::select! {
                input = prompter.read_domains(&config.default_domain) => {
                    input.context("Failed to read domain list")?
                }
                _ = tokio::signal::ctrl_c() => PromptInput::Exit,
            };
            let batch = match input {
                PromptInput::Exit => break,
                PromptInput::Batch(batch) => batch,
            };

            let plan = tokio::select! {
                plan = prompter.ask_export_plan(&batch, config.export) => {
                    plan.context("Failed to read export choice")?
                }
                _ = tokio::signal::ctrl_c() => break,
            };
            let report = run_batch(&batch, plan, config, &ctx, &out).await;
            session.add(&report);
        }
    }

    ctx.stats.log_summary();
    Ok(session)
}

/// Runs the session on standard input and output.
pub async fn run_interactive(config: &Config, ctx: Arc<ResolveContext>) -> Result<SessionReport> {
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut prompter = Prompter::new(stdin, std::io::stdout());
    run_session(config, ctx, &mut prompter, stdout_output()).await
}
