//! Progress and summary reporting for batch runs

use colored::*;

use crate::transfer::{DeleteResult, ProcessResult, RunStatus, RunSummary};

/// Sink for per-record progress and the final tally
pub trait Reporter {
    fn row_done(&self, result: &ProcessResult);
    fn delete_done(&self, result: &DeleteResult);
    fn summary(&self, title: &str, summary: &RunSummary);
}

/// Discards everything
#[cfg(test)]
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

#[cfg(test)]
impl Reporter for SilentReporter {
    fn row_done(&self, _result: &ProcessResult) {}
    fn delete_done(&self, _result: &DeleteResult) {}
    fn summary(&self, _title: &str, _summary: &RunSummary) {}
}

/// Colored progress lines on stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter {
    /// Print the full payload of dry-run rows
    pub show_payloads: bool,
    /// Print response bodies of live rows
    pub show_responses: bool,
}

impl ConsoleReporter {
    pub fn new(show_payloads: bool, show_responses: bool) -> Self {
        Self {
            show_payloads,
            show_responses,
        }
    }
}

fn status_label(status: RunStatus) -> ColoredString {
    match status {
        RunStatus::Success => "success".bright_green().bold(),
        RunStatus::Failed => "failed".bright_red().bold(),
        RunStatus::DryRun => "dry run".bright_yellow().bold(),
    }
}

impl Reporter for ConsoleReporter {
    fn row_done(&self, result: &ProcessResult) {
        println!(
            "Row {:>4}  {:<28} {}",
            result.row,
            result.product_code.as_deref().unwrap_or("-").cyan(),
            status_label(result.status)
        );

        match result.status {
            RunStatus::Success => {
                if let Some(status) = result.response_status {
                    println!("          Response status: {}", status);
                }
                if self.show_responses {
                    if let Some(data) = &result.response_data {
                        println!("{}", pretty(data).dimmed());
                    }
                }
            }
            RunStatus::Failed => {
                if let Some(status) = result.response_status {
                    println!("          Status: {}", status.to_string().red());
                }
                if let Some(error) = &result.error {
                    println!("          Error: {}", error.red());
                }
                if let Some(body) = &result.response_body {
                    println!("          Body: {}", body.dimmed());
                }
            }
            RunStatus::DryRun => {
                if self.show_payloads {
                    if let Some(payload) = &result.payload {
                        println!("{}", pretty(payload).dimmed());
                    }
                }
            }
        }
    }

    fn delete_done(&self, result: &DeleteResult) {
        let detail = match (&result.error, result.response_status) {
            (Some(error), _) => error.red().to_string(),
            (None, Some(status)) => format!("HTTP {}", status),
            (None, None) => String::new(),
        };
        println!(
            "Product {:>6}  {}  {}",
            result.product_id,
            status_label(result.status),
            detail
        );
    }

    fn summary(&self, title: &str, summary: &RunSummary) {
        println!();
        println!("{}", format!("=== {} ===", title).bold());
        println!("Total processed: {}", summary.total);
        println!("Success: {}", summary.success.to_string().bright_green());
        println!("Failed: {}", summary.failed.to_string().bright_red());
        if summary.dry_run > 0 {
            println!("Dry run: {}", summary.dry_run.to_string().bright_yellow());
        }
    }
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Summary block as plain text, for logs
pub fn summary_text(title: &str, summary: &RunSummary) -> String {
    format!(
        "{}\nTotal processed: {}\nSuccess: {}\nFailed: {}\nDry run: {}",
        title, summary.total, summary.success, summary.failed, summary.dry_run
    )
}
