//! Batch runner: map every row, then dry-run or send it

use crate::api::{CatalogApi, Operation};
use crate::transfer::{ProcessResult, ProductRow, RowMapper, RunSummary};

use super::report::{Reporter, summary_text};

/// How a batch is processed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    /// Build payloads without calling the API
    pub dry_run: bool,
    /// 1-based first row to process; earlier rows are skipped silently
    pub start_row: usize,
    /// Send with PUT (update) instead of POST (create)
    pub update: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            dry_run: true,
            start_row: 1,
            update: false,
        }
    }
}

/// Process rows in order, one request at a time
///
/// A row that fails to map or send is recorded as failed and the run goes on.
/// Without an API client the run is a dry run regardless of `options`.
pub async fn run(
    rows: &[ProductRow],
    mapper: &dyn RowMapper,
    api: Option<&dyn CatalogApi>,
    options: &RunOptions,
    reporter: &dyn Reporter,
) -> Vec<ProcessResult> {
    if !options.dry_run && api.is_none() {
        log::warn!("No API client configured; payloads will not be sent");
    }
    let api = if options.dry_run { None } else { api };

    log::info!(
        "Processing {} rows, starting from row {}",
        rows.len(),
        options.start_row
    );

    let mut results = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx + 1;
        if row_num < options.start_row {
            continue;
        }
        let result = process_row(row_num, row, mapper, api, options.update).await;
        reporter.row_done(&result);
        results.push(result);
    }

    let summary = RunSummary::of_results(&results);
    log::info!("{}", summary_text("PROCESSING SUMMARY", &summary));
    reporter.summary("Processing summary", &summary);
    results
}

/// Map and optionally send a single record
pub async fn create_single(
    record: &ProductRow,
    mapper: &dyn RowMapper,
    api: Option<&dyn CatalogApi>,
    update: bool,
    reporter: &dyn Reporter,
) -> ProcessResult {
    let result = process_row(1, record, mapper, api, update).await;
    reporter.row_done(&result);
    result
}

async fn process_row(
    row_num: usize,
    row: &ProductRow,
    mapper: &dyn RowMapper,
    api: Option<&dyn CatalogApi>,
    update: bool,
) -> ProcessResult {
    let payload = match mapper.map_row(row) {
        Ok(payload) => payload,
        Err(e) => {
            log::error!("Failed to process row {}: {:#}", row_num, e);
            return ProcessResult::failed(row_num, format!("{:#}", e));
        }
    };
    let code = mapper.record_key(&payload);

    let Some(api) = api else {
        log::debug!(
            "Row {} [dry run] {}: {}",
            row_num,
            code.as_deref().unwrap_or("-"),
            payload
        );
        return ProcessResult::dry_run(row_num, code, payload);
    };

    let operation = if update {
        Operation::update_product(payload)
    } else {
        Operation::create_product(payload)
    };

    match api.execute(&operation).await {
        Ok(response) => {
            log::info!(
                "Row {}: {} {} succeeded with status {}",
                row_num,
                operation.operation_type(),
                code.as_deref().unwrap_or("-"),
                response.status
            );
            ProcessResult::success(row_num, code, response.status, response.body)
        }
        Err(e) => {
            log::error!(
                "Row {}: {} {} failed: {}",
                row_num,
                operation.operation_type(),
                code.as_deref().unwrap_or("-"),
                e
            );
            if e.status() == Some(400) {
                log::error!("Rejected product code: {}", code.as_deref().unwrap_or("-"));
            }
            ProcessResult::request_failed(
                row_num,
                code,
                e.to_string(),
                e.status(),
                e.body().map(str::to_string),
            )
        }
    }
}
