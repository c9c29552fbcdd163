//! Per-row outcomes and run summaries

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of processing one row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Success,
    Failed,
    DryRun,
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunStatus::Success => write!(f, "success"),
            RunStatus::Failed => write!(f, "failed"),
            RunStatus::DryRun => write!(f, "dry_run"),
        }
    }
}

/// Result record for one product row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResult {
    /// 1-based row number in the product sheet
    pub row: usize,
    pub status: RunStatus,
    /// Absent when the row failed before a payload existed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl ProcessResult {
    fn base(row: usize, status: RunStatus, product_code: Option<String>) -> Self {
        Self {
            row,
            status,
            product_code,
            response_status: None,
            response_data: None,
            response_body: None,
            error: None,
            payload: None,
        }
    }

    pub fn dry_run(row: usize, product_code: Option<String>, payload: Value) -> Self {
        Self {
            payload: Some(payload),
            ..Self::base(row, RunStatus::DryRun, product_code)
        }
    }

    pub fn success(
        row: usize,
        product_code: Option<String>,
        status_code: u16,
        body: Option<String>,
    ) -> Self {
        Self {
            response_status: Some(status_code),
            response_data: body.as_deref().and_then(parse_body),
            response_body: body,
            ..Self::base(row, RunStatus::Success, product_code)
        }
    }

    /// Failure after a request was attempted
    pub fn request_failed(
        row: usize,
        product_code: Option<String>,
        error: String,
        status_code: Option<u16>,
        body: Option<String>,
    ) -> Self {
        Self {
            error: Some(error),
            response_status: status_code,
            response_data: body.as_deref().and_then(parse_body),
            response_body: body,
            ..Self::base(row, RunStatus::Failed, product_code)
        }
    }

    /// Failure before any request (mapping error)
    pub fn failed(row: usize, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::base(row, RunStatus::Failed, None)
        }
    }
}

/// Result record for one DELETE in a bulk range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub product_id: i64,
    pub status: RunStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DeleteResult {
    pub fn completed(product_id: i64, status_code: u16, body: Option<String>) -> Self {
        let ok = (200..300).contains(&status_code);
        Self {
            product_id,
            status: if ok { RunStatus::Success } else { RunStatus::Failed },
            response_status: Some(status_code),
            response_data: body.as_deref().and_then(parse_body),
            response_body: body,
            error: None,
        }
    }

    pub fn failed(product_id: i64, error: String) -> Self {
        Self {
            product_id,
            status: RunStatus::Failed,
            response_status: None,
            response_data: None,
            response_body: None,
            error: Some(error),
        }
    }
}

/// Counts per status for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub total: usize,
    pub success: usize,
    pub failed: usize,
    pub dry_run: usize,
}

impl RunSummary {
    pub fn from_statuses(statuses: impl IntoIterator<Item = RunStatus>) -> Self {
        let mut summary = RunSummary::default();
        for status in statuses {
            summary.total += 1;
            match status {
                RunStatus::Success => summary.success += 1,
                RunStatus::Failed => summary.failed += 1,
                RunStatus::DryRun => summary.dry_run += 1,
            }
        }
        summary
    }

    pub fn of_results(results: &[ProcessResult]) -> Self {
        Self::from_statuses(results.iter().map(|r| r.status))
    }

    pub fn of_deletes(results: &[DeleteResult]) -> Self {
        Self::from_statuses(results.iter().map(|r| r.status))
    }
}

/// Parse a non-empty response body as JSON
fn parse_body(body: &str) -> Option<Value> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_value(RunStatus::DryRun).unwrap(), "dry_run");
        assert_eq!(serde_json::to_value(RunStatus::Success).unwrap(), "success");
        assert_eq!(RunStatus::Failed.to_string(), "failed");
    }

    #[test]
    fn test_success_parses_json_body() {
        let result = ProcessResult::success(1, Some("A-1".into()), 201, Some(r#"{"id":123}"#.into()));
        assert_eq!(result.response_data, Some(serde_json::json!({"id": 123})));

        let result = ProcessResult::success(1, None, 200, Some("created".into()));
        assert!(result.response_data.is_none());
        assert_eq!(result.response_body.as_deref(), Some("created"));
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            ProcessResult::dry_run(1, None, Value::Null),
            ProcessResult::failed(2, "boom".into()),
            ProcessResult::success(3, None, 200, None),
            ProcessResult::failed(4, "boom".into()),
        ];
        let summary = RunSummary::of_results(&results);
        assert_eq!(
            summary,
            RunSummary { total: 4, success: 1, failed: 2, dry_run: 1 }
        );
    }

    #[test]
    fn test_delete_status_from_code() {
        assert_eq!(DeleteResult::completed(7, 204, None).status, RunStatus::Success);
        assert_eq!(DeleteResult::completed(7, 404, None).status, RunStatus::Failed);
    }
}
