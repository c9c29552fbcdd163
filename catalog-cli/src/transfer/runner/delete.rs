//! Bulk delete over an inclusive id range

use crate::api::{CatalogApi, Operation};
use crate::transfer::{DeleteResult, RunSummary};

use super::report::{Reporter, summary_text};

/// Delete every product id in `start_id..=end_id`, one request each
///
/// Each id is recorded independently; a failure never stops the range. An
/// empty range (start after end) deletes nothing.
pub async fn delete_range(
    api: &dyn CatalogApi,
    start_id: i64,
    end_id: i64,
    reporter: &dyn Reporter,
) -> Vec<DeleteResult> {
    if start_id > end_id {
        log::warn!("Empty id range {}..={}; nothing to delete", start_id, end_id);
    }

    let mut results = Vec::new();
    for id in start_id..=end_id {
        let result = match api.execute(&Operation::delete_product(id)).await {
            Ok(response) => {
                if response.is_success() {
                    log::info!("Deleted product id {}", id);
                } else {
                    log::error!(
                        "Failed to delete product id {}: status {}, body: {}",
                        id,
                        response.status,
                        response.body.as_deref().unwrap_or("")
                    );
                }
                DeleteResult::completed(id, response.status, response.body)
            }
            Err(e) => {
                log::error!("Error deleting product id {}: {}", id, e);
                DeleteResult::failed(id, e.to_string())
            }
        };
        reporter.delete_done(&result);
        results.push(result);
    }

    let summary = RunSummary::of_deletes(&results);
    log::info!("{}", summary_text("DELETE SUMMARY", &summary));
    reporter.summary("Delete summary", &summary);
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiResponse;
    use crate::api::error::ApiError;
    use crate::transfer::RunStatus;
    use crate::transfer::runner::report::SilentReporter;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 404 for odd ids, transport-style failure for id 13, 200 otherwise
    #[derive(Default)]
    struct FlakyCatalog {
        ids: Mutex<Vec<i64>>,
    }

    #[async_trait]
    impl CatalogApi for FlakyCatalog {
        async fn execute(&self, operation: &Operation) -> Result<ApiResponse, ApiError> {
            let Operation::DeleteProduct { id } = operation else {
                panic!("unexpected operation {}", operation);
            };
            self.ids.lock().unwrap().push(*id);
            if *id == 13 {
                return Err(ApiError::UnsupportedMethod("stub failure".into()));
            }
            let status = if id % 2 == 1 { 404 } else { 200 };
            Ok(ApiResponse {
                status,
                body: Some(format!(r#"{{"id":{}}}"#, id)),
            })
        }
    }

    #[tokio::test]
    async fn test_every_id_is_attempted() {
        let api = FlakyCatalog::default();
        let results = delete_range(&api, 10, 14, &SilentReporter).await;

        assert_eq!(*api.ids.lock().unwrap(), vec![10, 11, 12, 13, 14]);
        let statuses: Vec<RunStatus> = results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                RunStatus::Success,
                RunStatus::Failed,
                RunStatus::Success,
                RunStatus::Failed,
                RunStatus::Success
            ]
        );
        assert_eq!(results[1].response_status, Some(404));
        assert_eq!(results[0].response_data, Some(serde_json::json!({"id": 10})));
        assert!(results[3].error.is_some());
        assert_eq!(results[3].response_status, None);
    }

    #[tokio::test]
    async fn test_single_and_empty_ranges() {
        let api = FlakyCatalog::default();
        assert_eq!(delete_range(&api, 755, 755, &SilentReporter).await.len(), 1);
        assert!(delete_range(&api, 5, 4, &SilentReporter).await.is_empty());
    }
}
