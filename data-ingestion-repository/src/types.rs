//! Request and response bodies for the Algolia batch write endpoint.

use serde::{Deserialize, Serialize};

use data_ingestion_shared::Record;

/// Write action applied to one record in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BatchAction {
    /// Add the record; the service assigns an `objectID`.
    AddObject,
    /// Replace the record stored under the record's own `objectID`.
    UpdateObject,
}

impl BatchAction {
    /// Choose the action for a record.
    ///
    /// Records carrying an `objectID` replace any existing object with that ID;
    /// everything else is added with a generated ID.
    pub fn for_record(record: &Record) -> Self {
        match record.get("objectID") {
            Some(id) if !id.is_null() => Self::UpdateObject,
            _ => Self::AddObject,
        }
    }
}

/// One operation inside a batch request.
#[derive(Debug, Clone, Serialize)]
pub struct BatchOperation<'a> {
    pub action: BatchAction,
    pub body: &'a Record,
}

/// Body of `POST /1/indexes/{index}/batch`.
#[derive(Debug, Clone, Serialize)]
pub struct BatchWriteRequest<'a> {
    pub requests: Vec<BatchOperation<'a>>,
}

impl<'a> BatchWriteRequest<'a> {
    /// Build a batch request saving every record in order.
    pub fn save(records: &'a [Record]) -> Self {
        let requests = records
            .iter()
            .map(|record| BatchOperation {
                action: BatchAction::for_record(record),
                body: record,
            })
            .collect();

        Self { requests }
    }
}

/// Successful response of the batch endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchWriteResponse {
    /// Identifier of the asynchronous indexing task.
    #[serde(rename = "taskID")]
    pub task_id: u64,
    /// IDs of the written objects, in request order.
    #[serde(rename = "objectIDs", default)]
    pub object_ids: Vec<String>,
}

/// Error body returned by the service on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_action_depends_on_object_id() {
        assert_eq!(
            BatchAction::for_record(&json!({"objectID": "42", "name": "x"})),
            BatchAction::UpdateObject
        );
        assert_eq!(BatchAction::for_record(&json!({"name": "x"})), BatchAction::AddObject);
        assert_eq!(BatchAction::for_record(&json!({"objectID": null})), BatchAction::AddObject);
        assert_eq!(BatchAction::for_record(&json!("scalar")), BatchAction::AddObject);
    }

    #[test]
    fn test_request_body_shape() {
        let records = vec![json!({"objectID": "1", "name": "a"}), json!({"name": "b"})];
        let body = serde_json::to_value(BatchWriteRequest::save(&records)).unwrap();

        assert_eq!(
            body,
            json!({
                "requests": [
                    {"action": "updateObject", "body": {"objectID": "1", "name": "a"}},
                    {"action": "addObject", "body": {"name": "b"}}
                ]
            })
        );
    }

    #[test]
    fn test_response_parsing() {
        let response: BatchWriteResponse =
            serde_json::from_str(r#"{"taskID": 792, "objectIDs": ["6891", "6892"]}"#).unwrap();
        assert_eq!(response.task_id, 792);
        assert_eq!(response.object_ids, vec!["6891", "6892"]);

        let response: BatchWriteResponse = serde_json::from_str(r#"{"taskID": 1}"#).unwrap();
        assert!(response.object_ids.is_empty());
    }
}
