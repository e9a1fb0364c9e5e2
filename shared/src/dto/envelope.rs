use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status string the backend uses for failed operations.
pub const STATUS_ERROR: &str = "error";

/// Response body shape shared by all backend endpoints.
///
/// List endpoints fill `total`, `limit` and `offset`; the collection endpoint
/// fills `task_id`; failures set `status = "error"` and `message`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode an untyped response body into a typed envelope.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl<T> Envelope<T> {
    /// `false` only when the backend explicitly reported `status: "error"`.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() != Some(STATUS_ERROR)
    }

    /// Take the payload, falling back to `T::default()` when absent.
    pub fn into_data(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// Extract the `message` field of a JSON object body, if any.
///
/// Used when the backend answers with a non-success status and an
/// `{status: "error", message}` body.
pub fn error_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope() {
        let body = json!({
            "status": "success",
            "data": [1, 2, 3],
            "total": 42,
            "limit": 3,
            "offset": 0
        });
        let envelope: Envelope<Vec<u32>> = Envelope::from_value(body).unwrap();
        assert!(envelope.is_success());
        assert_eq!(envelope.total, Some(42));
        assert_eq!(envelope.into_data(), vec![1, 2, 3]);
    }

    #[test]
    fn test_error_envelope() {
        let body = json!({"status": "error", "message": "文章未找到"});
        let envelope: Envelope<Value> = Envelope::from_value(body.clone()).unwrap();
        assert!(!envelope.is_success());
        assert!(envelope.data.is_none());
        assert_eq!(error_message(&body).as_deref(), Some("文章未找到"));
    }

    #[test]
    fn test_missing_fields_default() {
        let envelope: Envelope<Vec<u32>> = Envelope::from_value(json!({})).unwrap();
        assert!(envelope.is_success());
        assert!(envelope.into_data().is_empty());
        assert_eq!(error_message(&json!([1, 2])), None);
    }

    #[test]
    fn test_payload_without_default() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct TaskRef {
            task_id: String,
        }

        let envelope: Envelope<TaskRef> =
            Envelope::from_value(json!({"status": "success", "data": {"task_id": "t-1"}}))
                .unwrap();
        assert_eq!(envelope.data, Some(TaskRef { task_id: "t-1".to_string() }));

        let empty: Envelope<TaskRef> = Envelope::from_value(json!({"status": "success"})).unwrap();
        assert_eq!(empty.data, None);
    }
}
