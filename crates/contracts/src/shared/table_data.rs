use serde::{Deserialize, Serialize};
use std::fmt;

/// One table row as returned by the hosted backend. Column order is kept.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Error body returned by the hosted backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            details: None,
            hint: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.message, code),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for ErrorInfo {}

/// `{ data, error }` pair returned for a table query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableResponse {
    #[serde(default)]
    pub data: Option<Vec<Record>>,
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

impl TableResponse {
    pub fn ok(rows: Vec<Record>) -> Self {
        Self {
            data: Some(rows),
            error: None,
        }
    }

    pub fn err(error: ErrorInfo) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    /// An error wins over any data. Absent data is an empty row set.
    pub fn into_result(self) -> Result<Vec<Record>, ErrorInfo> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data.unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_takes_precedence_over_data() {
        let response = TableResponse {
            data: Some(vec![Record::new()]),
            error: Some(ErrorInfo::new("permission denied").with_code("42501")),
        };
        let err = response.into_result().unwrap_err();
        assert_eq!(err.to_string(), "permission denied (42501)");
    }

    #[test]
    fn missing_data_is_empty() {
        let response: TableResponse = serde_json::from_value(json!({ "data": null, "error": null })).unwrap();
        assert_eq!(response.into_result().unwrap(), Vec::<Record>::new());
    }

    #[test]
    fn records_keep_column_order() {
        let record: Record = serde_json::from_str(r#"{"zeta":1,"alpha":2,"mid":3}"#).unwrap();
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn error_body_decodes_optional_fields() {
        let info: ErrorInfo =
            serde_json::from_str(r#"{"message":"relation does not exist","code":"42P01","hint":null}"#)
                .unwrap();
        assert_eq!(info.code.as_deref(), Some("42P01"));
        assert_eq!(info.details, None);
    }
}
