//! Response shapes returned by the tools and manage services.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry of the tool log listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogReference {
    #[serde(default)]
    pub name: Option<String>,
    /// Size in bytes.
    #[serde(default)]
    pub size: Option<f64>,
    /// Server-provided timestamp, string or epoch number.
    #[serde(default)]
    pub timestamp: Option<Value>,
}

impl LogReference {
    /// Read one listing entry leniently: objects field by field, bare
    /// strings as the log name, anything else as an unnamed entry.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(fields) => Self {
                name: fields.get("name").and_then(Value::as_str).map(str::to_string),
                size: fields.get("size").and_then(|size| match size {
                    Value::String(text) => text.trim().parse().ok(),
                    other => other.as_f64(),
                }),
                timestamp: fields.get("timestamp").cloned(),
            },
            Value::String(name) => Self {
                name: Some(name.clone()),
                ..Self::default()
            },
            _ => Self::default(),
        }
    }

    /// Name to show, or `Unknown` when the server omitted it.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown",
        }
    }

    /// Size as kilobytes with two decimals, or `N/A`.
    pub fn size_label(&self) -> String {
        match self.size {
            Some(bytes) if bytes > 0.0 => format!("{:.2} KB", bytes / 1024.0),
            _ => "N/A".to_string(),
        }
    }

    pub fn timestamp_label(&self) -> String {
        match &self.timestamp {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(Value::Null) | None => "N/A".to_string(),
            Some(Value::String(_)) => "N/A".to_string(),
            Some(other) => other.to_string(),
        }
    }

    /// Name usable for a follow-up fetch; entries without one are not openable.
    pub fn openable_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Files produced by an integrity-checker run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityReport {
    #[serde(default)]
    pub lisfile: Option<String>,
    #[serde(default)]
    pub logfile: Option<String>,
}

impl IntegrityReport {
    /// Read a report from any JSON object, keeping only string file names.
    /// Non-objects are not reports.
    pub fn from_value(value: &Value) -> Option<Self> {
        let fields = value.as_object()?;
        let file = |key: &str| fields.get(key).and_then(Value::as_str).map(str::to_string);
        Some(Self {
            lisfile: file("lisfile"),
            logfile: file("logfile"),
        })
    }

    /// Non-empty file names, listing file first.
    pub fn files(&self) -> Vec<&str> {
        [self.lisfile.as_deref(), self.logfile.as_deref()]
            .into_iter()
            .flatten()
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_reference_labels() {
        let entry: LogReference = serde_json::from_value(json!({
            "name": "ValidateCryptoKey20250824231306.log",
            "size": 2048,
            "timestamp": "2025-08-24T23:13:06Z"
        }))
        .unwrap();
        assert_eq!(entry.display_name(), "ValidateCryptoKey20250824231306.log");
        assert_eq!(entry.size_label(), "2.00 KB");
        assert_eq!(entry.timestamp_label(), "2025-08-24T23:13:06Z");
    }

    #[test]
    fn test_log_reference_missing_fields() {
        let entry: LogReference = serde_json::from_value(json!({})).unwrap();
        assert_eq!(entry.display_name(), "Unknown");
        assert_eq!(entry.size_label(), "N/A");
        assert_eq!(entry.timestamp_label(), "N/A");
        assert_eq!(entry.openable_name(), None);
    }

    #[test]
    fn test_from_value_is_lenient() {
        let entry = LogReference::from_value(&json!({"name": "a.log", "size": "1536"}));
        assert_eq!(entry.display_name(), "a.log");
        assert_eq!(entry.size_label(), "1.50 KB");

        let bare = LogReference::from_value(&json!("b.log"));
        assert_eq!(bare.openable_name(), Some("b.log"));

        let junk = LogReference::from_value(&json!(42));
        assert_eq!(junk, LogReference::default());
    }

    #[test]
    fn test_numeric_timestamp() {
        let entry: LogReference =
            serde_json::from_value(json!({"name": "a.log", "timestamp": 1724541186})).unwrap();
        assert_eq!(entry.timestamp_label(), "1724541186");
    }

    #[test]
    fn test_integrity_report_files() {
        let report: IntegrityReport =
            serde_json::from_value(json!({"lisfile": "ic.lis", "logfile": "ic.log"})).unwrap();
        assert_eq!(report.files(), vec!["ic.lis", "ic.log"]);

        let partial: IntegrityReport = serde_json::from_value(json!({"logfile": "ic.log"})).unwrap();
        assert_eq!(partial.files(), vec!["ic.log"]);

        assert!(IntegrityReport::default().files().is_empty());
    }

    #[test]
    fn test_integrity_report_from_value() {
        let report = IntegrityReport::from_value(&json!({"lisfile": "ic.lis", "logfile": 7})).unwrap();
        assert_eq!(report.files(), vec!["ic.lis"]);

        let bare = IntegrityReport::from_value(&json!({"status": "ok"})).unwrap();
        assert!(bare.files().is_empty());

        assert_eq!(IntegrityReport::from_value(&json!(["ic.lis"])), None);
        assert_eq!(IntegrityReport::from_value(&json!("ic.lis")), None);
    }
}
