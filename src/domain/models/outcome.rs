//! View models produced by action handlers.
//!
//! Handlers never print. They describe what the operator should see
//! (notices, a document, or an interactive panel) and the view layer
//! renders it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

/// A one-line toast-style message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Read-only text buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    /// Content language hint (`log`, `json`).
    pub language: String,
    pub content: String,
}

/// Follow-up action triggered by activating a panel item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PanelAction {
    OpenLog { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelItem {
    pub label: String,
    /// Ordered `(heading, value)` pairs shown next to the label.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<PanelAction>,
}

/// A titled list of activatable items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    pub items: Vec<PanelItem>,
}

impl Panel {
    /// Action bound to the item at `index`, if it has one.
    pub fn action_at(&self, index: usize) -> Option<&PanelAction> {
        self.items.get(index).and_then(|item| item.action.as_ref())
    }

    pub fn has_actions(&self) -> bool {
        self.items.iter().any(|item| item.action.is_some())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    Document(Document),
    Panel(Panel),
}

/// Value an action hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    Text(String),
    Flag(bool),
}

/// Everything one action produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionOutcome {
    /// Set when the operator backed out before any request was sent.
    #[serde(default)]
    pub aborted: bool,
    #[serde(default)]
    pub notices: Vec<Notice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ActionValue>,
}

impl ActionOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aborted() -> Self {
        Self {
            aborted: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_notice(mut self, level: NoticeLevel, message: impl Into<String>) -> Self {
        self.notices.push(Notice {
            level,
            message: message.into(),
        });
        self
    }

    #[must_use]
    pub fn info(self, message: impl Into<String>) -> Self {
        self.with_notice(NoticeLevel::Info, message)
    }

    #[must_use]
    pub fn success(self, message: impl Into<String>) -> Self {
        self.with_notice(NoticeLevel::Success, message)
    }

    #[must_use]
    pub fn warning(self, message: impl Into<String>) -> Self {
        self.with_notice(NoticeLevel::Warning, message)
    }

    #[must_use]
    pub fn with_document(mut self, document: Document) -> Self {
        self.view = Some(View::Document(document));
        self
    }

    #[must_use]
    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.view = Some(View::Panel(panel));
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: ActionValue) -> Self {
        self.value = Some(value);
        self
    }

    pub const fn document(&self) -> Option<&Document> {
        match &self.view {
            Some(View::Document(document)) => Some(document),
            _ => None,
        }
    }

    pub const fn panel(&self) -> Option<&Panel> {
        match &self.view {
            Some(View::Panel(panel)) => Some(panel),
            _ => None,
        }
    }

    /// Messages of every notice at `level`.
    pub fn messages(&self, level: NoticeLevel) -> Vec<&str> {
        self.notices
            .iter()
            .filter(|notice| notice.level == level)
            .map(|notice| notice.message.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_notices_and_view() {
        let outcome = ActionOutcome::new()
            .warning("odd response")
            .with_document(Document {
                title: "raw".to_string(),
                language: "json".to_string(),
                content: "{}".to_string(),
            })
            .with_value(ActionValue::Text("upload.log".to_string()));

        assert!(!outcome.aborted);
        assert_eq!(outcome.messages(NoticeLevel::Warning), vec!["odd response"]);
        assert!(outcome.document().is_some());
        assert!(outcome.panel().is_none());
    }

    #[test]
    fn test_panel_action_lookup() {
        let panel = Panel {
            title: "Logs".to_string(),
            items: vec![
                PanelItem {
                    label: "Unknown".to_string(),
                    details: vec![],
                    action: None,
                },
                PanelItem {
                    label: "a.log".to_string(),
                    details: vec![],
                    action: Some(PanelAction::OpenLog {
                        name: "a.log".to_string(),
                    }),
                },
            ],
        };
        assert_eq!(panel.action_at(0), None);
        assert!(matches!(panel.action_at(1), Some(PanelAction::OpenLog { name }) if name == "a.log"));
        assert_eq!(panel.action_at(7), None);
        assert!(panel.has_actions());
    }

    #[test]
    fn test_json_shape() {
        let outcome = ActionOutcome::new()
            .success("done")
            .with_value(ActionValue::Flag(true));
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["notices"][0]["level"], "success");
        assert_eq!(json["value"], true);
        assert!(json.get("view").is_none());
    }
}
