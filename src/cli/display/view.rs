//! Human and JSON rendering of action outcomes.

use super::colors::{notice_mark, section_header};
use super::table::panel_table;
use crate::cli::output::CommandOutput;
use crate::domain::models::{ActionOutcome, ActionValue, Document, Panel, View};

impl CommandOutput for ActionOutcome {
    fn to_human(&self) -> String {
        let mut blocks = Vec::new();

        match &self.view {
            Some(View::Document(document)) => blocks.push(render_document(document)),
            Some(View::Panel(panel)) => blocks.push(render_panel(panel)),
            None => {}
        }

        let notices: Vec<String> = self
            .notices
            .iter()
            .map(|notice| format!("{} {}", notice_mark(notice.level), notice.message))
            .collect();
        if !notices.is_empty() {
            blocks.push(notices.join("\n"));
        }

        if blocks.is_empty() {
            return if self.aborted {
                "Cancelled.".to_string()
            } else {
                match &self.value {
                    Some(ActionValue::Text(text)) => text.clone(),
                    _ => "Done.".to_string(),
                }
            };
        }
        blocks.join("\n\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn render_document(document: &Document) -> String {
    format!("{}\n{}", section_header(&document.title), document.content)
}

pub fn render_panel(panel: &Panel) -> String {
    if panel.items.is_empty() {
        return section_header(&panel.title);
    }
    format!("{}\n{}", section_header(&panel.title), panel_table(panel))
}
