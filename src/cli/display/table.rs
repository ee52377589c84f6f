//! Table builder wrapper around comfy-table for panel display.

use comfy_table::{presets, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::Panel;

/// Create a standard list table with the given headers.
///
/// Uses the NOTHING preset (no borders) for a clean CLI aesthetic.
pub fn list_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Left)),
        );
    table
}

/// Numbered table of panel items. Detail columns follow the first item's headings.
///
/// Items that can be opened are numbered from 1; the rest show `-`.
pub fn panel_table(panel: &Panel) -> Table {
    let detail_headings: Vec<&str> = panel
        .items
        .first()
        .map(|item| item.details.iter().map(|(heading, _)| heading.as_str()).collect())
        .unwrap_or_default();

    let mut headers = vec!["#", "Name"];
    headers.extend(detail_headings.iter().copied());
    let mut table = list_table(&headers);

    for (index, item) in panel.items.iter().enumerate() {
        let number = if item.action.is_some() {
            (index + 1).to_string()
        } else {
            "-".to_string()
        };
        let mut row = vec![Cell::new(number), Cell::new(&item.label)];
        row.extend(detail_headings.iter().map(|heading| {
            let value = item
                .details
                .iter()
                .find(|(name, _)| name == heading)
                .map_or("", |(_, value)| value.as_str());
            Cell::new(value)
        }));
        table.add_row(row);
    }
    table
}
