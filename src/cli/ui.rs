use comfy_table::{Attribute, Cell, Color, Table};
use console::style;

/// Only a line of dashes under the header: no borders, no column rules.
const HEADER_RULE_ONLY: &str = "     -             ";

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Prompt,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Prompt => style(text).cyan().bold(),
    };
    styled.to_string()
}

/// Creates a borderless `comfy_table::Table` with a rule below the header.
pub fn new_listing_table() -> Table {
    let mut table = Table::new();
    table.load_preset(HEADER_RULE_ONLY);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
