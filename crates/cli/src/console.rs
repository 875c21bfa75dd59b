use colored::Colorize;
use prettytable::{Cell, Row, Table, format};
use serde_json::Value;
use strat_sdk::GenericResult;

pub fn print_error_message(error_message: &str) {
    eprintln!("{}", error_message.red());
}

pub fn print_warn_message(warn_message: &str) {
    println!("{}", warn_message.yellow());
}

pub fn print_success_message(success_message: &str) {
    println!("{}", success_message.green());
}

pub fn print_table<T: AsRef<str>>(
    headers: Vec<T>,
    rows: Vec<Vec<String>>,
    title: Option<&str>,
    footer: Option<&str>,
) {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);

    let header_cells =
        headers.into_iter().map(|h| Cell::new(h.as_ref()).style_spec("Fb")).collect();
    table.add_row(Row::new(header_cells));

    for row_data in rows {
        let cells = row_data.into_iter().map(|cell| Cell::new(cell.as_ref())).collect();
        table.add_row(Row::new(cells));
    }

    if let Some(title_text) = title {
        println!("\n{}", title_text);
    }

    table.printstd();

    if let Some(footer_text) = footer {
        println!("\n{}", footer_text);
    }
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

impl Output {
    pub fn object(&self, title: &str, result: &GenericResult) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(result)?);
            return Ok(());
        }

        let rows: Vec<Vec<String>> =
            result.iter().map(|(key, value)| vec![key.clone(), display_value(value)]).collect();
        print_table(vec!["Field", "Value"], rows, Some(title), None);
        Ok(())
    }

    pub fn list(&self, title: &str, items: &[GenericResult]) -> Result<(), serde_json::Error> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(items)?);
            return Ok(());
        }

        if items.is_empty() {
            print_warn_message(&format!("{}: nothing found.", title));
            return Ok(());
        }

        let headers = column_names(items);
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                headers.iter().map(|key| item.get(key).map(display_value).unwrap_or_default()).collect()
            })
            .collect();

        let title = format!("{} ({}):", title, items.len());
        print_table(headers, rows, Some(&title), None);
        Ok(())
    }
}

/// Every key that appears in any item, in first-seen order.
pub fn column_names(items: &[GenericResult]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        for key in item.keys() {
            if !names.contains(key) {
                names.push(key.clone());
            }
        }
    }
    names
}

pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}
