//! Common utilities for output formatters

use comfy_table::{presets::NOTHING, Table};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

/// A flattened record that can be printed as a table row, CSV line or JSON object
pub trait Tabular: Serialize {
    /// Column headers, in row order
    fn headers() -> Vec<&'static str>;

    /// Cell values, in header order
    fn row(&self) -> Vec<String>;
}

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn render_table<T: Tabular>(items: &[T]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING).set_header(T::headers());
    for item in items {
        table.add_row(item.row());
    }
    table.to_string()
}

pub fn render_csv<T: Tabular>(items: &[T]) -> String {
    let mut lines = vec![T::headers().join(",")];
    for item in items {
        let cells: Vec<String> = item.row().iter().map(|c| escape_csv(c)).collect();
        lines.push(cells.join(","));
    }
    lines.join("\n")
}

/// Render as a JSON array; an empty collection prints `[]`
pub fn render_json<T: Serialize>(items: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

pub fn render<T: Tabular>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(items)),
        OutputFormat::Csv => Ok(render_csv(items)),
        OutputFormat::Json => render_json(items),
    }
}

/// Print items to stdout in the requested format
pub fn print_items<T: Tabular>(items: &[T], format: OutputFormat) -> Result<()> {
    println!("{}", render(items, format)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        key: String,
        value: String,
    }

    impl Tabular for Pair {
        fn headers() -> Vec<&'static str> {
            vec!["KEY", "VALUE"]
        }

        fn row(&self) -> Vec<String> {
            vec![self.key.clone(), self.value.clone()]
        }
    }

    fn pair(key: &str, value: &str) -> Pair {
        Pair {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_escape_csv_simple() {
        assert_eq!(escape_csv("simple"), "simple");
    }

    #[test]
    fn test_escape_csv_with_comma() {
        assert_eq!(escape_csv("has,comma"), "\"has,comma\"");
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        assert_eq!(escape_csv("has\"quote"), "\"has\"\"quote\"");
    }

    #[test]
    fn test_render_csv() {
        let csv = render_csv(&[pair("a", "1"), pair("b", "x,y")]);
        assert_eq!(csv, "KEY,VALUE\na,1\nb,\"x,y\"");
    }

    #[test]
    fn test_render_table_contains_rows() {
        let table = render_table(&[pair("alpha", "1")]);
        assert!(table.contains("KEY"));
        assert!(table.contains("alpha"));
    }

    #[test]
    fn test_render_json_empty_is_array() {
        let json = render_json::<Pair>(&[]).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let items = [pair("k", "v")];
        assert!(render(&items, OutputFormat::Json)
            .unwrap()
            .contains("\"key\": \"k\""));
        assert!(render(&items, OutputFormat::Csv)
            .unwrap()
            .starts_with("KEY,VALUE"));
    }
}
