use crate::column::{ColumnInfo, IndexInfo};

const RULE_WIDTH: usize = 60;

/// Sink for a table layout as it is read back from the engine.
///
/// Reporters receive structured descriptors rather than preformatted
/// text, so callers can print, render, or assert on them as they see fit.
pub trait SchemaReporter {
    /// Called once before any columns, with the table name.
    fn begin_table(&mut self, table: &str);

    /// Called once per column, in declaration order.
    fn column(&mut self, column: &ColumnInfo);

    /// Called once per secondary index, after all columns.
    fn index(&mut self, index: &IndexInfo);
}

/// Reporter that prints the layout to stdout in DESCRIBE style.
#[derive(Debug, Default)]
pub struct ConsoleReporter {
    printed_index_header: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SchemaReporter for ConsoleReporter {
    fn begin_table(&mut self, table: &str) {
        println!("Structure of table '{table}':");
        println!("{}", "-".repeat(RULE_WIDTH));
    }

    fn column(&mut self, column: &ColumnInfo) {
        println!("{}", format_column_row(column));
    }

    fn index(&mut self, index: &IndexInfo) {
        if !self.printed_index_header {
            println!("\nIndexes:");
            self.printed_index_header = true;
        }
        println!("  {}", format_index_row(index));
    }
}

/// One column as a fixed-width row: name, declared type, key role.
pub fn format_column_row(column: &ColumnInfo) -> String {
    format!(
        "{:<15} {:<25} {}",
        column.name, column.type_name, column.key
    )
    .trim_end()
    .to_owned()
}

/// One index as a single line: name, uniqueness, covered columns.
pub fn format_index_row(index: &IndexInfo) -> String {
    let marker = if index.unique { "UNIQUE " } else { "" };
    format!("{} {}({})", index.name, marker, index.columns.join(", "))
}
