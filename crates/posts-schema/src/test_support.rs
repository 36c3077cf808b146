use crate::column::{ColumnInfo, IndexInfo};
use crate::report::SchemaReporter;

/// Reporter that records everything it is given, so tests can assert on
/// structured descriptors instead of parsing printed text.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub tables: Vec<String>,
    pub columns: Vec<ColumnInfo>,
    pub indexes: Vec<IndexInfo>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of the recorded columns, in delivery order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

impl SchemaReporter for RecordingReporter {
    fn begin_table(&mut self, table: &str) {
        self.tables.push(table.to_owned());
    }

    fn column(&mut self, column: &ColumnInfo) {
        self.columns.push(column.clone());
    }

    fn index(&mut self, index: &IndexInfo) {
        self.indexes.push(index.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::KeyRole;

    #[test]
    fn recording_reporter_captures_delivery_order() {
        let mut reporter = RecordingReporter::new();
        reporter.begin_table("posts");
        reporter.column(&ColumnInfo {
            name: "id".to_owned(),
            type_name: "INTEGER".to_owned(),
            nullable: false,
            default: None,
            key: KeyRole::Primary,
        });
        reporter.column(&ColumnInfo {
            name: "title".to_owned(),
            type_name: "VARCHAR(500)".to_owned(),
            nullable: false,
            default: None,
            key: KeyRole::None,
        });

        assert_eq!(reporter.tables, vec!["posts"]);
        assert_eq!(reporter.column_names(), vec!["id", "title"]);
        assert!(reporter.indexes.is_empty());
    }
}
