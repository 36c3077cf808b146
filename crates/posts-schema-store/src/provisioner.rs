use std::path::Path;

use posts_schema::{ColumnInfo, IndexInfo, KeyRole, ProvisionError, SchemaReporter};

use crate::schema;

/// Creates and inspects the `posts` table in a SQLite database.
///
/// The connection is scoped to one provisioning run: opened up front,
/// used for the DDL and the metadata queries, released on drop.
#[derive(Debug)]
pub struct SchemaProvisioner {
    conn: rusqlite::Connection,
}

impl SchemaProvisioner {
    /// Open a database file on disk, creating it if absent.
    pub fn open(path: &Path) -> Result<Self, ProvisionError> {
        let conn = rusqlite::Connection::open(path)
            .map_err(|e| ProvisionError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, ProvisionError> {
        let conn = rusqlite::Connection::open_in_memory()
            .map_err(|e| ProvisionError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Create the table and its indexes if absent. Safe to run repeatedly;
    /// an already-provisioned database is left untouched.
    ///
    /// A pre-existing `posts` table with a different layout surfaces here:
    /// the table statement no-ops, but index creation then fails against
    /// the incompatible columns.
    pub fn ensure_schema(&self) -> Result<(), ProvisionError> {
        self.conn
            .execute_batch(schema::POSTS_DDL)
            .map_err(|e| ProvisionError::Schema(e.to_string()))
    }

    /// Whether the table exists at all.
    pub fn table_exists(&self) -> Result<bool, ProvisionError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                [schema::TABLE_NAME],
                |row| row.get(0),
            )
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;
        Ok(count > 0)
    }

    /// Column layout as reported by the engine, in declaration order.
    ///
    /// Fails if the table is absent, since a provisioned database always
    /// has it.
    pub fn describe_columns(&self) -> Result<Vec<ColumnInfo>, ProvisionError> {
        let indexes = self.describe_indexes()?;

        let mut stmt = self
            .conn
            .prepare("PRAGMA table_info(posts)")
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;

        let rows = stmt
            .query_map([], |row| {
                let name: String = row.get(1)?;
                let type_name: String = row.get(2)?;
                let notnull: bool = row.get(3)?;
                let default: Option<String> = row.get(4)?;
                let pk: i64 = row.get(5)?;
                Ok((name, type_name, notnull, default, pk > 0))
            })
            .map_err(|e| ProvisionError::Schema(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;

        if rows.is_empty() {
            return Err(ProvisionError::Schema(format!(
                "table '{}' does not exist",
                schema::TABLE_NAME
            )));
        }

        let columns = rows
            .into_iter()
            .map(|(name, type_name, notnull, default, pk)| {
                let key = key_role(&name, pk, &indexes);
                ColumnInfo {
                    name,
                    type_name,
                    nullable: !notnull,
                    default,
                    key,
                }
            })
            .collect();

        Ok(columns)
    }

    /// Secondary indexes on the table, excluding SQLite-internal
    /// autoindexes.
    pub fn describe_indexes(&self) -> Result<Vec<IndexInfo>, ProvisionError> {
        let mut stmt = self
            .conn
            .prepare("PRAGMA index_list(posts)")
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;

        let listed = stmt
            .query_map([], |row| {
                let name: String = row.get(1)?;
                let unique: bool = row.get(2)?;
                Ok((name, unique))
            })
            .map_err(|e| ProvisionError::Schema(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;

        let mut indexes = Vec::with_capacity(listed.len());
        for (name, unique) in listed {
            if name.starts_with("sqlite_") {
                continue;
            }
            let columns = self.index_columns(&name)?;
            indexes.push(IndexInfo {
                name,
                unique,
                columns,
            });
        }

        Ok(indexes)
    }

    fn index_columns(&self, index: &str) -> Result<Vec<String>, ProvisionError> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_index_info(?1) ORDER BY seqno")
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;

        // The name is NULL for rowid or expression members; only named
        // columns are part of the reported layout.
        let columns = stmt
            .query_map([index], |row| row.get::<_, Option<String>>(0))
            .map_err(|e| ProvisionError::Schema(e.to_string()))?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| ProvisionError::Schema(e.to_string()))?;

        Ok(columns.into_iter().flatten().collect())
    }

    /// Read the layout back from the engine and feed it to the reporter:
    /// the table name first, then every column, then every index.
    pub fn report(&self, reporter: &mut dyn SchemaReporter) -> Result<(), ProvisionError> {
        let columns = self.describe_columns()?;
        let indexes = self.describe_indexes()?;

        reporter.begin_table(schema::TABLE_NAME);
        for column in &columns {
            reporter.column(column);
        }
        for index in &indexes {
            reporter.index(index);
        }

        Ok(())
    }

    /// Full provisioning run: ensure the schema, then report the layout
    /// the engine actually ended up with.
    pub fn provision(&self, reporter: &mut dyn SchemaReporter) -> Result<(), ProvisionError> {
        self.ensure_schema()?;
        self.report(reporter)
    }

    /// Borrow the underlying connection (for tests exercising the
    /// provisioned schema).
    pub fn connection(&self) -> &rusqlite::Connection {
        &self.conn
    }
}

/// DESCRIBE-style key role: the primary key wins, then the leading column
/// of a unique index, then the leading column of a plain index.
fn key_role(column: &str, pk: bool, indexes: &[IndexInfo]) -> KeyRole {
    if pk {
        return KeyRole::Primary;
    }

    let leads = |unique: bool| {
        indexes
            .iter()
            .any(|i| i.unique == unique && i.columns.first().is_some_and(|c| c == column))
    };

    if leads(true) {
        KeyRole::Unique
    } else if leads(false) {
        KeyRole::Indexed
    } else {
        KeyRole::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(name: &str, unique: bool, columns: &[&str]) -> IndexInfo {
        IndexInfo {
            name: name.to_owned(),
            unique,
            columns: columns.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    #[test]
    fn primary_key_wins_over_indexes() {
        let indexes = vec![index("uq_id", true, &["id"])];
        assert_eq!(key_role("id", true, &indexes), KeyRole::Primary);
    }

    #[test]
    fn leading_unique_column_is_unique() {
        let indexes = vec![index("uq_posts_source_url", true, &["source_url"])];
        assert_eq!(key_role("source_url", false, &indexes), KeyRole::Unique);
    }

    #[test]
    fn leading_plain_column_is_indexed() {
        let indexes = vec![index("idx_posts_kw_year", false, &["year", "kw"])];
        assert_eq!(key_role("year", false, &indexes), KeyRole::Indexed);
    }

    #[test]
    fn trailing_index_column_has_no_role() {
        let indexes = vec![index("idx_posts_kw_year", false, &["year", "kw"])];
        assert_eq!(key_role("kw", false, &indexes), KeyRole::None);
    }
}
