use std::fmt;

/// How a column participates in keys and indexes, in the spirit of the
/// `Key` column of a DESCRIBE listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Not part of any key or index.
    None,
    /// Primary key column.
    Primary,
    /// First column of a unique index.
    Unique,
    /// First column of a non-unique index.
    Indexed,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::Primary => f.write_str("PRI"),
            Self::Unique => f.write_str("UNI"),
            Self::Indexed => f.write_str("MUL"),
        }
    }
}

/// Engine-reported description of a single column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    /// Declared type, exactly as the engine stores it (e.g. `VARCHAR(500)`).
    pub type_name: String,
    pub nullable: bool,
    /// Default expression, if one was declared (e.g. `'News'`,
    /// `CURRENT_TIMESTAMP`).
    pub default: Option<String>,
    pub key: KeyRole,
}

/// Engine-reported description of a secondary index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexInfo {
    pub name: String,
    pub unique: bool,
    /// Indexed columns in index order.
    pub columns: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_role_display_matches_describe_conventions() {
        assert_eq!(KeyRole::None.to_string(), "");
        assert_eq!(KeyRole::Primary.to_string(), "PRI");
        assert_eq!(KeyRole::Unique.to_string(), "UNI");
        assert_eq!(KeyRole::Indexed.to_string(), "MUL");
    }
}
