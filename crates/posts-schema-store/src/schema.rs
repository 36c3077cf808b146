pub const TABLE_NAME: &str = "posts";

/// Table and index layout for the news archive.
///
/// Other tools insert and query rows in this table; this crate only
/// guarantees the layout exists. Declared types keep the wire-contract
/// names (`VARCHAR(n)`, `JSON`, ...) so the metadata listing is faithful;
/// SQLite ignores declared lengths, so the caps are enforced with CHECK
/// constraints instead. `kw` is the ISO calendar week (1-53), left
/// unchecked on purpose since writers own the row lifecycle.
pub const POSTS_DDL: &str = r#"
BEGIN;

CREATE TABLE
    IF NOT EXISTS posts (
        id          INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
        title       VARCHAR(500)      NOT NULL CHECK (length (title) <= 500),
        summary     TEXT              NOT NULL,
        source      VARCHAR(255)      NOT NULL DEFAULT 'Unbekannt' CHECK (length (source) <= 255),
        source_url  VARCHAR(1000)     NOT NULL CHECK (length (source_url) <= 1000),
        category    VARCHAR(50)       NOT NULL DEFAULT 'News' CHECK (length (category) <= 50),
        date        DATE              NOT NULL,
        tags        JSON              DEFAULT NULL CHECK (
            tags IS NULL
            OR json_valid (tags)
        ),
        kw          TINYINT UNSIGNED  NOT NULL,
        year        SMALLINT UNSIGNED NOT NULL,
        created_at  TIMESTAMP         DEFAULT CURRENT_TIMESTAMP
    );

CREATE UNIQUE INDEX IF NOT EXISTS uq_posts_source_url ON posts (source_url);

CREATE INDEX IF NOT EXISTS idx_posts_kw_year ON posts (year, kw);

CREATE INDEX IF NOT EXISTS idx_posts_date ON posts (date);

COMMIT;
"#;
