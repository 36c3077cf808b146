/// Errors that can occur while provisioning or inspecting the schema.
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    /// The database could not be opened at all.
    #[error("connection error: {0}")]
    Connection(String),

    /// The connection works but the DDL or the metadata query failed.
    #[error("schema error: {0}")]
    Schema(String),
}
