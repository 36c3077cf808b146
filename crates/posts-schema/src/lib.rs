pub mod column;
pub mod error;
pub mod report;

pub use column::{ColumnInfo, IndexInfo, KeyRole};
pub use error::ProvisionError;
pub use report::{ConsoleReporter, SchemaReporter};

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
