pub mod provisioner;
pub mod schema;

pub use provisioner::SchemaProvisioner;
pub use schema::{POSTS_DDL, TABLE_NAME};
