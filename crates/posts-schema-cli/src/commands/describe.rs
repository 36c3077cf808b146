use anyhow::Result;
use posts_schema::ConsoleReporter;
use posts_schema_store::SchemaProvisioner;

/// Print the current layout without touching the schema. Fails if the
/// table was never provisioned.
pub fn run(provisioner: &SchemaProvisioner) -> Result<()> {
    let mut reporter = ConsoleReporter::new();
    provisioner
        .report(&mut reporter)
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}
