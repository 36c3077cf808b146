use anyhow::Result;
use posts_schema::ConsoleReporter;
use posts_schema_store::SchemaProvisioner;

/// Create the schema if needed, then print the layout the engine reports.
pub fn run(provisioner: &SchemaProvisioner) -> Result<()> {
    provisioner
        .ensure_schema()
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    println!("Table 'posts' is ready.\n");

    let mut reporter = ConsoleReporter::new();
    provisioner
        .report(&mut reporter)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("\nDone.");
    Ok(())
}
