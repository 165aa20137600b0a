//! The `stockcheck init` command.

use anyhow::Result;

use stockcheck_core::config::CONFIG_FILE;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new(CONFIG_FILE);
    if path.exists() {
        println!("{CONFIG_FILE} already exists, skipping.");
    } else {
        std::fs::write(path, SAMPLE_CONFIG)?;
        println!("Created {CONFIG_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Run: stockcheck questions");
    println!("  2. Run: stockcheck diagnose --name 삼성전자 --price 71000 --interactive");
    println!("  3. Run: stockcheck history");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# stockcheck configuration

# Where diagnoses are saved (CSV, UTF-8 with BOM).
log_file = "stock_diagnosis_history.csv"

# Default output for `diagnose` and `history`: "text" or "json".
output_format = "text"
"#;
