use std::env;
use std::path::{Path, PathBuf};
use catalog_sql_import::{Catalog, Error, SqlImportGenerator};

const DEFAULT_CATALOG_PATH: &str = "data/products.yaml";
const DEFAULT_OUTPUT_PATH: &str = "data/import-products.sql";
const LOG_DIRECTORY: &str = "logs";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 3 {
        eprintln!("Usage: {} [catalog.yaml] [output.sql]", args[0]);
        return Ok(());
    }

    let catalog_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_CATALOG_PATH);
    let output_path = args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT_PATH);

    let catalog = Catalog::from_file(catalog_path)?;

    let mut generator = SqlImportGenerator::new(
        catalog,
        PathBuf::from(output_path),
        Path::new(LOG_DIRECTORY),
    )?;

    let count = generator.run()?;

    println!("✅ Generated SQL for {} products", count);
    println!("📁 Output: {}", output_path);
    Ok(())
}
