use std::env;
use std::fs;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use catalog_sql_import::Error;

const DEFAULT_SQL_PATH: &str = "data/import-products.sql";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

// Print the generated SQL file as base64 for manual transfer to the
// production host. No network call happens here.
fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eprintln!("Usage: {} [import.sql]", args[0]);
        return Ok(());
    }

    let sql_path = args.get(1).map(String::as_str).unwrap_or(DEFAULT_SQL_PATH);
    let sql_content = fs::read_to_string(sql_path)?;

    println!("{}", STANDARD.encode(sql_content.as_bytes()));
    Ok(())
}
