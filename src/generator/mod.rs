mod escape;
mod slug;
mod statement;

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use indicatif::{ProgressBar, ProgressStyle};

use crate::catalog::Catalog;
use crate::error::Error;

pub use self::escape::escape_sql;
pub use self::slug::slugify;
pub use self::statement::render_product_block;

// Fixed header naming the target database and the command that applies
// the generated script.
pub const DOCUMENT_HEADER: &str = "\
-- Art catalog product import
-- Database: SQLite at /opt/websites/k-liee.com/data/db/sqlite/app.db
-- Run: sqlite3 /opt/websites/k-liee.com/data/db/sqlite/app.db < import-products.sql

BEGIN TRANSACTION;

";

pub const DOCUMENT_FOOTER: &str = "\
COMMIT;

-- Verify import
SELECT 'Imported ' || COUNT(*) || ' products' as result FROM artworks;
SELECT 'Total media files: ' || COUNT(*) as result FROM media;
SELECT 'Featured products: ' || COUNT(*) as result FROM artworks WHERE is_featured = 1;
";

// Render the complete SQL document for a catalog. No filesystem access;
// per-record rendering lives in `statement`, text is only joined here.
pub fn render_document(catalog: &Catalog) -> Result<String, Error> {
    let blocks = catalog
        .products
        .iter()
        .enumerate()
        .map(|(idx, product)| statement::render_product_block(product, idx + 1))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(assemble_document(&blocks))
}

fn assemble_document(blocks: &[String]) -> String {
    let mut sql = String::from(DOCUMENT_HEADER);
    for block in blocks {
        sql.push_str(block);
    }
    sql.push_str(DOCUMENT_FOOTER);
    sql
}

pub struct SqlImportGenerator {
    catalog: Catalog,
    output_path: PathBuf,
    run_log: RunLog,
}

struct RunLog {
    log_file: File,
    log_path: PathBuf,
    start_time: Instant,
}

impl RunLog {
    fn new(log_dir: &Path) -> Result<Self, Error> {
        fs::create_dir_all(log_dir)?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("import_{}.log", timestamp));

        let mut log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        writeln!(log_file, "=== Log started at {} ===", timestamp)?;

        Ok(Self {
            log_file,
            log_path,
            start_time: Instant::now(),
        })
    }

    fn log(&mut self, message: &str) -> Result<(), Error> {
        let elapsed = self.start_time.elapsed();
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        writeln!(
            self.log_file,
            "[{} +{}s] {}",
            timestamp,
            elapsed.as_secs(),
            message
        )?;
        self.log_file.flush()?;
        Ok(())
    }

    fn get_log_path(&self) -> &Path {
        &self.log_path
    }
}

impl SqlImportGenerator {
    pub fn new(catalog: Catalog, output_path: PathBuf, log_dir: &Path) -> Result<Self, Error> {
        let run_log = RunLog::new(log_dir)?;

        Ok(Self {
            catalog,
            output_path,
            run_log,
        })
    }

    // Generate the SQL document and write it to the output path, returning
    // the number of records processed. The output file is only opened after
    // the whole document is rendered, so a failed record leaves no partial
    // output behind.
    pub fn run(&mut self) -> Result<usize, Error> {
        self.run_log.log("Starting SQL generation")?;

        let progress_bar = ProgressBar::new(self.catalog.products.len() as u64);
        progress_bar.set_style(ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map_err(|e| Error::Generation(format!("Failed to set progress bar style: {}", e)))?);

        let mut blocks = Vec::with_capacity(self.catalog.products.len());
        for (idx, product) in self.catalog.products.iter().enumerate() {
            blocks.push(statement::render_product_block(product, idx + 1)?);
            progress_bar.inc(1);
        }
        progress_bar.finish_with_message("Generation complete");

        self.run_log
            .log(&format!("Rendered {} product blocks", blocks.len()))?;

        let document = assemble_document(&blocks);
        fs::write(&self.output_path, document)?;

        self.run_log
            .log(&format!("Wrote SQL import to {}", self.output_path.display()))?;

        Ok(blocks.len())
    }
}
