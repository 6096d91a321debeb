use anyhow::Result;

use daybook::config::LedgerPaths;
use daybook::services::LedgerService;
use daybook::storage::{migrate_legacy_files, LedgerDir};

fn main() -> Result<()> {
    let paths = LedgerPaths::new();

    // Convert any comma-delimited files left by old versions before anything
    // reads them. A migration failure is reported but never blocks the menu.
    match migrate_legacy_files(&LedgerDir::new(paths.data_dir())) {
        Ok(0) => {}
        Ok(n) => println!("Migrated {} old expense file(s) to the current format.", n),
        Err(err) => eprintln!("Warning: could not migrate old expense files: {}", err),
    }

    let service = LedgerService::new(&paths);
    daybook::menu::run(&service)?;

    Ok(())
}
