pub mod digest;
pub mod enzymes;

use crate::enzyme::EnzymeCatalog;
use crate::errors::*;

/// Built-in catalog, unless a custom catalog was specified.
fn load_catalog(catalog: &Option<String>) -> Result<EnzymeCatalog> {
    match catalog {
        Some(filename) => {
            eprintln!("Reading enzyme catalog from {:?}", filename);
            let catalog = EnzymeCatalog::read(filename)?;
            eprintln!("  read {} enzymes from catalog.", catalog.len());

            Ok(catalog)
        }
        None => EnzymeCatalog::builtin().chain_err(|| "invalid built-in enzyme catalog"),
    }
}
