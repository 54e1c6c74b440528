use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::Item;

/// Load items from a JSON file.
///
/// Order is preserved and duplicate names are kept. The first record that
/// breaks the item contract aborts the load.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let items = parse_items(&content)?;
    info!(count = items.len(), path = %path.display(), "loaded items");
    Ok(items)
}

/// Parse and validate a JSON array of items.
pub fn parse_items(json: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json)?;
    for item in &items {
        item.validate()?;
    }
    Ok(items)
}
