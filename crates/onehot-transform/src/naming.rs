//! Indicator column naming.

use std::collections::HashSet;

use onehot_model::Category;
use polars::prelude::DataFrame;

use crate::error::{EncodeError, Result};

/// Prefix of the single indicator column produced by binary encoding.
pub const BINARY_PREFIX: &str = "one_hot_";

/// Turns a category into the name of its indicator column.
pub type CategoryNamer = fn(&Category) -> String;

/// Default namer: the category's own text, `null` for missing values.
pub fn literal_name(category: &Category) -> String {
    category.label().to_string()
}

/// Name of the binary indicator column for `column`.
pub fn binary_indicator_name(column: &str) -> String {
    format!("{BINARY_PREFIX}{column}")
}

/// Check that `names` are unique and free in `retained`.
///
/// `retained` is the table after the encoded column has been dropped, so a
/// category that happens to share the encoded column's own name is allowed.
pub(crate) fn ensure_free(retained: &DataFrame, names: &[String]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(names.len());
    for name in names {
        if retained.get_column_index(name).is_some() || !seen.insert(name.as_str()) {
            return Err(EncodeError::NamingCollision { name: name.clone() });
        }
    }
    Ok(())
}
