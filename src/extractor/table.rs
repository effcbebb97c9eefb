//! Built-in crop table
//!
//! The icon positions ship as a TOML document compiled into the binary.
//! It is parsed once on first use and cached for the rest of the run.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::debug;

use crate::errors::{ExtractError, ExtractResult};
use super::crop_box::CropBox;
use super::crop_spec::CropSpec;

lazy_static! {
    static ref ICON_TABLE: Result<Vec<CropSpec>, String> = {
        let content = include_str!("../../icons.toml");
        parse_crop_table(content).map_err(|e| e.to_string())
    };
}

/// Get the built-in crop table in declaration order
pub fn icon_table() -> ExtractResult<&'static [CropSpec]> {
    match &*ICON_TABLE {
        Ok(specs) => Ok(specs.as_slice()),
        Err(msg) => Err(ExtractError::Table(msg.clone())),
    }
}

/// Parse a crop table from a TOML string
///
/// Expects an `[[icon]]` array whose entries carry `name`, `box` (four
/// integers) and `description`. Names must be unique and boxes must not be
/// degenerate.
pub fn parse_crop_table(content: &str) -> ExtractResult<Vec<CropSpec>> {
    let toml_value: toml::Value = content.parse()
        .map_err(|e| ExtractError::Table(format!("Failed to parse TOML: {}", e)))?;

    let entries = toml_value.get("icon")
        .and_then(|v| v.as_array())
        .ok_or_else(|| ExtractError::Table("Missing [[icon]] entries".to_string()))?;

    let mut specs = Vec::with_capacity(entries.len());
    let mut seen_names = HashSet::new();

    for (index, entry) in entries.iter().enumerate() {
        let name = string_field(entry, "name", index)?;
        let description = string_field(entry, "description", index)?;

        let coords = entry.get("box")
            .and_then(|v| v.as_array())
            .ok_or_else(|| ExtractError::Table(format!("Entry {} has no box", index)))?
            .iter()
            .map(|v| v.as_integer()
                .ok_or_else(|| ExtractError::Table(format!("Entry {} box holds a non-integer", index))))
            .collect::<ExtractResult<Vec<i64>>>()?;

        let crop_box = CropBox::from_slice(&coords)
            .map_err(|e| ExtractError::Table(format!("Entry {}: {}", index, e)))?;

        if crop_box.is_degenerate() {
            return Err(ExtractError::InvalidBox { name, crop_box });
        }

        if !seen_names.insert(name.clone()) {
            return Err(ExtractError::Table(format!("Duplicate icon name: {}", name)));
        }

        debug!("Crop table entry {}: {} {}", index, name, crop_box);
        specs.push(CropSpec::new(name, crop_box, description));
    }

    Ok(specs)
}

fn string_field(entry: &toml::Value, key: &str, index: usize) -> ExtractResult<String> {
    entry.get(key)
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| ExtractError::Table(format!("Entry {} is missing '{}'", index, key)))
}
