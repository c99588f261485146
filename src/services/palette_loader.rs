use std::collections::HashSet;
use std::path::Path;

use lineart::{PaletteEntry, ReferencePalette, Rgb};
use serde_json::{Map, Value};

use crate::error::AppError;

/// Load a reference palette from a JSON file.
///
/// Two layouts are accepted:
///
/// - an object keyed by numeric id, ordered by ascending id:
///   `{"199": {"name": "Black", "hex": "#000000", "rgb": [0, 0, 0]}}`
/// - an array of entries: `[{"id": 199, "name": "Black", "hex": "#000000"}]`
///
/// Entries with a missing or invalid id, name or hex are skipped with a
/// warning, as are repeated ids. A palette without any usable entry is an
/// error.
pub fn load_palette(path: &Path) -> Result<ReferencePalette, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::PaletteLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let palette = parse_palette(&content, path)?;
    tracing::info!(path = %path.display(), entries = palette.len(), "Loaded palette");
    Ok(palette)
}

/// Parse palette JSON. `path` is only used for error context.
pub fn parse_palette(content: &str, path: &Path) -> Result<ReferencePalette, AppError> {
    let load_error = |reason: String| AppError::PaletteLoad {
        path: path.to_path_buf(),
        reason,
    };

    let root: Value = serde_json::from_str(content).map_err(|e| load_error(e.to_string()))?;

    let candidates: Vec<(Option<u32>, &Map<String, Value>)> = match &root {
        Value::Object(map) => {
            let mut keyed: Vec<(Option<u32>, &Map<String, Value>)> = map
                .iter()
                .filter_map(|(key, value)| match value.as_object() {
                    Some(fields) => Some((key.trim().parse().ok(), fields)),
                    None => {
                        tracing::warn!(key = %key, "Skipping palette entry that is not an object");
                        None
                    }
                })
                .collect();
            // Keys come back as sorted strings ("10" < "2"); palette order is numeric
            keyed.sort_by_key(|&(id, _)| id);
            keyed
        }
        Value::Array(items) => items
            .iter()
            .filter_map(|value| match value.as_object() {
                Some(fields) => Some((fields.get("id").and_then(parse_id), fields)),
                None => {
                    tracing::warn!("Skipping palette entry that is not an object");
                    None
                }
            })
            .collect(),
        _ => {
            return Err(load_error(
                "expected an object keyed by id or an array of entries".to_string(),
            ))
        }
    };

    let mut seen = HashSet::new();
    let mut entries = Vec::with_capacity(candidates.len());
    for (id, fields) in candidates {
        let Some(entry) = parse_entry(id, fields) else {
            continue;
        };
        if !seen.insert(entry.id) {
            tracing::warn!(id = entry.id, "Skipping palette entry with repeated id");
            continue;
        }
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(load_error("no valid palette entries".to_string()));
    }

    ReferencePalette::new(entries).map_err(|e| load_error(e.to_string()))
}

fn parse_id(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_entry(id: Option<u32>, fields: &Map<String, Value>) -> Option<PaletteEntry> {
    let name = fields.get("name").and_then(Value::as_str).map(str::trim);
    let hex = fields.get("hex").and_then(Value::as_str).map(str::trim);

    let (Some(id), Some(name), Some(hex)) = (id, name, hex) else {
        tracing::warn!(?id, ?name, ?hex, "Skipping palette entry with missing fields");
        return None;
    };
    if name.is_empty() {
        tracing::warn!(id, "Skipping palette entry with empty name");
        return None;
    }

    let mut entry = PaletteEntry::new(id, name, hex);
    if let Some(rgb) = fields.get("rgb") {
        match serde_json::from_value::<Rgb>(rgb.clone()) {
            Ok(rgb) => entry = entry.with_rgb(rgb),
            Err(e) => tracing::warn!(id, %e, "Ignoring malformed rgb, using hex"),
        }
    }

    // The hex must parse even when rgb is given: it is what users see
    if let Err(e) = hex.parse::<Rgb>() {
        tracing::warn!(id, hex, %e, "Skipping palette entry with invalid hex");
        return None;
    }

    Some(entry)
}
