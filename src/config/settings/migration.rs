// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Rewrite settings written by older versions before deserializing.
///
/// Early builds stored the archive size as a top-level `archive_size`
/// number; it now lives at `archive.capacity`.
pub(super) fn migrate_on_load(value: Value) -> Value {
    let mut map = match value {
        Value::Object(map) => map,
        other => return other,
    };

    if let Some(size) = map.remove("archive_size") {
        let archive = map
            .entry("archive")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Value::Object(archive_map) = archive {
            archive_map.entry("capacity").or_insert(size);
        }
    }

    Value::Object(map)
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}
