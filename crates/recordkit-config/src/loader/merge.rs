//! Layer merging.

use serde_json::Value;

/// Lay `layer` over `base`. Objects merge key by key; any other value replaces
/// what was below it, including whole arrays.
pub(super) fn apply_layer(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Object(below), Value::Object(above)) => {
            for (key, value) in above {
                match below.get_mut(&key) {
                    Some(slot) => apply_layer(slot, value),
                    None => {
                        below.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
