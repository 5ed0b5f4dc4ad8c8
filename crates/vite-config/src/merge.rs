//! Merging of raw option maps
//!
//! Source layers are combined with [`overlay`]: the later layer replaces
//! whole values key by key. Sections of the same file are combined with
//! [`deep_merge`], which recurses into nested objects.

use serde_json::{Map, Value};

/// Untyped options keyed by canonical (snake_case) name.
pub type RawOptionMap = Map<String, Value>;

/// Apply `other` on top of `base`; colliding keys take `other`'s value.
pub fn overlay(base: &mut RawOptionMap, other: RawOptionMap) {
    base.extend(other);
}

/// Deep merge `other` into `base`.
///
/// Nested objects merge by key with `other` taking precedence; any other
/// collision is won by `other`.
pub fn deep_merge(base: &mut RawOptionMap, other: RawOptionMap) {
    for (key, other_value) in other {
        match other_value {
            Value::Object(other_map) => {
                if let Some(Value::Object(base_map)) = base.get_mut(&key) {
                    deep_merge(base_map, other_map);
                } else {
                    base.insert(key, Value::Object(other_map));
                }
            }
            other_value => {
                base.insert(key, other_value);
            }
        }
    }
}
