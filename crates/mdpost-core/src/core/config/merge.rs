use toml::{Table, Value};

/// Recursively merges two configuration tables, with `primary` taking
/// precedence.
///
/// Keys present only in `secondary` are copied unchanged. Keys present in
/// both recurse when both values are tables; otherwise `primary`'s value
/// replaces `secondary`'s wholesale, even when the shapes differ (a scalar in
/// `primary` fully shadows a table in `secondary`). Neither input is mutated
/// and the result shares no ownership with them.
///
/// Inherited keys keep `secondary`'s position and `primary`-only keys follow,
/// as far as the backing map preserves insertion order; no consumer depends
/// on key order.
pub fn merge(primary: &Table, secondary: &Table) -> Table {
    let mut merged = secondary.clone();
    for (key, value) in primary {
        let replacement = match (value, secondary.get(key)) {
            (Value::Table(sub_primary), Some(Value::Table(sub_secondary))) => {
                Value::Table(merge(sub_primary, sub_secondary))
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), replacement);
    }
    merged
}
