//! Helper functions available to every template.
//!
//! Tera functions take keyword arguments: `add(a=1, b=2)`,
//! `slice(items=post.gallery, start=1, end=3)`.

use std::collections::HashMap;

use tera::{Result, Tera, Value};

pub fn register(tera: &mut Tera) {
    tera.register_function("add", add);
    tera.register_function("sub", sub);
    tera.register_function("slice", slice);
}

fn int_arg(args: &HashMap<String, Value>, fn_name: &str, key: &str) -> Result<i64> {
    args.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| tera::Error::msg(format!("`{fn_name}` requires an integer `{key}` argument")))
}

fn add(args: &HashMap<String, Value>) -> Result<Value> {
    let a = int_arg(args, "add", "a")?;
    let b = int_arg(args, "add", "b")?;
    Ok(Value::from(a.saturating_add(b)))
}

fn sub(args: &HashMap<String, Value>) -> Result<Value> {
    let a = int_arg(args, "sub", "a")?;
    let b = int_arg(args, "sub", "b")?;
    Ok(Value::from(a.saturating_sub(b)))
}

/// `items[start..end]`, or an empty list when the bounds don't fit.
fn slice(args: &HashMap<String, Value>) -> Result<Value> {
    let items = match args.get("items") {
        Some(Value::Array(items)) => items,
        Some(Value::Null) | None => return Ok(Value::Array(Vec::new())),
        Some(other) => {
            return Err(tera::Error::msg(format!(
                "`slice` expects a list for `items`, got {other}"
            )))
        }
    };
    let start = int_arg(args, "slice", "start")?;
    let end = int_arg(args, "slice", "end")?;

    let in_bounds = start >= 0 && start <= end && end as u64 <= items.len() as u64;
    if !in_bounds {
        return Ok(Value::Array(Vec::new()));
    }

    Ok(Value::Array(items[start as usize..end as usize].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: Value) -> HashMap<String, Value> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(add(&args(json!({"a": 2, "b": 3}))).unwrap(), json!(5));
        assert_eq!(sub(&args(json!({"a": 2, "b": 3}))).unwrap(), json!(-1));
        assert!(add(&args(json!({"a": 2}))).is_err());
    }

    #[test]
    fn test_slice_in_bounds() {
        let out = slice(&args(json!({"items": [1, 2, 3, 4], "start": 1, "end": 3}))).unwrap();
        assert_eq!(out, json!([2, 3]));
        let whole = slice(&args(json!({"items": [1, 2], "start": 0, "end": 2}))).unwrap();
        assert_eq!(whole, json!([1, 2]));
    }

    #[test]
    fn test_slice_out_of_bounds_is_empty() {
        for (start, end) in [(-1, 2), (0, 5), (3, 1)] {
            let out = slice(&args(json!({"items": [1, 2, 3], "start": start, "end": end}))).unwrap();
            assert_eq!(out, json!([]), "start={start} end={end}");
        }
    }

    #[test]
    fn test_slice_missing_items_is_empty() {
        let out = slice(&args(json!({"start": 0, "end": 1}))).unwrap();
        assert_eq!(out, json!([]));
    }
}
