//! Helpers for looking at a series of structured snapshots, such as the states a [`RingDeque`](crate::RingDeque) of
//! records accumulates over time.
//!
//! A snapshot is a JSON object mapping field names to leaf values. Leaves are booleans, numbers, strings, `null`,
//! or flat arrays of those. Nested objects are not walked by the differ; they are reported as an error instead.
//!
//! # Examples
//! ```
//! use ring_deque::RingDeque;
//! use ring_deque::snapshot::find_snapshot_differences;
//! use serde_json::json;
//!
//! let mut history = RingDeque::new();
//! history.push_back(json!({ "pc": 256, "halted": false, "regs": [1, 2, 3] }));
//! history.push_back(json!({ "pc": 260, "halted": false, "regs": [1, 2, 3] }));
//!
//! let diff = find_snapshot_differences(history.iter()).unwrap();
//! assert_eq!(diff.changed, vec!["pc"]);
//! assert_eq!(diff.unchanged, vec!["halted", "regs"]);
//! ```

use serde_json::{Map, Number, Value};
use std::fmt;

/// Ways a snapshot can fail to be the flat record these helpers expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    /// `field` of the snapshot at `index` holds an object, or an array with a nested container in it.
    UnsupportedLeafShape { field: String, index: usize },
    /// The snapshot at `index` is not a JSON object.
    NotARecord { index: usize },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::UnsupportedLeafShape { field, index } => write!(
                f,
                "field `{}` of snapshot {} is not a flat leaf value",
                field, index
            ),
            SnapshotError::NotARecord { index } => {
                write!(f, "snapshot {} is not a record of named fields", index)
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// The fields of a snapshot series, split by whether their value ever moved.
/// Both lists follow the field order of the first snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotDiff {
    pub changed: Vec<String>,
    pub unchanged: Vec<String>,
}

/// Splits the fields of the first snapshot into those whose value differs in at least one later snapshot
/// and those that stay the same throughout.
///
/// A field missing from a later snapshot counts as `null`. Numbers compare by value, so `1` and `1.0` are equal.
/// Arrays compare by length and then element by element, where elements of different kinds meet as numbers,
/// so `[1, 0]` equals `[true, false]` and `["2"]` equals `[2]`. Top-level values of different kinds never match.
/// Fields that only appear after the first snapshot are ignored.
///
/// # Errors
/// [`SnapshotError::NotARecord`] if any snapshot is not an object.
/// [`SnapshotError::UnsupportedLeafShape`] if a compared value is an object or a nested array.
/// Comparison of a field stops at its first difference, so later values of an already-changed field are not checked.
///
/// # Examples
/// ```
/// # use ring_deque::snapshot::find_snapshot_differences;
/// # use serde_json::json;
/// let frames = [json!({ "a": 1, "b": "x" }), json!({ "a": 1.0, "b": "y" })];
/// let diff = find_snapshot_differences(&frames).unwrap();
/// assert_eq!(diff.changed, vec!["b"]);
/// assert_eq!(diff.unchanged, vec!["a"]);
/// ```
pub fn find_snapshot_differences<'a, I>(snapshots: I) -> Result<SnapshotDiff, SnapshotError>
where
    I: IntoIterator<Item = &'a Value>,
{
    let records = snapshots
        .into_iter()
        .enumerate()
        .map(|(index, snapshot)| as_record(snapshot, index))
        .collect::<Result<Vec<_>, _>>()?;

    let mut diff = SnapshotDiff::default();
    let Some((first, rest)) = records.split_first() else {
        return Ok(diff);
    };

    for (field, lhs) in first.iter() {
        if !rest.is_empty() && !is_flat_leaf(lhs) {
            return Err(SnapshotError::UnsupportedLeafShape {
                field: field.clone(),
                index: 0,
            });
        }
        let mut changed = false;
        for (offset, record) in rest.iter().enumerate() {
            let rhs = record.get(field).unwrap_or(&Value::Null);
            if !is_flat_leaf(rhs) {
                return Err(SnapshotError::UnsupportedLeafShape {
                    field: field.clone(),
                    index: offset + 1,
                });
            }
            if !leaf_eq(lhs, rhs) {
                changed = true;
                break;
            }
        }
        if changed {
            diff.changed.push(field.clone());
        } else {
            diff.unchanged.push(field.clone());
        }
    }

    log::debug!(
        "{} of {} fields changed across {} snapshots",
        diff.changed.len(),
        first.len(),
        records.len()
    );
    Ok(diff)
}

/// Coarse type of a snapshot field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ShapeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ShapeKind::Null,
            Value::Bool(_) => ShapeKind::Bool,
            Value::Number(_) => ShapeKind::Number,
            Value::String(_) => ShapeKind::String,
            Value::Array(_) => ShapeKind::Array,
            Value::Object(_) => ShapeKind::Object,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Null => "null",
            ShapeKind::Bool => "boolean",
            ShapeKind::Number => "number",
            ShapeKind::String => "string",
            ShapeKind::Array => "array",
            ShapeKind::Object => "object",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What [`describe_shape`] reports for one top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldShape {
    pub field: String,
    pub kind: ShapeKind,
    /// Elements for arrays, fields for objects, bytes for strings, 1 for other scalars and 0 for `null`.
    pub count: usize,
    /// Rough in-memory size. Containers assume every element is as large as their first one.
    pub estimated_bytes: usize,
}

/// Reports the type and rough size of every top-level field of `snapshot`, in field order.
///
/// Booleans count as 1 byte, numbers as 8 and strings as their UTF-8 length.
/// Arrays and objects are estimated as `count * size of the first element`, which is cheap but not exact.
///
/// # Errors
/// [`SnapshotError::NotARecord`] if `snapshot` is not an object.
///
/// # Examples
/// ```
/// # use ring_deque::snapshot::{describe_shape, ShapeKind};
/// # use serde_json::json;
/// let shapes = describe_shape(&json!({ "vram": [0, 0, 0, 0], "name": "boot" })).unwrap();
/// assert_eq!(shapes[0].kind, ShapeKind::Array);
/// assert_eq!(shapes[0].estimated_bytes, 32);
/// assert_eq!(shapes[1].estimated_bytes, 4);
/// ```
pub fn describe_shape(snapshot: &Value) -> Result<Vec<FieldShape>, SnapshotError> {
    let record = as_record(snapshot, 0)?;
    Ok(record
        .iter()
        .map(|(field, value)| FieldShape {
            field: field.clone(),
            kind: ShapeKind::of(value),
            count: count_of(value),
            estimated_bytes: estimate_bytes(value),
        })
        .collect())
}

fn as_record(snapshot: &Value, index: usize) -> Result<&Map<String, Value>, SnapshotError> {
    snapshot
        .as_object()
        .ok_or(SnapshotError::NotARecord { index })
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}

fn is_flat_leaf(value: &Value) -> bool {
    match value {
        Value::Object(_) => false,
        Value::Array(items) => items.iter().all(is_scalar),
        _ => true,
    }
}

// Both sides must already have passed `is_flat_leaf`.
// Top-level values of different kinds never match; array elements are compared loosely.
fn leaf_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| loose_scalar_eq(x, y))
        }
        _ => false,
    }
}

// Scalars of different kinds meet as numbers: `true` is 1, `"2.5"` is 2.5, `""` is 0.
// `null` only matches `null`.
fn loose_scalar_eq(lhs: &Value, rhs: &Value) -> bool {
    match (lhs, rhs) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_eq(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => match (scalar_as_f64(lhs), scalar_as_f64(rhs)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        },
    }
}

fn scalar_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => Some(string_as_f64(s)),
        _ => None,
    }
}

// Non-numeric text becomes NaN, which equals nothing.
fn string_as_f64(s: &str) -> f64 {
    let s = s.trim();
    match s {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if s
            .chars()
            .any(|c| c.is_alphabetic() && c != 'e' && c != 'E') =>
        {
            f64::NAN
        }
        _ => s.parse().unwrap_or(f64::NAN),
    }
}

fn number_eq(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}

fn count_of(value: &Value) -> usize {
    match value {
        Value::Null => 0,
        Value::Bool(_) | Value::Number(_) => 1,
        Value::String(s) => s.len(),
        Value::Array(items) => items.len(),
        Value::Object(fields) => fields.len(),
    }
}

fn estimate_bytes(value: &Value) -> usize {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 8,
        Value::String(s) => s.len(),
        Value::Array(items) => items
            .len()
            .saturating_mul(items.first().map_or(0, estimate_bytes)),
        Value::Object(fields) => fields
            .len()
            .saturating_mul(fields.values().next().map_or(0, estimate_bytes)),
    }
}
