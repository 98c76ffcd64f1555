//! Setting paths and value helpers.
//!
//! Settings are addressed by dot-separated paths ("mfaEnabled",
//! "verification.autoShare"). Restriction matching is exact string
//! equality on the full path; the dot structure only matters when
//! resolving a path inside a nested settings snapshot.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A dot-separated settings path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingPath(String);

impl SettingPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments, split on '.'.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for SettingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SettingPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<String> for SettingPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Truthiness of a candidate setting value.
///
/// Policy rules phrased as "candidate is falsy" treat `false`, `null`,
/// numeric zero, and the empty string as falsy; everything else,
/// including empty arrays and objects, is truthy.
pub fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Resolve a dot path inside a nested settings snapshot.
///
/// A snapshot may store `verification.autoShare` either as a nested
/// object (`{"verification": {"autoShare": true}}`) or under the literal
/// dotted key; the flat key wins when both are present.
pub fn lookup_path<'a>(snapshot: &'a Value, path: &SettingPath) -> Option<&'a Value> {
    if let Some(flat) = snapshot.get(path.as_str()) {
        return Some(flat);
    }

    let mut current = snapshot;
    for segment in path.segments() {
        current = current.get(segment)?;
    }
    Some(current)
}
