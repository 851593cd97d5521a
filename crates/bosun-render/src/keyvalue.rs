//! Deterministic rendering of unordered key/value collections.
//!
//! Label maps, annotations, and selectors arrive as hash maps with no
//! iteration-order guarantee. Every serializer here sorts keys byte-wise so
//! that logically equal maps always render byte-identical strings, which
//! keeps table diffs and snapshots stable.

use std::collections::HashMap;

use serde_json::Value;

use crate::sentinel::Outcome;

/// Flatten a label map to sorted `k=v` pairs joined with commas.
pub fn map_to_str(m: &HashMap<String, String>) -> String {
    join_sorted(m, ",")
}

/// Flatten a map selector to its canonical `k=v,k=v` string form.
pub fn to_selector(m: &HashMap<String, String>) -> String {
    join_sorted(m, ",")
}

fn join_sorted(m: &HashMap<String, String>, sep: &str) -> String {
    if m.is_empty() {
        return String::new();
    }
    let mut keys: Vec<&String> = m.keys().collect();
    keys.sort();

    let mut out = String::with_capacity(m.len() * 16);
    for (i, k) in keys.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(k);
        out.push('=');
        out.push_str(&m[*k]);
    }
    out
}

/// Flatten a loosely typed object to sorted `k=v` pairs joined with spaces.
///
/// Only string-valued entries render; numbers, bools, and nested structures
/// are skipped rather than coerced. Non-objects render as empty.
pub fn map_to_ifc(m: &Value) -> String {
    let Value::Object(mm) = m else {
        return String::new();
    };
    if mm.is_empty() {
        return String::new();
    }

    let mut keys: Vec<&String> = mm.keys().collect();
    keys.sort();

    let mut parts: Vec<String> = Vec::with_capacity(mm.len());
    for k in keys {
        if let Some(Value::String(s)) = mm.get(k) {
            parts.push(format!("{k}={s}"));
        }
    }
    parts.join(" ")
}

/// External selector-compiler collaborator.
///
/// Implemented by the domain's structured label-selector type; this core
/// only consumes the compiled string form.
pub trait CompileSelector {
    fn compile_selector(&self) -> anyhow::Result<String>;
}

/// Canonical string form of a structured selector expression.
///
/// A compile failure degrades the cell to the not-applicable marker and is
/// logged; the table keeps rendering.
pub fn as_selector(sel: &impl CompileSelector) -> String {
    match sel.compile_selector() {
        Ok(s) => Outcome::Value(s).render(),
        Err(err) => {
            tracing::warn!(error = %err, "selector conversion failed");
            Outcome::Malformed.render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentinel::NA_VALUE;
    use serde_json::json;

    #[test]
    fn empty_map_renders_empty() {
        assert_eq!(map_to_str(&HashMap::new()), "");
    }

    #[test]
    fn map_to_str_sorts_keys() {
        let mut m = HashMap::new();
        m.insert("zone".to_string(), "us-east".to_string());
        m.insert("app".to_string(), "api".to_string());
        m.insert("tier".to_string(), "backend".to_string());
        assert_eq!(map_to_str(&m), "app=api,tier=backend,zone=us-east");
    }

    #[test]
    fn map_to_str_is_insertion_order_independent() {
        let pairs = [("b", "2"), ("a", "1"), ("c", "3")];
        let forward: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let reversed: HashMap<String, String> = pairs
            .iter()
            .rev()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(map_to_str(&forward), map_to_str(&reversed));
        assert_eq!(map_to_str(&forward), "a=1,b=2,c=3");
    }

    #[test]
    fn to_selector_matches_canonical_form() {
        let mut m = HashMap::new();
        m.insert("release".to_string(), "stable".to_string());
        m.insert("app".to_string(), "web".to_string());
        assert_eq!(to_selector(&m), "app=web,release=stable");
    }

    #[test]
    fn map_to_ifc_skips_non_strings() {
        let v = json!({
            "app": "api",
            "replicas": 3,
            "enabled": true,
            "zone": "us-east",
        });
        assert_eq!(map_to_ifc(&v), "app=api zone=us-east");
    }

    #[test]
    fn map_to_ifc_non_object_is_empty() {
        assert_eq!(map_to_ifc(&Value::Null), "");
        assert_eq!(map_to_ifc(&json!([1, 2])), "");
        assert_eq!(map_to_ifc(&json!({})), "");
    }

    struct FakeSelector(Result<String, String>);

    impl CompileSelector for FakeSelector {
        fn compile_selector(&self) -> anyhow::Result<String> {
            match &self.0 {
                Ok(s) => Ok(s.clone()),
                Err(e) => Err(anyhow::anyhow!(e.clone())),
            }
        }
    }

    #[test]
    fn as_selector_passes_compiled_form_through() {
        let sel = FakeSelector(Ok("app in (web,api)".to_string()));
        assert_eq!(as_selector(&sel), "app in (web,api)");
    }

    #[test]
    fn as_selector_degrades_on_compile_failure() {
        let sel = FakeSelector(Err("bad operator".to_string()));
        assert_eq!(as_selector(&sel), NA_VALUE);
    }
}
