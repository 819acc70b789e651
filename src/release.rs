//! Release document model.
//!
//! Only the parts of a release response that the lister consumes are typed
//! here: the `assets` collection and each asset's `id` and `name`.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// An opaque JSON value rendered the way it reads in the document.
///
/// Strings are printed without quotes, integers exactly, floats in their
/// shortest form (`1.0` as `1`), `null` and missing values as the empty string.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Scalar(Option<Value>);

impl Scalar {
    pub fn is_missing(&self) -> bool {
        self.0.is_none()
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Scalar(None),
            other => Scalar(Some(other)),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            None => Ok(()),
            Some(Value::String(s)) => f.write_str(s),
            Some(Value::Number(n)) => match (n.as_u64(), n.as_i64(), n.as_f64()) {
                (Some(u), _, _) => write!(f, "{}", u),
                (_, Some(i), _) => write!(f, "{}", i),
                // `1.0` and `1e2` print as `1` and `100`
                (_, _, Some(x)) => write!(f, "{}", x),
                _ => write!(f, "{}", n),
            },
            Some(other) => write!(f, "{}", other),
        }
    }
}

/// A single downloadable artifact attached to a release.
#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Asset {
    #[serde(default)]
    pub id: Scalar,
    #[serde(default)]
    pub name: Scalar,
}

impl Asset {
    /// Build an asset from one element of the `assets` collection.
    ///
    /// Returns `None` when the element is not a JSON object.
    fn from_element(key: &str, element: Value) -> Option<Self> {
        if !element.is_object() {
            warn!("Skipping asset {}: expected an object, found {}", key, kind(&element));
            return None;
        }

        match serde_json::from_value::<Asset>(element) {
            Ok(asset) => {
                if asset.id.is_missing() {
                    debug!("Asset {} has no id, rendering it empty", key);
                }
                if asset.name.is_missing() {
                    debug!("Asset {} has no name, rendering it empty", key);
                }
                Some(asset)
            }
            Err(e) => {
                warn!("Skipping asset {}: {}", key, e);
                None
            }
        }
    }
}

/// The parsed release response, reduced to its assets in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseResponse {
    pub assets: Vec<Asset>,
}

impl ReleaseResponse {
    /// Parse a release document.
    ///
    /// A document without an `assets` field (or with `assets: null`) has no
    /// assets. `assets` may be an array or an object keyed by any string;
    /// either way elements keep the order they have in the text.
    #[tracing::instrument(skip(text))]
    pub fn parse(text: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(text).context("Failed to parse release JSON")?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let assets = match value {
            Value::Object(mut response) => response.remove("assets"),
            other => {
                debug!("Release document is {}, not an object", kind(&other));
                None
            }
        };

        let elements: Vec<(String, Value)> = match assets {
            None | Some(Value::Null) => {
                debug!("Release document has no assets");
                Vec::new()
            }
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
            Some(Value::Object(keyed)) => keyed.into_iter().collect(),
            Some(Value::String(s)) if !s.is_empty() => {
                warn!("Ignoring `assets`: expected a collection, found a string");
                Vec::new()
            }
            Some(other) => {
                debug!("`assets` is {}, treating it as empty", kind(&other));
                Vec::new()
            }
        };

        let assets = elements
            .into_iter()
            .filter_map(|(key, element)| Asset::from_element(&key, element))
            .collect();

        Ok(ReleaseResponse { assets })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_assets_in_array_order() {
        let response = ReleaseResponse::parse(
            r#"{
                "tag_name": "v1.0.0",
                "assets": [
                    { "id": 3, "name": "c.zip", "size": 10 },
                    { "id": 1, "name": "a.zip" },
                    { "id": 2, "name": "b.zip" }
                ]
            }"#,
        )
        .unwrap();

        let names: Vec<String> = response.assets.iter().map(|a| a.name.to_string()).collect();
        assert_eq!(names, vec!["c.zip", "a.zip", "b.zip"]);
    }

    #[test]
    fn test_parse_missing_assets() {
        let response = ReleaseResponse::parse(r#"{"tag_name": "v1.0.0"}"#).unwrap();
        assert!(response.assets.is_empty());
    }

    #[test]
    fn test_parse_null_assets() {
        let response = ReleaseResponse::parse(r#"{"assets": null}"#).unwrap();
        assert!(response.assets.is_empty());
    }

    #[test]
    fn test_parse_non_object_document_has_no_assets() {
        assert!(ReleaseResponse::parse("[1, 2]").unwrap().assets.is_empty());
        assert!(ReleaseResponse::parse("null").unwrap().assets.is_empty());
        assert!(ReleaseResponse::parse(r#""assets""#).unwrap().assets.is_empty());
    }

    #[test]
    fn test_parse_invalid_json_fails() {
        let err = ReleaseResponse::parse("not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse release JSON"));
    }

    #[test]
    fn test_parse_scalar_assets_are_empty() {
        for input in [
            r#"{"assets": false}"#,
            r#"{"assets": true}"#,
            r#"{"assets": 0}"#,
            r#"{"assets": 5}"#,
            r#"{"assets": ""}"#,
            r#"{"assets": "build.zip"}"#,
        ] {
            let response = ReleaseResponse::parse(input).unwrap();
            assert!(response.assets.is_empty(), "input: {}", input);
        }
    }

    #[test]
    fn test_keyed_assets_keep_document_order() {
        let response = ReleaseResponse::parse(
            r#"{"assets": {"z": {"id": 9, "name": "nine"}, "a": {"id": 1, "name": "one"}}}"#,
        )
        .unwrap();

        let ids: Vec<String> = response.assets.iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["9", "1"]);
    }

    #[test]
    fn test_non_object_elements_are_skipped() {
        let response = ReleaseResponse::from_value(json!({
            "assets": [null, {"id": 1, "name": "a"}, 7, "b", {"id": 2, "name": "c"}]
        }))
        .unwrap();

        assert_eq!(response.assets.len(), 2);
        assert_eq!(response.assets[1].name.to_string(), "c");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let response = ReleaseResponse::from_value(json!({
            "assets": [{"name": "no-id"}, {"id": 5}, {"id": null, "name": null}]
        }))
        .unwrap();

        let rendered: Vec<(String, String)> = response
            .assets
            .iter()
            .map(|a| (a.id.to_string(), a.name.to_string()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("".to_string(), "no-id".to_string()),
                ("5".to_string(), "".to_string()),
                ("".to_string(), "".to_string()),
            ]
        );
    }

    #[test]
    fn test_scalar_display() {
        assert_eq!(Scalar::from(json!(42)).to_string(), "42");
        assert_eq!(Scalar::from(json!(1.5)).to_string(), "1.5");
        assert_eq!(Scalar::from(json!(-3)).to_string(), "-3");
        assert_eq!(Scalar::from(json!("abc")).to_string(), "abc");
        assert_eq!(Scalar::from(json!(true)).to_string(), "true");
        assert_eq!(Scalar::from(json!(null)).to_string(), "");
        assert_eq!(Scalar::from(json!([1, 2])).to_string(), "[1,2]");
        assert_eq!(Scalar::default().to_string(), "");
    }

    #[test]
    fn test_whole_float_ids_drop_the_fraction() {
        let response = ReleaseResponse::parse(
            r#"{"assets": [{"id": 1.0, "name": "a"}, {"id": 1e2, "name": "b"}, {"id": 2.5, "name": "c"}]}"#,
        )
        .unwrap();

        let ids: Vec<String> = response.assets.iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "100", "2.5"]);
    }

    #[test]
    fn test_large_ids_are_rendered_exactly() {
        let response =
            ReleaseResponse::parse(r#"{"assets": [{"id": 18446744073709551615, "name": "x"}]}"#)
                .unwrap();
        assert_eq!(response.assets[0].id.to_string(), "18446744073709551615");
    }
}
