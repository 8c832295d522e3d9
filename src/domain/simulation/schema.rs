//! Response schema for structured model output.
//!
//! Derived from [`DashboardState`] so the constraint sent to the model and the
//! type responses are decoded into cannot drift apart.

use schemars::generate::SchemaSettings;
use serde_json::Value;
use std::sync::OnceLock;

use crate::domain::dashboard::DashboardState;

static DASHBOARD_SCHEMA: OnceLock<Value> = OnceLock::new();

/// Keywords the hosted API's schema subset does not recognize.
const UNSUPPORTED_KEYWORDS: [&str; 4] = ["$schema", "title", "format", "default"];

/// JSON schema constraining a simulated dashboard response.
///
/// Subschemas are inlined, optional fields are not nullable (absent rather
/// than `null`), and keywords outside the hosted API's subset are removed.
pub fn dashboard_response_schema() -> &'static Value {
    DASHBOARD_SCHEMA.get_or_init(|| {
        let schema = SchemaSettings::draft2020_12()
            .with(|s| {
                s.inline_subschemas = true;
                s.option_add_null_type = false;
            })
            .into_generator()
            .into_root_schema_for::<DashboardState>();

        let mut value = serde_json::to_value(&schema).unwrap_or(Value::Null);
        strip_unsupported(&mut value);
        value
    })
}

/// Removes unsupported keywords from every subschema. Keys of a
/// `properties` map are field names, not keywords, and are kept.
fn strip_unsupported(schema: &mut Value) {
    match schema {
        Value::Object(object) => {
            for keyword in UNSUPPORTED_KEYWORDS {
                object.remove(keyword);
            }
            for (key, child) in object.iter_mut() {
                match (key.as_str(), child) {
                    ("properties", Value::Object(fields)) => {
                        fields.values_mut().for_each(strip_unsupported)
                    }
                    (_, child) => strip_unsupported(child),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(strip_unsupported),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property<'a>(schema: &'a Value, name: &str) -> &'a Value {
        &schema["properties"][name]
    }

    #[test]
    fn schema_is_a_self_contained_object() {
        let schema = dashboard_response_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema.get("$schema").is_none());
        assert!(schema.get("$defs").is_none());
        assert!(!schema.to_string().contains("$ref"));
    }

    #[test]
    fn schema_covers_every_dashboard_field() {
        let schema = dashboard_response_schema();
        for field in [
            "level",
            "currentXP",
            "maxXP",
            "vibeScore",
            "streak",
            "totalMentions",
            "reach",
            "alerts",
            "achievements",
            "platforms",
            "sentimentHistory",
        ] {
            assert!(
                !property(schema, field).is_null(),
                "schema missing property {}",
                field
            );
        }
    }

    #[test]
    fn no_top_level_field_is_required() {
        let schema = dashboard_response_schema();
        let required = schema
            .get("required")
            .and_then(Value::as_array)
            .map(Vec::len)
            .unwrap_or(0);
        assert_eq!(required, 0);
    }

    #[test]
    fn arrays_describe_their_items() {
        let schema = dashboard_response_schema();
        let alerts = property(schema, "alerts");
        assert_eq!(alerts["type"], "array");
        assert_eq!(alerts["items"]["type"], "object");

        let sparkline = &property(schema, "platforms")["items"]["properties"]["data"];
        assert_eq!(sparkline["type"], "array");
        assert_eq!(sparkline["items"]["type"], "integer");
    }

    #[test]
    fn enums_constrain_alert_type_and_trend() {
        let schema = dashboard_response_schema().to_string();
        for variant in ["CRITICAL", "WARNING", "SUCCESS", "\"up\"", "\"down\""] {
            assert!(schema.contains(variant), "schema missing {}", variant);
        }
    }

    #[test]
    fn vibe_score_is_bounded() {
        let vibe = property(dashboard_response_schema(), "vibeScore");
        assert_eq!(vibe["minimum"], 0);
        assert_eq!(vibe["maximum"], 100);
    }

    #[test]
    fn optional_alert_fields_are_not_nullable() {
        let alert = &property(dashboard_response_schema(), "alerts")["items"]["properties"];
        assert_eq!(alert["xp"]["type"], "integer");
        assert_eq!(alert["source"]["type"], "string");
        assert!(!dashboard_response_schema().to_string().contains("\"null\""));
    }

    #[test]
    fn unsupported_keywords_are_stripped() {
        let text = dashboard_response_schema().to_string();
        for keyword in ["\"format\":", "\"default\":", "\"title\":", "\"$schema\":"] {
            assert!(!text.contains(keyword), "schema still carries {}", keyword);
        }
        assert!(property(dashboard_response_schema(), "totalMentions")["type"] == "integer");
    }

    #[test]
    fn stripping_keeps_properties_named_like_keywords() {
        let mut schema = serde_json::json!({
            "type": "object",
            "default": {},
            "properties": {
                "format": { "type": "string", "format": "date" },
                "items": { "type": "array", "items": { "type": "integer", "format": "int32" } }
            }
        });

        strip_unsupported(&mut schema);

        assert_eq!(
            schema,
            serde_json::json!({
                "type": "object",
                "properties": {
                    "format": { "type": "string" },
                    "items": { "type": "array", "items": { "type": "integer" } }
                }
            })
        );
    }

    #[test]
    fn schema_is_built_once() {
        let first = dashboard_response_schema() as *const Value;
        let second = dashboard_response_schema() as *const Value;
        assert_eq!(first, second);
    }
}
