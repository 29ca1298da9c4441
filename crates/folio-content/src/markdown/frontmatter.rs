//! YAML front-matter payload parsing.
//!
//! Front-matter is the `---` delimited block a document (or a section) can
//! start with. The parser hands us its raw text; this module turns it into the
//! key-value [`Payload`] carried by a `yaml` node:
//!
//! ```markdown
//! ---
//! title: My Document
//! tags:
//!   - rust
//!   - markdown
//! ---
//! ```
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::parse_payload;
//!
//! let payload = parse_payload("title: Test\ncount: 3");
//! assert_eq!(payload.get("title").and_then(|v| v.as_str()), Some("Test"));
//! assert_eq!(payload.get("count").and_then(|v| v.as_i64()), Some(3));
//! ```

use crate::mdast::Payload;
use serde_yaml::Value;

/// Parse raw front-matter YAML into a payload.
///
/// # Behavior
///
/// - Empty or whitespace-only YAML: empty payload
/// - Invalid YAML: logs warning, empty payload
/// - YAML that is not a mapping (a list, a scalar): logs warning, empty payload
pub fn parse_payload(raw: &str) -> Payload {
    let value = match serde_yaml::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Failed to parse front-matter YAML: {e}");
            return Payload::new();
        }
    };

    match value {
        Value::Null => Payload::new(),
        Value::Mapping(_) => match serde_json::to_value(&value) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => Payload::new(),
            Err(e) => {
                log::warn!("Front-matter is not representable as JSON: {e}");
                Payload::new()
            }
        },
        _ => {
            log::warn!("Front-matter is not a mapping, ignoring it");
            Payload::new()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
