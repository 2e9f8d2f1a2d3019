use crate::Result;
use crate::spec::Document;
use anyhow::Context;

/// Encode the document as two-space indented JSON.
///
/// Fields come out in declaration order and map keys in insertion order, so
/// the same document always encodes to the same bytes.
pub fn render_document(doc: &Document) -> Result<String> {
    serde_json::to_string_pretty(doc).context("encode specification document as JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::load::parse_document;
    use pretty_assertions::assert_eq;

    const INPUT: &str = r#"{
  "swagger": "2.0",
  "info": {
    "title": "Pets",
    "version": "1.0"
  },
  "basePath": "/v1",
  "paths": {
    "/zoo": {
      "post": {
        "tags": [
          "zoo"
        ],
        "x-badges": [
          {
            "label": "zoo",
            "color": "green"
          }
        ]
      }
    },
    "/animals": {
      "get": {
        "description": "all",
        "tags": [
          "animals"
        ],
        "responses": {
          "200": {
            "description": "ok"
          }
        }
      }
    }
  },
  "x-vendor": {
    "b": 1,
    "a": 2
  }
}"#;

    #[test]
    fn preserves_input_layout() {
        let doc = parse_document(INPUT).unwrap();
        assert_eq!(render_document(&doc).unwrap(), INPUT);
    }

    #[test]
    fn encoding_is_deterministic() {
        let doc = parse_document(INPUT).unwrap();
        let first = render_document(&doc).unwrap();
        let second = render_document(&doc).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }
}
