use crate::Result;
use crate::spec::Document;
use anyhow::Context;
use std::fs::File;
use std::io::Read;

/// Read the extractor's JSON output. `-` reads standard input.
pub fn read_document(path: &str) -> Result<Document> {
    if path == "-" {
        return read_from(std::io::stdin().lock()).context("read specification from stdin");
    }

    let file = File::open(path).with_context(|| format!("read specification file {}", path))?;
    read_from(file).with_context(|| format!("parse specification {}", path))
}

/// Read a whole document from `reader`.
pub fn read_from(mut reader: impl Read) -> Result<Document> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_document(&text)
}

pub fn parse_document(text: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(text)?;
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_document_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"swagger":"2.0","paths":{{"/a":{{"get":{{}}}}}}}}"#).unwrap();

        let doc = read_document(file.path().to_str().unwrap()).unwrap();
        assert_eq!(doc.swagger.as_deref(), Some("2.0"));
        assert_eq!(doc.operation_count(), 1);
    }

    #[test]
    fn reads_document_from_a_stream() {
        let input: &[u8] = br#"{"openapi":"3.0.3","paths":{"/b":{"post":{"tags":["b"]}}}}"#;

        let doc = read_from(input).unwrap();
        assert_eq!(doc.openapi.as_deref(), Some("3.0.3"));
        assert_eq!(doc.operation_count(), 1);
    }

    #[test]
    fn stream_with_invalid_utf8_is_an_error() {
        let input: &[u8] = &[0xff, 0xfe, b'{', b'}'];
        assert!(read_from(input).is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_document("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }

    #[test]
    fn accepts_extensions_in_paths_and_null_tags() {
        let doc = parse_document(
            r#"{"swagger":"2.0","paths":{"x-paths-note":"internal","/a":{"get":{"tags":null}}}}"#,
        )
        .unwrap();

        assert_eq!(doc.operation_count(), 1);
        assert!(doc.paths.extensions.0.contains_key("x-paths-note"));
    }

    #[test]
    fn rejects_non_object_paths() {
        let err = parse_document(r#"{"paths": []}"#).unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
