/// Inputs for the RapiDoc viewer page.
#[derive(Debug, Clone)]
pub struct ViewerPage<'a> {
    pub title: &'a str,
    /// Base name of the JSON file next to the page (without `.json`).
    pub base_name: &'a str,
    pub server_url: Option<&'a str>,
    /// When set, the page loads this JSON inline instead of fetching the file.
    pub embedded_spec: Option<&'a str>,
}

/// Render the static viewer page.
///
/// Important: we avoid `format!()` because the page carries JS with `{}`
/// blocks, which would conflict with Rust formatting.
pub fn render_viewer_page(page: &ViewerPage<'_>) -> String {
    const TEMPLATE: &str = r#"<!doctype html>
<html>
<head>
    <meta charset="utf-8">
    <title>__TITLE__</title>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/rapidoc/9.3.8/rapidoc-min.js"
            integrity="sha512-0ES6eX4K9J1PrIEjIizv79dTlN5HwI2GW9Ku6ymb8dijMHF5CIplkS8N0iFJ/wl3GybCSqBJu8HDhiFkZRAf0g=="
            crossorigin="anonymous"
            referrerpolicy="no-referrer">
    </script>
</head>
<body>
<rapi-doc id="rapidoc"
          theme="dark"
          render-style="read"
          schema-style="table"
          schema-description-expanded="true"__SPEC_URL__
          allow-spec-file-download="true"__SERVER_URL__
>
</rapi-doc>__SCRIPT__
</body>
</html>
"#;

    let spec_url = match page.embedded_spec {
        Some(_) => String::new(),
        None => format!(
            "\n          spec-url=\"{}.json\"",
            escape_attr(page.base_name)
        ),
    };

    let server_url = page
        .server_url
        .map(|url| format!("\n          server-url=\"{}\"", escape_attr(url)))
        .unwrap_or_default();

    let script = page
        .embedded_spec
        .map(|json| {
            // Embedded as a JS object literal; `</` would end the script element early.
            let literal = json.replace("</", "<\\/");
            let mut s = String::from(
                "\n<script>\n    window.addEventListener(\"DOMContentLoaded\", (event) => {\n        const rapidocEl = document.getElementById(\"rapidoc\");\n        rapidocEl.loadSpec(",
            );
            s.push_str(&literal);
            s.push_str(")\n    })\n</script>");
            s
        })
        .unwrap_or_default();

    TEMPLATE
        .replace("__TITLE__", &escape_text(page.title))
        .replace("__SPEC_URL__", &spec_url)
        .replace("__SERVER_URL__", &server_url)
        .replace("__SCRIPT__", &script)
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page<'a>() -> ViewerPage<'a> {
        ViewerPage {
            title: "Pets API",
            base_name: "swagger",
            server_url: None,
            embedded_spec: None,
        }
    }

    #[test]
    fn references_spec_file_by_default() {
        let html = render_viewer_page(&page());
        assert!(html.contains("<title>Pets API</title>"));
        assert!(html.contains(r#"spec-url="swagger.json""#));
        assert!(!html.contains("loadSpec"));
        assert!(!html.contains("server-url"));
    }

    #[test]
    fn embeds_spec_inline() {
        let p = ViewerPage {
            embedded_spec: Some(r#"{"swagger":"2.0","info":{"description":"</script>"}}"#),
            ..page()
        };
        let html = render_viewer_page(&p);

        assert!(!html.contains("spec-url"));
        assert!(html.contains(r#"rapidocEl.loadSpec({"swagger":"2.0""#));
        assert!(html.contains(r#"<\/script>"#));
        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn adds_escaped_server_url() {
        let p = ViewerPage {
            server_url: Some("https://api.example.com/?a=1&b=\"2\""),
            ..page()
        };
        let html = render_viewer_page(&p);
        assert!(html.contains(r#"server-url="https://api.example.com/?a=1&amp;b=&quot;2&quot;""#));
    }

    #[test]
    fn escapes_title() {
        let p = ViewerPage {
            title: "<b>Pets</b> & co",
            ..page()
        };
        assert!(render_viewer_page(&p).contains("<title>&lt;b&gt;Pets&lt;/b&gt; &amp; co</title>"));
    }
}
