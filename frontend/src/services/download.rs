use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Quote a CSV field when it contains a separator, quote, or line break.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Serialize rows into CSV text with a header line.
pub fn to_csv(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    out.push_str(
        &header
            .iter()
            .map(|h| csv_field(h))
            .collect::<Vec<_>>()
            .join(","),
    );
    out.push('\n');
    for row in rows {
        out.push_str(
            &row.iter()
                .map(|v| csv_field(v))
                .collect::<Vec<_>>()
                .join(","),
        );
        out.push('\n');
    }
    out
}

/// Offer `content` to the browser as a file download: wrap it in a Blob,
/// point a detached anchor at it, click, and release the object URL.
pub fn download_text(filename: &str, mime: &str, content: &str) -> Result<()> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| anyhow!("no document"))?;

    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(content));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)
        .map_err(|e| anyhow!("failed to build blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("failed to create object url: {:?}", e))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| anyhow!("failed to create anchor: {:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("anchor element cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(|e| anyhow!("failed to revoke object url: {:?}", e))?;
    Ok(())
}

/// Download a serializable value as pretty-printed JSON.
pub fn download_json<T: serde::Serialize>(filename: &str, value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    download_text(filename, "application/json", &content)
}

/// Download tabular data as CSV.
pub fn download_csv(filename: &str, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    download_text(filename, "text/csv", &to_csv(header, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_to_csv() {
        let rows = vec![
            vec!["S-001".to_string(), "Attar, Lina".to_string(), "1200.00".to_string()],
            vec!["S-002".to_string(), "Okafor Chidi".to_string(), "0.00".to_string()],
        ];
        let csv = to_csv(&["student", "name", "dues"], &rows);
        assert_eq!(
            csv,
            "student,name,dues\nS-001,\"Attar, Lina\",1200.00\nS-002,Okafor Chidi,0.00\n"
        );
    }
}
