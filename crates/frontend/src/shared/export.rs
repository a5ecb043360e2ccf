/// CSV export of a report table, downloaded through the browser.
use contracts::shared::report::ReportTable;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Renders the report as CSV and initiates a download.
pub fn download_report(report: &ReportTable, filename: &str) -> Result<(), String> {
    if report.rows.is_empty() {
        return Err("Nenhum dado para exportar".to_string());
    }

    let mut csv_content = String::new();

    // UTF-8 BOM so Excel picks up the accented characters
    csv_content.push('\u{FEFF}');

    csv_content.push_str(&escape_csv_cell(&report.title));
    csv_content.push('\n');

    csv_content.push_str(&report.columns.join(";"));
    csv_content.push('\n');

    for row in &report.rows {
        let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(";"));
        csv_content.push('\n');
    }

    let blob = create_csv_blob(&csv_content)?;
    download_blob(&blob, filename)?;

    Ok(())
}

/// Quotes a cell when it contains the separator, quotes or line breaks.
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::escape_csv_cell;

    #[test]
    fn plain_cells_pass_through() {
        assert_eq!(escape_csv_cell("iPhone 13 128GB"), "iPhone 13 128GB");
    }

    #[test]
    fn separator_and_quotes_are_escaped() {
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("diz \"ok\""), "\"diz \"\"ok\"\"\"");
        assert_eq!(escape_csv_cell("linha\nquebrada"), "\"linha\nquebrada\"");
    }
}
