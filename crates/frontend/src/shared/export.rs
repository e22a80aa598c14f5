/// Saving server-generated export files in the browser
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Offers `bytes` to the user as a download named `filename`
pub fn download_bytes(bytes: &[u8], mime_type: &str, filename: &str) -> Result<(), String> {
    let blob = create_blob(bytes, mime_type)?;
    download_blob(&blob, filename)
}

/// File name for an export: `orders_20240305_101500.csv`
pub fn export_filename(prefix: &str, extension: &str) -> String {
    format!(
        "{}_{}.{}",
        prefix,
        chrono::Utc::now().format("%Y%m%d_%H%M%S"),
        extension
    )
}

fn create_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(bytes));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime_type);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Triggers a browser download of a Blob through a temporary anchor
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

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename() {
        let name = export_filename("orders", "csv");
        assert!(name.starts_with("orders_"));
        assert!(name.ends_with(".csv"));
        // orders_YYYYMMDD_HHMMSS.csv
        assert_eq!(name.len(), "orders_".len() + 15 + ".csv".len());
    }
}
