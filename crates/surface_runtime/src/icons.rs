//! Icon-template loading for the surface chrome.
//!
//! Fetches the icon collection document and injects it hidden into the DOM so the
//! compute module can clone templates by id. On non-WASM targets this is a no-op;
//! there is no DOM to populate.

/// DOM id of the injected, hidden icon-template container.
pub const ICON_TEMPLATES_ID: &str = "icon-templates";

/// Relative URL the icon collection document is served from.
pub const ICON_TEMPLATES_URL: &str = "heroicons/icons.html";

/// Fetches the icon templates and appends them hidden to the document body.
///
/// # Errors
///
/// Returns an error when the fetch fails or the DOM is not available.
#[cfg(target_arch = "wasm32")]
pub async fn load_icon_templates() -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    let window = web_sys::window().ok_or("no window to load icon templates into")?;
    let document = window.document().ok_or("no document to load icon templates into")?;
    let body = document.body().ok_or("document has no body yet")?;

    let response = JsFuture::from(window.fetch_with_str(ICON_TEMPLATES_URL))
        .await
        .map_err(|err| format!("icon template fetch failed: {err:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| format!("icon template fetch returned a non-response: {err:?}"))?;
    let text = JsFuture::from(
        response
            .text()
            .map_err(|err| format!("icon template body unavailable: {err:?}"))?,
    )
    .await
    .map_err(|err| format!("icon template body read failed: {err:?}"))?;

    let container = document
        .create_element("div")
        .map_err(|err| format!("icon template container creation failed: {err:?}"))?;
    container.set_id(ICON_TEMPLATES_ID);
    container.set_inner_html(&text.as_string().unwrap_or_default());
    container
        .set_attribute("hidden", "")
        .map_err(|err| format!("icon template container could not be hidden: {err:?}"))?;
    body.append_child(&container)
        .map_err(|err| format!("icon template container could not be attached: {err:?}"))?;
    Ok(())
}

/// Fetches the icon templates and appends them hidden to the document body.
///
/// # Errors
///
/// Never fails on non-WASM targets; there is no DOM to populate.
#[cfg(not(target_arch = "wasm32"))]
pub async fn load_icon_templates() -> Result<(), String> {
    Ok(())
}
