use std::collections::BTreeMap;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, FormData, HtmlFormElement};

use super::dom;
use crate::config::FormConfig;
use crate::mailto::{Inquiry, SUCCESS_HTML};

/// Text fields of `form` by name. Later duplicates win; file inputs are skipped.
pub fn collect_fields(form: &HtmlFormElement) -> Result<BTreeMap<String, String>, JsValue> {
    let data = FormData::new_with_form(form)?;
    let mut fields = BTreeMap::new();
    if let Some(entries) = js_sys::try_iter(&data)? {
        for entry in entries {
            let pair: js_sys::Array = entry?.dyn_into()?;
            if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.insert(name, value);
            }
        }
    }
    Ok(fields)
}

/// Builds the `mailto:` link from the form and swaps the form for the
/// thank-you note. Nothing is sent anywhere.
pub fn complete(form: &HtmlFormElement, recipient: &str) -> Result<String, JsValue> {
    let fields = collect_fields(form)?;
    let href = Inquiry::from_fields(&fields).mailto(recipient);
    form.set_inner_html(SUCCESS_HTML);
    Ok(href)
}

/// [`complete`], then hands the inquiry to the mail client.
pub fn submit(form: &HtmlFormElement, recipient: &str) -> Result<String, JsValue> {
    let href = complete(form, recipient)?;
    web_sys::window()
        .ok_or("no window")?
        .location()
        .set_href(&href)?;
    Ok(href)
}

pub fn init(document: &Document, config: &FormConfig) -> Result<(), JsValue> {
    let Some(form) = dom::query(document, &config.selector)
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        log::debug!("no {} on page", config.selector);
        return Ok(());
    };

    let recipient = config.recipient.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        match submit(&target, &recipient) {
            Ok(_) => log::info!("inquiry handed to mail client"),
            Err(e) => log::warn!("contact form: {e:?}"),
        }
    })
}
