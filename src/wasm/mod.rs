use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub mod canvas;
pub mod dom;
pub mod form;
pub mod header;
pub mod motion;
pub mod nav;
pub mod parallax;
pub mod render;
pub mod reveal;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    if document.ready_state() == "loading" {
        let (w, d) = (window.clone(), document.clone());
        let ready = Closure::once(move || init(&w, &d));
        document.add_event_listener_with_callback("DOMContentLoaded", ready.as_ref().unchecked_ref())?;
        ready.forget();
    } else {
        init(&window, &document);
    }
    Ok(())
}

fn report(component: &str, result: Result<(), JsValue>) {
    if let Err(e) = result {
        log::warn!("{component} not started: {e:?}");
    }
}

/// Wires every page behaviour. Each one stands alone: a missing element or a
/// failure in one leaves the others running.
pub fn init(window: &Window, document: &Document) {
    let config = dom::load_config(document);
    let motion = motion::detect(window);

    report("sticky header", header::init(window, document, &config.header).map(drop));

    let reveals = reveal::init(document, &config.reveal).unwrap_or_else(|e| {
        log::warn!("reveals not started: {e:?}");
        None
    });

    let nav = nav::init(document, &config.nav).unwrap_or_else(|e| {
        log::warn!("mobile nav not started: {e:?}");
        None
    });
    report("smooth scroll", nav::init_smooth_scroll(document, &config.nav, nav));

    report("automations canvas", canvas::init_automations(window, document, &config));
    report("services canvas", canvas::init_services(window, document, &config));

    let section = reveal::init_section(document, &config.contact).unwrap_or_else(|e| {
        log::warn!("contact highlight not started: {e:?}");
        None
    });

    report("contact form", form::init(document, &config.form));
    report("parallax", parallax::init(window, document, &config).map(drop));

    if motion.is_reduced() {
        for group in reveals.iter().chain(section.iter()) {
            report("reduced motion", group.reveal_now());
        }
    }
    log::info!("page behaviours ready");
}
