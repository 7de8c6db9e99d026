use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom;
use crate::config::NavConfig;
use crate::nav::{anchor_target, NavState};

/// Mobile navigation overlay behind the menu button.
pub struct MobileNav {
    button: Element,
    overlay: Element,
    body: Option<HtmlElement>,
    open_class: String,
    state: Cell<NavState>,
}

impl MobileNav {
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }

    pub fn open(&self) -> Result<(), JsValue> {
        self.update(NavState::open)
    }

    pub fn close(&self) -> Result<(), JsValue> {
        self.update(NavState::close)
    }

    pub fn toggle(&self) -> Result<(), JsValue> {
        self.update(NavState::toggle)
    }

    fn update(&self, f: impl FnOnce(&mut NavState)) -> Result<(), JsValue> {
        let mut state = self.state.get();
        f(&mut state);
        self.state.set(state);

        self.overlay
            .class_list()
            .toggle_with_force(&self.open_class, state.is_open())?;
        self.button
            .set_attribute("aria-expanded", state.aria_expanded())?;
        if let Some(body) = &self.body {
            body.style().set_property("overflow", state.body_overflow())?;
        }
        Ok(())
    }
}

/// Wires the menu button and the overlay's own links.
pub fn init(document: &Document, config: &NavConfig) -> Result<Option<Rc<MobileNav>>, JsValue> {
    let (Some(button), Some(overlay)) = (
        dom::query(document, &config.menu_button),
        dom::query(document, &config.overlay),
    ) else {
        log::debug!("no mobile nav on page");
        return Ok(None);
    };

    let nav = Rc::new(MobileNav {
        button,
        overlay,
        body: document.body(),
        open_class: config.open_class.clone(),
        state: Cell::new(NavState::new()),
    });

    let handler = nav.clone();
    dom::listen(&nav.button, "click", move |_| {
        if let Err(e) = handler.toggle() {
            log::warn!("menu toggle: {e:?}");
        }
    })?;

    for link in dom::query_all(document, &config.mobile_link) {
        let handler = nav.clone();
        dom::listen(&link, "click", move |_| {
            if let Err(e) = handler.close() {
                log::warn!("menu close: {e:?}");
            }
        })?;
    }
    Ok(Some(nav))
}

/// Smooth-scrolls in-page `#anchor` links, closing the overlay first.
pub fn init_smooth_scroll(
    document: &Document,
    config: &NavConfig,
    nav: Option<Rc<MobileNav>>,
) -> Result<(), JsValue> {
    for link in dom::query_all(document, &config.anchor_link) {
        let document = document.clone();
        let nav = nav.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |event| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                return;
            };
            event.prevent_default();

            if let Some(nav) = nav.as_ref().filter(|nav| nav.is_open()) {
                if let Err(e) = nav.close() {
                    log::warn!("menu close: {e:?}");
                }
            }

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }
    Ok(())
}
