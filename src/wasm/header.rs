use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element, Window};

use super::dom;
use crate::config::HeaderConfig;
use crate::header::{HeaderChange, HeaderState};

/// Shows the sticky header once the intro has scrolled past the top.
pub struct StickyHeader {
    intro: Element,
    header: Element,
    state: RefCell<HeaderState>,
    visible_class: String,
    shrunk_class: String,
}

impl StickyHeader {
    pub fn on_scroll(&self) -> Result<(), JsValue> {
        let bottom = self.intro.get_bounding_client_rect().bottom();
        let change = self.state.borrow_mut().update(bottom);
        match change {
            Some(HeaderChange::Show) => {
                self.header.class_list().add_1(&self.visible_class)?;
                self.intro.class_list().add_1(&self.shrunk_class)?;
            }
            Some(HeaderChange::Hide) => {
                self.header.class_list().remove_1(&self.visible_class)?;
                self.intro.class_list().remove_1(&self.shrunk_class)?;
            }
            None => {}
        }
        Ok(())
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().is_visible()
    }
}

pub fn init(
    window: &Window,
    document: &Document,
    config: &HeaderConfig,
) -> Result<Option<Rc<StickyHeader>>, JsValue> {
    let (Some(intro), Some(header)) = (
        dom::query(document, &config.intro),
        dom::query(document, &config.header),
    ) else {
        log::debug!("{} or {} missing, sticky header off", config.intro, config.header);
        return Ok(None);
    };

    let sticky = Rc::new(StickyHeader {
        intro,
        header,
        state: RefCell::new(HeaderState::new(config.offset)),
        visible_class: config.visible_class.clone(),
        shrunk_class: config.shrunk_class.clone(),
    });
    sticky.on_scroll()?;

    let handler = sticky.clone();
    dom::listen_passive(window, "scroll", move |_| {
        if let Err(e) = handler.on_scroll() {
            log::warn!("sticky header: {e:?}");
        }
    })?;
    Ok(Some(sticky))
}
