use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Window};

use super::dom;
use crate::config::SiteConfig;
use crate::parallax::{translate_y, FrameGate, Parallax};

/// Background shapes that drift with scroll, at most one update per frame.
pub struct ParallaxShapes {
    window: Window,
    shapes: Vec<Element>,
    parallax: Parallax,
    gate: Cell<FrameGate>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ParallaxShapes {
    pub fn on_scroll(&self) {
        let mut gate = self.gate.get();
        if !gate.try_schedule() {
            return;
        }
        self.gate.set(gate);

        let frame = self.frame.borrow();
        let Some(cb) = frame.as_ref() else { return };
        if let Err(e) = self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::warn!("requestAnimationFrame: {e:?}");
            self.release();
        }
    }

    pub fn apply(&self) -> Result<(), JsValue> {
        let scroll_y = self.window.scroll_y()?;
        let width = dom::viewport_width(&self.window);
        if let Some(offsets) = self.parallax.offsets(scroll_y, width, self.shapes.len()) {
            for (shape, offset) in self.shapes.iter().zip(offsets) {
                dom::set_style(shape, "transform", &translate_y(offset))?;
            }
        }
        Ok(())
    }

    fn release(&self) {
        let mut gate = self.gate.get();
        gate.complete();
        self.gate.set(gate);
    }
}

pub fn init(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<Option<Rc<ParallaxShapes>>, JsValue> {
    if config.is_mobile(dom::viewport_width(window)) {
        return Ok(None);
    }
    let shapes = dom::query_all(document, &config.parallax.selector);
    let controller = Rc::new(ParallaxShapes {
        window: window.clone(),
        shapes,
        parallax: Parallax::new(
            config.parallax.base,
            config.parallax.increment,
            config.mobile_breakpoint,
        ),
        gate: Cell::new(FrameGate::default()),
        frame: RefCell::new(None),
    });

    let weak: Weak<ParallaxShapes> = Rc::downgrade(&controller);
    *controller.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(shapes) = weak.upgrade() {
            if let Err(e) = shapes.apply() {
                log::warn!("parallax: {e:?}");
            }
            shapes.release();
        }
    }) as Box<dyn FnMut()>));

    let handler = controller.clone();
    dom::listen(window, "scroll", move |_| handler.on_scroll())?;
    Ok(Some(controller))
}
