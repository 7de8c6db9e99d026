use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserver};

use super::dom;
use crate::config::{RevealConfig, SectionConfig};
use crate::motion::STILL_STYLES;
use crate::reveal::{parse_delay_index, RevealTracker};

/// A group of elements that each get `class` added once, the first time they
/// scroll into view.
pub struct Reveals {
    elements: Rc<Vec<Element>>,
    tracker: Rc<RefCell<RevealTracker>>,
    observer: IntersectionObserver,
    class: Rc<str>,
}

impl Reveals {
    fn install(
        elements: Vec<Element>,
        class: &str,
        threshold: f64,
        root_margin: Option<&str>,
        stagger_ms: u32,
    ) -> Result<Self, JsValue> {
        let elements = Rc::new(elements);
        let class: Rc<str> = Rc::from(class);
        let tracker = Rc::new(RefCell::new(RevealTracker::new(stagger_ms)));
        for (id, el) in elements.iter().enumerate() {
            let index = parse_delay_index(el.get_attribute("data-delay").as_deref());
            tracker.borrow_mut().register(id, index);
        }

        let observer = {
            let elements = elements.clone();
            let tracker = tracker.clone();
            let class = class.clone();
            dom::intersection_observer(threshold, root_margin, move |entry, observer| {
                if !entry.is_intersecting() {
                    return;
                }
                let target = entry.target();
                let Some(id) = elements.iter().position(|el| *el == target) else {
                    return;
                };
                if let Some(action) = tracker.borrow_mut().on_intersect(id) {
                    let class = class.clone();
                    let el = target.clone();
                    Timeout::new(action.delay_ms, move || {
                        el.class_list().add_1(&class).ok();
                    })
                    .forget();
                }
                observer.unobserve(&target);
            })?
        };

        for el in elements.iter() {
            observer.observe(el);
        }

        Ok(Self {
            elements,
            tracker,
            observer,
            class,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Reveals every pending element now and strips its motion styling.
    pub fn reveal_now(&self) -> Result<(), JsValue> {
        let ids = self.tracker.borrow_mut().reveal_all();
        for id in ids {
            let el = &self.elements[id];
            self.observer.unobserve(el);
            el.class_list().add_1(&self.class)?;
        }
        for el in self.elements.iter() {
            for (property, value) in STILL_STYLES {
                dom::set_style(el, property, value)?;
            }
        }
        Ok(())
    }
}

/// Staggered reveal of `.reveal-*` elements.
pub fn init(document: &Document, config: &RevealConfig) -> Result<Option<Reveals>, JsValue> {
    let elements = dom::query_all(document, &config.selector);
    if elements.is_empty() {
        log::debug!("no reveal targets on page");
        return Ok(None);
    }
    let reveals = Reveals::install(
        elements,
        &config.class,
        config.threshold,
        Some(&config.root_margin),
        config.stagger_ms,
    )?;
    log::debug!("observing {} reveal targets", reveals.len());
    Ok(Some(reveals))
}

/// One-time highlight of the contact section. No stagger.
pub fn init_section(
    document: &Document,
    config: &SectionConfig,
) -> Result<Option<Reveals>, JsValue> {
    let Some(section) = dom::query(document, &config.selector) else {
        log::debug!("no {} on page", config.selector);
        return Ok(None);
    };
    Reveals::install(vec![section], &config.class, config.threshold, None, 0).map(Some)
}
