use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement, Window};

use super::dom;
use super::render::AnimationTask;
use crate::canvas::{Animator, Automations, Services};
use crate::config::SiteConfig;

fn find_canvas(document: &Document, selector: &str) -> Option<HtmlCanvasElement> {
    dom::query(document, selector)?.dyn_into::<HtmlCanvasElement>().ok()
}

/// Runs `task` only while its container intersects the viewport, and refits
/// it on window resize.
fn attach<A: Animator + 'static>(
    window: &Window,
    task: Rc<AnimationTask<A>>,
    threshold: f64,
) -> Result<(), JsValue> {
    let visible = task.clone();
    let observer = dom::intersection_observer(threshold, None, move |entry, _| {
        if entry.is_intersecting() {
            if let Err(e) = visible.start() {
                log::warn!("canvas start: {e:?}");
            }
        } else {
            visible.stop();
        }
    })?;
    observer.observe(task.container());

    dom::listen(window, "resize", move |_| {
        if let Err(e) = task.on_resize() {
            log::warn!("canvas resize: {e:?}");
        }
    })
}

/// Triangle of workflow nodes on the automations card.
pub fn init_automations(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    let Some(canvas) = find_canvas(document, &config.automations.selector) else {
        return Ok(());
    };
    let Some(task) = AnimationTask::new(canvas, Automations::new())? else {
        log::debug!("automations canvas has no 2d context");
        return Ok(());
    };
    attach(window, task, config.automations.threshold)
}

/// Pulsing node field behind the services section. Desktop only.
pub fn init_services(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), JsValue> {
    if config.is_mobile(dom::viewport_width(window)) {
        return Ok(());
    }
    let Some(canvas) = find_canvas(document, &config.services.selector) else {
        return Ok(());
    };
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let services = Services::new(
        fastrand::Rng::with_seed(seed),
        config.services.node_count,
        config.services.link_distance,
    );
    let Some(task) = AnimationTask::new(canvas, services)? else {
        log::debug!("services canvas has no 2d context");
        return Ok(());
    };
    attach(window, task, config.services.threshold)
}
