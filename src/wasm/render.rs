use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::canvas::{Animator, DrawCommand, Surface};

/// Draws an [`Animator`] onto a 2D canvas, one frame per display refresh,
/// while its container is on screen.
///
/// The pending `requestAnimationFrame` handle is the cancellation token:
/// `stop` cancels it, `start` is a no-op while one is outstanding.
pub struct AnimationTask<A: Animator> {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    container: Element,
    animator: RefCell<A>,
    surface: Cell<Surface>,
    pending: Cell<Option<i32>>,
    // `frame` holds the animation-frame closure so that it can keep calling
    // `request_animation_frame` on itself.
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl<A: Animator + 'static> AnimationTask<A> {
    /// `None` when the canvas has no parent or no 2D context.
    pub fn new(canvas: HtmlCanvasElement, animator: A) -> Result<Option<Rc<Self>>, JsValue> {
        let Some(container) = canvas.parent_element() else {
            return Ok(None);
        };
        let Some(ctx) = canvas
            .get_context("2d")?
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return Ok(None);
        };

        let task = Rc::new(Self {
            canvas,
            ctx,
            container,
            animator: RefCell::new(animator),
            surface: Cell::new(Surface::new(0.0, 0.0, 1.0)),
            pending: Cell::new(None),
            frame: RefCell::new(None),
        });

        let weak: Weak<Self> = Rc::downgrade(&task);
        *task.frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(task) = weak.upgrade() {
                task.pending.set(None);
                task.draw_frame();
            }
        }) as Box<dyn FnMut()>));

        Ok(Some(task))
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn surface(&self) -> Surface {
        self.surface.get()
    }

    /// Matches the backing store to the container and the device pixel ratio.
    pub fn fit(&self) -> Result<(), JsValue> {
        let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let rect = self.container.get_bounding_client_rect();
        let surface = Surface::new(rect.width(), rect.height(), dpr);
        let (w, h) = surface.backing_size();
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        self.ctx
            .set_transform(surface.pixel_ratio, 0.0, 0.0, surface.pixel_ratio, 0.0, 0.0)?;
        self.surface.set(surface);
        Ok(())
    }

    /// Window resize: refit, and let the animator adapt (e.g. reseed).
    pub fn on_resize(&self) -> Result<(), JsValue> {
        self.fit()?;
        self.animator.borrow_mut().resize(&self.surface.get());
        Ok(())
    }

    pub fn start(&self) -> Result<(), JsValue> {
        if self.is_running() {
            return Ok(());
        }
        self.fit()?;
        self.animator.borrow_mut().activate(&self.surface.get());
        self.draw_frame();
        Ok(())
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = window() {
                w.cancel_animation_frame(id).ok();
            }
        }
        self.animator.borrow_mut().deactivate();
    }

    fn draw_frame(&self) {
        let commands = self.animator.borrow_mut().frame(&self.surface.get());
        if let Err(e) = replay(&self.ctx, &commands) {
            log::warn!("canvas draw failed: {e:?}");
        }
        self.schedule();
    }

    fn schedule(&self) {
        let Some(w) = window() else { return };
        let frame = self.frame.borrow();
        let Some(cb) = frame.as_ref() else { return };
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => log::warn!("requestAnimationFrame: {e:?}"),
        }
    }
}

/// Replays a frame's commands onto the context, in CSS pixels.
pub fn replay(ctx: &CanvasRenderingContext2d, commands: &[DrawCommand]) -> Result<(), JsValue> {
    for command in commands {
        match command {
            DrawCommand::Clear { width, height } => ctx.clear_rect(0.0, 0.0, *width, *height),
            DrawCommand::Line {
                from,
                to,
                color,
                width,
                dash,
                dash_offset,
            } => {
                ctx.begin_path();
                ctx.move_to(from.0, from.1);
                ctx.line_to(to.0, to.1);
                ctx.set_stroke_style_str(&color.to_string());
                ctx.set_line_width(*width);
                if !dash.is_empty() {
                    let pattern: js_sys::Array = dash.iter().map(|d| JsValue::from_f64(*d)).collect();
                    ctx.set_line_dash(&pattern)?;
                    ctx.set_line_dash_offset(*dash_offset);
                }
                ctx.stroke();
                if !dash.is_empty() {
                    ctx.set_line_dash(&js_sys::Array::new())?;
                }
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                ctx.begin_path();
                ctx.arc(center.0, center.1, *radius, 0.0, TAU)?;
                ctx.set_fill_style_str(&color.to_string());
                ctx.fill();
            }
        }
    }
    Ok(())
}
