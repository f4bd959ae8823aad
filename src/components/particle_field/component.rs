//! Leptos component wrapping the particle field canvas.
//!
//! The component sizes a canvas to the viewport, builds the particle pool, and
//! runs an animation loop via `requestAnimationFrame` that steps and redraws
//! the field every display frame. A window `resize` listener rebuilds the pool
//! for the new viewport. Both are released when the component unmounts.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::{MotionPreference, ParticleField};
use super::render;
use super::theme::ParticleStyle;

/// Bundles the simulation with the drawing context and its random source.
struct FieldContext {
	field: ParticleField,
	rng: SmallRng,
	ctx: CanvasRenderingContext2d,
}

/// Browser callbacks that keep the field alive while the canvas is mounted.
#[derive(Default)]
struct FrameLoop {
	frame_id: Cell<Option<i32>>,
	animate: RefCell<Option<Closure<dyn FnMut()>>>,
	on_resize: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
	fn request_frame(&self, window: &Window) {
		if let Some(ref cb) = *self.animate.borrow() {
			self.frame_id
				.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}

	/// Cancels the pending frame and detaches the resize listener.
	fn stop(&self) {
		let Some(window) = web_sys::window() else {
			return;
		};
		if let Some(id) = self.frame_id.take() {
			let _ = window.cancel_animation_frame(id);
		}
		if let Some(cb) = self.on_resize.borrow_mut().take() {
			let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
		self.animate.borrow_mut().take();
		debug!("forge-site: particle loop stopped");
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

/// Reads `prefers-reduced-motion` once; unsupported media queries count as no preference.
fn read_motion_preference(window: &Window) -> MotionPreference {
	let reduce = window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.is_some_and(|mq| mq.matches());
	if reduce {
		MotionPreference::Reduce
	} else {
		MotionPreference::NoPreference
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok().flatten()?.dyn_into().ok()
}

fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64 ^ js_sys::Date::now() as u64
}

/// Full-viewport canvas of drifting particles, drawn behind hero content.
///
/// Honors `prefers-reduced-motion`: when set, no particles are created and no
/// frame loop is started, leaving the canvas transparent. If the browser
/// cannot provide a 2D context the canvas simply stays empty.
#[component]
pub fn ParticleCanvas(#[prop(optional)] config: Option<ParticleStyle>) -> impl IntoView {
	let style = config.unwrap_or_default();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<Rc<FrameLoop>>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = context_2d(&canvas) else {
			debug!("forge-site: 2d context unavailable, particle field disabled");
			return;
		};

		running.update_value(|r| {
			if let Some(previous) = r.take() {
				previous.stop();
			}
		});

		let (w, h) = viewport_size(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let motion = read_motion_preference(&window);
		let mut rng = SmallRng::seed_from_u64(random_seed());
		let field = ParticleField::new(&style, w, h, motion, &mut rng);
		let animated = field.is_animated();
		let context = Rc::new(RefCell::new(FieldContext { field, rng, ctx }));
		let frame_loop = Rc::new(FrameLoop::default());

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*frame_loop.on_resize.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport_size(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			let mut guard = context_resize.borrow_mut();
			let c = &mut *guard;
			c.field.reinitialize(nw, nh, &mut c.rng);
			debug!("forge-site: particle field rebuilt for {nw}x{nh}");
		}));
		if let Some(ref cb) = *frame_loop.on_resize.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if animated {
			let (context_anim, loop_inner) = (context.clone(), Rc::downgrade(&frame_loop));
			*frame_loop.animate.borrow_mut() = Some(Closure::new(move || {
				if let Ok(mut c) = context_anim.try_borrow_mut() {
					c.field.step();
					render::render(&c.field, &c.ctx);
				}
				if let (Some(fl), Some(win)) = (loop_inner.upgrade(), web_sys::window()) {
					fl.request_frame(&win);
				}
			}));
			frame_loop.request_frame(&window);
			debug!(
				"forge-site: particle loop started with {} particles",
				context.borrow().field.particles.len()
			);
		} else {
			debug!("forge-site: reduced motion requested, particle loop not started");
		}

		running.set_value(Some(frame_loop));
	});

	on_cleanup(move || {
		if let Some(Some(frame_loop)) = running.try_update_value(Option::take) {
			frame_loop.stop();
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-canvas"
			aria-hidden="true"
			style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; pointer-events: none;"
		/>
	}
}
