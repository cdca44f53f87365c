use crate::gradient::GradientRamp;
use crate::render;
use crate::scene::Scene;
use crate::state::{AppState, Clock};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub clock: Clock,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    /// Filled by the async texture loader, consumed on the next frame.
    pub pending_gradient: Rc<RefCell<Option<GradientRamp>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.clock.elapsed_secs();
        let snapshot = {
            let mut st = self.state.borrow_mut();
            st.advance(elapsed);
            st.snapshot()
        };

        if let Some(g) = &mut self.gpu {
            if let Some(ramp) = self.pending_gradient.borrow_mut().take() {
                g.set_gradient(&ramp);
            }
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&snapshot) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &Scene,
    ramp: &GradientRamp,
) -> Option<render::GpuState> {
    match render::GpuState::new(canvas, scene, ramp).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

fn request_frame(window: &web::Window, tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame` from requestAnimationFrame for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let Some(window) = web::window() else {
        log::error!("no window; frame loop not started");
        return;
    };
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let window_tick = window.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&window_tick, &tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&window, &tick);
}
