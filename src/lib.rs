//! Scroll-driven toon-shaded landing page scene.
//!
//! The scene, input and animation state are plain Rust and build on every
//! target; the browser wiring and the WebGPU renderer are wasm-only.

pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod gradient;
pub mod input;
pub mod scene;
pub mod state;
pub mod tween;
pub mod viewport;

#[cfg(target_arch = "wasm32")]
mod assets;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod ui;

#[cfg(target_arch = "wasm32")]
pub use web_app::start;

#[cfg(target_arch = "wasm32")]
mod web_app {
    use crate::config::SceneConfig;
    use crate::constants::FALLBACK_GRADIENT_STEPS;
    use crate::gradient::GradientRamp;
    use crate::state::{AppState, Clock};
    use crate::viewport::ViewportState;
    use crate::{assets, dom, events, frame, ui};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("toon-scroll starting");

        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    fn load_config(window: &web::Window) -> SceneConfig {
        let mut config = SceneConfig::default();
        if let Ok(search) = window.location().search() {
            for e in config.apply_query(&search) {
                log::warn!("[config] {}; keeping default", e);
            }
        }
        config
    }

    fn spawn_gradient_load(url: String, slot: Rc<RefCell<Option<GradientRamp>>>) {
        spawn_local(async move {
            match assets::load_gradient(&url).await {
                Ok(ramp) => {
                    log::info!("[texture] {} loaded ({}x{})", url, ramp.width, ramp.height);
                    *slot.borrow_mut() = Some(ramp);
                }
                Err(e) => log::warn!("[texture] {} failed: {:?}; using fallback ramp", url, e),
            }
        });
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let canvas: web::HtmlCanvasElement = document
            .get_element_by_id("webgl")
            .ok_or_else(|| anyhow::anyhow!("missing #webgl"))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        let config = load_config(&window);
        let (width, height) = dom::viewport_css_size(&window);
        let viewport = ViewportState::new(
            width,
            height,
            window.device_pixel_ratio(),
            config.max_pixel_ratio,
        );
        dom::apply_surface_size(&canvas, &viewport.current());

        let mut rng = StdRng::from_entropy();
        let app = AppState::new(&config, viewport, dom::scroll_y(&window), &mut rng);

        let pending_gradient = Rc::new(RefCell::new(None));
        spawn_gradient_load(config.gradient_url.clone(), pending_gradient.clone());

        // Render with a built-in ramp until the real one arrives.
        let fallback = GradientRamp::steps(FALLBACK_GRADIENT_STEPS);
        let gpu = frame::init_gpu(&canvas, &app.scene, &fallback).await;
        let state = Rc::new(RefCell::new(app));

        if let Err(e) = ui::build_parameter_panel(&document, state.clone()) {
            log::warn!("[panel] not available: {:?}", e);
        }

        let clock = Clock::start();
        events::wire_input_handlers(events::InputWiring {
            window: window.clone(),
            canvas: canvas.clone(),
            state: state.clone(),
            clock,
        });

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            state,
            clock,
            canvas,
            gpu,
            pending_gradient,
        }));
        frame::start_loop(frame_ctx);
        Ok(())
    }
}
