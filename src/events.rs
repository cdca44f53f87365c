use crate::dom;
use crate::state::{AppState, Clock};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub clock: Clock,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_resize(&w);
    wire_scroll(&w);
    wire_pointermove(&w);
}

fn wire_resize(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_window_listener(&w.window, "resize", move |_: web::Event| {
        let (width, height) = dom::viewport_css_size(&w2.window);
        let dpr = w2.window.device_pixel_ratio();
        let resize = w2.state.borrow_mut().handle_resize(width, height, dpr);
        dom::apply_surface_size(&w2.canvas, &resize);
        log::debug!(
            "[resize] {}x{} css, {}x{} px, aspect {:.3}",
            width,
            height,
            resize.surface_width,
            resize.surface_height,
            resize.aspect_ratio
        );
    });
}

fn wire_scroll(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_window_listener(&w.window, "scroll", move |_: web::Event| {
        let y = dom::scroll_y(&w2.window);
        let now = w2.clock.elapsed_secs();
        _ = w2.state.borrow_mut().handle_scroll(y, now);
    });
}

fn wire_pointermove(w: &InputWiring) {
    let w2 = w.clone();
    dom::add_window_listener(&w.window, "pointermove", move |ev: web::PointerEvent| {
        w2.state
            .borrow_mut()
            .handle_pointer(ev.client_x() as f32, ev.client_y() as f32);
    });
}
