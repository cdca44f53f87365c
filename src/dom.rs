use crate::viewport::Resize;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window inner size in CSS pixels.
pub fn viewport_css_size(window: &web::Window) -> (f32, f32) {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Set the canvas backing store to the surface size in device pixels.
/// CSS keeps the element at full viewport size.
pub fn apply_surface_size(canvas: &web::HtmlCanvasElement, resize: &Resize) {
    if canvas.width() != resize.surface_width {
        canvas.set_width(resize.surface_width);
    }
    if canvas.height() != resize.surface_height {
        canvas.set_height(resize.surface_height);
    }
}

pub fn add_window_listener<E, F>(window: &web::Window, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}
