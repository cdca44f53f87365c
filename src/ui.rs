//! Parameter panel: a single live color control for the shared material.

use crate::color::Color;
use crate::state::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

const PANEL_STYLE: &str = "position:fixed;top:12px;right:12px;z-index:10;\
padding:8px 12px;border-radius:6px;background:rgba(20,20,24,0.85);\
color:#eee;font:13px system-ui;display:flex;gap:8px;align-items:center;";

pub fn build_parameter_panel(
    document: &web::Document,
    state: Rc<RefCell<AppState>>,
) -> anyhow::Result<()> {
    let js = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;

    let panel = document.create_element("div").map_err(js)?;
    panel.set_id("parameter-panel");
    _ = panel.set_attribute("style", PANEL_STYLE);

    let label = document.create_element("label").map_err(js)?;
    label.set_text_content(Some("materialColor"));
    _ = label.set_attribute("for", "material-color");

    let input = document
        .create_element("input")
        .map_err(js)?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    input.set_id("material-color");
    input.set_type("color");
    input.set_value(&state.borrow().scene.material_color().to_hex());

    let input_for_listener = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_: web::Event| {
        let value = input_for_listener.value();
        match Color::from_hex(&value) {
            Ok(c) => state.borrow_mut().set_material_color(c),
            Err(e) => log::warn!("[panel] ignoring color {:?}: {}", value, e),
        }
    }) as Box<dyn FnMut(_)>);
    input
        .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
        .map_err(js)?;
    closure.forget();

    panel.append_child(&label).map_err(js)?;
    panel.append_child(&input).map_err(js)?;
    body.append_child(&panel).map_err(js)?;
    Ok(())
}
