use crate::gradient::GradientRamp;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// Fetch an image and decode it to RGBA8 through a scratch 2D canvas.
pub async fn load_gradient(url: &str) -> anyhow::Result<GradientRamp> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    if !response.ok() {
        anyhow::bail!("fetch {} failed: HTTP {}", url, response.status());
    }
    let blob: web::Blob = JsFuture::from(response.blob().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let bitmap: web::ImageBitmap =
        JsFuture::from(window.create_image_bitmap_with_blob(&blob).map_err(js_err)?)
            .await
            .map_err(js_err)?
            .dyn_into()
            .map_err(js_err)?;

    let (w, h) = (bitmap.width(), bitmap.height());
    let scratch: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    scratch.set_width(w);
    scratch.set_height(h);
    let ctx: web::CanvasRenderingContext2d = scratch
        .get_context("2d")
        .map_err(js_err)?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    ctx.draw_image_with_image_bitmap(&bitmap, 0.0, 0.0)
        .map_err(js_err)?;
    let pixels = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(js_err)?
        .data();
    Ok(GradientRamp::from_rgba(w, h, pixels.0)?)
}
