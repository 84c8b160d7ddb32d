//! Bindings to the pdf.js document renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page loads pdf.js as a classic script, which exposes the global
//! `pdfjsLib`. Only the handful of calls the viewer needs are bound here:
//! open a document, count its pages, rasterise a page into a canvas, and lay
//! the page's text out as selectable spans over it.

use js_sys::{Array, Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlCanvasElement, HtmlElement};

use crate::state::session::PageSize;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = pdfjsLib, js_name = getDocument)]
    fn get_document(src: &str) -> Result<LoadingTask, JsValue>;

    #[wasm_bindgen(catch, js_namespace = pdfjsLib, js_name = renderTextLayer)]
    fn render_text_layer(params: &JsValue) -> Result<RenderTask, JsValue>;

    type LoadingTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &LoadingTask) -> Promise;

    type DocumentProxy;

    #[wasm_bindgen(method, getter, js_name = numPages)]
    fn num_pages(this: &DocumentProxy) -> u32;

    #[wasm_bindgen(method, js_name = getPage)]
    fn get_page(this: &DocumentProxy, number: u32) -> Promise;

    type PageProxy;

    #[wasm_bindgen(method, js_name = getViewport)]
    fn get_viewport(this: &PageProxy, params: &JsValue) -> Viewport;

    #[wasm_bindgen(method)]
    fn render(this: &PageProxy, params: &JsValue) -> RenderTask;

    #[wasm_bindgen(method, js_name = getTextContent)]
    fn get_text_content(this: &PageProxy) -> Promise;

    type Viewport;

    #[wasm_bindgen(method, getter)]
    fn width(this: &Viewport) -> f64;

    #[wasm_bindgen(method, getter)]
    fn height(this: &Viewport) -> f64;

    type RenderTask;

    #[wasm_bindgen(method, getter)]
    fn promise(this: &RenderTask) -> Promise;
}

/// A pdf.js call failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("pdf.js: {0}")]
pub struct RenderError(String);

impl From<JsValue> for RenderError {
    fn from(value: JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{value:?}"));
        Self(message)
    }
}

fn params(entries: &[(&str, &JsValue)]) -> Result<JsValue, RenderError> {
    let obj = Object::new();
    for (key, value) in entries {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

/// An open PDF document.
#[derive(Clone)]
pub struct PdfDocument {
    proxy: DocumentProxy,
}

impl PdfDocument {
    /// Fetch and open the document at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when pdf.js is missing or the document cannot be opened.
    pub async fn load(url: &str) -> Result<Self, RenderError> {
        let task = get_document(url)?;
        let proxy = JsFuture::from(task.promise()).await?;
        Ok(Self { proxy: proxy.unchecked_into() })
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.proxy.num_pages()
    }

    /// Rasterise `number` at `scale` into `canvas`, then rebuild `text_layer`
    /// with the page's selectable text.
    ///
    /// The canvas buffer is resized to the page viewport, so its intrinsic
    /// size is what the returned [`PageSize`] reports.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError`] when any pdf.js step fails.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub async fn render_page(
        &self,
        number: u32,
        scale: f64,
        canvas: &HtmlCanvasElement,
        text_layer: &HtmlElement,
    ) -> Result<PageSize, RenderError> {
        let page: PageProxy = JsFuture::from(self.proxy.get_page(number)).await?.unchecked_into();
        let viewport = page.get_viewport(&params(&[("scale", &JsValue::from_f64(scale))])?);
        let size = PageSize { width: viewport.width().floor(), height: viewport.height().floor() };

        canvas.set_width(size.width as u32);
        canvas.set_height(size.height as u32);
        let context: JsValue = canvas
            .get_context("2d")?
            .ok_or_else(|| RenderError("canvas has no 2d context".to_owned()))?
            .into();
        let viewport_value: &JsValue = viewport.as_ref();

        let render_params = params(&[("canvasContext", &context), ("viewport", viewport_value)])?;
        JsFuture::from(page.render(&render_params).promise()).await?;

        let text_content = JsFuture::from(page.get_text_content()).await?;
        text_layer.set_inner_html("");
        let style = text_layer.style();
        style.set_property("width", &format!("{}px", size.width))?;
        style.set_property("height", &format!("{}px", size.height))?;
        // pdf.js 3 positions text spans relative to this variable.
        style.set_property("--scale-factor", &scale.to_string())?;
        let container: &JsValue = text_layer.as_ref();
        let text_divs: JsValue = Array::new().into();
        let text_params = params(&[
            ("textContent", &text_content),
            ("container", container),
            ("viewport", viewport_value),
            ("textDivs", &text_divs),
        ])?;
        // Spans exist only once the text-layer task settles.
        JsFuture::from(render_text_layer(&text_params)?.promise()).await?;

        Ok(size)
    }
}
