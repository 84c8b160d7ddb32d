//! The page surface: pdf.js canvas, quote highlights, and the text layer.
//!
//! ARCHITECTURE
//! ============
//! Three layers share one box. The canvas holds the rasterised page, the
//! highlight SVG sits over it, and the pdf.js text layer sits on top so text
//! stays selectable. Because the text layer swallows pointer events, clicks
//! on highlights are resolved by hit-testing in the viewer core instead of by
//! listeners on the shapes.

use leptos::prelude::*;
use viewer::geom::Point;

use crate::components::highlight_layer::HighlightLayer;
use crate::state::session::{LoadStatus, SessionState};
use crate::util::effects::Dispatcher;

/// Page surface. The dispatcher renders into the two node refs.
#[component]
pub fn PageHost(
    canvas_ref: NodeRef<leptos::html::Canvas>,
    text_layer_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let session = expect_context::<RwSignal<SessionState>>();

    let loading = move || session.with(|s| s.status == LoadStatus::Loading);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        dispatcher.click_page(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
    };

    view! {
        <div class="page-host">
            <div class="page-host__stack" on:mouseup=move |_| dispatcher.capture_selection() on:click=on_click>
                <canvas class="page-host__canvas" node_ref=canvas_ref></canvas>
                <HighlightLayer/>
                <div class="page-host__text-layer textLayer" node_ref=text_layer_ref></div>
            </div>
            <Show when=loading>
                <div class="page-host__loading">"Loading PDF..."</div>
            </Show>
        </div>
    }
}
