//! SVG layer drawing the active page's quote highlights.
//!
//! The SVG's `viewBox` is the canvas buffer size, so shapes are drawn in the
//! same intrinsic pixel space the quotes were recorded in and stretch with
//! the canvas when CSS scales it.

use leptos::prelude::*;
use viewer::controller::ViewerCore;

use crate::state::session::SessionState;

#[component]
pub fn HighlightLayer() -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();
    let session = expect_context::<RwSignal<SessionState>>();

    let view_box = move || {
        session.with(|s| {
            s.page_size
                .map(|size| format!("0 0 {} {}", size.width, size.height))
                .unwrap_or_default()
        })
    };

    view! {
        <svg class="page-host__highlights" viewBox=view_box preserveAspectRatio="none" aria-hidden="true">
            {move || {
                core.with(ViewerCore::overlay)
                    .into_iter()
                    .map(|shape| {
                        let style = shape.style();
                        let rect = shape.rect;
                        view! {
                            <rect
                                class="quote-highlight"
                                class=("quote-highlight--emphasized", shape.emphasized)
                                data-quote-id=shape.quote_id.to_string()
                                x=rect.x1.to_string()
                                y=rect.y1.to_string()
                                width=rect.width().to_string()
                                height=rect.height().to_string()
                                fill=style.fill
                                stroke=style.stroke
                                stroke-width=style.stroke_width.to_string()
                            ></rect>
                        }
                    })
                    .collect_view()
            }}
        </svg>
    }
}
