//! Top bar: page navigation, zoom, quote count, and the sidebar toggle.

use leptos::prelude::*;
use viewer::controller::ViewerCore;

use crate::util::effects::Dispatcher;

/// Viewer toolbar.
#[component]
pub fn Toolbar() -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();
    let dispatcher = expect_context::<Dispatcher>();

    let current_page = move || core.with(ViewerCore::current_page);
    let total_pages = move || core.with(ViewerCore::total_pages);

    let on_page_change = move |ev: leptos::ev::Event| {
        let requested = event_target_value(&ev).trim().parse::<i64>();
        if let Ok(n) = requested {
            dispatcher.apply(|c| c.set_page(n));
        }
        // Out-of-range or unparsable input is ignored; show the real page again.
        #[cfg(feature = "csr")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            input.set_value(&core.with_untracked(ViewerCore::current_page).to_string());
        }
    };

    view! {
        <div class="viewer-toolbar">
            <button
                class="btn viewer-toolbar__prev"
                disabled=move || !core.with(ViewerCore::can_go_back)
                on:click=move |_| dispatcher.apply(|c| c.navigate(-1))
                title="Previous page"
            >
                "‹"
            </button>
            <input
                class="viewer-toolbar__page"
                type="number"
                min="1"
                max=move || total_pages().to_string()
                prop:value=move || current_page().to_string()
                on:change=on_page_change
            />
            <span class="viewer-toolbar__of">"/"</span>
            <span class="viewer-toolbar__page-count">{total_pages}</span>
            <button
                class="btn viewer-toolbar__next"
                disabled=move || !core.with(ViewerCore::can_go_forward)
                on:click=move |_| dispatcher.apply(|c| c.navigate(1))
                title="Next page"
            >
                "›"
            </button>

            <span class="viewer-toolbar__divider"></span>

            <button class="btn viewer-toolbar__zoom-out" on:click=move |_| dispatcher.apply(ViewerCore::zoom_out) title="Zoom out">
                "−"
            </button>
            <span class="viewer-toolbar__zoom">{move || core.with(ViewerCore::zoom_label)}</span>
            <button class="btn viewer-toolbar__zoom-in" on:click=move |_| dispatcher.apply(ViewerCore::zoom_in) title="Zoom in">
                "+"
            </button>

            <span class="viewer-toolbar__spacer"></span>

            <span class="viewer-toolbar__quote-count">{move || core.with(ViewerCore::quote_count_label)}</span>
            <button
                class="btn viewer-toolbar__sidebar-toggle"
                on:click=move |_| core.update(ViewerCore::toggle_sidebar)
                title="Toggle sidebar"
            >
                {move || if core.with(ViewerCore::sidebar_collapsed) { "⟨" } else { "⟩" }}
            </button>
        </div>
    }
}
