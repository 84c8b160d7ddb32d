//! The document page: toolbar, page surface, and sidebar.
//!
//! ARCHITECTURE
//! ============
//! This page owns the page-surface node refs and builds the `Dispatcher`
//! around them, then starts the viewer once the canvas is mounted. Start-up
//! runs document load, tag fetch and quote fetch in that order; any failure
//! stops it with a single "Failed to load PDF viewer" message.

use leptos::prelude::*;
use viewer::controller::ViewerCore;

use crate::components::page_host::PageHost;
use crate::components::sidebar::Sidebar;
use crate::components::toolbar::Toolbar;
use crate::net::types::HostConfig;
use crate::state::session::SessionState;
use crate::state::toasts::ToastState;
use crate::util::effects::Dispatcher;

#[component]
pub fn DocumentPage(config: HostConfig) -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let text_layer_ref = NodeRef::<leptos::html::Div>::new();

    let dispatcher = Dispatcher::new(core, session, toasts, config, canvas_ref, text_layer_ref);
    provide_context(dispatcher);

    let started = RwSignal::new(false);
    Effect::new(move || {
        if canvas_ref.get().is_none() || started.get_untracked() {
            return;
        }
        started.set(true);
        dispatcher.start();
    });

    view! {
        <div class="viewer" class=("viewer--sidebar-collapsed", move || core.with(ViewerCore::sidebar_collapsed))>
            <Toolbar/>
            <div class="viewer__body">
                <main class="viewer__page">
                    <Show when=move || session.with(|s| s.failure_message().is_some())>
                        <div class="viewer__error">{move || session.with(SessionState::failure_message)}</div>
                    </Show>
                    <PageHost canvas_ref text_layer_ref/>
                </main>
                <Sidebar/>
            </div>
        </div>
    }
}
