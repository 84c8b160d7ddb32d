//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use viewer::controller::{InitError, ViewerCore};

use crate::components::toast_stack::ToastStack;
use crate::pages::document::DocumentPage;
use crate::state::session::{LoadStatus, SessionState};
use crate::state::toasts::ToastState;
use crate::util::{dialog, host_config};

/// Root application component.
///
/// Provides the viewer core and shell state as contexts, reads the host
/// configuration, and mounts the document page. A missing or invalid
/// configuration is an initialization failure.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let core = RwSignal::new(ViewerCore::new());
    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(core);
    provide_context(session);
    provide_context(toasts);

    let page = match host_config::read() {
        Ok(config) => view! { <DocumentPage config/> }.into_any(),
        Err(err) => {
            #[cfg(feature = "csr")]
            log::error!("{err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
            let failure = InitError::LoadFailed;
            session.update(|s| s.status = LoadStatus::Failed(failure.clone()));
            dialog::alert(&failure.to_string());
            view! { <div class="viewer__error">{failure.to_string()}</div> }.into_any()
        }
    };

    view! {
        <Title text="Quote Viewer"/>
        {page}
        <ToastStack/>
    }
}
