//! Collapsible sidebar with the "Create Quote" and "Quotes" tabs.
//!
//! No tab panel is shown until the first page has rendered.

use leptos::prelude::*;
use viewer::controller::{Tab, ViewerCore};

use crate::components::quote_form::QuoteForm;
use crate::components::quote_list::QuoteList;

fn tab_label(tab: Tab) -> &'static str {
    match tab {
        Tab::Create => "Create Quote",
        Tab::Quotes => "Quotes",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();

    let active_tab = move || core.with(ViewerCore::active_tab);
    let is_active = move |tab: Tab| active_tab() == Some(tab);

    view! {
        <aside class="viewer-sidebar" class=("viewer-sidebar--collapsed", move || core.with(ViewerCore::sidebar_collapsed))>
            <div class="viewer-sidebar__tabs" role="tablist">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="viewer-sidebar__tab"
                                class=("viewer-sidebar__tab--active", move || is_active(tab))
                                data-tab=tab.as_str()
                                role="tab"
                                on:click=move |_| core.update(|c| c.switch_tab(tab))
                            >
                                {tab_label(tab)}
                                {(tab == Tab::Quotes)
                                    .then(|| {
                                        view! {
                                            <span class="viewer-sidebar__tab-count">
                                                {move || core.with(ViewerCore::quote_count)}
                                            </span>
                                        }
                                    })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <Show when=move || is_active(Tab::Create)>
                <div class="viewer-sidebar__panel" id="tab-create">
                    <QuoteForm/>
                </div>
            </Show>
            <Show when=move || is_active(Tab::Quotes)>
                <div class="viewer-sidebar__panel" id="tab-quotes">
                    <QuoteList/>
                </div>
            </Show>
        </aside>
    }
}
