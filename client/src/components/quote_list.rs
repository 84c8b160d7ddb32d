//! List of recorded quotes. Clicking a card jumps to its highlight.

#[cfg(test)]
#[path = "quote_list_test.rs"]
mod quote_list_test;

use leptos::prelude::*;
use viewer::controller::ViewerCore;
use viewer::doc::Quote;

use crate::state::session::SessionState;
use crate::util::effects::Dispatcher;

fn page_badge(quote: &Quote) -> String {
    match quote.page_number() {
        Some(page) => format!("Page {page}"),
        None => "Page ?".to_owned(),
    }
}

#[component]
fn QuoteCard(quote: Quote) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dispatcher = expect_context::<Dispatcher>();
    let id = quote.id;
    let badge = page_badge(&quote);

    view! {
        <div class="quote-card" data-quote-id=id.to_string() on:click=move |_| dispatcher.apply(|c| c.go_to_quote(id))>
            <div class="quote-card__header">
                <span class="badge badge--primary">{badge}</span>
                <button
                    class="btn quote-card__delete"
                    disabled=move || session.with(|s| s.deleting == Some(id))
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        dispatcher.delete(id);
                    }
                    title="Delete quote"
                    aria-label="Delete quote"
                >
                    "✕"
                </button>
            </div>
            <p class="quote-card__text">{quote.text}</p>
            <div class="quote-card__tags">
                {quote
                    .tags
                    .into_iter()
                    .map(|tag| {
                        let style = format!("background-color: {};", tag.display_color());
                        view! { <span class="badge badge--small" style=style>{tag.name}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn QuoteList() -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();

    view! {
        <div class="quote-list">
            {move || {
                let quotes: Vec<Quote> = core.with(|c| c.quotes().iter().cloned().collect());
                if quotes.is_empty() {
                    view! {
                        <div class="quote-list__empty">"No quotes yet. Select text to create your first quote."</div>
                    }
                        .into_any()
                } else {
                    quotes.into_iter().map(|quote| view! { <QuoteCard quote/> }).collect_view().into_any()
                }
            }}
        </div>
    }
}
