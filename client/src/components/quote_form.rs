//! Quote creation form: the captured selection, tag picker, and location note.

use leptos::prelude::*;
use viewer::controller::ViewerCore;
use viewer::doc::Tag;

use crate::state::session::SessionState;
use crate::util::effects::Dispatcher;
use crate::util::selection::coordinate_labels;

#[component]
fn TagOption(tag: Tag) -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();
    let id = tag.id;
    let mandatory = tag.is_mandatory;
    let badge_style = format!("background-color: {};", tag.display_color());
    let name = tag.name;

    view! {
        <label class="tag-option">
            <input
                class="tag-option__checkbox"
                type="checkbox"
                value=id.to_string()
                prop:checked=move || core.with(|c| c.form().tag_ids.contains(&id))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    core.update(|c| c.set_tag_checked(id, checked));
                }
            />
            <span class="badge tag-option__name" style=badge_style>{name}</span>
            <Show when=move || mandatory>
                <span class="badge badge--required">"Required"</span>
            </Show>
        </label>
    }
}

#[component]
pub fn QuoteForm() -> impl IntoView {
    let core = expect_context::<RwSignal<ViewerCore>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let dispatcher = expect_context::<Dispatcher>();

    let visible = move || core.with(|c| c.form().visible);
    let selected_text = move || core.with(|c| c.selection().map(|s| s.text.clone()).unwrap_or_default());
    let selected_page = move || core.with(|c| c.selection().map(|s| s.page).unwrap_or_default());
    let coordinates = move || {
        core.with(|c| {
            c.selection()
                .map(|s| {
                    let [x1, y1, x2, y2] = coordinate_labels(s.rect);
                    format!("({x1}, {y1}) to ({x2}, {y2})")
                })
                .unwrap_or_default()
        })
    };

    view! {
        <Show
            when=visible
            fallback=|| view! { <p class="quote-form__hint">"Select text on the page to create a quote."</p> }
        >
            <form
                class="quote-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    dispatcher.submit();
                }
            >
                <div class="quote-form__field">
                    <span class="quote-form__label">"Selected text"</span>
                    <blockquote class="quote-form__text">{selected_text}</blockquote>
                </div>
                <div class="quote-form__meta">
                    <span class="badge">{move || format!("Page {}", selected_page())}</span>
                    <span class="quote-form__coords">{coordinates}</span>
                </div>

                <div class="quote-form__field">
                    <span class="quote-form__label">"Tags"</span>
                    <div class="quote-form__tags">
                        {move || {
                            let tags = core.with(|c| c.tags().to_vec());
                            if tags.is_empty() {
                                view! { <p class="quote-form__empty">"No tags available"</p> }.into_any()
                            } else {
                                tags.into_iter()
                                    .map(|tag| view! { <TagOption tag/> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                </div>

                <label class="quote-form__field">
                    <span class="quote-form__label">"Location (optional)"</span>
                    <input
                        class="quote-form__location"
                        type="text"
                        placeholder="e.g. Section 3.2, paragraph 2"
                        prop:value=move || core.with(|c| c.form().location_description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            core.update(|c| c.set_location_description(value));
                        }
                    />
                </label>

                <div class="quote-form__actions">
                    <button
                        class="btn"
                        type="button"
                        on:click=move |_| dispatcher.apply(ViewerCore::cancel_selection)
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || session.with(|s| s.submitting)
                    >
                        "Save Quote"
                    </button>
                </div>
            </form>
        </Show>
    }
}
