//! Carrying out the viewer core's actions in the browser.
//!
//! ARCHITECTURE
//! ============
//! Components do not mutate `ViewerCore` and then improvise side effects.
//! They hand the operation to [`Dispatcher::apply`], which runs it inside a
//! signal update and performs every returned [`Action`]: pdf.js renders,
//! emphasis timers, clearing the native selection, toasts and alerts.
//! Asynchronous outcomes (page rendered, quote stored, request failed) are
//! fed back into the core through the same path.
//!
//! The dispatcher is `Copy` and provided as context, so any component can
//! reach it without threading callbacks through props.

use leptos::prelude::*;
use viewer::controller::{Action, DELETE_CONFIRMATION, InitError, Notice, NoticeLevel, ViewerCore, WriteOp};
use viewer::doc::QuoteId;
use viewer::geom::Point;

use crate::net::api;
use crate::net::types::HostConfig;
use crate::state::session::{LoadStatus, SessionState};
use crate::state::toasts::{TOAST_MS, ToastState};
use crate::util::{dialog, selection};
#[cfg(feature = "csr")]
use crate::util::pdfjs::{PdfDocument, RenderError};

#[cfg(feature = "csr")]
#[derive(Debug, thiserror::Error)]
enum StartError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Store(#[from] crate::net::types::ApiError),
}

/// Run `f` after `delay_ms`. Native builds have no timers.
fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (delay_ms, f);
    }
}

fn log_failure(context: &str, err: &dyn std::fmt::Display) {
    #[cfg(feature = "csr")]
    log::error!("{context}: {err}");
    #[cfg(not(feature = "csr"))]
    let _ = (context, err);
}

/// Executes viewer operations and their side effects.
#[derive(Clone, Copy)]
pub struct Dispatcher {
    core: RwSignal<ViewerCore>,
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    config: StoredValue<HostConfig>,
    canvas: NodeRef<leptos::html::Canvas>,
    text_layer: NodeRef<leptos::html::Div>,
    #[cfg(feature = "csr")]
    document: StoredValue<Option<PdfDocument>, LocalStorage>,
}

impl Dispatcher {
    pub fn new(
        core: RwSignal<ViewerCore>,
        session: RwSignal<SessionState>,
        toasts: RwSignal<ToastState>,
        config: HostConfig,
        canvas: NodeRef<leptos::html::Canvas>,
        text_layer: NodeRef<leptos::html::Div>,
    ) -> Self {
        Self {
            core,
            session,
            toasts,
            config: StoredValue::new(config),
            canvas,
            text_layer,
            #[cfg(feature = "csr")]
            document: StoredValue::new_local(None),
        }
    }

    /// Run `op` against the core and carry out the actions it returns.
    pub fn apply(&self, op: impl FnOnce(&mut ViewerCore) -> Vec<Action>) {
        let actions = self.core.try_update(op).unwrap_or_default();
        self.run(actions);
    }

    pub fn run(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::RenderPage { page, scale, seq } => self.render(page, scale, seq),
                Action::ReleaseEmphasisAfter { ticket, delay_ms } => {
                    let core = self.core;
                    after(delay_ms, move || {
                        core.update(|c| {
                            c.release_emphasis(ticket);
                        });
                    });
                }
                Action::ClearNativeSelection => selection::clear(),
                Action::Notify(notice) => self.notify(notice),
            }
        }
    }

    /// Errors block until acknowledged; successes show as a toast.
    pub fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => {
                let toasts = self.toasts;
                if let Some(id) = toasts.try_update(|t| t.push(notice.message)) {
                    after(TOAST_MS, move || {
                        toasts.update(|t| {
                            t.dismiss(id);
                        });
                    });
                }
            }
            NoticeLevel::Error => {
                log_failure("viewer", &notice.message);
                dialog::alert(&notice.message);
            }
        }
    }

    // --- Start-up ---

    /// Open the document, load tags and quotes, then render the first page.
    pub fn start(&self) {
        let config = self.config.get_value();
        let Some(url) = config.pdf_url().map(str::to_owned) else {
            self.fail(InitError::MissingDocument);
            return;
        };
        #[cfg(feature = "csr")]
        {
            let this = *self;
            leptos::task::spawn_local(async move {
                match this.load(&url, &config).await {
                    Ok(total_pages) => {
                        log::info!("opened {url} ({total_pages} pages)");
                        this.session.update(|s| s.status = LoadStatus::Ready);
                        this.apply(|c| c.document_loaded(total_pages));
                    }
                    Err(err) => {
                        log_failure("viewer start-up failed", &err);
                        this.fail(InitError::LoadFailed);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = url;
        }
    }

    #[cfg(feature = "csr")]
    async fn load(&self, url: &str, config: &HostConfig) -> Result<u32, StartError> {
        let document = PdfDocument::load(url).await?;
        let total_pages = document.page_count();
        self.document.set_value(Some(document));

        let tags = api::fetch_tags(&config.endpoints).await?;
        self.core.update(|c| c.load_tags(tags));
        let quotes = api::fetch_quotes(&config.endpoints).await?;
        self.core.update(|c| c.load_quotes(quotes));
        Ok(total_pages)
    }

    fn fail(&self, err: InitError) {
        self.session.update(|s| s.status = LoadStatus::Failed(err.clone()));
        self.notify(Notice::error(err.to_string()));
    }

    // --- Page surfaces ---

    fn render(&self, page: u32, scale: f64, seq: u64) {
        #[cfg(feature = "csr")]
        {
            let this = *self;
            leptos::task::spawn_local(async move { this.render_async(page, scale, seq).await });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (page, scale, seq);
        }
    }

    #[cfg(feature = "csr")]
    async fn render_async(self, page: u32, scale: f64, seq: u64) {
        let Some(document) = self.document.try_get_value().flatten() else {
            log::warn!("render of page {page} requested before the document opened");
            return;
        };
        let (Some(canvas), Some(text_layer)) = (self.canvas.get_untracked(), self.text_layer.get_untracked()) else {
            log::warn!("page surfaces not mounted; dropping render {seq}");
            return;
        };
        match document.render_page(page, scale, &canvas, &text_layer).await {
            Ok(size) => {
                self.session.update(|s| s.page_size = Some(size));
                self.core.update(|c| {
                    c.page_rendered(seq);
                });
            }
            Err(err) => log_failure(&format!("rendering page {page} failed"), &err),
        }
    }

    /// Capture the browser selection after the pointer is released over the page.
    pub fn capture_selection(&self) {
        #[cfg(feature = "csr")]
        {
            let Some(snapshot) = selection::current() else {
                return;
            };
            let Some(canvas) = self.canvas.get_untracked() else {
                return;
            };
            let metrics = selection::canvas_metrics(&canvas);
            self.core.update(|c| {
                c.select_text(&snapshot.text, snapshot.bounds, &metrics);
            });
        }
    }

    /// A click on the page at viewport point `client`.
    pub fn click_page(&self, client: Point) {
        #[cfg(feature = "csr")]
        {
            // Releasing a drag-selection also fires a click; that is not a highlight click.
            if selection::current().is_some_and(|s| !s.text.trim().is_empty()) {
                return;
            }
            let Some(canvas) = self.canvas.get_untracked() else {
                return;
            };
            let metrics = selection::canvas_metrics(&canvas);
            self.apply(|c| c.click_page(client, &metrics));
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = client;
        }
    }

    // --- Store writes ---

    /// Validate the creation form and send the quote to the store.
    pub fn submit(&self) {
        let extraction_id = self.config.with_value(|c| c.extraction_id);
        let request = match self.core.with_untracked(|c| c.submit_quote(extraction_id)) {
            Ok(request) => request,
            Err(err) => {
                self.notify(Notice::error(err.to_string()));
                return;
            }
        };
        if self.session.with_untracked(|s| s.submitting) {
            return;
        }
        self.session.update(|s| s.submitting = true);

        let this = *self;
        leptos::task::spawn_local(async move {
            let config = this.config.get_value();
            let result = api::create_quote(&config, &request).await;
            this.session.update(|s| s.submitting = false);
            match result {
                Ok(quote) => this.apply(|c| c.quote_created(quote, &request)),
                Err(err) => {
                    log_failure("create quote", &err);
                    this.apply(|c| c.write_failed(WriteOp::Create));
                }
            }
        });
    }

    /// Ask for confirmation, then delete quote `id` from the store.
    pub fn delete(&self, id: QuoteId) {
        if !dialog::confirm(DELETE_CONFIRMATION) {
            return;
        }
        self.session.update(|s| s.deleting = Some(id));

        let this = *self;
        leptos::task::spawn_local(async move {
            let config = this.config.get_value();
            let result = api::delete_quote(&config, id).await;
            this.session.update(|s| s.deleting = None);
            match result {
                Ok(()) => this.apply(|c| c.quote_deleted(id)),
                Err(err) => {
                    log_failure(&format!("delete quote {id}"), &err);
                    this.apply(|c| c.write_failed(WriteOp::Delete));
                }
            }
        });
    }
}
