//! Reading the browser's text selection and the page canvas geometry.
//!
//! Requires a browser environment; native builds see no selection.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

#[cfg(feature = "csr")]
use viewer::geom::CanvasMetrics;
use viewer::geom::{ClientRect, Rect};

/// The user's current text selection, as the browser reports it.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSnapshot {
    pub text: String,
    /// Bounding box of the first selected range, in viewport pixels.
    pub bounds: ClientRect,
}

#[cfg(feature = "csr")]
fn client_rect(rect: &web_sys::DomRect) -> ClientRect {
    ClientRect::new(rect.left(), rect.top(), rect.width(), rect.height())
}

/// Snapshot the current selection, or `None` when nothing is selected.
pub fn current() -> Option<SelectionSnapshot> {
    #[cfg(feature = "csr")]
    {
        let selection = web_sys::window()?.get_selection().ok()??;
        if selection.range_count() == 0 {
            return None;
        }
        let text = String::from(selection.to_string());
        let range = selection.get_range_at(0).ok()?;
        Some(SelectionSnapshot { text, bounds: client_rect(&range.get_bounding_client_rect()) })
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Drop the browser's native selection.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(selection) = web_sys::window().and_then(|w| w.get_selection().ok().flatten()) {
            let _ = selection.remove_all_ranges();
        }
    }
}

/// On-screen placement and buffer size of the page canvas.
#[cfg(feature = "csr")]
pub fn canvas_metrics(canvas: &web_sys::HtmlCanvasElement) -> CanvasMetrics {
    CanvasMetrics::new(
        client_rect(&canvas.get_bounding_client_rect()),
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    )
}

/// Format a rectangle's coordinates for the creation form, one decimal each.
pub fn coordinate_labels(rect: Rect) -> [String; 4] {
    [rect.x1, rect.y1, rect.x2, rect.y2].map(|v| format!("{v:.1}"))
}

