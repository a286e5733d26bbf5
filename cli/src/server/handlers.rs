//! Request handlers for the web form.

use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use serde::Deserialize;
use upiqr_core::{build_upi_uri, encode_png_base64};

use super::templates::{index_page, result_page};
use super::AppState;

/// Fields posted by the input form. Any of them may be missing.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    pub pa: Option<String>,
    pub pn: Option<String>,
    pub am: Option<String>,
    pub tn: Option<String>,
}

/// `GET /`
pub async fn index() -> Html<String> {
    Html(index_page(None))
}

/// `POST /generate`
///
/// User errors re-render the form with a message and a 200 status.
pub async fn generate(State(state): State<Arc<AppState>>, Form(form): Form<GenerateForm>) -> Html<String> {
    let pa = form.pa.as_deref().map(str::trim).unwrap_or_default();
    if pa.is_empty() {
        return Html(index_page(Some("UPI ID (pa) is required")));
    }

    let uri = match build_upi_uri(
        pa,
        non_empty(&form.pn),
        non_empty(&form.am),
        non_empty(&form.tn),
        None,
    ) {
        Ok(uri) => uri,
        Err(e) => return Html(index_page(Some(&e.to_string()))),
    };

    match encode_png_base64(&uri, &state.style) {
        Ok(qr_b64) => {
            tracing::info!("generated QR for {}", pa);
            Html(result_page(&uri, &qr_b64, pa))
        }
        Err(e) => {
            tracing::warn!("QR generation failed for {}: {}", pa, e);
            Html(index_page(Some(&e.to_string())))
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
