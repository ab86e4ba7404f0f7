use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::apod::{FetchError, Fetcher};
use crate::render::{render_card, RenderError};
use crate::AppState;

/// Id of the shell element that receives the rendered picture.
pub const PLACEHOLDER_ID: &str = "placeholder";

#[derive(Debug, thiserror::Error)]
enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl PageError {
    fn status(&self) -> StatusCode {
        match self {
            PageError::Fetch(_) => StatusCode::BAD_GATEWAY,
            PageError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// `GET /` - fetch the picture of the day and serve the rendered page.
pub async fn show_picture(State(state): State<AppState>) -> Response {
    match build_page(&state).await {
        Ok(page) => Html(page).into_response(),
        Err(err) => {
            tracing::error!("failed to build the picture page: {}", err);
            error_page(&state, &err)
        }
    }
}

async fn build_page(state: &AppState) -> Result<String, PageError> {
    let record = state.fetcher.fetch().await?;
    tracing::info!(title = %record.title, date = %record.date, "rendering picture of the day");

    let markup = render_card(&record)?;
    Ok(state.shell.inject(PLACEHOLDER_ID, &markup)?)
}

fn error_page(state: &AppState, err: &PageError) -> Response {
    let detail = err
        .to_string()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    let markup = format!(
        "<div class=\"apod-error\"><h2>The picture is unavailable</h2><p>{detail}</p></div>"
    );
    let body = state
        .shell
        .inject(PLACEHOLDER_ID, &markup)
        .unwrap_or(markup);

    (err.status(), Html(body)).into_response()
}
