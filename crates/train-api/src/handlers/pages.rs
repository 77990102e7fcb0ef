//! Landing page.

use axum::extract::State;
use axum::response::Html;
use axum_extra::extract::CookieJar;

use crate::session::session_or_new;
use crate::state::AppState;
use crate::templates;

/// Selection form. Starts a session if the request has none.
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Html<String>) {
    let (_, jar) = session_or_new(&state.store, jar);
    (jar, Html(templates::selection_page()))
}
