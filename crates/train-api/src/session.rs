//! Session cookie handling.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;
use train_models::SessionId;
use train_storage::{ClipStore, SessionStore};

/// Name of the cookie carrying the session ID.
pub const SESSION_COOKIE: &str = "train_session";

/// The session named by the request cookie, if it carries a valid one.
pub fn existing_session(store: &ClipStore, jar: &CookieJar) -> Option<SessionStore> {
    let cookie = jar.get(SESSION_COOKIE)?;
    match store.open_session(cookie.value()) {
        Ok(session) => Some(session),
        Err(e) => {
            debug!("Ignoring session cookie: {}", e);
            None
        }
    }
}

/// The request's session, starting a new one (and setting its cookie) when
/// the request has none.
pub fn session_or_new(store: &ClipStore, jar: CookieJar) -> (SessionStore, CookieJar) {
    if let Some(session) = existing_session(store, &jar) {
        return (session, jar);
    }

    let id = SessionId::new();
    debug!(session = %id, "Starting new session");
    let jar = jar.add(session_cookie(&id));
    (store.session(&id), jar)
}

fn session_cookie(id: &SessionId) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, id.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_sets_cookie() {
        let store = ClipStore::new("/tmp/train-test");
        let (session, jar) = session_or_new(&store, CookieJar::new());

        let cookie = jar.get(SESSION_COOKIE).unwrap();
        assert_eq!(cookie.value(), session.id().to_string());
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_existing_session_is_reused() {
        let store = ClipStore::new("/tmp/train-test");
        let id = SessionId::new();
        let jar = CookieJar::new().add(session_cookie(&id));

        let (session, _) = session_or_new(&store, jar);
        assert_eq!(session.id(), &id);
    }

    #[test]
    fn test_tampered_cookie_is_replaced() {
        let store = ClipStore::new("/tmp/train-test");
        let jar = CookieJar::new().add(Cookie::new(SESSION_COOKIE, "../../etc"));

        assert!(existing_session(&store, &jar).is_none());
        let (session, jar) = session_or_new(&store, jar);
        assert_eq!(jar.get(SESSION_COOKIE).unwrap().value(), session.id().to_string());
    }
}
