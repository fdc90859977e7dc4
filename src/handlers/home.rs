// GET / handler

use super::recover::StoreUnavailable;
use super::with_session_cookie;
use crate::sessions::Session;
use crate::state::AppState;
use crate::views;

pub async fn home_handler(
    session: Session,
    state: AppState,
) -> Result<warp::reply::Response, warp::Rejection> {
    tracing::info!(session = %session.id, "GET /");

    let ids = state
        .chat
        .store()
        .list_ids()
        .await
        .map_err(StoreUnavailable::reject)?;

    let page = views::document(views::home(&ids));
    Ok(with_session_cookie(warp::reply::html(page), &session))
}
