// GET /chat/{chatId} handler

use percent_encoding::percent_decode_str;

use super::recover::StoreUnavailable;
use super::with_session_cookie;
use crate::sessions::Session;
use crate::state::AppState;
use crate::views;

pub async fn get_chat_handler(
    raw_chat_id: String,
    session: Session,
    state: AppState,
) -> Result<warp::reply::Response, warp::Rejection> {
    // warp hands over the segment still percent-encoded
    let chat_id = percent_decode_str(&raw_chat_id)
        .decode_utf8_lossy()
        .into_owned();
    tracing::info!(session = %session.id, "GET /chat/{}", chat_id);

    let turns = state
        .chat
        .select_conversation(session.id, &chat_id)
        .await
        .map_err(StoreUnavailable::reject)?;

    let panel = views::chat_panel(&turns).to_string();
    Ok(with_session_cookie(warp::reply::html(panel), &session))
}
