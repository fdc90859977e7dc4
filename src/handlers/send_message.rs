// POST /send-message handler

use super::recover::StoreUnavailable;
use super::with_session_cookie;
use crate::models::SendMessageForm;
use crate::sessions::Session;
use crate::state::AppState;
use crate::views;

pub async fn send_message_handler(
    form: SendMessageForm,
    session: Session,
    state: AppState,
) -> Result<warp::reply::Response, warp::Rejection> {
    tracing::info!(session = %session.id, len = form.message.len(), "POST /send-message");
    tracing::debug!(session = %session.id, message = %form.message, "Message text");

    let exchange = state
        .chat
        .submit_message(session.id, &form.message)
        .await
        .map_err(StoreUnavailable::reject)?;

    // Bubbles are appended to #messages, the input is swapped out of band
    let fragment = views::exchange_fragment(&exchange.user, &exchange.assistant);
    Ok(with_session_cookie(warp::reply::html(fragment), &session))
}
