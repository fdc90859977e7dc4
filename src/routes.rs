// Route definitions and handlers

use std::convert::Infallible;

use warp::Filter;

use crate::handlers;
use crate::models::SendMessageForm;
use crate::sessions::{Session, SESSION_COOKIE};
use crate::state::AppState;

pub fn configure_routes(
    state: AppState,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // GET /
    let home = warp::path::end()
        .and(warp::get())
        .and(with_session())
        .and(with_state(state.clone()))
        .and_then(handlers::home_handler);

    // GET /chat/{chatId}
    let get_chat = warp::path("chat")
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(warp::get())
        .and(with_session())
        .and(with_state(state.clone()))
        .and_then(handlers::get_chat_handler);

    // POST /send-message
    let send_message = warp::path("send-message")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::form::<SendMessageForm>())
        .and(with_session())
        .and(with_state(state))
        .and_then(handlers::send_message_handler);

    // Combine routes
    home.or(get_chat)
        .or(send_message)
        .recover(handlers::handle_rejection)
}

/// Resolve the caller's session from the `session_id` cookie
fn with_session() -> impl Filter<Extract = (Session,), Error = Infallible> + Clone {
    warp::cookie::optional::<String>(SESSION_COOKIE)
        .map(|value: Option<String>| Session::from_cookie(value.as_deref()))
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}
