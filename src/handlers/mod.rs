// Handlers module

pub mod get_chat;
pub mod home;
pub mod recover;
pub mod send_message;

pub use get_chat::get_chat_handler;
pub use home::home_handler;
pub use recover::{handle_rejection, StoreUnavailable};
pub use send_message::send_message_handler;

use warp::http::header::{HeaderValue, SET_COOKIE};
use warp::Reply;

use crate::sessions::Session;

/// Pin a freshly minted session in the browser; known sessions get no cookie
fn with_session_cookie(reply: impl Reply, session: &Session) -> warp::reply::Response {
    let mut response = reply.into_response();
    if session.is_new {
        if let Ok(value) = HeaderValue::from_str(&session.cookie_header()) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}
