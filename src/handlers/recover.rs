// Rejection recovery

use warp::http::StatusCode;
use warp::Rejection;

use crate::html::{div, p};
use crate::store::StoreError;

/// A store backend failed while serving a request
#[derive(Debug)]
pub struct StoreUnavailable(pub String);

impl warp::reject::Reject for StoreUnavailable {}

impl StoreUnavailable {
    pub fn reject(err: StoreError) -> Rejection {
        warp::reject::custom(StoreUnavailable(err.to_string()))
    }
}

/// Turn store failures into a 500 fragment; everything else keeps warp's
/// default status.
pub async fn handle_rejection(err: Rejection) -> Result<Box<dyn warp::Reply>, Rejection> {
    if let Some(StoreUnavailable(message)) = err.find::<StoreUnavailable>() {
        tracing::error!(error = %message, "Conversation store failed");
        let body = div()
            .class("alert alert-error")
            .child(p().text("Something went wrong, please try again."))
            .to_string();
        return Ok(Box::new(warp::reply::with_status(
            warp::reply::html(body),
            StatusCode::INTERNAL_SERVER_ERROR,
        )));
    }

    Err(err)
}
