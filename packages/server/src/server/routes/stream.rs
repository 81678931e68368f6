//! SSE streaming endpoint.
//!
//! GET /streams/:topic
//!
//! Subscribes to the StreamHub by topic string and forwards JSON values as
//! SSE events. Only notification topics are served, and only the calling
//! user's own; the identity comes from the gateway headers like everywhere
//! else.

use std::convert::Infallible;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, StreamExt};
use tokio_stream::wrappers::BroadcastStream;

use crate::common::AuthUser;
use crate::server::app::AxumAppState;

/// SSE stream handler.
///
/// Valid topics: `notifications:{user_id}` and
/// `notifications:{user_id}:unread`, where `{user_id}` must be the caller.
pub async fn stream_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    Path(topic): Path<String>,
) -> Result<Sse<impl futures::Stream<Item = Result<Event, Infallible>>>, StatusCode> {
    let Some(Extension(user)) = auth_user else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    authorize_topic(&topic, &user).ok_or(StatusCode::FORBIDDEN)?;

    let rx = state.server_deps.stream_hub.subscribe(&topic).await;

    let connected =
        stream::once(async { Ok::<_, Infallible>(Event::default().event("connected").data("ok")) });

    let events = BroadcastStream::new(rx).filter_map(|result| async {
        match result {
            Ok(value) => {
                let event_name = value
                    .get("type")
                    .and_then(|t| t.as_str())
                    .unwrap_or("message")
                    .to_string();
                Event::default()
                    .event(event_name)
                    .json_data(&value)
                    .ok()
                    .map(Ok)
            }
            // Lagged receiver: drop the gap, keep streaming.
            Err(_) => None,
        }
    });

    Ok(Sse::new(connected.chain(events)).keep_alive(KeepAlive::default()))
}

fn authorize_topic(topic: &str, user: &AuthUser) -> Option<()> {
    let rest = topic.strip_prefix("notifications:")?;
    let owner = rest.strip_suffix(":unread").unwrap_or(rest);
    (owner == user.user_id.to_string()).then_some(())
}
