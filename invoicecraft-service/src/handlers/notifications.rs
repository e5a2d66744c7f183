//! Server-sent event feed of transient notifications.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::Stream;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::BroadcastStream;

use crate::startup::AppState;

pub async fn notification_stream(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = BroadcastStream::new(state.notifier.subscribe())
        // Lagged subscribers lose events rather than stalling the publisher.
        .filter_map(|notification| notification.ok())
        .map(|notification| {
            let payload = serde_json::to_string(&notification).unwrap_or_default();
            Ok(Event::default()
                .event(notification.level.as_str())
                .data(payload))
        });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
