//! # Calendar Endpoint

use chrono::{DateTime, Utc};
use lib_utils::format_time;
use shared::CalendarEvent;

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

/// Events between `from` and `to`, sent as RFC 3339 timestamps.
#[tracing::instrument(skip(client))]
pub async fn get_calendar(
    client: &ApiClient,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Outcome<Vec<CalendarEvent>> {
    let (from, to) = (format_time(from), format_time(to));
    let endpoint = Endpoint::Calendar { from: &from, to: &to };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().calendar_events.clone()).await
}
