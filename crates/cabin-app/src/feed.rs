//! Reading already-fetched feeds from disk and projecting them.

use std::collections::HashSet;
use std::path::Path;

use cabin_core::config::FeedConfig;
use cabin_core::types::{ReservationRecord, ReservationSource};
use cabin_ical::{GuestNameRules, Projection, project_with_report};
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// ## Summary
/// Reads a feed file as UTF-8 text.
///
/// ## Errors
/// Returns `AppError::ReadFeed` if the file cannot be read or is not UTF-8.
pub fn read_feed(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|source| AppError::ReadFeed {
        path: path.to_path_buf(),
        source,
    })
}

/// ## Summary
/// Reads one feed file and projects it into reservations tagged with `source`.
///
/// ## Errors
/// Returns an error only if the file cannot be read.
#[tracing::instrument(skip(rules))]
pub fn project_file(
    path: &Path,
    source: ReservationSource,
    rules: &GuestNameRules,
) -> AppResult<Projection> {
    let text = read_feed(path)?;
    let projection = project_with_report(&text, source, rules);

    tracing::info!(
        records = projection.records.len(),
        dropped = projection.dropped,
        "Feed projected"
    );

    Ok(projection)
}

/// ## Summary
/// Projects every configured feed, concatenating the records in feed order.
///
/// Ids that repeat across feeds are logged and kept; deduplication belongs
/// to whatever persists the records.
///
/// ## Errors
/// Returns `AppError::NoFeeds` if `feeds` is empty, or the first read error.
pub fn sync_feeds(feeds: &[FeedConfig], rules: &GuestNameRules) -> AppResult<Projection> {
    if feeds.is_empty() {
        return Err(AppError::NoFeeds);
    }

    let mut combined = Projection::default();
    let mut seen = HashSet::new();

    for feed in feeds {
        let projection = project_file(&feed.path, feed.source, rules)?;

        for record in &projection.records {
            if !seen.insert(record.id.clone()) {
                tracing::warn!(id = %record.id, source = %feed.source, "Reservation id repeated across feeds");
            }
        }

        combined.records.extend(projection.records);
        combined.dropped += projection.dropped;
    }

    tracing::info!(
        feeds = feeds.len(),
        records = combined.records.len(),
        dropped = combined.dropped,
        "Sync complete"
    );

    Ok(combined)
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    records: &'a [ReservationRecord],
    dropped: usize,
    nights: i64,
}

/// ## Summary
/// Renders records as a pretty JSON array, or with `report` as an object that
/// also carries the drop count and the total number of nights.
///
/// ## Errors
/// Returns an error if serialization fails.
pub fn render(projection: &Projection, report: bool) -> AppResult<String> {
    if !report {
        return Ok(serde_json::to_string_pretty(&projection.records)?);
    }

    let nights = projection
        .records
        .iter()
        .filter_map(ReservationRecord::nights)
        .sum();

    Ok(serde_json::to_string_pretty(&Report {
        records: &projection.records,
        dropped: projection.dropped,
        nights,
    })?)
}
