use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::domain::extract::ListingExtractor;
use crate::domain::record::ListingRecord;
use crate::error::{PdpError, Result};
use crate::ports::sink::RecordSink;
use crate::ports::source::DocumentSource;

/// Counts from one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub total: usize,
    pub written: usize,
    pub presentation_missing: usize,
    pub fetch_failed: usize,
    /// Records the sink rejected, plus one if the final flush failed.
    pub sink_failed: usize,
    pub worker_failed: usize,
}

enum Outcome {
    Record(ListingRecord),
    PresentationMissing,
    FetchFailed(PdpError),
}

/// Extract every listing the source offers and write the records to `sink`.
///
/// Listings are processed by up to `concurrency` workers; records reach the
/// sink in completion order through this task only. A failing listing is
/// counted and skipped, never aborting the rest.
pub async fn run_batch(
    source: Arc<dyn DocumentSource>,
    sink: &mut dyn RecordSink,
    extractor: ListingExtractor,
    concurrency: usize,
) -> Result<BatchReport> {
    let ids = source.listing_ids().await?;
    let total = ids.len();
    let mut report = BatchReport {
        total,
        ..BatchReport::default()
    };
    info!(total, concurrency, "Starting batch");

    let semaphore = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut workers = JoinSet::new();

    for (index, listing_id) in ids.into_iter().enumerate() {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        info!(listing_id = listing_id.as_str(), "Starting listing ({}/{total})", index + 1);

        let source = Arc::clone(&source);
        let extractor = extractor.clone();
        workers.spawn(async move {
            let _permit = permit;
            let outcome = process_listing(source.as_ref(), &extractor, &listing_id).await;
            (listing_id, outcome)
        });

        while let Some(joined) = workers.try_join_next() {
            record_outcome(joined, sink, &mut report).await;
        }
    }

    while let Some(joined) = workers.join_next().await {
        record_outcome(joined, sink, &mut report).await;
    }
    if let Err(e) = sink.flush().await {
        report.sink_failed += 1;
        error!(error = %e, "Failed to flush sink");
    }

    info!(
        total = report.total,
        written = report.written,
        presentation_missing = report.presentation_missing,
        fetch_failed = report.fetch_failed,
        sink_failed = report.sink_failed,
        worker_failed = report.worker_failed,
        "Batch complete"
    );
    Ok(report)
}

async fn process_listing(
    source: &dyn DocumentSource,
    extractor: &ListingExtractor,
    listing_id: &str,
) -> Outcome {
    let document = match source.fetch(listing_id).await {
        Ok(document) => document,
        Err(e) => return Outcome::FetchFailed(e),
    };
    match extractor.parse_listing(&document, listing_id) {
        Ok(record) => Outcome::Record(record),
        Err(_) => Outcome::PresentationMissing,
    }
}

async fn record_outcome(
    joined: std::result::Result<(String, Outcome), tokio::task::JoinError>,
    sink: &mut dyn RecordSink,
    report: &mut BatchReport,
) {
    match joined {
        Ok((listing_id, Outcome::Record(record))) => match sink.write(&record).await {
            Ok(()) => {
                report.written += 1;
                info!(listing_id = listing_id.as_str(), "Record written");
            }
            Err(e) => {
                report.sink_failed += 1;
                error!(listing_id = listing_id.as_str(), error = %e, "Failed to write record");
            }
        },
        Ok((listing_id, Outcome::PresentationMissing)) => {
            report.presentation_missing += 1;
            warn!(listing_id = listing_id.as_str(), "No record produced");
        }
        Ok((listing_id, Outcome::FetchFailed(e))) => {
            report.fetch_failed += 1;
            error!(listing_id = listing_id.as_str(), error = %e, "Failed to load listing document");
        }
        Err(e) => {
            report.worker_failed += 1;
            error!(error = %e, "Listing worker failed");
        }
    }
}
