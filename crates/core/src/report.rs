//! Check-run reporting protocol.
//!
//! A report is one finalize call (status, conclusion, title, summary) followed
//! by one update per annotation batch. Batches are sent concurrently; the
//! first failing batch fails the whole report. The finalize call is never
//! retried or rolled back, so a failed report can leave a completed check
//! run with only part of its annotations.

use chrono::Utc;
use futures::future::try_join_all;
use tracing::{error, info};

use crate::annotation::Annotation;
use crate::check::{CheckRunClient, CheckRunId, CheckRunUpdate};
use crate::chunk::chunk;
use crate::conclusion::Conclusion;
use crate::error::{Error, Result};

/// Maximum number of annotations the check-run API accepts per call.
pub const MAX_ANNOTATIONS_PER_UPDATE: usize = 50;

/// Result of a successful report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOutcome {
    /// Conclusion that was recorded
    pub conclusion: Conclusion,
    /// Number of annotation batches sent
    pub batches: usize,
    /// Total number of annotations sent
    pub annotations_sent: usize,
}

impl ReportOutcome {
    /// Whether the caller must end the process in a failed state
    #[must_use]
    pub const fn failed(&self) -> bool {
        self.conclusion.is_failure()
    }
}

/// Sends the final state of a check run.
pub struct CheckRunReporter<'a, C: CheckRunClient + ?Sized> {
    client: &'a C,
    annotation_limit: usize,
}

impl<'a, C: CheckRunClient + ?Sized> CheckRunReporter<'a, C> {
    /// Create a reporter using the API's per-call annotation limit.
    #[must_use]
    pub const fn new(client: &'a C) -> Self {
        Self {
            client,
            annotation_limit: MAX_ANNOTATIONS_PER_UPDATE,
        }
    }

    /// Override the per-call annotation limit.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    #[must_use]
    pub fn with_annotation_limit(mut self, limit: usize) -> Self {
        assert!(limit > 0, "annotation limit must be positive");
        self.annotation_limit = limit;
        self
    }

    /// Finalize the check run, then deliver the annotations in batches.
    ///
    /// # Errors
    ///
    /// Returns the client error if the finalize call fails, or
    /// [`Error::Annotations`] if any annotation batch fails.
    pub async fn report(
        &self,
        check_id: CheckRunId,
        conclusion: Conclusion,
        title: &str,
        summary: &str,
        annotations: &[Annotation],
    ) -> Result<ReportOutcome> {
        info!(check_run_id = %check_id, "Updating check run");

        let batches = chunk(annotations, self.annotation_limit);
        info!(annotations = annotations.len(), "Annotations to be sent");

        let finalize = CheckRunUpdate::finalize(conclusion, title, summary, Utc::now());
        self.client.update_check_run(check_id, &finalize).await?;

        let sends = batches.iter().map(|batch| async move {
            let update = CheckRunUpdate::annotate(title, summary, batch);
            self.client.update_check_run(check_id, &update).await?;
            info!(count = batch.len(), "Annotations sent");
            Ok::<_, Error>(batch.len())
        });

        let sent = try_join_all(sends).await.map_err(|err| {
            error!(error = %err, "Failed to send annotations");
            Error::annotations(err.to_string())
        })?;

        Ok(ReportOutcome {
            conclusion,
            batches: sent.len(),
            annotations_sent: sent.iter().sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationLevel;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClient {
        updates: Mutex<Vec<CheckRunUpdate>>,
    }

    #[async_trait]
    impl CheckRunClient for RecordingClient {
        async fn create_check_run(&self, _name: &str, _head_sha: &str) -> Result<CheckRunId> {
            Ok(CheckRunId(1))
        }

        async fn update_check_run(&self, _id: CheckRunId, update: &CheckRunUpdate) -> Result<()> {
            self.updates.lock().unwrap().push(update.clone());
            Ok(())
        }
    }

    fn annotations(count: usize) -> Vec<Annotation> {
        (0..count)
            .map(|i| {
                Annotation::new(
                    "schema.graphql",
                    u32::try_from(i + 1).unwrap(),
                    AnnotationLevel::Notice,
                    format!("change {i}"),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_custom_limit_changes_batching() {
        let client = RecordingClient::default();
        let reporter = CheckRunReporter::new(&client).with_annotation_limit(2);

        let outcome = reporter
            .report(CheckRunId(7), Conclusion::Success, "t", "s", &annotations(5))
            .await
            .unwrap();

        assert_eq!(outcome.batches, 3);
        assert_eq!(outcome.annotations_sent, 5);
        assert!(!outcome.failed());
    }

    #[tokio::test]
    async fn test_failure_conclusion_signals_failed() {
        let client = RecordingClient::default();
        let outcome = CheckRunReporter::new(&client)
            .report(CheckRunId(7), Conclusion::Failure, "t", "s", &[])
            .await
            .unwrap();

        assert!(outcome.failed());
        assert_eq!(outcome.batches, 1);
        assert_eq!(outcome.annotations_sent, 0);
    }

    #[test]
    fn test_finalize_is_sent_before_annotations() {
        let client = RecordingClient::default();
        let reporter = CheckRunReporter::new(&client);

        tokio_test::block_on(reporter.report(
            CheckRunId(7),
            Conclusion::Neutral,
            "title",
            "summary",
            &annotations(3),
        ))
        .unwrap();

        let updates = client.updates.lock().unwrap();
        assert_eq!(updates.len(), 2);
        assert_eq!(updates[0].conclusion, Some(Conclusion::Neutral));
        assert!(updates[0].completed_at.is_some());
        assert_eq!(updates[0].annotation_count(), 0);
        assert_eq!(updates[1].conclusion, None);
        assert_eq!(updates[1].annotation_count(), 3);
    }
}
