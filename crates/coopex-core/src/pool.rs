//! Worker pool: runs text and field extraction for every candidate.
//!
//! Candidates flow through a bounded queue to a fixed number of worker
//! tasks. Each worker publishes its records on an unbounded channel. The
//! channel is drained only after every worker has been joined, so the
//! collector never sees a partial result set.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::applicant::ApplicantParser;
use crate::dispatch::FilenamePattern;
use crate::error::{CoopexError, Result};
use crate::models::config::PoolConfig;
use crate::models::record::{Candidate, Record};
use crate::text::TextExtractor;

/// Called once for every record a worker publishes.
pub type ProgressHook = Arc<dyn Fn(&Record) + Send + Sync>;

type WorkQueue = Arc<Mutex<mpsc::Receiver<Candidate>>>;

/// Fixed-size pool of extraction workers.
pub struct WorkerPool<E> {
    extractor: Arc<E>,
    parser: ApplicantParser,
    pattern: Arc<FilenamePattern>,
    workers: usize,
    queue_capacity: usize,
    progress: Option<ProgressHook>,
}

impl<E: TextExtractor + 'static> WorkerPool<E> {
    /// Create a pool with the default sizing.
    pub fn new(extractor: E, parser: ApplicantParser, pattern: FilenamePattern) -> Self {
        let defaults = PoolConfig::default();
        Self {
            extractor: Arc::new(extractor),
            parser,
            pattern: Arc::new(pattern),
            workers: defaults.workers,
            queue_capacity: defaults.queue_capacity,
            progress: None,
        }
    }

    /// Apply sizing from configuration.
    pub fn with_config(mut self, config: &PoolConfig) -> Self {
        self.workers = config.workers;
        self.queue_capacity = config.queue_capacity;
        self
    }

    /// Set the number of workers.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Register a hook invoked as each record is published.
    pub fn with_progress(mut self, hook: ProgressHook) -> Self {
        self.progress = Some(hook);
        self
    }

    /// Process every candidate and return the records in arrival order.
    ///
    /// The first text extraction failure cancels the remaining workers and is
    /// returned; no records are returned in that case.
    pub async fn run(&self, candidates: Vec<Candidate>) -> Result<Vec<Record>> {
        if self.workers == 0 {
            return Err(CoopexError::Config(
                "worker pool needs at least one worker".to_string(),
            ));
        }

        let start = Instant::now();
        let total = candidates.len();
        info!("Processing {} candidates with {} workers", total, self.workers);

        let (work_tx, work_rx) = mpsc::channel(self.queue_capacity.max(1));
        let work_rx: WorkQueue = Arc::new(Mutex::new(work_rx));
        let (result_tx, mut result_rx) = mpsc::unbounded_channel();

        let mut tasks = JoinSet::new();

        for worker in 0..self.workers {
            tasks.spawn(Self::worker(
                worker,
                Arc::clone(&work_rx),
                result_tx.clone(),
                Arc::clone(&self.extractor),
                self.parser.clone(),
                Arc::clone(&self.pattern),
                self.progress.clone(),
            ));
        }
        drop(result_tx);

        // The feeder blocks on a full queue; it ends early if every worker
        // has gone away.
        let feeder = tokio::spawn(async move {
            for candidate in candidates {
                if work_tx.send(candidate).await.is_err() {
                    break;
                }
            }
        });

        while let Some(joined) = tasks.join_next().await {
            let outcome = match joined {
                Ok(outcome) => outcome,
                Err(e) => Err(CoopexError::Worker(e.to_string())),
            };

            if let Err(e) = outcome {
                tasks.abort_all();
                feeder.abort();
                return Err(e);
            }
        }

        // Every worker has returned, so the feeder is done too.
        feeder
            .await
            .map_err(|e| CoopexError::Worker(format!("feeder: {}", e)))?;

        let mut records = Vec::with_capacity(total);
        while let Ok(record) = result_rx.try_recv() {
            records.push(record);
        }

        info!(
            "Extracted {} records from {} candidates in {:?}",
            records.len(),
            total,
            start.elapsed()
        );

        Ok(records)
    }

    async fn worker(
        worker: usize,
        queue: WorkQueue,
        results: mpsc::UnboundedSender<Record>,
        extractor: Arc<E>,
        parser: ApplicantParser,
        pattern: Arc<FilenamePattern>,
        progress: Option<ProgressHook>,
    ) -> Result<()> {
        debug!("Worker {} started", worker);
        let mut processed = 0usize;

        loop {
            let next = queue.lock().await.recv().await;
            let Some(candidate) = next else {
                break;
            };

            let Some(identity) = pattern.parse(&candidate.file_name) else {
                debug!(
                    "Worker {} dropping {}: name no longer matches",
                    worker, candidate.file_name
                );
                continue;
            };

            let file_start = Instant::now();
            let text = extractor
                .extract(&candidate.path)
                .await
                .map_err(|source| CoopexError::TextExtraction {
                    path: candidate.path.clone(),
                    source,
                })?;

            let result = parser.parse(&identity, &text);
            debug!(
                "Worker {} processed {} in {}ms",
                worker,
                candidate.file_name,
                file_start.elapsed().as_millis()
            );

            if let Some(hook) = &progress {
                hook(&result.record);
            }

            // The receiver outlives every worker.
            let _ = results.send(result.record);
            processed += 1;
        }

        debug!("Worker {} finished after {} documents", worker, processed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::applicant::rules::patterns::DEFAULT_FILE_PATTERN;
    use crate::error::TextExtractionError;
    use pretty_assertions::assert_eq;

    /// Serves canned text per path; unknown paths fail like a broken file.
    struct StubExtractor {
        texts: HashMap<PathBuf, String>,
        calls: AtomicUsize,
    }

    impl StubExtractor {
        fn new(texts: &[(&str, &str)]) -> Self {
            Self {
                texts: texts
                    .iter()
                    .map(|(name, text)| (PathBuf::from(name), text.to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextExtractor for StubExtractor {
        async fn extract(&self, path: &Path) -> crate::text::Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            self.texts
                .get(path)
                .cloned()
                .ok_or_else(|| TextExtractionError::Launch {
                    program: "stub".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::InvalidData, "corrupt"),
                })
        }
    }

    fn pattern() -> FilenamePattern {
        FilenamePattern::new(DEFAULT_FILE_PATTERN).unwrap()
    }

    fn candidate(name: &str) -> Candidate {
        Candidate {
            path: PathBuf::from(name),
            file_name: name.to_string(),
            identity: pattern().parse(name).unwrap(),
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_every_candidate_yields_one_record() {
        let names: Vec<String> = (1..=25).map(|i| format!("Jane Doe ({}).pdf", i)).collect();
        let texts: Vec<(&str, &str)> = names
            .iter()
            .map(|n| (n.as_str(), "Term Average: 80"))
            .collect();

        let pool = WorkerPool::new(StubExtractor::new(&texts), ApplicantParser::default(), pattern())
            .with_config(&PoolConfig {
                workers: 4,
                queue_capacity: 2,
            });

        let candidates = names.iter().map(|n| candidate(n)).collect();
        let records = pool.run(candidates).await.unwrap();

        assert_eq!(records.len(), 25);
        let mut ids: Vec<u32> = records.iter().map(|r| r.id.parse().unwrap()).collect();
        ids.sort();
        assert_eq!(ids, (1..=25).collect::<Vec<u32>>());
        assert_eq!(pool.extractor.calls.load(Ordering::SeqCst), 25);
    }

    #[tokio::test]
    async fn test_more_workers_than_candidates() {
        let pool = WorkerPool::new(
            StubExtractor::new(&[("Alan Smith (3).pdf", "")]),
            ApplicantParser::default(),
            pattern(),
        )
        .with_workers(8);

        let records = pool.run(vec![candidate("Alan Smith (3).pdf")]).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].overall_average, None);
    }

    #[tokio::test]
    async fn test_no_candidates() {
        let pool = WorkerPool::new(StubExtractor::new(&[]), ApplicantParser::default(), pattern());
        assert!(pool.run(Vec::new()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_run() {
        let pool = WorkerPool::new(
            StubExtractor::new(&[("Jane Doe (12).pdf", "ok")]),
            ApplicantParser::default(),
            pattern(),
        )
        .with_workers(2);

        let candidates = vec![candidate("Jane Doe (12).pdf"), candidate("Alan Smith (3).pdf")];
        let err = pool.run(candidates).await.unwrap_err();

        match err {
            CoopexError::TextExtraction { path, .. } => {
                assert_eq!(path, PathBuf::from("Alan Smith (3).pdf"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_candidate_failing_recheck_is_dropped() {
        let pool = WorkerPool::new(
            StubExtractor::new(&[("Jane Doe (12).pdf", "")]),
            ApplicantParser::default(),
            pattern(),
        );

        let mut stale = candidate("Jane Doe (12).pdf");
        stale.file_name = "renamed.pdf".to_string();

        let records = pool.run(vec![stale, candidate("Jane Doe (12).pdf")]).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(pool.extractor.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_progress_hook_called_per_record() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);

        let pool = WorkerPool::new(
            StubExtractor::new(&[("Jane Doe (12).pdf", ""), ("Alan Smith (3).pdf", "")]),
            ApplicantParser::default(),
            pattern(),
        )
        .with_progress(Arc::new(move |_: &Record| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        pool.run(vec![candidate("Jane Doe (12).pdf"), candidate("Alan Smith (3).pdf")])
            .await
            .unwrap();
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_zero_workers_rejected() {
        let pool = WorkerPool::new(StubExtractor::new(&[]), ApplicantParser::default(), pattern())
            .with_workers(0);
        assert!(matches!(
            pool.run(Vec::new()).await,
            Err(CoopexError::Config(_))
        ));
    }
}
