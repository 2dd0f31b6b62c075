//! Parallel feature extraction for batches.
//!
//! Workers pull URL indices from a shared queue and send `(index, features)`
//! back over a channel; results are placed by index, so output order is the
//! input order regardless of which worker finishes first.

use std::collections::VecDeque;
use std::sync::{mpsc, Mutex};

use crate::features::{self, FeatureVector, PathTokenMetric};

/// Below this many URLs a batch is extracted on the calling thread.
const MIN_PARALLEL_BATCH: usize = 64;

/// Worker count when none is configured: the machine's available parallelism.
pub fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Extracts features for every URL, in input order.
pub fn extract_all<S>(urls: &[S], metric: PathTokenMetric, workers: usize) -> Vec<FeatureVector>
where
    S: AsRef<str> + Sync,
{
    let workers = workers.max(1).min(urls.len());
    if workers <= 1 || urls.len() < MIN_PARALLEL_BATCH {
        return urls
            .iter()
            .map(|u| features::extract(u.as_ref(), metric))
            .collect();
    }

    let work: Mutex<VecDeque<usize>> = Mutex::new((0..urls.len()).collect());
    let (tx, rx) = mpsc::channel::<(usize, FeatureVector)>();
    let mut results: Vec<Option<FeatureVector>> = vec![None; urls.len()];

    std::thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let work = &work;
            scope.spawn(move || loop {
                let Some(index) = work.lock().ok().and_then(|mut q| q.pop_front()) else {
                    break;
                };
                let features = features::extract(urls[index].as_ref(), metric);
                if tx.send((index, features)).is_err() {
                    break;
                }
            });
        }
        drop(tx);

        for (index, features) in rx {
            results[index] = Some(features);
        }
    });

    // A slot is only empty if its worker stopped early; fill it here.
    results
        .into_iter()
        .enumerate()
        .map(|(i, f)| f.unwrap_or_else(|| features::extract(urls[i].as_ref(), metric)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("http://host{i}.example.com/{}", "p/".repeat(i % 7)))
            .collect()
    }

    #[test]
    fn parallel_matches_sequential_order() {
        let urls = urls(500);
        let sequential = extract_all(&urls, PathTokenMetric::SegmentRatio, 1);
        let parallel = extract_all(&urls, PathTokenMetric::SegmentRatio, 8);
        assert_eq!(sequential.len(), 500);
        assert_eq!(sequential, parallel);
        for (url, f) in urls.iter().zip(&parallel) {
            assert_eq!(f.get("urlLen"), Some(url.chars().count() as f64));
        }
    }

    #[test]
    fn empty_batch() {
        let none: Vec<&str> = Vec::new();
        assert!(extract_all(&none, PathTokenMetric::SegmentRatio, 4).is_empty());
    }

    #[test]
    fn zero_workers_runs_inline() {
        let urls = urls(3);
        assert_eq!(extract_all(&urls, PathTokenMetric::MeanLength, 0).len(), 3);
    }

    #[test]
    fn default_workers_is_positive() {
        assert!(default_workers() >= 1);
    }
}
