/// Per-epoch training report produced by `sgd`.
///
/// One value is recorded for every completed epoch; the same numbers are
/// printed to stdout as the run progresses.
#[derive(Debug, Clone)]
pub struct EpochStats {
    /// 0-based epoch index, matching the printed progress line.
    pub epoch: usize,
    /// Correctly classified test samples, if test data was supplied.
    pub correct: Option<usize>,
    /// Size of the test set, if test data was supplied.
    pub test_total: Option<usize>,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
