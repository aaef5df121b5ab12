/// Options for a benchmark run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchConfig {
	/// How many random start and goal pairs are drawn (defaults to `5000`).
	///
	/// Pairs without a Route are skipped, so the number of measured cases is usually lower.
	pub iterations: usize,
	/// The seed for drawing the pairs. `None` (default) picks a random seed, which is logged.
	pub seed: Option<u64>,
	/// `true`: also measure IDA* on every pair.
	///
	/// `false` (default): only BFS and A* are measured. IDA* gets very slow on larger Networks.
	pub ida_star: bool,
	/// `true`: measure the pairs on the rayon thread pool.
	///
	/// `false` (default): measure one pair after the other. The individual timings are less
	/// noisy this way.
	pub parallel: bool,
}

impl BenchConfig {
	/// a smaller run for a quick impression
	pub const QUICK: BenchConfig = BenchConfig {
		iterations: 500,
		seed: Some(0),
		ida_star: false,
		parallel: true,
	};
}

impl Default for BenchConfig {
	fn default() -> BenchConfig {
		BenchConfig {
			iterations: 5000,
			seed: None,
			ida_star: false,
			parallel: false,
		}
	}
}
