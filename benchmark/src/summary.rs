use std::fmt;

/// The measurements for one start and goal pair that has a Route.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    pub bfs_micros: u128,
    pub a_star_micros: u128,
    pub bfs_expanded: usize,
    pub a_star_expanded: usize,
    /// `(micros, expanded)`, if IDA* was measured
    pub ida_star: Option<(u128, usize)>,
}

/// Averages over all [`Sample`]s of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub tests: usize,
    pub mean_bfs_micros: f64,
    pub mean_a_star_micros: f64,
    /// how often A* took less time than BFS on the same pair
    pub a_star_faster: usize,
    pub mean_bfs_expanded: f64,
    pub mean_a_star_expanded: f64,
    pub mean_ida_star_micros: Option<f64>,
    pub mean_ida_star_expanded: Option<f64>,
}

impl Summary {
    /// Returns `None` if there are no samples to average.
    pub fn new(samples: &[Sample]) -> Option<Summary> {
        if samples.is_empty() {
            return None;
        }
        let mean = |value: fn(&Sample) -> f64| {
            samples.iter().map(value).sum::<f64>() / samples.len() as f64
        };

        let ida_star: Vec<(u128, usize)> = samples.iter().filter_map(|s| s.ida_star).collect();
        let (mean_ida_star_micros, mean_ida_star_expanded) = if ida_star.is_empty() {
            (None, None)
        } else {
            let count = ida_star.len() as f64;
            let micros = ida_star.iter().map(|&(t, _)| t as f64).sum::<f64>() / count;
            let expanded = ida_star.iter().map(|&(_, e)| e as f64).sum::<f64>() / count;
            (Some(micros), Some(expanded))
        };

        Some(Summary {
            tests: samples.len(),
            mean_bfs_micros: mean(|s| s.bfs_micros as f64),
            mean_a_star_micros: mean(|s| s.a_star_micros as f64),
            a_star_faster: samples
                .iter()
                .filter(|s| s.a_star_micros < s.bfs_micros)
                .count(),
            mean_bfs_expanded: mean(|s| s.bfs_expanded as f64),
            mean_a_star_expanded: mean(|s| s.a_star_expanded as f64),
            mean_ida_star_micros,
            mean_ida_star_expanded,
        })
    }

    /// A* time as a percentage of BFS time
    pub fn a_star_ratio(&self) -> f64 {
        self.mean_a_star_micros / self.mean_bfs_micros * 100.0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "# tests: {} | BFS: {:.3}µs | A*: {:.3}µs | A* takes {:.2}% of BFS time",
            self.tests,
            self.mean_bfs_micros,
            self.mean_a_star_micros,
            self.a_star_ratio()
        )?;
        writeln!(f, "A* faster: {}", self.a_star_faster)?;
        write!(
            f,
            "expanded points | BFS: {:.1} | A*: {:.1}",
            self.mean_bfs_expanded, self.mean_a_star_expanded
        )?;
        if let (Some(micros), Some(expanded)) =
            (self.mean_ida_star_micros, self.mean_ida_star_expanded)
        {
            write!(f, "\nIDA*: {:.3}µs | expanded points: {:.1}", micros, expanded)?;
        }
        Ok(())
    }
}
