use crate::error::GeneratorError;

/// How to treat a coordinate range whose `max` is below its `min`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Reject inverted bounds with [`GeneratorError::InvalidRange`]
    #[default]
    Strict,

    /// Swap inverted bounds before sampling
    Swap,
}

/// Validated, ordered coordinate bounds of the sampling hypercube
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub low: f64,
    pub high: f64,
}

/// Configuration for the cluster data generator
#[derive(Debug, Clone)]
pub struct ClusterDataConfig {
    /// Number of data rows (samples) to generate
    pub rows: usize,

    /// Dimension of every row
    pub cols: usize,

    /// Number of clusters. Row `i` belongs to cluster `i % clusters`.
    pub clusters: usize,

    /// Lower coordinate bound for cluster centers, applied to every dimension
    pub min: f64,

    /// Upper coordinate bound for cluster centers, applied to every dimension
    pub max: f64,

    /// Maximum distance of a sample from its cluster center in any single dimension.
    /// Zero places every sample exactly on its center.
    pub max_offset: f64,

    /// Random seed. The same seed and parameters always produce the same matrix.
    pub seed: u64,

    /// What to do when `max < min`
    pub range_policy: RangePolicy,

    /// Number of rows sampled per chunk. Chunks are filled in parallel, each from
    /// its own random stream, so the output depends on this value but not on the
    /// number of threads.
    pub chunk_size_rows: usize,

    /// Log a summary of each generation run
    pub verbose: bool,
}

impl Default for ClusterDataConfig {
    fn default() -> Self {
        Self {
            rows: 1_000,
            cols: 2,
            clusters: 8,
            min: 0.0,
            max: 1.0,
            max_offset: 0.1,
            seed: 0,
            range_policy: RangePolicy::Strict,
            chunk_size_rows: 51_200,
            verbose: false,
        }
    }
}

impl ClusterDataConfig {
    /// Create a new configuration with the given matrix shape and cluster count
    pub fn new(rows: usize, cols: usize, clusters: usize) -> Self {
        Self {
            rows,
            cols,
            clusters,
            ..Default::default()
        }
    }

    /// Set the coordinate bounds of the cluster centers
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Set the maximum per-dimension offset from a cluster center
    pub fn with_max_offset(mut self, max_offset: f64) -> Self {
        self.max_offset = max_offset;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the policy for inverted bounds
    pub fn with_range_policy(mut self, range_policy: RangePolicy) -> Self {
        self.range_policy = range_policy;
        self
    }

    /// Set the row chunk size
    pub fn with_chunk_size_rows(mut self, chunk_size: usize) -> Self {
        self.chunk_size_rows = chunk_size;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Check every parameter and return the ordered center bounds.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidDimensions`] if `rows`, `cols` or `clusters` is zero,
    ///   or the data or centers matrix cannot be allocated
    /// - [`GeneratorError::InvalidRange`] if the bounds are not finite, the span
    ///   overflows, `max < min` under [`RangePolicy::Strict`], `max_offset` is
    ///   negative or not finite, or a sample could fall outside the finite range
    /// - [`GeneratorError::InvalidConfig`] if `chunk_size_rows` is zero
    pub fn validate(&self) -> Result<Bounds, GeneratorError> {
        if self.rows == 0 || self.cols == 0 || self.clusters == 0 {
            return Err(GeneratorError::InvalidDimensions(format!(
                "rows ({}), cols ({}) and clusters ({}) must all be greater than 0",
                self.rows, self.cols, self.clusters
            )));
        }

        check_allocation("data", self.rows, self.cols)?;
        check_allocation("centers", self.clusters, self.cols)?;

        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(GeneratorError::InvalidRange(format!(
                "bounds must be finite, got min = {}, max = {}",
                self.min, self.max
            )));
        }

        let (low, high) = if self.max >= self.min {
            (self.min, self.max)
        } else {
            match self.range_policy {
                RangePolicy::Strict => {
                    return Err(GeneratorError::InvalidRange(format!(
                        "max ({}) is less than min ({})",
                        self.max, self.min
                    )));
                }
                RangePolicy::Swap => (self.max, self.min),
            }
        };

        if !(high - low).is_finite() {
            return Err(GeneratorError::InvalidRange(format!(
                "span between {} and {} is not representable",
                low, high
            )));
        }

        // Offsets span 2 * max_offset, which must stay finite
        if self.max_offset.is_nan() || self.max_offset < 0.0 || !(2.0 * self.max_offset).is_finite()
        {
            return Err(GeneratorError::InvalidRange(format!(
                "max_offset must be finite and non-negative, got {}",
                self.max_offset
            )));
        }

        // Samples reach max_offset beyond either bound
        if !(high + self.max_offset).is_finite() || !(low - self.max_offset).is_finite() {
            return Err(GeneratorError::InvalidRange(format!(
                "samples around [{}, {}] with max_offset {} are not representable",
                low, high, self.max_offset
            )));
        }

        if self.chunk_size_rows == 0 {
            return Err(GeneratorError::InvalidConfig(
                "chunk_size_rows must be greater than 0".to_string(),
            ));
        }

        Ok(Bounds { low, high })
    }
}

/// Reject an `n x m` f64 matrix whose size in bytes exceeds `isize::MAX`
fn check_allocation(name: &str, n: usize, m: usize) -> Result<(), GeneratorError> {
    let fits = n
        .checked_mul(m)
        .and_then(|len| len.checked_mul(std::mem::size_of::<f64>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);

    if !fits {
        return Err(GeneratorError::InvalidDimensions(format!(
            "{} x {} {} matrix is too large",
            n, m, name
        )));
    }
    Ok(())
}
