use crate::config::ClusterDataConfig;
use crate::error::GeneratorError;
use crate::sampling::{
    cluster_index, cluster_size, round_robin_labels, sample_hypercube, scatter_rows, seeded_rng,
};
use ndarray::{Array1, Array2, Axis};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Output of a generation run.
///
/// `data` has shape `(rows, cols)` in standard (row-major) layout. Row `i` was
/// scattered around `centers.row(i % clusters)` and `labels[i] == i % clusters`.
#[derive(Debug, Clone)]
pub struct ClusteredData {
    /// Generated samples, shape `(rows, cols)`
    pub data: Array2<f64>,

    /// Cluster centers, shape `(clusters, cols)`
    pub centers: Array2<f64>,

    /// Cluster of each row, shape `(rows,)`
    pub labels: Array1<usize>,
}

impl ClusteredData {
    /// Number of generated samples
    pub fn n_rows(&self) -> usize {
        self.data.nrows()
    }

    /// Dimension of each sample
    pub fn n_cols(&self) -> usize {
        self.data.ncols()
    }

    /// Number of clusters, including empty ones
    pub fn n_clusters(&self) -> usize {
        self.centers.nrows()
    }

    /// Number of rows in each cluster, indexed by cluster
    pub fn cluster_sizes(&self) -> Vec<usize> {
        (0..self.n_clusters())
            .map(|c| cluster_size(self.n_rows(), self.n_clusters(), c))
            .collect()
    }

    /// Copy of the rows belonging to `cluster`, in row order.
    ///
    /// Empty when `cluster` has no members or does not exist.
    pub fn cluster_rows(&self, cluster: usize) -> Array2<f64> {
        let indices: Vec<usize> = if cluster < self.n_clusters() {
            (cluster..self.n_rows()).step_by(self.n_clusters()).collect()
        } else {
            Vec::new()
        };
        self.data.select(Axis(0), &indices)
    }

    /// Drop centers and labels, keeping only the sample matrix
    pub fn into_data(self) -> Array2<f64> {
        self.data
    }
}

/// Generator of clustered synthetic data.
///
/// Cluster centers are drawn uniformly from the hypercube `[min, max]^cols`.
/// Rows are assigned to clusters round-robin by index and each row is its
/// center plus an offset drawn uniformly from `[-max_offset, max_offset]^cols`,
/// so clusters are hypercubes rather than spheres.
///
/// Every call owns its random generators, so a generator can be shared across
/// threads and calls never influence each other.
///
/// # Example
///
/// ```
/// use clustergen_rs::{ClusterDataConfig, ClusterDataGenerator};
///
/// let config = ClusterDataConfig::new(300, 2, 3)
///     .with_range(-10.0, 10.0)
///     .with_max_offset(0.5)
///     .with_seed(42);
///
/// let generated = ClusterDataGenerator::with_config(config).generate().unwrap();
/// assert_eq!(generated.data.dim(), (300, 2));
/// assert_eq!(generated.cluster_sizes(), vec![100, 100, 100]);
/// ```
pub struct ClusterDataGenerator {
    config: ClusterDataConfig,
}

impl ClusterDataGenerator {
    /// Create a generator with default bounds, offset and seed.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of samples to generate
    /// * `cols` - Dimension of each sample
    /// * `clusters` - Number of clusters
    ///
    /// # Panics
    ///
    /// Panics if `clusters` is 0.
    pub fn new(rows: usize, cols: usize, clusters: usize) -> Self {
        assert!(clusters > 0, "clusters must be greater than 0");

        Self {
            config: ClusterDataConfig::new(rows, cols, clusters),
        }
    }

    /// Create a generator with a custom configuration.
    ///
    /// The configuration is validated by [`generate`](Self::generate).
    pub fn with_config(config: ClusterDataConfig) -> Self {
        Self { config }
    }

    /// Generate the dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails
    /// [`ClusterDataConfig::validate`]. No partial output is produced.
    pub fn generate(&self) -> Result<ClusteredData, GeneratorError> {
        let config = &self.config;
        let bounds = config.validate()?;
        let (rows, cols, clusters) = (config.rows, config.cols, config.clusters);
        let start = Instant::now();

        if config.verbose {
            info!(
                rows,
                cols,
                clusters,
                min = bounds.low,
                max = bounds.high,
                max_offset = config.max_offset,
                seed = config.seed,
                "Generating clustered data"
            );
        }

        // Stream 0 is reserved for the centers, chunk k uses stream k + 1
        let mut rng = seeded_rng(config.seed, 0);
        let centers = sample_hypercube(clusters, cols, bounds.low, bounds.high, &mut rng);

        let chunk_rows = config.chunk_size_rows;
        let n_chunks = rows.div_ceil(chunk_rows);
        debug!(n_chunks, chunk_rows, "Scattering rows around centers");

        let centers_view = centers.view();
        let mut buffer = vec![0.0f64; rows * cols];
        buffer
            .par_chunks_mut(chunk_rows.saturating_mul(cols))
            .enumerate()
            .for_each(|(chunk_idx, chunk)| {
                let mut chunk_rng = seeded_rng(config.seed, chunk_idx as u64 + 1);
                scatter_rows(
                    chunk,
                    chunk_idx * chunk_rows,
                    &centers_view,
                    config.max_offset,
                    &mut chunk_rng,
                );
            });

        let data = Array2::from_shape_vec((rows, cols), buffer)?;
        let labels = round_robin_labels(rows, clusters);

        if config.verbose {
            let empty = (0..clusters)
                .filter(|&c| cluster_size(rows, clusters, c) == 0)
                .count();
            info!(
                elapsed_secs = start.elapsed().as_secs_f64(),
                empty_clusters = empty,
                "Generated {} x {} matrix",
                rows,
                cols
            );
        }

        Ok(ClusteredData {
            data,
            centers,
            labels,
        })
    }

    /// Cluster that row `row` of the output belongs to
    pub fn cluster_of(&self, row: usize) -> usize {
        cluster_index(row, self.config.clusters)
    }

    /// Get the configuration.
    pub fn config(&self) -> &ClusterDataConfig {
        &self.config
    }
}

/// Generate `rows` samples of dimension `cols` clustered around `clusters`
/// random centers.
///
/// Centers lie in the hypercube `[min, max]^cols`. Each sample is at most
/// `max_offset` away from its center in every dimension, and row `i` belongs
/// to cluster `i % clusters`, so every cluster holds `rows / clusters` samples
/// with the remainder going to the lowest cluster indices.
///
/// The same arguments always produce the same matrix. `seed` is taken as a
/// signed 64-bit value and reinterpreted bit-for-bit as the `u64` seed of
/// [`ClusterDataConfig`], so `-1` and `u64::MAX` select the same stream.
///
/// # Errors
///
/// - [`GeneratorError::InvalidDimensions`] if `rows`, `cols` or `clusters` is 0,
///   or the data or centers matrix is too large to allocate
/// - [`GeneratorError::InvalidRange`] if `max < min`, a bound is not finite,
///   `max_offset` is negative or not finite, or `max + max_offset` or
///   `min - max_offset` overflows
///
/// # Example
///
/// ```
/// use clustergen_rs::generate_clusters;
///
/// let data = generate_clusters(4, 2, 2, 10.0, 0.0, 0.0, 1).unwrap();
/// assert_eq!(data.row(0), data.row(2));
/// assert_eq!(data.row(1), data.row(3));
/// ```
pub fn generate_clusters(
    rows: usize,
    cols: usize,
    clusters: usize,
    max: f64,
    min: f64,
    max_offset: f64,
    seed: i64,
) -> Result<Array2<f64>, GeneratorError> {
    let config = ClusterDataConfig::new(rows, cols, clusters)
        .with_range(min, max)
        .with_max_offset(max_offset)
        .with_seed(seed as u64);

    Ok(ClusterDataGenerator::with_config(config)
        .generate()?
        .into_data())
}
