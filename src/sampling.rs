use ndarray::{Array1, Array2, ArrayView2};
use ndarray_rand::RandomExt;
use rand::distributions::Standard;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Create a ChaCha8 generator for `seed`, positioned at the start of `stream`.
///
/// Streams of the same seed are independent, which lets disjoint parts of the
/// output be sampled concurrently without sharing a generator.
pub fn seeded_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(stream);
    rng
}

/// Draw one coordinate uniformly from `[low, high]`
#[inline]
pub fn uniform_in<R: Rng + ?Sized>(low: f64, high: f64, rng: &mut R) -> f64 {
    rng.gen::<f64>() * (high - low) + low
}

/// Draw `n` points uniformly from the hypercube `[low, high]^dim`.
///
/// Points are drawn in row-major order, so the result for a given generator
/// state matches `n * dim` successive calls to [`uniform_in`].
pub fn sample_hypercube<R: Rng + ?Sized>(
    n: usize,
    dim: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> Array2<f64> {
    let span = high - low;
    let mut points: Array2<f64> = Array2::random_using((n, dim), Standard, rng);
    points.mapv_inplace(|u| u * span + low);
    points
}

/// Cluster that row `row` belongs to under round-robin assignment
#[inline]
pub fn cluster_index(row: usize, clusters: usize) -> usize {
    row % clusters
}

/// Number of rows out of `rows` assigned to `cluster`.
///
/// The first `rows % clusters` clusters get one row more than the rest.
pub fn cluster_size(rows: usize, clusters: usize, cluster: usize) -> usize {
    if cluster >= clusters {
        return 0;
    }
    rows / clusters + usize::from(cluster < rows % clusters)
}

/// Round-robin cluster label of every row
pub fn round_robin_labels(rows: usize, clusters: usize) -> Array1<usize> {
    Array1::from_shape_fn(rows, |row| cluster_index(row, clusters))
}

/// Fill `out` with samples scattered around `centers`.
///
/// `out` holds whole rows in row-major order and `first_row` is the global
/// index of its first row, which decides the cluster of every row. Each
/// coordinate is its center's coordinate plus an offset uniform in
/// `[-max_offset, max_offset]`.
pub fn scatter_rows<R: Rng + ?Sized>(
    out: &mut [f64],
    first_row: usize,
    centers: &ArrayView2<f64>,
    max_offset: f64,
    rng: &mut R,
) {
    let clusters = centers.nrows();
    let cols = centers.ncols();

    for (i, row) in out.chunks_exact_mut(cols).enumerate() {
        let center = centers.row(cluster_index(first_row + i, clusters));
        for (value, &c) in row.iter_mut().zip(center.iter()) {
            *value = c + uniform_in(-max_offset, max_offset, rng);
        }
    }
}
