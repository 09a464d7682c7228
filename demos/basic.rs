//! Basic example demonstrating clustergen-rs usage
//!
//! Run with: cargo run --example basic --release
//! Set RUST_LOG=debug to see chunk layout events.

use clustergen_rs::{ClusterDataConfig, ClusterDataGenerator};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== clustergen-rs example ===\n");

    // 3 clusters in 2D for easy visualization
    let n_samples = 300;
    let n_features = 2;
    let n_clusters = 3;

    let config = ClusterDataConfig::new(n_samples, n_features, n_clusters)
        .with_range(-10.0, 10.0)
        .with_max_offset(1.0)
        .with_seed(42)
        .with_verbose(true);

    println!(
        "Generating {} samples with {} features in {} clusters...\n",
        n_samples, n_features, n_clusters
    );

    let generator = ClusterDataGenerator::with_config(config);
    let generated = generator.generate().expect("Generation failed");

    println!("\nCluster centers:");
    for (i, center) in generated.centers.outer_iter().enumerate() {
        println!("  Cluster {}: ({:.4}, {:.4})", i, center[0], center[1]);
    }
    println!();

    println!("Cluster distribution:");
    for (i, count) in generated.cluster_sizes().iter().enumerate() {
        println!(
            "  Cluster {}: {} samples ({:.1}%)",
            i,
            count,
            (*count as f64 / n_samples as f64) * 100.0
        );
    }
    println!();

    println!("First 10 samples:");
    for i in 0..10 {
        println!(
            "  Sample {} at ({:.2}, {:.2}) -> Cluster {}",
            i,
            generated.data[[i, 0]],
            generated.data[[i, 1]],
            generated.labels[i]
        );
    }

    println!("\n=== Done! ===");
}
