//! Seeded synthetic graphs for benchmarking.
//!
//! Every ordered pair of distinct vertices receives an edge with probability
//! `edge_density_percent / 100`. Each weight component is drawn uniformly
//! from `min_weight..=max_weight`, so a non-negative range guarantees a graph
//! without negative cycles.

mod errors;

pub use errors::SyntheticError;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use vecpath_core::{Graph, GraphBuilder};

/// Configuration for [`SyntheticGraph::generate`].
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Length of every weight vector.
    pub dimension: usize,
    /// Chance, in percent, that an ordered pair is connected.
    pub edge_density_percent: u8,
    /// Smallest value drawn for a weight component.
    pub min_weight: i32,
    /// Largest value drawn for a weight component.
    pub max_weight: i32,
    /// RNG seed.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    /// Dense non-negative graph used by the default benchmark groups.
    #[must_use]
    pub const fn non_negative(vertex_count: usize, dimension: usize, seed: u64) -> Self {
        Self {
            vertex_count,
            dimension,
            edge_density_percent: 30,
            min_weight: 0,
            max_weight: 20,
            seed,
        }
    }

    fn validate(&self) -> Result<(), SyntheticError> {
        if self.vertex_count == 0 {
            return Err(SyntheticError::ZeroVertices);
        }
        if self.dimension == 0 {
            return Err(SyntheticError::ZeroDimension);
        }
        if self.edge_density_percent > 100 {
            return Err(SyntheticError::InvalidDensity {
                percent: self.edge_density_percent,
            });
        }
        if self.min_weight > self.max_weight {
            return Err(SyntheticError::InvalidWeightRange {
                min: self.min_weight,
                max: self.max_weight,
            });
        }
        Ok(())
    }
}

/// Namespace for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraph;

impl SyntheticGraph {
    /// Generates a graph from `config`.
    ///
    /// The same configuration always yields the same graph.
    ///
    /// # Errors
    /// Returns [`SyntheticError`] when the configuration is invalid or the
    /// graph cannot be allocated.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
        config.validate()?;
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut builder = GraphBuilder::new(config.vertex_count, config.dimension);
        for source in 0..config.vertex_count {
            for target in 0..config.vertex_count {
                if source == target || !connects(&mut rng, config.edge_density_percent) {
                    continue;
                }
                let weights: Vec<i32> = (0..config.dimension)
                    .map(|_| rng.gen_range(config.min_weight..=config.max_weight))
                    .collect();
                builder = builder.with_edge(source, target, weights);
            }
        }
        Ok(builder.build()?)
    }
}

fn connects(rng: &mut SmallRng, density_percent: u8) -> bool {
    rng.gen_range(0_u8..100) < density_percent
}
