use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::GeneratorConfig;
use super::error::Error;
use common::types::{Edge, Weight};
use shortest_path_core::AdjacencyMatrix;

/// Produces random adjacency matrices.
///
/// Each off-diagonal entry becomes an edge with probability `density`; edge
/// weights are drawn uniformly from `[min_weight, max_weight]`, skipping 0.
/// The diagonal is always empty.
pub struct GraphGenerator {
    config: GeneratorConfig,
    rng: SmallRng,
}

impl GraphGenerator {
    /// Validates `config` and seeds the generator. Without a seed the RNG is
    /// seeded from the OS.
    pub fn new(config: GeneratorConfig, seed: Option<u64>) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&config.density) {
            return Err(Error::InvalidGeneratorConfig(format!(
                "density must be within [0, 1], got {}",
                config.density
            )));
        }
        if config.min_weight > config.max_weight {
            return Err(Error::InvalidGeneratorConfig(format!(
                "min_weight {} is greater than max_weight {}",
                config.min_weight, config.max_weight
            )));
        }
        if config.min_weight == 0 && config.max_weight == 0 {
            return Err(Error::InvalidGeneratorConfig(
                "weight range must contain a non-zero weight".to_string(),
            ));
        }

        let rng = seed.map_or_else(SmallRng::from_os_rng, SmallRng::seed_from_u64);
        Ok(Self { config, rng })
    }

    pub fn generate(&mut self) -> Result<AdjacencyMatrix, Error> {
        let n = self.config.vertices;
        let mut edges: Vec<Edge> = Vec::new();

        for from in 0..n {
            for to in 0..n {
                if from != to && self.rng.random_bool(self.config.density) {
                    let weight = self.random_weight();
                    edges.push((from, to, weight));
                }
            }
        }

        Ok(AdjacencyMatrix::from_edges(n, &edges)?)
    }

    fn random_weight(&mut self) -> Weight {
        let range = self.config.min_weight..=self.config.max_weight;
        loop {
            let weight = self.rng.random_range(range.clone());
            if weight != 0 {
                return weight;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(density: f64, min_weight: Weight, max_weight: Weight) -> GeneratorConfig {
        GeneratorConfig {
            vertices: 12,
            density,
            min_weight,
            max_weight,
        }
    }

    #[test]
    fn same_seed_same_graph() {
        let first = GraphGenerator::new(settings(0.5, 1, 9), Some(7))
            .unwrap()
            .generate()
            .unwrap();
        let second = GraphGenerator::new(settings(0.5, 1, 9), Some(7))
            .unwrap()
            .generate()
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn weights_in_range_and_diagonal_empty() {
        let graph = GraphGenerator::new(settings(1.0, -2, 2), Some(3))
            .unwrap()
            .generate()
            .unwrap();

        assert_eq!(graph.num_vertices(), 12);
        assert_eq!(graph.edge_count(), 12 * 11);
        for (u, v, w) in graph.edges() {
            assert_ne!(u, v, "diagonal must stay empty");
            assert!((-2..=2).contains(&w) && w != 0, "weight out of range");
        }
    }

    #[test]
    fn zero_density_has_no_edges() {
        let graph = GraphGenerator::new(settings(0.0, 1, 5), None)
            .unwrap()
            .generate()
            .unwrap();

        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn rejects_invalid_settings() {
        assert!(matches!(
            GraphGenerator::new(settings(1.5, 1, 5), None),
            Err(Error::InvalidGeneratorConfig(_))
        ));
        assert!(matches!(
            GraphGenerator::new(settings(0.5, 5, 1), None),
            Err(Error::InvalidGeneratorConfig(_))
        ));
        assert!(matches!(
            GraphGenerator::new(settings(0.5, 0, 0), None),
            Err(Error::InvalidGeneratorConfig(_))
        ));
    }
}
