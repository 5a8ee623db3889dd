//! Player storage abstraction
//!
//! `PlayerRepository` is the seam between the service layer and wherever the
//! records live. The in-memory backend is the only implementation today.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::SeedSection;
use crate::types::Player;

pub mod memory;

pub use memory::InMemoryPlayerRepository;

/// Player repository trait
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// First player whose id matches exactly, or `None`
    async fn get_by_id(&self, id: &str) -> Option<Player>;

    /// All players in insertion order
    async fn get_all(&self) -> Vec<Player>;

    /// Append a player without any uniqueness check
    async fn save(&self, player: Player) -> Player;
}

/// Create the repository described by the seed configuration
pub fn create_repository(seed: &SeedSection) -> Arc<dyn PlayerRepository> {
    let repository = match seed.rng_seed {
        Some(rng_seed) => {
            let mut rng = fastrand::Rng::with_seed(rng_seed);
            InMemoryPlayerRepository::seeded_with(seed.count, &mut rng)
        }
        None => InMemoryPlayerRepository::seeded(seed.count),
    };

    tracing::info!(
        players = seed.count,
        fixed_seed = seed.rng_seed.is_some(),
        "Seeded in-memory player repository"
    );

    Arc::new(repository)
}
