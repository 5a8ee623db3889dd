//! Player lookup service
//!
//! Thin facade over a [`PlayerRepository`] so the HTTP layer never touches
//! storage directly.

use std::sync::Arc;

use crate::storage::PlayerRepository;
use crate::types::Player;

#[derive(Clone)]
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_player_by_id(&self, id: &str) -> Option<Player> {
        tracing::debug!(%id, "Looking up player");
        self.repository.get_by_id(id).await
    }

    pub async fn get_all_players(&self) -> Vec<Player> {
        tracing::debug!("Listing players");
        self.repository.get_all().await
    }

    pub async fn add_player(&self, player: Player) -> Player {
        tracing::debug!(id = %player.id, "Adding player");
        self.repository.save(player).await
    }
}
