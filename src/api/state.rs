//! API server state

use std::sync::Arc;

use crate::service::PlayerService;
use crate::storage::PlayerRepository;

/// API server state
#[derive(Clone)]
pub struct AppState {
    /// Player lookup service
    pub players: PlayerService,
}

impl AppState {
    pub fn new(players: PlayerService) -> Self {
        Self { players }
    }

    /// Build state directly over a repository
    pub fn from_repository(repository: Arc<dyn PlayerRepository>) -> Self {
        Self::new(PlayerService::new(repository))
    }
}
