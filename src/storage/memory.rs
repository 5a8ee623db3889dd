//! In-memory player repository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{make_random_player_with, Player};

use super::PlayerRepository;

/// Player storage backed by a `Vec`
///
/// The lock only keeps readers from observing a half-finished append; it adds
/// no uniqueness or ordering guarantees beyond insertion order.
#[derive(Default)]
pub struct InMemoryPlayerRepository {
    players: RwLock<Vec<Player>>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: RwLock::new(players),
        }
    }

    /// Create a repository holding `count` random players
    pub fn seeded(count: usize) -> Self {
        Self::seeded_with(count, &mut fastrand::Rng::new())
    }

    pub fn seeded_with(count: usize, rng: &mut fastrand::Rng) -> Self {
        let players = (0..count).map(|_| make_random_player_with(rng)).collect();
        Self::with_players(players)
    }

    pub async fn len(&self) -> usize {
        self.players.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.players.read().await.is_empty()
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn get_by_id(&self, id: &str) -> Option<Player> {
        let players = self.players.read().await;
        players.iter().find(|player| player.id == id).cloned()
    }

    async fn get_all(&self) -> Vec<Player> {
        self.players.read().await.clone()
    }

    async fn save(&self, player: Player) -> Player {
        let mut players = self.players.write().await;
        players.push(player.clone());
        player
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryPlayerRepository {
        InMemoryPlayerRepository::with_players(vec![
            Player::new("001", "Player-1", 10),
            Player::new("002", "Player-2", 20),
        ])
    }

    #[tokio::test]
    async fn test_get_by_id_finds_match() {
        let repo = sample();

        let player = repo.get_by_id("002").await.unwrap();
        assert_eq!(player, Player::new("002", "Player-2", 20));
    }

    #[tokio::test]
    async fn test_get_by_id_missing_returns_none() {
        let repo = sample();

        assert!(repo.get_by_id("999").await.is_none());
        // Exact match only
        assert!(repo.get_by_id("1").await.is_none());
        assert!(repo.get_by_id("001 ").await.is_none());
    }

    #[tokio::test]
    async fn test_save_appends_and_returns_record() {
        let repo = sample();
        let before = repo.get_all().await.len();

        let player = Player::new("777", "Saved", 77);
        let saved = repo.save(player.clone()).await;
        assert_eq!(saved, player);

        let all = repo.get_all().await;
        assert_eq!(all.len(), before + 1);
        assert_eq!(all.last(), Some(&player));
        assert_eq!(repo.get_by_id("777").await, Some(player));
    }

    #[tokio::test]
    async fn test_duplicate_id_first_match_wins() {
        let repo = sample();

        repo.save(Player::new("001", "Impostor", 99)).await;

        assert_eq!(repo.len().await, 3);
        let found = repo.get_by_id("001").await.unwrap();
        assert_eq!(found.name, "Player-1");
    }

    #[tokio::test]
    async fn test_get_all_preserves_insertion_order() {
        let repo = InMemoryPlayerRepository::new();
        assert!(repo.is_empty().await);

        for i in 0..5 {
            repo.save(Player::new(format!("{:03}", i), format!("Player-{i}"), i))
                .await;
        }

        let ids: Vec<_> = repo.get_all().await.into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["000", "001", "002", "003", "004"]);
    }

    #[tokio::test]
    async fn test_seeded_repository() {
        let repo = InMemoryPlayerRepository::seeded(5);
        let players = repo.get_all().await;

        assert_eq!(players.len(), 5);
        for player in players {
            assert!(player.name.starts_with("Player-"));
            assert!((0..=100).contains(&player.score));
        }
    }

    #[tokio::test]
    async fn test_snapshot_is_independent_of_later_saves() {
        let repo = sample();

        let snapshot = repo.get_all().await;
        repo.save(Player::new("003", "Player-3", 30)).await;

        assert_eq!(snapshot.len(), 2);
        assert_eq!(repo.len().await, 3);
    }
}
