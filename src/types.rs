//! Core data types for player-service

use serde::{Deserialize, Serialize};

/// Prefix used for generated player names
pub const GENERATED_NAME_PREFIX: &str = "Player-";

/// A player record
///
/// `id` is meant to be a zero-padded three digit numeral ("000"-"999") and
/// `score` is meant to fall in 0..=100, but neither is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub score: i32,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>, score: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score,
        }
    }
}

/// Generate a player with random fields
pub fn make_random_player() -> Player {
    make_random_player_with(&mut fastrand::Rng::new())
}

/// Generate a player with random fields drawn from `rng`
pub fn make_random_player_with(rng: &mut fastrand::Rng) -> Player {
    let id = format!("{:03}", rng.u32(0..1000));
    let name = format!("{}{}", GENERATED_NAME_PREFIX, rng.u32(0..=100));
    let score = rng.i32(0..=100);

    Player { id, name, score }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_constructor() {
        let player = Player::new("123", "TestPlayer", 42);
        assert_eq!(player.id, "123");
        assert_eq!(player.name, "TestPlayer");
        assert_eq!(player.score, 42);
    }

    #[test]
    fn test_random_player_fields_in_range() {
        for _ in 0..500 {
            let player = make_random_player();

            assert_eq!(player.id.len(), 3, "id not zero padded: {}", player.id);
            assert!(player.id.chars().all(|c| c.is_ascii_digit()));
            assert!(player.name.starts_with(GENERATED_NAME_PREFIX));
            assert!((0..=100).contains(&player.score));
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = make_random_player_with(&mut fastrand::Rng::with_seed(7));
        let b = make_random_player_with(&mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_shape() {
        let player = Player::new("001", "Player-1", 10);
        let value = serde_json::to_value(&player).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "id": "001", "name": "Player-1", "score": 10 })
        );
    }
}
