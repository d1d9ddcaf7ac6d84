use crate::error::{Result, VerifyError};
use crate::game::{DiceGame, Game, LaserPartyGame, TileGame};
use std::collections::HashMap;
use std::sync::Arc;

/// Name-to-game table. Built once by the composition root and handed to the
/// [`Verifier`](crate::Verifier); there is no global registry.
#[derive(Clone, Default)]
pub struct GameRegistry {
    games: Vec<Arc<dyn Game>>,
    index: HashMap<String, usize>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dice, tile and grid games, with `death_race` as an alias of `deathFun`.
    pub fn with_builtin_games() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(TileGame));
        let tile_slot = registry.games.len() - 1;
        registry.register(Arc::new(LaserPartyGame));
        registry.register(Arc::new(DiceGame));
        registry.index.insert("death_race".to_string(), tile_slot);
        registry
    }

    /// Registers a game under its own name, replacing any game of that name.
    pub fn register(&mut self, game: Arc<dyn Game>) {
        let name = game.name().to_string();
        match self.index.get(&name) {
            Some(&slot) => self.games[slot] = game,
            None => {
                self.games.push(game);
                self.index.insert(name, self.games.len() - 1);
            }
        }
    }

    pub fn alias(&mut self, alias: impl Into<String>, target: &str) -> Result<()> {
        let slot = *self
            .index
            .get(target)
            .ok_or_else(|| VerifyError::UnknownGame(target.to_string()))?;
        self.index.insert(alias.into(), slot);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn Game>> {
        self.index
            .get(name)
            .map(|&slot| Arc::clone(&self.games[slot]))
            .ok_or_else(|| VerifyError::UnknownGame(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Canonical names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.games.iter().map(|g| g.name()).collect()
    }

    /// Every accepted name, aliases included, sorted.
    pub fn accepted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.index.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn games(&self) -> impl Iterator<Item = &Arc<dyn Game>> {
        self.games.iter()
    }
}

impl std::fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameRegistry")
            .field("games", &self.names())
            .field("accepted_names", &self.accepted_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_games() {
        let registry = GameRegistry::with_builtin_games();
        assert_eq!(registry.names(), vec!["deathFun", "laser_party", "dice"]);
        assert_eq!(registry.get("death_race").unwrap().name(), "deathFun");
        assert_eq!(registry.get("dice").unwrap().display_name(), "Degen Dice");
        assert_eq!(
            registry.accepted_names(),
            vec!["deathFun", "death_race", "dice", "laser_party"]
        );
    }

    #[test]
    fn test_unknown_game() {
        let registry = GameRegistry::with_builtin_games();
        assert!(matches!(
            registry.get("poker"),
            Err(VerifyError::UnknownGame(name)) if name == "poker"
        ));
        assert!(GameRegistry::new().alias("x", "missing").is_err());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = GameRegistry::new();
        registry.register(Arc::new(DiceGame));
        registry.register(Arc::new(DiceGame));
        assert_eq!(registry.names().len(), 1);
        assert!(registry.contains("dice"));
    }
}
