//! Player roles

use std::fmt;

/// Name used for the computer player
pub const AI_NAME: &str = "AI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    Ai,
}

/// A named participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub kind: PlayerKind,
}

impl Player {
    #[must_use]
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    #[must_use]
    pub fn ai() -> Self {
        Self {
            name: AI_NAME.to_string(),
            kind: PlayerKind::Ai,
        }
    }

    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.kind == PlayerKind::Ai
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Role assignment for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Players {
    pub mastermind: Player,
    pub codebreaker: Player,
}

impl Players {
    /// One human against the computer
    #[must_use]
    pub fn against_ai(human_name: impl Into<String>, human_is_mastermind: bool) -> Self {
        let human = Player::human(human_name);
        if human_is_mastermind {
            Self {
                mastermind: human,
                codebreaker: Player::ai(),
            }
        } else {
            Self {
                mastermind: Player::ai(),
                codebreaker: human,
            }
        }
    }

    /// Two humans
    #[must_use]
    pub fn humans(
        first: impl Into<String>,
        second: impl Into<String>,
        first_is_mastermind: bool,
    ) -> Self {
        let (first, second) = (Player::human(first), Player::human(second));
        if first_is_mastermind {
            Self {
                mastermind: first,
                codebreaker: second,
            }
        } else {
            Self {
                mastermind: second,
                codebreaker: first,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn against_ai_roles() {
        let p = Players::against_ai("Ada", true);
        assert_eq!(p.mastermind.name, "Ada");
        assert!(p.codebreaker.is_ai());

        let p = Players::against_ai("Ada", false);
        assert!(p.mastermind.is_ai());
        assert_eq!(p.codebreaker.to_string(), "Ada");
    }

    #[test]
    fn humans_roles() {
        let p = Players::humans("Ada", "Bob", false);
        assert_eq!(p.mastermind.name, "Bob");
        assert_eq!(p.codebreaker.name, "Ada");
        assert!(!p.mastermind.is_ai());
    }
}
