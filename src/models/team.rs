//! Team (doubles pair) data structure.

use serde::{Deserialize, Serialize};

/// Identifier for a team within a tournament (`t0`..`t5`).
pub type TeamId = String;

/// Which of a team's two player slots is being edited.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSlot {
    One,
    Two,
}

/// A doubles pair. `name` is derived from the two player names and is never
/// edited directly.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub player1: String,
    pub player2: String,
}

impl Team {
    /// Blank team for the setup screen, with its deterministic id.
    pub fn blank(index: usize) -> Self {
        Self {
            id: format!("t{index}"),
            name: String::new(),
            player1: String::new(),
            player2: String::new(),
        }
    }

    /// Setup-screen label for a team by position ("Team A".."Team F").
    pub fn label(index: usize) -> String {
        format!("Team {}", (b'A' + index as u8) as char)
    }

    /// Both player names filled in (whitespace-only counts as missing).
    pub fn has_both_players(&self) -> bool {
        !self.player1.trim().is_empty() && !self.player2.trim().is_empty()
    }

    /// Recompute the display name: "{player1} / {player2}" when both are
    /// present, otherwise whichever single name is, otherwise empty.
    pub fn refresh_name(&mut self) {
        self.name = if !self.player1.is_empty() && !self.player2.is_empty() {
            format!("{} / {}", self.player1, self.player2)
        } else if !self.player1.is_empty() {
            self.player1.clone()
        } else {
            self.player2.clone()
        };
    }
}
