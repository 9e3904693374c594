//! Node roles.

use std::fmt;

/// What a grid node currently represents.
///
/// Source, Stop and End are *terminals*: once placed they can only be removed
/// by a full session reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Free,
    Source,
    Stop,
    End,
    Obstacle,
}

impl Role {
    /// Whether this role is Source, Stop or End.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Role::Source | Role::Stop | Role::End)
    }

    /// Whether a search may step onto a node with this role.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Role::Obstacle)
    }

    /// One-character glyph used by text dumps.
    pub const fn glyph(self) -> char {
        match self {
            Role::Free => '.',
            Role::Source => 'S',
            Role::Stop => 'o',
            Role::End => 'E',
            Role::Obstacle => '#',
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Free => "free",
            Role::Source => "source",
            Role::Stop => "stop",
            Role::End => "end",
            Role::Obstacle => "obstacle",
        };
        f.write_str(s)
    }
}
