// Reference entities - the canonical tables every free-text field resolves
// against. Each kind pairs a registry (identifier assignment, candidate
// views for the resolver) with its persisted row shape.

pub mod player;
pub mod team;

pub use player::{Player, PlayerRegistry, PlayerRow};
pub use team::{Team, TeamRegistry, TeamRow, TeamSource};
