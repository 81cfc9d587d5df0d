#[macro_use]
mod macros;

pub mod action;
pub mod consequence;
pub mod party;
pub mod scale;

pub use action::{Action, Party, Role};
pub use consequence::{Consequence, FollowOn, Polarity, decay};
pub use party::PartyEffect;
pub use scale::SelfInterestScale;
