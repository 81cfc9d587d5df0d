//! Bentham's felicific calculus: scores candidate actions by the pleasure and
//! pain they cause every affected party, then picks the best action under a
//! utilitarian or negative-utilitarian rule, optionally weighting the
//! decision-maker's own welfare against everyone else's.

pub mod error;
pub mod flush;
#[macro_use]
pub mod model;
pub mod scenario;
pub mod selector;

pub use error::{EvalError, Result};
pub use model::{
    Action, Consequence, FollowOn, Party, PartyEffect, Polarity, Role, SelfInterestScale,
};
pub use scenario::{ActSpec, Dilemma, PartySpec};
pub use selector::{
    ActionSelector, DecisionRule, Evaluation, MissingDecisionMaker, Ranking, SelectorConfig,
};
