//! AI decision engine for computer-controlled seats.
//!
//! Three tiers share the `AiPolicy` trait:
//! - Easy: random center plays, otherwise the first legal way out
//! - Medium: greedy fixed priority
//! - Hard: position evaluation with a short own-turn lookahead
//!
//! `plan_ai_turn` plays out a full turn and returns the moves it made.

pub mod config;
pub mod eval;
pub mod planner;
pub mod policy;
pub mod search;
pub mod stats;

pub use config::{AiConfig, HeuristicWeights};
pub use eval::evaluate;
pub use planner::{
    execute_ai_move, find_best_move, find_best_move_with, plan_ai_turn, plan_ai_turn_with,
    plan_turn, AiTurnPlan,
};
pub use policy::{policy_for, AiPolicy, Candidates, EasyPolicy, MediumPolicy};
pub use search::HardPolicy;
pub use stats::SearchStats;
