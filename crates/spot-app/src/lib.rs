//! Spot Application Orchestration Layer
//!
//! This crate contains the trigger-cycle use cases and the controller that
//! sequences them.

pub mod deps;
pub mod usecases;

pub use deps::TriggerDeps;
pub use usecases::{ShakeSubscription, TriggerController, TriggerSettings};
