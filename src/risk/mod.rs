//! Severity classification from threat scores.

mod engine;

pub use engine::{RiskEngine, Severity};
