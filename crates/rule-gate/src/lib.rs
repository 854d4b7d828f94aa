//! Rule-Based Classifier Gate
//!
//! Deterministic medical-threshold rules applied before the statistical
//! model. A matching rule is definitive; no match defers to the model.

mod rules;

pub use rules::RuleGate;
