//! Rotating motivational banner

use rand::seq::SliceRandom;

const QUOTES: [&str; 3] = [
    "🌿 Relax… one breath at a time.",
    "💪 You are stronger than your stress.",
    "✨ Just breathe, everything will be okay.",
];

/// Uniform pick from the fixed quote list. Decorative only; no seeding.
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}
