//! Severity-keyed activity lookup

use vitals::StressLabel;

const HIGH_STRESS: [&str; 5] = [
    "🧘 Deep breathing (4–4–6 method)",
    "💃 Dance",
    "🚴 Cycling",
    "🏊 Swimming",
    "🎧 Calm music",
];

const MODERATE_STRESS: [&str; 4] = [
    "🚶 Short walk",
    "🎯 Hobby time",
    "☀ Sunlight exposure",
    "📞 Talk to a friend",
];

const REASSURANCE: [&str; 3] = ["✅ You're fine!", "💧 Stay hydrated", "🙂 Stay positive"];

/// Coping activities for a stress category, most intense list first in the
/// keyword cascade.
///
/// Case-insensitive substring checks run most severe first; labels the table
/// does not recognize get the reassurance list. Pure and order-stable.
pub fn suggestions_for(label: &StressLabel) -> Vec<String> {
    let lowered = label.as_str().to_lowercase();

    let list: &[&str] = if lowered.contains("high") || lowered.contains("severe") {
        &HIGH_STRESS
    } else if lowered.contains("moderate") {
        &MODERATE_STRESS
    } else {
        &REASSURANCE
    };

    list.iter().map(|s| s.to_string()).collect()
}
