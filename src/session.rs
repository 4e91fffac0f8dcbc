//! Starter-session templates and advisory notes

use crate::types::*;

pub const SAFETY_NOTE: &str = "Safety tip: practice treading + floating every session.";
pub const OPEN_WATER_NOTE: &str =
    "Open-water tip: sighting + calm breathing matters more than speed.";
pub const BEGINNER_NOTE: &str = "Keep it simple: comfort + breathing first, then distance.";
pub const CHALLENGE_NOTE: &str = "Push hard only when your form stays clean (quality > speed).";

const INTENSITY_PHRASE: &str = "intervals";
const KID_PHRASE: &str = "fun pace (good form)";

/// Build the starter session for `style_name`.
///
/// Seniors always get the gentle template. Otherwise the level picks the
/// template and kids get the intensity wording swapped out. An unrecognized
/// level with a non-senior age yields an empty plan.
pub fn session_plan(style_name: &str, level: Level, age: AgeGroup) -> String {
    if age == AgeGroup::Senior {
        return format!("Warm-up: 200m easy + Drill: 6×25m + Main: 6×50m smooth ({style_name})");
    }

    let base = match level {
        Level::Beginner => {
            format!("Warm-up: 4×25m easy + Drill: 4×25m + Easy swim: 4×25m ({style_name})")
        }
        Level::Intermediate => {
            format!("Warm-up: 200m easy + Drill: 6×25m + Main: 6×50m steady ({style_name})")
        }
        Level::Expert => {
            format!("Warm-up: 300m easy + Drill: 8×25m + Main: 10×50m intervals ({style_name})")
        }
        Level::Unrecognized => return String::new(),
    };

    if age == AgeGroup::Kid {
        base.replacen(INTENSITY_PHRASE, KID_PHRASE, 1)
    } else {
        base
    }
}

/// Contextual tips, in fixed order; any subset may apply
pub fn advisory_notes(profile: &InputProfile) -> Vec<String> {
    let mut notes = Vec::new();

    match profile.goal.as_str() {
        "safety" => notes.push(SAFETY_NOTE.to_string()),
        "open_water" => notes.push(OPEN_WATER_NOTE.to_string()),
        _ => {}
    }
    if profile.level == Level::Beginner {
        notes.push(BEGINNER_NOTE.to_string());
    }
    if profile.focus == Focus::Challenge {
        notes.push(CHALLENGE_NOTE.to_string());
    }

    notes
}
