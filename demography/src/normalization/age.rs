//! Age normalization.

use tracing::trace;

use super::canonical_token;
use crate::categories::AgeCategory;
use crate::entities::AgeInput;

/// Bucket a number of years into an age category.
///
/// Non-finite input is treated as unknown and maps to `adult`.
pub fn age_from_years(years: f64) -> AgeCategory {
    if !years.is_finite() {
        return AgeCategory::Adult;
    }
    match years {
        y if y < 13.0 => AgeCategory::Child,
        y if y < 25.0 => AgeCategory::Young,
        y if y < 45.0 => AgeCategory::Adult,
        y if y < 60.0 => AgeCategory::MiddleAged,
        _ => AgeCategory::Elderly,
    }
}

/// Map a numeric or textual age onto an age category. Missing input is `adult`.
pub fn normalize_age(input: Option<&AgeInput>) -> AgeCategory {
    match input {
        None => AgeCategory::Adult,
        Some(AgeInput::Years(years)) => age_from_years(*years),
        Some(AgeInput::Text(text)) => age_from_text(text),
    }
}

fn age_from_text(text: &str) -> AgeCategory {
    let token = canonical_token(text);

    // "52", "52 years", "52 years old"
    if let Some(years) = token
        .split_whitespace()
        .next()
        .and_then(|word| word.parse::<f64>().ok())
    {
        return age_from_years(years);
    }

    match token.as_str() {
        "child" | "kid" | "infant" | "baby" | "boy" | "girl" | "niño" | "niña" | "nino"
        | "nina" => AgeCategory::Child,
        "young" | "youth" | "teen" | "teenager" | "adolescent" | "young adult" | "joven" => {
            AgeCategory::Young
        }
        "adult" | "grown" | "grown up" => AgeCategory::Adult,
        "middle-aged" | "middle aged" | "middleaged" | "middle age" | "mature" => {
            AgeCategory::MiddleAged
        }
        "elderly" | "old" | "elder" | "aged" | "senior" | "anciano" | "anciana" | "viejo"
        | "vieja" => AgeCategory::Elderly,
        _ => {
            trace!(input = %text, "unrecognized age, defaulting to adult");
            AgeCategory::Adult
        }
    }
}
