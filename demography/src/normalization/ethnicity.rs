//! Ethnicity normalization.
//!
//! The synonym table covers English and Spanish spellings, with and without
//! accents, and both grammatical genders of each Spanish term.

use tracing::trace;

use super::canonical_token;
use crate::categories::Ethnicity;

/// Map a free-text ethnicity onto a category.
///
/// Ethnicity is never left unknown: missing or unrecognized input maps to the
/// scenario's default category.
pub fn normalize_ethnicity(input: Option<&str>, default: Ethnicity) -> Ethnicity {
    let Some(raw) = input else {
        return default;
    };

    match canonical_token(raw).as_str() {
        "español" | "espanol" | "española" | "espanola" | "spanish" | "spaniard"
        | "peninsular" | "european" | "castilian" => Ethnicity::Espanol,
        "criollo" | "criolla" | "creole" => Ethnicity::Criollo,
        "mestizo" | "mestiza" | "mixed" | "mixed race" | "mixed-race" => Ethnicity::Mestizo,
        "castizo" | "castiza" => Ethnicity::Castizo,
        "mulato" | "mulata" | "mulatto" | "mulatta" | "pardo" | "parda" => Ethnicity::Mulato,
        "africano" | "africana" | "african" | "negro" | "negra" | "moreno" | "morena"
        | "black" => Ethnicity::Africano,
        "indio" | "india" | "indigenous" | "native" | "nahua" | "mexica" | "aztec" => {
            Ethnicity::Indio
        }
        "chino" | "china" | "asian" | "filipino" | "filipina" => Ethnicity::Chino,
        _ => {
            trace!(input = %raw, default = %default, "unrecognized ethnicity, using scenario default");
            default
        }
    }
}
