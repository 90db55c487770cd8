//! Social class normalization.

use tracing::trace;

use super::canonical_token;
use crate::categories::SocialClass;

/// Map a free-text social class onto a category. Unknown input is `common`.
pub fn normalize_social_class(input: Option<&str>) -> SocialClass {
    let Some(raw) = input else {
        return SocialClass::Common;
    };

    match canonical_token(raw).as_str() {
        "elite" | "nobility" | "noble" | "nobleman" | "noblewoman" | "aristocrat"
        | "aristocracy" | "aristocratic" | "gentry" | "hidalgo" | "upper" | "wealthy" => {
            SocialClass::Elite
        }
        "middling" | "middle" | "artisan" | "craftsman" | "craftswoman" | "merchant"
        | "tradesman" | "shopkeeper" => SocialClass::Middling,
        "common" | "commoner" | "laborer" | "labourer" | "peasant" | "poor" | "lower"
        | "plebeian" => SocialClass::Common,
        "enslaved" | "slave" | "esclavo" | "esclava" => SocialClass::Enslaved,
        "religious" | "clergy" | "cleric" | "priest" | "monk" | "nun" | "friar" | "fraile"
        | "monja" => SocialClass::Religious,
        "" => SocialClass::Common,
        _ => {
            trace!(input = %raw, "unrecognized social class, defaulting to common");
            SocialClass::Common
        }
    }
}
