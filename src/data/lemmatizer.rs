// ============================================================
// Layer 4 - Lemmatizer
// ============================================================
// Reduces each cleaned word to its dictionary base form, so
// "movies" and "movie" share one vocabulary slot.
//
// The default RuleLemmatizer treats every word as a noun (the
// same default a WordNet lemmatizer uses) and applies, in order:
//
//   1. Irregular plurals      children → child, wolves → wolf
//   2. Protected words        this, always, news  (left alone)
//   3. Detachment suffixes    stories → story, boxes → box,
//                             classes → class, films → film
//
// Words of three letters or fewer, and words ending in -ss,
// -us or -is, are never plurals and pass through unchanged.
//
// The lemmatizer is an explicit value owned by the TextCleaner;
// there is no global instance.

/// Anything that maps a lowercase word to its base form.
/// Send + Sync so the cleaner can run across rayon workers.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Leaves every word unchanged (used by --no-lemmatize).
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Rule-based English noun lemmatizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    pub fn new() -> Self {
        Self
    }
}

const IRREGULAR: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("oxen", "ox"),
    ("wolves", "wolf"),
    ("knives", "knife"),
    ("lives", "life"),
    ("wives", "wife"),
    ("leaves", "leaf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("thieves", "thief"),
    ("selves", "self"),
    ("loaves", "loaf"),
    ("calves", "calf"),
    ("elves", "elf"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
];

// End in "s" without being plurals.
const PROTECTED: &[&str] = &[
    "always", "perhaps", "whereas", "series", "species", "news", "yours",
    "ours", "hers", "theirs", "towards", "afterwards", "besides",
    "sometimes", "nevertheless", "lens", "kudos", "chaos", "atlas",
    "canvas", "bias", "alias", "does", "goes", "physics", "mathematics",
    "economics", "politics", "ethics", "athletics", "pants", "scissors",
];

// "-ies" words whose singular keeps the "ie".
const IES_KEEP_IE: &[&str] = &[
    "movies", "cookies", "zombies", "ties", "lies", "pies", "dies",
    "calories", "rookies", "hippies", "goodies", "brownies", "selfies",
    "indies", "newbies", "freebies", "aussies", "genies", "smoothies",
];

// "-ches" words whose singular keeps the final "e".
const CHES_KEEP_E: &[&str] = &[
    "aches", "headaches", "caches", "niches", "cliches", "quiches",
    "moustaches", "mustaches", "avalanches", "earaches", "toothaches",
    "backaches",
];

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        if let Some((_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
            return (*base).to_string();
        }

        if word.len() <= 3
            || PROTECTED.contains(&word)
            || word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with("is")
        {
            return word.to_string();
        }

        if let Some(stem) = word.strip_suffix("ies") {
            if IES_KEEP_IE.contains(&word) {
                return format!("{stem}ie");
            }
            return format!("{stem}y");
        }

        if let Some(stem) = word.strip_suffix("es") {
            if CHES_KEEP_E.contains(&word) {
                return format!("{stem}e");
            }
            // A two-letter stem is a contraction like "she's", not a plural
            let sibilant = stem.ends_with("ch")
                || stem.ends_with("sh")
                || stem.ends_with("ss")
                || stem.ends_with('x')
                || stem.ends_with("zz");
            if sibilant && stem.len() > 2 {
                return stem.to_string();
            }
        }

        match word.strip_suffix('s') {
            Some(stem) => stem.to_string(),
            None => word.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("films", "film")]
    #[test_case("stories", "story")]
    #[test_case("movies", "movie")]
    #[test_case("boxes", "box")]
    #[test_case("churches", "church")]
    #[test_case("wishes", "wish")]
    #[test_case("classes", "class")]
    #[test_case("buzzes", "buzz")]
    #[test_case("houses", "house")]
    #[test_case("headaches", "headache")]
    #[test_case("children", "child")]
    #[test_case("wolves", "wolf")]
    #[test_case("shes", "she")]
    fn test_plural_to_singular(word: &str, expected: &str) {
        assert_eq!(RuleLemmatizer::new().lemmatize(word), expected);
    }

    #[test_case("this")]
    #[test_case("was")]
    #[test_case("always")]
    #[test_case("class")]
    #[test_case("bonus")]
    #[test_case("great")]
    #[test_case("love")]
    #[test_case("news")]
    fn test_non_plurals_unchanged(word: &str) {
        assert_eq!(RuleLemmatizer::new().lemmatize(word), word);
    }

    #[test]
    fn test_identity_leaves_words() {
        assert_eq!(IdentityLemmatizer.lemmatize("films"), "films");
    }
}
