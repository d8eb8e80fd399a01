// ============================================================
// Layer 4 - Text Cleaner
// ============================================================
// Turns raw review text into a sequence of lemmatized,
// lowercase, purely alphabetic word tokens.
//
// Why do we need to clean text?
//   Scraped reviews often contain:
//   - HTML markup such as <br /> and <b>...</b>
//   - Links to other pages
//   - Emoji and other pictographs
//   - Punctuation, digits and symbols
//
// None of these carry meaning for a bag-of-words classifier,
// and every variant would waste a vocabulary slot.
//
// Cleaning steps (applied in order):
//   1. Remove HTML tags            <.*?>
//   2. Remove URLs                 http:// or https://
//   3. Remove punctuation          anything not word or space
//   4. Remove emoji                fixed code-point ranges
//   5. Non-letters → space         [^a-zA-Z]
//   6. Lowercase, split on whitespace
//   7. Lemmatize every word
//
// URL removal has to run before punctuation removal: once the
// ":" and "/" are gone, "http://x.com" is just "httpxcom" and
// no URL pattern can match it any more.
//
// Reference: regex crate documentation
//            Rust Book §8 (Strings in Rust)

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::lemmatizer::{Lemmatizer, RuleLemmatizer};
use crate::domain::error::PrepResult;
use crate::domain::record::CleanedRecord;

const HTML_TAG: &str = r"<.*?>";
const PUNCTUATION: &str = r"[^\w\s]";
const URL_AT_LINE_START: &str = r"(?im)^https?://.*[\r\n]*";
const URL_ANYWHERE: &str = r"(?i)https?://\S+";
const NON_ALPHA: &str = r"[^a-zA-Z]";
const EMOJI: &str = concat!(
    "[",
    r"\x{1F600}-\x{1F64F}",
    r"\x{1F300}-\x{1F5FF}",
    r"\x{1F680}-\x{1F6FF}",
    r"\x{1F1E0}-\x{1F1FF}",
    r"\x{2702}-\x{27B0}",
    r"\x{24C2}-\x{1F251}",
    "]+",
);

/// Which URLs the cleaner removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UrlPolicy {
    /// Only a URL that starts a line, together with the rest of that line
    LineStart,
    /// Every http(s) URL, wherever it appears
    #[default]
    Anywhere,
}

impl FromStr for UrlPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line-start" => Ok(Self::LineStart),
            "anywhere"   => Ok(Self::Anywhere),
            other => Err(format!("unknown url policy '{other}' (use line-start or anywhere)")),
        }
    }
}

impl fmt::Display for UrlPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineStart => f.write_str("line-start"),
            Self::Anywhere  => f.write_str("anywhere"),
        }
    }
}

pub struct TextCleaner {
    html:        Regex,
    url:         Regex,
    punctuation: Regex,
    emoji:       Regex,
    non_alpha:   Regex,
    lemmatizer:  Box<dyn Lemmatizer>,
}

impl TextCleaner {
    /// Compile the cleaning patterns. The lemmatizer is owned by the
    /// cleaner; pass `IdentityLemmatizer` to skip lemmatization.
    pub fn new(url_policy: UrlPolicy, lemmatizer: Box<dyn Lemmatizer>) -> PrepResult<Self> {
        let url = match url_policy {
            UrlPolicy::LineStart => URL_AT_LINE_START,
            UrlPolicy::Anywhere  => URL_ANYWHERE,
        };
        Ok(Self {
            html:        Regex::new(HTML_TAG)?,
            url:         Regex::new(url)?,
            punctuation: Regex::new(PUNCTUATION)?,
            emoji:       Regex::new(EMOJI)?,
            non_alpha:   Regex::new(NON_ALPHA)?,
            lemmatizer,
        })
    }

    /// Cleaner with inline URL removal and the rule lemmatizer
    pub fn with_defaults() -> PrepResult<Self> {
        Self::new(UrlPolicy::default(), Box::new(RuleLemmatizer::new()))
    }

    /// Clean one text into lemmatized lowercase tokens.
    /// Returns an empty Vec when nothing alphabetic is left.
    pub fn clean(&self, text: &str) -> Vec<String> {
        let text = self.html.replace_all(text, "");
        let text = self.url.replace_all(&text, "");
        let text = self.punctuation.replace_all(&text, "");
        let text = self.emoji.replace_all(&text, "");
        let text = self.non_alpha.replace_all(&text, " ");

        text.to_lowercase()
            .split_whitespace()
            .map(|word| self.lemmatizer.lemmatize(word))
            .collect()
    }

    pub fn clean_record(&self, text: &str) -> CleanedRecord {
        CleanedRecord::new(self.clean(text))
    }

    /// Clean a whole corpus. Records are independent, so `parallel`
    /// spreads them over the rayon pool; output order matches input.
    pub fn clean_all<S>(&self, texts: &[S], parallel: bool) -> Vec<CleanedRecord>
    where
        S: AsRef<str> + Sync,
    {
        if parallel {
            texts.par_iter().map(|t| self.clean_record(t.as_ref())).collect()
        } else {
            texts.iter().map(|t| self.clean_record(t.as_ref())).collect()
        }
    }
}

impl fmt::Debug for TextCleaner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextCleaner")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::lemmatizer::IdentityLemmatizer;
    use test_case::test_case;

    fn cleaner() -> TextCleaner {
        TextCleaner::with_defaults().unwrap()
    }

    fn is_clean_token(t: &str) -> bool {
        !t.is_empty() && t.chars().all(|c| c.is_ascii_lowercase())
    }

    #[test]
    fn test_html_and_punctuation() {
        assert_eq!(
            cleaner().clean("I LOVE this!!! <b>great</b>"),
            vec!["i", "love", "this", "great"]
        );
    }

    #[test]
    fn test_inline_url_removed() {
        assert_eq!(
            cleaner().clean("Terrible, worst ever http://x.com"),
            vec!["terrible", "worst", "ever"]
        );
    }

    #[test]
    fn test_url_scheme_is_case_insensitive() {
        assert_eq!(cleaner().clean("see HTTP://X.COM now"), vec!["see", "now"]);
        let c = TextCleaner::new(UrlPolicy::LineStart, Box::new(IdentityLemmatizer)).unwrap();
        assert_eq!(c.clean("Https://A.io/x\nnice plot"), vec!["nice", "plot"]);
    }

    #[test]
    fn test_contraction_is_not_treated_as_plural() {
        assert_eq!(cleaner().clean("she's here"), vec!["she", "here"]);
    }

    #[test]
    fn test_line_start_policy_only_strips_leading_urls() {
        let c = TextCleaner::new(UrlPolicy::LineStart, Box::new(IdentityLemmatizer)).unwrap();
        assert_eq!(c.clean("https://a.io/x?q=1\nnice plot"), vec!["nice", "plot"]);
        // An inline URL survives the URL step and is flattened by the
        // punctuation step instead.
        assert_eq!(c.clean("see http://x.com"), vec!["see", "httpxcom"]);
    }

    #[test]
    fn test_emoji_removed_without_splitting_words() {
        assert_eq!(cleaner().clean("good😀day 🚀"), vec!["goodday"]);
    }

    #[test]
    fn test_digits_become_separators() {
        assert_eq!(cleaner().clean("top10movie"), vec!["top", "movie"]);
    }

    #[test]
    fn test_lemmatizes_tokens() {
        assert_eq!(cleaner().clean("Great FILMS and stories"), vec!["great", "film", "and", "story"]);
    }

    #[test_case(""; "empty")]
    #[test_case("   \n\t "; "whitespace")]
    #[test_case("1234 !!! ???"; "digits and punctuation")]
    #[test_case("<p></p>"; "only markup")]
    #[test_case("🎉🎉"; "only emoji")]
    fn test_no_alphabetic_content_gives_empty(text: &str) {
        assert!(cleaner().clean(text).is_empty());
    }

    #[test]
    fn test_output_is_lowercase_alphabetic() {
        let samples = [
            "<div class=\"x\">Hello, World!</div> 42 times",
            "Ünïcödé café — naïve résumé",
            "https://example.com starts here\nthen line_two with under_scores",
            "tabs\tand\r\nnewlines ☂ ✈ Ⓜ",
        ];
        let c = cleaner();
        for s in samples {
            for tok in c.clean(s) {
                assert!(is_clean_token(&tok), "unexpected token {tok:?} from {s:?}");
            }
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let texts: Vec<String> = (0..64).map(|i| format!("Review {i}: <i>Loved</i> the movies!")).collect();
        let c = cleaner();
        assert_eq!(c.clean_all(&texts, true), c.clean_all(&texts, false));
    }

    #[test]
    fn test_url_policy_parses() {
        assert_eq!("line-start".parse::<UrlPolicy>(), Ok(UrlPolicy::LineStart));
        assert_eq!("anywhere".parse::<UrlPolicy>(), Ok(UrlPolicy::Anywhere));
        assert!("inline".parse::<UrlPolicy>().is_err());
    }
}
