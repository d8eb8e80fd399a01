// ============================================================
// Layer 4 - Vocabulary Tokenizer
// ============================================================
// Builds a bounded word-level vocabulary from the cleaned corpus
// and maps token sequences to integer ids.
//
// Id layout:
//   0            padding (never assigned to a word)
//   1            out-of-vocabulary token, e.g. "<OOV>"
//   2, 3, ...    the vocab_size - 1 most frequent words,
//                most frequent first
//
// Frequency ties keep first-seen order, so fitting twice on the
// same corpus always gives the same mapping.
//
// The fitted word index is wrapped in a HuggingFace WordLevel
// model with the OOV token as its unknown token. Encoding goes
// through that tokenizer, so an unseen word resolves to the OOV
// id inside the model rather than in our own code.
//
// Reference: tokenizers crate documentation (WordLevel model)

use std::collections::HashMap;
use std::fmt;

use tokenizers::models::wordlevel::WordLevel;
use tokenizers::Tokenizer;

use crate::domain::error::{PrepError, PrepResult};

pub const PAD_ID: u32 = 0;
pub const OOV_ID: u32 = 1;
pub const DEFAULT_OOV_TOKEN: &str = "<OOV>";

/// Immutable token → id mapping produced by `VocabTokenizer::fit`.
pub struct Vocabulary {
    word_index:  HashMap<String, u32>,
    /// Retained words with their corpus counts, in id order
    word_counts: Vec<(String, usize)>,
    oov_token:   String,
    tokenizer:   Tokenizer,
}

impl Vocabulary {
    /// Count, rank and truncate the corpus vocabulary.
    pub fn fit<T: AsRef<[String]>>(
        corpus:     &[T],
        vocab_size: usize,
        oov_token:  &str,
    ) -> PrepResult<Self> {
        if vocab_size < 2 {
            return Err(PrepError::InvalidConfig(format!(
                "vocab_size must be at least 2 (got {vocab_size})"
            )));
        }

        // ── Step 1: Count word frequencies in first-seen order ──────────────
        let mut position: HashMap<&str, usize> = HashMap::new();
        let mut counts: Vec<(&str, usize)> = Vec::new();

        for tokens in corpus {
            for tok in tokens.as_ref() {
                if tok == oov_token {
                    continue;
                }
                match position.get(tok.as_str()) {
                    Some(&i) => counts[i].1 += 1,
                    None => {
                        position.insert(tok.as_str(), counts.len());
                        counts.push((tok.as_str(), 1));
                    }
                }
            }
        }

        // ── Step 2: Rank by frequency, keep the top vocab_size - 1 ──────────
        // sort_by is stable, so equal counts stay in first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(vocab_size - 1);

        // ── Step 3: Assign ids ───────────────────────────────────────────────
        let mut word_index: HashMap<String, u32> = HashMap::with_capacity(counts.len() + 1);
        word_index.insert(oov_token.to_string(), OOV_ID);

        let word_counts: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(w, c)| (w.to_string(), c))
            .collect();
        for (i, (word, _)) in word_counts.iter().enumerate() {
            word_index.insert(word.clone(), OOV_ID + 1 + i as u32);
        }

        let model = WordLevel::builder()
            .vocab(word_index.clone())
            .unk_token(oov_token.to_string())
            .build()
            .map_err(|e| PrepError::Tokenizer(e.to_string()))?;

        tracing::info!(
            "Vocabulary fitted: {} words + OOV '{}' (cap {})",
            word_counts.len(),
            oov_token,
            vocab_size
        );

        Ok(Self {
            word_index,
            word_counts,
            oov_token: oov_token.to_string(),
            tokenizer: Tokenizer::new(model),
        })
    }

    /// Number of entries including the OOV token (padding not counted)
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    /// True when only the OOV token is present (empty corpus)
    pub fn is_empty(&self) -> bool {
        self.word_counts.is_empty()
    }

    pub fn oov_token(&self) -> &str {
        &self.oov_token
    }

    pub fn id_of(&self, token: &str) -> Option<u32> {
        self.word_index.get(token).copied()
    }

    pub fn token_of(&self, id: u32) -> Option<&str> {
        match id {
            PAD_ID => None,
            OOV_ID => Some(&self.oov_token),
            _ => self
                .word_counts
                .get((id - OOV_ID - 1) as usize)
                .map(|(w, _)| w.as_str()),
        }
    }

    pub fn word_counts(&self) -> &[(String, usize)] {
        &self.word_counts
    }

    pub fn word_index(&self) -> &HashMap<String, u32> {
        &self.word_index
    }

    /// Map tokens to ids; unknown tokens become the OOV id.
    pub fn transform(&self, tokens: &[String]) -> PrepResult<Vec<u32>> {
        if tokens.is_empty() {
            return Ok(Vec::new());
        }
        let encoding = self
            .tokenizer
            .encode(tokens, false)
            .map_err(|e| PrepError::Tokenizer(e.to_string()))?;
        Ok(encoding.get_ids().to_vec())
    }
}

impl fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocabulary")
            .field("len", &self.len())
            .field("oov_token", &self.oov_token)
            .finish()
    }
}

/// Fitting settings: the vocabulary cap and the OOV placeholder.
#[derive(Debug, Clone)]
pub struct VocabTokenizer {
    vocab_size: usize,
    oov_token:  String,
}

impl VocabTokenizer {
    pub fn new(vocab_size: usize, oov_token: impl Into<String>) -> Self {
        Self { vocab_size, oov_token: oov_token.into() }
    }

    pub fn fit<T: AsRef<[String]>>(&self, corpus: &[T]) -> PrepResult<Vocabulary> {
        Vocabulary::fit(corpus, self.vocab_size, &self.oov_token)
    }

    pub fn transform(&self, tokens: &[String], vocab: &Vocabulary) -> PrepResult<Vec<u32>> {
        vocab.transform(tokens)
    }

    pub fn transform_all<T: AsRef<[String]>>(
        &self,
        corpus: &[T],
        vocab:  &Vocabulary,
    ) -> PrepResult<Vec<Vec<u32>>> {
        corpus.iter().map(|t| vocab.transform(t.as_ref())).collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn corpus() -> Vec<Vec<String>> {
        vec![
            toks("the movie was good"),
            toks("the plot was bad"),
            toks("the end"),
        ]
    }

    #[test]
    fn test_ids_follow_frequency_then_first_seen() {
        let v = Vocabulary::fit(&corpus(), 100, DEFAULT_OOV_TOKEN).unwrap();
        assert_eq!(v.id_of("<OOV>"), Some(1));
        assert_eq!(v.id_of("the"), Some(2)); // 3 occurrences
        assert_eq!(v.id_of("was"), Some(3)); // 2 occurrences
        assert_eq!(v.id_of("movie"), Some(4)); // first of the singletons
        assert_eq!(v.id_of("good"), Some(5));
        assert_eq!(v.id_of("end"), Some(8));
    }

    #[test]
    fn test_cap_keeps_vocab_size_minus_one_words() {
        let v = Vocabulary::fit(&corpus(), 3, DEFAULT_OOV_TOKEN).unwrap();
        assert_eq!(v.word_counts().len(), 2);
        assert_eq!(v.len(), 3);
        assert_eq!(v.id_of("the"), Some(2));
        assert_eq!(v.id_of("was"), Some(3));
        assert_eq!(v.id_of("movie"), None);
    }

    #[test]
    fn test_transform_maps_unknown_to_oov() {
        let v = Vocabulary::fit(&corpus(), 3, DEFAULT_OOV_TOKEN).unwrap();
        let ids = v.transform(&toks("the movie was unseen")).unwrap();
        assert_eq!(ids, vec![2, OOV_ID, 3, OOV_ID]);
    }

    #[test]
    fn test_refit_is_identical() {
        let a = Vocabulary::fit(&corpus(), 5, DEFAULT_OOV_TOKEN).unwrap();
        let b = Vocabulary::fit(&corpus(), 5, DEFAULT_OOV_TOKEN).unwrap();
        assert_eq!(a.word_index(), b.word_index());
    }

    #[test]
    fn test_top_tokens_get_non_zero_non_oov_ids() {
        let v = Vocabulary::fit(&corpus(), 4, DEFAULT_OOV_TOKEN).unwrap();
        for (word, _) in v.word_counts() {
            let id = v.transform(&[word.clone()]).unwrap()[0];
            assert_ne!(id, PAD_ID);
            assert_ne!(id, OOV_ID);
            assert_eq!(v.token_of(id), Some(word.as_str()));
        }
    }

    #[test]
    fn test_empty_corpus_has_only_oov() {
        let empty: Vec<Vec<String>> = Vec::new();
        let v = Vocabulary::fit(&empty, 10, DEFAULT_OOV_TOKEN).unwrap();
        assert!(v.is_empty());
        assert_eq!(v.len(), 1);
        assert_eq!(v.transform(&toks("anything at all")).unwrap(), vec![1, 1, 1]);
        assert!(v.transform(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_oov_string_in_corpus_is_not_a_word() {
        let c = vec![toks("<OOV> <OOV> hello")];
        let v = Vocabulary::fit(&c, 10, DEFAULT_OOV_TOKEN).unwrap();
        assert_eq!(v.id_of("<OOV>"), Some(OOV_ID));
        assert_eq!(v.id_of("hello"), Some(2));
    }

    #[test]
    fn test_vocab_size_below_two_rejected() {
        assert!(matches!(
            Vocabulary::fit(&corpus(), 1, DEFAULT_OOV_TOKEN),
            Err(PrepError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_tokenizer_wrapper_transform_all() {
        let tok = VocabTokenizer::new(10, "<UNK>");
        let vocab = tok.fit(&corpus()).unwrap();
        let all = tok.transform_all(&corpus(), &vocab).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2], vec![2, vocab.id_of("end").unwrap()]);
        assert_eq!(vocab.oov_token(), "<UNK>");
    }
}
