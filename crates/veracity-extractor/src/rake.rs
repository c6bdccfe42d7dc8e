//! Core RAKE implementation

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::stopwords::ENGLISH_STOPWORDS;
use crate::tokenize::{tokenize, Token};
use crate::types::RankedPhrase;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};
use veracity_domain::traits::TopicExtractor;
use veracity_domain::TopicList;

/// Topic extractor ranking phrases by word co-occurrence
#[derive(Debug, Clone)]
pub struct RakeExtractor {
    config: ExtractorConfig,
    stopwords: HashSet<String>,
}

impl RakeExtractor {
    /// Create a new extractor
    ///
    /// # Errors
    /// Returns [`ExtractorError::Config`] if the configuration is invalid
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate()?;

        let stopwords = ENGLISH_STOPWORDS
            .iter()
            .map(|w| w.to_string())
            .chain(config.extra_stopwords.iter().map(|w| w.to_lowercase()))
            .collect();

        Ok(Self { config, stopwords })
    }

    /// Get the active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Rank every distinct candidate phrase, best first
    ///
    /// Ties are broken by phrase text in descending order so the ranking is
    /// deterministic.
    pub fn ranked_phrases(&self, text: &str) -> Vec<RankedPhrase> {
        let text = self.truncate(text);
        let phrases = self.candidate_phrases(text);

        let mut frequency: HashMap<&str, usize> = HashMap::new();
        let mut degree: HashMap<&str, usize> = HashMap::new();
        for phrase in &phrases {
            for word in phrase {
                *frequency.entry(word.as_str()).or_default() += 1;
                *degree.entry(word.as_str()).or_default() += phrase.len();
            }
        }

        let mut seen = HashSet::new();
        let mut ranked = Vec::new();
        for phrase in &phrases {
            let joined = phrase.join(" ");
            if !seen.insert(joined.clone()) {
                continue;
            }
            let score = phrase
                .iter()
                .map(|w| degree[w.as_str()] as f64 / frequency[w.as_str()] as f64)
                .sum();
            ranked.push(RankedPhrase {
                phrase: joined,
                score,
            });
        }

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| b.phrase.cmp(&a.phrase))
        });

        debug!("Ranked {} candidate phrases", ranked.len());
        ranked
    }

    /// Split text into candidate phrases at stop-words and boundaries
    fn candidate_phrases(&self, text: &str) -> Vec<Vec<String>> {
        let mut phrases = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for token in tokenize(text) {
            match token {
                Token::Word(word) if self.is_content_word(&word) => current.push(word),
                _ => self.close_phrase(&mut current, &mut phrases),
            }
        }
        self.close_phrase(&mut current, &mut phrases);

        phrases
    }

    /// Runs longer than `max_phrase_words` are cut into consecutive chunks
    fn close_phrase(&self, current: &mut Vec<String>, phrases: &mut Vec<Vec<String>>) {
        if current.is_empty() {
            return;
        }
        let run = std::mem::take(current);
        phrases.extend(
            run.chunks(self.config.max_phrase_words)
                .filter(|chunk| chunk.len() >= self.config.min_phrase_words)
                .map(<[String]>::to_vec),
        );
    }

    /// Words without any letter (numbers, underscores) also split phrases
    fn is_content_word(&self, word: &str) -> bool {
        !self.stopwords.contains(word) && word.chars().any(char::is_alphabetic)
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.config.max_text_length) {
            Some((idx, _)) => {
                warn!(
                    "Input exceeds {} chars, ignoring the remainder",
                    self.config.max_text_length
                );
                &text[..idx]
            }
            None => text,
        }
    }
}

impl Default for RakeExtractor {
    fn default() -> Self {
        let config = ExtractorConfig::default();
        let stopwords = ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect();
        Self { config, stopwords }
    }
}

impl TopicExtractor for RakeExtractor {
    fn extract_topics(&self, text: &str) -> TopicList {
        let topics = TopicList::from_ranked(
            self.ranked_phrases(text)
                .into_iter()
                .take(self.config.max_topics)
                .map(|p| p.phrase),
        );
        debug!("Extracted topics: {:?}", topics.as_slice());
        topics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_follow_degree_over_frequency() {
        let extractor = RakeExtractor::default();
        let ranked = extractor.ranked_phrases("Mount Everest is the tallest mountain");

        assert_eq!(ranked.len(), 2);
        // Both phrases have two words seen once: 2/1 + 2/1
        assert_eq!(ranked[0].score, 4.0);
        assert_eq!(ranked[1].score, 4.0);
        // Tie broken by descending phrase text
        assert_eq!(ranked[0].phrase, "tallest mountain");
        assert_eq!(ranked[1].phrase, "mount everest");
    }

    #[test]
    fn test_longer_phrases_rank_higher() {
        let extractor = RakeExtractor::default();
        let ranked = extractor.ranked_phrases("The Great Wall of China is visible from space");

        assert_eq!(ranked[0].phrase, "great wall");
        assert_eq!(ranked[0].score, 4.0);
        let rest: Vec<_> = ranked[1..].iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(rest, vec!["visible", "space", "china"]);
    }

    #[test]
    fn test_repeated_words_share_degree() {
        let extractor = RakeExtractor::default();
        let ranked = extractor.ranked_phrases("solar eclipse. eclipse season");

        // eclipse: freq 2, degree 4 -> 2.0; solar: 2/1; season: 2/1
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|p| p.score == 4.0));
    }

    #[test]
    fn test_duplicate_phrases_collapse() {
        let extractor = RakeExtractor::default();
        let ranked = extractor.ranked_phrases("Earth. Earth. Earth.");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].phrase, "earth");
    }

    #[test]
    fn test_numbers_split_phrases() {
        let extractor = RakeExtractor::default();
        let ranked = extractor.ranked_phrases("Everest 8849 metres");
        let phrases: Vec<_> = ranked.iter().map(|p| p.phrase.as_str()).collect();
        assert!(phrases.contains(&"everest"));
        assert!(phrases.contains(&"metres"));
        assert!(!phrases.iter().any(|p| p.contains("8849")));
    }

    #[test]
    fn test_long_run_kept_whole_by_default() {
        let extractor = RakeExtractor::default();
        let topics =
            extractor.extract_topics("Albert Einstein developed general relativity theory");
        assert_eq!(
            topics.as_slice(),
            &["albert einstein developed general relativity theory"]
        );
    }

    #[test]
    fn test_max_phrase_words_splits_long_runs() {
        let config = ExtractorConfig {
            max_phrase_words: 2,
            ..ExtractorConfig::default()
        };
        let extractor = RakeExtractor::new(config).unwrap();
        let ranked = extractor.ranked_phrases("large hadron collider experiment results");
        let phrases: Vec<_> = ranked.iter().map(|p| p.phrase.as_str()).collect();
        assert_eq!(
            phrases,
            vec!["large hadron", "collider experiment", "results"]
        );
    }

    #[test]
    fn test_split_remainder_below_minimum_dropped() {
        let config = ExtractorConfig {
            min_phrase_words: 2,
            max_phrase_words: 2,
            ..ExtractorConfig::default()
        };
        let extractor = RakeExtractor::new(config).unwrap();
        let ranked = extractor.ranked_phrases("large hadron collider");
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].phrase, "large hadron");
    }

    #[test]
    fn test_extra_stopwords() {
        let config = ExtractorConfig {
            extra_stopwords: vec!["Tallest".to_string()],
            ..ExtractorConfig::default()
        };
        let extractor = RakeExtractor::new(config).unwrap();
        let topics = extractor.extract_topics("Mount Everest is the tallest mountain");
        assert_eq!(topics.as_slice(), &["mount everest", "mountain"]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExtractorConfig {
            max_topics: 0,
            ..ExtractorConfig::default()
        };
        assert!(RakeExtractor::new(config).is_err());
    }

    #[test]
    fn test_text_truncated_to_max_length() {
        let config = ExtractorConfig {
            max_text_length: 5,
            ..ExtractorConfig::default()
        };
        let extractor = RakeExtractor::new(config).unwrap();
        let topics = extractor.extract_topics("Earth revolves around the Sun");
        assert_eq!(topics.as_slice(), &["earth"]);
    }
}
