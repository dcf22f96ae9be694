use rayon::prelude::*;
use serde::Serialize;

use log::debug;

use crate::config::AssistConfig;
use crate::corrector::Corrector;
use crate::error::ConfigError;
use crate::trie::PrefixIndex;

/// What to show for one input line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InputSuggestions {
    /// The last whitespace-delimited token of the line.
    pub token: String,
    pub completions: Vec<String>,
    pub corrections: Vec<String>,
}

impl InputSuggestions {
    pub fn is_empty(&self) -> bool {
        self.completions.is_empty() && self.corrections.is_empty()
    }
}

/// The last whitespace-delimited token of `text`, or `""` if there is none.
pub fn active_token(text: &str) -> &str {
    text.split_whitespace().next_back().unwrap_or("")
}

/// Routes raw input lines to the prefix index and the corrector.
#[derive(Debug)]
pub struct InputRouter {
    prefix_index: PrefixIndex,
    corrector: Corrector,
    config: AssistConfig,
}

impl InputRouter {
    /// Fails if `config` is invalid or its `max_edit_distance` differs from
    /// the one `corrector` was built with.
    pub fn new(
        prefix_index: PrefixIndex,
        corrector: Corrector,
        config: AssistConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        if config.max_edit_distance != corrector.max_edit_distance() {
            return Err(ConfigError::EditDistanceMismatch {
                config: config.max_edit_distance,
                corrector: corrector.max_edit_distance(),
            });
        }
        Ok(InputRouter {
            prefix_index,
            corrector,
            config,
        })
    }

    /// Builds both indexes from the same word list.
    pub fn from_vocabulary<S>(vocabulary: &[S], config: AssistConfig) -> Result<Self, ConfigError>
    where
        S: AsRef<str>,
    {
        let corrector = Corrector::new(vocabulary, config.max_edit_distance)?;
        let prefix_index = PrefixIndex::from_words(vocabulary);
        Self::new(prefix_index, corrector, config)
    }

    pub fn prefix_index(&self) -> &PrefixIndex {
        &self.prefix_index
    }

    pub fn corrector(&self) -> &Corrector {
        &self.corrector
    }

    pub fn config(&self) -> &AssistConfig {
        &self.config
    }

    /// Completions and corrections for the active token of `text`.
    ///
    /// `None` when the line is blank. Correction only runs once the token is
    /// long enough and the raw line does not end in a space, since a trailing
    /// space means the user already accepted the word.
    pub fn handle_input(&self, text: &str) -> Option<InputSuggestions> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let token = active_token(trimmed);
        let completions = self
            .prefix_index
            .get_prefix_matches(token, self.config.completion_limit);

        let long_enough = token.chars().count() >= self.config.min_word_length_for_correction;
        let corrections = if long_enough && !text.ends_with(' ') {
            self.corrector.suggest(token, self.config.correction_top_k)
        } else {
            debug!(
                "skipping correction for '{}' (long enough: {}, trailing space: {})",
                token,
                long_enough,
                text.ends_with(' ')
            );
            Vec::new()
        };

        Some(InputSuggestions {
            token: token.to_string(),
            completions,
            corrections,
        })
    }

    /// [`handle_input`](Self::handle_input) for many lines in parallel,
    /// results in input order.
    pub fn handle_many<S>(&self, lines: &[S]) -> Vec<Option<InputSuggestions>>
    where
        S: AsRef<str> + Sync,
    {
        lines
            .par_iter()
            .map(|line| self.handle_input(line.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SAMPLE_VOCABULARY;

    fn router() -> InputRouter {
        InputRouter::from_vocabulary(&SAMPLE_VOCABULARY, AssistConfig::default()).unwrap()
    }

    #[test]
    fn test_active_token() {
        assert_eq!(active_token("deep neural netw"), "netw");
        assert_eq!(active_token("the "), "the");
        assert_eq!(active_token("  data\t"), "data");
        assert_eq!(active_token("   "), "");
        assert_eq!(active_token(""), "");
    }

    #[test]
    fn test_blank_input_gives_nothing() {
        let router = router();
        assert_eq!(router.handle_input(""), None);
        assert_eq!(router.handle_input("  \t "), None);
    }

    #[test]
    fn test_misspelled_token_corrected() {
        let router = router();
        let result = router.handle_input("neurla").unwrap();
        assert_eq!(result.token, "neurla");
        assert!(result.completions.is_empty());
        assert!(result.corrections.len() <= 3);
        assert!(result.corrections.contains(&"neural".to_string()));
    }

    #[test]
    fn test_prefix_completed_on_last_token() {
        let router = router();
        let result = router.handle_input("deep ma").unwrap();
        assert_eq!(result.token, "ma");
        assert_eq!(
            result.completions,
            vec!["macbook", "machine", "marching", "marine"]
        );
        // too short to correct
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_trailing_space_suppresses_correction() {
        let router = router();
        let typed = router.handle_input("deep lerning").unwrap();
        assert_eq!(typed.corrections, vec!["learning"]);

        let accepted = router.handle_input("deep lerning ").unwrap();
        assert_eq!(accepted.token, "lerning");
        assert!(accepted.corrections.is_empty());

        let the = router.handle_input("the ").unwrap();
        assert_eq!(the.token, "the");
        assert!(the.corrections.is_empty());
    }

    #[test]
    fn test_known_word_completes_but_is_not_corrected() {
        let router = router();
        let result = router.handle_input("Neuron").unwrap();
        assert_eq!(result.completions, vec!["neuron"]);
        assert!(result.corrections.is_empty());
    }

    #[test]
    fn test_completion_limit_from_config() {
        let config = AssistConfig {
            completion_limit: 2,
            ..AssistConfig::default()
        };
        let router = InputRouter::from_vocabulary(&SAMPLE_VOCABULARY, config).unwrap();
        let result = router.handle_input("m").unwrap();
        assert_eq!(result.completions, vec!["macbook", "machine"]);
    }

    #[test]
    fn test_min_word_length_from_config() {
        let config = AssistConfig {
            min_word_length_for_correction: 8,
            ..AssistConfig::default()
        };
        let router = InputRouter::from_vocabulary(&SAMPLE_VOCABULARY, config).unwrap();
        assert!(router.handle_input("neurla").unwrap().corrections.is_empty());
        assert_eq!(
            router.handle_input("procesing").unwrap().corrections,
            vec!["processing"]
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AssistConfig {
            max_edit_distance: 7,
            ..AssistConfig::default()
        };
        assert!(InputRouter::from_vocabulary(&SAMPLE_VOCABULARY, config).is_err());
        assert!(
            InputRouter::new(
                PrefixIndex::new(),
                Corrector::with_default_distance(SAMPLE_VOCABULARY),
                config
            )
            .is_err()
        );
    }

    #[test]
    fn test_corrector_distance_must_match_config() {
        let corrector = Corrector::new(SAMPLE_VOCABULARY, 1).unwrap();
        let err = InputRouter::new(PrefixIndex::new(), corrector, AssistConfig::default())
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::EditDistanceMismatch {
                config: 2,
                corrector: 1
            }
        ));

        let config = AssistConfig {
            max_edit_distance: 1,
            ..AssistConfig::default()
        };
        let corrector = Corrector::new(SAMPLE_VOCABULARY, 1).unwrap();
        let router = InputRouter::new(PrefixIndex::from_words(SAMPLE_VOCABULARY), corrector, config)
            .unwrap();
        assert_eq!(router.config().max_edit_distance, router.corrector().max_edit_distance());
    }

    #[test]
    fn test_handle_many_preserves_order() {
        let router = router();
        let lines = ["", "neurla", "deep ma"];
        let results = router.handle_many(&lines);
        assert_eq!(results.len(), 3);
        assert!(results[0].is_none());
        assert_eq!(results[1].as_ref().unwrap().token, "neurla");
        assert_eq!(results[2].as_ref().unwrap().token, "ma");
    }

    #[test]
    fn test_suggestions_serialize() {
        let router = router();
        let result = router.handle_input("netwok").unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"token":"netwok","completions":[],"corrections":["network"]}"#
        );
    }
}
