// File: src/core/engine.rs
use crate::config::AnalyzerConfig;
use crate::core::alphabet::{CaseMode, ReferenceTable};
use crate::core::frequency::{analyze_frequency, suggest_replacements};
use crate::core::grouping::{group_words_by_length, group_words_by_unknown_letters};
use crate::core::history::RuleHistory;
use crate::core::types::{FrequencyMap, SubstitutionRule, WordGroups};
use log::{debug, info};

/// Rewrites a fresh copy of `ciphertext` with every rule in list order.
/// Each rule is a full pass over the working buffer, so a later rule also
/// rewrites letters produced by earlier ones.
/// O(len(ciphertext) * len(rules)).
pub fn apply_rules(ciphertext: &str, rules: &[SubstitutionRule]) -> String {
    let mut buffer: Vec<char> = ciphertext.chars().collect();
    for rule in rules {
        for c in buffer.iter_mut().filter(|c| **c == rule.from) {
            *c = rule.to;
        }
    }
    buffer.into_iter().collect()
}

/// One analyzer per cracking session. The ciphertext never changes; the
/// decrypted text is always recomputed from it and the current rule list.
pub struct CryptoAnalyzer {
    ciphertext: String,
    decrypted_text: String,
    rules: Vec<SubstitutionRule>,
    history: RuleHistory,
    config: AnalyzerConfig,
}

impl CryptoAnalyzer {
    pub fn new(ciphertext: &str) -> Self {
        Self::with_config(ciphertext, AnalyzerConfig::default())
    }

    pub fn with_config(ciphertext: &str, config: AnalyzerConfig) -> Self {
        Self {
            ciphertext: ciphertext.to_string(),
            decrypted_text: ciphertext.to_string(),
            rules: Vec::new(),
            history: RuleHistory::new(),
            config,
        }
    }

    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub fn decrypted_text(&self) -> &str {
        &self.decrypted_text
    }

    /// Current rules in application order.
    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    /// Number of undo steps available.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn reference(&self) -> &ReferenceTable {
        &self.config.reference
    }

    pub fn case_mode(&self) -> CaseMode {
        self.config.case_mode
    }

    /// Letter counts of the ciphertext.
    pub fn analyze_frequency(&self) -> FrequencyMap {
        analyze_frequency(&self.ciphertext, self.config.case_mode)
    }

    /// Frequency-ranked guesses, most frequent pairing first.
    pub fn suggest_replacements(&self) -> Vec<SubstitutionRule> {
        suggest_replacements(&self.ciphertext, &self.config.reference, self.config.case_mode)
    }

    pub fn group_words_by_length(&self) -> WordGroups {
        group_words_by_length(&self.ciphertext)
    }

    /// Groups words of the decrypted text by placeholder count.
    pub fn group_words_by_unknown_letters(&self) -> WordGroups {
        group_words_by_unknown_letters(&self.decrypted_text)
    }

    /// Appends `from -> to` to the rule list. Always consumes one undo slot,
    /// even when the rule changes nothing.
    pub fn replace(&mut self, from: char, to: char) {
        self.history.record(&self.rules);
        self.rules.push(SubstitutionRule::new(from, to));
        debug!("rule {} -> {} added, {} rules active", from, to, self.rules.len());
        self.refresh();
    }

    /// Restores the rule list saved by the last `replace`. No-op on empty history.
    pub fn undo(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.rules = previous;
            debug!("undo, {} rules active", self.rules.len());
            self.refresh();
        } else {
            debug!("undo requested with empty history");
        }
    }

    /// Applies every suggestion computed from the original ciphertext, one
    /// `replace` per suggestion.
    pub fn auto_replace(&mut self) {
        let suggestions = self.suggest_replacements();
        info!("auto-replacing {} letters", suggestions.len());
        for rule in suggestions {
            self.replace(rule.from, rule.to);
        }
    }

    fn refresh(&mut self) {
        self.decrypted_text = apply_rules(&self.ciphertext, &self.rules);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_analyzer_shows_ciphertext() {
        let analyzer = CryptoAnalyzer::new("ШЙ ЬЙЛБ");
        assert_eq!(analyzer.decrypted_text(), "ШЙ ЬЙЛБ");
        assert!(analyzer.rules().is_empty());
        assert_eq!(analyzer.history_depth(), 0);
    }

    #[test]
    fn replace_then_undo() {
        let mut analyzer = CryptoAnalyzer::new("АБ");
        analyzer.replace('А', 'Х');
        assert_eq!(analyzer.decrypted_text(), "ХБ");
        analyzer.undo();
        assert_eq!(analyzer.decrypted_text(), "АБ");
        assert!(analyzer.rules().is_empty());
    }

    #[test]
    fn rules_chain_through_the_working_buffer() {
        let mut analyzer = CryptoAnalyzer::new("АБВ");
        analyzer.replace('А', 'Б');
        assert_eq!(analyzer.decrypted_text(), "ББВ");
        analyzer.replace('Б', 'В');
        assert_eq!(analyzer.decrypted_text(), "ВВВ");
    }

    #[test]
    fn later_rule_for_same_letter_sees_earlier_result() {
        let mut analyzer = CryptoAnalyzer::new("АА");
        analyzer.replace('А', 'о');
        analyzer.replace('А', 'е');
        // first pass already consumed every 'А'
        assert_eq!(analyzer.decrypted_text(), "оо");
    }

    #[test]
    fn undo_on_empty_history_is_noop() {
        let mut analyzer = CryptoAnalyzer::new("АБ");
        analyzer.undo();
        assert_eq!(analyzer.decrypted_text(), "АБ");
        assert_eq!(analyzer.history_depth(), 0);
    }

    #[test]
    fn self_replacement_still_uses_an_undo_slot() {
        let mut analyzer = CryptoAnalyzer::new("АБ");
        analyzer.replace('А', 'А');
        assert_eq!(analyzer.decrypted_text(), "АБ");
        assert_eq!(analyzer.history_depth(), 1);
        assert_eq!(analyzer.rules().len(), 1);
    }

    #[test]
    fn out_of_alphabet_rules_apply_literally() {
        let mut analyzer = CryptoAnalyzer::new("А, Б!");
        analyzer.replace(',', ';');
        analyzer.replace('Z', 'Я');
        assert_eq!(analyzer.decrypted_text(), "А; Б!");
    }

    #[test]
    fn unknown_grouping_reads_decrypted_text() {
        let mut analyzer = CryptoAnalyzer::new("КАТ АББ");
        analyzer.replace('А', '*');
        analyzer.replace('Б', '*');
        let groups = analyzer.group_words_by_unknown_letters();
        assert_eq!(groups[&1], vec!["К*Т"]);
        assert_eq!(groups[&3], vec!["***"]);
        // length grouping keeps reading the ciphertext
        assert_eq!(analyzer.group_words_by_length()[&3], vec!["КАТ", "АББ"]);
    }

    #[test]
    fn auto_replace_is_undone_step_by_step() {
        let mut analyzer = CryptoAnalyzer::new("ФФФ ООО Б");
        let suggestions = analyzer.suggest_replacements();
        analyzer.auto_replace();
        assert_eq!(analyzer.rules(), suggestions.as_slice());
        assert_eq!(analyzer.history_depth(), suggestions.len());

        for _ in 0..suggestions.len() {
            analyzer.undo();
        }
        assert!(analyzer.rules().is_empty());
        assert_eq!(analyzer.decrypted_text(), "ФФФ ООО Б");
    }

    #[test]
    fn manual_rules_stay_character_exact_when_folded() {
        let config = AnalyzerConfig {
            case_mode: CaseMode::Folded,
            ..AnalyzerConfig::default()
        };
        let mut analyzer = CryptoAnalyzer::with_config("Фф", config);
        assert_eq!(analyzer.case_mode(), CaseMode::Folded);
        assert_eq!(analyzer.analyze_frequency()[&'Ф'], 2);
        analyzer.replace('Ф', 'о');
        assert_eq!(analyzer.decrypted_text(), "оф");
    }

    #[test]
    fn folded_auto_replace_leaves_no_cipher_letter_behind() {
        let config = AnalyzerConfig {
            case_mode: CaseMode::Folded,
            ..AnalyzerConfig::default()
        };
        let mut analyzer = CryptoAnalyzer::with_config("ФфФ оО", config);
        let suggestions = analyzer.suggest_replacements();
        analyzer.auto_replace();

        // Ф ranks first (3) and becomes 'о'; О ranks second and becomes 'е'
        assert_eq!(analyzer.decrypted_text(), "ооо ее");
        assert_eq!(analyzer.history_depth(), suggestions.len());

        for _ in 0..suggestions.len() {
            analyzer.undo();
        }
        assert_eq!(analyzer.decrypted_text(), "ФфФ оО");
    }
}
