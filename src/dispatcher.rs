//! Pattern dispatcher (spec §4.3): classifies a request message into one of
//! nine pattern families by testing word-boundary predicates **in listed
//! order**; the first match wins. Order encodes precedence and must not be
//! reordered — P2 before P3 before P4, etc.

use crate::keywords::{
    any_of, multi_count, tokenize, CARD_KEYWORDS, CHART_KEYWORDS, COMPONENT_KEYWORDS,
    DELAYED_KEYWORDS, LLM_KEYWORDS, LOADING_KEYWORDS, TABLE_KEYWORDS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    LlmPlan,
    SingleDelayedCard,
    MultiDelayedCards,
    MultiNormalCards,
    SingleNormalCard,
    IncrementalCard,
    Tables,
    Charts,
    Default,
}

/// Resolves the multi-count keyword in `message`, if any — shared by
/// callers that need the same count `classify` used to pick
/// [`Pattern::MultiNormalCards`] or [`Pattern::MultiDelayedCards`].
pub fn count_for(message: &str) -> Option<usize> {
    multi_count(&tokenize(message))
}

/// Classifies `message`. Deterministic given the same input (spec T8).
pub fn classify(message: &str) -> Pattern {
    let tokens = tokenize(message);

    // P0: LLM plan.
    if any_of(&tokens, LLM_KEYWORDS) {
        return Pattern::LlmPlan;
    }

    let has_delayed = any_of(&tokens, DELAYED_KEYWORDS);
    let has_card = any_of(&tokens, CARD_KEYWORDS);
    let has_component = any_of(&tokens, COMPONENT_KEYWORDS);
    let has_table_kw = any_of(&tokens, TABLE_KEYWORDS);
    let has_chart_kw = any_of(&tokens, CHART_KEYWORDS);
    let count = multi_count(&tokens);

    // P1: single delayed card.
    if has_delayed && has_card && count.is_none() {
        return Pattern::SingleDelayedCard;
    }

    // P2: multi delayed cards.
    if has_delayed && has_card && count.is_some() {
        return Pattern::MultiDelayedCards;
    }

    // P3: multi normal cards — card(s) or a multi-count keyword, and no
    // table/chart keyword (so "two tables" isn't misrouted here).
    if (has_card || count.is_some()) && !has_table_kw && !has_chart_kw {
        return Pattern::MultiNormalCards;
    }

    // P4: single normal card.
    if has_card || has_component {
        return Pattern::SingleNormalCard;
    }

    // P5: incremental card.
    if any_of(&tokens, LOADING_KEYWORDS) {
        return Pattern::IncrementalCard;
    }

    // P6: tables.
    if has_table_kw {
        return Pattern::Tables;
    }

    // P7: charts.
    if has_chart_kw {
        return Pattern::Charts;
    }

    // P8: default.
    Pattern::Default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_is_deterministic() {
        let msg = "show me an ai dashboard with sales trends";
        assert_eq!(classify(msg), classify(msg));
    }

    #[test]
    fn llm_pattern_wins_even_with_card_keywords() {
        assert_eq!(classify("show me an intelligent card summary"), Pattern::LlmPlan);
    }

    #[test]
    fn single_delayed_card() {
        assert_eq!(classify("show me a delayed card"), Pattern::SingleDelayedCard);
        assert_eq!(classify("show a partial card please"), Pattern::SingleDelayedCard);
    }

    #[test]
    fn multi_delayed_before_multi_normal_before_single() {
        assert_eq!(classify("show me two delayed cards"), Pattern::MultiDelayedCards);
        assert_eq!(classify("show me three cards"), Pattern::MultiNormalCards);
        assert_eq!(classify("show me a card"), Pattern::SingleNormalCard);
    }

    #[test]
    fn bare_count_keyword_is_multi_normal_cards() {
        assert_eq!(classify("three"), Pattern::MultiNormalCards);
    }

    #[test]
    fn multi_count_with_table_keyword_goes_to_tables_not_cards() {
        assert_eq!(classify("show me two tables"), Pattern::Tables);
        assert_eq!(classify("show me two sales tables"), Pattern::Tables);
    }

    #[test]
    fn component_keyword_triggers_single_normal_card() {
        assert_eq!(classify("render this component"), Pattern::SingleNormalCard);
    }

    #[test]
    fn incremental_pattern_matches_loading_and_progressive() {
        assert_eq!(classify("show loading states"), Pattern::IncrementalCard);
        assert_eq!(classify("a progressive view please"), Pattern::IncrementalCard);
    }

    #[test]
    fn tables_and_charts() {
        assert_eq!(classify("show me sales table"), Pattern::Tables);
        assert_eq!(classify("show me a users table"), Pattern::Tables);
        assert_eq!(classify("show me a line chart"), Pattern::Charts);
        assert_eq!(classify("plot the revenue bar graph"), Pattern::Charts);
    }

    #[test]
    fn empty_message_is_default() {
        assert_eq!(classify(""), Pattern::Default);
    }

    #[test]
    fn substring_false_positive_is_avoided() {
        // "suitable" must not be misclassified as containing "table".
        assert_eq!(classify("is this a suitable approach"), Pattern::Default);
    }

    #[test]
    fn count_for_matches_the_keyword_family_classify_used() {
        assert_eq!(count_for("show me two cards"), Some(2));
        assert_eq!(count_for("show me three cards"), Some(3));
        assert_eq!(count_for("show me a card"), None);
    }
}
