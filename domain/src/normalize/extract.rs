//! The layered extraction chain.

use super::policy::OrSplitPolicy;
use super::tier::{ExtractionTier, NormalizedQuestion};
use crate::core::question_pair::QuestionPair;
use crate::generation::mode::GenerationMode;
use regex::Regex;
use std::sync::LazyLock;

/// Separator searched for by the degraded split tier. The surrounding
/// spaces are part of the token and are dropped with it.
pub const OR_SEPARATOR: &str = " or ";

/// Second option when only one option could be extracted.
pub const DEFAULT_OPTION_B: &str = "something else entirely";

/// Hard-coded dilemma returned when the output is unusable.
pub const DEFAULT_PAIR: (&str, &str) =
    ("Have the power of flight", "Be able to breathe underwater");

/// Strict tier: `A:` marker, non-greedy option text, literal `OR`,
/// `B:` marker, remaining text. Case-insensitive, dot matches newline so
/// option text may span lines.
static PAIR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\bA\s*:\s*(.+?)\s*\bOR\b\s*B\s*:\s*(.+)").expect("pair pattern compiles")
});

/// Degraded tier: the `A:` marker and everything after it.
static A_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\bA\s*:\s*(.+)").expect("A-marker pattern compiles"));

/// An embedded `B:` marker inside already-captured option text.
static B_MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bB\s*:").expect("B-marker pattern compiles"));

/// Normalize raw model output into a question pair.
///
/// Attempts each tier in strictness order and stops at the first success;
/// the final tier cannot fail, so the caller always receives a fully
/// populated pair. See the [module docs](super) for the tier table.
///
/// This function is pure and does no logging itself — callers are expected
/// to surface `NormalizedQuestion::tier` together with the untrimmed raw
/// text, so silent degradation cannot hide model-quality regressions.
pub fn normalize(raw: &str, mode: GenerationMode, policy: &OrSplitPolicy) -> NormalizedQuestion {
    if mode == GenerationMode::Structured
        && let Some(pair) = extract_structured(raw)
    {
        return NormalizedQuestion {
            pair,
            tier: ExtractionTier::Structured,
        };
    }

    if let Some(pair) = extract_strict_pattern(raw) {
        return NormalizedQuestion {
            pair,
            tier: ExtractionTier::Pattern,
        };
    }

    if let Some(captured) = capture_after_a_marker(raw) {
        if let Some(pair) = split_at_b_marker(captured) {
            return NormalizedQuestion {
                pair,
                tier: ExtractionTier::MarkerSplit,
            };
        }
        if let Some(pair) = split_at_or_separator(captured, policy) {
            return NormalizedQuestion {
                pair,
                tier: ExtractionTier::OrSplit,
            };
        }
        if let Some(pair) = QuestionPair::try_new(captured.trim(), DEFAULT_OPTION_B) {
            return NormalizedQuestion {
                pair,
                tier: ExtractionTier::SingleOption,
            };
        }
    }

    NormalizedQuestion {
        pair: QuestionPair::new(DEFAULT_PAIR.0, DEFAULT_PAIR.1),
        tier: ExtractionTier::Default,
    }
}

/// Tier 1: parse the reply as a serialized object with both fields.
///
/// Tolerates a markdown code fence around the JSON but otherwise returns
/// the field values untouched — structured fields are already discrete,
/// so no trimming is applied.
fn extract_structured(raw: &str) -> Option<QuestionPair> {
    let body = strip_code_fence(raw);
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let option_a = value.get("optionA")?.as_str()?;
    let option_b = value.get("optionB")?.as_str()?;
    QuestionPair::try_new(option_a, option_b)
}

/// Tier 2: the strict pattern, both captures trimmed and non-empty.
fn extract_strict_pattern(raw: &str) -> Option<QuestionPair> {
    let captures = PAIR_PATTERN.captures(raw)?;
    QuestionPair::try_new(captures[1].trim(), captures[2].trim())
}

/// Tier 3 entry: everything after the `A:` marker, untrimmed.
fn capture_after_a_marker(raw: &str) -> Option<&str> {
    A_MARKER_PATTERN
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Tier 3a: split the capture at an embedded `B:` marker.
fn split_at_b_marker(captured: &str) -> Option<QuestionPair> {
    let marker = B_MARKER_PATTERN.find(captured)?;
    QuestionPair::try_new(
        captured[..marker.start()].trim(),
        captured[marker.end()..].trim(),
    )
}

/// Tier 3b: split the capture at the first `" or "`, dropping the
/// fixed-length separator.
fn split_at_or_separator(captured: &str, policy: &OrSplitPolicy) -> Option<QuestionPair> {
    let index = if policy.case_insensitive {
        // ASCII folding keeps byte offsets valid in the original text
        captured.to_ascii_lowercase().find(OR_SEPARATOR)
    } else {
        captured.find(OR_SEPARATOR)
    }?;
    QuestionPair::try_new(
        captured[..index].trim(),
        captured[index + OR_SEPARATOR.len()..].trim(),
    )
}

/// Strip a surrounding markdown code fence, if present.
///
/// Structured replies sometimes arrive as ````` ```json {...} ``` `````
/// even when a schema was requested.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(after_fence) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") with the opening fence line
    let Some((_, body)) = after_fence.split_once('\n') else {
        return trimmed;
    };
    let body = body.trim_end();
    body.strip_suffix("```").unwrap_or(body).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_text(raw: &str) -> NormalizedQuestion {
        normalize(raw, GenerationMode::FreeText, &OrSplitPolicy::default())
    }

    fn structured(raw: &str) -> NormalizedQuestion {
        normalize(raw, GenerationMode::Structured, &OrSplitPolicy::default())
    }

    // ==================== Structured tier ====================

    #[test]
    fn test_structured_reply_returned_unchanged() {
        let raw = r#"{"optionA":"Live underwater","optionB":"Live in space"}"#;
        let result = structured(raw);
        assert_eq!(result.tier, ExtractionTier::Structured);
        assert_eq!(result.pair.option_a(), "Live underwater");
        assert_eq!(result.pair.option_b(), "Live in space");
    }

    #[test]
    fn test_structured_reply_in_code_fence() {
        let raw = "```json\n{\"optionA\":\"Be invisible\",\"optionB\":\"Read minds\"}\n```";
        let result = structured(raw);
        assert_eq!(result.tier, ExtractionTier::Structured);
        assert_eq!(result.pair.option_a(), "Be invisible");
    }

    #[test]
    fn test_structured_fields_not_trimmed() {
        // Structured fields are discrete; they pass through byte-for-byte
        let raw = r#"{"optionA":" padded ","optionB":"plain"}"#;
        let result = structured(raw);
        assert_eq!(result.pair.option_a(), " padded ");
    }

    #[test]
    fn test_structured_missing_field_falls_through() {
        let raw = r#"{"optionA":"Only one"}"#;
        let result = structured(raw);
        // No B anywhere in the text either, so this lands on the default
        assert_eq!(result.tier, ExtractionTier::Default);
    }

    #[test]
    fn test_structured_empty_field_falls_through() {
        let raw = r#"{"optionA":"Fly","optionB":""}"#;
        let result = structured(raw);
        assert_ne!(result.tier, ExtractionTier::Structured);
        assert!(!result.pair.option_b().is_empty());
    }

    #[test]
    fn test_free_text_mode_skips_structured_tier() {
        let raw = r#"{"optionA":"Live underwater","optionB":"Live in space"}"#;
        let result = free_text(raw);
        assert_ne!(result.tier, ExtractionTier::Structured);
    }

    // ==================== Strict pattern tier ====================

    #[test]
    fn test_pattern_with_markup_and_newlines() {
        let raw = "Here you go!\nA: **Fly** forever\nOR B: *Teleport* anywhere";
        let result = free_text(raw);
        assert_eq!(result.tier, ExtractionTier::Pattern);
        assert_eq!(result.pair.option_a(), "**Fly** forever");
        assert_eq!(result.pair.option_b(), "*Teleport* anywhere");
    }

    #[test]
    fn test_pattern_is_case_insensitive() {
        let result = free_text("a: eat tacos or b: eat sushi");
        assert_eq!(result.tier, ExtractionTier::Pattern);
        assert_eq!(result.pair.option_a(), "eat tacos");
        assert_eq!(result.pair.option_b(), "eat sushi");
    }

    #[test]
    fn test_pattern_trims_surrounding_whitespace() {
        let result = free_text("A:   live in a castle   OR B:   live on a boat  ");
        assert_eq!(result.pair.option_a(), "live in a castle");
        assert_eq!(result.pair.option_b(), "live on a boat");
    }

    #[test]
    fn test_pattern_option_text_may_span_lines() {
        let raw = "A: Spend a year\nsailing the world OR B: Spend a year\nin the mountains";
        let result = free_text(raw);
        assert_eq!(result.tier, ExtractionTier::Pattern);
        assert_eq!(result.pair.option_a(), "Spend a year\nsailing the world");
    }

    // ==================== Degraded tiers ====================

    #[test]
    fn test_embedded_b_marker_split() {
        let raw = "A: Win the lottery B: Find true love";
        let result = free_text(raw);
        assert_eq!(result.tier, ExtractionTier::MarkerSplit);
        assert_eq!(result.pair.option_a(), "Win the lottery");
        assert_eq!(result.pair.option_b(), "Find true love");
    }

    #[test]
    fn test_or_separator_split() {
        let raw = "A: Eat pizza every day or never eat pizza again";
        let result = free_text(raw);
        assert_eq!(result.tier, ExtractionTier::OrSplit);
        assert_eq!(result.pair.option_a(), "Eat pizza every day");
        assert_eq!(result.pair.option_b(), "never eat pizza again");
    }

    #[test]
    fn test_or_separator_splits_at_first_occurrence() {
        let raw = "A: tea or coffee or juice";
        let result = free_text(raw);
        assert_eq!(result.tier, ExtractionTier::OrSplit);
        assert_eq!(result.pair.option_a(), "tea");
        assert_eq!(result.pair.option_b(), "coffee or juice");
    }

    #[test]
    fn test_or_split_is_case_sensitive_by_default() {
        let raw = "A: shout the answer OR whisper it";
        let result = free_text(raw);
        // " OR " is not " or " under the default policy
        assert_eq!(result.tier, ExtractionTier::SingleOption);
        assert_eq!(result.pair.option_b(), DEFAULT_OPTION_B);
    }

    #[test]
    fn test_or_split_case_insensitive_policy() {
        let raw = "A: shout the answer OR whisper it";
        let result = normalize(
            raw,
            GenerationMode::FreeText,
            &OrSplitPolicy::case_insensitive(),
        );
        assert_eq!(result.tier, ExtractionTier::OrSplit);
        assert_eq!(result.pair.option_a(), "shout the answer");
        assert_eq!(result.pair.option_b(), "whisper it");
    }

    #[test]
    fn test_single_option_gets_literal_second() {
        let raw = "A: Rule a small kingdom";
        let result = free_text(raw);
        assert_eq!(result.tier, ExtractionTier::SingleOption);
        assert_eq!(result.pair.option_a(), "Rule a small kingdom");
        assert_eq!(result.pair.option_b(), DEFAULT_OPTION_B);
    }

    // ==================== Total failure tier ====================

    #[test]
    fn test_unusable_output_returns_default_pair() {
        let result = free_text("I cannot answer that.");
        assert_eq!(result.tier, ExtractionTier::Default);
        assert_eq!(result.pair.option_a(), DEFAULT_PAIR.0);
        assert_eq!(result.pair.option_b(), DEFAULT_PAIR.1);
    }

    #[test]
    fn test_never_returns_empty_options() {
        for raw in ["", "   ", "A:", "A:   \n  ", "{}", "null", "OR"] {
            for mode in [GenerationMode::FreeText, GenerationMode::Structured] {
                let result = normalize(raw, mode, &OrSplitPolicy::default());
                assert!(
                    !result.pair.option_a().trim().is_empty(),
                    "empty option A for {:?}",
                    raw
                );
                assert!(
                    !result.pair.option_b().trim().is_empty(),
                    "empty option B for {:?}",
                    raw
                );
            }
        }
    }

    #[test]
    fn test_structured_mode_falls_back_to_text_tiers() {
        // Model ignored the schema and answered informally
        let raw = "A: Have a pet dragon OR B: Have a pet robot";
        let result = structured(raw);
        assert_eq!(result.tier, ExtractionTier::Pattern);
        assert!(result.tier.is_degraded(GenerationMode::Structured));
        assert_eq!(result.pair.option_a(), "Have a pet dragon");
    }

    // ==================== Fence stripping ====================

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("{\"a\":1}"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        // Unterminated fence keeps the body
        assert_eq!(strip_code_fence("```json\n{\"a\":1}"), "{\"a\":1}");
    }
}
