//! Repair engine for mis-decoded Japanese text.
//!
//! Applies an ordered table of literal substring replacements, then collapses
//! leftover runs of corruption marker characters into a single long-vowel
//! mark. The table order is part of the contract: entries are applied as a
//! sequence of global replacement passes, and an earlier entry's output can
//! feed a later entry's pattern.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Long-vowel katakana mark, the usual intended value of a marker run.
pub const LONG_VOWEL_MARK: &str = "ー";

// Corruption markers: the substitute glyph from lossy decoding plus the stray
// ASCII 'E' that mixed-width katakana corruption leaves behind.
static MARKER_RUN: Lazy<Regex> = Lazy::new(|| Regex::new("[E\u{FFFD}]+").unwrap());

/// Single literal substitution applied globally across the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairRule {
    pub corrupted: String,
    pub replacement: String,
}

/// Ordered substitution table.
///
/// Construction keeps the first occurrence position of each corrupted form
/// and the last definition of its replacement, so a rule list with duplicate
/// keys behaves like the mapping it was originally authored as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairTable {
    rules: Vec<RepairRule>,
}

// Corrupted form -> intended form, in application order. Some corrupted
// forms are substrings of others, so position in the list matters. Keys are
// repeated where the original table redefined them; the last definition
// wins.
const BUILTIN_RULES: &[(&str, &str)] = &[
    // Configuration terms
    ("Jackson設定クラス", "Jackson設定クラス"),
    ("チE\u{FFFD}\u{FFFD}リアライゼーション", "デシリアライゼーション"),
    ("チE\u{FFFD}\u{FFFD}リアライゼーション", "シリアライゼーション"),
    ("E\u{FFFD}\u{FFFD}リアライゼーション", "デシリアライゼーション"),
    ("管琁E\u{FFFD}\u{FFFD}ます", "管理します"),
    ("管琁E\u{FFFD}\u{FFFD}", "管理"),
    ("設宁E", "設定"),
    ("サポ\u{FFFD}EチE", "サポート"),
    ("E\u{FFFD}\u{FFFD}E", "します"),
    ("\u{FFFD}\u{FFFD}E", "を"),
    ("除夁E", "除外"),
    // Entity terms
    ("エンチE\u{FFFD}\u{FFFD}チE\u{FFFD}\u{FFFD}", "エンティティ"),
    ("エンチE\u{FFFD}\u{FFFD}", "エンティティ"),
    ("チE\u{FFFD}\u{FFFD}", "ティ"),
    ("E\u{FFFD}\u{FFFD}", "を"),
    ("\u{FFFD}\u{FFFD}", "し"),
    // System terms
    ("シスチE\u{FFFD}\u{FFFD}", "システム"),
    ("シスチE", "システム"),
    // Markup endings and particles
    ("E/p>", "</p>"),
    ("E\u{FFFD}\u{FFFD}", "を"),
    ("\u{FFFD}\u{FFFD}", "し"),
    ("、E", "し"),
    // Test terms
    ("チE\u{FFFD}\u{FFFD}チE", "テスト"),
    ("チE\u{FFFD}\u{FFFD}", "テスト"),
    // Repository terms
    ("リポジチE", "リポジトリ"),
    ("リポジチE\u{FFFD}\u{FFFD}", "リポジトリ"),
    // Service terms
    ("サ\u{FFFD}E\u{FFFD}\u{FFFD}ビス", "サービス"),
    ("サ\u{FFFD}E", "サービス"),
    // Common verb phrases and single-character tails
    ("E\u{FFFD}\u{FFFD}する", "を実行する"),
    ("E\u{FFFD}\u{FFFD}行", "を実行"),
    ("E\u{FFFD}\u{FFFD}", "を"),
    ("琁E", "理"),
    ("夁E", "外"),
    ("宁E", "定"),
    ("\u{FFFD}E", "ー"),
    ("\u{FFFD}\u{FFFD}", "し"),
    ("、E", "し"),
];

impl RepairTable {
    /// Built-in table covering the common corruption patterns.
    pub fn builtin() -> Self {
        Self::from_pairs(BUILTIN_RULES.iter().copied())
    }

    /// Build a table from (corrupted, replacement) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::from_rules(
            pairs
                .into_iter()
                .map(|(corrupted, replacement)| RepairRule {
                    corrupted: corrupted.into(),
                    replacement: replacement.into(),
                })
                .collect(),
        )
    }

    /// Build a table from an authored rule list.
    ///
    /// A corrupted form listed more than once keeps its first position but
    /// takes its last replacement.
    pub fn from_rules(rules: Vec<RepairRule>) -> Self {
        let mut deduped: Vec<RepairRule> = Vec::with_capacity(rules.len());

        for rule in rules {
            match deduped.iter_mut().find(|r| r.corrupted == rule.corrupted) {
                Some(existing) => existing.replacement = rule.replacement,
                None => deduped.push(rule),
            }
        }

        Self { rules: deduped }
    }

    /// Effective rules in application order.
    pub fn rules(&self) -> &[RepairRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Repair one file's worth of text.
    ///
    /// Every rule is applied as a global find-and-replace pass over the whole
    /// text, in table order. After all literal passes, each maximal run of
    /// marker characters collapses to a single long-vowel mark.
    pub fn apply(&self, text: &str) -> String {
        let mut fixed = text.to_string();

        for rule in &self.rules {
            fixed = fixed.replace(&rule.corrupted, &rule.replacement);
        }

        MARKER_RUN.replace_all(&fixed, LONG_VOWEL_MARK).into_owned()
    }
}

impl Default for RepairTable {
    fn default() -> Self {
        Self::builtin()
    }
}
