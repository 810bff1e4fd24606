//! Weighted-lexicon sentiment intensity analyzer.
//!
//! Stands in for the external sentiment-intensity service. Scores a text into
//! the familiar four-field shape: positive, negative, and neutral proportions
//! plus a `compound` score in `[-1, 1]`.
//!
//! Not a full VADER implementation — no booster words, negation handling, or
//! punctuation emphasis — just per-token weight lookup over a fixed lexicon.
//! The `compound` normalization `s / sqrt(s^2 + 15)` is the one VADER uses.

/// Sentiment intensity scores for a text.
///
/// `pos`, `neg`, and `neu` are proportions in `[0, 1]`; `compound` is a
/// normalized overall score in `[-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentIntensity {
    pub pos: f64,
    pub neg: f64,
    pub neu: f64,
    pub compound: f64,
}

/// Word weights. Keys are lowercase single words; positive values in
/// `(0, 1]`, negative in `[-1, 0)`.
const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("good", 0.3),
    ("great", 0.4),
    ("excellent", 0.5),
    ("positive", 0.4),
    ("happy", 0.4),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("win", 0.4),
    ("victory", 0.5),
    ("success", 0.4),
    ("successful", 0.4),
    ("improve", 0.3),
    ("improved", 0.3),
    ("strong", 0.3),
    ("growth", 0.3),
    ("safe", 0.4),
    ("hope", 0.3),
    ("celebrate", 0.4),
    ("praise", 0.4),
    // Negative signals
    ("bad", -0.4),
    ("sad", -0.4),
    ("terrible", -0.6),
    ("negative", -0.4),
    ("worst", -0.6),
    ("fail", -0.4),
    ("failed", -0.4),
    ("failure", -0.4),
    ("crisis", -0.5),
    ("fear", -0.4),
    ("death", -0.6),
    ("dead", -0.6),
    ("war", -0.5),
    ("attack", -0.5),
    ("loss", -0.4),
    ("lost", -0.3),
    ("problem", -0.3),
    ("concern", -0.3),
    ("warning", -0.4),
    ("dangerous", -0.6),
];

/// Normalization constant for the compound score, as in VADER.
const COMPOUND_ALPHA: f64 = 15.0;

/// Scores texts against the built-in lexicon.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntensityAnalyzer;

impl IntensityAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Score a text.
    ///
    /// Tokens are whitespace-split, trimmed of non-alphabetic edges, and
    /// lowercased before lookup. `pos`/`neg` are the matched weight mass
    /// normalized by total token count, `neu` the remainder. A text with no
    /// tokens scores fully neutral: `{0, 0, 1, 0}`.
    pub fn score(&self, text: &str) -> SentimentIntensity {
        let mut pos_sum = 0.0_f64;
        let mut neg_sum = 0.0_f64;
        let mut token_count = 0usize;

        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            if w.is_empty() {
                continue;
            }
            token_count += 1;
            if let Some(&(_, weight)) = LEXICON.iter().find(|&&(lex, _)| lex == w) {
                if weight > 0.0 {
                    pos_sum += weight;
                } else {
                    neg_sum += -weight;
                }
            }
        }

        if token_count == 0 {
            return SentimentIntensity {
                pos: 0.0,
                neg: 0.0,
                neu: 1.0,
                compound: 0.0,
            };
        }

        let total = token_count as f64;
        let pos = (pos_sum / total).clamp(0.0, 1.0);
        let neg = (neg_sum / total).clamp(0.0, 1.0);
        let neu = (1.0 - pos - neg).max(0.0);
        let signed = pos_sum - neg_sum;
        let compound = signed / (signed * signed + COMPOUND_ALPHA).sqrt();

        SentimentIntensity {
            pos,
            neg,
            neu,
            compound,
        }
    }
}
