//! Reading similarity scorer based on Levenshtein edit distance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Similarity above which a reading is rated excellent.
const EXCELLENT_THRESHOLD: f64 = 0.8;

/// Similarity above which a reading is rated good.
const GOOD_THRESHOLD: f64 = 0.6;

/// Similarity above which a reading is rated fair.
const FAIR_THRESHOLD: f64 = 0.4;

/// Qualitative feedback band, ordered by increasing distance from the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualitativeBand {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl QualitativeBand {
    /// Classify a similarity ratio using half-open thresholds.
    ///
    /// The ratio is used before rounding so that values just above a
    /// threshold never flicker into the band below once shown as a percent.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity > EXCELLENT_THRESHOLD {
            QualitativeBand::Excellent
        } else if similarity > GOOD_THRESHOLD {
            QualitativeBand::Good
        } else if similarity > FAIR_THRESHOLD {
            QualitativeBand::Fair
        } else {
            QualitativeBand::NeedsWork
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            QualitativeBand::Excellent => "Excellent",
            QualitativeBand::Good => "Good",
            QualitativeBand::Fair => "Fair",
            QualitativeBand::NeedsWork => "Needs Work",
        }
    }

    /// Feedback sentence shown to the student.
    pub fn feedback(&self) -> &'static str {
        match self {
            QualitativeBand::Excellent => "Perfect pronunciation!",
            QualitativeBand::Good => "Good pronunciation with minor errors.",
            QualitativeBand::Fair => "Needs improvement. Try again!",
            QualitativeBand::NeedsWork => "Practice more for better pronunciation.",
        }
    }
}

impl fmt::Display for QualitativeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of scoring one reading attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub band: QualitativeBand, // Feedback band derived from `similarity`
    pub percent: u8,           // Rounded similarity, 0..=100
    pub similarity: f64,       // Raw ratio in 0.0..=1.0
    pub distance: usize,       // Edit distance between the case-folded inputs
    pub reference: String,     // Expected text as supplied
    pub candidate: String,     // Recognized text as supplied
}

/// Score a candidate transcript against a reference text.
///
/// Both strings are lower-cased and compared per Unicode scalar value, so
/// non-Latin scripts count one edit per character rather than per byte.
/// The function is total: empty inputs are valid and two empty strings are a
/// perfect match.
pub fn score(reference: &str, candidate: &str) -> AssessmentResult {
    let reference_folded: Vec<char> = reference.to_lowercase().chars().collect();
    let candidate_folded: Vec<char> = candidate.to_lowercase().chars().collect();

    let distance = levenshtein(&reference_folded, &candidate_folded);
    let longer = reference_folded.len().max(candidate_folded.len());

    let similarity = if longer == 0 { 1.0 } else { (longer - distance) as f64 / longer as f64 };
    let percent = (similarity * 100.0).round().clamp(0.0, 100.0) as u8;

    AssessmentResult {
        band: QualitativeBand::from_similarity(similarity),
        percent,
        similarity,
        distance,
        reference: reference.to_string(),
        candidate: candidate.to_string(),
    }
}

/// Levenshtein distance between two character sequences.
///
/// Keeps only the previous DP row; the shorter sequence is used for the row
/// so memory is O(min(len)).
pub fn levenshtein(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut previous: Vec<usize> = (0..=short.len()).collect();
    let mut current = vec![0; short.len() + 1];

    for (i, long_char) in long.iter().enumerate() {
        current[0] = i + 1;
        for (j, short_char) in short.iter().enumerate() {
            current[j + 1] = if long_char == short_char {
                previous[j]
            } else {
                1 + previous[j].min(previous[j + 1]).min(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[short.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_identical_strings_are_excellent() {
        for s in ["a", "hello world", "गाय हमें दूध देती है।", "சூரியன் கிழக்கில் உதிக்கிறது."] {
            let result = score(s, s);
            assert_eq!(result.similarity, 1.0);
            assert_eq!(result.percent, 100);
            assert_eq!(result.band, QualitativeBand::Excellent);
        }
    }

    #[test]
    fn test_both_empty_is_perfect_match() {
        let result = score("", "");
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.distance, 0);
        assert_eq!(result.band, QualitativeBand::Excellent);
    }

    #[test]
    fn test_one_side_empty_is_needs_work() {
        let left = score("birds fly", "");
        let right = score("", "birds fly");
        for result in [left, right] {
            assert_eq!(result.similarity, 0.0);
            assert_eq!(result.percent, 0);
            assert_eq!(result.band, QualitativeBand::NeedsWork);
        }
    }

    #[test]
    fn test_symmetric_percent() {
        let pairs = [
            ("kitten", "sitting"),
            ("The sun rises in the east.", "the son rise in east"),
            ("पेड़ हमें छाया देते हैं।", "पेड़ छाया देते"),
            ("", "x"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b).percent, score(b, a).percent, "{a:?} vs {b:?}");
            assert_eq!(score(a, b).distance, score(b, a).distance);
        }
    }

    #[test]
    fn test_case_insensitive() {
        let result = score("Hello", "hello");
        assert_eq!(result.similarity, 1.0);
        assert_eq!(result.distance, 0);
        // Input casing is preserved for display
        assert_eq!(result.reference, "Hello");
        assert_eq!(result.candidate, "hello");
    }

    #[test]
    fn test_more_edits_never_increase_similarity() {
        let reference = "abcdefghij";
        let mut candidate: Vec<char> = reference.chars().collect();
        let mut last = score(reference, reference).similarity;

        for i in 0..candidate.len() {
            candidate[i] = 'z';
            let text: String = candidate.iter().collect();
            let similarity = score(reference, &text).similarity;
            assert!(similarity <= last, "edit {} raised similarity {} -> {}", i + 1, last, similarity);
            last = similarity;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_threshold_boundaries_are_half_open() {
        // 4/5 == 0.8 exactly
        let result = score("abcde", "abcdx");
        assert_eq!(result.similarity, 0.8);
        assert_eq!(result.band, QualitativeBand::Good);

        // 3/5 == 0.6 exactly
        let result = score("abcde", "abcxy");
        assert_eq!(result.similarity, 0.6);
        assert_eq!(result.band, QualitativeBand::Fair);

        // 2/5 == 0.4 exactly
        let result = score("abcde", "abxyz");
        assert_eq!(result.similarity, 0.4);
        assert_eq!(result.band, QualitativeBand::NeedsWork);

        // Just above 0.8
        let result = score("abcdefghijk", "abcdefghijx");
        assert!(result.similarity > 0.8);
        assert_eq!(result.band, QualitativeBand::Excellent);
    }

    #[test]
    fn test_band_from_similarity() {
        assert_eq!(QualitativeBand::from_similarity(1.0), QualitativeBand::Excellent);
        assert_eq!(QualitativeBand::from_similarity(0.81), QualitativeBand::Excellent);
        assert_eq!(QualitativeBand::from_similarity(0.8), QualitativeBand::Good);
        assert_eq!(QualitativeBand::from_similarity(0.61), QualitativeBand::Good);
        assert_eq!(QualitativeBand::from_similarity(0.6), QualitativeBand::Fair);
        assert_eq!(QualitativeBand::from_similarity(0.41), QualitativeBand::Fair);
        assert_eq!(QualitativeBand::from_similarity(0.4), QualitativeBand::NeedsWork);
        assert_eq!(QualitativeBand::from_similarity(0.0), QualitativeBand::NeedsWork);
    }

    #[test]
    fn test_bands_ordered_by_distance() {
        assert!(QualitativeBand::Excellent < QualitativeBand::Good);
        assert!(QualitativeBand::Good < QualitativeBand::Fair);
        assert!(QualitativeBand::Fair < QualitativeBand::NeedsWork);
    }

    #[test]
    fn test_sun_rises_example() {
        let result = score("The sun rises in the east.", "the sun rise in the east.");
        assert_eq!(result.distance, 1);
        assert!((result.similarity - 25.0 / 26.0).abs() < 1e-12);
        assert_eq!(result.percent, 96);
        assert_eq!(result.band, QualitativeBand::Excellent);
    }

    #[test]
    fn test_single_indic_substitution_matches_ascii_case() {
        let devanagari = "गाय हमें दूध देती है।";
        let devanagari_edit = devanagari.replacen('य', "र", 1);
        let tamil = "பறவைகள் வானில் பறக்கின்றன.";
        let tamil_edit = tamil.replacen('வ', "ம", 1);

        for (reference, candidate) in [(devanagari, devanagari_edit), (tamil, tamil_edit)] {
            let len = reference.chars().count();
            let ascii_reference = "a".repeat(len);
            let ascii_candidate = format!("b{}", "a".repeat(len - 1));

            let indic = score(reference, &candidate);
            let ascii = score(&ascii_reference, &ascii_candidate);

            assert_eq!(indic.distance, 1);
            assert_eq!(ascii.distance, 1);
            assert_eq!(indic.similarity, ascii.similarity);
            assert_eq!(indic.percent, ascii.percent);
        }
    }

    #[test]
    fn test_levenshtein_classic_cases() {
        assert_eq!(levenshtein(&chars("kitten"), &chars("sitting")), 3);
        assert_eq!(levenshtein(&chars("flaw"), &chars("lawn")), 2);
        assert_eq!(levenshtein(&chars(""), &chars("abc")), 3);
        assert_eq!(levenshtein(&chars("abc"), &chars("")), 3);
        assert_eq!(levenshtein(&chars("same"), &chars("same")), 0);
    }

    #[test]
    fn test_score_is_idempotent() {
        let first = score("Trees give us oxygen.", "trees give oxygen");
        let second = score("Trees give us oxygen.", "trees give oxygen");
        assert_eq!(first, second);
    }
}
