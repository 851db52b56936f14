//! Built-in reading passages for pronunciation practice.

use crate::config::Language;

/// Reading sentences per language, as a compile-time table.
const SAMPLES: &[(Language, &[&str])] = &[
    (Language::Hindi, &["बच्चे बगीचे में खेल रहे हैं।", "सूरज पूर्व दिशा में उगता है।", "गाय हमें दूध देती है।", "पेड़ हमें छाया देते हैं।"]),
    (Language::English, &["The sun rises in the east.", "Birds fly in the sky.", "Water is essential for life.", "Trees give us oxygen."]),
    (Language::Marathi, &["मुले बागेत खेळत आहेत।", "सूर्य पूर्वेला उगवतो।", "गाय आम्हाला दूध देते।"]),
    (Language::Tamil, &["சூரியன் கிழக்கில் உதிக்கிறது.", "பறவைகள் வானில் பறக்கின்றன.", "தண்ணீர் வாழ்க்கைக்கு அவசியம்."]),
];

/// Reading sentences available for a language (empty when none are bundled).
pub fn sample_texts(language: Language) -> &'static [&'static str] {
    SAMPLES.iter().find(|(lang, _)| *lang == language).map(|(_, texts)| *texts).unwrap_or(&[])
}

/// Look up a sample by its 1-based position in the list.
pub fn sample_text(language: Language, number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|idx| sample_texts(language).get(idx).copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_lookup_is_one_based() {
        assert_eq!(sample_text(Language::English, 1), Some("The sun rises in the east."));
        assert_eq!(sample_text(Language::English, 4), Some("Trees give us oxygen."));
        assert_eq!(sample_text(Language::English, 0), None);
        assert_eq!(sample_text(Language::English, 5), None);
    }

    #[test]
    fn test_languages_without_samples() {
        assert!(sample_texts(Language::Gujarati).is_empty());
        assert_eq!(sample_texts(Language::Tamil).len(), 3);
    }
}
