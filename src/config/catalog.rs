//! Fixed catalogs offered to teachers: languages, grades and the kinds of
//! material each generator can produce.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lowest supported class.
pub const MIN_GRADE: u8 = 1;

/// Highest supported class.
pub const MAX_GRADE: u8 = 5;

/// Teaching language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hindi,
    Marathi,
    Tamil,
    Gujarati,
    Bengali,
    English,
}

impl Language {
    /// All languages in menu order.
    pub const ALL: [Language; 6] = [
        Language::Hindi,
        Language::Marathi,
        Language::Tamil,
        Language::Gujarati,
        Language::Bengali,
        Language::English,
    ];

    /// Name used inside prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Hindi => "hindi",
            Language::Marathi => "marathi",
            Language::Tamil => "tamil",
            Language::Gujarati => "gujarati",
            Language::Bengali => "bengali",
            Language::English => "english",
        }
    }

    /// Display name including the native script.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी (Hindi)",
            Language::Marathi => "मराठी (Marathi)",
            Language::Tamil => "தமிழ் (Tamil)",
            Language::Gujarati => "ગુજરાતી (Gujarati)",
            Language::Bengali => "বাংলা (Bengali)",
            Language::English => "English",
        }
    }

    /// BCP-47 locale for speech recognition and synthesis engines.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Hindi => "hi-IN",
            Language::Marathi => "mr-IN",
            Language::Tamil => "ta-IN",
            Language::Gujarati => "gu-IN",
            Language::Bengali => "bn-IN",
            Language::English => "en-IN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primary school class, 1 through 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Grade(u8);

impl Grade {
    /// Create a grade, rejecting values outside 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        (MIN_GRADE..=MAX_GRADE).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Typical student age range.
    pub fn age_range(&self) -> (u8, u8) {
        (self.0 + 5, self.0 + 6)
    }

    /// Label such as "Class 2 (Age 7-8)".
    pub fn label(&self) -> String {
        let (low, high) = self.age_range();
        format!("Class {} (Age {}-{})", self.0, low, high)
    }

    /// Audience phrase used when tailoring worksheets.
    pub fn audience(&self) -> &'static str {
        match self.0 {
            1 => "very young children (6-7 years)",
            2 => "young children (7-8 years)",
            3 => "children (8-9 years)",
            4 => "older children (9-10 years)",
            _ => "pre-teens (10-11 years)",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse a single grade for clap.
pub fn parse_grade(s: &str) -> Result<Grade, String> {
    let value: u8 = s.trim().parse().map_err(|_| format!("'{}' is not a valid class number", s))?;
    Grade::new(value).ok_or_else(|| format!("class must be between {} and {}, got {}", MIN_GRADE, MAX_GRADE, value))
}

/// Sort and de-duplicate a list of grades.
pub fn normalize_grades(grades: &[Grade]) -> Vec<Grade> {
    let mut grades = grades.to_vec();
    grades.sort();
    grades.dedup();
    grades
}

/// Kind of classroom content to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Story,
    Poem,
    Explanation,
    Activity,
    Worksheet,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Story => write!(f, "story"),
            ContentKind::Poem => write!(f, "poem"),
            ContentKind::Explanation => write!(f, "explanation"),
            ContentKind::Activity => write!(f, "activity"),
            ContentKind::Worksheet => write!(f, "worksheet"),
        }
    }
}

/// Kind of blackboard visual aid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AidKind {
    #[default]
    Diagram,
    Chart,
    Map,
    Timeline,
    Flowchart,
    Graph,
}

impl AidKind {
    /// Example request shown in help output.
    pub fn example(&self) -> &'static str {
        match self {
            AidKind::Diagram => "Water cycle diagram",
            AidKind::Chart => "Multiplication table",
            AidKind::Map => "India states map",
            AidKind::Timeline => "History timeline",
            AidKind::Flowchart => "Life cycle of butterfly",
            AidKind::Graph => "Bar graph for data",
        }
    }
}

impl fmt::Display for AidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AidKind::Diagram => write!(f, "diagram"),
            AidKind::Chart => write!(f, "chart"),
            AidKind::Map => write!(f, "map"),
            AidKind::Timeline => write!(f, "timeline"),
            AidKind::Flowchart => write!(f, "flowchart"),
            AidKind::Graph => write!(f, "graph"),
        }
    }
}

/// Span of a lesson plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlanDuration {
    Day,
    #[default]
    Week,
    Month,
}

impl PlanDuration {
    pub fn describe(&self) -> &'static str {
        match self {
            PlanDuration::Day => "One day",
            PlanDuration::Week => "One week (5 days)",
            PlanDuration::Month => "One month (4 weeks)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grade_range() {
        assert_eq!(parse_grade("1").map(|g| g.value()), Ok(1));
        assert_eq!(parse_grade(" 5 ").map(|g| g.value()), Ok(5));
        assert!(parse_grade("0").is_err());
        assert!(parse_grade("6").is_err());
        assert!(parse_grade("three").is_err());
    }

    #[test]
    fn test_grade_labels() {
        let grade = Grade::new(2).unwrap();
        assert_eq!(grade.label(), "Class 2 (Age 7-8)");
        assert_eq!(grade.audience(), "young children (7-8 years)");
        assert_eq!(Grade::new(5).unwrap().age_range(), (10, 11));
    }

    #[test]
    fn test_normalize_grades() {
        let grades: Vec<Grade> = [3, 1, 3, 2].iter().filter_map(|g| Grade::new(*g)).collect();
        let values: Vec<u8> = normalize_grades(&grades).iter().map(Grade::value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_language_locales() {
        assert_eq!(Language::Hindi.locale(), "hi-IN");
        assert_eq!(Language::Tamil.locale(), "ta-IN");
        assert_eq!(Language::English.locale(), "en-IN");
        assert_eq!(Language::ALL.len(), 6);
    }
}
