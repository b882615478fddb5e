//! Intake questionnaire definition and answer combination.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub section: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

pub const QUESTIONNAIRE: &[Question] = &[
    Question {
        id: "past_work",
        section: "experience",
        label: "What is your past work experience?",
        placeholder: "Internships, jobs, volunteer work, leadership roles, or significant projects. What did you do and what did you learn?",
        kind: QuestionType::Textarea,
    },
    Question {
        id: "skills_strengths",
        section: "experience",
        label: "What are your strongest skills and what do you enjoy doing?",
        placeholder: "Technical skills, soft skills, activities that energize you. Be specific about what you're good at and what you find fulfilling.",
        kind: QuestionType::Textarea,
    },
    Question {
        id: "future_vision",
        section: "aspiration",
        label: "Where do you want to be in 5–10 years?",
        placeholder: "Industry, type of role, impact you want to make, or lifestyle you're building toward.",
        kind: QuestionType::Textarea,
    },
    Question {
        id: "industries_interests",
        section: "aspiration",
        label: "Which industries or fields interest you most?",
        placeholder: "e.g. finance, tech, healthcare, marketing, creative, consulting, nonprofit, education...",
        kind: QuestionType::Textarea,
    },
    Question {
        id: "ideal_day",
        section: "aspiration",
        label: "Describe your ideal work environment and daily rhythm.",
        placeholder: "Team vs. solo, fast-paced vs. steady, office vs. remote, creative vs. analytical, etc.",
        kind: QuestionType::Textarea,
    },
];

pub const SECTION_LABELS: &[(&str, &str)] = &[
    ("experience", "Your experience"),
    ("aspiration", "Your aspirations"),
];

/// Joins non-empty answers with a single space.
///
/// Known questions come first in questionnaire order; any extra keys follow in
/// key order.
pub fn combine_answers(answers: &BTreeMap<String, String>) -> String {
    let known = QUESTIONNAIRE
        .iter()
        .filter_map(|q| answers.get(q.id).map(String::as_str));
    let extra = answers
        .iter()
        .filter(|(key, _)| !QUESTIONNAIRE.iter().any(|q| q.id == key.as_str()))
        .map(|(_, value)| value.as_str());

    known
        .chain(extra)
        .filter(|value| !value.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_combine_follows_question_order() {
        let combined = combine_answers(&answers(&[
            ("ideal_day", "remote"),
            ("past_work", "barista"),
            ("future_vision", "founder"),
        ]));
        assert_eq!(combined, "barista founder remote");
    }

    #[test]
    fn test_combine_skips_empty_answers() {
        let combined = combine_answers(&answers(&[("past_work", ""), ("ideal_day", "solo")]));
        assert_eq!(combined, "solo");
    }

    #[test]
    fn test_combine_appends_unknown_keys() {
        let combined = combine_answers(&answers(&[("zzz", "late"), ("past_work", "intern")]));
        assert_eq!(combined, "intern late");
    }

    #[test]
    fn test_question_type_serializes_as_type() {
        let json = serde_json::to_value(&QUESTIONNAIRE[0]).unwrap();
        assert_eq!(json["type"], "textarea");
        assert_eq!(json["id"], "past_work");
    }
}
