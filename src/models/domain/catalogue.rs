use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopicSection {
    pub id: String,
    pub title: String,
    pub status: TopicStatus,
    #[serde(default)]
    pub subsections: Vec<Subsection>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicStatus {
    Ready,
    ComingSoon, // placeholder topic, never has subsections
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Subsection {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SubsectionKind,
    pub content_html: String,
    pub canonical_keywords: Vec<String>, // ground truth for recall coverage
    #[serde(default)]
    pub practice_items: Vec<PracticeItem>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubsectionKind {
    Content,
    PracticeGroup,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PracticeItem {
    pub id: String, // unique within the owning subsection
    pub prompt_template: String,
    #[serde(rename = "type")]
    pub kind: PracticeItemKind,
    pub difficulty: Difficulty,
    pub randomise: bool, // callers may vary the phrasing
    pub expected_keywords: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeItemKind {
    Open,
    ShortAnswer,
    Mcq,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl TopicSection {
    pub fn is_ready(&self) -> bool {
        self.status == TopicStatus::Ready
    }
}

impl Subsection {
    /// The notes as they are sent to the generation endpoints.
    pub fn study_content(&self) -> &str {
        &self.content_html
    }

    pub fn practice_item(&self, id: &str) -> Option<&PracticeItem> {
        self.practice_items.iter().find(|item| item.id == id)
    }
}

impl PracticeItem {
    /// True when the template has no `{placeholder}` and can be shown as-is.
    pub fn is_fixed_prompt(&self) -> bool {
        match self.prompt_template.find('{') {
            Some(open) => !self.prompt_template[open..].contains('}'),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practice_item(template: &str) -> PracticeItem {
        PracticeItem {
            id: "p1".to_string(),
            prompt_template: template.to_string(),
            kind: PracticeItemKind::Open,
            difficulty: Difficulty::Easy,
            randomise: true,
            expected_keywords: vec!["atom".to_string()],
        }
    }

    #[test]
    fn topic_status_uses_snake_case() {
        let parsed: TopicStatus = serde_json::from_str("\"coming_soon\"").unwrap();
        assert_eq!(parsed, TopicStatus::ComingSoon);
        assert_eq!(serde_json::to_string(&TopicStatus::Ready).unwrap(), "\"ready\"");
    }

    #[test]
    fn kinds_use_kebab_case() {
        let kind: SubsectionKind = serde_json::from_str("\"practice-group\"").unwrap();
        assert_eq!(kind, SubsectionKind::PracticeGroup);

        let kind: PracticeItemKind = serde_json::from_str("\"short-answer\"").unwrap();
        assert_eq!(kind, PracticeItemKind::ShortAnswer);
    }

    #[test]
    fn practice_item_rejects_unknown_difficulty() {
        let parsed = serde_json::from_str::<Difficulty>("\"extreme\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn fixed_prompt_detection() {
        assert!(practice_item("Write everything you know about ATOMS.").is_fixed_prompt());
        assert!(!practice_item("Write everything you know about {topic}.").is_fixed_prompt());
        assert!(practice_item("A lone { brace").is_fixed_prompt());
    }

    #[test]
    fn subsection_type_field_maps_to_kind() {
        let json = r#"{
            "id": "s1",
            "title": "Mixtures",
            "type": "content",
            "content_html": "<p>notes</p>",
            "canonical_keywords": ["mixture"],
            "practice_items": []
        }"#;

        let subsection: Subsection = serde_json::from_str(json).unwrap();
        assert_eq!(subsection.kind, SubsectionKind::Content);
        assert_eq!(subsection.study_content(), "<p>notes</p>");
        assert!(subsection.practice_item("p1").is_none());
    }
}
