use std::{collections::HashSet, fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::models::domain::{Subsection, TopicSection, TopicStatus};

const BUNDLED_SECTIONS: &str = include_str!("../../data/sections.json");

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalogue: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalogue: {0}")]
    Invalid(String),
}

#[derive(Debug, Deserialize)]
struct CatalogueDocument {
    topics: Vec<TopicSection>,
}

/// The static study content. Loaded once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Catalogue {
    topics: Vec<TopicSection>,
}

impl Catalogue {
    pub fn bundled() -> Result<Self, CatalogueError> {
        Self::from_json(BUNDLED_SECTIONS)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogueError> {
        let document: CatalogueDocument = serde_json::from_str(raw)?;
        validate(&document.topics)?;
        Ok(Self {
            topics: document.topics,
        })
    }

    pub fn topics(&self) -> &[TopicSection] {
        &self.topics
    }

    pub fn ready_topics(&self) -> impl Iterator<Item = &TopicSection> {
        self.topics.iter().filter(|topic| topic.is_ready())
    }

    pub fn topic(&self, id: &str) -> Option<&TopicSection> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    pub fn subsection(&self, topic_id: &str, subsection_id: &str) -> Option<&Subsection> {
        self.topic(topic_id)?
            .subsections
            .iter()
            .find(|subsection| subsection.id == subsection_id)
    }
}

fn validate(topics: &[TopicSection]) -> Result<(), CatalogueError> {
    let mut topic_ids = HashSet::new();

    for topic in topics {
        if !topic_ids.insert(topic.id.as_str()) {
            return Err(CatalogueError::Invalid(format!(
                "duplicate topic id '{}'",
                topic.id
            )));
        }

        if topic.status == TopicStatus::ComingSoon && !topic.subsections.is_empty() {
            return Err(CatalogueError::Invalid(format!(
                "topic '{}' is coming_soon but has {} subsection(s)",
                topic.id,
                topic.subsections.len()
            )));
        }

        for subsection in &topic.subsections {
            let mut item_ids = HashSet::new();
            for item in &subsection.practice_items {
                if !item_ids.insert(item.id.as_str()) {
                    return Err(CatalogueError::Invalid(format!(
                        "duplicate practice item id '{}' in subsection '{}'",
                        item.id, subsection.id
                    )));
                }
            }
        }
    }

    Ok(())
}
