//! The five fixed interest archetypes used for topic labelling.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

pub const ARCHETYPES: &[Archetype] = &[
    Archetype {
        id: "tech",
        title: "Tech Innovator",
        description: "Building software, startups, and digital products",
        keywords: &["software", "coding", "startup", "tech", "developer", "programming", "app", "web"],
    },
    Archetype {
        id: "research",
        title: "Research Pioneer",
        description: "Academic research, labs, and discovery",
        keywords: &["research", "lab", "phd", "academic", "publish", "experiment", "discovery", "science"],
    },
    Archetype {
        id: "impact",
        title: "Social Impact Leader",
        description: "Nonprofits, policy, and community change",
        keywords: &["nonprofit", "policy", "community", "social impact", "advocacy", "justice", "sustainability"],
    },
    Archetype {
        id: "creative",
        title: "Creative Professional",
        description: "Design, arts, media, and content",
        keywords: &["design", "art", "creative", "media", "film", "music", "writing", "content"],
    },
    Archetype {
        id: "business",
        title: "Business Builder",
        description: "Consulting, finance, and corporate leadership",
        keywords: &["consulting", "finance", "business", "corporate", "management", "leadership", "investment"],
    },
];
