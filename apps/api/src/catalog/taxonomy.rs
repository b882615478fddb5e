//! Domain taxonomy: keyword categories for text matching, domain tags for
//! layout clustering, and the direct role-name overrides.
//!
//! Taxonomy *categories* drive text matching. Domain *tags* only decide which
//! layout wedge a career lands in. The two vocabularies overlap by name but are
//! independent.

/// A named group of keyword phrases used to detect what a submission talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxonomyCategory {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// An exact role mention that forces one career to the top of the ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectPhrase {
    pub phrase: &'static str,
    pub career_id: &'static str,
}

/// Tag used for careers that have no entry in [`CAREER_DOMAIN`].
pub const OTHER_DOMAIN: &str = "other";

/// Wedge order for the domain layout, clockwise from angle zero.
pub const DOMAIN_ORDER: &[&str] = &[
    "tech",
    "data",
    "engineering",
    "healthcare",
    "finance",
    "marketing",
    "creative",
    "business",
    "product",
    OTHER_DOMAIN,
];

/// Curated set shown when the user skips the questionnaire.
pub const DEFAULT_EXPLORE_IDS: &[&str] = &[
    "software-developer",
    "data-analyst",
    "digital-marketing-manager",
    "product-owner",
    "management-consultant",
    "ux-designer",
    "growth-hacker",
    "venture-capital-associate",
    "healthcare-analyst",
    "content-strategist",
    "project-manager",
    "journalist",
];

// Substring-matched against the lowercased text; "vc " keeps its trailing space.
pub const DIRECT_PHRASES: &[DirectPhrase] = &[
    DirectPhrase { phrase: "product marketing", career_id: "product-marketing-manager" },
    DirectPhrase { phrase: "growth hacker", career_id: "growth-hacker" },
    DirectPhrase { phrase: "growth lead", career_id: "growth-hacker" },
    DirectPhrase { phrase: "venture capital", career_id: "venture-capital-associate" },
    DirectPhrase { phrase: "vc ", career_id: "venture-capital-associate" },
    DirectPhrase { phrase: "startup", career_id: "startup-operator" },
    DirectPhrase { phrase: "entrepreneur", career_id: "startup-operator" },
    DirectPhrase { phrase: "entrepreneurship", career_id: "startup-operator" },
];

pub const CAREER_MATCH_KEYWORDS: &[TaxonomyCategory] = &[
    TaxonomyCategory {
        name: "tech",
        keywords: &[
            "software",
            "developer",
            "engineer",
            "programming",
            "web",
            "tech",
            "computer",
            "coding",
            "ai",
            "machine learning",
            "cloud",
            "devops",
            "applications",
            "product",
        ],
    },
    TaxonomyCategory {
        name: "data",
        keywords: &[
            "data",
            "analytics",
            "analysis",
            "metrics",
            "sql",
            "excel",
            "dashboard",
            "report",
        ],
    },
    TaxonomyCategory {
        name: "research",
        keywords: &[
            "scientist",
            "research",
            "academic",
            "lab",
            "experiment",
            "discovery",
            "publish",
        ],
    },
    TaxonomyCategory {
        name: "impact",
        keywords: &[
            "environmental",
            "sustainability",
            "policy",
            "community",
            "social",
            "nonprofit",
            "esg",
            "carbon",
        ],
    },
    TaxonomyCategory {
        name: "creative",
        keywords: &[
            "design",
            "creative",
            "art",
            "arts",
            "artist",
            "media",
            "content",
            "brand",
            "visual",
            "science communication",
            "storytelling",
        ],
    },
    TaxonomyCategory {
        name: "business",
        keywords: &[
            "business",
            "analyst",
            "sales",
            "management",
            "quant",
            "consulting",
            "strategy",
            "investment",
            "banking",
            "finance",
        ],
    },
    TaxonomyCategory {
        name: "architecture",
        keywords: &[
            "architecture",
            "architect",
            "building",
            "space",
            "interior",
            "landscape",
            "cad",
            "bim",
            "design buildings",
        ],
    },
    TaxonomyCategory {
        name: "marketing",
        keywords: &[
            "marketing",
            "campaign",
            "content",
            "digital",
            "brand",
            "growth",
            "product marketing",
        ],
    },
    TaxonomyCategory {
        name: "sales",
        keywords: &[
            "sales",
            "outbound",
            "prospect",
            "account",
            "customer",
            "revenue",
            "quota",
        ],
    },
    TaxonomyCategory {
        name: "healthcare",
        keywords: &[
            "healthcare",
            "health",
            "clinical",
            "patient",
            "medical",
        ],
    },
    TaxonomyCategory {
        name: "education",
        keywords: &[
            "education",
            "teaching",
            "training",
            "instructional",
            "learning",
            "edtech",
        ],
    },
    TaxonomyCategory {
        name: "legal",
        keywords: &[
            "legal",
            "law",
            "paralegal",
            "contract",
            "compliance",
        ],
    },
    TaxonomyCategory {
        name: "project",
        keywords: &[
            "project",
            "pm",
            "scrum",
            "agile",
            "coordinate",
        ],
    },
    TaxonomyCategory {
        name: "hr",
        keywords: &[
            "hr",
            "people",
            "talent",
            "recruiting",
            "workforce",
        ],
    },
    TaxonomyCategory {
        name: "game",
        keywords: &[
            "game",
            "gaming",
            "unity",
            "unreal",
        ],
    },
    TaxonomyCategory {
        name: "journalism",
        keywords: &[
            "journalism",
            "reporter",
            "writer",
            "media",
            "story",
        ],
    },
    TaxonomyCategory {
        name: "supplychain",
        keywords: &[
            "supply chain",
            "logistics",
            "procurement",
            "inventory",
        ],
    },
    TaxonomyCategory {
        name: "security",
        keywords: &[
            "security",
            "cyber",
            "infosec",
            "penetration",
        ],
    },
    TaxonomyCategory {
        name: "biomedical",
        keywords: &[
            "biomedical",
            "medical device",
            "pharma",
            "clinical",
        ],
    },
    TaxonomyCategory {
        name: "events",
        keywords: &[
            "event",
            "conference",
            "planning",
            "coordination",
        ],
    },
    TaxonomyCategory {
        name: "urban",
        keywords: &[
            "urban",
            "planning",
            "city",
            "zoning",
        ],
    },
    TaxonomyCategory {
        name: "venture",
        keywords: &[
            "venture",
            "vc",
            "startup",
            "investment",
            "entrepreneurship",
            "entrepreneur",
            "founder",
            "operator",
        ],
    },
    TaxonomyCategory {
        name: "polymath",
        keywords: &[
            "polymath",
            "many interests",
            "intersection",
            "cross-domain",
            "wicked",
            "innovation",
            "futures",
            "design strategy",
            "service design",
            "health tech",
        ],
    },
];

/// Career id → domain tag.
pub const CAREER_DOMAIN: &[(&str, &str)] = &[
    ("product-owner", "product"),
    ("ai-product-manager", "product"),
    ("product-analyst", "product"),
    ("product-marketing-manager", "product"),
    ("data-scientist", "data"),
    ("data-engineer", "data"),
    ("data-analyst", "data"),
    ("business-intelligence", "data"),
    ("software-developer", "tech"),
    ("web-developer", "tech"),
    ("cloud-engineer", "tech"),
    ("devops-engineer", "tech"),
    ("mobile-developer", "tech"),
    ("qa-engineer", "tech"),
    ("computer-programmer", "tech"),
    ("ai-engineer", "tech"),
    ("machine-learning-engineer", "tech"),
    ("software-architect", "tech"),
    ("embedded-systems-engineer", "tech"),
    ("security-engineer", "tech"),
    ("database-administrator", "tech"),
    ("cybersecurity-analyst", "tech"),
    ("game-developer", "tech"),
    ("technical-writer", "tech"),
    ("computer-scientist", "tech"),
    ("network-engineer", "tech"),
    ("growth-hacker", "tech"),
    ("robotics-engineer", "engineering"),
    ("robotics-technician", "engineering"),
    ("robotics-software-engineer", "engineering"),
    ("hardware-engineer", "engineering"),
    ("manufacturing-engineer", "engineering"),
    ("industrial-engineer", "engineering"),
    ("biomedical-engineer", "healthcare"),
    ("healthcare-analyst", "healthcare"),
    ("pharmaceutical-scientist", "healthcare"),
    ("environmental-engineer", "engineering"),
    ("validation-engineer", "engineering"),
    ("investment-banking-analyst", "finance"),
    ("financial-analyst", "finance"),
    ("quantitative-analyst", "finance"),
    ("venture-capital-associate", "finance"),
    ("startup-operator", "finance"),
    ("digital-marketing-manager", "marketing"),
    ("content-strategist", "marketing"),
    ("brand-manager", "marketing"),
    ("social-media-manager", "marketing"),
    ("ux-designer", "creative"),
    ("architect", "creative"),
    ("interior-designer", "creative"),
    ("landscape-architect", "creative"),
    ("journalist", "creative"),
    ("event-planner", "creative"),
    ("business-analyst", "business"),
    ("management-consultant", "business"),
    ("project-manager", "business"),
    ("account-executive", "business"),
    ("sales-development-rep", "business"),
    ("customer-success-manager", "business"),
    ("sales-engineer", "business"),
    ("hr-analyst", "business"),
    ("recruiter", "business"),
    ("supply-chain-analyst", "business"),
    ("paralegal", "business"),
    ("urban-planner", "creative"),
    ("science-communicator", "creative"),
    ("edtech-product", "product"),
    ("design-strategist", "creative"),
    ("health-tech-product", "product"),
    ("sustainability-analyst", "business"),
    ("innovation-consultant", "business"),
];

/// Domain tag for a career, or `None` when the career is unmapped.
pub fn domain_of(career_id: &str) -> Option<&'static str> {
    CAREER_DOMAIN
        .iter()
        .find(|(id, _)| *id == career_id)
        .map(|(_, domain)| *domain)
}

/// Wedge index for a domain tag. Tags missing from [`DOMAIN_ORDER`] fall into wedge 0.
pub fn wedge_index(domain: &str) -> usize {
    DOMAIN_ORDER.iter().position(|d| *d == domain).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::careers::CAREER_PATHS;
    use std::collections::HashSet;

    #[test]
    fn test_every_mapped_domain_is_ordered() {
        for (id, domain) in CAREER_DOMAIN {
            assert!(DOMAIN_ORDER.contains(domain), "{id} → {domain} missing from order");
        }
    }

    #[test]
    fn test_domain_map_references_catalog_ids() {
        let ids: HashSet<&str> = CAREER_PATHS.iter().map(|c| c.id).collect();
        for (id, _) in CAREER_DOMAIN {
            assert!(ids.contains(id), "unknown career id {id}");
        }
    }

    #[test]
    fn test_direct_phrases_target_catalog_ids() {
        for dp in DIRECT_PHRASES {
            assert!(
                CAREER_PATHS.iter().any(|c| c.id == dp.career_id),
                "{} → {}",
                dp.phrase,
                dp.career_id
            );
        }
    }

    #[test]
    fn test_default_explore_ids_exist() {
        assert_eq!(DEFAULT_EXPLORE_IDS.len(), 12);
        for id in DEFAULT_EXPLORE_IDS {
            assert!(CAREER_PATHS.iter().any(|c| c.id == *id), "{id}");
        }
    }

    #[test]
    fn test_category_names_unique() {
        let names: HashSet<&str> = CAREER_MATCH_KEYWORDS.iter().map(|c| c.name).collect();
        assert_eq!(names.len(), CAREER_MATCH_KEYWORDS.len());
    }

    #[test]
    fn test_domain_of_and_wedge_index() {
        assert_eq!(domain_of("growth-hacker"), Some("tech"));
        assert_eq!(domain_of("corporate-trainer"), None);
        assert_eq!(wedge_index("tech"), 0);
        assert_eq!(wedge_index("product"), 8);
        assert_eq!(wedge_index("astrology"), 0);
    }
}
