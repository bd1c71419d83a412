use serde::Serialize;

pub type ProjectId = u32;

/// A single portfolio entry. The catalog is fixed at compile time; cards and
/// the detail overlay only ever read from it.
#[derive(Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: ProjectId,
    pub title: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    pub image: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video: Option<&'static str>,
}

const PROJECTS: &[ProjectRecord] = &[
    ProjectRecord {
        id: 1,
        title: "Lumen Gifts",
        short_description: "The starting point (2022). Full-cycle e-commerce.",
        description: "In 2022 the family business needed to sell online and nobody \
knew where to start. I spent weeks researching, then built the storefront from \
scratch on a hosted commerce platform, adapted it for live-personalized products, \
and took over SEO, the merchant feed, the business profile and the ad campaigns. \
Three months of work turned into a store that pays its own bills.",
        tech: &["Shopify Liquid", "SEO", "Google Merchant", "Ads"],
        link: Some("https://lumengifts.example.com"),
        image: "/media/images/lumen-gifts.jpg",
        video: Some("/media/videos/lumen-gifts.mp4"),
    },
    ProjectRecord {
        id: 2,
        title: "Systems Fundamentals",
        short_description: "Opening the black box.",
        description: "After shipping by instinct I went back to school to learn why \
things work. The degree years were where \"make it run\" turned into \"design it \
properly\": data structures, algorithmic thinking, and the habit of reaching for \
the simplest architecture that survives contact with real users.",
        tech: &["Java", "Algorithms", "Data Structures", "Resilience"],
        link: None,
        image: "/media/images/systems-fundamentals.jpg",
        video: None,
    },
    ProjectRecord {
        id: 3,
        title: "Atelier Laser",
        short_description: "Performance and user experience.",
        description: "A B2B corporate site built around Core Web Vitals and \
technical SEO. A modern React + Vite stack deployed on the edge keeps first paint \
effectively instant, and a monthly content pipeline plus conversion-tuned forms \
turn that speed into inquiries.",
        tech: &["React", "TypeScript", "Vite", "Vercel", "Technical SEO"],
        link: Some("https://atelierlaser.example.com"),
        image: "/media/images/atelier-laser.jpg",
        video: Some("/media/videos/atelier-laser.mp4"),
    },
    ProjectRecord {
        id: 4,
        title: "Freight Orchestrator",
        short_description: "The big one (in progress).",
        description: "The most ambitious build so far: a full-stack platform that \
connects the storefront with carriers and marketplaces. It manages product \
personalization, generates shipping labels automatically and prints the logistics \
paperwork, with marketplace order ingestion currently being folded into the same \
dashboard. One screen for the whole operation.",
        tech: &["Spring Boot", "Docker", "Shopify API", "Amazon API", "React"],
        link: None,
        image: "/media/images/freight-orchestrator.jpg",
        video: Some("/media/videos/freight-orchestrator.mp4"),
    },
];

pub fn all() -> &'static [ProjectRecord] {
    PROJECTS
}

pub fn find(id: ProjectId) -> Option<&'static ProjectRecord> {
    PROJECTS.iter().find(|record| record.id == id)
}
