//! Compiled-in content for the routed pages. All data is static; the only
//! runtime state is the reveal counter for the paginated lists.

/// How many list items the paginated pages show before "show all".
pub(crate) const INITIAL_REVEAL: usize = 3;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Project {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
    pub(crate) tech: &'static [&'static str],
    pub(crate) link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Certificate {
    pub(crate) name: &'static str,
    pub(crate) issuer: &'static str,
    pub(crate) year: u16,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TechGroup {
    pub(crate) name: &'static str,
    pub(crate) items: &'static [&'static str],
}

pub(crate) const ABOUT_PARAGRAPHS: &[&str] = &[
    "Hi, I'm Arman — a software engineer who enjoys building tools that \
     feel fast and look considered. I care about the seams: where design \
     meets implementation and where systems meet the people using them.",
    "Over the last few years I've shipped web applications, internal \
     platforms and a handful of open source libraries. I like owning a \
     problem end to end, from the first sketch to the dashboards that \
     prove it works.",
    "Away from the keyboard I climb, take photographs and collect \
     mechanical keyboards I absolutely do not need.",
];

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        name: "Ledgerline",
        summary: "Double-entry budgeting app with offline-first sync and \
                  end-to-end encrypted vaults.",
        tech: &["Rust", "SQLite", "gRPC"],
        link: "https://github.com/armandev/ledgerline",
    },
    Project {
        name: "Driftwatch",
        summary: "Config drift detector for small fleets; diffs live state \
                  against declared manifests and raises typed alerts.",
        tech: &["Rust", "Tokio", "Prometheus"],
        link: "https://github.com/armandev/driftwatch",
    },
    Project {
        name: "Pressboard",
        summary: "Static site generator for photo essays with responsive \
                  image pipelines baked in.",
        tech: &["TypeScript", "Sharp", "Vite"],
        link: "https://github.com/armandev/pressboard",
    },
    Project {
        name: "Hexhound",
        summary: "Terminal hex viewer with structure-aware highlighting \
                  driven by declarative binary grammars.",
        tech: &["Rust", "ratatui"],
        link: "https://github.com/armandev/hexhound",
    },
    Project {
        name: "Queuecumber",
        summary: "Tiny embeddable job queue with cron-style scheduling and \
                  at-least-once delivery.",
        tech: &["Rust", "PostgreSQL"],
        link: "https://github.com/armandev/queuecumber",
    },
    Project {
        name: "Shutterlog",
        summary: "EXIF-driven photo journal that turns a camera roll into \
                  a searchable shooting diary.",
        tech: &["Python", "FastAPI", "SQLite"],
        link: "https://github.com/armandev/shutterlog",
    },
];

pub(crate) const CERTIFICATES: &[Certificate] = &[
    Certificate {
        name: "AWS Certified Solutions Architect — Associate",
        issuer: "Amazon Web Services",
        year: 2024,
    },
    Certificate {
        name: "CKA: Certified Kubernetes Administrator",
        issuer: "Cloud Native Computing Foundation",
        year: 2023,
    },
    Certificate {
        name: "Professional Scrum Master I",
        issuer: "Scrum.org",
        year: 2022,
    },
    Certificate {
        name: "Google UX Design Certificate",
        issuer: "Google",
        year: 2022,
    },
    Certificate {
        name: "Deep Learning Specialization",
        issuer: "DeepLearning.AI",
        year: 2021,
    },
];

pub(crate) const TECH_GROUPS: &[TechGroup] = &[
    TechGroup {
        name: "Languages",
        items: &["Rust", "TypeScript", "Python", "Go", "SQL"],
    },
    TechGroup {
        name: "Frontend",
        items: &["React", "Svelte", "Tailwind CSS", "Vite"],
    },
    TechGroup {
        name: "Backend & Data",
        items: &["Tokio", "Actix", "PostgreSQL", "Redis", "Kafka"],
    },
    TechGroup {
        name: "Infrastructure",
        items: &["Kubernetes", "Terraform", "AWS", "GitHub Actions"],
    },
];
