//! Inline SVG icons in the Lucide style: 24x24 view box, 2px round strokes,
//! no fill. Every icon is a list of path `d` strings drawn with
//! `currentColor`, so it follows the surrounding text colour.

pub const VIEW_BOX: &str = "0 0 24 24";

/// Symbolic icon used by the sections and the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Sun,
    Moon,
    Monitor,
    Code,
    Database,
    Server,
    Globe,
    Cpu,
    Terminal,
    Layers,
    GitBranch,
    Workflow,
    Paintbrush,
    BarChart,
    ExternalLink,
    Github,
    Linkedin,
    Mail,
    ArrowRight,
}

impl Icon {
    pub const ALL: [Icon; 19] = [
        Icon::Sun,
        Icon::Moon,
        Icon::Monitor,
        Icon::Code,
        Icon::Database,
        Icon::Server,
        Icon::Globe,
        Icon::Cpu,
        Icon::Terminal,
        Icon::Layers,
        Icon::GitBranch,
        Icon::Workflow,
        Icon::Paintbrush,
        Icon::BarChart,
        Icon::ExternalLink,
        Icon::Github,
        Icon::Linkedin,
        Icon::Mail,
        Icon::ArrowRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Icon::Sun => "sun",
            Icon::Moon => "moon",
            Icon::Monitor => "monitor",
            Icon::Code => "code",
            Icon::Database => "database",
            Icon::Server => "server",
            Icon::Globe => "globe",
            Icon::Cpu => "cpu",
            Icon::Terminal => "terminal",
            Icon::Layers => "layers",
            Icon::GitBranch => "git-branch",
            Icon::Workflow => "workflow",
            Icon::Paintbrush => "paintbrush",
            Icon::BarChart => "bar-chart",
            Icon::ExternalLink => "external-link",
            Icon::Github => "github",
            Icon::Linkedin => "linkedin",
            Icon::Mail => "mail",
            Icon::ArrowRight => "arrow-right",
        }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Sun => ICON_SUN,
            Icon::Moon => ICON_MOON,
            Icon::Monitor => ICON_MONITOR,
            Icon::Code => ICON_CODE,
            Icon::Database => ICON_DATABASE,
            Icon::Server => ICON_SERVER,
            Icon::Globe => ICON_GLOBE,
            Icon::Cpu => ICON_CPU,
            Icon::Terminal => ICON_TERMINAL,
            Icon::Layers => ICON_LAYERS,
            Icon::GitBranch => ICON_GIT_BRANCH,
            Icon::Workflow => ICON_WORKFLOW,
            Icon::Paintbrush => ICON_PAINTBRUSH,
            Icon::BarChart => ICON_BAR_CHART,
            Icon::ExternalLink => ICON_EXTERNAL_LINK,
            Icon::Github => ICON_GITHUB,
            Icon::Linkedin => ICON_LINKEDIN,
            Icon::Mail => ICON_MAIL,
            Icon::ArrowRight => ICON_ARROW_RIGHT,
        }
    }
}

// Circles and rectangles are written as paths so every icon is one list.

pub const ICON_SUN: &[&str] = &[
    "M8 12a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
    "M12 2v2",
    "M12 20v2",
    "m4.93 4.93 1.41 1.41",
    "m17.66 17.66 1.41 1.41",
    "M2 12h2",
    "M20 12h2",
    "m6.34 17.66-1.41 1.41",
    "m19.07 4.93-1.41 1.41",
];

pub const ICON_MOON: &[&str] = &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"];

pub const ICON_MONITOR: &[&str] = &[
    "M4 3h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M8 21h8",
    "M12 17v4",
];

pub const ICON_CODE: &[&str] = &["m16 18 6-6-6-6", "m8 6-6 6 6 6"];

pub const ICON_DATABASE: &[&str] = &[
    "M3 5a9 3 0 1 0 18 0a9 3 0 1 0-18 0",
    "M3 5v14a9 3 0 0 0 18 0V5",
    "M3 12a9 3 0 0 0 18 0",
];

pub const ICON_SERVER: &[&str] = &[
    "M4 2h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
    "M4 14h16a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
    "M6 6h.01",
    "M6 18h.01",
];

pub const ICON_GLOBE: &[&str] = &[
    "M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0",
    "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
    "M2 12h20",
];

pub const ICON_CPU: &[&str] = &[
    "M6 4h12a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "M9 9h6v6H9z",
    "M15 2v2",
    "M15 20v2",
    "M2 15h2",
    "M2 9h2",
    "M20 15h2",
    "M20 9h2",
    "M9 2v2",
    "M9 20v2",
];

pub const ICON_TERMINAL: &[&str] = &["m4 17 6-6-6-6", "M12 19h8"];

pub const ICON_LAYERS: &[&str] = &[
    "m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z",
    "m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65",
    "m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65",
];

pub const ICON_GIT_BRANCH: &[&str] = &[
    "M6 3v12",
    "M15 6a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
    "M3 18a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
    "M18 9a9 9 0 0 1-9 9",
];

pub const ICON_WORKFLOW: &[&str] = &[
    "M5 3h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
    "M7 11v4a2 2 0 0 0 2 2h4",
    "M15 13h4a2 2 0 0 1 2 2v4a2 2 0 0 1-2 2h-4a2 2 0 0 1-2-2v-4a2 2 0 0 1 2-2z",
];

pub const ICON_PAINTBRUSH: &[&str] = &[
    "m14.622 17.897-10.68-2.913",
    "M18.376 2.622a1 1 0 1 1 3.002 3.002L17.36 9.643a.5.5 0 0 0 0 .707l.944.944a2.41 2.41 0 0 1 0 3.408l-.944.944a.5.5 0 0 1-.707 0L8.354 7.348a.5.5 0 0 1 0-.707l.944-.944a2.41 2.41 0 0 1 3.408 0l.944.944a.5.5 0 0 0 .707 0z",
    "M9 8c-1.804 2.71-3.97 3.46-6.583 3.948a.507.507 0 0 0-.302.819l7.32 8.883a1 1 0 0 0 1.185.204C12.735 20.405 16 16.792 16 15",
];

pub const ICON_BAR_CHART: &[&str] = &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"];

pub const ICON_EXTERNAL_LINK: &[&str] = &[
    "M15 3h6v6",
    "M10 14 21 3",
    "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
];

pub const ICON_GITHUB: &[&str] = &[
    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
    "M9 18c-4.51 2-5-2-7-2",
];

pub const ICON_LINKEDIN: &[&str] = &[
    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
    "M2 9h4v12H2z",
    "M2 4a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
];

pub const ICON_MAIL: &[&str] = &[
    "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
];

pub const ICON_ARROW_RIGHT: &[&str] = &["M5 12h14", "m12 5 7 7-7 7"];
