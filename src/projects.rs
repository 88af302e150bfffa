use crate::icons::Icon;

pub const DEFAULT_LOGO: &str = "/vercel.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub logo: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub website_url: Option<&'static str>,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectAction {
    Code(&'static str),
    LiveDemo(&'static str),
}

impl ProjectAction {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectAction::Code(_) => "Code",
            ProjectAction::LiveDemo(_) => "Live Demo",
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            ProjectAction::Code(url) | ProjectAction::LiveDemo(url) => url,
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            ProjectAction::Code(_) => Icon::Github,
            ProjectAction::LiveDemo(_) => Icon::ExternalLink,
        }
    }
}

impl Project {
    pub fn logo_src(&self) -> &'static str {
        if self.logo.is_empty() {
            DEFAULT_LOGO
        } else {
            self.logo
        }
    }

    /// Buttons shown in the card footer, in display order.
    pub fn actions(&self) -> Vec<ProjectAction> {
        self.github_url
            .map(ProjectAction::Code)
            .into_iter()
            .chain(self.website_url.map(ProjectAction::LiveDemo))
            .collect()
    }

    /// Stagger for the card's entrance animation.
    pub fn enter_delay_ms(index: usize) -> usize {
        index * 100
    }
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform with product management, cart functionality, user authentication, and payment processing.",
        logo: "/vercel.svg?height=80&width=80",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Stripe API"],
        github_url: Some("https://github.com/username/ecommerce-platform"),
        website_url: Some("https://ecommerce-platform.example.com"),
        featured: true,
    },
    Project {
        id: 2,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, task assignment, and progress tracking.",
        logo: "/placeholder.svg?height=80&width=80",
        technologies: &["Next.js", "TypeScript", "Tailwind CSS", "Prisma", "PostgreSQL"],
        github_url: Some("https://github.com/username/task-management"),
        website_url: Some("https://task-app.example.com"),
        featured: true,
    },
    Project {
        id: 3,
        title: "Weather Dashboard",
        description: "A weather dashboard that displays current conditions and forecasts for multiple locations with interactive maps.",
        logo: "/placeholder.svg?height=80&width=80",
        technologies: &["JavaScript", "React", "OpenWeather API", "Mapbox API"],
        github_url: Some("https://github.com/username/weather-dashboard"),
        website_url: None,
        featured: false,
    },
    Project {
        id: 4,
        title: "Portfolio Website",
        description: "A personal portfolio website showcasing projects and skills with a modern, responsive design.",
        logo: "/placeholder.svg?height=80&width=80",
        technologies: &["Next.js", "Framer Motion", "Tailwind CSS"],
        github_url: Some("https://github.com/username/portfolio"),
        website_url: Some("https://portfolio.example.com"),
        featured: true,
    },
    Project {
        id: 5,
        title: "Recipe Finder",
        description: "A recipe search application that allows users to find recipes based on ingredients they have on hand.",
        logo: "/placeholder.svg?height=80&width=80",
        technologies: &["React", "Spoonacular API", "CSS Modules"],
        github_url: Some("https://github.com/username/recipe-finder"),
        website_url: Some("https://recipe-finder.example.com"),
        featured: false,
    },
    Project {
        id: 6,
        title: "Markdown Note Taking App",
        description: "A note-taking application with markdown support, tagging, and search functionality.",
        logo: "/placeholder.svg?height=80&width=80",
        technologies: &["TypeScript", "React", "IndexedDB", "Marked.js"],
        github_url: Some("https://github.com/username/markdown-notes"),
        website_url: None,
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_projects_in_order() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>();
        assert_eq!(ids, (1..=6).collect::<Vec<_>>());
    }

    #[test]
    fn test_ids_unique() {
        let ids = PROJECTS.iter().map(|p| p.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), PROJECTS.len());
    }

    #[test]
    fn test_actions_follow_urls() {
        for p in PROJECTS.iter() {
            let actions = p.actions();
            let has_code = actions.iter().any(|a| a.label() == "Code");
            let has_demo = actions.iter().any(|a| a.label() == "Live Demo");
            assert_eq!(has_code, p.github_url.is_some(), "{}", p.title);
            assert_eq!(has_demo, p.website_url.is_some(), "{}", p.title);
        }
    }

    #[test]
    fn test_two_projects_without_demo() {
        let no_demo = PROJECTS
            .iter()
            .filter(|p| !p.actions().iter().any(|a| matches!(a, ProjectAction::LiveDemo(_))))
            .map(|p| p.title)
            .collect::<Vec<_>>();
        assert_eq!(no_demo, vec!["Weather Dashboard", "Markdown Note Taking App"]);
    }

    #[test]
    fn test_action_order_and_hrefs() {
        let actions = PROJECTS[0].actions();
        assert_eq!(
            actions,
            vec![
                ProjectAction::Code("https://github.com/username/ecommerce-platform"),
                ProjectAction::LiveDemo("https://ecommerce-platform.example.com"),
            ]
        );
        assert_eq!(actions[1].href(), "https://ecommerce-platform.example.com");
    }

    #[test]
    fn test_project_without_links_has_no_actions() {
        let p = Project {
            github_url: None,
            ..PROJECTS[2]
        };
        assert!(p.actions().is_empty());
    }

    #[test]
    fn test_source_only_project() {
        let p = &PROJECTS[2];
        assert_eq!(p.title, "Weather Dashboard");
        assert_eq!(
            p.actions(),
            vec![ProjectAction::Code(
                "https://github.com/username/weather-dashboard"
            )]
        );
        assert_eq!(p.actions()[0].icon(), Icon::Github);
    }

    #[test]
    fn test_demo_only_project() {
        let p = Project {
            github_url: None,
            ..PROJECTS[1]
        };
        let actions = p.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].label(), "Live Demo");
        assert_eq!(actions[0].icon(), Icon::ExternalLink);
    }

    #[test]
    fn test_logo_fallback() {
        let p = Project {
            logo: "",
            ..PROJECTS[3]
        };
        assert_eq!(p.logo_src(), DEFAULT_LOGO);
        assert_eq!(PROJECTS[0].logo_src(), "/vercel.svg?height=80&width=80");
    }

    #[test]
    fn test_enter_delay() {
        assert_eq!(Project::enter_delay_ms(0), 0);
        assert_eq!(Project::enter_delay_ms(4), 400);
    }
}
