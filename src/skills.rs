use crate::icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Technology {
    pub name: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    /// Gradient and text colour classes for the card.
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechCategory {
    pub category: &'static str,
    pub items: &'static [Technology],
}

impl TechCategory {
    pub fn enter_delay_ms(category_index: usize) -> usize {
        category_index * 200
    }
}

impl Technology {
    pub fn enter_delay_ms(index: usize, category_index: usize) -> usize {
        index * 50 + category_index * 100
    }
}

pub const TECHNOLOGIES: [TechCategory; 4] = [
    TechCategory {
        category: "Frontend",
        items: &[
            Technology {
                name: "HTML5",
                description: "Semantic markup and accessibility",
                icon: Icon::Code,
                color: "from-orange-500/20 to-orange-600/20 text-orange-500",
            },
            Technology {
                name: "CSS3",
                description: "Advanced styling with animations and flexbox/grid",
                icon: Icon::Paintbrush,
                color: "from-blue-500/20 to-blue-600/20 text-blue-500",
            },
            Technology {
                name: "JavaScript",
                description: "ES6+, async/await, and DOM manipulation",
                icon: Icon::Terminal,
                color: "from-yellow-500/20 to-yellow-600/20 text-yellow-500",
            },
            Technology {
                name: "React",
                description: "Component-based UI with hooks and context",
                icon: Icon::Layers,
                color: "from-cyan-500/20 to-cyan-600/20 text-cyan-500",
            },
            Technology {
                name: "Next.js",
                description: "React framework with SSR and routing",
                icon: Icon::Globe,
                color: "from-slate-500/20 to-slate-600/20 text-slate-400",
            },
            Technology {
                name: "Tailwind CSS",
                description: "Utility-first CSS framework",
                icon: Icon::Paintbrush,
                color: "from-sky-500/20 to-sky-600/20 text-sky-500",
            },
        ],
    },
    TechCategory {
        category: "Backend",
        items: &[
            Technology {
                name: "Node.js",
                description: "JavaScript runtime for server-side development",
                icon: Icon::Server,
                color: "from-green-500/20 to-green-600/20 text-green-500",
            },
            Technology {
                name: "Express",
                description: "Web framework for Node.js",
                icon: Icon::Workflow,
                color: "from-gray-500/20 to-gray-600/20 text-gray-400",
            },
            Technology {
                name: "PostgreSQL",
                description: "Relational database management system",
                icon: Icon::Database,
                color: "from-indigo-500/20 to-indigo-600/20 text-indigo-500",
            },
            Technology {
                name: "MongoDB",
                description: "NoSQL document database",
                icon: Icon::Database,
                color: "from-emerald-500/20 to-emerald-600/20 text-emerald-500",
            },
            Technology {
                name: "REST API",
                description: "RESTful architecture for web services",
                icon: Icon::Globe,
                color: "from-purple-500/20 to-purple-600/20 text-purple-500",
            },
            Technology {
                name: "GraphQL",
                description: "Query language for APIs",
                icon: Icon::BarChart,
                color: "from-pink-500/20 to-pink-600/20 text-pink-500",
            },
        ],
    },
    TechCategory {
        category: "DevOps & Tools",
        items: &[
            Technology {
                name: "Git",
                description: "Version control system",
                icon: Icon::GitBranch,
                color: "from-red-500/20 to-red-600/20 text-red-500",
            },
            Technology {
                name: "Docker",
                description: "Containerization platform",
                icon: Icon::Cpu,
                color: "from-blue-500/20 to-blue-600/20 text-blue-500",
            },
            Technology {
                name: "CI/CD",
                description: "Continuous integration and deployment",
                icon: Icon::Workflow,
                color: "from-amber-500/20 to-amber-600/20 text-amber-500",
            },
        ],
    },
    TechCategory {
        category: "Languages",
        items: &[
            Technology {
                name: "TypeScript",
                description: "Typed superset of JavaScript",
                icon: Icon::Code,
                color: "from-blue-500/20 to-blue-600/20 text-blue-500",
            },
            Technology {
                name: "Python",
                description: "General-purpose programming language",
                icon: Icon::Terminal,
                color: "from-yellow-500/20 to-yellow-600/20 text-yellow-500",
            },
            Technology {
                name: "SQL",
                description: "Language for database management",
                icon: Icon::Database,
                color: "from-violet-500/20 to-violet-600/20 text-violet-500",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_category_layout() {
        let layout = TECHNOLOGIES
            .iter()
            .map(|c| (c.category, c.items.len()))
            .collect::<Vec<_>>();
        assert_eq!(
            layout,
            vec![
                ("Frontend", 6),
                ("Backend", 6),
                ("DevOps & Tools", 3),
                ("Languages", 3),
            ]
        );
    }

    #[test]
    fn test_names_unique_within_category() {
        for c in TECHNOLOGIES.iter() {
            let names = c.items.iter().map(|t| t.name).collect::<HashSet<_>>();
            assert_eq!(names.len(), c.items.len(), "{}", c.category);
        }
        let categories = TECHNOLOGIES
            .iter()
            .map(|c| c.category)
            .collect::<HashSet<_>>();
        assert_eq!(categories.len(), TECHNOLOGIES.len());
    }

    #[test]
    fn test_colors_carry_gradient_and_text() {
        for t in TECHNOLOGIES.iter().flat_map(|c| c.items.iter()) {
            assert!(t.color.starts_with("from-"), "{}", t.name);
            assert!(t.color.contains(" text-"), "{}", t.name);
        }
    }

    #[test]
    fn test_delays() {
        assert_eq!(TechCategory::enter_delay_ms(3), 600);
        assert_eq!(Technology::enter_delay_ms(2, 1), 200);
    }
}
