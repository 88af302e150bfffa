use crate::icons::Icon;

/// Site owner details shared by the navigation bar and the hero.
pub const FULL_NAME: &str = "Arthur 'ZAROC' Aktamirov";
pub const SITE_TITLE: &str = "ZAROC";
pub const ROLE: &str = "Full Stack Developer";
pub const DESCRIPTION: &str = "Fullstack DEV";
pub const INTRO: &str = "I build exceptional and accessible digital experiences for the web. Focused on creating intuitive, user-friendly applications that solve real-world problems.";

pub const EMAIL: &str = "arthur@aktamirov.de";
pub const GITHUB_URL: &str = "https://github.com/username";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/arthur-aktamirov";

pub fn mailto() -> String {
    format!("mailto:{EMAIL}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    GitHub,
    LinkedIn,
    Email,
}

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    pub fn href(&self) -> String {
        match self.kind {
            SocialKind::Email => mailto(),
            _ => self.href.to_string(),
        }
    }

    pub fn icon(&self) -> Icon {
        match self.kind {
            SocialKind::GitHub => Icon::Github,
            SocialKind::LinkedIn => Icon::Linkedin,
            SocialKind::Email => Icon::Mail,
        }
    }

    /// Mail links open in place, everything else in a new tab.
    pub fn opens_new_tab(&self) -> bool {
        self.kind != SocialKind::Email
    }
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        kind: SocialKind::GitHub,
        label: "GitHub",
        href: GITHUB_URL,
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "LinkedIn",
        href: LINKEDIN_URL,
    },
    SocialLink {
        kind: SocialKind::Email,
        label: "Email",
        href: EMAIL,
    },
];
