//! Static content tables rendered by the portfolio page.
//!
//! Everything here is fixed at build time and rendered in declaration order.
//! Asset paths are opaque identifiers resolved by the host webview.

/// Page sections that can be targeted by in-page navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Anchor id of the section element.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }
}

/// A header navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

/// A skill card with its proficiency bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillEntry {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100
    pub level: u8,
    /// CSS accent class for the bar fill
    pub accent: &'static str,
    pub icon: &'static str,
}

impl SkillEntry {
    pub fn level_label(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

/// Built-in glyphs used in place of a screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectGlyph {
    Weather,
    Music,
}

impl ProjectGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            ProjectGlyph::Weather => "\u{26C5}",
            ProjectGlyph::Music => "\u{266B}",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ProjectGlyph::Weather => "project-glyph weather",
            ProjectGlyph::Music => "project-glyph music",
        }
    }
}

/// Project card media.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectMedia {
    Image(&'static str),
    Glyph(ProjectGlyph),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub title: &'static str,
    pub media: ProjectMedia,
    pub tech: &'static str,
    pub description: &'static str,
    pub live: &'static str,
    pub repo: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Email,
    WhatsApp,
    LinkedIn,
    GitHub,
}

impl SocialKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            SocialKind::Email => "contact-link email",
            SocialKind::WhatsApp => "contact-link whatsapp",
            SocialKind::LinkedIn => "contact-link linkedin",
            SocialKind::GitHub => "contact-link github",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SocialKind::Email => "\u{2709}",
            SocialKind::WhatsApp => "\u{260E}",
            SocialKind::LinkedIn => "in",
            SocialKind::GitHub => "\u{2387}",
        }
    }
}

/// An outbound contact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: &'static str,
    pub href: &'static str,
}

impl SocialLink {
    /// Whether the host should open the link outside the page.
    pub fn opens_externally(&self) -> bool {
        self.href.starts_with("http")
    }

    /// Anchor `target` attribute value.
    pub fn target(&self) -> &'static str {
        if self.opens_externally() { "_blank" } else { "_self" }
    }
}

/// A highlight chip in the About section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub accent: &'static str,
}

/// Owner details shown across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub brand: &'static str,
    pub logo: &'static str,
    pub portrait: &'static str,
    pub about_photo: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub focus: &'static str,
    pub mission: &'static str,
    pub badges: &'static [Badge],
}

impl Profile {
    pub fn greeting(&self) -> String {
        format!("Hi, I'm {}", self.name)
    }

    pub fn copyright(&self, year: i32) -> String {
        format!("\u{00A9} {} {}. All rights reserved.", year, self.name)
    }
}

pub const PROFILE: Profile = Profile {
    name: "Niladri Roy",
    brand: "Blues",
    logo: "Screenshot 2024-01-14 123726.png",
    portrait: "Screenshot 2024-01-16 210422.png",
    about_photo: "your-profile-image.jpg",
    degree: "BCA",
    institution: "Techno Main Salt Lake",
    focus: "Web Development, AI, and Machine Learning",
    mission: "My goal is to build innovative solutions that bridge technology and real-world problems.",
    badges: &[
        Badge { label: "Web Developer \u{1F4BB}", accent: "badge blue" },
        Badge { label: "AI/ML Enthusiast \u{1F916}", accent: "badge green" },
        Badge { label: "Tech Explorer \u{1F680}", accent: "badge yellow" },
    ],
};

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", target: Section::Home },
    NavLink { label: "About", target: Section::About },
    NavLink { label: "Skills", target: Section::Skills },
    NavLink { label: "Projects", target: Section::Projects },
    NavLink { label: "Contact", target: Section::Contact },
];

pub const SKILLS: &[SkillEntry] = &[
    SkillEntry { name: "C", level: 80, accent: "fill-blue", icon: "C_Logo.png" },
    SkillEntry { name: "Java", level: 75, accent: "fill-red", icon: "Java_programming_language_logo.svg.png" },
    SkillEntry { name: "Python", level: 85, accent: "fill-yellow", icon: "Python-logo-notext.svg.png" },
    SkillEntry { name: "HTML", level: 95, accent: "fill-orange", icon: "HTML5_logo_and_wordmark.svg.png" },
    SkillEntry { name: "CSS", level: 90, accent: "fill-sky", icon: "css_logo.png" },
    SkillEntry { name: "JavaScript", level: 80, accent: "fill-amber", icon: "js-logo.webp" },
    SkillEntry { name: "React.js", level: 85, accent: "fill-cyan", icon: "react-logo.png" },
    SkillEntry { name: "Tailwind CSS", level: 90, accent: "fill-indigo", icon: "tailwind-css-logo.png" },
    SkillEntry { name: "AI/ML", level: 75, accent: "fill-purple", icon: "ai-ml-logo.png" },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        title: "Weather App",
        media: ProjectMedia::Glyph(ProjectGlyph::Weather),
        tech: "React, Vite, Weather API",
        description: "A simple weather application that provides real-time weather updates using an API.",
        live: "#",
        repo: "#",
    },
    ProjectEntry {
        title: "AI-Powered Plant Disease Detection & Recommendation",
        media: ProjectMedia::Image("plant-disease-detection.png"),
        tech: "React, Vite, Tailwind, CNN",
        description: "An AI system that detects plant diseases using deep learning and recommends treatments.",
        live: "#",
        repo: "#",
    },
    ProjectEntry {
        title: "AI-Powered Music Recommendation System",
        media: ProjectMedia::Glyph(ProjectGlyph::Music),
        tech: "React, Vite, FaceNet512, Spotify API",
        description: "An AI-powered music player that detects emotions and suggests songs accordingly.",
        live: "#",
        repo: "#",
    },
    ProjectEntry {
        title: "Integrated Doctor's Clinic & Online Pharmacy",
        media: ProjectMedia::Image("doctor-pharmacy.png"),
        tech: "JSP, Servlet, MySQL",
        description: "A full-fledged web application integrating a doctor's clinic and an online pharmacy system.",
        live: "#",
        repo: "#",
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        kind: SocialKind::Email,
        label: "Email: niladri9163@gmail.com",
        href: "mailto:niladri9163@gmail.com",
    },
    SocialLink {
        kind: SocialKind::WhatsApp,
        label: "WhatsApp: +91 1234567890",
        href: "https://wa.me/911234567890",
    },
    SocialLink {
        kind: SocialKind::LinkedIn,
        label: "Connect on LinkedIn",
        href: "https://www.linkedin.com/in/niladri-roy-6b6ab2320/",
    },
    SocialLink {
        kind: SocialKind::GitHub,
        label: "Explore My GitHub",
        href: "https://github.com/Niladri91635",
    },
];
