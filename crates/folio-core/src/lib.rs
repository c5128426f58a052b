//! Core logic for the Folio portfolio
//!
//! This crate holds everything that does not depend on a renderer:
//!
//! - **Loading sequence**: [`LoadingState`] transitions and the tokio-backed
//!   [`LoadingTimers`] that drive them
//! - **Navigation**: [`NavState`] for the scroll-styled header and mobile menu
//! - **Content**: static tables for skills, projects, links and profile copy
//! - **Configuration**: [`SiteConfig`] loaded from TOML

pub mod config;
pub mod content;
pub mod error;
pub mod loading;
pub mod nav;
pub mod timers;

pub use config::{SiteConfig, WindowConfig, CONFIG_ENV_VAR};
pub use content::{
    Badge, NavLink, Profile, ProjectEntry, ProjectGlyph, ProjectMedia, Section, SkillEntry,
    SocialKind, SocialLink, NAV_LINKS, PROFILE, PROJECTS, SKILLS, SOCIAL_LINKS,
};
pub use error::{ConfigError, FolioError, FolioResult};
pub use loading::{LoadingPhase, LoadingState, LoadingTimings, Progress};
pub use nav::{NavConfig, NavState};
pub use timers::LoadingTimers;
