//! DOM hooks the frontend binds to.
//!
//! Selectors and class names must match the page markup and stylesheet.

// Carousel
pub const WORK_SECTION: &str = ".work-section";
pub const PROJECTS_ROW: &str = ".projects-container";
pub const PROJECT_CARD: &str = ".project-card";
pub const CAROUSEL_DOTS: &str = ".carousel-dots";
pub const CAROUSEL_DOT: &str = ".carousel-dot";
pub const SCROLL_HELPER: &str = ".mobile-scroll-helper";
pub const CAROUSEL_CONFIG_ATTR: &str = "data-carousel-config"; // JSON overrides on the section
pub const DOT_INDEX_ATTR: &str = "data-index";

// Content containers
pub const SKILLS_LIST: &str = ".skills-list";
pub const LEVEL_BAR: &str = ".level-bar";
pub const EDUCATION_LIST: &str = ".education-list";
pub const SOCIAL_LINKS: &str = ".social-links";
pub const HERO_NAME_ID: &str = "hero-name";
pub const HERO_ROLE_ID: &str = "hero-role";
pub const BIO_ID: &str = "about-bio";
pub const EMAIL_ID: &str = "contact-email";

// Navigation and utilities
pub const MENU_TOGGLE: &str = ".menu-toggle";
pub const NAV_RIGHT: &str = ".nav-right";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const THEME_ATTR: &str = "data-theme";
pub const TIME_ID: &str = "time";
pub const FUN_FACT_ID: &str = "fun-fact-text";

// State classes
pub const ACTIVE_CLASS: &str = "active";
pub const HIDDEN_CLASS: &str = "hidden";
pub const OPEN_CLASS: &str = "open";
