// DOM hooks the page markup exposes to the frontend.

// Element ids
pub const CURSOR_ID: &str = "cursor";
pub const CURSOR_FOLLOWER_ID: &str = "cursor-follower";
pub const ISLAND_ID: &str = "dynamic-island";
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";

// Selectors
pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const REVEAL_SELECTOR: &str = ".animate-on-scroll";
pub const PARTICLES_CANVAS_SELECTOR: &str = ".particles-canvas";
pub const HERO_TITLE_SELECTOR: &str = ".hero-title";
pub const TAP_TO_CLICK_SELECTOR: &str = ".nav-link, .project-link, .social-link";

// Attributes
pub const NAV_SECTION_ATTR: &str = "data-section";

// Classes
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";
pub const SHOW_CLASS: &str = "show";
pub const ANIMATE_CLASS: &str = "animate";
pub const LOADING_CLASS: &str = "loading";
pub const POWER_SAVE_CLASS: &str = "power-save";
pub const SLOW_CONNECTION_CLASS: &str = "slow-connection";

// Mobile CSS variables
pub const DEVICE_MULTIPLIER_VAR: (&str, &str) = ("--device-multiplier", "0.8");
pub const ANIMATION_DURATION_VAR: (&str, &str) = ("--animation-duration", "0.2s");
pub const SAFE_AREA_QUERY: &str = "padding-top: env(safe-area-inset-top)";
pub const SAFE_AREA_TOP_VAR: (&str, &str) = ("--safe-area-top", "env(safe-area-inset-top)");
pub const SAFE_AREA_BOTTOM_VAR: (&str, &str) =
    ("--safe-area-bottom", "env(safe-area-inset-bottom)");

pub const SERVICE_WORKER_URL: &str = "/sw.js";
