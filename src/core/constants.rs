// Tier tuning constants shared by the pure core and the web frontend.
// Each pair is (mobile, desktop); `Tuning` picks one side per DeviceProfile.

// Device classification
pub const MOBILE_MAX_WIDTH: f64 = 768.0; // inclusive

// Section tracking
pub const HEADER_OFFSET_MOBILE: f64 = 80.0;
pub const HEADER_OFFSET_DESKTOP: f64 = 100.0;
pub const LOOKAHEAD_MOBILE: f64 = 100.0; // biases "active" toward the next section
pub const LOOKAHEAD_DESKTOP: f64 = 150.0;
pub const DEFAULT_SECTION: &str = "home";

// Smooth scroll (ms per px, ms cap)
pub const SCROLL_RATE_MOBILE: f64 = 0.3;
pub const SCROLL_RATE_DESKTOP: f64 = 0.5;
pub const SCROLL_CAP_MS_MOBILE: f64 = 400.0;
pub const SCROLL_CAP_MS_DESKTOP: f64 = 800.0;
pub const HAPTIC_PULSE_MS: u32 = 50;

// Startup
pub const SETTLE_DELAY_MS_MOBILE: i32 = 100;
pub const SETTLE_DELAY_MS_DESKTOP: i32 = 200;
pub const ISLAND_SHOW_MS_MOBILE: i32 = 500;
pub const ISLAND_SHOW_MS_DESKTOP: i32 = 800;
pub const ISLAND_HIDE_MS_MOBILE: i32 = 2000;
pub const ISLAND_HIDE_MS_DESKTOP: i32 = 3000;
pub const HERO_DELAY_MS_MOBILE: i32 = 200;
pub const HERO_DELAY_MS_DESKTOP: i32 = 300;

// Scroll reveal observer
pub const REVEAL_THRESHOLD_MOBILE: f64 = 0.05;
pub const REVEAL_THRESHOLD_DESKTOP: f64 = 0.1;
pub const REVEAL_MARGIN_MOBILE: &str = "0px 0px -20px 0px";
pub const REVEAL_MARGIN_DESKTOP: &str = "0px 0px -50px 0px";

// Particle field
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SPEED: f32 = 0.40; // velocity components span ±SPEED/2
pub const PARTICLE_RADIUS_MIN: f32 = 0.8;
pub const PARTICLE_RADIUS_SPAN: f32 = 1.2;
pub const PARTICLE_OPACITY_MIN: f32 = 0.1;
pub const PARTICLE_OPACITY_SPAN: f32 = 0.3;
pub const PARTICLE_RGB: [u8; 3] = [0, 122, 255];

// Cursor follower
pub const CURSOR_FOLLOW_FACTOR: f32 = 0.15; // fraction of the gap closed per frame

// Low battery threshold for the power-save class
pub const LOW_BATTERY_LEVEL: f64 = 0.2;
