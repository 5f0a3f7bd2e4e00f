use super::constants::*;

/// Device capabilities sampled once at startup.
///
/// The profile is immutable for the page lifetime. Components never re-query
/// the platform; they receive the profile (or its [`Tuning`]) explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceProfile {
    pub is_mobile: bool,
    pub is_touch: bool,
    pub slow_connection: bool,
}

#[inline]
pub fn is_mobile_width(viewport_width: f64) -> bool {
    viewport_width <= MOBILE_MAX_WIDTH
}

#[inline]
pub fn is_slow_connection(effective_type: &str) -> bool {
    matches!(effective_type, "slow-2g" | "2g")
}

impl DeviceProfile {
    pub fn detect(viewport_width: f64, is_touch: bool, effective_type: Option<&str>) -> Self {
        Self {
            is_mobile: is_mobile_width(viewport_width),
            is_touch,
            slow_connection: effective_type.map(is_slow_connection).unwrap_or(false),
        }
    }

    /// Cursor follower only makes sense with a hovering pointer.
    pub fn cursor_enabled(&self) -> bool {
        !self.is_mobile && !self.is_touch
    }

    pub fn particles_enabled(&self) -> bool {
        !self.is_mobile && !self.slow_connection
    }

    pub fn tuning(&self) -> Tuning {
        if self.is_mobile {
            Tuning::MOBILE
        } else {
            Tuning::DESKTOP
        }
    }
}

/// Per-tier constant set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub header_offset: f64,
    pub lookahead: f64,
    pub scroll_rate: f64,
    pub scroll_cap_ms: f64,
    pub settle_delay_ms: i32,
    pub island_show_ms: i32,
    pub island_hide_ms: i32,
    pub hero_delay_ms: i32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
}

impl Tuning {
    pub const MOBILE: Tuning = Tuning {
        header_offset: HEADER_OFFSET_MOBILE,
        lookahead: LOOKAHEAD_MOBILE,
        scroll_rate: SCROLL_RATE_MOBILE,
        scroll_cap_ms: SCROLL_CAP_MS_MOBILE,
        settle_delay_ms: SETTLE_DELAY_MS_MOBILE,
        island_show_ms: ISLAND_SHOW_MS_MOBILE,
        island_hide_ms: ISLAND_HIDE_MS_MOBILE,
        hero_delay_ms: HERO_DELAY_MS_MOBILE,
        reveal_threshold: REVEAL_THRESHOLD_MOBILE,
        reveal_root_margin: REVEAL_MARGIN_MOBILE,
    };

    pub const DESKTOP: Tuning = Tuning {
        header_offset: HEADER_OFFSET_DESKTOP,
        lookahead: LOOKAHEAD_DESKTOP,
        scroll_rate: SCROLL_RATE_DESKTOP,
        scroll_cap_ms: SCROLL_CAP_MS_DESKTOP,
        settle_delay_ms: SETTLE_DELAY_MS_DESKTOP,
        island_show_ms: ISLAND_SHOW_MS_DESKTOP,
        island_hide_ms: ISLAND_HIDE_MS_DESKTOP,
        hero_delay_ms: HERO_DELAY_MS_DESKTOP,
        reveal_threshold: REVEAL_THRESHOLD_DESKTOP,
        reveal_root_margin: REVEAL_MARGIN_DESKTOP,
    };
}
