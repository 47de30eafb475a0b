//! Scroll-driven parallax geometry for the album header.
//!
//! Everything here is a pure function of one signed scroll offset plus the
//! fixed layout constants. Nothing is stored between frames.
//!
//! Sign convention for `offset_y`:
//! - negative: content scrolled up (the header is being covered)
//! - positive: content pulled down past the top (the artwork stretches)

/// Fraction of the viewport height the artwork takes.
pub const DEFAULT_IMAGE_HEIGHT_RATIO: f32 = 0.45;

/// Divisor used while pulled down. Steeper than the scroll-up one.
pub const OVERSCROLL_DENOMINATOR: f32 = 0.5;
pub const SCROLL_DENOMINATOR: f32 = 0.8;

/// Compact header title shows once this share of the image is scrolled away.
pub const COMPACT_TITLE_THRESHOLD: f32 = 0.75;

/// Black alpha at each gradient stop before `progress` is subtracted.
/// The last stop is never reduced.
pub const GRADIENT_BASE_ALPHAS: [f32; 6] = [0.0, 0.1, 0.3, 0.5, 0.8, 1.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstants {
    image_height: f32,
    safe_area_top: f32,
}

impl LayoutConstants {
    /// Panics if `image_height` is not a positive finite number, or if
    /// `safe_area_top` is negative. Both are caller bugs, not runtime input.
    pub fn new(image_height: f32, safe_area_top: f32) -> Self {
        assert!(
            image_height.is_finite() && image_height > 0.0,
            "image height must be positive, got {image_height}"
        );
        assert!(
            safe_area_top.is_finite() && safe_area_top >= 0.0,
            "safe-area inset must be non-negative, got {safe_area_top}"
        );

        Self {
            image_height,
            safe_area_top,
        }
    }

    /// `image_height = ratio * viewport_height`.
    pub fn from_viewport(viewport_height: f32, ratio: f32, safe_area_top: f32) -> Self {
        Self::new(viewport_height * ratio, safe_area_top)
    }

    pub fn image_height(&self) -> f32 {
        self.image_height
    }

    pub fn safe_area_top(&self) -> f32 {
        self.safe_area_top
    }

    /// Artwork height with no stretch applied.
    pub fn base_artwork_height(&self) -> f32 {
        self.image_height + self.safe_area_top
    }
}

/// Everything the header needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxState {
    pub offset_y: f32,
    pub denominator: f32,
    /// Unitless and unbounded.
    pub progress: f32,
    pub title_progress: f32,
    /// Binary: 0.0 or 1.0.
    pub header_opacity: f32,
    pub compact_title_visible: bool,
    base_artwork_height: f32,
}

impl ParallaxState {
    /// The controller itself: maps one offset to every derived value.
    pub fn compute(offset_y: f32, layout: &LayoutConstants) -> Self {
        let image_height = layout.image_height();

        let denominator = if offset_y > 0.0 {
            OVERSCROLL_DENOMINATOR
        } else {
            SCROLL_DENOMINATOR
        };
        let progress = offset_y / (image_height * denominator);
        let title_progress = offset_y / image_height;

        let header_opacity = if -progress > 1.0 { 1.0 } else { 0.0 };
        let compact_title_visible = -title_progress > COMPACT_TITLE_THRESHOLD;

        Self {
            offset_y,
            denominator,
            progress,
            title_progress,
            header_opacity,
            compact_title_visible,
            base_artwork_height: layout.base_artwork_height(),
        }
    }

    /// Stretches with pull-down, never shrinks below the baseline.
    pub fn artwork_height(&self) -> f32 {
        self.base_artwork_height + self.offset_y.max(0.0)
    }

    /// Vertical shift of the big title block; only follows upward scroll.
    pub fn title_offset(&self) -> f32 {
        self.offset_y.min(0.0)
    }

    /// `1 - |progress|`, unclamped.
    pub fn raw_title_opacity(&self) -> f32 {
        1.0 + if self.progress > 0.0 {
            -self.progress
        } else {
            self.progress
        }
    }

    pub fn title_opacity(&self) -> f32 {
        self.raw_title_opacity().clamp(0.0, 1.0)
    }

    pub fn raw_gradient_alphas(&self) -> [f32; 6] {
        let last = GRADIENT_BASE_ALPHAS.len() - 1;
        let mut out = GRADIENT_BASE_ALPHAS;
        for alpha in &mut out[..last] {
            *alpha -= self.progress;
        }
        out
    }

    /// Top-to-bottom black alphas, clamped for rendering.
    pub fn gradient_alphas(&self) -> [f32; 6] {
        self.raw_gradient_alphas().map(|a| a.clamp(0.0, 1.0))
    }
}

/// Evenly spaced positions (0..=1) for the six gradient stops.
pub fn gradient_stop_offsets() -> [f32; 6] {
    let last = (GRADIENT_BASE_ALPHAS.len() - 1) as f32;
    std::array::from_fn(|i| i as f32 / last)
}
