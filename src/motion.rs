//! Pointer and scroll driven motion math.
//!
//! Everything here is plain arithmetic over viewport coordinates so the
//! browser components only have to measure elements and render the result.

pub const MAGNETIC_STRENGTH: f64 = 0.1;
pub const TILT_MAX_DEGREES: f64 = 10.0;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.2;
pub const CARD_REVEAL_THRESHOLD: f64 = 0.5;

const MAX_SUBSTEP_SECONDS: f64 = 1.0 / 240.0;
const MAX_FRAME_SECONDS: f64 = 1.0 / 15.0;
const REST_DELTA: f64 = 0.01;
const REST_SPEED: f64 = 0.01;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding rectangle in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (self.left..=self.left + self.width).contains(&point.x)
            && (self.top..=self.top + self.height).contains(&point.y)
    }
}

pub fn magnetic_offset(pointer: Vec2, bounds: Bounds) -> Option<Vec2> {
    if !bounds.contains(pointer) {
        return None;
    }

    let center = bounds.center();
    Some(Vec2::new(
        (pointer.x - center.x) * MAGNETIC_STRENGTH,
        (pointer.y - center.y) * MAGNETIC_STRENGTH,
    ))
}

/// Spring target for a magnetic element: the offset while hovered, rest otherwise.
pub fn magnetic_target(pointer: Option<Vec2>, bounds: Option<Bounds>) -> Vec2 {
    pointer
        .zip(bounds)
        .and_then(|(pointer, bounds)| magnetic_offset(pointer, bounds))
        .unwrap_or(Vec2::ZERO)
}

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.rotate_x, self.rotate_y)
    }
}

pub fn tilt_rotation(pointer: Vec2, bounds: Bounds) -> Option<Tilt> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 || !bounds.contains(pointer) {
        return None;
    }

    let center = bounds.center();
    let normalized_x = (pointer.x - center.x) / (bounds.width / 2.0);
    let normalized_y = (pointer.y - center.y) / (bounds.height / 2.0);

    Some(Tilt {
        rotate_x: normalized_y * TILT_MAX_DEGREES,
        rotate_y: normalized_x * -TILT_MAX_DEGREES,
    })
}

pub fn tilt_target(pointer: Option<Vec2>, bounds: Option<Bounds>) -> Tilt {
    pointer
        .zip(bounds)
        .and_then(|(pointer, bounds)| tilt_rotation(pointer, bounds))
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

pub const MAGNETIC_SPRING: SpringConfig = SpringConfig {
    stiffness: 350.0,
    damping: 15.0,
    mass: 0.5,
};

pub const TILT_SPRING: SpringConfig = SpringConfig {
    stiffness: 300.0,
    damping: 20.0,
    mass: 1.0,
};

pub const CURSOR_SPRING: SpringConfig = SpringConfig {
    stiffness: 500.0,
    damping: 28.0,
    mass: 1.0,
};

/// Damped harmonic oscillator pulled toward `target`.
#[derive(Clone, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn snap_to_target(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.value - self.target).abs() < REST_DELTA && self.velocity.abs() < REST_SPEED
    }

    /// Advances by `dt_seconds` and returns whether the spring has settled.
    pub fn step(&mut self, dt_seconds: f64) -> bool {
        let mass = self.config.mass.max(f64::EPSILON);
        let mut remaining = dt_seconds.clamp(0.0, MAX_FRAME_SECONDS);

        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP_SECONDS);
            let displacement = self.value - self.target;
            let acceleration =
                (-self.config.stiffness * displacement - self.config.damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.snap_to_target();
            return true;
        }

        false
    }
}

#[derive(Clone, Debug)]
pub struct SpringVec2 {
    x: Spring,
    y: Spring,
}

impl SpringVec2 {
    pub fn new(config: SpringConfig, value: Vec2) -> Self {
        Self {
            x: Spring::new(config, value.x),
            y: Spring::new(config, value.y),
        }
    }

    pub fn value(&self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }

    pub fn set_target(&mut self, target: Vec2) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    pub fn snap_to_target(&mut self) {
        self.x.snap_to_target();
        self.y.snap_to_target();
    }

    pub fn step(&mut self, dt_seconds: f64) -> bool {
        let x_settled = self.x.step(dt_seconds);
        let y_settled = self.y.step(dt_seconds);
        x_settled && y_settled
    }
}

/// How far an element has travelled from "top enters at the viewport
/// bottom" (0.0) to "bottom leaves at the viewport top" (1.0).
pub fn scroll_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let range = viewport_height + height;
    if range <= 0.0 {
        return 0.0;
    }

    ((viewport_height - top) / range).clamp(0.0, 1.0)
}

pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_window(index: usize, count: usize) -> (f64, f64) {
    let count = count.max(1) as f64;
    let start = index as f64 / count;
    (start, start + 1.0 / count)
}

pub fn word_opacity(progress: f64, index: usize, count: usize) -> f64 {
    let (start, end) = word_window(index, count);
    ((progress - start) / (end - start)).clamp(0.0, 1.0)
}

/// Share of the element's height currently inside the viewport.
pub fn visible_fraction(top: f64, height: f64, viewport_height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }

    let visible = (top + height).min(viewport_height) - top.max(0.0);
    (visible / height).clamp(0.0, 1.0)
}

/// Fires once the first time the visible fraction reaches the threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn observe(&mut self, fraction: f64) -> bool {
        if !self.revealed && fraction > 0.0 && fraction >= self.threshold {
            self.revealed = true;
        }
        self.revealed
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(SECTION_REVEAL_THRESHOLD)
    }
}

pub fn parallax_percent(progress: f64, from: f64, to: f64) -> f64 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}
