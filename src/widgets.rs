use crate::motion::Vec2;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Stored preference, falling back to dark when absent or unrecognised.
    pub fn resolve(stored: Option<&str>) -> Self {
        stored.and_then(Self::parse).unwrap_or_default()
    }

    /// Whether `stored` differs from what this theme writes back.
    pub fn needs_persist(self, stored: Option<&str>) -> bool {
        stored != Some(self.as_str())
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    Text,
    Link,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(CursorVariant),
    Leave,
}

/// Resolves the cursor variant from hover intents. The latest event wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorCoordinator {
    pub variant: CursorVariant,
}

impl CursorCoordinator {
    pub fn apply(self, event: HoverEvent) -> Self {
        match event {
            HoverEvent::Enter(variant) => Self { variant },
            HoverEvent::Leave => Self::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorAppearance {
    pub size: f64,
    pub color: &'static str,
    pub blend_mode: &'static str,
}

impl CursorAppearance {
    pub fn resolve(variant: CursorVariant, theme: Theme) -> Self {
        let size = match variant {
            CursorVariant::Default => 24.0,
            CursorVariant::Text => 100.0,
            CursorVariant::Link => 50.0,
        };
        let color = match (variant, theme) {
            (CursorVariant::Text, Theme::Dark) => "#F5F5F5",
            (CursorVariant::Text, Theme::Light) => "#0D0D0D",
            (_, Theme::Dark) => "#FFD700",
            (_, Theme::Light) => "#0057FF",
        };

        Self {
            size,
            color,
            blend_mode: "difference",
        }
    }

    /// Top-left corner that centres the indicator on the pointer.
    pub fn anchor(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(pointer.x - self.size / 2.0, pointer.y - self.size / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlidePlacement {
    Before,
    Active,
    After,
}

/// Index into a non-empty list that wraps in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn placement(&self, entry: usize) -> SlidePlacement {
        match entry.cmp(&self.index) {
            std::cmp::Ordering::Less => SlidePlacement::Before,
            std::cmp::Ordering::Equal => SlidePlacement::Active,
            std::cmp::Ordering::Greater => SlidePlacement::After,
        }
    }
}

/// At most one panel open at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
    len: usize,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { open: None, len }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, panel: usize) -> bool {
        self.open_index() == Some(panel)
    }

    pub fn toggle(self, panel: usize) -> Self {
        if panel >= self.len {
            return self;
        }

        let open = if self.open == Some(panel) { None } else { Some(panel) };
        Self { open, ..self }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Geolocalização não é suportada pelo seu navegador.")]
    Unsupported,
    #[error("Não foi possível obter a localização: {0}")]
    Platform(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum LocationStatus {
    #[default]
    Idle,
    Pending,
    Located(Coordinates),
    Failed(LocationError),
}

impl LocationStatus {
    pub fn from_result(result: Result<Coordinates, LocationError>) -> Self {
        match result {
            Ok(coordinates) => Self::Located(coordinates),
            Err(error) => Self::Failed(error),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Self::Located(coordinates) => Some(*coordinates),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Failed(error) => Some(error.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_defaults_to_dark_without_a_valid_stored_value() {
        assert_eq!(Theme::resolve(None), Theme::Dark);
        assert_eq!(Theme::resolve(Some("sepia")), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light")), Theme::Light);
    }

    #[test]
    fn resolved_theme_is_written_back_unless_already_stored() {
        let cases = [
            (None, Theme::Dark, true),
            (Some("sepia"), Theme::Dark, true),
            (Some("light"), Theme::Light, false),
            (Some("dark"), Theme::Dark, false),
        ];
        for (stored, expected, rewrite) in cases {
            let theme = Theme::resolve(stored);
            assert_eq!(theme, expected);
            assert_eq!(theme.needs_persist(stored), rewrite, "stored {stored:?}");
        }
    }

    #[test]
    fn theme_toggle_is_its_own_inverse() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
            assert_eq!(Theme::parse(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn cursor_leave_returns_to_default() {
        let cursor = CursorCoordinator::default()
            .apply(HoverEvent::Enter(CursorVariant::Link))
            .apply(HoverEvent::Leave);
        assert_eq!(cursor.variant, CursorVariant::Default);
    }

    #[test]
    fn cursor_last_hover_wins_on_overlap() {
        let cursor = CursorCoordinator::default()
            .apply(HoverEvent::Enter(CursorVariant::Text))
            .apply(HoverEvent::Enter(CursorVariant::Link));
        assert_eq!(cursor.variant, CursorVariant::Link);
    }

    #[test]
    fn cursor_appearance_follows_variant_and_theme() {
        let text_dark = CursorAppearance::resolve(CursorVariant::Text, Theme::Dark);
        assert_eq!(text_dark.size, 100.0);
        assert_eq!(text_dark.color, "#F5F5F5");

        let link_light = CursorAppearance::resolve(CursorVariant::Link, Theme::Light);
        assert_eq!(link_light.size, 50.0);
        assert_eq!(link_light.color, "#0057FF");
        assert_eq!(link_light.blend_mode, "difference");

        let anchor = CursorAppearance::resolve(CursorVariant::Default, Theme::Dark)
            .anchor(Vec2::new(100.0, 40.0));
        assert_eq!(anchor, Vec2::new(88.0, 28.0));
    }

    #[test]
    fn carousel_next_then_prev_round_trips_for_every_start() {
        for len in 1..=5 {
            let mut carousel = Carousel::new(len).expect("non-empty");
            for _ in 0..len {
                let start = carousel.index();
                assert_eq!(carousel.next().prev().index(), start);
                assert_eq!(carousel.prev().next().index(), start);
                carousel = carousel.next();
                assert!(carousel.index() < len);
            }
        }
    }

    #[test]
    fn carousel_wraps_both_directions() {
        let carousel = Carousel::new(3).expect("non-empty");
        assert_eq!(carousel.prev().index(), 2);
        assert_eq!(carousel.next().next().next().index(), 0);
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn carousel_places_neighbours_off_axis() {
        let carousel = Carousel::new(3).expect("non-empty").next();
        assert_eq!(carousel.placement(0), SlidePlacement::Before);
        assert_eq!(carousel.placement(1), SlidePlacement::Active);
        assert_eq!(carousel.placement(2), SlidePlacement::After);
    }

    #[test]
    fn accordion_toggle_twice_closes() {
        let accordion = Accordion::new(6).toggle(2).toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn accordion_opening_another_panel_closes_the_first() {
        let accordion = Accordion::new(6).toggle(1).toggle(4);
        assert!(accordion.is_open(4));
        assert!(!accordion.is_open(1));
        assert_eq!(accordion.open_index(), Some(4));
    }

    #[test]
    fn accordion_ignores_out_of_range_panels() {
        let accordion = Accordion::new(2).toggle(0).toggle(7);
        assert_eq!(accordion.open_index(), Some(0));
    }

    #[test]
    fn location_status_reports_errors_for_display() {
        let unsupported = LocationStatus::from_result(Err(LocationError::Unsupported));
        assert_eq!(
            unsupported.error_message().as_deref(),
            Some("Geolocalização não é suportada pelo seu navegador.")
        );

        let denied = LocationStatus::from_result(Err(LocationError::Platform(
            "User denied Geolocation".to_string(),
        )));
        assert_eq!(
            denied.error_message().as_deref(),
            Some("Não foi possível obter a localização: User denied Geolocation")
        );

        let located = LocationStatus::from_result(Ok(Coordinates {
            latitude: 10.5,
            longitude: -20.25,
        }));
        assert_eq!(located.coordinates().map(|c| c.longitude), Some(-20.25));
        assert!(located.error_message().is_none());
        assert!(!located.is_pending());
    }
}
