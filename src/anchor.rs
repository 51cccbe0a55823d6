//! Anchor presets, the preset→point lookup table, and boundary parsing.

/// A point in anchor space: fractions of the containing frame.
///
/// `x` runs left→right, `y` runs bottom→top. This is the target layout
/// system's Y-up convention, inverted relative to the Y-down design frame
/// that element rectangles are measured in.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnchorPoint {
    /// Horizontal fraction, `0.0` = left edge, `1.0` = right edge.
    pub x: f32,
    /// Vertical fraction, `0.0` = bottom edge, `1.0` = top edge.
    pub y: f32,
}

impl AnchorPoint {
    /// Create a new anchor point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Nine standard anchor positions within a frame.
///
/// ```text
///     TopLeft      TopCenter      TopRight        y = 1.0
///     MiddleLeft   MiddleCenter   MiddleRight     y = 0.5
///     BottomLeft   BottomCenter   BottomRight     y = 0.0
///
///     x = 0.0      x = 0.5        x = 1.0
/// ```
///
/// Each preset resolves to a fixed [`AnchorPoint`] via [`point`](Self::point).
/// The default is [`MiddleCenter`](Self::MiddleCenter); lenient boundaries
/// that admit out-of-enumeration values ([`from_index`](Self::from_index),
/// [`from_name`](Self::from_name)) return `Option` so callers can degrade
/// to the default instead of failing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AnchorPreset {
    /// Top-left corner.
    TopLeft,
    /// Middle of the top edge.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Middle of the left edge.
    MiddleLeft,
    /// Center of the frame.
    #[default]
    MiddleCenter,
    /// Middle of the right edge.
    MiddleRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Middle of the bottom edge.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

impl AnchorPreset {
    /// All nine presets, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Anchor points indexed by declaration order. Y-up: the top row is 1.0.
    const POINTS: [AnchorPoint; 9] = [
        AnchorPoint::new(0.0, 1.0),
        AnchorPoint::new(0.5, 1.0),
        AnchorPoint::new(1.0, 1.0),
        AnchorPoint::new(0.0, 0.5),
        AnchorPoint::new(0.5, 0.5),
        AnchorPoint::new(1.0, 0.5),
        AnchorPoint::new(0.0, 0.0),
        AnchorPoint::new(0.5, 0.0),
        AnchorPoint::new(1.0, 0.0),
    ];

    /// Canonical names, parallel to [`ALL`](Self::ALL).
    const NAMES: [&'static str; 9] = [
        "topleft",
        "topcenter",
        "topright",
        "middleleft",
        "middlecenter",
        "middleright",
        "bottomleft",
        "bottomcenter",
        "bottomright",
    ];

    /// Resolve this preset to its fixed anchor point.
    ///
    /// Presets are fractions of the frame, so the result is independent of
    /// frame dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// use anchorlayout::{AnchorPoint, AnchorPreset};
    ///
    /// assert_eq!(AnchorPreset::TopLeft.point(), AnchorPoint::new(0.0, 1.0));
    /// assert_eq!(AnchorPreset::BottomRight.point(), AnchorPoint::new(1.0, 0.0));
    /// ```
    pub const fn point(self) -> AnchorPoint {
        Self::POINTS[self as usize]
    }

    /// Create from a raw preset index (0–8, declaration order).
    ///
    /// Returns `None` for out-of-range values. Pair with
    /// `unwrap_or_default()` at boundaries that should degrade to
    /// [`MiddleCenter`](Self::MiddleCenter) rather than fail.
    pub fn from_index(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Parse a canonical preset name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names; combine with
    /// `unwrap_or_default()` for the MiddleCenter fallback.
    ///
    /// # Example
    ///
    /// ```
    /// use anchorlayout::AnchorPreset;
    ///
    /// assert_eq!(AnchorPreset::from_name("TopLeft"), Some(AnchorPreset::TopLeft));
    /// assert_eq!(
    ///     AnchorPreset::from_name("diagonal").unwrap_or_default(),
    ///     AnchorPreset::MiddleCenter,
    /// );
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::NAMES
            .iter()
            .position(|n| name.eq_ignore_ascii_case(n))
            .map(|i| Self::ALL[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_table_exact() {
        assert_eq!(AnchorPreset::TopLeft.point(), AnchorPoint::new(0.0, 1.0));
        assert_eq!(AnchorPreset::TopCenter.point(), AnchorPoint::new(0.5, 1.0));
        assert_eq!(AnchorPreset::TopRight.point(), AnchorPoint::new(1.0, 1.0));
        assert_eq!(AnchorPreset::MiddleLeft.point(), AnchorPoint::new(0.0, 0.5));
        assert_eq!(
            AnchorPreset::MiddleCenter.point(),
            AnchorPoint::new(0.5, 0.5)
        );
        assert_eq!(
            AnchorPreset::MiddleRight.point(),
            AnchorPoint::new(1.0, 0.5)
        );
        assert_eq!(AnchorPreset::BottomLeft.point(), AnchorPoint::new(0.0, 0.0));
        assert_eq!(
            AnchorPreset::BottomCenter.point(),
            AnchorPoint::new(0.5, 0.0)
        );
        assert_eq!(
            AnchorPreset::BottomRight.point(),
            AnchorPoint::new(1.0, 0.0)
        );
    }

    #[test]
    fn point_components_on_grid() {
        for preset in AnchorPreset::ALL {
            let p = preset.point();
            assert!([0.0, 0.5, 1.0].contains(&p.x), "{preset:?} x = {}", p.x);
            assert!([0.0, 0.5, 1.0].contains(&p.y), "{preset:?} y = {}", p.y);
        }
    }

    #[test]
    fn index_round_trip() {
        for (i, preset) in AnchorPreset::ALL.iter().enumerate() {
            assert_eq!(
                AnchorPreset::from_index(i as u8),
                Some(*preset),
                "index {i}"
            );
        }
    }

    #[test]
    fn index_out_of_range_falls_back_to_center() {
        for v in [9u8, 10, 100, 255] {
            assert_eq!(AnchorPreset::from_index(v), None);
            assert_eq!(
                AnchorPreset::from_index(v).unwrap_or_default(),
                AnchorPreset::MiddleCenter,
            );
        }
    }

    #[test]
    fn name_round_trip() {
        for (i, name) in AnchorPreset::NAMES.iter().enumerate() {
            assert_eq!(
                AnchorPreset::from_name(name),
                Some(AnchorPreset::ALL[i]),
                "name {name:?}"
            );
        }
    }

    #[test]
    fn name_case_insensitive() {
        assert_eq!(
            AnchorPreset::from_name("TopLeft"),
            Some(AnchorPreset::TopLeft)
        );
        assert_eq!(
            AnchorPreset::from_name("BOTTOMRIGHT"),
            Some(AnchorPreset::BottomRight)
        );
        assert_eq!(
            AnchorPreset::from_name("  middlecenter  "),
            Some(AnchorPreset::MiddleCenter)
        );
    }

    #[test]
    fn name_unrecognized_falls_back_to_center() {
        assert_eq!(AnchorPreset::from_name("diagonal"), None);
        assert_eq!(AnchorPreset::from_name(""), None);
        assert_eq!(
            AnchorPreset::from_name("diagonal").unwrap_or_default(),
            AnchorPreset::MiddleCenter,
        );
    }

    #[test]
    fn default_is_middle_center() {
        assert_eq!(AnchorPreset::default(), AnchorPreset::MiddleCenter);
        assert_eq!(
            AnchorPreset::default().point(),
            AnchorPoint::new(0.5, 0.5)
        );
    }
}
