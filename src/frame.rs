//! Design-frame records and the frame-space → anchored-position transform.
//!
//! The source space is a design-tool frame: origin top-left, Y increasing
//! downward, fixed pixel dimensions. The target space is an anchor/pivot
//! layout system: positions are offsets from an anchor point, Y increasing
//! upward. [`convert`] maps between the two. Pure geometry — no host
//! integration, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use anchorlayout::{AnchorPreset, ElementRect, Frame, Pivot, convert};
//!
//! let frame = Frame::new(1080.0, 1920.0);
//! let element = ElementRect::new(0.0, 0.0, 100.0, 100.0);
//!
//! let result = convert(frame, element, Pivot::CENTER, AnchorPreset::MiddleCenter);
//! assert_eq!((result.x, result.y), (-490.0, 910.0));
//! ```

use crate::anchor::{AnchorPoint, AnchorPreset};

/// The source design canvas. Origin top-left, Y increasing downward.
///
/// Dimensions are conventionally positive. Degenerate or negative values
/// are not rejected; they flow through the transform and produce
/// correspondingly degenerate output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Frame {
    /// Create a new frame.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Element position and size in a [`Frame`]'s coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ElementRect {
    /// Distance from the frame's left edge to the element's left edge.
    pub left: f32,
    /// Distance from the frame's top edge to the element's top edge.
    pub top: f32,
    /// Element width in pixels.
    pub width: f32,
    /// Element height in pixels.
    pub height: f32,
}

impl ElementRect {
    /// Create a new element rect.
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// The element's own reference point, as a fraction of its size.
///
/// Measured from the element's top-left corner in frame space: `(0, 0)` is
/// the top-left corner, `(1, 1)` the bottom-right, `(0.5, 0.5)` the center.
/// Components are conventionally in `0.0..=1.0` but are not clamped;
/// values outside that range extrapolate past the element's edges.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pivot {
    pub x: f32,
    pub y: f32,
}

impl Pivot {
    /// Center of the element.
    pub const CENTER: Self = Self { x: 0.5, y: 0.5 };

    /// Create a new pivot.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Pivot {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Result of [`convert`]: an anchored position plus the anchor it is
/// measured from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Anchored {
    /// Horizontal offset from the anchor, rounded to the nearest integer.
    pub x: f32,
    /// Vertical offset from the anchor in Y-up space, rounded to the
    /// nearest integer.
    pub y: f32,
    /// The resolved anchor point the offset is measured from.
    pub anchor: AnchorPoint,
}

/// The complete set of layout fields a host writes to a target UI node.
///
/// Anchor min and max are both set to the resolved anchor point, so the
/// node keeps a fixed size instead of stretching with its parent. Applying
/// these fields to an actual node stays with the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NodeLayout {
    /// Lower anchor bound.
    pub anchor_min: AnchorPoint,
    /// Upper anchor bound.
    pub anchor_max: AnchorPoint,
    /// The element's pivot, passed through unchanged.
    pub pivot: Pivot,
    /// Anchored position, as computed by [`convert`].
    pub position: (f32, f32),
}

impl NodeLayout {
    /// Compute every field the host needs in one call.
    pub fn compute(
        frame: Frame,
        element: ElementRect,
        pivot: Pivot,
        preset: AnchorPreset,
    ) -> Self {
        let anchored = convert(frame, element, pivot, preset);
        Self {
            anchor_min: anchored.anchor,
            anchor_max: anchored.anchor,
            pivot,
            position: (anchored.x, anchored.y),
        }
    }
}

/// Convert an element's frame-space rectangle into an anchored position.
///
/// The anchor's absolute position is interpolated across the frame, the
/// element's pivot-weighted reference point is computed in frame space, and
/// the offset between the two is emitted with the Y axis flipped from the
/// frame's Y-down convention to the target's Y-up convention. Both
/// components are rounded half away from zero.
///
/// Interpolation is unclamped, so anchor or pivot components outside
/// `0.0..=1.0` extrapolate. Total over all finite inputs: no side effects,
/// identical inputs give bit-identical results, non-finite inputs propagate
/// arithmetically (NaN in, NaN out).
///
/// # Example
///
/// ```
/// use anchorlayout::{AnchorPoint, AnchorPreset, ElementRect, Frame, Pivot, convert};
///
/// let frame = Frame::new(1080.0, 1920.0);
/// let element = ElementRect::new(0.0, 0.0, 100.0, 100.0);
///
/// let result = convert(frame, element, Pivot::new(0.0, 0.0), AnchorPreset::TopLeft);
/// assert_eq!((result.x, result.y), (0.0, 1920.0));
/// assert_eq!(result.anchor, AnchorPoint::new(0.0, 1.0));
/// ```
pub fn convert(
    frame: Frame,
    element: ElementRect,
    pivot: Pivot,
    preset: AnchorPreset,
) -> Anchored {
    let anchor = preset.point();

    let anchor_x = lerp(0.0, frame.width, anchor.x);
    let anchor_y = lerp(0.0, frame.height, anchor.y);

    let elem_x = element.left + element.width * pivot.x;
    let elem_y = element.top + element.height * pivot.y;

    // Flip Y: frame space is Y-down, anchored space is Y-up.
    let x = elem_x - anchor_x;
    let y = -(elem_y - anchor_y);

    Anchored {
        x: round(x),
        y: round(y),
        anchor,
    }
}

/// Unclamped linear interpolation.
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Round half away from zero. `f32::round` semantics, available in
/// `no_std` builds through num-traits' libm backend.
fn round(v: f32) -> f32 {
    num_traits::Float::round(v)
}
