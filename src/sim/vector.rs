//! Polar-coordinate operations on 2D vectors
//!
//! The sim works in cartesian `glam::Vec2` but reasons about contacts in
//! polar terms (magnitude and angle). `Vec2Ext` supplies the polar half;
//! glam already covers construction (`Vec2::ZERO`, `Vec2::X`, `Vec2::Y`,
//! `Vec2::new`, `Vec2::from_angle`), accessors, arithmetic including the
//! compound-assignment forms, `dot`, negation, and `normalize_or_zero`.
//!
//! A zero vector has no angle. Every operation here that would need one
//! leaves the vector at zero instead of letting a division by zero or
//! `atan2(0, 0)` artifact leak NaN into committed state.

use glam::Vec2;

/// Polar-coordinate extensions for [`glam::Vec2`].
///
/// Angles are radians unless the name says degrees; `angle` is in
/// `(-π, π]`.
pub trait Vec2Ext: Sized {
    /// Vector of the given magnitude at the given angle
    fn from_polar(magnitude: f32, angle: f32) -> Self;

    /// `atan2(y, x)`. The zero vector reports `0.0`
    fn angle(self) -> f32;

    /// Same angle, new magnitude. Exact no-op on a zero vector
    fn with_magnitude(self, magnitude: f32) -> Self;

    /// Same magnitude, new absolute angle. A zero vector stays zero
    fn with_angle(self, angle: f32) -> Self;

    /// [`with_angle`](Vec2Ext::with_angle) taking degrees
    fn with_angle_degrees(self, degrees: f32) -> Self;

    /// Rotated by the given angle, magnitude preserved
    fn rotated(self, radians: f32) -> Self;

    /// [`rotated`](Vec2Ext::rotated) taking degrees
    fn rotated_degrees(self, degrees: f32) -> Self;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn from_polar(magnitude: f32, angle: f32) -> Self {
        magnitude * Vec2::from_angle(angle)
    }

    #[inline]
    fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn with_magnitude(self, magnitude: f32) -> Self {
        let current = self.length();
        if current == 0.0 {
            return self;
        }
        self * (magnitude / current)
    }

    #[inline]
    fn with_angle(self, angle: f32) -> Self {
        // length 0 reconstructs (0, 0), so the zero vector is untouched
        Vec2::from_polar(self.length(), angle)
    }

    #[inline]
    fn with_angle_degrees(self, degrees: f32) -> Self {
        self.with_angle(degrees.to_radians())
    }

    #[inline]
    fn rotated(self, radians: f32) -> Self {
        Vec2::from_angle(radians).rotate(self)
    }

    #[inline]
    fn rotated_degrees(self, degrees: f32) -> Self {
        self.rotated(degrees.to_radians())
    }
}
