//! Canvas size, its measurement lifecycle, and the pixel-space projection

use glam::Mat4;
use thiserror::Error;

/// Why the canvas could not be measured.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("no browser window available")]
    MissingWindow,

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("element not laid out yet ({width}x{height})")]
    NotLaidOut { width: f32, height: f32 },
}

/// Measured canvas size in pixels (CSS pixels on the web).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Validate a raw measurement; zero or negative sizes mean layout has not happened.
    pub fn measured(width: f32, height: f32) -> Result<Self, ViewportError> {
        if width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ViewportError::NotLaidOut { width, height })
        }
    }

    /// Orthographic projection from (0,0)-(width,height), y down, to clip space.
    pub fn projection(&self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width, self.height, 0.0, -1.0, 1.0)
    }
}

/// Viewport lifecycle: `Unmeasured -> Measured` on a good query, back to
/// `Unmeasured` whenever a query fails.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum ViewportState {
    #[default]
    Unmeasured,
    Measured(Viewport),
}

impl ViewportState {
    pub fn viewport(&self) -> Option<Viewport> {
        match self {
            ViewportState::Unmeasured => None,
            ViewportState::Measured(v) => Some(*v),
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, ViewportState::Measured(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_zero_size_is_not_laid_out() {
        assert_eq!(
            Viewport::measured(0.0, 600.0),
            Err(ViewportError::NotLaidOut { width: 0.0, height: 600.0 })
        );
        assert!(Viewport::measured(800.0, 600.0).is_ok());
    }

    #[test]
    fn test_projection_maps_corners_to_clip_space() {
        let proj = Viewport { width: 800.0, height: 600.0 }.projection();

        let top_left = proj * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((top_left.x + 1.0).abs() < 1e-6);
        assert!((top_left.y - 1.0).abs() < 1e-6);

        let bottom_right = proj * Vec4::new(800.0, 600.0, 0.0, 1.0);
        assert!((bottom_right.x - 1.0).abs() < 1e-6);
        assert!((bottom_right.y + 1.0).abs() < 1e-6);

        let center = proj * Vec4::new(400.0, 300.0, 0.0, 1.0);
        assert!(center.x.abs() < 1e-6);
        assert!(center.y.abs() < 1e-6);
    }

    #[test]
    fn test_state_defaults_to_unmeasured() {
        let state = ViewportState::default();
        assert!(!state.is_measured());
        assert_eq!(state.viewport(), None);
    }
}
