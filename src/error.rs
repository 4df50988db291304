//! Central error type for the globe renderer.
//!
//! Configuration problems are fatal at startup, degenerate geometry is a broken
//! precondition, and out-of-range coordinates mean the renderer fed the sampler garbage.
//! A ray missing the sphere is not an error and never shows up here.

use crate::vec3::Point3d;

#[derive(thiserror::Error, Debug)]
pub enum GlobeError {
    #[error("Dimensions ({dim_y}, {dim_x}) currently not supported. Supported resolutions are: {supported:?}")]
    UnsupportedResolution {
        dim_y: usize,
        dim_x: usize,
        supported: &'static [(usize, usize)],
    },

    #[error("Raster format error: {0}")]
    RasterFormat(String),

    #[error("Sphere radius must be finite and positive, got {0}")]
    InvalidRadius(f64),

    #[error("Target frame rate must be positive, got {0}")]
    InvalidFrameRate(u32),

    #[error("Rotation rate {rate} outside of the limit {max}")]
    InvalidRotationRate { rate: f64, max: f64 },

    #[error("Degenerate vector: base and top coincide at {0}")]
    DegenerateVector(Point3d),

    #[error("Radius for point {0} is zero, spherical coordinates are not defined")]
    DegenerateRadius(Point3d),

    #[error("Coordinate (lat {lat}, lon {lon}) outside of [-90, 90] x [-180, 180]")]
    CoordinateOutOfRange { lat: f64, lon: f64 },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlobeError {
    pub fn raster<T: ToString>(msg: T) -> Self {
        GlobeError::RasterFormat(msg.to_string())
    }

    /// Errors that abort startup: bad screen size, bad raster, bad config.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GlobeError::UnsupportedResolution { .. }
                | GlobeError::RasterFormat(_)
                | GlobeError::InvalidRadius(_)
                | GlobeError::InvalidFrameRate(_)
                | GlobeError::InvalidRotationRate { .. }
                | GlobeError::Config(_)
                | GlobeError::Io(_)
        )
    }

    pub fn is_degenerate_geometry(&self) -> bool {
        matches!(
            self,
            GlobeError::DegenerateVector(_) | GlobeError::DegenerateRadius(_)
        )
    }
}

pub type GlobeResult<T> = Result<T, GlobeError>;
