//! Equirectangular texture loading and sampling.
//!
//! Loads plain-text PNM (`P3`) rasters and box-averages them down to the resolution of
//! the output grid when sampled by latitude and longitude.

use std::path::Path;

use log::debug;

use crate::error::{GlobeError, GlobeResult};
use crate::image::Rgb;

pub const MIN_DIM_X: usize = 28;
pub const MAX_DIM_X: usize = 360;
pub const MIN_DIM_Y: usize = 14;
pub const MAX_DIM_Y: usize = 180;
pub const VALID_MAX_COLOR_VALUES: [u16; 2] = [15, 255];

// Degrees per pixel of the 14x28 output grid (180/14 == 360/28).
const OUTPUT_DEGREES_PER_PIXEL: f64 = 180.0 / 14.0;

const DEFAULT_EARTH_MAP: &str = include_str!("../assets/earth_72x36.pnm");

/// Anything that turns a global latitude/longitude into a color.
pub trait TextureSampler {
    fn sample(&self, lat: f64, lon: f64) -> GlobeResult<Rgb>;
}

#[derive(Clone, Debug)]
pub struct TextureMap {
    dim_x: usize,
    dim_y: usize,
    degrees_per_pixel: f64,
    max_interpolation_radius: usize,
    max_color_value: u16,
    pixels: Vec<Rgb>,
}

struct Header {
    dim_x: usize,
    dim_y: usize,
    max_color_value: u16,
}

impl TextureMap {
    pub fn load(path: &Path) -> GlobeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let map = Self::from_pnm_str(&content)?;
        debug!("loaded map from '{}'", path.display());
        Ok(map)
    }

    pub fn default_earth() -> GlobeResult<Self> {
        Self::from_pnm_str(DEFAULT_EARTH_MAP)
    }

    pub fn from_pnm_str(content: &str) -> GlobeResult<Self> {
        let mut lines = content.lines();
        let header = parse_header(&mut lines)?;

        let expected = header.dim_x * header.dim_y * 3;
        let mut values: Vec<u8> = Vec::with_capacity(expected);
        for token in lines.flat_map(str::split_whitespace) {
            let value: u16 = token
                .parse()
                .map_err(|_| GlobeError::raster(format!("invalid color value '{}'", token)))?;
            if value > header.max_color_value {
                return Err(GlobeError::raster(format!(
                    "color value {} exceeds maximum {}",
                    value, header.max_color_value
                )));
            }
            if values.len() == expected {
                return Err(GlobeError::raster(format!("more than {} color values", expected)));
            }
            values.push(value as u8);
        }
        if values.len() != expected {
            return Err(GlobeError::raster(format!(
                "expected {} color values, found {}",
                expected,
                values.len()
            )));
        }
        debug!("processed {} colors", values.len() / 3);

        let pixels = values
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();

        Ok(Self {
            dim_x: header.dim_x,
            dim_y: header.dim_y,
            degrees_per_pixel: 180.0 / header.dim_y as f64,
            // wider windows only wrap around onto the same cells
            max_interpolation_radius: header.dim_x,
            max_color_value: header.max_color_value,
            pixels,
        })
    }

    pub fn with_max_interpolation_radius(mut self, radius: usize) -> Self {
        self.max_interpolation_radius = radius;
        self
    }

    pub fn set_max_interpolation_radius(&mut self, radius: usize) {
        self.max_interpolation_radius = radius;
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.dim_y, self.dim_x)
    }

    pub fn degrees_per_pixel(&self) -> f64 {
        self.degrees_per_pixel
    }

    pub fn max_interpolation_radius(&self) -> usize {
        self.max_interpolation_radius
    }

    pub fn max_color_value(&self) -> u16 {
        self.max_color_value
    }

    fn texel(&self, y: usize, x: usize) -> Rgb {
        self.pixels[y * self.dim_x + x]
    }

    pub fn interpolation_radius(&self) -> usize {
        let delta = (OUTPUT_DEGREES_PER_PIXEL / self.degrees_per_pixel).floor() as usize;
        delta.min(self.max_interpolation_radius)
    }

    // Folds a window cell that left the map back onto it.
    fn wrap_cell(&self, y: i64, x: i64) -> (usize, usize) {
        let dim_x = self.dim_x as i64;
        let dim_y = self.dim_y as i64;
        let (mut y, mut x) = (y, x);

        // over a pole: mirror the row, continue half way around the globe
        if y < 0 || y >= dim_y {
            let half = self.dim_x as f64 / 2.0;
            x = ((x as f64 + half).rem_euclid(self.dim_x as f64)).round_ties_even() as i64;
            y = if y < 0 { -y } else { dim_y - y % dim_y - 1 };
        }

        // over the day-change meridian; wraps by the map width, a fixed 360 shift overruns narrow maps
        if !(0..dim_x).contains(&x) {
            x = x.rem_euclid(dim_x);
        }

        (y.clamp(0, dim_y - 1) as usize, x as usize)
    }
}

impl TextureSampler for TextureMap {
    fn sample(&self, lat: f64, lon: f64) -> GlobeResult<Rgb> {
        if !((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)) {
            return Err(GlobeError::CoordinateOutOfRange { lat, lon });
        }

        // global (lat, lon) -> map-oriented degrees with the north pole at row 0
        let map_lat = 90.0 - lat;
        let map_lon = 180.0 + lon;

        let x = (map_lon / self.degrees_per_pixel).round_ties_even() as i64;
        let y = (map_lat / self.degrees_per_pixel).round_ties_even() as i64;
        let delta = self.interpolation_radius() as i64;

        let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
        for i_y in (y - delta)..=(y + delta) {
            for i_x in (x - delta)..=(x + delta) {
                let (cy, cx) = self.wrap_cell(i_y, i_x);
                let rgb = self.texel(cy, cx);
                r += rgb.r as u64;
                g += rgb.g as u64;
                b += rgb.b as u64;
            }
        }

        let count = ((2 * delta + 1) * (2 * delta + 1)) as f64;
        let mean = |sum: u64| (sum as f64 / count).round_ties_even() as u8;
        Ok(Rgb::new(mean(r), mean(g), mean(b)))
    }
}

fn parse_header<'a>(lines: &mut impl Iterator<Item = &'a str>) -> GlobeResult<Header> {
    let mut fields = Vec::with_capacity(3);
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            debug!("skipped a comment during file import");
            continue;
        }
        fields.push(trimmed);
        if fields.len() == 3 {
            break;
        }
    }
    let [version, dimensions, max_value] = fields[..] else {
        return Err(GlobeError::raster("incomplete header"));
    };

    if version != "P3" {
        return Err(GlobeError::raster(format!(
            "input format must be PNM in version P3, found '{}'",
            version
        )));
    }

    let (dim_x, dim_y) = parse_dimensions(dimensions)?;
    debug!("map dimensions: (x = {:3}, y = {:3})", dim_x, dim_y);

    let max_color_value: u16 = max_value
        .parse()
        .ok()
        .filter(|v| VALID_MAX_COLOR_VALUES.contains(v))
        .ok_or_else(|| {
            GlobeError::raster(format!(
                "maximum color value must be in {:?}, found '{}'",
                VALID_MAX_COLOR_VALUES, max_value
            ))
        })?;

    Ok(Header { dim_x, dim_y, max_color_value })
}

fn parse_dimensions(line: &str) -> GlobeResult<(usize, usize)> {
    let bad = || GlobeError::raster(format!("cannot read dimensions from '{}'", line));
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = parts[..] else {
        return Err(bad());
    };
    let x: usize = x.parse().map_err(|_| bad())?;
    let y: usize = y.parse().map_err(|_| bad())?;

    if !(MIN_DIM_X..=MAX_DIM_X).contains(&x) || !(MIN_DIM_Y..=MAX_DIM_Y).contains(&y) {
        return Err(GlobeError::raster(format!(
            "map size {}x{} exceeds limits ({} <= x <= {}, {} <= y <= {})",
            x, y, MIN_DIM_X, MAX_DIM_X, MIN_DIM_Y, MAX_DIM_Y
        )));
    }
    Ok((x, y))
}
