//! Frame buffers handed to the display.

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Relative luminance in [0, 1]
    pub fn brightness(&self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }
}

/// Row-major grid of colors, `dim_y` rows of `dim_x` pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    dim_y: usize,
    dim_x: usize,
    pixels: Vec<Rgb>,
}

impl Image {
    pub fn new(dim_y: usize, dim_x: usize) -> Self {
        Self {
            dim_y,
            dim_x,
            pixels: vec![Rgb::BLACK; dim_y * dim_x],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.dim_y, self.dim_x)
    }

    pub fn set_color(&mut self, y: usize, x: usize, rgb: Rgb) {
        let idx = self.index(y, x);
        self.pixels[idx] = rgb;
    }

    pub fn color(&self, y: usize, x: usize) -> Rgb {
        self.pixels[self.index(y, x)]
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::BLACK);
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    pub fn row(&self, y: usize) -> &[Rgb] {
        &self.pixels[y * self.dim_x..(y + 1) * self.dim_x]
    }

    /// `dim_y * dim_x * 3` bytes, RGB interleaved.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    fn index(&self, y: usize, x: usize) -> usize {
        assert!(y < self.dim_y && x < self.dim_x, "pixel ({y}, {x}) outside {}x{}", self.dim_y, self.dim_x);
        y * self.dim_x + x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_black_and_clears() {
        let mut img = Image::new(14, 28);
        assert!(img.pixels().iter().all(|p| *p == Rgb::BLACK));

        img.set_color(3, 27, Rgb::new(1, 2, 3));
        assert_eq!(img.color(3, 27), Rgb::new(1, 2, 3));
        assert_eq!(img.row(3)[27], Rgb::new(1, 2, 3));

        img.clear();
        assert_eq!(img.color(3, 27), Rgb::BLACK);
    }

    #[test]
    fn byte_view_is_interleaved_rgb() {
        let mut img = Image::new(14, 28);
        img.set_color(0, 1, Rgb::new(10, 20, 30));
        let bytes = img.as_bytes();
        assert_eq!(bytes.len(), 14 * 28 * 3);
        assert_eq!(&bytes[3..6], &[10, 20, 30]);
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_write_panics() {
        Image::new(14, 28).set_color(14, 0, Rgb::BLACK);
    }
}
