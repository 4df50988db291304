//! Terminal stand-in for the LED display: prints the front frame with 24-bit color escapes.

use std::fmt::Write as FmtWrite;
use std::io::{self, Write};

use crossterm::{cursor, execute, terminal};
use rayon::prelude::*;

use crate::image::{Image, Rgb};

const ASCII_RAMP: [char; 70] = [' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~', '+', '_', '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f', 'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0', 'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W', '&', '8', '%', 'B', '@', '$'];

// Terminal cells are about twice as high as wide.
const CELLS_PER_PIXEL: usize = 2;

pub struct TerminalDisplay {
    full_color: bool,
    active: bool,
}

impl TerminalDisplay {
    pub fn new(full_color: bool) -> Self {
        Self { full_color, active: false }
    }

    // Enter raw mode, hide the cursor and clear the screen once.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(io::stdout(), cursor::Hide)?;
        print!("\x1B[2J\x1B[1;1H");
        io::stdout().flush()
    }

    pub fn show(&mut self, frame: &Image, status: &str) -> io::Result<()> {
        let mut frame_buffer = format_frame(frame, self.full_color);
        frame_buffer.push_str(status);
        frame_buffer.push_str("\x1b[K\r\n");

        // Move cursor to top-left and output the entire frame at once
        let mut out = io::stdout().lock();
        out.write_all(b"\x1B[1;1H")?;
        out.write_all(frame_buffer.as_bytes())?;
        out.flush()
    }

    // Restore terminal state
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(io::stdout(), cursor::Show)?;
        terminal::disable_raw_mode()
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// One string for the whole frame, rows separated by `\r\n` for raw mode.
pub fn format_frame(frame: &Image, full_color: bool) -> String {
    let (dim_y, dim_x) = frame.dimensions();

    // Build the rows in parallel (one String per row)
    let rows: Vec<String> = (0..dim_y).into_par_iter().map(|y| {
        let mut row = String::with_capacity(dim_x * CELLS_PER_PIXEL * 20);
        for &pixel in frame.row(y) {
            let glyph = if full_color { '█' } else { ascii_glyph(pixel) };
            let _ = write!(row, "\x1b[38;2;{};{};{}m", pixel.r, pixel.g, pixel.b);
            for _ in 0..CELLS_PER_PIXEL {
                row.push(glyph);
            }
            row.push_str("\x1b[0m");
        }
        row.push_str("\r\n");
        row
    }).collect();

    rows.concat()
}

fn ascii_glyph(pixel: Rgb) -> char {
    let gamma = 0.3f32;
    let last = (ASCII_RAMP.len() - 1) as f32;
    let ci = (pixel.brightness().powf(gamma) * last).min(last) as usize;
    ASCII_RAMP[ci]
}
