use crate::DotOffset;
use crate::layout::Rect;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Dots per terminal character, horizontally
pub const DOTS_X: DotOffset = 2;

/// Dots per terminal character, vertically
pub const DOTS_Y: DotOffset = 4;

/// A monochrome frame buffer drawn to the terminal with braille characters.
///
/// Every terminal character holds a 2x4 block of dots. Drawing is clipped to the buffer, so
/// callers can hand over shapes that are partly (or entirely) off screen.
pub struct Canvas {
    /// The dot buffer
    db: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Dot patterns, one per braille character
    cp: Vec<u8>,

    /// Width of the dot buffer
    w: usize,

    /// Height of the dot buffer
    h: usize,
}

impl Canvas {
    pub fn new(w: usize, h: usize) -> Self {
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        // Each braille character is 3 bytes in UTF-8, plus a newline per line
        Self {
            db: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![0; bw * bh],
            w,
            h,
        }
    }

    /// Canvas big enough to cover `cols x rows` terminal characters
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(
            cols as usize * DOTS_X as usize,
            rows as usize * DOTS_Y as usize,
        )
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Change the size of the canvas. Everything drawn so far is lost.
    pub fn resize(&mut self, w: usize, h: usize) {
        *self = Self::new(w, h);
    }

    /// Reset the dot buffer
    pub fn reset(&mut self) {
        self.db.fill(false);
    }

    /// Turns on a single dot, if it lies on the canvas
    pub fn set_pixel(&mut self, x: DotOffset, y: DotOffset) {
        if let Some(i) = self.index(x, y) {
            self.db[i] = true;
        }
    }

    pub fn is_set(&self, x: DotOffset, y: DotOffset) -> bool {
        self.index(x, y).is_some_and(|i| self.db[i])
    }

    /// Turns on every dot inside `rect`
    pub fn fill_rect(&mut self, rect: Rect) {
        let Some((x0, y0, x1, y1)) = self.clip(rect) else {
            return;
        };

        for y in y0..y1 {
            self.db[y * self.w + x0..y * self.w + x1].fill(true);
        }
    }

    /// Turns on the border of `rect`
    pub fn outline_rect(&mut self, rect: Rect) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }

        let right = rect.x + rect.width - 1;
        let bottom = rect.y + rect.height - 1;

        for x in rect.x..=right {
            self.set_pixel(x, rect.y);
            self.set_pixel(x, bottom);
        }

        for y in rect.y..=bottom {
            self.set_pixel(rect.x, y);
            self.set_pixel(right, y);
        }
    }

    /// Build the braille text for the current dot buffer: one line per 4 rows of dots, each line
    /// terminated by a newline.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new dot patterns
        self.cp.fill(0);

        for (n, &px) in self.db.iter().enumerate() {
            if px {
                let (x, y) = (n % self.w, n / self.w);
                self.cp[(y / 4) * bw + (x / 2)] |= Self::dot_bit(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for line in self.cp.chunks(bw.max(1)) {
            for &bits in line {
                let c = char::from_u32(BRAILLE_EMPTY | bits as u32).unwrap_or(' ');
                self.fb.push(c);
            }
            self.fb.push('\n');
        }

        &self.fb
    }

    fn index(&self, x: DotOffset, y: DotOffset) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.w)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.h)?;

        Some(y * self.w + x)
    }

    /// Intersect `rect` with the canvas, as half open `(x0, y0, x1, y1)` bounds
    fn clip(&self, rect: Rect) -> Option<(usize, usize, usize, usize)> {
        let x0 = rect.x.max(0) as i64;
        let y0 = rect.y.max(0) as i64;
        let x1 = (rect.x as i64 + rect.width as i64).min(self.w as i64);
        let y1 = (rect.y as i64 + rect.height as i64).min(self.h as i64);

        if x0 >= x1 || y0 >= y1 {
            return None;
        }

        Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
    }

    fn dot_bit(x: usize, y: usize) -> u8 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
