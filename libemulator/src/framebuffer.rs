use libisa::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The 64x32 monochrome display. Coordinates wrap around both edges.
pub struct Framebuffer {
    pixels: [bool; DISPLAY_WIDTH * DISPLAY_HEIGHT],
}

impl Framebuffer {
    pub fn new() -> Self {
        Self {
            pixels: [false; DISPLAY_WIDTH * DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(false);
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        self.pixels[Self::index(x, y)]
    }

    /// XOR-draw a sprite with its top left corner at `(x, y)`, one byte per
    /// row, most significant bit leftmost. True if any lit pixel was erased.
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let mut collision = false;

        for (row_offset, row) in rows.iter().enumerate() {
            for bit in 0..8 {
                if row & (0x80 >> bit) == 0 {
                    continue;
                }

                let index = Self::index(x + bit, y + row_offset);
                collision |= self.pixels[index];
                self.pixels[index] ^= true;
            }
        }

        collision
    }

    fn index(x: usize, y: usize) -> usize {
        (y % DISPLAY_HEIGHT) * DISPLAY_WIDTH + (x % DISPLAY_WIDTH)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(framebuffer: &Framebuffer) -> usize {
        framebuffer.pixels.iter().filter(|&&on| on).count()
    }

    #[test]
    fn draws_with_msb_leftmost() {
        let mut framebuffer = Framebuffer::new();

        let collision = framebuffer.draw_sprite(3, 2, &[0b1010_0001]);

        assert!(!collision);
        assert!(framebuffer.pixel(3, 2));
        assert!(!framebuffer.pixel(4, 2));
        assert!(framebuffer.pixel(5, 2));
        assert!(framebuffer.pixel(10, 2));
        assert_eq!(lit_pixels(&framebuffer), 3);
    }

    #[test]
    fn redrawing_erases_and_collides() {
        let mut framebuffer = Framebuffer::new();

        assert!(!framebuffer.draw_sprite(0, 0, &[0xFF, 0x81]));
        assert!(framebuffer.draw_sprite(0, 0, &[0xFF, 0x81]));
        assert_eq!(lit_pixels(&framebuffer), 0);
    }

    #[test]
    fn partial_overlap_collides_and_keeps_the_rest() {
        let mut framebuffer = Framebuffer::new();

        framebuffer.draw_sprite(0, 0, &[0b1000_0000]);
        let collision = framebuffer.draw_sprite(0, 0, &[0b1100_0000]);

        assert!(collision);
        assert!(!framebuffer.pixel(0, 0));
        assert!(framebuffer.pixel(1, 0));
    }

    #[test]
    fn coordinates_wrap_around_the_edges() {
        let mut framebuffer = Framebuffer::new();

        framebuffer.draw_sprite(62, 31, &[0b1110_0000, 0b1110_0000]);

        // Row 31 holds columns 62, 63 and 0; the second row wraps to row 0.
        assert!(framebuffer.pixel(62, 31));
        assert!(framebuffer.pixel(63, 31));
        assert!(framebuffer.pixel(0, 31));
        assert!(framebuffer.pixel(62, 0));
        assert!(framebuffer.pixel(63, 0));
        assert!(framebuffer.pixel(0, 0));
        assert_eq!(lit_pixels(&framebuffer), 6);
    }

    #[test]
    fn clear_blanks_everything() {
        let mut framebuffer = Framebuffer::new();
        framebuffer.draw_sprite(10, 10, &[0xFF; 15]);

        framebuffer.clear();

        assert_eq!(lit_pixels(&framebuffer), 0);
    }
}
