use libemulator::framebuffer::Framebuffer;
use libisa::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// Render the framebuffer as a text block, one character per pixel.
pub fn render(framebuffer: &Framebuffer) -> String {
    let mut out = String::with_capacity((DISPLAY_WIDTH + 3) * (DISPLAY_HEIGHT + 2));

    out.push_str(&"-".repeat(DISPLAY_WIDTH + 2));
    out.push('\n');

    for y in 0..DISPLAY_HEIGHT {
        out.push('|');
        for x in 0..DISPLAY_WIDTH {
            out.push(if framebuffer.pixel(x, y) { '#' } else { ' ' });
        }
        out.push_str("|\n");
    }

    out.push_str(&"-".repeat(DISPLAY_WIDTH + 2));
    out
}
