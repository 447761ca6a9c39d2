//! Busy spinner glyphs

const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Frames to hold each glyph for, at ~60fps redraw
const FRAMES_PER_GLYPH: usize = 5;

/// Spinner glyph for the given redraw count
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[(frame / FRAMES_PER_GLYPH) % SPINNER_FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_holds_for_several_frames() {
        assert_eq!(spinner_glyph(0), spinner_glyph(FRAMES_PER_GLYPH - 1));
        assert_ne!(spinner_glyph(0), spinner_glyph(FRAMES_PER_GLYPH));
    }

    #[test]
    fn test_glyph_cycles() {
        let cycle = FRAMES_PER_GLYPH * SPINNER_FRAMES.len();
        assert_eq!(spinner_glyph(3), spinner_glyph(3 + cycle));
    }
}
