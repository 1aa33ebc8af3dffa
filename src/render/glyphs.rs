//! 5-row block glyphs for the countdown banner

pub(crate) const GLYPH_HEIGHT: usize = 5;

type Glyph = [&'static str; GLYPH_HEIGHT];

const ZERO: Glyph = [" ███ ", "█   █", "█   █", "█   █", " ███ "];
const ONE: Glyph = ["  █  ", " ██  ", "  █  ", "  █  ", " ███ "];
const TWO: Glyph = [" ███ ", "█   █", "  ██ ", " █   ", "█████"];
const THREE: Glyph = [" ███ ", "█   █", "  ██ ", "█   █", " ███ "];
const FOUR: Glyph = ["█   █", "█   █", "█████", "    █", "    █"];
const FIVE: Glyph = ["█████", "█    ", "████ ", "    █", "████ "];
const SIX: Glyph = [" ███ ", "█    ", "████ ", "█   █", " ███ "];
const SEVEN: Glyph = ["█████", "    █", "   █ ", "  █  ", "  █  "];
const EIGHT: Glyph = [" ███ ", "█   █", " ███ ", "█   █", " ███ "];
const NINE: Glyph = [" ███ ", "█   █", " ████", "    █", " ███ "];
const COLON: Glyph = ["     ", "  █  ", "     ", "  █  ", "     "];

/// Glyph for `c`; characters outside `0-9` and `:` render as `0`
pub(crate) fn glyph(c: char) -> &'static Glyph {
    match c {
        '0' => &ZERO,
        '1' => &ONE,
        '2' => &TWO,
        '3' => &THREE,
        '4' => &FOUR,
        '5' => &FIVE,
        '6' => &SIX,
        '7' => &SEVEN,
        '8' => &EIGHT,
        '9' => &NINE,
        ':' => &COLON,
        _ => &ZERO,
    }
}
