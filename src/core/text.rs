//! Text effects: copyright year substitution and the typewriter

/// Replace the first run of four ASCII digits in `text` with `year`.
///
/// Returns `None` when there is no such run, so callers can skip the write.
pub fn replace_year(text: &str, year: i32) -> Option<String> {
    let bytes = text.as_bytes();
    let start = bytes
        .windows(4)
        .position(|w| w.iter().all(u8::is_ascii_digit))?;

    // Digits are single-byte, so both slice points are char boundaries
    Some(format!("{}{}{}", &text[..start], year, &text[start + 4..]))
}

/// Reveals a string one character at a time
#[derive(Clone, Debug)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
    typed: String,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        Self {
            typed: String::with_capacity(text.len()),
            chars,
            index: 0,
        }
    }

    /// Text revealed so far
    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// Characters still to type
    pub fn remaining(&self) -> usize {
        self.chars.len() - self.index
    }
}

impl Iterator for Typewriter {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        let c = *self.chars.get(self.index)?;
        self.index += 1;
        self.typed.push(c);
        Some(c)
    }
}
