/// One maximal run of identical characters in a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub letter: char,
    pub repeat: usize,
}

impl Directive {
    pub fn new(letter: char, repeat: usize) -> Self {
        Self { letter, repeat }
    }

    /// The pattern text this run was lexed from.
    pub fn source(&self) -> String {
        std::iter::repeat(self.letter).take(self.repeat).collect()
    }
}

/// Splits a pattern into runs of identical consecutive characters.
///
/// There is no quoting: every character, letter or not, is part of a run and
/// the run's character alone decides how it is rendered.
pub fn parse_pattern(pattern: &str) -> Vec<Directive> {
    let mut runs: Vec<Directive> = Vec::new();
    for ch in pattern.chars() {
        match runs.last_mut() {
            Some(run) if run.letter == ch => run.repeat += 1,
            _ => runs.push(Directive::new(ch, 1)),
        }
    }
    runs
}
