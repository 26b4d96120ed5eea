/// Character-by-character reveal of one text. A writer is built when typing
/// starts; restarting means building a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
    complete: bool,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0, complete: false }
    }

    /// Advances one character. Returns false once there is nothing left to do.
    pub fn tick(&mut self) -> bool {
        if self.complete {
            return false;
        }
        if self.shown < self.chars.len() {
            self.shown += 1;
        } else {
            self.complete = true;
        }
        !self.complete
    }

    pub fn text(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }
}
