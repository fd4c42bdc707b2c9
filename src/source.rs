use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

pub struct Source {
    pub name: String,
    content: String,
}

impl Source {
    pub fn load<P: AsRef<Path>>(file: P) -> io::Result<Self> {
        let file = file.as_ref();
        let content = fs::read_to_string(file)?;
        Ok(Source {
            name: file.display().to_string(),
            content,
        })
    }

    pub fn text(name: &str, text: &str) -> Self {
        Source {
            name: String::from(name),
            content: String::from(text),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// The text of the 1-based `number`th line, without its line terminator.
    pub fn line(&self, number: usize) -> Option<&str> {
        if number == 0 {
            return None;
        }
        self.content.split('\n').nth(number - 1).map(|line| line.trim_end_matches('\r'))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub char: usize,
}

impl Position {
    pub fn new(line: usize, char: usize) -> Self {
        Position { line, char }
    }

    pub fn start() -> Self {
        Position::new(1, 1)
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.char.cmp(&other.char))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}, char {}", self.line, self.char)
    }
}
