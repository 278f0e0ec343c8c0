use anyhow::Context;
use std::io::BufRead;

/// Line source of JSON frames, skipping blank lines.
///
/// Read errors are surfaced as-is; parsing is left to the host so that a
/// single bad frame can be skipped without dropping the whole feed.
pub struct Feed<B> {
    lines: std::io::Lines<B>,
    frames: usize,
}

impl<B> Feed<B> {
    /// Non-blank lines yielded so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Feed<std::io::BufReader<std::fs::File>> {
    pub fn open(path: &std::path::Path) -> anyhow::Result<Self> {
        std::fs::File::open(path)
            .with_context(|| format!("open landmark feed {}", path.display()))
            .map(std::io::BufReader::new)
            .map(Self::from)
    }
}

impl<B> From<B> for Feed<B>
where
    B: BufRead,
{
    fn from(reader: B) -> Self {
        Self {
            lines: reader.lines(),
            frames: 0,
        }
    }
}

impl<B> Iterator for Feed<B>
where
    B: BufRead,
{
    type Item = std::io::Result<String>;
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.lines.next()? {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => {
                    self.frames += 1;
                    return Some(Ok(line));
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
