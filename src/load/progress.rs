use std::io::Write;

/// Single-line `Posts SQLized: n/N` status, rewritten in place with `\r`
pub struct Progress<W: Write> {
    out: Option<W>,
    total: usize,
}

impl<W: Write> Progress<W> {
    pub fn new(out: W, total: usize) -> Self {
        Progress {
            out: Some(out),
            total,
        }
    }

    /// A progress line that prints nothing
    pub fn hidden(total: usize) -> Self {
        Progress { out: None, total }
    }

    pub fn update(&mut self, done: usize) -> std::io::Result<()> {
        if let Some(out) = self.out.as_mut() {
            write!(out, "Posts SQLized: {}/{}\r", done, self.total)?;
            out.flush()?;
        }
        Ok(())
    }

    /// Terminate the status line once loading is over
    pub fn finish(&mut self) -> std::io::Result<()> {
        if let Some(out) = self.out.as_mut() {
            if self.total > 0 {
                writeln!(out)?;
            }
            out.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_overwrites() {
        let mut buffer = Vec::new();
        {
            let mut progress = Progress::new(&mut buffer, 2);
            progress.update(1).unwrap();
            progress.update(2).unwrap();
            progress.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "Posts SQLized: 1/2\rPosts SQLized: 2/2\r\n");
    }

    #[test]
    fn test_no_newline_without_posts() {
        let mut buffer = Vec::new();
        Progress::new(&mut buffer, 0).finish().unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_hidden_writes_nothing() {
        let mut progress: Progress<Vec<u8>> = Progress::hidden(3);
        progress.update(1).unwrap();
        progress.finish().unwrap();
        assert!(progress.out.is_none());
    }
}
