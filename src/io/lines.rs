use std::io::BufRead;

/// Lazy UTF-8 line iterator that, unlike `BufRead::lines`, keeps line endings.
///
/// Invalid UTF-8 surfaces as an `InvalidData` error item. After an error the
/// iterator is fused and yields `None`.
pub struct TextLines<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> TextLines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: BufRead> Iterator for TextLines<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => Some(Ok(line)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
