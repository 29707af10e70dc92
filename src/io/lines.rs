use anyhow::Result;
use std::io::BufRead;

/// One sequence line, with its 1-based line number in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLine {
    pub line_no: usize,
    pub seq: Vec<u8>,
}

/// Line-oriented sequence reader.
///
/// Every line that does not start with `>` is one sequence; header lines are
/// skipped. Surrounding whitespace is stripped; the bytes are otherwise kept
/// as-is, so `a` and `A` are different symbols. Unlike a FASTA record reader,
/// consecutive lines are never joined.
pub struct SequenceLineReader<R: BufRead> {
    reader: R,
    buf: String,
    line_no: usize,
    done: bool,
}

impl<R: BufRead> SequenceLineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_no: 0,
            done: false,
        }
    }

    pub fn next_sequence(&mut self) -> Result<Option<SequenceLine>> {
        if self.done {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let n = self.reader.read_line(&mut self.buf)?;
            if n == 0 {
                self.done = true;
                return Ok(None);
            }
            self.line_no += 1;
            if self.buf.starts_with('>') {
                continue;
            }

            let seq = self.buf.trim().as_bytes().to_vec();
            return Ok(Some(SequenceLine { line_no: self.line_no, seq }));
        }
    }
}

impl<R: BufRead> Iterator for SequenceLineReader<R> {
    type Item = Result<SequenceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_sequence().transpose()
    }
}
