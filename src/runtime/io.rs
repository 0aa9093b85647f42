//! Output/input streams used by `print` and `input`

use std::io::{self, BufRead, Write};

/// Where `input` reads words from
pub enum InputSource {
    /// Process stdin, locked only for the duration of each read so a driver
    /// loop can keep reading lines from it between evaluations
    Stdin,
    /// Any buffered reader
    Reader(Box<dyn BufRead>),
}

impl InputSource {
    /// Reads the next whitespace-delimited word
    pub fn read_word(&mut self) -> io::Result<Option<String>> {
        match self {
            InputSource::Stdin => read_word(&mut io::stdin().lock()),
            InputSource::Reader(reader) => read_word(reader.as_mut()),
        }
    }
}

/// Reads one whitespace-delimited word, skipping leading whitespace
///
/// The whitespace that ends the word is left in the reader. Returns
/// `Ok(None)` when the reader is exhausted before any word character.
pub fn read_word(reader: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut word = Vec::new();

    loop {
        let (consumed, complete) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }

            let mut consumed = 0;
            let mut complete = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    if word.is_empty() {
                        consumed += 1;
                        continue;
                    }
                    complete = true;
                    break;
                }
                word.push(byte);
                consumed += 1;
            }
            (consumed, complete)
        };

        reader.consume(consumed);
        if complete {
            break;
        }
    }

    if word.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&word).into_owned()))
    }
}

/// Reads one line, replacing bytes that are not valid UTF-8
///
/// Returns `Ok(None)` at end of input. The line terminator is kept.
pub fn read_line(reader: &mut dyn BufRead) -> io::Result<Option<String>> {
    let mut bytes = Vec::new();
    if reader.read_until(b'\n', &mut bytes)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&bytes).into_owned()))
}

/// Writes text and flushes immediately
pub fn write_flushed(output: &mut dyn Write, text: &str) -> io::Result<()> {
    output.write_all(text.as_bytes())?;
    output.flush()
}
