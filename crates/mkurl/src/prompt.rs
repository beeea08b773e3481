//! Line-oriented prompting on arbitrary reader/writer pairs.

use std::io::{self, BufRead, Write};

/// Print `prompt` without a newline, then read one line of input.
///
/// The trailing `\n` or `\r\n` is removed; nothing else is trimmed.
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing the read.
/// End of input yields an empty string.
pub fn read_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut bytes = Vec::new();
    input.read_until(b'\n', &mut bytes)?;

    if bytes.ends_with(b"\n") {
        bytes.pop();
        if bytes.ends_with(b"\r") {
            bytes.pop();
        }
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
