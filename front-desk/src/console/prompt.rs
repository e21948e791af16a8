//! Line-oriented input helpers
//!
//! `None` from any helper means the input stream is closed.

use std::io::{self, BufRead, Write};

pub const NOT_A_NUMBER: &str = "Please enter a whole number.";

/// Print a prompt and read one trimmed line
pub fn ask_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    writeln!(output, "{}", prompt)?;
    output.flush()?;
    read_trimmed(input)
}

/// Print a prompt and read an integer, re-prompting until one parses
pub fn ask_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<i64>> {
    writeln!(output, "{}", prompt)?;
    read_int(input, output)
}

/// Read an integer without an initial prompt, re-prompting on bad input
pub fn read_int<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<Option<i64>> {
    loop {
        output.flush()?;
        let Some(line) = read_trimmed(input)? else {
            return Ok(None);
        };
        match line.parse::<i64>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => {
                tracing::debug!(input = %line, "Rejected non-numeric input");
                writeln!(output, "{}", NOT_A_NUMBER)?;
            }
        }
    }
}

fn read_trimmed<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_line_trims() {
        let mut input = Cursor::new("  Alice \n");
        let mut output = Vec::new();

        let line = ask_line(&mut input, &mut output, "Enter guest name:").unwrap();
        assert_eq!(line.as_deref(), Some("Alice"));
        assert_eq!(String::from_utf8(output).unwrap(), "Enter guest name:\n");
    }

    #[test]
    fn test_ask_line_closed_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        assert_eq!(ask_line(&mut input, &mut output, "?").unwrap(), None);
    }

    #[test]
    fn test_ask_int_retries_until_number() {
        let mut input = Cursor::new("abc\n\n 7 \n");
        let mut output = Vec::new();

        let n = ask_int(&mut input, &mut output, "Enter room number:").unwrap();
        assert_eq!(n, Some(7));

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches(NOT_A_NUMBER).count(), 2);
    }

    #[test]
    fn test_ask_int_negative_and_closed() {
        let mut input = Cursor::new("-4\n");
        let mut output = Vec::new();
        assert_eq!(ask_int(&mut input, &mut output, "?").unwrap(), Some(-4));
        assert_eq!(read_int(&mut input, &mut output).unwrap(), None);
    }
}
