//! Line-oriented console I/O for the game loop.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// Where the game loop reads commands from and writes messages to.
pub trait Console {
    /// Show `prompt` and block for the next line. `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Console over the process stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(strip_line_ending(line)))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", line)
    }
}

/// Drop the trailing line terminator and nothing else; commands are matched
/// verbatim, so other whitespace is significant.
fn strip_line_ending(mut line: String) -> String {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    line
}

/// Console fed from a fixed list of inputs, capturing everything written.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
    prompts: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: 0,
        }
    }

    /// Lines written so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// How many times input was requested.
    pub fn prompts(&self) -> usize {
        self.prompts
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Option<String>> {
        self.prompts += 1;
        Ok(self.inputs.pop_front())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_line_ending() {
        assert_eq!(strip_line_ending("look\n".to_string()), "look");
        assert_eq!(strip_line_ending("look\r\n".to_string()), "look");
        assert_eq!(strip_line_ending(" look \n".to_string()), " look ");
        assert_eq!(strip_line_ending("look".to_string()), "look");
    }

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["look", "quit"]);
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("look"));
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("quit"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        assert_eq!(console.prompts(), 3);

        console.write_line("Goodbye!").unwrap();
        assert_eq!(console.output(), &["Goodbye!".to_string()]);
    }
}
