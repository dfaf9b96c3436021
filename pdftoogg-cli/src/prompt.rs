// Interactive overwrite confirmation

use pdftoogg_core::Confirm;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Asks on `output` and reads one line of answer from `input`.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for Prompt<R, W> {
    fn ask(&mut self, path: &Path) -> io::Result<Option<String>> {
        write!(self.output, "{} already exists, overwrite? [y/N] ", path.display())?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // End of input: finish the prompt line before anything else prints.
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(answer))
    }
}
