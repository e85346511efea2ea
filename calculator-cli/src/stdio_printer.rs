use std::io::{self, Write};

/// Buffers stdout output by line, which gives us control over how a
/// partially printed line gets shown. A pending prompt can either be
/// written out before a raw read or handed to rustyline, which would
/// otherwise overwrite whatever is on the line it's prompting.
#[derive(Default)]
pub struct StdioPrinter {
    line_buffer: String,
}

impl StdioPrinter {
    fn flush_line_buffer(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(self.line_buffer.as_bytes())?;
        stdout.flush()?;
        self.line_buffer.clear();
        Ok(())
    }

    /// Returns any buffered output that hasn't yet been printed.
    pub fn pop_buffered_output(&mut self) -> String {
        std::mem::take(&mut self.line_buffer)
    }

    /// Print out any partial line as-is, without ending it.
    pub fn flush_partial_line(&mut self) -> io::Result<()> {
        if self.line_buffer.is_empty() {
            return Ok(());
        }
        self.flush_line_buffer()
    }

    /// Print out any buffered output followed by a newline.
    pub fn print_buffered_output(&mut self) -> io::Result<()> {
        if !self.line_buffer.is_empty() {
            self.line_buffer.push('\n');
            self.flush_line_buffer()?;
        }
        Ok(())
    }

    /// Print the given string to stdout in a line-buffered way.
    pub fn print(&mut self, value: &str) -> io::Result<()> {
        for ch in value.chars() {
            self.line_buffer.push(ch);
            if ch == '\n' {
                self.flush_line_buffer()?;
            }
        }
        Ok(())
    }

    /// Print any buffered output, then write the given string to stderr
    /// followed by a newline.
    ///
    /// This ensures that users see the prompt they were answering before
    /// the error it led to.
    pub fn eprintln<T: AsRef<str>>(&mut self, value: T) {
        // Nothing more can be reported if the standard streams are gone.
        let _ = self.print_buffered_output();
        let _ = writeln!(io::stderr(), "{}", value.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::StdioPrinter;

    #[test]
    fn partial_lines_stay_buffered() {
        let mut printer = StdioPrinter::default();
        printer.print("Enter first number: ").unwrap();
        assert_eq!(printer.pop_buffered_output(), "Enter first number: ");
        assert_eq!(printer.pop_buffered_output(), "");
    }

    #[test]
    fn complete_lines_are_flushed() {
        let mut printer = StdioPrinter::default();
        printer.print("1 + 2 = 3\nEnter").unwrap();
        assert_eq!(printer.pop_buffered_output(), "Enter");
    }
}
