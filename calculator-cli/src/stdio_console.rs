use std::io::{self, stdin, IsTerminal, Read};

use calculator_core::Console;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::trace;

use crate::stdio_printer::StdioPrinter;

/// Talks to the user over the process's standard streams.
///
/// When stdin is a terminal, each read is one line from rustyline, with
/// any pending prompt shown as the editor's prompt. Otherwise the prompt
/// is written straight to stdout and a single raw read is issued, which
/// for piped input may deliver several entries at once.
pub struct StdioConsole {
    printer: StdioPrinter,
    editor: Option<DefaultEditor>,
}

impl StdioConsole {
    pub fn new() -> io::Result<Self> {
        let editor = if stdin().is_terminal() {
            Some(DefaultEditor::new().map_err(readline_to_io_error)?)
        } else {
            None
        };
        Ok(StdioConsole {
            printer: StdioPrinter::default(),
            editor,
        })
    }

    pub fn printer(&mut self) -> &mut StdioPrinter {
        &mut self.printer
    }
}

fn readline_to_io_error(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        ReadlineError::Interrupted => {
            io::Error::new(io::ErrorKind::Interrupted, "CTRL-C pressed")
        }
        err => io::Error::new(io::ErrorKind::Other, err.to_string()),
    }
}

/// Copies an edited line into `buf` the way a line-buffered terminal
/// read would deliver it, newline included. Anything that doesn't fit
/// is dropped; the reader notices the full buffer.
fn copy_line(line: String, buf: &mut [u8]) -> usize {
    let mut bytes = line.into_bytes();
    bytes.push(b'\n');
    let len = bytes.len().min(buf.len());
    buf[..len].copy_from_slice(&bytes[..len]);
    len
}

impl Console for StdioConsole {
    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.printer.print(prompt)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match &mut self.editor {
            Some(rl) => {
                let prompt = self.printer.pop_buffered_output();
                match rl.readline(&prompt) {
                    Ok(line) => Ok(copy_line(line, buf)),
                    Err(ReadlineError::Eof) => Ok(0),
                    Err(err) => Err(readline_to_io_error(err)),
                }
            }
            None => {
                self.printer.flush_partial_line()?;
                let len = stdin().lock().read(buf)?;
                trace!(len, "raw stdin read");
                Ok(len)
            }
        }
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.printer.print(text)
    }
}
