use std::io;

/// The calculator's view of the terminal it talks to.
///
/// Prompts and output are kept separate from reads so that front ends
/// can decide how a pending prompt is shown: a line editor wants it as
/// its own prompt, while piped input just needs it written out first.
pub trait Console {
    /// Shows the given prompt without waiting for a reply.
    fn prompt(&mut self, prompt: &str) -> io::Result<()>;

    /// Performs a single read of at most `buf.len()` bytes, returning
    /// how many were read. Zero means no more input is available.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    fn print(&mut self, text: &str) -> io::Result<()>;
}
