/// Entries on a line may be padded with spaces and tabs, and lines may
/// end with CRLF. Only a newline actually ends a line.
///
/// This struct allows clients to iterate through the bytes of a chunk,
/// skipping all such padding.
pub struct EntryCruncher<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> EntryCruncher<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        EntryCruncher { bytes, index: 0 }
    }

    pub fn is_padding(byte: u8) -> bool {
        byte == b' ' || byte == b'\t' || byte == b'\r'
    }

    /// Any byte that separates two entries, including the newline.
    pub fn is_delimiter(byte: u8) -> bool {
        EntryCruncher::is_padding(byte) || byte == b'\n'
    }
}

impl<'a> Iterator for EntryCruncher<'a> {
    /// A tuple of the byte and the total number of bytes consumed
    /// so far, including the given byte and any prior padding.
    type Item = (u8, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.bytes.len() {
            let byte = self.bytes[self.index];
            self.index += 1;
            if !EntryCruncher::is_padding(byte) {
                return Some((byte, self.index));
            }
        }

        None
    }
}
