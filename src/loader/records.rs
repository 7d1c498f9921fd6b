//! Newline-delimited record reading.

use std::io::BufRead;

use crate::error::Result;

/// Feed every line of `reader` to `callback` together with its 1-based line
/// number and the byte offset at which it starts.
///
/// The trailing `\n` (and a `\r` before it) is stripped. A final line
/// without a newline is still delivered; an empty tail after the last
/// newline is not.
pub fn read_records<R, F>(mut reader: R, mut callback: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(&[u8], u64, u64) -> Result<()>,
{
    let mut buf = Vec::new();
    let mut line = 1u64;
    let mut offset = 0u64;
    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(());
        }
        let mut record = buf.as_slice();
        if let Some(stripped) = record.strip_suffix(b"\n") {
            record = stripped;
        }
        if let Some(stripped) = record.strip_suffix(b"\r") {
            record = stripped;
        }
        callback(record, line, offset)?;
        offset += read as u64;
        line += 1;
    }
}
