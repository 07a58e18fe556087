//! Writing the result line.

use std::io::Write;

/// Write `value` in decimal followed by a single `\n`, then flush.
pub fn write_result<W: Write>(mut sink: W, value: i64) -> std::io::Result<()> {
    writeln!(sink, "{value}")?;
    sink.flush()
}
