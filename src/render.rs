//! Text renderings of a token-level edit script.

use std::io::{self, Write};

use crate::tokenize::Granularity;
use crate::types::EditOp;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `No change <tok>` / `Delete <tok>` / `Add <tok>`, one op per line.
    Listing,
    /// Single-character prefix (`' '`, `'-'`, `'+'`) then the token.
    Compact,
}

/// Printable form of a token: line terminators trimmed, UTF-8 decoded
/// lossily; single bytes are escaped.
pub fn display_token(token: &[u8], granularity: Granularity) -> String {
    match granularity {
        Granularity::Bytes => token.escape_ascii().to_string(),
        _ => {
            let trimmed = token
                .strip_suffix(b"\n")
                .map(|t| t.strip_suffix(b"\r").unwrap_or(t))
                .unwrap_or(token);
            String::from_utf8_lossy(trimmed).into_owned()
        }
    }
}

pub fn render<W: Write>(
    out: &mut W,
    ops: &[EditOp<'_, &[u8]>],
    granularity: Granularity,
    format: Format,
) -> io::Result<()> {
    for op in ops {
        let token = display_token(op.value(), granularity);
        match (format, op) {
            (Format::Listing, EditOp::Equal { .. }) => writeln!(out, "No change {}", token)?,
            (Format::Listing, EditOp::Delete { .. }) => writeln!(out, "Delete {}", token)?,
            (Format::Listing, EditOp::Insert { .. }) => writeln!(out, "Add {}", token)?,
            (Format::Compact, EditOp::Equal { .. }) => writeln!(out, " {}", token)?,
            (Format::Compact, EditOp::Delete { .. }) => writeln!(out, "-{}", token)?,
            (Format::Compact, EditOp::Insert { .. }) => writeln!(out, "+{}", token)?,
        }
    }
    Ok(())
}
