//! Split raw input into the tokens the differ compares.
//!
//! Every granularity is lossless: concatenating the tokens yields the
//! input again.

use crate::types::DiffError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Lines,
    Words,
    Chars,
    Bytes,
}

pub fn tokenize(data: &[u8], granularity: Granularity) -> Result<Vec<&[u8]>, DiffError> {
    Ok(match granularity {
        Granularity::Lines => lines(data),
        Granularity::Words => words(data),
        Granularity::Chars => chars(data)?,
        Granularity::Bytes => data.chunks(1).collect(),
    })
}

/// Lines keep their `\n`; a final line without one is still a token.
fn lines(data: &[u8]) -> Vec<&[u8]> {
    data.split_inclusive(|&b| b == b'\n').collect()
}

/// Alternating runs of ASCII whitespace and everything else.
fn words(data: &[u8]) -> Vec<&[u8]> {
    let mut out = Vec::new();
    let mut start = 0;
    for i in 1..data.len() {
        if data[i].is_ascii_whitespace() != data[i - 1].is_ascii_whitespace() {
            out.push(&data[start..i]);
            start = i;
        }
    }
    if start < data.len() {
        out.push(&data[start..]);
    }
    out
}

fn chars(data: &[u8]) -> Result<Vec<&[u8]>, DiffError> {
    let text = std::str::from_utf8(data)?;
    let mut out = Vec::with_capacity(text.len());
    let mut indices = text.char_indices().map(|(i, _)| i).peekable();
    while let Some(i) = indices.next() {
        let end = indices.peek().copied().unwrap_or(text.len());
        out.push(&data[i..end]);
    }
    Ok(out)
}
