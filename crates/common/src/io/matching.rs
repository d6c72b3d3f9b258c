use std::fs::File;
use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadMatchingError {
    #[error("missing header")]
    MissingHeader,
    #[error("invalid line {line} (expected 'u v', got '{content}')")]
    InvalidLine { line: usize, content: String },
    #[error("wrong number of pairs (expected {expected}, got {actual})")]
    WrongLen { expected: usize, actual: usize },
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum WriteMatchingError {
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Writes the number of matched pairs followed by one 0-based pair `u v`
/// per line, with `u < v`.
pub fn write_matching<W>(writer: &mut W, pairs: impl IntoIterator<Item = (usize, usize)>) -> Result<(), WriteMatchingError>
where
    W: Write,
{
    let mut pairs: Vec<_> = pairs.into_iter().map(|(u, v)| (u.min(v), u.max(v))).collect();
    pairs.sort_unstable();
    writeln!(writer, "{}", pairs.len())?;
    for (u, v) in pairs {
        writeln!(writer, "{u} {v}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads pairs written by [write_matching].
///
/// The pairs are not checked against a graph.
pub fn read_matching<P>(path: P) -> Result<Vec<(usize, usize)>, ReadMatchingError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut lines = std::io::BufReader::new(file).lines().enumerate();
    let (_, header) = lines.next().ok_or(ReadMatchingError::MissingHeader)?;
    let expected: usize = header?.trim().parse()?;

    let mut pairs = Vec::with_capacity(expected);
    for (i, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let mut tokens = line.split_ascii_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(ReadMatchingError::InvalidLine { line: i + 1, content: line.clone() });
        };
        pairs.push((a.parse()?, b.parse()?));
    }
    if pairs.len() != expected {
        return Err(ReadMatchingError::WrongLen { expected, actual: pairs.len() });
    }
    Ok(pairs)
}

#[cfg(test)]
mod test {
    use super::{read_matching, write_matching, ReadMatchingError};
    use crate::testing::temp_file;

    #[test]
    fn writes_sorted_pairs() {
        let mut out = vec![];
        write_matching(&mut out, [(3, 2), (0, 1)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n0 1\n2 3\n");
    }

    #[test]
    fn reads_written_pairs() {
        let mut out = vec![];
        write_matching(&mut out, [(4, 0), (1, 2)]).unwrap();
        let path = temp_file("matching.txt", &String::from_utf8(out).unwrap());
        assert_eq!(read_matching(&path).unwrap(), [(0, 4), (1, 2)]);
    }

    #[test]
    fn rejects_wrong_length() {
        let path = temp_file("matching-len.txt", "2\n0 1\n");
        assert!(matches!(read_matching(&path).unwrap_err(), ReadMatchingError::WrongLen { expected: 2, actual: 1 }));

        let path = temp_file("matching-line.txt", "1\n0\n");
        assert!(matches!(read_matching(&path).unwrap_err(), ReadMatchingError::InvalidLine { line: 2, .. }));
    }
}
