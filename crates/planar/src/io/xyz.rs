use std::io::{BufRead, Read, Write};

use nalgebra::Vector2;

use super::{IoError, ParseError};

/// Parse a point list: count `n`, then `n` triples `x y z` (z dropped).
///
/// Tokens may be split across lines arbitrarily. Anything after the last
/// triple is ignored with a warning.
pub fn read_xyz<R: BufRead>(mut reader: R) -> Result<Vec<Vector2<f64>>, IoError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let last_line = text.lines().count().max(1);
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(i, l)| l.split_whitespace().map(move |t| (i + 1, t)));

    let (line, count) = tokens
        .next()
        .ok_or_else(|| ParseError::new(1, "missing point count"))?;
    let n: usize = count
        .parse()
        .map_err(|_| ParseError::new(line, format!("invalid point count `{count}`")))?;

    let mut points = Vec::with_capacity(n.min(1 << 16));
    for k in 0..n {
        let mut xyz = [0.0f64; 3];
        for c in xyz.iter_mut() {
            let (line, tok) = tokens.next().ok_or_else(|| {
                ParseError::new(
                    last_line,
                    format!("unexpected end of input in point {} of {n}", k + 1),
                )
            })?;
            *c = parse_coord(line, tok)?;
        }
        points.push(Vector2::new(xyz[0], xyz[1]));
    }
    if let Some((line, _)) = tokens.next() {
        tracing::warn!(line, declared = n, "ignoring trailing tokens after point list");
    }
    Ok(points)
}

pub(super) fn parse_coord(line: usize, tok: &str) -> Result<f64, ParseError> {
    match tok.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::new(line, format!("invalid coordinate `{tok}`"))),
    }
}

/// Write the count, then one `x y 0` line per point (six decimals).
pub fn write_xyz<W: Write>(mut out: W, points: &[Vector2<f64>]) -> Result<(), IoError> {
    writeln!(out, "{}", points.len())?;
    for p in points {
        writeln!(out, "{:.6} {:.6} 0", p.x, p.y)?;
    }
    out.flush()?;
    Ok(())
}
