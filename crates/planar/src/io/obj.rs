use std::io::{BufRead, Write};

use nalgebra::Vector2;

use super::xyz::parse_coord;
use super::{IoError, ParseError};
use crate::plane::Polygon;

/// Resolve an OBJ vertex reference (`7`, `7/1/3`, or relative `-1`) to a 0-based index.
fn vertex_index(line: usize, tok: &str, known: usize) -> Result<usize, ParseError> {
    let lead = tok.split('/').next().unwrap_or(tok);
    let raw: i64 = lead
        .parse()
        .map_err(|_| ParseError::new(line, format!("invalid vertex index `{tok}`")))?;
    let resolved = match raw {
        r if r > 0 => usize::try_from(r - 1).ok(),
        r if r < 0 => usize::try_from(r.unsigned_abs())
            .ok()
            .and_then(|back| known.checked_sub(back)),
        _ => None,
    };
    match resolved {
        Some(i) if i < known => Ok(i),
        _ => Err(ParseError::new(
            line,
            format!("vertex index `{tok}` out of range (have {known} vertices)"),
        )),
    }
}

/// Read a polygon from an OBJ-style vertex/face listing.
///
/// - `v x y [z ...]` appends a vertex (z dropped).
/// - `f i j k ...` appends the referenced vertices to the polygon, in order.
/// - Without any `f` record, `l` records rebuild the loop: every index of a
///   record but its last starts an edge, so `l 1 2`, `l 2 3`, … `l n 1`
///   yields vertices `1..=n`.
/// - Other records (`#`, `vn`, `vt`, `o`, `g`, …) are skipped.
pub fn read_obj<R: BufRead>(reader: R) -> Result<Polygon, IoError> {
    let mut vertices: Vec<Vector2<f64>> = Vec::new();
    let mut faces: Vec<Vector2<f64>> = Vec::new();
    let mut lines_loop: Vec<Vector2<f64>> = Vec::new();
    let mut saw_face = false;

    for (i, text) in reader.lines().enumerate() {
        let text = text?;
        let line = i + 1;
        let mut toks = text.split_whitespace();
        match toks.next() {
            Some("v") => {
                let x = toks.next().ok_or_else(|| ParseError::new(line, "vertex without x"))?;
                let y = toks.next().ok_or_else(|| ParseError::new(line, "vertex without y"))?;
                vertices.push(Vector2::new(parse_coord(line, x)?, parse_coord(line, y)?));
            }
            Some("f") => {
                saw_face = true;
                for tok in toks {
                    faces.push(vertices[vertex_index(line, tok, vertices.len())?]);
                }
            }
            Some("l") => {
                let idx = toks
                    .map(|tok| vertex_index(line, tok, vertices.len()))
                    .collect::<Result<Vec<_>, _>>()?;
                if idx.len() < 2 {
                    return Err(ParseError::new(line, "line record needs two indices").into());
                }
                lines_loop.extend(idx[..idx.len() - 1].iter().map(|&k| vertices[k]));
            }
            _ => {}
        }
    }
    let verts = if saw_face { faces } else { lines_loop };
    tracing::debug!(vertices = vertices.len(), polygon = verts.len(), "read_obj");
    Ok(Polygon::new(verts))
}

/// Write `poly` as `v x y 0` lines followed by closed-loop `l i j` edges.
pub fn write_obj<W: Write>(mut out: W, poly: &Polygon) -> Result<(), IoError> {
    for v in &poly.verts {
        writeln!(out, "v {:.6} {:.6} 0", v.x, v.y)?;
    }
    let n = poly.len();
    for i in 0..n {
        writeln!(out, "l {} {}", i + 1, (i + 1) % n + 1)?;
    }
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
