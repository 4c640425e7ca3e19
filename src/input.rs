//! Readers for graph files.
//!
//! The plain-text format is whitespace separated: a header `n m`, then `n`
//! vertex records `id x y`, then `m` edge records `u v`. Line breaks carry no
//! meaning beyond error reporting.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::error::{Error, Result};
use crate::graph::{Graph, Vertex};
use crate::VertexIndex;

/// Whether edge endpoints in a file count vertices from 0 or from 1.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

impl IndexBase {
    fn to_index(self, raw: usize, line: usize) -> Result<VertexIndex> {
        match self {
            IndexBase::Zero => Ok(raw),
            IndexBase::One => raw.checked_sub(1).ok_or_else(|| Error::Parse {
                line,
                message: String::from("vertex index 0 in a 1-based file"),
            }),
        }
    }
}

struct Tokens<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(tok) = self.pending.next() {
                return Ok(Some(tok));
            }
            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    let line = line?;
                    self.line_no += 1;
                    self.pending = line
                        .split_whitespace()
                        .map(String::from)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
            }
        }
    }

    fn parse<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let tok = self.next_token()?.ok_or_else(|| Error::Parse {
            line: self.line_no,
            message: format!("unexpected end of input, expected {}", what),
        })?;
        tok.parse().map_err(|_| Error::Parse {
            line: self.line_no,
            message: format!("invalid {}: {:?}", what, tok),
        })
    }
}

/// Parses the plain-text format into vertex records and 0-based edge pairs.
pub fn parse_graph<R: BufRead>(
    reader: R,
    base: IndexBase,
) -> Result<(Vec<Vertex>, Vec<(VertexIndex, VertexIndex)>)> {
    let mut tokens = Tokens::new(reader);
    let n: usize = tokens.parse("vertex count")?;
    let m: usize = tokens.parse("edge count")?;

    let mut vertices = Vec::new();
    for _ in 0..n {
        let id: i64 = tokens.parse("vertex id")?;
        let x: f64 = tokens.parse("x coordinate")?;
        let y: f64 = tokens.parse("y coordinate")?;
        vertices.push(Vertex::new(id, x, y));
    }

    let mut edges = Vec::new();
    for _ in 0..m {
        let u: usize = tokens.parse("edge endpoint")?;
        let u = base.to_index(u, tokens.line_no)?;
        let v: usize = tokens.parse("edge endpoint")?;
        let v = base.to_index(v, tokens.line_no)?;
        edges.push((u, v));
    }

    if let Some(tok) = tokens.next_token()? {
        return Err(Error::Parse {
            line: tokens.line_no,
            message: format!("trailing data after {} edges: {:?}", m, tok),
        });
    }

    Ok((vertices, edges))
}

/// Reads and loads a plain-text graph file.
pub fn read_graph<P: AsRef<Path>>(path: P, base: IndexBase) -> Result<Graph> {
    let file = File::open(path.as_ref())?;
    let (vertices, edges) = parse_graph(BufReader::new(file), base)?;
    debug!(
        "Parsed {}: {} vertices, {} edges",
        path.as_ref().display(),
        vertices.len(),
        edges.len()
    );
    Graph::load(vertices, &edges)
}

fn csv_field<T: FromStr>(record: &csv::StringRecord, i: usize, what: &str, line: usize) -> Result<T> {
    let raw = record.get(i).ok_or_else(|| Error::Parse {
        line,
        message: format!("missing {}", what),
    })?;
    raw.trim().parse().map_err(|_| Error::Parse {
        line,
        message: format!("invalid {}: {:?}", what, raw),
    })
}

fn record_line(record: &csv::StringRecord) -> usize {
    record.position().map(|p| p.line() as usize).unwrap_or(0)
}

fn read_vertex_csv<R: std::io::Read>(reader: R) -> Result<Vec<Vertex>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut vertices = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record_line(&record);
        let id: i64 = csv_field(&record, 0, "vertex id", line)?;
        let x: f64 = csv_field(&record, 1, "x coordinate", line)?;
        let y: f64 = csv_field(&record, 2, "y coordinate", line)?;
        vertices.push(Vertex::new(id, x, y));
    }
    Ok(vertices)
}

fn read_edge_csv<R: std::io::Read>(reader: R, base: IndexBase) -> Result<Vec<(VertexIndex, VertexIndex)>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut edges = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record_line(&record);
        let u: usize = csv_field(&record, 0, "edge endpoint", line)?;
        let v: usize = csv_field(&record, 1, "edge endpoint", line)?;
        edges.push((base.to_index(u, line)?, base.to_index(v, line)?));
    }
    Ok(edges)
}

/// Loads a graph from a vertex CSV (`id,x,y`) and an edge CSV (`u,v`), both
/// with a header row.
pub fn read_csv_graph<P: AsRef<Path>, Q: AsRef<Path>>(
    vertices_path: P,
    edges_path: Q,
    base: IndexBase,
) -> Result<Graph> {
    let vertices = read_vertex_csv(File::open(vertices_path.as_ref())?)?;
    let edges = read_edge_csv(File::open(edges_path.as_ref())?, base)?;
    Graph::load(vertices, &edges)
}
