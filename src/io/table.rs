//! # Table
//!
//! Human-readable rendering of the current form of a graph. Nodes are labelled `v_1 .. v_n` and
//! incidence columns `a_1 .. a_m`:
//!
//! ```text
//! Graph: 'g'          Graph: 'g'
//! v_1 v_2                 v_1 v_2
//! v_2 v_1             v_1   0   1
//!                     v_2   1   0
//! ```
//!
//! The first column of an adjacency list table is the node itself, followed by its neighbors in
//! order. Matrix tables right-justify the values below their column label. The
//! [`Display`](std::fmt::Display) implementations of [`Graph`] and [`Representation`] use the
//! default [`TableFormatter`].

use std::{
    fmt::{self, Display},
    io::Write,
};

use super::*;

/// A writer for the Table-Format
#[derive(Debug, Clone)]
pub struct TableFormatter {
    /// Prefix of a node label (default: 'v')
    node_prefix: String,
    /// Prefix of an incidence column label (default: 'a')
    edge_prefix: String,
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self {
            node_prefix: "v".to_string(),
            edge_prefix: "a".to_string(),
        }
    }
}

impl TableFormatter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prefix of a node label (`v` by default)
    pub fn node_prefix<S: Into<String>>(mut self, prefix: S) -> TableFormatter {
        self.node_prefix = prefix.into();
        self
    }

    /// Set the prefix of an incidence column label (`a` by default)
    pub fn edge_prefix<S: Into<String>>(mut self, prefix: S) -> TableFormatter {
        self.edge_prefix = prefix.into();
        self
    }

    /// Renders the payload as a table; lines are separated by `\n`
    pub fn format(&self, repr: &Representation) -> String {
        let rows = repr.to_rows();
        match repr.state() {
            State::AdjacencyList => self.format_list(&rows),
            State::AdjacencyMatrix => self.format_matrix(&rows, &self.node_prefix),
            State::IncidenceMatrix => self.format_matrix(&rows, &self.edge_prefix),
        }
    }

    /// Renders the name line `Graph: '<name>'` followed by the table
    pub fn format_graph(&self, graph: &Graph) -> String {
        format!("Graph: '{}'\n{}", graph.name(), self.format(graph.repr()))
    }

    /// Labels are 1-based
    fn label(prefix: &str, index: usize) -> String {
        format!("{prefix}_{}", index + 1)
    }

    fn format_list(&self, rows: &[Vec<i64>]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .enumerate()
            .map(|(u, nb)| {
                std::iter::once(Self::label(&self.node_prefix, u))
                    .chain(nb.iter().map(|&v| Self::label(&self.node_prefix, v as usize)))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = Vec::new();
        for row in &cells {
            for (j, cell) in row.iter().enumerate() {
                if j == widths.len() {
                    widths.push(0);
                }
                widths[j] = widths[j].max(cell.len());
            }
        }

        cells
            .iter()
            .map(|row| {
                let line = row
                    .iter()
                    .zip(&widths)
                    .map(|(cell, &width)| format!("{cell:<width$}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn format_matrix(&self, rows: &[Vec<i64>], column_prefix: &str) -> String {
        let columns = rows.first().map_or(0, |row| row.len());

        let header: Vec<String> = (0..columns)
            .map(|j| Self::label(column_prefix, j))
            .collect();
        let labels: Vec<String> = (0..rows.len())
            .map(|i| Self::label(&self.node_prefix, i))
            .collect();

        let label_width = labels.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = (0..columns)
            .map(|j| {
                rows.iter()
                    .map(|row| row[j].to_string().len())
                    .chain(std::iter::once(header[j].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let line = |label: &str, cells: Vec<String>| {
            let mut line = format!("{label:<label_width$}");
            for (cell, &width) in cells.iter().zip(&widths) {
                line.push_str(&format!(" {cell:>width$}"));
            }
            line.trim_end().to_string()
        };

        std::iter::once(line("", header))
            .chain(rows.iter().zip(&labels).map(|(row, label)| {
                line(label, row.iter().map(|x| x.to_string()).collect())
            }))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl GraphWriter for TableFormatter {
    fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        writeln!(writer, "{}", self.format_graph(graph))
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TableFormatter::default().format(self))
    }
}

impl Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TableFormatter::default().format_graph(self))
    }
}
