//! # Matrix
//!
//! The Matrix-Format stores the payload of a graph as it is: one line per row, each row a list of
//! integers separated by whitespace. Depending on the form, a row is
//! - the neighbors of a node (adjacency list; may be empty),
//! - the arc counts from a node to every node (adjacency matrix), or
//! - the entries of a node in every edge column (incidence matrix).
//!
//! The format itself does not say which form it holds; the reader has to be told.
//!
//! ```
//! use graphforms::{io::*, prelude::*};
//!
//! let graph = MatrixReader::new()
//!     .state(State::IncidenceMatrix)
//!     .try_read_graph("1 2\n-1 0\n".as_bytes())
//!     .unwrap();
//!
//! assert_eq!(graph.number_of_edges(), 2);
//! assert_eq!(
//!     graph.ordered_directed_edges(),
//!     vec![Edge(0, 0), Edge(0, 0), Edge(0, 1)]
//! );
//! ```

use std::{
    io::{BufRead, ErrorKind, Write},
    path::Path,
};

use super::*;
use crate::graph::UNNAMED;

/// A GraphReader for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixReader {
    /// Form the rows are interpreted as
    state: State,
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Display name of graphs read from a reader
    name: String,
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self {
            state: State::AdjacencyMatrix,
            comment_identifier: "c".to_string(),
            name: UNNAMED.to_string(),
        }
    }
}

impl MatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the form the rows are interpreted as
    pub fn state(mut self, state: State) -> MatrixReader {
        self.state = state;
        self
    }

    /// Updates the comment identifier. An empty identifier disables comments.
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> MatrixReader {
        self.comment_identifier = c.into();
        self
    }

    /// Updates the display name of graphs read from a reader.
    /// Graphs read from a file are named after the file.
    pub fn name<S: Into<String>>(mut self, name: S) -> MatrixReader {
        self.name = name.into();
        self
    }

    /// Parses all non-comment lines into rows; blank lines are empty rows
    fn read_rows<R: BufRead>(&self, reader: R) -> Result<Vec<Vec<i64>>> {
        let mut rows = Vec::new();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            if !self.comment_identifier.is_empty() && line.starts_with(&self.comment_identifier) {
                continue;
            }

            let row = line
                .split_whitespace()
                .map(|token| {
                    token.parse::<i64>().map_err(|_| {
                        io_error!(
                            ErrorKind::InvalidData,
                            format!("Invalid value `{token}` in line {}", number + 1)
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        Ok(rows)
    }
}

impl GraphReader for MatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<Graph> {
        let rows = self.read_rows(reader)?;
        tracing::debug!(state = %self.state, rows = rows.len(), "read matrix");
        Ok(Graph::try_from_rows(self.state, rows, self.name.as_str())?)
    }

    fn try_read_graph_file<P: AsRef<Path>>(&self, path: P) -> Result<Graph> {
        let path = path.as_ref();
        let mut graph = self.try_read_graph(BufReader::new(File::open(path)?))?;
        if let Some(file_name) = path.file_name() {
            graph.rename(file_name.to_string_lossy());
        }
        Ok(graph)
    }
}

/// A writer for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixWriter {
    /// Separator between the values of a row
    separator: String,
    /// Terminate the last row with a line break
    trailing_newline: bool,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            trailing_newline: true,
        }
    }
}

impl MatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the separator between values. It must be non-empty whitespace for the output to
    /// be readable by a [`MatrixReader`].
    pub fn separator<S: Into<String>>(mut self, separator: S) -> MatrixWriter {
        self.separator = separator.into();
        self
    }

    /// If *false*, the last row is not followed by a line break. Trailing empty rows of an
    /// adjacency list are then lost when reading the output back.
    pub fn trailing_newline(mut self, trailing_newline: bool) -> MatrixWriter {
        self.trailing_newline = trailing_newline;
        self
    }
}

impl GraphWriter for MatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &Graph, mut writer: W) -> Result<()> {
        raise_error_unless!(
            !self.separator.is_empty() && self.separator.chars().all(char::is_whitespace),
            ErrorKind::InvalidInput,
            format!("Separator {:?} is not whitespace", self.separator)
        );

        let rows = graph.to_rows();
        for (i, row) in rows.iter().enumerate() {
            let line = row
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(self.separator.as_str());
            write!(writer, "{line}")?;

            if self.trailing_newline || i + 1 < rows.len() {
                writeln!(writer)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn write_to_string(writer: &MatrixWriter, graph: &Graph) -> String {
        let mut buffer = Vec::new();
        writer.try_write_graph(graph, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn read_rows_per_state() {
        let input = "c a mutual pair\n0 1\n1 0\n";

        let matrix = MatrixReader::new().try_read_graph(input.as_bytes()).unwrap();
        assert_eq!(matrix.state(), State::AdjacencyMatrix);
        assert_eq!(matrix.name(), UNNAMED);
        assert_eq!(matrix.number_of_edges(), 1);

        let list = MatrixReader::new()
            .state(State::AdjacencyList)
            .name("list")
            .try_read_graph(input.as_bytes())
            .unwrap();
        assert_eq!(list.name(), "list");
        assert_eq!(
            list.directed_edges(),
            vec![Edge(0, 0), Edge(0, 1), Edge(1, 1), Edge(1, 0)]
        );
    }

    #[test]
    fn blank_lines_are_empty_rows() {
        let graph = MatrixReader::new()
            .state(State::AdjacencyList)
            .try_read_graph("1\n\n  \n0 1\n".as_bytes())
            .unwrap();

        assert_eq!(graph.to_rows(), vec![vec![1], vec![], vec![], vec![0, 1]]);
    }

    #[test]
    fn comments_can_be_disabled() {
        let reader = MatrixReader::new().comment_identifier("");
        let err = reader.try_read_graph("c\n".as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        let reader = MatrixReader::new().comment_identifier("#");
        let graph = reader.try_read_graph("# nothing\n2\n".as_bytes()).unwrap();
        assert_eq!(graph.to_rows(), vec![vec![2]]);
    }

    #[test]
    fn invalid_input_is_invalid_data() {
        for (state, input) in [
            (State::AdjacencyMatrix, "0 x\n1 0\n"),
            (State::AdjacencyMatrix, "0 1\n1\n"),
            (State::AdjacencyMatrix, "0 -1\n1 0\n"),
            (State::AdjacencyList, "3\n"),
            (State::IncidenceMatrix, "1 1\n1\n"),
            (State::IncidenceMatrix, "1\n1\n1\n"),
        ] {
            let err = MatrixReader::new()
                .state(state)
                .try_read_graph(input.as_bytes())
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{state}: {input:?}");
        }
    }

    #[test]
    fn write_rows() {
        let graph =
            Graph::try_from_rows(State::IncidenceMatrix, vec![vec![1, 2], vec![-1, 0]], "g")
                .unwrap();

        assert_eq!(write_to_string(&MatrixWriter::new(), &graph), "1 2\n-1 0\n");
        assert_eq!(
            write_to_string(
                &MatrixWriter::new().separator("\t").trailing_newline(false),
                &graph
            ),
            "1\t2\n-1\t0"
        );

        let mut buffer = Vec::new();
        let err = MatrixWriter::new()
            .separator(",")
            .try_write_graph(&graph, &mut buffer)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn write_then_read_keeps_every_state() {
        let rng = &mut Pcg64Mcg::seed_from_u64(9);

        for state in State::ALL {
            for _ in 0..10 {
                let n = rng.random_range(0..10);
                let mut graph = Graph::new(random_simple_list(rng, n, 0.3), "g");
                graph.set_state(state).unwrap();

                let text = write_to_string(&MatrixWriter::new(), &graph);
                let read = MatrixReader::new()
                    .state(state)
                    .name("g")
                    .try_read_graph(text.as_bytes())
                    .unwrap();

                assert_eq!(read, graph);
            }
        }
    }

    #[test]
    fn files_are_named_after_the_file() {
        let path = std::env::temp_dir().join(format!("graphforms-{}.txt", std::process::id()));
        let graph = Graph::try_from_rows(State::AdjacencyList, vec![vec![1], vec![]], "g").unwrap();

        MatrixWriter::new()
            .try_write_graph_file(&graph, &path)
            .unwrap();
        let read = MatrixReader::new()
            .state(State::AdjacencyList)
            .try_read_graph_file(&path)
            .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(read.to_rows(), graph.to_rows());
        assert_eq!(
            read.name(),
            path.file_name().unwrap().to_string_lossy().as_ref()
        );
    }
}
