//! Text pattern files.
//!
//! ```text
//! <rows> <cols>
//! <cell> <cell> ... <cell>
//! ```
//!
//! One line per grid row, whitespace-separated tokens; `0` is empty and any
//! other token is alive. The header is informational: the parsed rows and the
//! width of the first data row decide the grid size.

use std::fs;
use std::path::Path;

use log::{info, trace, warn};

use super::{CellState, FormatError, Grid, GridError};

const BYTE_ORDER_MARK: char = '\u{feff}';

pub struct PatternLoader;

impl PatternLoader {
    /// Read and parse a pattern file
    pub fn load(path: impl AsRef<Path>) -> Result<Grid, GridError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| FormatError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        info!("loading pattern from {}", path.display());
        Self::parse(&text)
    }

    /// Parse pattern text into a bordered grid
    pub fn parse(text: &str) -> Result<Grid, GridError> {
        let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text);
        let mut lines = text.lines().enumerate();

        let (_, header) = lines.next().ok_or(FormatError::Empty)?;
        let declared = Self::parse_header(header)?;

        let mut width = None;
        let mut states = Vec::new();
        for (idx, line) in lines.filter(|(_, line)| !line.trim().is_empty()) {
            let row: Vec<CellState> = line.split_whitespace().map(CellState::from_token).collect();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(FormatError::RaggedRow {
                    line: idx + 1,
                    expected,
                    found: row.len(),
                }
                .into());
            }
            states.push(row);
        }

        let grid = Grid::from_states(states)?;
        let actual = grid.dimensions();
        info!("pattern declares {}x{}, parsed {}x{}", declared.0, declared.1, actual.0, actual.1);
        if declared != (actual.0 as isize, actual.1 as isize) {
            warn!(
                "header size {}x{} does not match pattern body {}x{}; using the body",
                declared.0, declared.1, actual.0, actual.1
            );
        }
        trace!("cell positions:\n{}", grid.positions_dump());

        Ok(grid)
    }

    /// Declared size; signed because it is only compared against the body.
    fn parse_header(header: &str) -> Result<(isize, isize), FormatError> {
        let malformed = || FormatError::MalformedHeader(header.to_owned());
        let mut tokens = header.split_whitespace();

        let rows = tokens.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
        let cols = tokens.next().ok_or_else(malformed)?.parse().map_err(|_| malformed())?;
        Ok((rows, cols))
    }
}
