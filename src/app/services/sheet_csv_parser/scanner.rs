//! Character-level scanner for delimited sheet exports
//!
//! Sheet exports arrive as comma-delimited text where any cell may be
//! quoted to carry embedded delimiters, line breaks, or quote characters.
//! The scanner walks the input once with a two-state machine and never
//! fails: an unterminated quoted field is closed implicitly at end of
//! input and the pending cell is kept.

/// One raw row of cell values, in source order, with quoting resolved
pub type RawRow = Vec<String>;

/// Scanner state: inside or outside a quoted field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Unquoted,
    Quoted,
}

/// Scan delimited text into rows of raw string cells.
///
/// Outside quotes, a comma ends the cell, a line feed ends the row, and a
/// carriage return is discarded. Inside quotes every character is literal,
/// carriage returns included, and a doubled quote (`""`) collapses to one
/// literal quote. A trailing row without a final line terminator is kept.
pub fn parse(text: &str) -> Vec<RawRow> {
    let mut rows: Vec<RawRow> = Vec::new();
    let mut row: RawRow = Vec::new();
    let mut cell = String::new();
    let mut state = ScanState::Unquoted;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match state {
            ScanState::Quoted => {
                if ch == '"' {
                    if chars.peek() == Some(&'"') {
                        // Escaped quote: emit one literal quote, consume both
                        cell.push('"');
                        chars.next();
                    } else {
                        state = ScanState::Unquoted;
                    }
                } else {
                    // Commas, line feeds and carriage returns are literal here
                    cell.push(ch);
                }
            }
            ScanState::Unquoted => match ch {
                '"' => state = ScanState::Quoted,
                ',' => row.push(std::mem::take(&mut cell)),
                '\n' => {
                    row.push(std::mem::take(&mut cell));
                    rows.push(std::mem::take(&mut row));
                }
                // CR is stripped between fields but preserved inside quotes
                '\r' => {}
                _ => cell.push(ch),
            },
        }
    }

    // Flush a trailing cell/row that has no final line terminator
    if !cell.is_empty() || !row.is_empty() {
        row.push(cell);
        rows.push(row);
    }

    rows
}
