//! Seat labels, the seat grid, and the client-side seat selection.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A seat label: one row letter followed by a column number, e.g. `A1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeatLabel {
    row: char,
    column: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid seat label: {0:?}")]
pub struct SeatParseError(String);

impl SeatLabel {
    /// Build a label. The row must be an ASCII letter and the column at least 1.
    pub fn new(row: char, column: u8) -> Option<Self> {
        if !row.is_ascii_alphabetic() || column == 0 {
            return None;
        }
        Some(Self {
            row: row.to_ascii_uppercase(),
            column,
        })
    }

    pub fn row(&self) -> char {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }
}

impl fmt::Display for SeatLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.column)
    }
}

impl FromStr for SeatLabel {
    type Err = SeatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row = chars.next().ok_or_else(|| SeatParseError(s.to_string()))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SeatParseError(s.to_string()));
        }
        let column = digits
            .parse::<u8>()
            .map_err(|_| SeatParseError(s.to_string()))?;
        SeatLabel::new(row, column).ok_or_else(|| SeatParseError(s.to_string()))
    }
}

// Seats order by their label text, so "A10" sorts before "A2". The first seat
// in this order is the one transmitted to the booking service.
impl Ord for SeatLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.column.to_string().cmp(&other.column.to_string()))
    }
}

impl PartialOrd for SeatLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The fixed-size auditorium grid: rows `A..` by columns `1..=columns`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatGrid {
    rows: u8,
    columns: u8,
}

impl SeatGrid {
    /// Rows are capped at 26 (A–Z).
    pub fn new(rows: u8, columns: u8) -> Self {
        Self {
            rows: rows.min(26),
            columns,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn contains(&self, seat: &SeatLabel) -> bool {
        let row_index = seat.row as u32 - 'A' as u32;
        row_index < self.rows as u32 && seat.column <= self.columns
    }

    /// Row letters in display order.
    pub fn row_letters(&self) -> impl Iterator<Item = char> {
        (0..self.rows).map(|r| (b'A' + r) as char)
    }

    /// Seats of one row, left to right.
    pub fn row_seats(&self, row: char) -> impl Iterator<Item = SeatLabel> {
        let columns = self.columns;
        (1..=columns).filter_map(move |c| SeatLabel::new(row, c))
    }
}

impl Default for SeatGrid {
    fn default() -> Self {
        Self::new(6, 10)
    }
}

/// The seats a user has toggled on, kept sorted and unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatSelection {
    seats: BTreeSet<SeatLabel>,
}

impl SeatSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a seat. Returns `true` if the seat is now selected.
    pub fn toggle(&mut self, seat: SeatLabel) -> bool {
        if self.seats.remove(&seat) {
            false
        } else {
            self.seats.insert(seat);
            true
        }
    }

    pub fn contains(&self, seat: &SeatLabel) -> bool {
        self.seats.contains(seat)
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn first(&self) -> Option<SeatLabel> {
        self.seats.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeatLabel> {
        self.seats.iter()
    }

    pub fn clear(&mut self) {
        self.seats.clear();
    }

    /// Labels joined with ", ", e.g. "A1, A10, B3".
    pub fn joined(&self) -> String {
        self.seats
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(s: &str) -> SeatLabel {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(seat("A1").to_string(), "A1");
        assert_eq!(seat("c10").to_string(), "C10");
        assert!("".parse::<SeatLabel>().is_err());
        assert!("A0".parse::<SeatLabel>().is_err());
        assert!("1A".parse::<SeatLabel>().is_err());
        assert!("AB".parse::<SeatLabel>().is_err());
    }

    #[test]
    fn test_seat_number_must_be_plain_digits() {
        assert!("A+5".parse::<SeatLabel>().is_err());
        assert!("A-5".parse::<SeatLabel>().is_err());
        assert!("A 5".parse::<SeatLabel>().is_err());
        assert!("A".parse::<SeatLabel>().is_err());
        assert_eq!(seat(" B7 ").to_string(), "B7");
    }

    #[test]
    fn test_label_order_is_textual() {
        let mut selection = SeatSelection::new();
        selection.toggle(seat("A2"));
        selection.toggle(seat("B1"));
        selection.toggle(seat("A10"));
        assert_eq!(selection.joined(), "A10, A2, B1");
        assert_eq!(selection.first(), Some(seat("A10")));
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut selection = SeatSelection::new();
        selection.toggle(seat("C3"));
        selection.toggle(seat("A5"));
        let before = selection.clone();

        assert!(selection.toggle(seat("B7")));
        assert!(!selection.toggle(seat("B7")));
        assert_eq!(selection, before);
        assert_eq!(selection.joined(), "A5, C3");

        assert!(!selection.toggle(seat("A5")));
        assert!(selection.toggle(seat("A5")));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_grid_bounds() {
        let grid = SeatGrid::default();
        assert!(grid.contains(&seat("A1")));
        assert!(grid.contains(&seat("F10")));
        assert!(!grid.contains(&seat("G1")));
        assert!(!grid.contains(&seat("A11")));
        assert_eq!(grid.row_letters().collect::<String>(), "ABCDEF");
        assert_eq!(grid.row_seats('B').count(), 10);
    }
}
