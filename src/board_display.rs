use std::fmt::{self, Display, Formatter};

use crate::{
    board::BoardState,
    coord::{COLUMN_COUNT, Coord, Level, ROW_COUNT},
    piece::Piece,
    side::Side,
};

const LIGHT: &str = "\x1b[30;107m";
const DARK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

/// Levels from top to bottom as they are laid out left to right.
const LEVELS: [Level; 3] = [Level::Sky, Level::Ground, Level::Underworld];

/// The three levels side by side with `info` written to the right, one line
/// per row.
pub struct BoardDisplay<'a> {
    pub board: &'a BoardState,
    pub view: Side,
    pub highlighted: &'a [Coord],
    pub info: &'a str,
}
impl BoardDisplay<'_> {
    fn row(&self, y: u8) -> u8 {
        match self.view {
            Side::Gold => ROW_COUNT - y,
            Side::Scarlet => y + 1,
        }
    }
    fn column(&self, x: u8) -> u8 {
        match self.view {
            Side::Gold => x + 1,
            Side::Scarlet => COLUMN_COUNT - x,
        }
    }
}
impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.info.lines().fuse();
        for level in LEVELS {
            write!(f, "  {:<28}", level.to_string())?;
        }
        writeln!(f)?;
        for y in 0..ROW_COUNT {
            let row = self.row(y);
            for level in LEVELS {
                write!(f, "{row} ")?;
                for x in 0..COLUMN_COUNT {
                    let Some(position) = Coord::on(level, self.column(x), row) else {
                        continue;
                    };
                    let color = if self.highlighted.contains(&position) {
                        HIGHLIGHTED
                    } else if (position.column() + position.row()) % 2 == 0 {
                        DARK
                    } else {
                        LIGHT
                    };
                    let letter = self.board.piece_at(position).map_or(' ', Piece::letter);
                    write!(f, "{color}{letter} {RESET}")?;
                }
                write!(f, "    ")?;
            }
            if let Some(line) = lines.next() {
                write!(f, "{line}")?;
            }
            writeln!(f)?;
        }
        for _ in LEVELS {
            write!(f, "  ")?;
            for x in 0..COLUMN_COUNT {
                let column = self.column(x);
                write!(f, "{} ", char::from(b'a' + column - 1))?;
            }
            write!(f, "    ")?;
        }
        if let Some(line) = lines.next() {
            write!(f, "{line}")?;
        }
        writeln!(f)?;
        for line in lines {
            writeln!(f, "{:90}{line}", "")?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use crate::{
        board_display::BoardDisplay, coord, layout::starting_position, side::Side,
    };

    #[test]
    fn renders_every_level() {
        let board = starting_position();
        let text = BoardDisplay {
            board: &board,
            view: Side::Gold,
            highlighted: &[coord!("2e3")],
            info: "gold plays",
        }
        .to_string();
        assert!(text.starts_with("  sky"));
        assert!(text.contains("underworld"));
        assert!(text.contains("gold plays"));
        assert_eq!(text.matches('K').count(), 1);
        assert_eq!(text.matches('W').count(), 12);
        let first_row = text.lines().nth(1).unwrap();
        assert!(first_row.starts_with("8 "));
    }
    #[test]
    fn scarlet_view_is_upside_down() {
        let board = starting_position();
        let text = BoardDisplay {
            board: &board,
            view: Side::Scarlet,
            highlighted: &[],
            info: "",
        }
        .to_string();
        assert!(text.lines().nth(1).unwrap().starts_with("1 "));
        assert!(text.lines().nth(9).unwrap().starts_with("  l k j"));
    }
}
