//! FEN (Forsyth-Edwards Notation) parsing and serialization.

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color, Piece};
use crate::square::Square;

impl Board {
    /// Loads a FEN string into this board, replacing all existing state.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut fields = fen.split_whitespace();

        let placement = fields.next().ok_or("FEN missing piece placement field")?;
        let active = fields.next().unwrap_or("w");
        let castling = fields.next().unwrap_or("-");
        let ep = fields.next().unwrap_or("-");
        let halfmove = fields.next().unwrap_or("0");
        let fullmove = fields.next().unwrap_or("1");

        let mut accum = [[0u64; 6]; 2];

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!(
                "FEN piece placement must have 8 ranks, found {}",
                ranks.len()
            ));
        }

        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else {
                    let (piece, color) = CHAR_TO_PC[c as usize]
                        .ok_or_else(|| format!("invalid FEN piece glyph '{}'", c))?;
                    if file >= 8 {
                        return Err(format!("FEN rank '{}' overflows 8 files", rank_str));
                    }
                    let sq = Square::make(file, rank);
                    accum[color as usize][piece as usize] |= 1u64 << sq.index();
                    file += 1;
                }
            }
            if file != 8 {
                return Err(format!(
                    "FEN rank '{}' does not fill exactly 8 files",
                    rank_str
                ));
            }
        }

        *self = Board::new_empty();
        for &color in &[Color::White, Color::Black] {
            for &piece in &[
                Piece::Pawn,
                Piece::Knight,
                Piece::Bishop,
                Piece::Rook,
                Piece::Queen,
                Piece::King,
            ] {
                let mask = accum[color as usize][piece as usize];
                if mask != 0 {
                    self.set_bb(color, piece, mask);
                }
            }
        }

        self.side_to_move = match active {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(format!("invalid FEN active color '{}'", other)),
        };

        let mut rights = 0u8;
        if castling != "-" {
            for c in castling.chars() {
                rights |= match c {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    other => return Err(format!("invalid FEN castling glyph '{}'", other)),
                };
            }
        }
        self.castling_rights = rights;

        self.en_passant = if ep == "-" {
            None
        } else {
            Some(parse_square(ep)?)
        };

        self.halfmove_clock = halfmove
            .parse()
            .map_err(|_| format!("invalid FEN halfmove clock '{}'", halfmove))?;
        self.fullmove_number = fullmove
            .parse()
            .map_err(|_| format!("invalid FEN fullmove number '{}'", fullmove))?;

        self.history.clear();
        self.refresh_zobrist();

        Ok(())
    }

    /// Serializes the current position to a FEN string.
    pub fn to_fen(&self) -> String {
        let mut out = String::new();

        for rank in (0..8u8).rev() {
            let mut empty_run = 0u8;
            for file in 0..8u8 {
                let sq = Square::make(file, rank);
                match self.piece_at(sq) {
                    None => empty_run += 1,
                    Some((color, piece)) => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        let idx = (color as usize) * 6 + (piece as usize);
                        out.push(PC_TO_CHAR[idx]);
                    }
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
            if rank != 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        if self.castling_rights == 0 {
            out.push('-');
        } else {
            if self.has_kingside_castle(Color::White) {
                out.push('K');
            }
            if self.has_queenside_castle(Color::White) {
                out.push('Q');
            }
            if self.has_kingside_castle(Color::Black) {
                out.push('k');
            }
            if self.has_queenside_castle(Color::Black) {
                out.push('q');
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push(' ');
        out.push_str(&self.halfmove_clock.to_string());
        out.push(' ');
        out.push_str(&self.fullmove_number.to_string());

        out
    }
}

fn parse_square(s: &str) -> Result<Square, String> {
    let mut chars = s.chars();
    let file_c = chars.next().ok_or("empty square string")?;
    let rank_c = chars.next().ok_or("square string missing rank")?;
    if chars.next().is_some() {
        return Err(format!("square string '{}' too long", s));
    }
    if !('a'..='h').contains(&file_c) {
        return Err(format!("invalid file '{}'", file_c));
    }
    let rank_digit = rank_c
        .to_digit(10)
        .ok_or_else(|| format!("invalid rank '{}'", rank_c))?;
    if !(1..=8).contains(&rank_digit) {
        return Err(format!("rank out of range '{}'", rank_c));
    }
    let file = file_c as u8 - b'a';
    let rank = rank_digit as u8 - 1;
    Ok(Square::make(file, rank))
}
