use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create an empty board
pub fn empty_board() -> Position {
    Position::empty()
}

/// Parse a square name, panicking on bad input
pub fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

/// Helper function to place a piece
pub fn place_piece(pos: &mut Position, square: &str, piece: Piece) {
    pos.put(sq(square), piece);
}

/// Place a piece that counts as having moved (kings and rooks lose castling)
pub fn place_moved(pos: &mut Position, square: &str, color: Color, piece_type: Type) {
    pos.put(sq(square), Piece::moved(color, piece_type));
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

/// Count moves satisfying a predicate
pub fn count_moves(moves: &[Move], pred: impl Fn(&Move) -> bool) -> usize {
    moves.iter().filter(|m| pred(m)).count()
}

/// Both kings on squares where they cannot castle
pub fn kings_only(white: &str, black: &str) -> Position {
    let mut pos = empty_board();
    place_moved(&mut pos, white, Color::White, Type::King);
    place_moved(&mut pos, black, Color::Black, Type::King);
    pos
}

/// Build a position from eight rank rows, rank 8 first, separated by `/`.
/// Digits are runs of empty squares, letters are pieces (uppercase white).
///
/// Every king and rook starts out as moved; `castling` lists the corners
/// (`K`, `Q`, `k`, `q`) whose king and rook are reset to unmoved.
pub fn position_from_rows(rows: &str, side: Color, castling: &str, en_passant: Option<&str>) -> Position {
    let mut pos = empty_board();
    for (i, row) in rows.split('/').enumerate() {
        let rank = 7 - i as i32;
        let mut file = 0;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as i32;
                continue;
            }
            let piece = Piece::from_char(c).unwrap();
            let piece = if piece.piece_type.tracks_moved() {
                Piece::moved(piece.color, piece.piece_type)
            } else {
                piece
            };
            pos.put(Square::new(file, rank).unwrap(), piece);
            file += 1;
        }
        assert_eq!(file, 8, "row {:?} does not cover eight files", row);
    }

    for corner in castling.chars() {
        let (color, rook_square) = match corner {
            'K' => (Color::White, Square::H1),
            'Q' => (Color::White, Square::A1),
            'k' => (Color::Black, Square::H8),
            'q' => (Color::Black, Square::A8),
            _ => panic!("bad castling corner {:?}", corner),
        };
        let king_square = if color == Color::White { Square::E1 } else { Square::E8 };
        for square in [king_square, rook_square] {
            let piece = pos.piece_at(square).unwrap();
            pos.put(square, Piece::new(piece.color, piece.piece_type));
        }
    }

    pos.set_side_to_move(side);
    pos.set_en_passant(en_passant.map(sq));
    pos
}

/// Sorted coordinate strings, for comparing move sets
pub fn coordinates(moves: &[Move]) -> Vec<String> {
    let mut names: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    names.sort();
    names
}

// ==================== TEST MODULES ====================

mod pawn_movement;
mod perft;
