use super::*;

// ==================== PERFT FIXTURES ====================
// Reference positions with published node counts

pub struct Fixture {
    pub rows: &'static str,
    pub side: Color,
    pub castling: &'static str,
    pub en_passant: Option<&'static str>,
}

impl Fixture {
    pub fn build(&self) -> Position {
        position_from_rows(self.rows, self.side, self.castling, self.en_passant)
    }
}

/// Position 2: castling, en passant, promotions
pub const KIWIPETE: Fixture = Fixture {
    rows: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
    side: Color::White,
    castling: "KQkq",
    en_passant: None,
};

/// Position 3: en passant pins in a sparse endgame
pub const POSITION_3: Fixture = Fixture {
    rows: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    side: Color::White,
    castling: "",
    en_passant: None,
};

/// Position 4: promotion captures and underpromotion
pub const POSITION_4: Fixture = Fixture {
    rows: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1",
    side: Color::White,
    castling: "kq",
    en_passant: None,
};

/// Position 5: immediate promotion with a discovered check
pub const POSITION_5: Fixture = Fixture {
    rows: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R",
    side: Color::White,
    castling: "KQ",
    en_passant: None,
};

mod starting_position;
mod kiwipete;
mod endgame;
mod complex_promotions;
mod middle_game;
