//! Shared fixtures for the integration tests.

#![allow(dead_code)]

/// Tokens the move generator draws from: real opening moves plus junk.
const VOCAB: &[&str] = &[
    "e4", "d4", "c4", "Nf3", "f4", "b3", "g4", "e5", "c5", "e6", "c6", "d5", "d6", "Nf6",
    "g6", "b6", "Nc6", "Bb5", "Bb5+", "Bc4", "Nc3", "c3", "g3", "Bg2", "Bg7", "Bf4", "Bg5",
    "a6", "Bb4", "Bb4+", "dxc4", "f5", "O-O", "Qxd5#", "", "??",
];

/// Deterministic pseudo-random move lists (LCG), lengths 0..=24.
pub fn generated_games(count: usize) -> Vec<Vec<String>> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };

    (0..count)
        .map(|_| {
            let len = next() % 25;
            (0..len).map(|_| VOCAB[next() % VOCAB.len()].to_string()).collect()
        })
        .collect()
}

/// Real opening lines covering every branch of both perspectives.
pub const LINES: &[&[&str]] = &[
    &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7"],
    &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6", "d3", "d6"],
    &["e4", "e5", "Nf3", "Nc6", "d4", "exd4", "Nxd4", "Nf6"],
    &["e4", "e5", "Nf3", "Nc6", "Nc3", "Nf6", "Bb5", "Bb4"],
    &["e4", "e5", "Nf3", "Nf6", "Nxe5", "d6", "Nf3", "Nxe4"],
    &["e4", "e5", "Nf3", "d6", "d4", "exd4"],
    &["e4", "e5", "f4", "exf4", "Nf3", "g5"],
    &["e4", "e5", "Nc3", "Nf6", "f4", "d5"],
    &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "a6", "Be3", "e5"],
    &["e4", "c5", "Nf3", "d6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "g6", "Be3", "Bg7"],
    &["e4", "c5", "Nf3", "Nc6", "d4", "cxd4", "Nxd4", "Nf6", "Nc3", "e5", "Ndb5", "d6"],
    &["e4", "c5", "Nf3", "e6", "d4", "cxd4", "Nxd4", "Nc6", "Nc3", "Qc7"],
    &["e4", "c5", "c3", "Nf6", "e5", "Nd5"],
    &["e4", "c5", "Nc3", "Nc6", "g3", "g6", "Bg2", "Bg7"],
    &["e4", "e6", "d4", "d5", "Nc3", "Bb4", "e5", "c5"],
    &["e4", "c6", "d4", "d5", "e5", "Bf5"],
    &["e4", "d5", "exd5", "Qxd5", "Nc3", "Qa5"],
    &["e4", "Nf6", "e5", "Nd5", "d4", "d6"],
    &["e4", "d6", "d4", "Nf6", "Nc3", "g6", "Be3", "Bg7"],
    &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Be7"],
    &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3", "e6", "e3", "Nbd7"],
    &["d4", "d5", "c4", "dxc4", "Nf3", "Nf6", "e3", "e6"],
    &["d4", "Nf6", "c4", "e6", "g3", "d5", "Bg2", "Be7", "Nf3", "O-O"],
    &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4", "Qc2", "O-O"],
    &["d4", "Nf6", "c4", "e6", "Nf3", "b6", "g3", "Bb7"],
    &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6", "Nf3", "O-O"],
    &["d4", "Nf6", "c4", "g6", "Nc3", "d5", "cxd5", "Nxd5"],
    &["d4", "d5", "Bf4", "Nf6", "e3", "e6", "Nf3", "c5", "c3", "Nc6"],
    &["d4", "Nf6", "Bg5", "e6", "e4", "h6"],
    &["d4", "Nf6", "Nf3", "e6", "Bg5", "c5", "e3", "h6"],
    &["d4", "d5", "Nf3", "Nf6", "e3", "e6", "Bd3", "c5", "c3", "Nc6"],
    &["d4", "d5", "Nc3", "Nf6", "Bg5", "Nbd7"],
    &["d4", "d5", "e4", "dxe4", "Nc3", "Nf6", "f3", "exf3"],
    &["d4", "f5", "g3", "Nf6", "Bg2", "g6"],
    &["d4", "c5", "d5", "e5", "e4", "d6"],
    &["c4", "e5", "Nc3", "Nf6", "g3", "d5"],
    &["c4", "c5", "Nc3", "Nc6", "g3", "g6"],
    &["Nf3", "d5", "g3", "Nf6", "Bg2", "e6", "O-O", "Be7", "d3", "O-O"],
    &["Nf3", "Nf6", "c4", "g6"],
    &["f4", "d5", "Nf3", "g6"],
    &["b3", "e5", "Bb2", "Nc6"],
    &["g4", "d5", "Bg2", "Bxg4"],
    &["e3", "e5", "d4", "exd4"],
    &["a3", "g6"],
];

/// Pad a line with harmless knight shuffles up to `len` plies.
pub fn padded(line: &[&str], len: usize) -> Vec<String> {
    let shuffle = ["Na3", "Na6", "Nb1", "Nb8"];
    let mut moves: Vec<String> = line.iter().map(|m| m.to_string()).collect();
    let mut i = 0;
    while moves.len() < len {
        moves.push(shuffle[i % shuffle.len()].to_string());
        i += 1;
    }
    moves
}
