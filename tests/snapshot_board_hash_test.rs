use tile512::core::{Board, BoardSnapshot, GameConfig, SimpleRng};
use tile512::types::Direction;

fn fnv1a64_bytes(bytes: impl Iterator<Item = u8>) -> u64 {
    // FNV-1a 64-bit.
    let mut h: u64 = 0xcbf29ce484222325;
    for b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

fn fnv1a64_grid(values: &[u64]) -> u64 {
    fnv1a64_bytes(values.iter().flat_map(|v| v.to_le_bytes()))
}

#[test]
fn snapshot_into_sets_board_hash() {
    let mut board = Board::new(GameConfig::default(), SimpleRng::new(1)).unwrap();

    let mut snap = BoardSnapshot::default();
    board.snapshot_into(&mut snap);
    assert_eq!(snap.values.len(), 16);
    assert_eq!(snap.board_hash, fnv1a64_grid(&snap.values));

    board.play(Direction::Left);
    board.play(Direction::Down);

    board.snapshot_into(&mut snap);
    assert_eq!(snap.board_hash, fnv1a64_grid(&snap.values));
    assert_eq!(snap.moves_played, 2);
}

#[test]
fn ineffective_move_does_not_change_board_hash() {
    let mut board =
        Board::from_rows(&[[0, 0, 2], [0, 0, 4], [0, 0, 8]], GameConfig::default(), SimpleRng::new(1))
            .unwrap();

    let before = board.snapshot();
    assert!(!board.apply_move(Direction::Right).changed);
    let after = board.snapshot();

    assert_eq!(after.board_hash, before.board_hash);
    assert_ne!(after.moves_played, before.moves_played);
}

#[test]
fn snapshot_into_reuses_buffer_across_sizes() {
    let big = Board::new(GameConfig::default().with_size(6), SimpleRng::new(3)).unwrap();
    let small = Board::from_rows(&[[2, 0], [0, 0]], GameConfig::default(), SimpleRng::new(3)).unwrap();

    let mut snap = BoardSnapshot::default();
    big.snapshot_into(&mut snap);
    assert_eq!(snap.values.len(), 36);

    small.snapshot_into(&mut snap);
    assert_eq!(snap.size, 2);
    assert_eq!(snap.values, vec![2, 0, 0, 0]);
    assert_eq!(snap.tile_count, 1);
    assert_eq!(snap.board_hash, fnv1a64_grid(&snap.values));
}
