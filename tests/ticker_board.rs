use financeflow_wasm::domain::market_data::{
    BOARD_SIZE, Direction, RandomSource, TickerBoard, TickerSimulator,
};

struct FixedRandom(f64);

impl RandomSource for FixedRandom {
    fn unit(&mut self) -> f64 {
        self.0
    }
}

#[test]
fn seeded_board_matches_the_opening_quotes() {
    let board = TickerBoard::seeded();
    let entries = board.entries();
    assert_eq!(entries.len(), BOARD_SIZE);

    assert_eq!(entries[0].symbol.value(), "S&P 500");
    assert_eq!(entries[0].price.value(), 4285.32);
    assert_eq!(entries[0].change, 24.18);
    assert_eq!(entries[0].change_percent, 0.57);
    assert_eq!(entries[0].direction, Direction::Up);

    assert_eq!(entries[1].symbol.value(), "NASDAQ");
    assert_eq!(entries[1].change, -18.45);
    assert_eq!(entries[1].direction, Direction::Down);

    assert_eq!(entries[2].symbol.value(), "DOW");
    assert_eq!(entries[2].price.value(), 33875.23);

    assert_eq!(entries[3].symbol.value(), "BITCOIN");
    assert_eq!(entries[3].price.value(), 43250.18);
    assert_eq!(entries[3].change_percent, 2.87);
}

#[test]
fn ticks_never_change_the_symbol_set() {
    let mut board = TickerBoard::seeded();
    let before: Vec<String> = board
        .entries()
        .iter()
        .map(|e| e.symbol.value().to_string())
        .collect();

    let mut rng = FixedRandom(0.42);
    for _ in 0..100 {
        TickerSimulator::new().advance(&mut board, &mut rng);
    }

    let after: Vec<String> = board
        .entries()
        .iter()
        .map(|e| e.symbol.value().to_string())
        .collect();
    assert_eq!(before, after);
}

#[test]
fn every_entry_moves_by_the_drawn_step() {
    let mut board = TickerBoard::seeded();
    let opening: Vec<f64> = board.entries().iter().map(|e| e.price.value()).collect();

    // (0.9 - 0.5) * 5.0 = +2.0 on every entry.
    let mut rng = FixedRandom(0.9);
    TickerSimulator::new().advance(&mut board, &mut rng);

    for (entry, before) in board.entries().iter().zip(opening) {
        assert!((entry.price.value() - (before + 2.0)).abs() < 1e-9);
    }
}
