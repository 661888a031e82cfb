use armada::{
    generate_fleet, Ability, AbilityInventory, AbilityKind, ActionResult, Board, CellState,
    FleetInventory, GameEngine, Orientation, ShotOutcome, Tier, AUTO_FLEET, BOARD_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn ownership_invariant(board: &Board) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let cell = board.grid().get(row, col).unwrap();
            let owned = cell.owner != 0;
            let ship_state = matches!(cell.state, CellState::ShipPlaced | CellState::ShipAttacked);
            if owned != ship_state {
                return false;
            }
        }
    }
    true
}

fn generated_board(seed: u64) -> Board {
    let mut board = Board::with_fleet(FleetInventory::auto());
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_fleet(&mut board, &mut rng, &AUTO_FLEET);
    board
}

fn unbounded_attacker() -> GameEngine {
    GameEngine::with_parts(
        Board::new(),
        AbilityInventory::new([
            (AbilityKind::Bomb, 255),
            (AbilityKind::Scan, 255),
            (AbilityKind::LineAssault, 255),
        ]),
    )
}

fn random_ability<R: Rng>(rng: &mut R) -> Ability {
    let row = rng.random_range(0..BOARD_SIZE);
    let col = rng.random_range(0..BOARD_SIZE);
    match rng.random_range(0..3) {
        0 => Ability::Bomb { row, col },
        1 => Ability::Scan {
            row,
            col,
            difficulty: rng.random_range(-1..6),
        },
        _ => Ability::LineAssault { row, col },
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ownership_invariant_survives_any_command_sequence(seed in any::<u64>(), shots in 0usize..40) {
        let mut board = generated_board(seed);
        prop_assert!(ownership_invariant(&board));

        let mut attacker = unbounded_attacker();
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
        for _ in 0..shots {
            attacker.attack(&mut board, random_ability(&mut rng)).unwrap();
            prop_assert!(ownership_invariant(&board));
        }
    }

    #[test]
    fn attacked_cells_never_revert(seed in any::<u64>(), shots in 1usize..40) {
        let mut board = generated_board(seed);
        let mut attacker = unbounded_attacker();
        let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(2));

        let mut terminal = [[None::<CellState>; BOARD_SIZE]; BOARD_SIZE];
        for _ in 0..shots {
            attacker.attack(&mut board, random_ability(&mut rng)).unwrap();
            for (row, slots) in terminal.iter_mut().enumerate() {
                for (col, slot) in slots.iter_mut().enumerate() {
                    let state = board.grid().get(row, col).unwrap().state;
                    match *slot {
                        Some(frozen) => prop_assert_eq!(frozen, state),
                        None => {
                            if matches!(state, CellState::SpaceAttacked | CellState::ShipAttacked) {
                                *slot = Some(state);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_bomb_is_idempotent(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut board = generated_board(seed);
        let mut attacker = unbounded_attacker();

        attacker.attack(&mut board, Ability::Bomb { row, col }).unwrap();
        let snapshot = *board.grid();

        let second = attacker.attack(&mut board, Ability::Bomb { row, col }).unwrap();
        let third = attacker.attack(&mut board, Ability::Bomb { row, col }).unwrap();
        match &second {
            ActionResult::Bomb { outcome, changed, .. } => {
                prop_assert_eq!(*outcome, ShotOutcome::Repeat);
                prop_assert!(changed.is_empty());
            }
            other => prop_assert!(false, "unexpected result {:?}", other),
        }
        prop_assert_eq!(second, third);
        prop_assert_eq!(*board.grid(), snapshot);
    }

    #[test]
    fn rejected_placement_mutates_nothing(
        length in 1usize..=4,
        vertical in any::<bool>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        // fixed ships leave room for both accepted and rejected candidates;
        // the destroyer is already spent, so TierExhausted is reachable too
        let mut board = Board::new();
        board.place_ship(Tier::Frigate, Orientation::Horizontal, (2, 2)).unwrap();
        board.place_ship(Tier::Destroyer, Orientation::Vertical, (4, 7)).unwrap();
        board.place_ship(Tier::Gunboat, Orientation::Vertical, (6, 1)).unwrap();
        let tier = Tier::from_length(length).unwrap();
        let orientation = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
        let snapshot = *board.grid();
        let counts_before: Vec<u8> = Tier::ALL.iter().map(|&t| board.remaining(t)).collect();
        let ships_before = board.ships().len();

        match board.place_ship(tier, orientation, (row, col)) {
            Ok(_) => {
                // a successful placement consumes exactly one of its tier
                let counts_after: Vec<u8> = Tier::ALL.iter().map(|&t| board.remaining(t)).collect();
                for (&t, (&before, &after)) in
                    Tier::ALL.iter().zip(counts_before.iter().zip(counts_after.iter()))
                {
                    let expected = if t == tier { before - 1 } else { before };
                    prop_assert_eq!(after, expected);
                }
                prop_assert_eq!(board.ships().len(), ships_before + 1);
            }
            Err(_) => {
                let counts_after: Vec<u8> = Tier::ALL.iter().map(|&t| board.remaining(t)).collect();
                prop_assert_eq!(*board.grid(), snapshot);
                prop_assert_eq!(counts_after, counts_before);
                prop_assert_eq!(board.ships().len(), ships_before);
            }
        }
    }

    #[test]
    fn scan_never_mutates(seed in any::<u64>(), row in 0..BOARD_SIZE, col in 0..BOARD_SIZE, difficulty in -3i32..8) {
        let mut board = generated_board(seed);
        let mut attacker = unbounded_attacker();
        let snapshot = *board.grid();

        let result = attacker
            .attack(&mut board, Ability::Scan { row, col, difficulty })
            .unwrap();
        prop_assert!(matches!(result, ActionResult::Scan { .. }), "expected Scan result");
        prop_assert_eq!(*board.grid(), snapshot);
    }
}
