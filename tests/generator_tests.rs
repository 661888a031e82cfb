use armada::{
    generate_fleet, AutoPlacement, Board, FleetInventory, Orientation, Tier, AUTO_FLEET,
    BOARD_SIZE,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn occupied_cells(board: &Board) -> usize {
    let mut count = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if board.grid().is_occupied(row, col).unwrap() {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_auto_fleet_places_all_nine_ships() {
    let mut board = Board::with_fleet(FleetInventory::auto());
    let mut rng = SmallRng::seed_from_u64(42);

    let reports = generate_fleet(&mut board, &mut rng, &AUTO_FLEET);
    assert_eq!(reports.len(), AUTO_FLEET.len());
    assert!(reports.iter().all(|r| r.is_placed()));

    // disjoint footprints: occupied cell count equals the fleet's cell sum
    let total: usize = AUTO_FLEET.iter().map(|t| t.length()).sum();
    assert_eq!(occupied_cells(&board), total);

    // owner ids run 1..=9 in placement order
    let ids: Vec<u32> = board.ships().iter().map(|s| s.id()).collect();
    assert_eq!(ids, (1..=9).collect::<Vec<u32>>());

    // every ship cell carries its owner id
    for ship in board.ships() {
        for (row, col) in ship.cells() {
            assert_eq!(board.grid().get(row, col).unwrap().owner, ship.id());
        }
    }

    assert!(board.inventory_exhausted());
}

#[test]
fn test_generation_is_reproducible_under_a_seed() {
    let mut first = Board::with_fleet(FleetInventory::auto());
    let mut second = Board::with_fleet(FleetInventory::auto());
    let mut rng1 = SmallRng::seed_from_u64(7);
    let mut rng2 = SmallRng::seed_from_u64(7);

    let r1 = generate_fleet(&mut first, &mut rng1, &AUTO_FLEET);
    let r2 = generate_fleet(&mut second, &mut rng2, &AUTO_FLEET);
    assert_eq!(r1, r2);
    assert_eq!(*first.grid(), *second.grid());
}

#[test]
fn test_auto_fleet_succeeds_across_seeds() {
    for seed in 0..32 {
        let mut board = Board::with_fleet(FleetInventory::auto());
        let mut rng = SmallRng::seed_from_u64(seed);
        let reports = generate_fleet(&mut board, &mut rng, &AUTO_FLEET);
        assert!(
            reports.iter().all(|r| r.is_placed()),
            "seed {} left a ship unplaced",
            seed
        );
    }
}

/// Lattice of corvettes on rows 3 and 7 and columns 3 and 7: no free run of
/// four cells survives in either direction.
fn destroyer_proof_board() -> Board {
    let fleet = FleetInventory::new([
        (Tier::Corvette, 36),
        (Tier::Gunboat, 0),
        (Tier::Frigate, 0),
        (Tier::Destroyer, 0),
    ]);
    let mut board = Board::with_fleet(fleet);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if row % 4 == 3 || col % 4 == 3 {
                board
                    .place_ship(Tier::Corvette, Orientation::Horizontal, (row, col))
                    .unwrap();
            }
        }
    }
    board
}

#[test]
fn test_unplaceable_ship_is_skipped_not_fatal() {
    let mut board = destroyer_proof_board();
    let ships_before = board.ships().len();
    let mut rng = SmallRng::seed_from_u64(1);

    let reports = generate_fleet(&mut board, &mut rng, &[Tier::Destroyer]);
    assert_eq!(
        reports,
        vec![AutoPlacement::Skipped {
            tier: Tier::Destroyer
        }]
    );
    assert_eq!(board.ships().len(), ships_before);
}

#[test]
fn test_skip_does_not_abort_remaining_ships() {
    let mut board = destroyer_proof_board();
    let mut rng = SmallRng::seed_from_u64(1);

    let reports = generate_fleet(&mut board, &mut rng, &[Tier::Destroyer, Tier::Corvette]);
    assert_eq!(
        reports[0],
        AutoPlacement::Skipped {
            tier: Tier::Destroyer
        }
    );
    assert!(reports[1].is_placed(), "corvette should still place");
}
