use ghostfleet::{AttackEvent, Board, GameError, Layout, Player};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// A 3x1 sea holds exactly one legal placement for a size-2 ship (vertical at
/// the origin: the last row and column are never placeable), so the fleet has
/// nowhere to dodge and turns play out deterministically.
fn pinned_player() -> Player {
    let layout = Layout::parse("3 x 1\nA 2 A a V 7").unwrap();
    Player::new("", Board::new(&layout).unwrap())
}

#[test]
fn test_empty_name_defaults_to_player() {
    let player = pinned_player();
    assert_eq!(player.name(), "Player");
}

#[test]
fn test_explicit_name_is_kept() {
    let layout = Layout::parse("3 x 1\nA 2 A a V 7").unwrap();
    let player = Player::new("Alex", Board::new(&layout).unwrap());
    assert_eq!(player.name(), "Alex");
}

#[test]
fn test_get_bomb_normalizes_case() {
    let player = pinned_player();
    let lower = player.get_bomb("ba").unwrap();
    let upper = player.get_bomb("BA").unwrap();
    let mixed = player.get_bomb("Ba").unwrap();
    assert_eq!(lower.cell(), (1, 0));
    assert_eq!(lower, upper);
    assert_eq!(lower, mixed);
}

#[test]
fn test_get_bomb_rejects_bad_strings() {
    let player = pinned_player();
    assert_eq!(player.get_bomb(""), Err(GameError::InvalidCoordinate));
    assert_eq!(player.get_bomb("B"), Err(GameError::InvalidCoordinate));
    assert_eq!(player.get_bomb("Baa"), Err(GameError::InvalidCoordinate));
    assert_eq!(player.get_bomb("9a"), Err(GameError::InvalidCoordinate));
}

#[test]
fn test_get_bomb_rejects_targets_off_the_board() {
    let player = pinned_player();
    // row D is past a 3-line board, column b past a 1-column board
    assert_eq!(player.get_bomb("Da"), Err(GameError::InvalidCoordinate));
    assert_eq!(player.get_bomb("Ab"), Err(GameError::InvalidCoordinate));
}

#[test]
fn test_full_game_against_pinned_ship() {
    let mut player = pinned_player();
    let mut rng = SmallRng::seed_from_u64(99);
    assert_eq!(player.ships_left(), 1);

    let aa = player.get_bomb("Aa").unwrap();
    let ba = player.get_bomb("Ba").unwrap();
    let ca = player.get_bomb("Ca").unwrap();

    // first hit damages the hull without sinking it
    assert_eq!(
        player.attack_board(&mut rng, &aa),
        AttackEvent::Hit {
            symbol: 'A',
            color: 7,
            destroyed: false,
        }
    );
    assert_eq!(player.ships_left(), 1);
    assert!(!player.is_fleet_destroyed());

    // same cell again: the fleet had nowhere to move, so it is a re-hit
    assert_eq!(player.attack_board(&mut rng, &aa), AttackEvent::Rehit);

    // the unplaceable last row is always open water
    assert_eq!(player.attack_board(&mut rng, &ca), AttackEvent::Missed);

    // second hull cell sinks the ship
    assert_eq!(
        player.attack_board(&mut rng, &ba),
        AttackEvent::Hit {
            symbol: 'A',
            color: 7,
            destroyed: true,
        }
    );
    assert_eq!(player.ships_left(), 0);
    assert!(player.is_fleet_destroyed());

    // the wreck was swept by the pre-attack move pass
    assert_eq!(player.attack_board(&mut rng, &aa), AttackEvent::Missed);
}

#[test]
fn test_time_elapsed_accumulates() {
    let mut player = pinned_player();
    assert_eq!(player.time_elapsed(), 0);
    player.add_time_elapsed(3);
    player.add_time_elapsed(5);
    assert_eq!(player.time_elapsed(), 8);
}

#[test]
fn test_show_board_reveals_ship_symbols() {
    let player = pinned_player();
    // one 'A' is the row label; the other two are the hull cells
    let revealed = player.show_board(true);
    assert_eq!(revealed.matches('A').count(), 3, "unexpected view:\n{revealed}");
    let hidden = player.show_board(false);
    assert_eq!(hidden.matches('A').count(), 1, "unexpected view:\n{hidden}");
}
