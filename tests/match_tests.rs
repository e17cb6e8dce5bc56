use std::cell::RefCell;
use std::rc::Rc;

use salvo::{
    Agent, Board, Cell, Direction, Match, MatchConfig, MatchError, RandomAgent, Side, TurnState,
    BOARD_SIZE, FLEET,
};

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Landed(usize, usize, bool),
    Repeat(usize, usize),
    SawShip,
}

/// Agent with a fixed board and a fixed list of targets. Once the list runs
/// out it keeps firing at the last entry.
struct Scripted {
    name: &'static str,
    board: Board,
    targets: Vec<(usize, usize)>,
    next: usize,
    events: Rc<RefCell<Vec<Event>>>,
}

impl Scripted {
    fn new(name: &'static str, board: Board, targets: Vec<(usize, usize)>) -> (Self, Rc<RefCell<Vec<Event>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let agent = Scripted {
            name,
            board,
            targets,
            next: 0,
            events: Rc::clone(&events),
        };
        (agent, events)
    }
}

impl Agent for Scripted {
    fn initialize_board(&mut self) -> anyhow::Result<Board> {
        Ok(self.board)
    }

    fn choose_shot(&mut self, _own: &Board, opponent: &Board) -> anyhow::Result<(usize, usize)> {
        let exposed = ship_positions(opponent)
            .into_iter()
            .any(|(r, c)| opponent.cell(r, c).unwrap() == Cell::Ship);
        if exposed {
            self.events.borrow_mut().push(Event::SawShip);
        }
        let idx = self.next.min(self.targets.len() - 1);
        self.next += 1;
        Ok(self.targets[idx])
    }

    fn report_result(&mut self, row: usize, col: usize, hit: bool) {
        self.events.borrow_mut().push(Event::Landed(row, col, hit));
    }

    fn report_repeat(&mut self, row: usize, col: usize) {
        self.events.borrow_mut().push(Event::Repeat(row, col));
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Fleet laid out along even rows starting in column A.
fn fleet_board() -> Board {
    let mut board = Board::new();
    for (i, ship) in FLEET.iter().enumerate() {
        assert!(board.place_ship(ship.length(), i * 2, 0, Direction::Right));
    }
    board
}

fn ship_positions(board: &Board) -> Vec<(usize, usize)> {
    (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| board.cell(r, c).unwrap().has_ship())
        .collect()
}

/// Cells on odd rows, all open water on `fleet_board`.
fn water() -> Vec<(usize, usize)> {
    (0..BOARD_SIZE)
        .filter(|r| r % 2 == 1)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .collect()
}

fn landed(events: &Rc<RefCell<Vec<Event>>>) -> usize {
    events
        .borrow()
        .iter()
        .filter(|e| matches!(e, Event::Landed(..)))
        .count()
}

#[test]
fn test_side_a_wins_and_b_gets_no_revenge_shot() {
    let (a, a_events) = Scripted::new("Alice", fleet_board(), ship_positions(&fleet_board()));
    let (b, b_events) = Scripted::new("Bob", fleet_board(), water());
    let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();
    assert_eq!(game.state(), TurnState::AwaitingSideAShot);

    let outcome = game.run().unwrap();
    assert_eq!(outcome.winner, Side::A);
    assert_eq!(outcome.winner_name, "Alice");
    assert_eq!(outcome.shots_a, 17);
    assert_eq!(outcome.shots_b, 16);
    assert_eq!(game.state(), TurnState::SideAWon);
    assert_eq!(game.board(Side::B).alive_count(), 0);
    assert_eq!(game.board(Side::A).alive_count(), 17);

    assert_eq!(landed(&a_events), 17);
    assert_eq!(landed(&b_events), 16);
    assert!(a_events
        .borrow()
        .iter()
        .all(|e| matches!(e, Event::Landed(_, _, true))));
}

#[test]
fn test_side_b_wins_after_equal_shots() {
    let (a, _) = Scripted::new("Alice", fleet_board(), water());
    let (b, _) = Scripted::new("Bob", fleet_board(), ship_positions(&fleet_board()));
    let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();

    let outcome = game.run().unwrap();
    assert_eq!(outcome.winner, Side::B);
    assert_eq!(outcome.winner_name, "Bob");
    assert_eq!(outcome.shots_a, 17);
    assert_eq!(outcome.shots_b, 17);
    assert_eq!(game.state(), TurnState::SideBWon);
}

#[test]
fn test_last_ship_cell_ends_match_immediately() {
    let mut board_b = fleet_board();
    let cells = ship_positions(&board_b);
    let (last, rest) = cells.split_last().unwrap();
    for &(r, c) in rest {
        board_b.shoot(r, c).unwrap();
    }
    assert_eq!(board_b.alive_count(), 1);

    let (a, _) = Scripted::new("Alice", fleet_board(), vec![*last]);
    let (b, b_events) = Scripted::new("Bob", board_b, water());
    let mut game =
        Match::from_boards(Box::new(a), fleet_board(), Box::new(b), board_b, MatchConfig::default())
            .unwrap();

    assert!(!game.state().is_terminal());
    assert_eq!(game.step().unwrap(), TurnState::SideAWon);
    assert!(game.state().is_terminal());
    assert_eq!(game.state().to_move(), None);
    assert_eq!(game.shots(Side::A), 1);
    assert_eq!(game.shots(Side::B), 0);
    assert!(b_events.borrow().is_empty());
    assert!(matches!(game.step(), Err(MatchError::AlreadyFinished)));
}

#[test]
fn test_turns_alternate() {
    let (a, _) = Scripted::new("Alice", fleet_board(), water());
    let (b, _) = Scripted::new("Bob", fleet_board(), water());
    let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();

    assert_eq!(game.step().unwrap(), TurnState::AwaitingSideBShot);
    assert_eq!(game.step().unwrap(), TurnState::AwaitingSideAShot);
    assert_eq!(game.step().unwrap(), TurnState::AwaitingSideBShot);
    assert!(!game.state().is_terminal());
    assert_eq!(game.state().to_move(), Some(Side::B));
    assert_eq!(game.shots(Side::A), 2);
    assert_eq!(game.shots(Side::B), 1);
    assert_eq!(game.board(Side::B).cell(1, 1).unwrap(), Cell::Miss);
}

#[test]
fn test_repeat_shot_is_retried_without_counting() {
    // second turn repeats (1,0) twice before landing on (1,1)
    let (a, a_events) = Scripted::new("Alice", fleet_board(), vec![(1, 0), (1, 0), (1, 0), (1, 1)]);
    let (b, _) = Scripted::new("Bob", fleet_board(), water());
    let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();

    game.step().unwrap();
    game.step().unwrap();
    let before = *game.board(Side::B);
    assert_eq!(game.step().unwrap(), TurnState::AwaitingSideBShot);

    assert_eq!(game.shots(Side::A), 2);
    assert_eq!(game.board(Side::B).unshot_count(), before.unshot_count() - 1);
    assert_eq!(
        *a_events.borrow(),
        vec![
            Event::Landed(1, 0, false),
            Event::Repeat(1, 0),
            Event::Repeat(1, 0),
            Event::Landed(1, 1, false),
        ]
    );
}

#[test]
fn test_repeat_limit_stops_stuck_agent() {
    let (a, _) = Scripted::new("Alice", fleet_board(), vec![(9, 9)]);
    let (b, _) = Scripted::new("Bob", fleet_board(), water());
    let config = MatchConfig {
        max_repeat_shots: Some(3),
    };
    let a: Box<dyn Agent> = Box::new(a);
    let b: Box<dyn Agent> = Box::new(b);
    let mut game = Match::with_config(a, b, config).unwrap();

    game.step().unwrap();
    game.step().unwrap();
    match game.step() {
        Err(MatchError::RepeatLimit { side, attempts }) => {
            assert_eq!(side, Side::A);
            assert_eq!(attempts, 4);
        }
        other => panic!("expected repeat limit, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_repeat_limit_allows_configured_repeats() {
    let (a, a_events) = Scripted::new("Alice", fleet_board(), vec![(1, 0), (1, 0), (1, 1)]);
    let (b, _) = Scripted::new("Bob", fleet_board(), water());
    let config = MatchConfig {
        max_repeat_shots: Some(1),
    };
    let mut game = Match::with_config(Box::new(a), Box::new(b), config).unwrap();

    game.step().unwrap();
    game.step().unwrap();
    assert_eq!(game.step().unwrap(), TurnState::AwaitingSideBShot);
    assert_eq!(game.shots(Side::A), 2);
    assert_eq!(
        a_events.borrow().last(),
        Some(&Event::Landed(1, 1, false))
    );
    assert_eq!(game.board(Side::B).cell(1, 1).unwrap(), Cell::Miss);
}

#[test]
fn test_random_agent_on_exhausted_board() {
    let mut board_b = fleet_board();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            board_b.shoot(r, c).unwrap();
        }
    }
    let (b, _) = Scripted::new("Bob", board_b, water());
    let mut game = Match::from_boards(
        Box::new(RandomAgent::from_seed(5)),
        fleet_board(),
        Box::new(b),
        board_b,
        MatchConfig::default(),
    )
    .unwrap();
    assert!(matches!(
        game.step(),
        Err(MatchError::ExhaustedBoard { side: Side::A })
    ));
    assert_eq!(game.shots(Side::A), 0);
}

#[test]
fn test_exhausted_board_is_reported() {
    let mut board_b = fleet_board();
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            board_b.shoot(r, c).unwrap();
        }
    }
    let (a, _) = Scripted::new("Alice", fleet_board(), vec![(0, 0)]);
    let (b, _) = Scripted::new("Bob", board_b, water());
    let config = MatchConfig {
        max_repeat_shots: None,
    };
    let mut game = Match::from_boards(Box::new(a), fleet_board(), Box::new(b), board_b, config).unwrap();
    assert!(matches!(
        game.step(),
        Err(MatchError::ExhaustedBoard { side: Side::A })
    ));
}

#[test]
fn test_out_of_bounds_target_is_rejected() {
    let (a, _) = Scripted::new("Alice", fleet_board(), vec![(3, 10)]);
    let (b, _) = Scripted::new("Bob", fleet_board(), water());
    let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();
    assert!(matches!(
        game.step(),
        Err(MatchError::InvalidTarget { side: Side::A, row: 3, col: 10 })
    ));
    assert_eq!(game.board(Side::B).unshot_count(), 100);
}

#[test]
fn test_incomplete_fleet_is_rejected() {
    let mut partial = Board::new();
    assert!(partial.place_ship(5, 0, 0, Direction::Right));
    let (a, _) = Scripted::new("Alice", fleet_board(), water());
    let (b, _) = Scripted::new("Bob", partial, water());
    match Match::new(Box::new(a), Box::new(b)) {
        Err(MatchError::IncompleteFleet { side, ship_cells }) => {
            assert_eq!(side, Side::B);
            assert_eq!(ship_cells, 5);
        }
        _ => panic!("expected incomplete fleet"),
    }
}

#[test]
fn test_agents_only_see_masked_boards() {
    let (a, a_events) = Scripted::new("Alice", fleet_board(), water());
    let (b, b_events) = Scripted::new("Bob", fleet_board(), ship_positions(&fleet_board()));
    let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();
    game.run().unwrap();
    assert!(!a_events.borrow().contains(&Event::SawShip));
    assert!(!b_events.borrow().contains(&Event::SawShip));
}

#[test]
fn test_seeded_random_match_is_reproducible() {
    let play = |seed: u64| {
        let a = RandomAgent::from_seed(seed).with_name("A");
        let b = RandomAgent::from_seed(seed + 1).with_name("B");
        let mut game = Match::new(Box::new(a), Box::new(b)).unwrap();
        let outcome = game.run().unwrap();
        let loser = outcome.winner.opponent();
        assert_eq!(game.board(loser).alive_count(), 0);
        assert!(game.board(outcome.winner).alive_count() > 0);
        outcome
    };
    for seed in [1u64, 42, 1234] {
        let first = play(seed);
        let second = play(seed);
        assert_eq!(first, second);
        assert!(first.shots_a >= 17 || first.shots_b >= 17);
        assert!(first.shots_a <= 100 && first.shots_b <= 100);
        match first.winner {
            Side::A => assert_eq!(first.shots_a, first.shots_b + 1),
            Side::B => assert_eq!(first.shots_a, first.shots_b),
        }
    }
}
