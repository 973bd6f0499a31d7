use heist_core::{
    Action, AlertMeter, CardinalDirection, GameState, GameStatus, GuardId, GuardSpec, GuardState,
    LevelDescriptor, Position, ToolError, ToolId, TurnError, TurnScheduler,
};

// ================================================================
// Fixtures
// ================================================================

/// Open 5x5 floor, player in the top-left corner, exit bottom-right.
fn open_floor(guard: Option<GuardSpec>) -> LevelDescriptor {
    let rows = [".....", ".....", ".....", ".....", "....E"];
    let descriptor = LevelDescriptor::from_rows(&rows, Position::new(0, 0), Position::new(4, 4))
        .expect("known glyphs");
    match guard {
        Some(guard) => descriptor.with_guard(guard),
        None => descriptor,
    }
}

/// A stationary guard three cells east of the player.
fn watcher() -> GuardSpec {
    GuardSpec::new(1, Position::new(3, 0), 4)
}

fn start(descriptor: LevelDescriptor) -> (TurnScheduler, GameState) {
    let scheduler = TurnScheduler::default();
    let state = scheduler.start_level(descriptor).expect("valid level");
    (scheduler, state)
}

// ================================================================
// Scenario A: direct sight triggers a chase on the same turn
// ================================================================

#[test]
fn guard_in_range_chases_on_first_turn() {
    let (scheduler, state) = start(open_floor(Some(watcher())));

    let next = scheduler.advance(&state, &Action::Wait, 7).expect("wait is always valid");

    let guard = next.guard(GuardId(1)).expect("guard exists");
    assert_eq!(guard.state, GuardState::Chase);
    assert_eq!(guard.position, Position::new(2, 0));
    assert!(next.player.is_visible);
    assert_eq!(next.status, GameStatus::Playing);
    assert_eq!(next.alert_level(), scheduler.config().chase_alert_increment);
}

// ================================================================
// Scenario B: smoke suppresses the sight check
// ================================================================

#[test]
fn smoke_before_sight_check_prevents_chase() {
    let (scheduler, state) = start(open_floor(Some(watcher())));

    let next = scheduler
        .advance(&state, &Action::tool(ToolId::Smokebomb), 7)
        .expect("smoke is ready");

    let guard = next.guard(GuardId(1)).expect("guard exists");
    assert_eq!(guard.state, GuardState::Patrol);
    assert_eq!(guard.position, Position::new(3, 0));
    assert!(next.player.in_smoke);
    assert!(!next.player.is_visible);
    assert_eq!(next.alert_level(), 0);
}

// ================================================================
// Scenario C: stepping onto the exit wins
// ================================================================

#[test]
fn stepping_onto_exit_wins() {
    let (scheduler, mut state) = start(open_floor(None));
    state.player.position = Position::new(3, 4);

    let next = scheduler
        .advance(&state, &Action::step(CardinalDirection::East), 0)
        .expect("exit is passable");

    assert_eq!(next.status, GameStatus::Won);
    assert_eq!(next.turn, 1);
    assert!(matches!(
        scheduler.advance(&next, &Action::Wait, 0),
        Err(TurnError::GameOver {
            status: GameStatus::Won
        })
    ));
}

// ================================================================
// Scenario D: a chase on a nearly full meter loses
// ================================================================

#[test]
fn chase_on_nearly_full_meter_loses() {
    let (scheduler, mut state) = start(open_floor(Some(watcher())));
    let maximum = scheduler.config().max_alert_meter;
    state.alert = AlertMeter::new(maximum).with_value(maximum - 1);

    let next = scheduler.advance(&state, &Action::Wait, 7).expect("wait is always valid");

    assert_eq!(next.alert_level(), maximum);
    assert_eq!(next.status, GameStatus::Lost);
    // The chasing guard freezes once the meter is full.
    assert_eq!(next.guards[0].state, GuardState::Alert);
}

// ================================================================
// Scenario E: an empty tool is rejected without touching the state
// ================================================================

#[test]
fn empty_tool_rejects_and_keeps_turn() {
    let (scheduler, mut state) = start(open_floor(Some(watcher())));
    if let Some(decoy) = state.player.tool_mut(ToolId::Decoy) {
        decoy.charges = 0;
    }
    let before = state.clone();

    let result = scheduler.advance(&state, &Action::tool(ToolId::Decoy), 3);

    assert_eq!(
        result,
        Err(TurnError::Tool(ToolError::NoCharges {
            tool: ToolId::Decoy
        }))
    );
    assert_eq!(state, before);
    assert_eq!(state.turn, 0);
}

// ================================================================
// Chase, loss of contact, and the return to patrol
// ================================================================

#[test]
fn broken_contact_decays_into_patrol() {
    let rows = [
        "#########",
        "#.......#",
        "#.#####.#",
        "#......E#",
        "#########",
    ];
    let descriptor = LevelDescriptor::from_rows(&rows, Position::new(1, 3), Position::new(7, 3))
        .expect("known glyphs")
        .with_guard(
            GuardSpec::new(1, Position::new(5, 1), 3)
                .with_patrol(vec![Position::new(5, 1), Position::new(7, 1)]),
        );
    let scheduler = TurnScheduler::default();
    let mut state = scheduler.start_level(descriptor).expect("valid level");
    state.guards[0].state = GuardState::Chase;
    state.guards[0].last_seen_player = Some(Position::new(3, 1));

    // The player is out of sight behind the wall row.
    state = scheduler.advance(&state, &Action::Wait, 0).expect("wait");
    assert_eq!(
        state.guards[0].state,
        GuardState::Investigate {
            target: Position::new(3, 1),
            countdown: scheduler.config().investigate_grace_turns,
        }
    );

    let grace = scheduler.config().investigate_grace_turns;
    for _ in 0..grace {
        state = scheduler.advance(&state, &Action::Wait, 0).expect("wait");
    }
    assert_eq!(state.guards[0].state.alert_countdown(), 0);

    state = scheduler.advance(&state, &Action::Wait, 0).expect("wait");
    assert_eq!(state.guards[0].state, GuardState::Patrol);
    assert_eq!(state.status, GameStatus::Playing);
}

// ================================================================
// Decoys pull patrolling guards off their route
// ================================================================

#[test]
fn decoy_baits_patrol_into_investigation() {
    let rows = [
        "###########",
        "#....#....#",
        "#....#....#",
        "#.........#",
        "#........E#",
        "###########",
    ];
    let descriptor = LevelDescriptor::from_rows(&rows, Position::new(1, 1), Position::new(9, 4))
        .expect("known glyphs")
        .with_guard(GuardSpec::new(1, Position::new(7, 2), 2));
    let scheduler = TurnScheduler::default();
    let state = scheduler.start_level(descriptor).expect("valid level");

    let next = scheduler
        .advance(&state, &Action::decoy_at(Position::new(4, 3)), 0)
        .expect("target is open and in reach");

    let guard = next.guard(GuardId(1)).expect("guard exists");
    assert_eq!(guard.state.investigate_target(), Some(Position::new(4, 3)));
    let target = Position::new(4, 3);
    assert!(guard.position.manhattan(target) < Position::new(7, 2).manhattan(target));
    assert!(!next.player.is_visible);
}
