//! Integration tests for whole rounds: selections, ticks, events and restarts.

use recallflip::core::{Game, GameConfig, Presenter};
use recallflip::term::{BoardLayout, Control, Hit};
use recallflip::types::{CardId, CardState, Completion, CoreEvent, GameAction, Phase, TurnState};

#[derive(Default)]
struct Recorder {
    log: Vec<String>,
    cues: u32,
    completions: Vec<Completion>,
}

impl Presenter for Recorder {
    fn on_card_state_changed(&mut self, id: CardId, state: CardState) {
        self.log.push(format!("{}:{}", id.0, state.as_str()));
    }

    fn on_flip_cue(&mut self) {
        self.cues += 1;
    }

    fn on_round_started(&mut self) {
        self.log.push("started".into());
    }

    fn on_round_completed(&mut self, completion: Completion) {
        self.completions.push(completion);
    }

    fn on_round_reset(&mut self) {
        self.log.push("reset".into());
    }
}

fn abba() -> Game {
    Game::with_deck(GameConfig::default(), &[1, 2, 2, 1]).unwrap()
}

/// Plays the A B B A board: one mismatch, then both pairs.
#[test]
fn test_two_pair_round_end_to_end() {
    let mut game = abba();
    let mut rec = Recorder::default();

    // Mismatch: 0 (A) and 1 (B).
    game.select_card(CardId(0), 0);
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.session().total_games(), 1);
    game.select_card(CardId(1), 200);
    game.tick(999);
    assert!(game.is_input_locked());
    game.tick(1_000);
    assert_eq!(game.turn_state(), TurnState::Idle);
    assert_eq!(game.card_state(CardId(0)), Some(CardState::Hidden));
    assert_eq!(game.card_state(CardId(1)), Some(CardState::Hidden));

    // Match A.
    game.select_card(CardId(0), 1_100);
    game.select_card(CardId(3), 1_200);
    game.tick(2_000);
    assert_eq!(game.matched_pairs(), 1);

    // Match B, completing the round.
    game.select_card(CardId(1), 2_100);
    game.select_card(CardId(2), 2_200);
    game.tick(3_000);

    assert_eq!(game.phase(), Phase::Complete);
    assert_eq!(game.matched_pairs(), 2);
    assert_eq!(game.session().best_time_ms(), Some(3_000));
    assert_eq!(
        game.last_completion(),
        Some(Completion {
            duration_ms: 3_000,
            is_new_best: true
        })
    );

    let delivered = game.dispatch_events(&mut rec);
    assert!(delivered > 0);
    // six flips up, two flips back
    assert_eq!(rec.cues, 8);
    assert_eq!(rec.completions.len(), 1);
    assert_eq!(rec.log.first().map(String::as_str), Some("started"));
    assert!(rec.log.iter().any(|l| l == "3:matched"));
    assert_eq!(game.drain_events().count(), 0);
}

/// Match every pair in order, `pace_ms` between clicks. Returns the completion.
fn play_perfect(game: &mut Game, start_ms: u64, pace_ms: u64) -> Completion {
    let delay = game.config().resolve_delay_ms;
    let values: Vec<u8> = game.deck().values().collect();
    let mut now = start_ms;

    for v in 1..=game.n_pairs() {
        let mut ids = values
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x == v)
            .map(|(i, _)| CardId(i as u8));
        let (a, b) = (ids.next().unwrap(), ids.next().unwrap());

        game.select_card(a, now);
        now += pace_ms;
        game.select_card(b, now);
        now += delay;
        game.tick(now);
        now += pace_ms;
    }
    game.last_completion().unwrap()
}

#[test]
fn test_best_time_is_monotone_across_restarts() {
    let config = GameConfig::default()
        .with_pairs(2)
        .with_resolve_delay_ms(100)
        .with_seed(7);
    let mut game = Game::new(config);

    // duration = pairs * (2 * pace + delay) - pace
    let first = play_perfect(&mut game, 0, 100);
    assert_eq!(first.duration_ms, 500);
    assert!(first.is_new_best);

    game.restart();
    let slower = play_perfect(&mut game, 10_000, 300);
    assert_eq!(slower.duration_ms, 1_100);
    assert!(!slower.is_new_best);
    assert_eq!(game.session().best_time_ms(), Some(500));

    game.restart();
    let faster = play_perfect(&mut game, 20_000, 50);
    assert_eq!(faster.duration_ms, 350);
    assert!(faster.is_new_best);
    assert_eq!(game.session().best_time_ms(), Some(350));

    // A tie is not a new best.
    game.restart();
    let tie = play_perfect(&mut game, 30_000, 50);
    assert_eq!(tie.duration_ms, 350);
    assert!(!tie.is_new_best);

    assert_eq!(game.session().total_games(), 4);
}

#[test]
fn test_restart_resets_round_but_keeps_session() {
    let mut game = abba();
    play_perfect(&mut game, 0, 10);
    assert_eq!(game.phase(), Phase::Complete);

    game.restart();

    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.matched_pairs(), 0);
    assert_eq!(game.elapsed_ms(99_999), 0);
    assert_eq!(game.last_completion(), None);
    assert_eq!(game.session().total_games(), 1);
    assert!(game.session().best_time_ms().is_some());
    assert!(recallflip::core::deck::is_paired(
        &game.deck().values().collect::<Vec<_>>()
    ));
}

#[test]
fn test_restart_mid_resolution_never_resolves_old_pair() {
    let mut game = abba();
    game.select_card(CardId(0), 0);
    game.select_card(CardId(3), 100);
    game.drain_events().for_each(drop);

    assert!(game.apply_action(GameAction::Restart, 200));
    let events: Vec<CoreEvent> = game.drain_events().collect();
    assert_eq!(events, vec![CoreEvent::RoundReset]);

    // Start a new round and arm a fresh deadline before the old one would fire.
    let first = game.deck().cards()[0].value();
    let partner = game
        .deck()
        .cards()
        .iter()
        .skip(1)
        .find(|c| c.value() != first)
        .map(|c| c.id())
        .unwrap();
    game.select_card(CardId(0), 300);
    game.select_card(partner, 400);

    // Old deadline (900) passes: nothing happens.
    assert_eq!(game.tick(900), None);
    assert!(game.is_input_locked());
    assert_eq!(game.matched_pairs(), 0);

    // New deadline (1200) resolves the new, mismatched pair.
    assert!(game.tick(1_200).is_some());
    assert_eq!(game.matched_pairs(), 0);
    assert_eq!(game.card_state(CardId(0)), Some(CardState::Hidden));
}

#[test]
fn test_shutdown_cancels_pending_resolution() {
    let mut game = abba();
    game.select_card(CardId(0), 0);
    game.select_card(CardId(3), 10);

    game.shutdown();
    game.shutdown();

    assert!(!game.has_pending_resolution());
    assert_eq!(game.tick(5_000), None);
    assert_eq!(game.matched_pairs(), 0);
}

#[test]
fn test_pointer_flow_through_layout() {
    let mut game = abba();
    let layout = BoardLayout::compute(80, 24, game.config().columns, game.deck().len() as u8);

    let click = |layout: &BoardLayout, id: u8| {
        let r = layout.card_rect(CardId(id)).unwrap();
        layout.hit_test(r.x + 1, r.y + 1, false)
    };

    for (id, at) in [(0, 0), (3, 10)] {
        let Some(Hit::Card(card)) = click(&layout, id) else {
            panic!("card {id} not hit");
        };
        game.select_card(card, at);
    }
    game.tick(900);
    for (id, at) in [(1, 1_000), (2, 1_010)] {
        let Some(Hit::Card(card)) = click(&layout, id) else {
            panic!("card {id} not hit");
        };
        game.select_card(card, at);
    }
    game.tick(1_900);
    assert_eq!(game.phase(), Phase::Complete);

    let controls_visible = game.snapshot(2_000).controls_visible();
    assert!(controls_visible);
    let restart = layout.control_rect(Control::Restart);
    assert_eq!(
        layout.hit_test(restart.x + 2, restart.y + 1, controls_visible),
        Some(Hit::Control(Control::Restart))
    );
}
