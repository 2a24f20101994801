//! Property tests over whole-run behavior

use jump_smile::consts::*;
use jump_smile::sim::{
    Body, EventQueue, GamePhase, GameState, Platform, Player, Rect, TickInput, tick,
};
use jump_smile::theme::Tint;
use proptest::prelude::*;

fn tick_input() -> impl Strategy<Value = TickInput> {
    (-1i8..=1, any::<bool>(), prop::bool::weighted(0.02)).prop_map(
        |(move_axis, jump_pressed, pause_toggled)| TickInput {
            move_axis,
            jump_pressed,
            pause_toggled,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn jumps_and_health_stay_in_bounds(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        for input in &inputs {
            tick(&mut state, input, SIM_DT);
            prop_assert!(state.player.jumps_remaining <= state.player.max_jumps);
            prop_assert!(state.player.health <= MAX_HEALTH);
            prop_assert!(state.player.invincible_timer >= 0.0);
            prop_assert!(state.player.coyote_timer >= 0.0);
        }
    }

    #[test]
    fn boss_hp_never_increases(
        seed in any::<u64>(),
        stage_index in 0usize..TOTAL_STAGES,
        inputs in prop::collection::vec(tick_input(), 1..400),
    ) {
        let mut state = GameState::new(seed);
        state.stage.stage_index = stage_index;
        state.stage.enter_arena();
        let mut last_hp = 3 + stage_index as u32;

        for input in &inputs {
            tick(&mut state, input, SIM_DT);
            if state.stage.stage_index != stage_index || state.phase.is_terminal() {
                break;
            }
            let Some(boss) = state.stage.boss.as_ref() else { break };
            prop_assert!(boss.hp <= last_hp);
            prop_assert_eq!(boss.alive, boss.hp > 0);
            last_hp = boss.hp;
        }
    }

    #[test]
    fn same_seed_and_inputs_replay_identically(
        seed in any::<u64>(),
        inputs in prop::collection::vec(tick_input(), 1..300),
    ) {
        let mut a = GameState::new(seed);
        let mut b = GameState::new(seed);
        for input in &inputs {
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn landing_depends_only_on_penetration(depth in 1i32..60) {
        let platforms = [Platform::solid(Rect::new(0, 400, 400, 40), Tint::Ground)];
        let mut body = Body::new(Rect::new(100, 400 - 48 - 5, 48, 48));
        body.vel.y = (depth + 5) as f32;
        let contact = body.step_vertical(&platforms);
        if depth < CONTACT_THRESHOLD {
            prop_assert_eq!(contact.landed_on, Some(0));
            prop_assert_eq!(body.rect.bottom(), 400);
            prop_assert_eq!(body.vel.y, 0.0);
        } else {
            prop_assert_eq!(contact.landed_on, None);
            prop_assert_eq!(body.rect.bottom(), 400 + depth);
        }
    }

    #[test]
    fn exhausted_jump_is_a_no_op(vx in -5.0f32..5.0, vy in -20.0f32..20.0) {
        let mut player = Player::new(300, 100);
        player.jumps_remaining = 0;
        player.coyote_timer = 0.0;
        player.body.vel = glam::Vec2::new(vx, vy);
        let mut events = EventQueue::new();
        prop_assert!(!player.try_jump(&mut events));
        prop_assert_eq!(player.body.vel, glam::Vec2::new(vx, vy));
        prop_assert!(events.is_empty());
    }
}

#[test]
fn paused_run_stays_paused_without_toggle() {
    let mut state = GameState::new(1);
    let toggle = TickInput {
        pause_toggled: true,
        ..Default::default()
    };
    tick(&mut state, &toggle, SIM_DT);
    for _ in 0..100 {
        tick(&mut state, &TickInput::default(), SIM_DT);
    }
    assert_eq!(state.phase, GamePhase::Paused);
    assert_eq!(state.time_ticks, 0);
}
