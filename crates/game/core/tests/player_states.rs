use glam::{Vec2, Vec3};
use horror_core::motion::MotionProfile;
use horror_core::oracle::{InputActions, InputSnapshot, PhysicsSnapshot};
use horror_core::player::{
    HidingData, LadderData, LookLimits, MinMax, PlayerContext, PlayerEvent, PlayerStateKey,
    PlayerStateMachine, PushingData, StateData, ZiplineData,
};

const DT: f32 = 1.0 / 60.0;

fn started() -> (PlayerStateMachine, PlayerContext) {
    let mut machine =
        PlayerStateMachine::new(PlayerStateKey::Idle).expect("player states are unique");
    let mut ctx = PlayerContext::default();
    machine.start(&mut ctx).expect("idle has no entry requirements");
    ctx.drain_events();
    (machine, ctx)
}

fn frame(ctx: &mut PlayerContext, input: InputSnapshot) {
    ctx.begin_frame(input, PhysicsSnapshot::default(), DT);
}

fn scripted_requests() -> Vec<(PlayerStateKey, StateData)> {
    vec![
        (
            PlayerStateKey::Ladder,
            StateData::Ladder(LadderData {
                bottom: Vec3::ZERO,
                top: Vec3::new(0.0, 3.0, 0.0),
                exit: Vec3::new(0.0, 3.0, 1.0),
            }),
        ),
        (
            PlayerStateKey::Pushing,
            StateData::Pushing(PushingData {
                object: Vec3::new(0.0, 0.0, 1.0),
                direction: Vec3::Z,
                radius: 0.5,
            }),
        ),
        (
            PlayerStateKey::Zipline,
            StateData::Zipline(ZiplineData {
                start: Vec3::new(0.0, 5.0, 0.0),
                end: Vec3::new(10.0, 2.0, 0.0),
            }),
        ),
        (
            PlayerStateKey::Hiding,
            StateData::Hiding(HidingData {
                spot: Vec3::new(3.0, 0.0, 3.0),
                look_limits: LookLimits {
                    pitch: MinMax::new(-10.0, 10.0),
                    yaw: MinMax::new(-45.0, 45.0),
                },
            }),
        ),
    ]
}

#[test]
fn enter_exit_round_trip_restores_shared_settings() {
    for (key, data) in scripted_requests() {
        let (mut machine, mut ctx) = started();
        let before = (ctx.settings, ctx.disabled);

        machine
            .request(key, Some(data), &mut ctx)
            .unwrap_or_else(|err| panic!("entering {key} failed: {err}"));
        assert!(machine.is_in(key));
        assert!(!ctx.settings.items_usable, "{key} should block items");

        machine
            .request(PlayerStateKey::Idle, None, &mut ctx)
            .expect("idle is always reachable");
        assert_eq!((ctx.settings, ctx.disabled), before, "{key} leaked settings");
    }
}

#[test]
fn exit_runs_before_enter() {
    let (mut machine, mut ctx) = started();
    let (key, data) = scripted_requests().remove(0);
    machine.request(key, Some(data), &mut ctx).expect("ladder data is valid");

    assert_eq!(
        ctx.drain_events(),
        [
            PlayerEvent::StateExited(PlayerStateKey::Idle),
            PlayerEvent::StateEntered(PlayerStateKey::Ladder),
        ]
    );
    assert_eq!(machine.previous(), Some(PlayerStateKey::Idle));
    assert_eq!(ctx.motion_profile(), MotionProfile::Ladder);
}

#[test]
fn ladder_climb_to_top_and_dismount() {
    let (mut machine, mut ctx) = started();
    ctx.position = Vec3::new(0.0, 0.0, -0.5);
    let (key, data) = scripted_requests().remove(0);
    machine.request(key, Some(data), &mut ctx).expect("ladder data is valid");

    let climb = InputSnapshot {
        move_axis: Vec2::Y,
        ..InputSnapshot::default()
    };
    for _ in 0..600 {
        frame(&mut ctx, climb);
        machine.tick(&mut ctx).expect("machine is started");
        if machine.is_in(PlayerStateKey::Idle) {
            break;
        }
    }

    assert!(machine.is_in(PlayerStateKey::Idle));
    assert!(ctx.position.distance(Vec3::new(0.0, 3.0, 1.0)) <= ctx.config.arrive_distance);
}

#[test]
fn zipline_rides_to_the_end() {
    let (mut machine, mut ctx) = started();
    let (key, data) = scripted_requests().remove(2);
    machine.request(key, Some(data), &mut ctx).expect("zipline data is valid");
    assert_eq!(ctx.position, Vec3::new(0.0, 5.0, 0.0));

    let mut frames = 0;
    while machine.is_in(PlayerStateKey::Zipline) && frames < 1_000 {
        frame(&mut ctx, InputSnapshot::default());
        machine.tick(&mut ctx).expect("machine is started");
        frames += 1;
    }

    assert!(machine.is_in(PlayerStateKey::Idle));
    assert!(ctx.position.distance(Vec3::new(10.0, 2.0, 0.0)) <= ctx.config.arrive_distance);
}

#[test]
fn pushing_moves_player_and_releases_on_use() {
    let (mut machine, mut ctx) = started();
    let (key, data) = scripted_requests().remove(1);
    machine.request(key, Some(data), &mut ctx).expect("pushing data is valid");

    let push = InputSnapshot {
        move_axis: Vec2::Y,
        ..InputSnapshot::default()
    };
    for _ in 0..60 {
        frame(&mut ctx, push);
        machine.tick(&mut ctx).expect("machine is started");
    }
    assert!(ctx.position.z > 0.5);

    frame(
        &mut ctx,
        InputSnapshot {
            pressed: InputActions::USE,
            ..InputSnapshot::default()
        },
    );
    machine.tick(&mut ctx).expect("machine is started");
    frame(&mut ctx, InputSnapshot::default());
    machine.tick(&mut ctx).expect("machine is started");
    assert!(machine.is_in(PlayerStateKey::Idle));
}

#[test]
fn jump_lands_back_on_idle() {
    let (mut machine, mut ctx) = started();
    frame(
        &mut ctx,
        InputSnapshot {
            pressed: InputActions::JUMP,
            ..InputSnapshot::default()
        },
    );
    machine.tick(&mut ctx).expect("machine is started");
    assert!(machine.is_in(PlayerStateKey::Jump));
    assert!(ctx.motion.y > 0.0);

    let airborne = PhysicsSnapshot {
        grounded: false,
        ..PhysicsSnapshot::default()
    };
    for _ in 0..30 {
        ctx.begin_frame(InputSnapshot::default(), airborne, DT);
        machine.tick(&mut ctx).expect("machine is started");
    }
    assert!(ctx.motion.y < 0.0);

    ctx.begin_frame(InputSnapshot::default(), PhysicsSnapshot::default(), DT);
    machine.tick(&mut ctx).expect("machine is started");
    assert!(machine.is_in(PlayerStateKey::Idle));
}

#[test]
fn steep_ground_starts_a_slide() {
    let (mut machine, mut ctx) = started();
    let slope = PhysicsSnapshot {
        ground_normal: Vec3::new(1.0, 1.0, 0.0).normalize(),
        ..PhysicsSnapshot::default()
    };
    ctx.begin_frame(InputSnapshot::default(), slope, DT);
    machine.tick(&mut ctx).expect("machine is started");
    assert!(machine.is_in(PlayerStateKey::Sliding));

    ctx.begin_frame(InputSnapshot::default(), slope, DT);
    machine.tick(&mut ctx).expect("machine is started");
    assert!(ctx.motion.x > 0.0 && ctx.motion.y < 0.0);

    ctx.begin_frame(InputSnapshot::default(), PhysicsSnapshot::default(), DT);
    machine.tick(&mut ctx).expect("machine is started");
    assert!(machine.is_in(PlayerStateKey::Idle));
}
