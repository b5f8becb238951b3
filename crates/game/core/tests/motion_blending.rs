use approx::assert_relative_eq;
use glam::{Vec2, Vec3};
use horror_core::config::MotionConfig;
use horror_core::motion::modules::{
    BobSettings, ExternalModule, NoiseSettings, SwaySettings, TimedForce,
};
use horror_core::motion::{
    ChannelSettings, ModuleSpec, MotionBlender, MotionInput, MotionModule, MotionOffset, MotionPresetSpec,
    MotionProfile,
};
use horror_core::oracle::RecordingTransform;

const DT: f32 = 1.0 / 60.0;

fn walking() -> MotionInput {
    MotionInput {
        velocity: Vec3::new(0.0, 0.0, 3.0),
        look_delta: Vec2::new(2.0, 0.5),
        grounded: true,
        ..MotionInput::default()
    }
}

fn walk_preset() -> MotionPresetSpec {
    MotionPresetSpec::new("walk", MotionProfile::Walk)
        .with_module(ModuleSpec::Bob(BobSettings::default()))
        .with_module(ModuleSpec::Sway(SwaySettings::default()))
        .with_module(ModuleSpec::Noise(NoiseSettings::default()))
        .with_module(ModuleSpec::External(Default::default()))
}

fn walk_blender() -> MotionBlender {
    MotionBlender::with_modules(MotionConfig::default(), walk_preset().build().modules)
}

#[test]
fn inactive_modules_decay_monotonically_to_zero() {
    let mut blender = walk_blender();
    for _ in 0..120 {
        blender.update(&walking(), DT);
    }

    // Standing still in the air: bob and sway have nothing to contribute.
    let still = MotionInput {
        grounded: false,
        ..MotionInput::default()
    };
    let bob_start = blender.find("bob").expect("bob installed").output().magnitude();
    assert!(bob_start > 0.0);

    let reset_speed = blender.find("bob").expect("bob installed").channel().reset_speed();
    let bound = (bob_start / (reset_speed * DT)).ceil() as usize + 1;

    let mut previous = bob_start;
    for _ in 0..bound {
        blender.update(&still, DT);
        let current = blender.find("bob").expect("bob installed").output().magnitude();
        assert!(current <= previous, "bob output grew while decaying");
        previous = current;
    }
    assert_eq!(blender.find("bob").expect("bob installed").output(), MotionOffset::ZERO);

    for _ in 0..300 {
        blender.update(&still, DT);
    }
    assert_eq!(blender.find("sway").expect("sway installed").output(), MotionOffset::ZERO);
}

/// Frames an idle bob needs to settle under the given decay rate.
fn frames_to_rest(module_reset_speed: f32) -> usize {
    let config = MotionConfig {
        module_reset_speed,
        ..MotionConfig::default()
    };
    let preset = MotionPresetSpec::new("walk", MotionProfile::Walk)
        .with_module(ModuleSpec::Bob(BobSettings::default()));
    let mut blender = MotionBlender::with_modules(config, preset.build().modules);
    for _ in 0..120 {
        blender.update(&walking(), DT);
    }

    let still = MotionInput {
        grounded: false,
        ..MotionInput::default()
    };
    let mut frames = 0;
    while !blender.find("bob").expect("bob installed").output().is_zero() {
        blender.update(&still, DT);
        frames += 1;
        assert!(frames < 1_000_000, "bob never settled");
    }
    frames
}

#[test]
fn configured_reset_speed_governs_decay() {
    let slow = frames_to_rest(0.05);
    let fast = frames_to_rest(50.0);
    assert!(slow > fast, "slow decay took {slow} frames, fast took {fast}");
    assert!(fast <= 3);
}

#[test]
fn pinned_reset_speed_ignores_blender_config() {
    let config = MotionConfig {
        module_reset_speed: 0.5,
        ..MotionConfig::default()
    };
    let pinned = BobSettings {
        channel: ChannelSettings {
            reset_speed: Some(3.0),
            ..ChannelSettings::default()
        },
        ..BobSettings::default()
    };
    let preset = MotionPresetSpec::new("walk", MotionProfile::Walk)
        .with_module(ModuleSpec::Bob(pinned))
        .with_module(ModuleSpec::Sway(SwaySettings::default()));

    let mut blender = MotionBlender::new(config);
    blender.swap_modules(preset.build().modules);
    assert_eq!(blender.find("bob").unwrap().channel().reset_speed(), 3.0);
    assert_eq!(blender.find("sway").unwrap().channel().reset_speed(), 0.5);
}

#[test]
fn external_forces_reach_the_transform() {
    let mut blender = walk_blender();
    blender
        .module_mut::<ExternalModule>()
        .expect("external module installed")
        .add_force(TimedForce::new(MotionOffset::from_position(Vec3::Y), 1.0));

    let mut sink = RecordingTransform::default();
    for _ in 0..10 {
        blender.update(&MotionInput::default(), DT);
        blender.apply(&mut sink);
    }

    assert_eq!(sink.applied.len(), 10);
    let last = sink.last().expect("offsets were applied");
    assert!(last.position.y > 0.0);
}

#[test]
fn swapping_presets_leaves_no_residue() {
    let mut blender = walk_blender();
    for _ in 0..60 {
        blender.update(&walking(), DT);
    }
    assert!(!blender.combined().is_zero());

    let idle = MotionPresetSpec::new("idle", MotionProfile::Idle).build();
    let outgoing = blender.swap_modules(idle.modules);
    assert!(outgoing.iter().all(|module| module.output().is_zero()));

    let combined = blender.update(&walking(), DT);
    assert_relative_eq!(combined.position.length(), 0.0);
    assert_relative_eq!(combined.rotation.length(), 0.0);
}
