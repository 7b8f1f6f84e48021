//! Railcar lights demo
//!
//! Builds a small locomotive light set and drives it through a scripted
//! headlight/day-night timeline in real time, logging what a renderer
//! would draw each second. Run with `RUST_LOG=debug` to also see the
//! engine's own state traces.

use std::thread;
use std::time::Duration;

use rail_lights::config::{Config, LightsConfig};
use rail_lights::foundation::math::Vec3;
use rail_lights::foundation::time::Timer;
use rail_lights::lights::{
    expand_light_set, ContextSnapshot, HeadlightCondition, HeadlightLevel, Keyframe,
    LightConditions, LightDefinition, LightKind, TimeOfDayCondition, UnitCondition,
    VehicleLights,
};

/// A bright headlight cone, a dim one, and a blinking night marker.
fn locomotive_lights() -> Vec<LightDefinition> {
    let beam_keyframe = |angle: f32, color: u32| Keyframe {
        duration: 1.0,
        color,
        position: Vec3::new(0.0, 3.2, 9.5),
        radius: 4.0,
        azimuth: Vec3::zeros(),
        elevation: Vec3::new(0.0, 4.0, 0.0),
        transition: false,
        angle,
    };

    let marker_on = Keyframe {
        duration: 0.6,
        color: 0xFFFF_3020,
        position: Vec3::new(-1.2, 4.1, 9.5),
        radius: 0.4,
        azimuth: Vec3::zeros(),
        elevation: Vec3::zeros(),
        transition: true,
        angle: 0.0,
    };
    let marker_off = Keyframe {
        color: 0x20FF_3020,
        ..marker_on.clone()
    };

    vec![
        LightDefinition {
            index: 0,
            kind: LightKind::Cone,
            conditions: LightConditions {
                headlight: HeadlightCondition::Bright,
                unit: UnitCondition::First,
                ..Default::default()
            },
            cycle: false,
            fade_in: 2.0,
            fade_out: 1.0,
            keyframes: vec![beam_keyframe(60.0, 0xFFFF_FFE0)],
        },
        LightDefinition {
            index: 1,
            kind: LightKind::Cone,
            conditions: LightConditions {
                headlight: HeadlightCondition::Dim,
                unit: UnitCondition::First,
                ..Default::default()
            },
            cycle: false,
            fade_in: 1.0,
            fade_out: 0.5,
            keyframes: vec![beam_keyframe(40.0, 0xFFB0_B0A0)],
        },
        LightDefinition {
            index: 2,
            kind: LightKind::Glow,
            conditions: LightConditions {
                time_of_day: TimeOfDayCondition::Night,
                ..Default::default()
            },
            cycle: true,
            fade_in: 0.0,
            fade_out: 0.0,
            keyframes: vec![marker_on, marker_off],
        },
    ]
}

/// Scripted simulation state over the demo's ten seconds.
fn context_at(total_time: f32) -> ContextSnapshot {
    let headlight = if total_time < 2.0 {
        HeadlightLevel::Off
    } else if total_time < 6.0 {
        HeadlightLevel::Bright
    } else {
        HeadlightLevel::Dim
    };
    ContextSnapshot {
        headlight,
        is_first: true,
        is_player: true,
        in_service: true,
        is_day: total_time >= 8.0,
        ..Default::default()
    }
}

fn main() {
    rail_lights::foundation::logging::init();

    let config = LightsConfig::load_from_file("lights.toml").unwrap_or_default();
    let definitions = locomotive_lights();
    let runtime_set = expand_light_set(definitions).expect("authored light set is non-empty");
    log::info!("runtime light set holds {} lights", runtime_set.len());

    let mut lights = VehicleLights::with_config(runtime_set, context_at(0.0), config);
    let mut timer = Timer::new();
    let mut last_report = 0.0_f32;

    while timer.total_time() < 10.0 {
        thread::sleep(Duration::from_millis(16));
        timer.update();

        let context = context_at(timer.total_time());
        lights.update(&context, timer.delta_time());

        if timer.total_time() - last_report >= 1.0 {
            last_report = timer.total_time();
            report(&lights, timer.total_time());
        }
    }
    log::info!("demo finished after {} frames", timer.frame_count());
}

fn report(lights: &VehicleLights, total_time: f32) {
    match lights.active_beam() {
        Some(beam) => log::info!(
            "t={total_time:.1}s headlight beam reaches {:.1} m toward ({:.2}, {:.2}, {:.2})",
            beam.falloff_distance,
            beam.direction.x,
            beam.direction.y,
            beam.direction.z,
        ),
        None => log::info!("t={total_time:.1}s no headlight beam"),
    }
    for animator in lights.animators() {
        let (opacity, blend) = animator.opacity_and_blend();
        log::info!(
            "  light {} {:?} enabled={} opacity={opacity:.2} blend={blend:.2}",
            animator.definition().index,
            animator.definition().kind,
            animator.enabled(),
        );
    }
}
