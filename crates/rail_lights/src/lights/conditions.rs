//! Condition evaluation
//!
//! Pure predicate deciding whether a light is enabled under the current
//! context. Enablement starts true and is narrowed by AND across the eight
//! independent categories; a category set to `Ignore` contributes no
//! constraint.

use crate::lights::context::{ContextSnapshot, HeadlightLevel, WeatherKind};
use crate::lights::definition::{
    ControlCondition, CouplingCondition, HeadlightCondition, LightConditions, PenaltyCondition,
    ServiceCondition, TimeOfDayCondition, UnitCondition, WeatherCondition,
};

/// Evaluate whether a light with `conditions` is enabled under `context`.
#[must_use]
pub fn evaluate(conditions: &LightConditions, context: &ContextSnapshot) -> bool {
    headlight_satisfied(conditions.headlight, context)
        && unit_satisfied(conditions.unit, context)
        && penalty_satisfied(conditions.penalty, context)
        && control_satisfied(conditions.control, context)
        && service_satisfied(conditions.service, context)
        && time_of_day_satisfied(conditions.time_of_day, context)
        && weather_satisfied(conditions.weather, context)
        && coupling_satisfied(conditions.coupling, context)
}

fn headlight_satisfied(condition: HeadlightCondition, context: &ContextSnapshot) -> bool {
    match condition {
        HeadlightCondition::Ignore => true,
        HeadlightCondition::Off => context.headlight == HeadlightLevel::Off,
        HeadlightCondition::Dim => context.headlight == HeadlightLevel::Dim,
        HeadlightCondition::Bright => context.headlight == HeadlightLevel::Bright,
        HeadlightCondition::DimBright => context.headlight >= HeadlightLevel::Dim,
        HeadlightCondition::OffDim => context.headlight <= HeadlightLevel::Dim,
        HeadlightCondition::OffBright => context.headlight != HeadlightLevel::Dim,
    }
}

fn unit_satisfied(condition: UnitCondition, context: &ContextSnapshot) -> bool {
    match condition {
        UnitCondition::Ignore => true,
        UnitCondition::Middle => !context.is_first && !context.is_last,
        UnitCondition::First => context.is_first && !context.is_reversed,
        UnitCondition::Last => context.is_last && !context.is_reversed,
        UnitCondition::FirstRev => context.is_first && context.is_reversed,
        UnitCondition::LastRev => context.is_last && context.is_reversed,
    }
}

fn penalty_satisfied(condition: PenaltyCondition, context: &ContextSnapshot) -> bool {
    match condition {
        PenaltyCondition::Ignore => true,
        PenaltyCondition::No => !context.penalty,
        PenaltyCondition::Yes => context.penalty,
    }
}

fn control_satisfied(condition: ControlCondition, context: &ContextSnapshot) -> bool {
    match condition {
        ControlCondition::Ignore => true,
        ControlCondition::Ai => !context.is_player,
        ControlCondition::Player => context.is_player,
    }
}

fn service_satisfied(condition: ServiceCondition, context: &ContextSnapshot) -> bool {
    match condition {
        ServiceCondition::Ignore => true,
        ServiceCondition::No => !context.in_service,
        ServiceCondition::Yes => context.in_service,
    }
}

fn time_of_day_satisfied(condition: TimeOfDayCondition, context: &ContextSnapshot) -> bool {
    match condition {
        TimeOfDayCondition::Ignore => true,
        TimeOfDayCondition::Day => context.is_day,
        TimeOfDayCondition::Night => !context.is_day,
    }
}

fn weather_satisfied(condition: WeatherCondition, context: &ContextSnapshot) -> bool {
    match condition {
        WeatherCondition::Ignore => true,
        WeatherCondition::Clear => context.weather == WeatherKind::Clear,
        WeatherCondition::Rain => context.weather == WeatherKind::Rain,
        WeatherCondition::Snow => context.weather == WeatherKind::Snow,
    }
}

fn coupling_satisfied(condition: CouplingCondition, context: &ContextSnapshot) -> bool {
    match condition {
        CouplingCondition::Ignore => true,
        CouplingCondition::Front => context.coupled_front && !context.coupled_rear,
        CouplingCondition::Rear => !context.coupled_front && context.coupled_rear,
        CouplingCondition::Both => context.coupled_front && context.coupled_rear,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_headlight(headlight: HeadlightLevel) -> ContextSnapshot {
        ContextSnapshot {
            headlight,
            ..Default::default()
        }
    }

    #[test]
    fn all_ignore_is_always_enabled() {
        let conditions = LightConditions::default();
        assert!(evaluate(&conditions, &ContextSnapshot::default()));
        assert!(evaluate(
            &conditions,
            &ContextSnapshot {
                headlight: HeadlightLevel::Bright,
                penalty: true,
                weather: WeatherKind::Snow,
                ..Default::default()
            }
        ));
    }

    #[test]
    fn headlight_dim_truth_table() {
        let conditions = LightConditions {
            headlight: HeadlightCondition::Dim,
            ..Default::default()
        };
        assert!(!evaluate(&conditions, &context_with_headlight(HeadlightLevel::Off)));
        assert!(evaluate(&conditions, &context_with_headlight(HeadlightLevel::Dim)));
        assert!(!evaluate(&conditions, &context_with_headlight(HeadlightLevel::Bright)));
    }

    #[test]
    fn headlight_range_predicates() {
        let dim_bright = LightConditions {
            headlight: HeadlightCondition::DimBright,
            ..Default::default()
        };
        let off_dim = LightConditions {
            headlight: HeadlightCondition::OffDim,
            ..Default::default()
        };
        let off_bright = LightConditions {
            headlight: HeadlightCondition::OffBright,
            ..Default::default()
        };

        assert!(!evaluate(&dim_bright, &context_with_headlight(HeadlightLevel::Off)));
        assert!(evaluate(&dim_bright, &context_with_headlight(HeadlightLevel::Dim)));
        assert!(evaluate(&dim_bright, &context_with_headlight(HeadlightLevel::Bright)));

        assert!(evaluate(&off_dim, &context_with_headlight(HeadlightLevel::Off)));
        assert!(evaluate(&off_dim, &context_with_headlight(HeadlightLevel::Dim)));
        assert!(!evaluate(&off_dim, &context_with_headlight(HeadlightLevel::Bright)));

        assert!(evaluate(&off_bright, &context_with_headlight(HeadlightLevel::Off)));
        assert!(!evaluate(&off_bright, &context_with_headlight(HeadlightLevel::Dim)));
        assert!(evaluate(&off_bright, &context_with_headlight(HeadlightLevel::Bright)));
    }

    #[test]
    fn unit_predicates_respect_reversal() {
        let first = LightConditions {
            unit: UnitCondition::First,
            ..Default::default()
        };
        let first_rev = LightConditions {
            unit: UnitCondition::FirstRev,
            ..Default::default()
        };
        let middle = LightConditions {
            unit: UnitCondition::Middle,
            ..Default::default()
        };

        let leading = ContextSnapshot {
            is_first: true,
            ..Default::default()
        };
        let leading_reversed = ContextSnapshot {
            is_first: true,
            is_reversed: true,
            ..Default::default()
        };
        let mid_train = ContextSnapshot::default();

        assert!(evaluate(&first, &leading));
        assert!(!evaluate(&first, &leading_reversed));
        assert!(!evaluate(&first_rev, &leading));
        assert!(evaluate(&first_rev, &leading_reversed));
        assert!(evaluate(&middle, &mid_train));
        assert!(!evaluate(&middle, &leading));
    }

    #[test]
    fn coupling_predicates_are_exclusive_where_authored() {
        let front = LightConditions {
            coupling: CouplingCondition::Front,
            ..Default::default()
        };
        let both = LightConditions {
            coupling: CouplingCondition::Both,
            ..Default::default()
        };

        let coupled_front = ContextSnapshot {
            coupled_front: true,
            ..Default::default()
        };
        let coupled_both = ContextSnapshot {
            coupled_front: true,
            coupled_rear: true,
            ..Default::default()
        };

        assert!(evaluate(&front, &coupled_front));
        assert!(!evaluate(&front, &coupled_both));
        assert!(!evaluate(&both, &coupled_front));
        assert!(evaluate(&both, &coupled_both));
    }

    #[test]
    fn weather_and_time_of_day_predicates() {
        let night_snow = LightConditions {
            time_of_day: TimeOfDayCondition::Night,
            weather: WeatherCondition::Snow,
            ..Default::default()
        };

        let snowy_night = ContextSnapshot {
            weather: WeatherKind::Snow,
            ..Default::default()
        };
        let snowy_day = ContextSnapshot {
            weather: WeatherKind::Snow,
            is_day: true,
            ..Default::default()
        };
        let clear_night = ContextSnapshot::default();

        assert!(evaluate(&night_snow, &snowy_night));
        assert!(!evaluate(&night_snow, &snowy_day));
        assert!(!evaluate(&night_snow, &clear_night));
    }

    #[test]
    fn tail_light_predicates() {
        let tail = LightConditions {
            unit: UnitCondition::LastRev,
            coupling: CouplingCondition::Rear,
            weather: WeatherCondition::Rain,
            ..Default::default()
        };

        let trailing_reversed = ContextSnapshot {
            is_last: true,
            is_reversed: true,
            coupled_rear: true,
            weather: WeatherKind::Rain,
            ..Default::default()
        };
        assert!(evaluate(&tail, &trailing_reversed));

        assert!(!evaluate(
            &tail,
            &ContextSnapshot {
                is_reversed: false,
                ..trailing_reversed
            }
        ));
        assert!(!evaluate(
            &tail,
            &ContextSnapshot {
                coupled_front: true,
                ..trailing_reversed
            }
        ));
        assert!(!evaluate(
            &tail,
            &ContextSnapshot {
                weather: WeatherKind::Clear,
                ..trailing_reversed
            }
        ));
    }

    #[test]
    fn categories_narrow_independently() {
        // One unsatisfied category disables the light no matter how many
        // others pass.
        let conditions = LightConditions {
            headlight: HeadlightCondition::Bright,
            control: ControlCondition::Player,
            service: ServiceCondition::Yes,
            penalty: PenaltyCondition::No,
            ..Default::default()
        };

        let context = ContextSnapshot {
            headlight: HeadlightLevel::Bright,
            is_player: true,
            in_service: true,
            penalty: true,
            ..Default::default()
        };
        assert!(!evaluate(&conditions, &context));

        let context = ContextSnapshot {
            penalty: false,
            ..context
        };
        assert!(evaluate(&conditions, &context));
    }
}
