#![warn(clippy::pedantic)]

use float_cmp::approx_eq;
use rubberband::{Arrangement, Simulator, SimulatorConfig, DEFAULT_MAX_DISPLACEMENT, DEFAULT_STEPS};
use test_case::test_case;

fn stiff_simulator(spring_constant: f64) -> Simulator {
    Simulator::with_config(SimulatorConfig {
        spring_constant,
        ..SimulatorConfig::default()
    })
}

#[test]
fn closed_form_values_at_full_displacement() {
    let simulator = Simulator::new();

    assert!(approx_eq!(f64, simulator.force_series(2.0), 1.0));
    assert!(approx_eq!(f64, simulator.force_parallel(2.0), 4.0));
    assert!(approx_eq!(
        f64,
        simulator.force_combined(2.0),
        (simulator.force_series(2.0) + simulator.force_parallel(1.0)) / 2.0
    ));
    assert!(approx_eq!(f64, simulator.force_combined(2.0), 1.5));
}

#[test_case(0.5; "soft")]
#[test_case(1.0; "unit")]
#[test_case(7.25; "stiff")]
fn rest_position_carries_no_force(spring_constant: f64) {
    let simulator = stiff_simulator(spring_constant);
    for arrangement in Arrangement::ALL {
        assert!(approx_eq!(f64, simulator.force(arrangement, 0.0), 0.0));
    }
}

#[test_case(Arrangement::Series; "series")]
#[test_case(Arrangement::Parallel; "parallel")]
#[test_case(Arrangement::Combined; "combined")]
fn forces_never_decrease_while_stretching(arrangement: Arrangement) {
    for spring_constant in [0.0, 0.3, 1.0, 12.0] {
        let sweep = stiff_simulator(spring_constant).sweep(arrangement, 5.0, 250);
        let forces = sweep.forces();
        assert!(forces
            .iter()
            .zip(forces.iter().skip(1))
            .all(|(previous, next)| next >= previous));
    }
}

#[test]
fn parallel_is_four_times_series() {
    let simulator = Simulator::new();
    for displacement in [-1.5, 0.1, 0.8, 2.0, 40.0] {
        assert!(approx_eq!(
            f64,
            simulator.force_parallel(displacement),
            4.0 * simulator.force_series(displacement),
            ulps = 2
        ));
    }
}

#[test_case(Arrangement::Series; "series")]
#[test_case(Arrangement::Parallel; "parallel")]
#[test_case(Arrangement::Combined; "combined")]
fn default_sweep_spans_zero_to_two(arrangement: Arrangement) {
    let simulator = Simulator::new();
    let sweep = simulator.sweep_default(arrangement);

    assert_eq!(sweep.len(), DEFAULT_STEPS);
    assert_eq!(sweep.forces().len(), DEFAULT_STEPS);
    assert!(approx_eq!(f64, sweep.displacements()[0], 0.0));
    assert!(
        (sweep.displacements()[DEFAULT_STEPS - 1] - DEFAULT_MAX_DISPLACEMENT).abs() < 1.0e-12
    );
    for (displacement, force) in sweep.points() {
        assert!(approx_eq!(f64, force, simulator.force(arrangement, displacement)));
    }
}

#[test]
fn single_step_samples_rest_position() {
    let sweep = Simulator::new().sweep(Arrangement::Parallel, 2.0, 1);

    assert_eq!(sweep.len(), 1);
    assert!(approx_eq!(f64, sweep.displacements()[0], 0.0));
    assert!(approx_eq!(f64, sweep.forces()[0], 0.0));
}

#[test]
fn zero_steps_gives_empty_sweep() {
    let sweep = Simulator::new().sweep(Arrangement::Combined, 2.0, 0);

    assert!(sweep.is_empty());
    assert_eq!(sweep.points().count(), 0);
}

#[test]
fn sweeps_are_independent() {
    let simulator = Simulator::new();
    let first = simulator.sweep_default(Arrangement::Series);
    let second = simulator.sweep_default(Arrangement::Series);

    assert_eq!(first, second);
    assert_eq!(first.arrangement(), Arrangement::Series);
    assert_eq!(first.force_range(), Some((0.0, first.forces()[DEFAULT_STEPS - 1])));
}
