//! Integration tests for flock-sim.

use std::sync::Mutex;

use flock_agent::AgentSnapshot;
use flock_behavior::{AgentView, BehaviorModel, InertialBehavior, Neighbor};
use flock_core::{AgentId, FlockParams, SimConfig, Tick, Vec2};
use flock_spatial::SpatialError;

use crate::{
    BatchRunner, BatchTask, FlockSimulation, NoopObserver, SimBuilder, SimError, SimObserver,
    TickSummary,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn params(population: usize) -> FlockParams {
    FlockParams {
        population,
        width:           100.0,
        height:          100.0,
        speed:           1.0,
        vision:          5.0,
        separation:      0.0,
        cohere_factor:   0.0,
        separate_factor: 0.0,
        match_factor:    0.0,
    }
}

fn same_bits(a: Vec2, b: Vec2) -> bool {
    a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
}

fn position(sim: &FlockSimulation<impl BehaviorModel>, id: u32) -> Vec2 {
    sim.agent(AgentId(id)).map(|a| a.position).unwrap()
}

fn heading(sim: &FlockSimulation<impl BehaviorModel>, id: u32) -> Vec2 {
    sim.agent(AgentId(id)).map(|a| a.heading).unwrap()
}

#[derive(Default)]
struct Recorder {
    tick_ends: Vec<u64>,
    snapshots: Vec<(u64, usize)>,
    ended:     Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.tick_ends.push(summary.tick.0);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
        self.snapshots.push((tick.0, agents.len()));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended = Some(final_tick);
    }
}

/// Emits a NaN heading, which drives the next position non-finite.
struct NanBehavior;

impl BehaviorModel for NanBehavior {
    fn next_heading(&self, _me: &AgentView, _neighbors: &[Neighbor]) -> Vec2 {
        Vec2::new(f64::NAN, 0.0)
    }
}

/// Turns every boid due south and records the single neighbor each one saw.
#[derive(Default)]
struct HeadSouth {
    seen: Mutex<Vec<(AgentId, Neighbor)>>,
}

impl BehaviorModel for HeadSouth {
    fn next_heading(&self, me: &AgentView, neighbors: &[Neighbor]) -> Vec2 {
        if let [n] = neighbors {
            self.seen.lock().unwrap().push((me.id, *n));
        }
        Vec2::new(0.0, -1.0)
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = FlockSimulation::new(FlockParams::default(), 42).unwrap();
        assert_eq!(sim.population(), 100);
        assert_eq!(sim.space.len(), 100);
        assert_eq!(sim.scheduler.len(), 100);
        assert_eq!(sim.tick(), Tick::ZERO);
        assert!(sim.is_running());
    }

    #[test]
    fn random_placement_is_inside_space() {
        let p = FlockParams { width: 7.0, height: 3.0, ..FlockParams::default() };
        let sim = FlockSimulation::new(p, 1).unwrap();
        for a in sim.agents() {
            assert!((0.0..7.0).contains(&a.position.x), "{}", a.position);
            assert!((0.0..3.0).contains(&a.position.y), "{}", a.position);
            assert!((a.heading.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn invalid_params_rejected() {
        let bad = [
            FlockParams { population: 0, ..params(1) },
            FlockParams { width: 0.0, ..params(1) },
            FlockParams { height: -1.0, ..params(1) },
            FlockParams { speed: 0.0, ..params(1) },
            FlockParams { vision: -0.5, ..params(1) },
            FlockParams { separation: f64::NAN, ..params(1) },
            FlockParams { cohere_factor: -1.0, ..params(1) },
            FlockParams { separate_factor: f64::INFINITY, ..params(1) },
            FlockParams { match_factor: -0.1, ..params(1) },
        ];
        for p in bad {
            let result = FlockSimulation::new(p.clone(), 0);
            assert!(matches!(result, Err(SimError::Config(_))), "{p:?} should be rejected");
        }
    }

    #[test]
    fn separation_beyond_vision_is_allowed() {
        let p = FlockParams { vision: 1.0, separation: 3.0, ..params(4) };
        assert!(FlockSimulation::new(p, 0).is_ok());
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = SimBuilder::new(params(3))
            .initial_positions(vec![Vec2::ZERO; 2])
            .build();
        assert_eq!(
            result.err(),
            Some(SimError::AgentCountMismatch { expected: 3, got: 2, what: "initial positions" })
        );
    }

    #[test]
    fn heading_count_mismatch_errors() {
        let result = SimBuilder::new(params(3))
            .initial_headings(vec![Vec2::new(1.0, 0.0); 4])
            .build();
        assert!(matches!(result, Err(SimError::AgentCountMismatch { got: 4, .. })));
    }

    #[test]
    fn non_finite_initial_position_errors() {
        let result = SimBuilder::new(params(2))
            .initial_positions(vec![Vec2::new(1.0, 1.0), Vec2::new(f64::INFINITY, 0.0)])
            .build();
        assert!(matches!(
            result,
            Err(SimError::Spatial(SpatialError::OutOfBounds { agent: AgentId(1), .. }))
        ));
    }

    #[test]
    fn zero_initial_heading_errors() {
        let result = SimBuilder::new(params(1))
            .initial_headings(vec![Vec2::ZERO])
            .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn explicit_state_is_wrapped_and_normalized() {
        let sim = SimBuilder::new(params(1))
            .initial_positions(vec![Vec2::new(-5.0, 250.0)])
            .initial_headings(vec![Vec2::new(0.0, 3.0)])
            .build()
            .unwrap();
        assert_eq!(position(&sim, 0), Vec2::new(95.0, 50.0));
        assert_eq!(heading(&sim, 0), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn unknown_agent_is_none() {
        let sim = FlockSimulation::new(params(2), 0).unwrap();
        assert!(sim.agent(AgentId(2)).is_none());
    }
}

// ── Stepping ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn single_agent_moves_straight_and_wraps() {
        let mut sim = SimBuilder::new(FlockParams { cohere_factor: 1.0, ..params(1) })
            .initial_positions(vec![Vec2::new(96.5, 10.0)])
            .initial_headings(vec![Vec2::new(1.0, 0.0)])
            .build()
            .unwrap();

        let expected_x = [97.5, 98.5, 99.5, 0.5, 1.5];
        for x in expected_x {
            sim.step().unwrap();
            assert_eq!(position(&sim, 0), Vec2::new(x, 10.0));
            assert_eq!(heading(&sim, 0), Vec2::new(1.0, 0.0));
        }
        assert_eq!(sim.tick(), Tick(5));
    }

    #[test]
    fn cohesion_pulls_agents_at_vision_edge_together() {
        let p = FlockParams {
            speed:         0.25,
            vision:        5.0,
            separation:    0.0,
            cohere_factor: 0.1,
            ..params(2)
        };
        let mut sim = SimBuilder::new(p)
            .seed(3)
            .initial_positions(vec![Vec2::new(10.0, 10.0), Vec2::new(15.0, 10.0)])
            .initial_headings(vec![Vec2::new(0.0, 1.0); 2])
            .build()
            .unwrap();

        // Cosine between each heading and the direction to the other boid.
        let facing = |sim: &FlockSimulation| {
            let offset = sim.space.wrap_offset(position(sim, 0), position(sim, 1));
            let gap = offset.length();
            let a = (heading(sim, 0).x * offset.x + heading(sim, 0).y * offset.y) / gap;
            let b = -(heading(sim, 1).x * offset.x + heading(sim, 1).y * offset.y) / gap;
            (gap, a, b)
        };

        let (mut gap, mut a, mut b) = facing(&sim);
        assert_eq!((a, b), (0.0, 0.0));
        for _ in 0..6 {
            sim.step().unwrap();
            assert_eq!(sim.mean_neighbors(), 1.0);
            let (g, na, nb) = facing(&sim);
            assert!(g < gap, "gap grew from {gap} to {g}");
            assert!(na > a && nb > b, "headings turned away: {a}->{na}, {b}->{nb}");
            (gap, a, b) = (g, na, nb);
        }
        assert!(a > 0.95 && b > 0.95, "not facing each other: {a}, {b}");
        assert!(gap < 3.0, "gap {gap}");
    }

    #[test]
    fn coincident_agents_do_not_blow_up() {
        let p = FlockParams { separation: 0.5, separate_factor: 1.0, ..params(2) };
        let start = vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let mut sim = SimBuilder::new(p)
            .initial_positions(vec![Vec2::new(20.0, 20.0); 2])
            .initial_headings(start.clone())
            .build()
            .unwrap();

        sim.step().unwrap();

        for (i, h) in start.into_iter().enumerate() {
            assert!(same_bits(heading(&sim, i as u32), h));
            assert!(position(&sim, i as u32).is_finite());
        }
    }

    #[test]
    fn zero_weights_keep_every_heading_bitwise() {
        let mut sim = FlockSimulation::new(FlockParams { vision: 30.0, ..params(40) }, 11).unwrap();
        let before: Vec<Vec2> = sim.agents().map(|a| a.heading).collect();
        for _ in 0..20 {
            sim.step().unwrap();
        }
        for (a, h) in sim.agents().zip(before) {
            assert!(same_bits(a.heading, h), "{} changed", a.id);
        }
    }

    #[test]
    fn landing_exactly_on_width_wraps_to_zero() {
        let mut sim = SimBuilder::new(params(1))
            .initial_positions(vec![Vec2::new(99.0, 50.0)])
            .initial_headings(vec![Vec2::new(1.0, 0.0)])
            .build()
            .unwrap();
        sim.step().unwrap();
        assert_eq!(position(&sim, 0), Vec2::new(0.0, 50.0));
    }

    #[test]
    fn isolated_agents_keep_heading_bitwise() {
        let p = FlockParams {
            vision:          1.0,
            cohere_factor:   1.0,
            separate_factor: 1.0,
            match_factor:    1.0,
            ..params(2)
        };
        let start = vec![Vec2::new(0.6, 0.8), Vec2::new(-0.28, 0.96)];
        let mut sim = SimBuilder::new(p)
            .initial_positions(vec![Vec2::new(10.0, 10.0), Vec2::new(60.0, 60.0)])
            .initial_headings(start.clone())
            .build()
            .unwrap();
        let before: Vec<Vec2> = sim.agents().map(|a| a.heading).collect();

        sim.step().unwrap();

        for (a, h) in sim.agents().zip(before) {
            assert!(same_bits(a.heading, h));
        }
        assert_eq!(sim.mean_neighbors(), 0.0);
    }

    #[test]
    fn changed_headings_are_unit_length() {
        let p = FlockParams { width: 20.0, height: 20.0, ..FlockParams::default() };
        let mut sim = FlockSimulation::new(FlockParams { population: 50, ..p }, 5).unwrap();
        for _ in 0..10 {
            sim.step().unwrap();
            for a in sim.agents() {
                assert!((a.heading.length() - 1.0).abs() < 1e-9, "{}: {}", a.id, a.heading);
            }
        }
    }

    #[test]
    fn positions_stay_inside_space() {
        let p = FlockParams { width: 13.0, height: 9.0, speed: 4.7, ..FlockParams::default() };
        let mut sim = FlockSimulation::new(FlockParams { population: 60, ..p }, 8).unwrap();
        for _ in 0..30 {
            sim.step().unwrap();
        }
        for a in sim.agents() {
            assert!((0.0..13.0).contains(&a.position.x), "{}", a.position);
            assert!((0.0..9.0).contains(&a.position.y), "{}", a.position);
        }
    }

    #[test]
    fn population_is_conserved() {
        let mut sim = FlockSimulation::new(FlockParams::default(), 2).unwrap();
        for _ in 0..15 {
            sim.step().unwrap();
        }
        let ids: Vec<AgentId> = sim.agents().map(|a| a.id).collect();
        let expected: Vec<AgentId> = (0..100).map(AgentId).collect();
        assert_eq!(ids, expected);
        assert_eq!(sim.population(), 100);
    }

    #[test]
    fn same_seed_reproduces_run() {
        let run = |seed| {
            let mut sim = FlockSimulation::new(FlockParams::default(), seed).unwrap();
            for _ in 0..25 {
                sim.step().unwrap();
            }
            sim.snapshot()
        };
        let (a, b) = (run(7), run(7));
        for (x, y) in a.iter().zip(&b) {
            assert!(same_bits(x.position, y.position));
            assert!(same_bits(x.heading, y.heading));
        }
        assert_ne!(a, run(8));
    }

    #[test]
    fn custom_behavior_is_used() {
        let p = FlockParams { cohere_factor: 1.0, match_factor: 1.0, vision: 50.0, ..params(10) };
        let mut sim = SimBuilder::new(p).seed(4).behavior(InertialBehavior).build().unwrap();
        let before: Vec<Vec2> = sim.agents().map(|a| a.heading).collect();
        sim.step().unwrap();
        let after: Vec<Vec2> = sim.agents().map(|a| a.heading).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn non_finite_update_is_fatal() {
        let mut sim = SimBuilder::new(params(3)).seed(1).behavior(NanBehavior).build().unwrap();
        let before = sim.snapshot();

        let err = sim.step().unwrap_err();

        assert!(matches!(err, SimError::Spatial(SpatialError::OutOfBounds { .. })), "{err}");
        assert_eq!(sim.tick(), Tick::ZERO);
        assert_eq!(sim.snapshot(), before);
    }

    #[test]
    fn later_boid_sees_earlier_update_within_tick() {
        let p = FlockParams { vision: 5.0, ..params(2) };
        let mut sim = SimBuilder::new(p)
            .seed(6)
            .initial_positions(vec![Vec2::new(10.0, 10.0), Vec2::new(12.0, 10.0)])
            .initial_headings(vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)])
            .behavior(HeadSouth::default())
            .build()
            .unwrap();

        sim.step().unwrap();

        let seen = sim.behavior.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        let (first, before) = seen[0];
        let (second, after) = seen[1];
        assert_ne!(first, second);

        // The first boid saw the untouched initial state.
        let (offset, other_heading) = if first == AgentId(0) {
            (Vec2::new(2.0, 0.0), Vec2::new(0.0, 1.0))
        } else {
            (Vec2::new(-2.0, 0.0), Vec2::new(1.0, 0.0))
        };
        assert_eq!(before.offset, offset);
        assert_eq!(before.heading, other_heading);

        // The second saw the first already moved one step south and turned.
        let moved = if second == AgentId(0) { Vec2::new(2.0, -1.0) } else { Vec2::new(-2.0, -1.0) };
        assert_eq!(after.id, first);
        assert_eq!(after.offset, moved);
        assert_eq!(after.heading, Vec2::new(0.0, -1.0));
    }

    #[test]
    fn aligned_flock_has_unit_polarization() {
        let sim = SimBuilder::new(params(5))
            .initial_headings(vec![Vec2::new(0.0, -2.0); 5])
            .build()
            .unwrap();
        assert_eq!(sim.polarization(), 1.0);
    }
}

// ── run() and observers ───────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn run_reaches_step_max() {
        let mut sim = FlockSimulation::new(params(5), 0).unwrap();
        let end = sim.run(&SimConfig::new(12, 0), &mut NoopObserver).unwrap();
        assert_eq!(end, Tick(12));
        assert_eq!(sim.tick(), Tick(12));
    }

    #[test]
    fn observer_sees_ticks_and_snapshots() {
        let mut sim = FlockSimulation::new(params(4), 0).unwrap();
        let config = SimConfig { output_interval_ticks: 2, ..SimConfig::new(5, 0) };
        let mut rec = Recorder::default();

        sim.run(&config, &mut rec).unwrap();

        assert_eq!(rec.tick_ends, vec![1, 2, 3, 4, 5]);
        assert_eq!(rec.snapshots, vec![(0, 4), (2, 4), (4, 4)]);
        assert_eq!(rec.ended, Some(Tick(5)));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut sim = FlockSimulation::new(params(4), 0).unwrap();
        let config = SimConfig { output_interval_ticks: 0, ..SimConfig::new(3, 0) };
        let mut rec = Recorder::default();
        sim.run(&config, &mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
        assert_eq!(rec.tick_ends.len(), 3);
    }

    #[test]
    fn run_resumes_from_current_tick() {
        let mut sim = FlockSimulation::new(params(4), 0).unwrap();
        sim.run(&SimConfig::new(3, 0), &mut NoopObserver).unwrap();

        let mut rec = Recorder::default();
        sim.run(&SimConfig::new(5, 0), &mut rec).unwrap();

        assert_eq!(rec.tick_ends, vec![4, 5]);
        assert_eq!(rec.snapshots, vec![(4, 4), (5, 4)]);
    }

    #[test]
    fn halted_simulation_does_not_run() {
        let mut sim = FlockSimulation::new(params(4), 0).unwrap();
        sim.halt();
        let mut rec = Recorder::default();

        let end = sim.run(&SimConfig::new(10, 0), &mut rec).unwrap();

        assert_eq!(end, Tick::ZERO);
        assert!(rec.tick_ends.is_empty());
        assert_eq!(rec.ended, Some(Tick::ZERO));
    }

    #[test]
    fn both_forwards_to_each_observer() {
        let mut sim = FlockSimulation::new(params(2), 0).unwrap();
        let (mut a, mut b) = (Recorder::default(), Recorder::default());
        sim.run(&SimConfig::new(2, 0), &mut crate::Both(&mut a, &mut b)).unwrap();
        assert_eq!(a.tick_ends, b.tick_ends);
        assert_eq!(a.snapshots.len(), 3);
        assert_eq!(b.ended, Some(Tick(2)));
    }

    #[test]
    fn run_surfaces_fatal_error() {
        let mut sim = SimBuilder::new(params(2)).behavior(NanBehavior).build().unwrap();
        let mut rec = Recorder::default();
        let result = sim.run(&SimConfig::new(10, 0), &mut rec);
        assert!(result.is_err());
        assert!(rec.tick_ends.is_empty());
        assert_eq!(rec.ended, None);
    }
}

// ── BatchRunner ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;

    #[test]
    fn seeded_batch_runs_every_task_in_order() {
        let runner = BatchRunner::seeded(&params(10), &SimConfig::new(6, 0), 4, 99);
        let results = runner.run();

        assert_eq!(results.len(), 4);
        for (i, r) in results.iter().enumerate() {
            let s = r.as_ref().unwrap();
            assert_eq!(s.index, i);
            assert_eq!(s.ticks, Tick(6));
            assert_eq!(s.seed, runner.tasks()[i].config.seed);
        }
        let mut seeds: Vec<u64> = runner.tasks().iter().map(|t| t.config.seed).collect();
        seeds.sort_unstable();
        seeds.dedup();
        assert_eq!(seeds.len(), 4);
    }

    #[test]
    fn batch_matches_standalone_run() {
        let p = FlockParams { cohere_factor: 0.1, match_factor: 0.1, vision: 20.0, ..params(12) };
        let config = SimConfig::new(8, 31);
        let results = BatchRunner::new(vec![BatchTask { params: p.clone(), config: config.clone() }]).run();

        let mut sim = FlockSimulation::new(p, 31).unwrap();
        sim.run(&config, &mut NoopObserver).unwrap();

        let s = results[0].as_ref().unwrap();
        assert_eq!(s.polarization.to_bits(), sim.polarization().to_bits());
        assert_eq!(s.mean_neighbors, sim.mean_neighbors());
    }

    #[test]
    fn failing_task_does_not_affect_others() {
        let good = BatchTask { params: params(3), config: SimConfig::new(2, 1) };
        let bad = BatchTask { params: params(0), config: SimConfig::new(2, 1) };
        let results = BatchRunner::new(vec![good.clone(), bad, good]).run();

        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(SimError::Config(_))));
        assert!(results[2].is_ok());
    }

    #[test]
    fn empty_batch() {
        let runner = BatchRunner::new(Vec::new());
        assert!(runner.is_empty());
        assert!(runner.run().is_empty());
    }
}
