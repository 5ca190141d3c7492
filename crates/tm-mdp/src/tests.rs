//! Unit tests for tm-mdp.

use tm_core::{Action, GridPoint, ModelConfig, State};

use crate::TransportationMdp;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Four orders on a 7×7 grid, start at the origin.
///
/// Order keys are upper case while location keys are lower case, so every
/// query also exercises the case-insensitive location lookup.
fn grid4_config() -> ModelConfig {
    ModelConfig::new(GridPoint::new(0, 0))
        .order("A", "X")
        .order("B", "Y")
        .order("C", "Z")
        .order("D", "W")
        .passenger("A", GridPoint::new(1, 2))
        .passenger("B", GridPoint::new(4, 1))
        .passenger("C", GridPoint::new(2, 5))
        .passenger("D", GridPoint::new(6, 6))
        .location("x", GridPoint::new(3, 3))
        .location("y", GridPoint::new(0, 5))
        .location("z", GridPoint::new(5, 0))
        .location("w", GridPoint::new(6, 2))
}

fn grid4() -> TransportationMdp {
    TransportationMdp::new(grid4_config()).unwrap()
}

/// `n` orders, passenger `Pi` at `(i, 0)`, location `li` at `(i, i)`.
fn line_mdp(n: usize) -> TransportationMdp {
    let mut cfg = ModelConfig::new(GridPoint::new(0, 0));
    for i in 0..n {
        cfg = cfg
            .order(format!("P{i}"), format!("L{i}"))
            .passenger(format!("P{i}"), GridPoint::new(i as i32, 0))
            .location(format!("l{i}"), GridPoint::new(i as i32, i as i32));
    }
    TransportationMdp::new(cfg).unwrap()
}

fn st(codes: &[u8]) -> State {
    State::from_codes(codes).unwrap()
}

// ── State space ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod space {
    use rstest::rstest;
    use tm_core::{Slot, StateIndex};

    use super::*;
    use crate::{MAX_ORDERS, MdpError, StateSpace};

    #[test]
    fn four_orders_give_33_states() {
        let mdp = grid4();
        assert_eq!(mdp.state_count(), 33);
        assert_eq!(mdp.all_states().len(), 33);
        assert_eq!(mdp.all_states()[32], StateIndex(32));
    }

    #[rstest]
    #[case(1, 2)]
    #[case(2, 5)]
    #[case(3, 13)]
    #[case(4, 33)]
    #[case(5, 81)]
    #[case(6, 193)]
    fn count_matches_formula(#[case] n: usize, #[case] expected: usize) {
        let space = StateSpace::generate(n).unwrap();
        assert_eq!(space.len(), expected);
        assert_eq!(StateSpace::expected_len(n), expected);
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn every_state_round_trips_and_has_at_most_one_active(#[case] n: usize) {
        let mdp = line_mdp(n);
        for (index, state) in mdp.space().iter() {
            assert_eq!(mdp.state_to_index(state).unwrap(), index);
            assert_eq!(mdp.index_to_state(index).unwrap(), state);
            assert!(state.active_count() <= 1, "{state}");
            assert_eq!(state.len(), n);
        }
    }

    #[test]
    fn enumeration_order_is_fixed() {
        let mdp = grid4();
        let at = |i: u32| mdp.index_to_state(StateIndex(i)).unwrap().codes();
        assert_eq!(at(0), vec![0, 0, 0, 0]);
        assert_eq!(at(1), vec![2, 0, 0, 0]);
        assert_eq!(at(2), vec![2, 1, 0, 0]);
        assert_eq!(at(3), vec![2, 0, 1, 0]);
        assert_eq!(at(4), vec![2, 0, 0, 1]);
        assert_eq!(at(5), vec![2, 1, 1, 0]);
        assert_eq!(at(8), vec![2, 1, 1, 1]);
        assert_eq!(at(9), vec![0, 2, 0, 0]);
        assert_eq!(at(10), vec![1, 2, 0, 0]);
        assert_eq!(at(32), vec![1, 1, 1, 2]);
    }

    #[test]
    fn regeneration_is_identical() {
        let a = StateSpace::generate(5).unwrap();
        let b = StateSpace::generate(5).unwrap();
        assert!(a.iter().zip(b.iter()).all(|(x, y)| x == y));
    }

    #[test]
    fn no_duplicates() {
        let space = StateSpace::generate(6).unwrap();
        let unique: std::collections::HashSet<_> = space.iter().map(|(_, s)| s.clone()).collect();
        assert_eq!(unique.len(), space.len());
    }

    #[test]
    fn only_initial_state_has_no_active_slot() {
        let space = StateSpace::generate(4).unwrap();
        let inactive: Vec<_> = space
            .iter()
            .filter(|(_, s)| !s.slots().contains(&Slot::Active))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(inactive, vec![StateIndex(0)]);
    }

    #[test]
    fn zero_orders_rejected() {
        assert_eq!(StateSpace::generate(0).unwrap_err(), MdpError::NoOrders);
    }

    #[test]
    fn too_many_orders_rejected() {
        assert!(matches!(
            StateSpace::generate(MAX_ORDERS + 1),
            Err(MdpError::TooManyOrders { got: 17, max: 16 })
        ));
    }
}

// ── Codec ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod codec {
    use tm_core::StateIndex;

    use super::*;
    use crate::MdpError;

    #[test]
    fn index_out_of_range() {
        let mdp = grid4();
        assert!(matches!(
            mdp.index_to_state(StateIndex(33)),
            Err(MdpError::OutOfRange { index: StateIndex(33), len: 33 })
        ));
    }

    #[test]
    fn raw_state_passes_through() {
        let mdp = grid4();
        let s = st(&[1, 2, 0, 0]);
        assert_eq!(mdp.index_to_state(&s).unwrap(), &s);
    }

    #[test]
    fn raw_state_of_wrong_length_rejected() {
        let mdp = grid4();
        let s = st(&[2, 0, 0]);
        assert!(matches!(mdp.index_to_state(&s), Err(MdpError::UnknownState(_))));
        assert!(mdp.possible_actions(&s).is_err());
    }

    #[test]
    fn two_active_slots_unknown() {
        let mdp = grid4();
        assert_eq!(
            mdp.state_to_index(&st(&[2, 2, 0, 0])),
            Err(MdpError::UnknownState(st(&[2, 2, 0, 0])))
        );
    }

    #[test]
    fn initial_state_is_index_zero() {
        let mdp = grid4();
        assert_eq!(mdp.initial_state(), StateIndex(0));
        assert_eq!(mdp.index_to_state(mdp.initial_state()).unwrap(), &st(&[0, 0, 0, 0]));
    }

    #[test]
    fn unenumerated_raw_state_still_answers_queries() {
        let mdp = grid4();
        let s = st(&[1, 1, 1, 1]);
        assert_eq!(mdp.car_position(&s).unwrap(), mdp.config().driver_start_point);
        assert!(mdp.is_terminal(&s).unwrap());
        assert!(mdp.possible_actions(&s).unwrap().is_empty());
    }

    #[test]
    fn all_completed_is_not_enumerated() {
        let mdp = grid4();
        assert!(mdp.state_to_index(&st(&[1, 1, 1, 1])).is_err());
        assert!(mdp.state_to_index(&st(&[1, 0, 0, 0])).is_err());
    }
}

// ── Actions and transitions ───────────────────────────────────────────────────

#[cfg(test)]
mod dynamics {
    use itertools::Itertools;
    use tm_core::{Slot, StateIndex};

    use super::*;
    use crate::MdpError;

    #[test]
    fn initial_state_offers_every_action() {
        let mdp = grid4();
        assert_eq!(
            mdp.possible_actions(mdp.initial_state()).unwrap(),
            vec![Action(1), Action(2), Action(3), Action(4)]
        );
    }

    #[test]
    fn first_action_activates_its_slot() {
        let mdp = grid4();
        let next = mdp.next_states(&st(&[0, 0, 0, 0]), Action(1)).unwrap();
        assert_eq!(next.len(), 1);
        let (&index, &p) = next.iter().next().unwrap();
        assert_eq!(p, 1.0);
        assert_eq!(mdp.index_to_state(index).unwrap(), &st(&[2, 0, 0, 0]));
    }

    #[test]
    fn repeating_an_action_is_invalid() {
        let mdp = grid4();
        let err = mdp.next_states(&st(&[2, 0, 0, 0]), Action(1)).unwrap_err();
        assert_eq!(
            err,
            MdpError::InvalidAction { action: Action(1), state: st(&[2, 0, 0, 0]) }
        );
        assert!(mdp.next_states(&st(&[1, 2, 0, 0]), Action(1)).is_err());
    }

    #[test]
    fn action_outside_range_is_invalid() {
        let mdp = grid4();
        assert!(mdp.next_states(mdp.initial_state(), Action(0)).is_err());
        assert!(mdp.next_states(mdp.initial_state(), Action(5)).is_err());
    }

    #[test]
    fn second_action_collapses_history() {
        let mdp = grid4();
        let next = mdp.successor(&st(&[2, 0, 0, 0]), Action(2)).unwrap();
        assert_eq!(mdp.index_to_state(next).unwrap(), &st(&[1, 2, 0, 0]));
    }

    #[test]
    fn successor_rule_holds_everywhere() {
        let mdp = line_mdp(5);
        for (index, s) in mdp.space().iter() {
            for action in mdp.possible_actions(index).unwrap() {
                let next = mdp.index_to_state(mdp.successor(index, action).unwrap()).unwrap();
                let target = action.order().unwrap();
                for (i, (&before, &after)) in s.slots().iter().zip(next.slots()).enumerate() {
                    let expected = if i == target.index() {
                        Slot::Active
                    } else if before.is_served() {
                        Slot::Completed
                    } else {
                        Slot::Unassigned
                    };
                    assert_eq!(after, expected, "{s} --{action}--> {next}");
                }
            }
        }
    }

    #[test]
    fn terminal_iff_no_actions() {
        let mdp = line_mdp(4);
        for index in mdp.all_states() {
            let terminal = mdp.is_terminal(index).unwrap();
            let actions = mdp.possible_actions(index).unwrap();
            assert_eq!(terminal, actions.is_empty(), "{index}");
        }
        assert!(mdp.is_terminal(&st(&[1, 1, 1, 1])).unwrap());
    }

    #[test]
    fn every_order_of_service_ends_terminal_after_n_steps() {
        let mdp = grid4();
        for order in (1..=4u8).map(Action).permutations(4) {
            let mut s = mdp.initial_state();
            for (step, &action) in order.iter().enumerate() {
                assert!(!mdp.is_terminal(s).unwrap(), "terminal early at step {step}");
                s = mdp.successor(s, action).unwrap();
            }
            assert!(mdp.is_terminal(s).unwrap());
            let last = mdp.index_to_state(s).unwrap();
            assert!(last.slots().iter().all(|&x| x != Slot::Unassigned));
            assert_eq!(last.active(), order[3].order());
        }
    }

    #[test]
    fn terminal_states_are_the_full_ones() {
        let mdp = grid4();
        let terminal: Vec<StateIndex> = mdp
            .all_states()
            .into_iter()
            .filter(|&i| mdp.is_terminal(i).unwrap())
            .collect();
        assert_eq!(terminal.len(), 4);
    }
}

// ── Geometry, feasibility and reward ──────────────────────────────────────────

#[cfg(test)]
mod reward {
    use tm_core::StateIndex;

    use super::*;
    use crate::{IMPOSSIBLE_TRANSITION_PENALTY, MdpError};

    #[test]
    fn car_starts_at_driver_start_point() {
        let mdp = grid4();
        assert_eq!(mdp.car_position(mdp.initial_state()).unwrap(), GridPoint::new(0, 0));
        assert_eq!(mdp.car_position(&st(&[1, 1, 1, 1])).unwrap(), GridPoint::new(0, 0));
    }

    #[test]
    fn car_stands_at_active_drop_off() {
        let mdp = grid4();
        assert_eq!(mdp.car_position(&st(&[2, 0, 0, 0])).unwrap(), GridPoint::new(3, 3));
        assert_eq!(mdp.car_position(&st(&[1, 1, 0, 2])).unwrap(), GridPoint::new(6, 2));
    }

    #[test]
    fn successors_are_feasible() {
        let mdp = line_mdp(4);
        for s in mdp.all_states() {
            for a in mdp.possible_actions(s).unwrap() {
                for &next in mdp.next_states(s, a).unwrap().keys() {
                    assert!(mdp.check_transportation_possibility(s, next).unwrap());
                }
            }
        }
    }

    #[test]
    fn unrelated_pairs_are_infeasible() {
        let mdp = grid4();
        let init = st(&[0, 0, 0, 0]);
        assert!(!mdp.check_transportation_possibility(&init, &st(&[1, 2, 0, 0])).unwrap());
        assert!(!mdp.check_transportation_possibility(&init, &init).unwrap());
        // Reachable shape but never enumerated.
        assert!(!mdp.check_transportation_possibility(&init, &st(&[1, 1, 1, 1])).unwrap());
        // Terminal states have no successors at all.
        let done = st(&[1, 1, 2, 1]);
        for (_, next) in mdp.space().iter() {
            assert!(!mdp.check_transportation_possibility(&done, next).unwrap());
        }
    }

    #[test]
    fn first_leg_reward() {
        // (0,0) → A(1,2) = 3, A → X(3,3) = 3.
        let mdp = grid4();
        let r = mdp.reward(&st(&[0, 0, 0, 0]), Action(1), &st(&[2, 0, 0, 0])).unwrap();
        assert_eq!(r, -6);
    }

    #[test]
    fn legs_spanning_the_whole_coordinate_range() {
        let cfg = ModelConfig::new(GridPoint::new(i32::MIN, 0))
            .order("A", "X")
            .passenger("A", GridPoint::new(i32::MAX, 0))
            .location("x", GridPoint::new(i32::MIN, 0));
        let mdp = TransportationMdp::new(cfg).unwrap();
        let r = mdp.reward(mdp.initial_state(), Action(1), StateIndex(1)).unwrap();
        assert_eq!(r, -2 * i64::from(u32::MAX));
    }

    #[test]
    fn second_leg_starts_from_previous_drop_off() {
        // X(3,3) → B(4,1) = 3, B → Y(0,5) = 8.
        let mdp = grid4();
        let r = mdp.reward(&st(&[2, 0, 0, 0]), Action(2), &st(&[1, 2, 0, 0])).unwrap();
        assert_eq!(r, -11);
    }

    #[test]
    fn rewards_are_never_positive() {
        let mdp = grid4();
        for s in mdp.all_states() {
            for a in mdp.possible_actions(s).unwrap() {
                let next = mdp.successor(s, a).unwrap();
                assert!(mdp.reward(s, a, next).unwrap() <= 0);
            }
        }
    }

    #[test]
    fn impossible_transition_gets_the_penalty() {
        let mdp = grid4();
        let r = mdp.reward(&st(&[0, 0, 0, 0]), Action(2), &st(&[1, 2, 0, 0])).unwrap();
        assert_eq!(r, IMPOSSIBLE_TRANSITION_PENALTY);
        // The penalty path ignores the action entirely.
        let r = mdp.reward(&st(&[0, 0, 0, 0]), Action(9), &st(&[1, 2, 0, 0])).unwrap();
        assert_eq!(r, -1);
    }

    #[test]
    fn penalty_for_every_infeasible_pair() {
        let mdp = line_mdp(3);
        for s in mdp.all_states() {
            for next in mdp.all_states() {
                if !mdp.check_transportation_possibility(s, next).unwrap() {
                    assert_eq!(mdp.reward(s, Action(1), next).unwrap(), -1);
                }
            }
        }
    }

    #[test]
    fn feasible_pair_with_other_action_uses_that_action() {
        // (2,0,0,0) → (1,0,2,0) is reached by action 3, but the reward is
        // computed for the action passed in (2): X(3,3) → B → Y = 11.
        let mdp = grid4();
        let r = mdp.reward(&st(&[2, 0, 0, 0]), Action(2), &st(&[1, 0, 2, 0])).unwrap();
        assert_eq!(r, -11);
    }

    #[test]
    fn feasible_pair_with_out_of_range_action_errors() {
        let mdp = grid4();
        let err = mdp.reward(&st(&[0, 0, 0, 0]), Action(7), &st(&[2, 0, 0, 0])).unwrap_err();
        assert!(matches!(err, MdpError::InvalidAction { action: Action(7), .. }));
    }

    #[test]
    fn legs_resolved_case_insensitively() {
        let mdp = grid4();
        assert_eq!(mdp.leg(Action(3)), Some((GridPoint::new(2, 5), GridPoint::new(5, 0))));
        assert_eq!(mdp.leg(Action(5)), None);
        assert_eq!(mdp.leg(Action(0)), None);
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use tm_core::OrderId;

    use super::*;
    use crate::MdpError;

    #[test]
    fn missing_passenger() {
        let mut cfg = grid4_config();
        cfg.passengers.remove("C");
        assert_eq!(
            TransportationMdp::new(cfg).unwrap_err(),
            MdpError::MissingPassenger { order: OrderId(2), key: "C".into() }
        );
    }

    #[test]
    fn missing_location() {
        let cfg = grid4_config().order("A", "Q");
        assert!(matches!(
            TransportationMdp::new(cfg),
            Err(MdpError::MissingLocation { order: OrderId(4), .. })
        ));
    }

    #[test]
    fn colliding_location_keys() {
        let cfg = grid4_config().location("X", GridPoint::new(1, 1));
        assert!(matches!(TransportationMdp::new(cfg), Err(MdpError::DuplicateLocation(_))));
    }

    #[test]
    fn empty_config() {
        assert_eq!(
            TransportationMdp::new(ModelConfig::new(GridPoint::new(0, 0))).unwrap_err(),
            MdpError::NoOrders
        );
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TransportationMdp>();

        let mdp = grid4();
        let totals: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        mdp.all_states()
                            .into_iter()
                            .map(|s| mdp.possible_actions(s).unwrap().len())
                            .sum::<usize>()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(totals.iter().all(|&t| t == 52));
    }
}

// ── FiniteMdp and TransitionTable ─────────────────────────────────────────────

#[cfg(test)]
mod table {
    use tm_core::StateIndex;

    use super::*;
    use crate::{FiniteMdp, TransitionTable};

    #[test]
    fn trait_view_matches_inherent_queries() {
        let mdp = grid4();
        let view: &dyn FiniteMdp = &mdp;
        assert_eq!(view.state_count(), 33);
        assert_eq!(view.initial_state(), StateIndex(0));
        assert_eq!(view.actions(StateIndex(1)).unwrap(), vec![Action(2), Action(3), Action(4)]);
        let next = *view.transitions(StateIndex(1), Action(2)).unwrap().keys().next().unwrap();
        assert_eq!(view.reward(StateIndex(1), Action(2), next).unwrap(), -11);
        assert!(!view.is_terminal(next).unwrap());
    }

    #[test]
    fn table_covers_every_legal_pair() {
        let mdp = grid4();
        let table = TransitionTable::build(&mdp).unwrap();
        // 4 from the initial state + 4 × Σ C(3,k)(3−k) = 4 + 4 × 12.
        assert_eq!(table.len(), 52);
        assert_eq!(table.iter().count(), 52);
        for (s, a, t) in table.iter() {
            assert_eq!(t.probability, 1.0);
            assert_eq!(t.next_state, mdp.successor(s, a).unwrap());
            assert_eq!(t.reward, mdp.reward(s, a, t.next_state).unwrap());
            assert_eq!(t.done, mdp.is_terminal(t.next_state).unwrap());
        }
    }

    #[test]
    fn table_lookup() {
        let mdp = grid4();
        let table = TransitionTable::build(&mdp).unwrap();
        let row = table.get(StateIndex(0), Action(1)).unwrap();
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].next_state, StateIndex(1));
        assert_eq!(row[0].reward, -6);
        assert!(!row[0].done);
        // Slot 1 is already active in state 1.
        assert!(table.get(StateIndex(1), Action(1)).is_none());
        // (1,1,1,2) is terminal.
        assert!(table.get(StateIndex(32), Action(1)).is_none());
    }

    #[test]
    fn table_order_is_by_state_then_action() {
        let mdp = line_mdp(3);
        let table = TransitionTable::build(&mdp).unwrap();
        let keys: Vec<_> = table.iter().map(|(s, a, _)| (s, a)).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }
}
