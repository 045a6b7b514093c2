//! Unit tests for gn-telemetry.

#[cfg(test)]
mod scope {
    use std::time::Duration;

    use crate::MeasureScope;

    #[test]
    fn close_reports_given_peak() {
        let scope = MeasureScope::open("test");
        let m = scope.close(4096);
        assert_eq!(m.peak_memory_bytes, 4096);
    }

    #[test]
    fn elapsed_is_monotone() {
        let scope = MeasureScope::open("test");
        std::thread::sleep(Duration::from_millis(2));
        let m = scope.close(0);
        assert!(m.elapsed >= Duration::from_millis(2));
    }

    #[test]
    fn dropping_unclosed_scope_is_harmless() {
        let scope = MeasureScope::open("test");
        drop(scope);
    }
}

#[cfg(test)]
mod recorder {
    use gn_core::Cell;
    use gn_maze::{GridMazeBuilder, Topology};
    use gn_search::Strategy;

    use crate::{instrumented_search, PlanStatus};

    struct Diagonal;

    impl Topology for Diagonal {
        fn valid_moves(&self, cell: Cell) -> Vec<Cell> {
            vec![Cell::new(cell.col + 1, cell.row + 1)]
        }
    }

    #[test]
    fn found_route_carries_search_figures() {
        let maze = GridMazeBuilder::new(5, 5).build();
        for strategy in Strategy::ALL {
            let r = instrumented_search(strategy, &maze, Cell::new(0, 0), Cell::new(4, 4), 30);
            assert_eq!(r.status, PlanStatus::Found, "{strategy}");
            assert!(!r.reused);
            assert!(r.nodes_expanded > 0);
            assert!(r.peak_memory_bytes > 0);
            assert!(r.route.len() >= 8);
        }
    }

    #[test]
    fn isolated_goal_is_zero_cost() {
        let mut b = GridMazeBuilder::new(3, 3);
        b.wall(Cell::new(2, 1));
        b.wall(Cell::new(1, 2));
        let maze = b.build();
        let r = instrumented_search(Strategy::AStar, &maze, Cell::new(0, 0), Cell::new(2, 2), 30);
        assert_eq!(r.status, PlanStatus::InvalidGoal);
        assert!(r.route.is_empty());
        assert_eq!(r.nodes_expanded, 0);
        assert_eq!(r.peak_memory_bytes, 0);
        assert_eq!(r.elapsed, std::time::Duration::ZERO);
    }

    #[test]
    fn unreachable_goal_is_empty_route() {
        let mut b = GridMazeBuilder::new(5, 3);
        for row in 0..3 {
            b.wall(Cell::new(2, row));
        }
        let maze = b.build();
        let r = instrumented_search(Strategy::BreadthFirst, &maze, Cell::new(0, 0), Cell::new(4, 0), 30);
        assert_eq!(r.status, PlanStatus::Unreachable);
        assert!(r.route.is_empty());
        assert_eq!(r.nodes_expanded, 6);
    }

    #[test]
    fn search_fault_becomes_empty_route() {
        let r = instrumented_search(Strategy::UniformCost, &Diagonal, Cell::new(0, 0), Cell::new(3, 3), 30);
        assert_eq!(r.status, PlanStatus::Faulted);
        assert!(r.route.is_empty());
        assert_eq!(r.nodes_expanded, 0);
    }
}

#[cfg(test)]
mod log {
    use std::time::Duration;

    use gn_core::{Cell, GhostId};
    use gn_search::{Route, Strategy};

    use crate::{PlanStatus, PlanningResult, TelemetryLog, TelemetryRecord};

    fn record(nodes: u64, reused: bool) -> TelemetryRecord {
        let result = PlanningResult {
            route:             Route::from(vec![Cell::new(1, 0)]),
            elapsed:           Duration::from_micros(nodes),
            peak_memory_bytes: nodes as usize * 10,
            nodes_expanded:    nodes,
            reused,
            status:            if reused { PlanStatus::Reused } else { PlanStatus::Found },
        };
        TelemetryRecord::capture(GhostId(0), Strategy::BreadthFirst, Cell::new(1, 0), &result)
    }

    #[test]
    fn capture_copies_result_figures() {
        let r = record(7, false);
        assert_eq!(r.route_len, 1);
        assert_eq!(r.nodes_expanded, 7);
        assert_eq!(r.peak_memory_bytes, 70);
        assert!(r.captured_unix_ms > 0);
    }

    #[test]
    fn unbounded_log_keeps_everything() {
        let mut log = TelemetryLog::new(None);
        for i in 0..100 {
            log.push(record(i, false));
        }
        assert_eq!(log.len(), 100);
        assert_eq!(log.last().map(|r| r.nodes_expanded), Some(99));
    }

    #[test]
    fn bounded_log_drops_oldest() {
        let mut log = TelemetryLog::new(Some(3));
        for i in 1..=5 {
            log.push(record(i, false));
        }
        let kept: Vec<u64> = log.iter().map(|r| r.nodes_expanded).collect();
        assert_eq!(kept, vec![3, 4, 5]);
    }

    #[test]
    fn summary_aggregates() {
        let mut log = TelemetryLog::new(None);
        log.push(record(4, false));
        log.push(record(4, true));
        log.push(record(9, false));
        let s = log.summary();
        assert_eq!(s.plans, 3);
        assert_eq!(s.reused, 1);
        assert_eq!(s.total_nodes_expanded, 17);
        assert_eq!(s.total_elapsed, Duration::from_micros(17));
        assert_eq!(s.max_peak_memory_bytes, 90);
        assert!((s.reuse_ratio() - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn replay_copies_prior_costs() {
        let prior = record(12, false);
        let route = Route::from(vec![Cell::new(1, 0)]);
        let r = PlanningResult::replayed(route.clone(), Some(&prior));
        assert!(r.reused);
        assert_eq!(r.status, PlanStatus::Reused);
        assert_eq!(r.route, route);
        assert_eq!(r.nodes_expanded, 12);
        assert_eq!(r.elapsed, prior.elapsed);

        let bare = PlanningResult::replayed(route, None);
        assert_eq!(bare.nodes_expanded, 0);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = TelemetryLog::new(Some(2));
        log.push(record(1, false));
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.summary().plans, 0);
        assert_eq!(log.capacity(), Some(2));
    }
}
