//! Unit tests for gn-core primitives.

#[cfg(test)]
mod ids {
    use crate::GhostId;

    #[test]
    fn index_roundtrip() {
        let id = GhostId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(GhostId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn invalid_is_default() {
        assert_eq!(GhostId::default(), GhostId::INVALID);
        assert_eq!(GhostId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(GhostId(2).to_string(), "GhostId(2)");
    }
}

#[cfg(test)]
mod cell {
    use crate::{Cell, Direction};

    #[test]
    fn neighbors_are_up_right_down_left() {
        let c = Cell::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [Cell::new(5, 4), Cell::new(6, 5), Cell::new(5, 6), Cell::new(4, 5)]
        );
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(4, 4)), 8);
        assert_eq!(Cell::new(-2, 3).manhattan(Cell::new(1, 1)), 5);
        assert_eq!(Cell::new(7, 7).manhattan(Cell::new(7, 7)), 0);
    }

    #[test]
    fn adjacency() {
        let c = Cell::new(1, 1);
        assert!(c.is_adjacent(Cell::new(1, 0)));
        assert!(!c.is_adjacent(Cell::new(2, 2))); // diagonal
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn direction_between() {
        let c = Cell::new(2, 2);
        assert_eq!(Direction::between(c, Cell::new(2, 1)), Some(Direction::Up));
        assert_eq!(Direction::between(c, Cell::new(1, 2)), Some(Direction::Left));
        assert_eq!(Direction::between(c, Cell::new(3, 3)), None);
    }

    #[test]
    fn ordering_is_col_then_row() {
        assert!(Cell::new(0, 9) < Cell::new(1, 0));
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(3, -1).to_string(), "(3, -1)");
    }
}

#[cfg(test)]
mod config {
    use crate::EngineConfig;

    #[test]
    fn default_is_valid() {
        let cfg = EngineConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.ticks_per_step(), 20);
    }

    #[test]
    fn rejects_out_of_range_rate() {
        for rate in [0.0, -0.1, 1.5, f64::NAN] {
            let cfg = EngineConfig { progress_per_tick: rate, ..EngineConfig::default() };
            assert!(cfg.validate().is_err(), "rate {rate} should be rejected");
        }
    }

    #[test]
    fn rejects_zero_cap_and_size() {
        let cfg = EngineConfig { dfs_depth_cap: 0, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = EngineConfig { cell_size: 0, ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = EngineConfig { telemetry_capacity: Some(0), ..EngineConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn full_rate_is_one_tick_per_step() {
        let cfg = EngineConfig { progress_per_tick: 1.0, ..EngineConfig::default() };
        assert_eq!(cfg.ticks_per_step(), 1);
    }

    #[test]
    fn ticks_for_rate_rounds_up() {
        assert_eq!(EngineConfig::ticks_for_rate(0.05), 20);
        assert_eq!(EngineConfig::ticks_for_rate(0.3), 4);
        assert_eq!(EngineConfig::ticks_for_rate(0.1 - 1e-11), 11);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_and_display() {
        let t = Tick(4);
        assert_eq!(t.next(), Tick(5));
        assert_eq!(Tick::ZERO.next().next(), Tick(2));
        assert_eq!(t.to_string(), "T4");
    }
}
