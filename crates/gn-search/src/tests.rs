//! Unit tests for gn-search.
//!
//! All tests use hand-built mazes so expected routes can be traced by hand.

#[cfg(test)]
mod helpers {
    use gn_core::Cell;
    use gn_maze::{GridMaze, GridMazeBuilder, Topology};

    pub fn open(w: u32, h: u32) -> GridMaze {
        GridMazeBuilder::new(w, h).build()
    }

    /// 5 × 3 grid split by a full wall in column 2.
    ///
    /// ```text
    /// ..#..
    /// ..#..
    /// ..#..
    /// ```
    pub fn split() -> GridMaze {
        let mut b = GridMazeBuilder::new(5, 3);
        for row in 0..3 {
            b.wall(Cell::new(2, row));
        }
        b.build()
    }

    /// 3 × 3 grid whose bottom-right corner is open but boxed in.
    pub fn boxed_corner() -> GridMaze {
        let mut b = GridMazeBuilder::new(3, 3);
        b.wall(Cell::new(2, 1));
        b.wall(Cell::new(1, 2));
        b.build()
    }

    /// 19 × 9 walled maze with dead ends, loops and a closed-off border.
    pub fn walled() -> GridMaze {
        GridMaze::from_ascii(
            "
###################
#........#........#
#.##.###.#.###.##.#
#.................#
#.##.#.#####.#.##.#
#....#.......#....#
####.###.#.###.####
#........#........#
###################
",
        )
        .unwrap()
    }

    /// A faulty topology that only offers diagonal moves.
    pub struct Diagonal;

    impl Topology for Diagonal {
        fn valid_moves(&self, cell: Cell) -> Vec<Cell> {
            vec![Cell::new(cell.col + 1, cell.row + 1)]
        }
    }
}

// ── Properties shared by every strategy ───────────────────────────────────────

#[cfg(test)]
mod shared {
    use gn_core::Cell;

    use gn_maze::Topology;

    use super::helpers::{boxed_corner, open, split, walled, Diagonal};
    use crate::{Route, SearchError, Strategy};

    const CAP: usize = 30;

    #[test]
    fn optimal_strategies_agree_on_length() {
        let maze = open(5, 5);
        let (start, goal) = (Cell::new(0, 0), Cell::new(4, 4));
        for s in [Strategy::BreadthFirst, Strategy::UniformCost, Strategy::AStar] {
            let out = s.search(&maze, start, goal, CAP).unwrap();
            assert!(out.found, "{s} should find the goal");
            assert_eq!(out.route.len(), 8, "{s} route length");
        }
    }

    #[test]
    fn routes_exclude_start_and_are_walkable() {
        let maze = open(5, 5);
        let (start, goal) = (Cell::new(0, 0), Cell::new(4, 4));
        for s in Strategy::ALL {
            let out = s.search(&maze, start, goal, CAP).unwrap();
            assert!(out.found, "{s}");
            assert!(!out.route.contains(start), "{s} route contains start");
            assert!(out.route.is_walkable_from(start), "{s} route has a gap");
            assert_eq!(out.route.destination(), Some(goal), "{s}");
            assert!(out.peak_memory_bytes > 0, "{s}");
            assert!(out.peak_frontier > 0, "{s}");
        }
    }

    /// Every step of `route` is a move `topology` offers from the cell before.
    fn follows_topology<T: Topology>(topology: &T, start: Cell, route: &Route) -> bool {
        let mut prev = start;
        route.iter().all(|cell| {
            let ok = topology.valid_moves(prev).contains(&cell);
            prev = cell;
            ok
        })
    }

    #[test]
    fn all_pairs_in_walled_maze() {
        let maze = walled();
        let cells: Vec<Cell> = maze.open_cells().collect();
        for &start in &cells {
            for &goal in &cells {
                let mut optimal_len = None;
                for s in [Strategy::BreadthFirst, Strategy::UniformCost, Strategy::AStar] {
                    let out = s.search(&maze, start, goal, CAP).unwrap();
                    assert!(out.found, "{s} {start} -> {goal}");
                    assert!(!out.route.contains(start), "{s} {start} -> {goal}");
                    assert!(follows_topology(&maze, start, &out.route), "{s} {start} -> {goal}");
                    assert_eq!(
                        *optimal_len.get_or_insert(out.route.len()),
                        out.route.len(),
                        "{s} {start} -> {goal}"
                    );
                }

                let dfs = Strategy::DepthFirst.search(&maze, start, goal, CAP).unwrap();
                assert!(dfs.route.len() < CAP, "DFS {start} -> {goal}");
                assert!(!dfs.route.contains(start), "DFS {start} -> {goal}");
                assert!(follows_topology(&maze, start, &dfs.route), "DFS {start} -> {goal}");
                if dfs.found {
                    assert!(dfs.route.len() >= optimal_len.unwrap_or(0));
                    assert_eq!(dfs.route.destination().unwrap_or(start), goal);
                }
            }
        }
    }

    #[test]
    fn isolated_goal_is_rejected_without_expansion() {
        let maze = boxed_corner();
        for s in Strategy::ALL {
            let out = s.search(&maze, Cell::new(0, 0), Cell::new(2, 2), CAP).unwrap();
            assert!(!out.found);
            assert!(out.route.is_empty());
            assert_eq!(out.nodes_expanded, 0, "{s}");
        }
    }

    #[test]
    fn isolated_start_equal_to_goal_is_not_rejected() {
        let maze = boxed_corner();
        let corner = Cell::new(2, 2);
        for s in Strategy::ALL {
            let out = s.search(&maze, corner, corner, CAP).unwrap();
            assert!(out.found, "{s}");
            assert!(out.route.is_empty());
            assert_eq!(out.nodes_expanded, 1, "{s}");
        }
    }

    #[test]
    fn unreachable_goal_exhausts_reachable_cells() {
        let maze = split();
        for s in Strategy::ALL {
            let out = s.search(&maze, Cell::new(0, 0), Cell::new(4, 1), CAP).unwrap();
            assert!(!out.found, "{s}");
            assert!(out.route.is_empty());
            // Columns 0 and 1: six reachable cells, each expanded once.
            assert_eq!(out.nodes_expanded, 6, "{s}");
        }
    }

    #[test]
    fn non_adjacent_move_is_a_fault() {
        for s in Strategy::ALL {
            let err = s.search(&Diagonal, Cell::new(0, 0), Cell::new(5, 5), CAP).unwrap_err();
            assert!(matches!(err, SearchError::NonAdjacentMove { .. }), "{s}");
        }
    }
}

// ── Per-strategy traces ───────────────────────────────────────────────────────

#[cfg(test)]
mod traces {
    use gn_core::Cell;

    use super::helpers::open;
    use crate::route::Route;
    use crate::{astar::astar, bfs::bfs, ucs::ucs};

    fn cells(v: &[(i32, i32)]) -> Route {
        v.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn bfs_prefers_rightward_discovery() {
        // (1,0) is dequeued before (0,1) and discovers (1,1) first.
        let out = bfs(&open(3, 3), Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(out.route, cells(&[(1, 0), (1, 1)]));
    }

    #[test]
    fn ucs_breaks_cost_ties_by_cell() {
        // (0,1) < (1,0) in (col, row) order, so it is popped first and its
        // child entry for (1,1) wins.  Stale pops of (0,0) are not counted.
        let out = ucs(&open(3, 3), Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(out.route, cells(&[(0, 1), (1, 1)]));
        assert_eq!(out.nodes_expanded, 5);
    }

    #[test]
    fn astar_expands_fewer_nodes_than_ucs() {
        let out = astar(&open(3, 3), Cell::new(0, 0), Cell::new(1, 1)).unwrap();
        assert_eq!(out.route, cells(&[(0, 1), (1, 1)]));
        assert_eq!(out.nodes_expanded, 4);
    }

    #[test]
    fn astar_heads_straight_down_a_corridor() {
        let out = astar(&open(10, 1), Cell::new(0, 0), Cell::new(9, 0)).unwrap();
        assert_eq!(out.route.len(), 9);
        assert_eq!(out.nodes_expanded, 10);
    }
}

// ── Depth cap ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod depth_cap {
    use gn_core::Cell;

    use super::helpers::open;
    use crate::dfs::dfs;

    #[test]
    fn route_of_cap_minus_one_steps_is_found() {
        let corridor = open(40, 1);
        let out = dfs(&corridor, Cell::new(0, 0), Cell::new(29, 0), 30).unwrap();
        assert!(out.found);
        assert_eq!(out.route.len(), 29);
    }

    #[test]
    fn route_longer_than_cap_is_pruned() {
        let corridor = open(40, 1);
        let out = dfs(&corridor, Cell::new(0, 0), Cell::new(30, 0), 30).unwrap();
        assert!(!out.found);
        assert!(out.route.is_empty());
        // Cells 0..=28 are expanded; (29, 0) is popped at the cap and pruned.
        assert_eq!(out.nodes_expanded, 29);
    }

    #[test]
    fn never_exceeds_cap_on_open_grid() {
        let maze = open(12, 12);
        for goal in [Cell::new(11, 11), Cell::new(0, 11), Cell::new(6, 6)] {
            let out = dfs(&maze, Cell::new(0, 0), goal, 30).unwrap();
            assert!(out.route.len() <= 29, "goal {goal}: {} steps", out.route.len());
            if out.found {
                assert!(out.route.is_walkable_from(Cell::new(0, 0)));
            }
        }
    }

    #[test]
    fn small_open_grid_is_fully_explorable() {
        let out = dfs(&open(5, 5), Cell::new(0, 0), Cell::new(4, 4), 30).unwrap();
        assert!(out.found);
        assert!(out.route.len() >= 8);
    }
}

// ── Strategy names ────────────────────────────────────────────────────────────

#[cfg(test)]
mod names {
    use crate::{SearchError, Strategy};

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("bfs".parse::<Strategy>().unwrap(), Strategy::BreadthFirst);
        assert_eq!("DFS".parse::<Strategy>().unwrap(), Strategy::DepthFirst);
        assert_eq!(" ucs ".parse::<Strategy>().unwrap(), Strategy::UniformCost);
        assert_eq!("A*".parse::<Strategy>().unwrap(), Strategy::AStar);
        assert_eq!("astar".parse::<Strategy>().unwrap(), Strategy::AStar);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = "greedy".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, SearchError::UnknownStrategy(ref s) if s == "greedy"));
    }

    #[test]
    fn display_round_trips() {
        for s in Strategy::ALL {
            assert_eq!(s.to_string().parse::<Strategy>().unwrap(), s);
        }
    }
}
