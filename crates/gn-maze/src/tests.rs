//! Unit tests for gn-maze.

#[cfg(test)]
mod builder {
    use gn_core::Cell;

    use crate::{GridMazeBuilder, Topology};

    #[test]
    fn open_grid_corner_has_two_moves() {
        let maze = GridMazeBuilder::new(5, 5).build();
        assert_eq!(
            maze.valid_moves(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)] // right, down
        );
    }

    #[test]
    fn centre_moves_follow_up_right_down_left() {
        let maze = GridMazeBuilder::new(3, 3).build();
        assert_eq!(
            maze.valid_moves(Cell::new(1, 1)),
            vec![Cell::new(1, 0), Cell::new(2, 1), Cell::new(1, 2), Cell::new(0, 1)]
        );
    }

    #[test]
    fn walls_block_moves() {
        let mut b = GridMazeBuilder::new(3, 3);
        b.wall(Cell::new(1, 0));
        b.wall(Cell::new(0, 1));
        let maze = b.build();
        assert!(!maze.has_moves(Cell::new(0, 0)));
        assert!(!maze.is_open(Cell::new(1, 0)));
        assert!(maze.is_open(Cell::new(0, 0)));
    }

    #[test]
    fn reopen_and_out_of_bounds() {
        let mut b = GridMazeBuilder::new(2, 2);
        b.wall(Cell::new(1, 1));
        b.open(Cell::new(1, 1));
        b.wall(Cell::new(9, 9)); // ignored
        assert!(b.marker('B', Cell::new(5, 0)).is_err());
        let maze = b.build();
        assert!(maze.is_open(Cell::new(1, 1)));
        assert!(!maze.is_open(Cell::new(-1, 0)));
        assert_eq!(maze.open_cells().count(), 4);
    }
}

#[cfg(test)]
mod ascii {
    use gn_core::Cell;

    use crate::{GridMaze, MazeError, Topology};

    const SMALL: &str = "\
#####
#B.C#
#.#.#
#o.G#
#####
";

    #[test]
    fn parses_dimensions_and_walls() {
        let maze = GridMaze::from_ascii(SMALL).unwrap();
        assert_eq!(maze.width(), 5);
        assert_eq!(maze.height(), 5);
        assert!(!maze.is_open(Cell::new(0, 0)));
        assert!(!maze.is_open(Cell::new(2, 2)));
        assert!(maze.is_open(Cell::new(1, 3))); // power pellet
        assert!(maze.is_open(Cell::new(3, 3))); // gate
    }

    #[test]
    fn markers_are_open_and_recorded() {
        let maze = GridMaze::from_ascii(SMALL).unwrap();
        assert_eq!(maze.marker('B'), Some(Cell::new(1, 1)));
        assert_eq!(maze.marker('C'), Some(Cell::new(3, 1)));
        assert_eq!(maze.marker('R'), None);
        assert!(maze.is_open(Cell::new(1, 1)));
        assert_eq!(maze.valid_moves(Cell::new(1, 1)), vec![Cell::new(2, 1), Cell::new(1, 2)]);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let maze = GridMaze::from_ascii("\n...\n\n...\n").unwrap();
        assert_eq!(maze.height(), 2);
    }

    #[test]
    fn errors() {
        assert!(matches!(GridMaze::from_ascii(""), Err(MazeError::Empty)));
        assert!(matches!(
            GridMaze::from_ascii("...\n..\n"),
            Err(MazeError::RaggedRow { row: 1, expected: 3, got: 2 })
        ));
        assert!(matches!(
            GridMaze::from_ascii("..x\n"),
            Err(MazeError::UnknownGlyph { glyph: 'x', .. })
        ));
    }
}
