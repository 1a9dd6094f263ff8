use grid_astar::{find_path, format_path, Cell, Heuristic, PathingGrid};
use grid_util::grid::ValueGrid;

// In this example a path is found on a 5x5 grid with shape
//  _____
// |S    |
// | ### |
// |     |
// | ### |
// |    E|
//  _____
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut pathing_grid: PathingGrid = PathingGrid::new(5, 5, false);
    for row in [1, 3] {
        for col in 1..=3 {
            pathing_grid.set_blocked(Cell::new(row, col), true);
        }
    }
    pathing_grid.generate_components();
    print!("{}", pathing_grid);
    let start = Cell::new(0, 0);
    let end = Cell::new(4, 4);
    for heuristic in [Heuristic::Euclidean, Heuristic::Manhattan] {
        let path = find_path(&pathing_grid, start, end, heuristic).unwrap();
        println!("Path ({heuristic}, {} cells):", path.len());
        println!("{}", format_path(&path));
    }
}
