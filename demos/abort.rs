use grid_search::{Algorithm, CellRole, Grid, Signal};
use grid_util::point::Point;

// Shows the exploration frame by frame, the way a window would redraw after every step, and
// stops the search after a handful of frames as if the window had been closed.

fn main() {
    let mut grid = Grid::new(6, 600).unwrap();
    grid.set_role(Point::new(0, 0), CellRole::Start).unwrap();
    grid.set_role(Point::new(5, 5), CellRole::End).unwrap();
    let mut frame = 0;
    let outcome = grid
        .run(Algorithm::Bfs, &mut |g: &Grid| {
            frame += 1;
            println!("Frame {}:\n{}", frame, g);
            if frame == 4 {
                Signal::Abort
            } else {
                Signal::Continue
            }
        })
        .unwrap();
    println!("{:?}", outcome);
}
