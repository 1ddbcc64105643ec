use grid_search::{Algorithm, Grid, Signal};
use grid_util::point::Point;

// In this example every algorithm searches the same 8x8 grid
//  ________
// |S       |
// |####### |
// |        |
// | #######|
// |        |
// |####### |
// |       E|
// |        |
//  ________
// where
// - # marks a barrier
// - S marks the start
// - E marks the end
//
// The algorithm can be picked with its name as first argument, e.g. `cargo run --example simple bfs`.

fn main() {
    let algorithms = match std::env::args().nth(1) {
        Some(name) => match name.parse::<Algorithm>() {
            Ok(algorithm) => vec![algorithm],
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        },
        None => Algorithm::ALL.to_vec(),
    };
    let mut layout = Grid::new(8, 800).unwrap();
    layout.paint(Point::new(0, 0)).unwrap();
    layout.paint(Point::new(6, 7)).unwrap();
    for y in 0..7 {
        layout.paint(Point::new(1, y)).unwrap();
        layout.paint(Point::new(3, y + 1)).unwrap();
        layout.paint(Point::new(5, y)).unwrap();
    }
    println!("{}", layout);
    for algorithm in algorithms {
        let mut grid = layout.clone();
        let mut steps = 0;
        let outcome = grid
            .run(algorithm, &mut |_: &Grid| {
                steps += 1;
                Signal::Continue
            })
            .unwrap();
        match outcome.path() {
            Some(path) => println!("{}: path of {} moves after {} steps", algorithm, path.len(), steps),
            None => println!("{}: {:?} after {} steps", algorithm, outcome, steps),
        }
        println!("{}", grid);
    }
}
