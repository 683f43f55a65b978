//! pathviz: print one shortest-path search over a random grid.
//!
//! Usage: `pathviz [--rows=N] [--cols=N] [--density=P] [--delay=MS]
//! [--seed=N] [--algo=dijkstra|astar]`. Set `RUST_LOG=debug` for engine
//! logs.

use pathviz_lib::{Config, Visualizer, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args(std::env::args().skip(1))?;
    let mut viz = Visualizer::new(config)?;
    let outcome = viz.visualize()?;

    println!("{}", render(viz.grid(), &outcome));
    println!();
    if outcome.found {
        let last = outcome.frames.last().map_or(0, |f| f.at_ms);
        println!(
            "{}: {} steps, {} cells explored, animation {} ms",
            viz.config().algorithm,
            outcome.path.len() - 1,
            outcome.search.settled(),
            last
        );
    } else {
        println!("No path found");
    }
    Ok(())
}
