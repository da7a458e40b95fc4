use cyclecube::prelude::*;

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    let initial: CubeState = "2 1 1 3".parse()?;
    let attacks = AttackMap::new([
        (1, vec![1, 2]),
        (2, vec![2, 3, 1]),
        (3, vec![3, 2, 4]),
        (4, vec![4, 3]),
    ])?;
    let request = SearchRequest::new(initial, attacks, SearchRequest::DEFAULT_MAX_STEPS)?;

    let solver = Solver::new(Strategy::Threaded);
    match solver.solve(&request)? {
        Outcome::Solved { attacks, state } => {
            println!("attacks: {:?}", attacks);
            println!("final state: {}", state);
        }
        Outcome::NotFound => println!("no solution within the step budget"),
    }

    Ok(())
}
