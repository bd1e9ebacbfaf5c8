//! Room-navigation driver: runs a search and renders each expansion step
//! as a 3-row text board.

use clap::{Parser, ValueEnum};
use roomnav_core::{Room, Walls};
use roomnav_search::{Outcome, Search, SearchStep, Strategy};

#[derive(Parser, Debug)]
#[command(version, about = "Best-first search over the 3x3 room grid", long_about = None)]
struct Args {
    /// Source room (A-I)
    source: char,

    /// Goal room (A-I)
    goal: char,

    /// Wall pairs blocking edges, e.g. "AD GH BC"
    #[arg(short, long, default_value = "")]
    walls: String,

    /// Search strategy
    #[arg(short, long, value_enum, default_value = "uniform-cost")]
    strategy: StrategyArg,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum StrategyArg {
    /// Lowest accumulated cost first
    UniformCost,
    /// Accumulated cost plus Manhattan estimate
    AStar,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::UniformCost => Strategy::UniformCost,
            StrategyArg::AStar => Strategy::AStar,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let source = Room::try_from(args.source)?;
    let goal = Room::try_from(args.goal)?;
    let walls = Walls::parse(&args.walls)?;
    log::debug!("{source} -> {goal} via {:?}", args.strategy);

    let search = Search::new(source, goal, &walls, args.strategy.into())?;
    let outcome = search.run(|step| print_step(step, &walls));

    println!("{}", "-".repeat(30));
    match outcome {
        Outcome::GoalReached { total_cost, .. } => {
            println!("Goal reached! Total cost: {total_cost}");
        }
        Outcome::LimitReached => println!("Expanded node limit reached."),
        Outcome::Exhausted => println!("Search exhausted without reaching the goal."),
    }
    Ok(())
}

fn print_step(step: &SearchStep, walls: &Walls) {
    print!("{}", render_board(step.room, walls));
    println!("Cost: {}", step.cost);
    println!("Path: {}", fmt_path(&step.path));
}

/// The 3-row board with the current room bracketed and rooms walled off
/// from it shown as `[#]`.
fn render_board(current: Room, walls: &Walls) -> String {
    let mut board = String::new();
    for row in Room::ALL.chunks(3) {
        for &room in row {
            if room == current {
                board.push('[');
                board.push(room.label());
                board.push(']');
            } else if walls.blocks(room, current) {
                board.push_str("[#]");
            } else {
                board.push(' ');
                board.push(room.label());
                board.push(' ');
            }
        }
        board.push('\n');
    }
    board
}

fn fmt_path(path: &[Room]) -> String {
    let mut out = String::with_capacity(path.len() * 2);
    for (i, room) in path.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        out.push(room.label());
    }
    out
}
