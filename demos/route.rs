//! Command-line route planner.
//!
//! Run: cargo run --bin route -- f2_lab7 f1_canteen
//!      cargo run --bin route -- --list
//!      cargo run --bin route -- --data my_building.json --floor f3_lift f3_lab_a

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use floorway_core::FloorSet;
use floorway_demos::{campus, room_listing};
use floorway_paths::{CostModel, RouteSummary, find_floor_route, find_route_with};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Room to start from
    start: Option<String>,

    /// Room to go to
    end: Option<String>,

    /// Building layout JSON; the bundled campus when omitted
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Print the selectable rooms and exit
    #[arg(short, long)]
    list: bool,

    /// Stay on the start room's floor
    #[arg(short, long)]
    floor: bool,

    /// Print the route segments as JSON
    #[arg(long)]
    json: bool,

    /// Distance one floor apart counts for
    #[arg(long, default_value_t = CostModel::default().floor_scale)]
    floor_scale: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let floors = match &args.data {
        Some(path) => FloorSet::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => campus().context("Failed to parse the bundled campus")?,
    };
    info!(
        "{} floors, {} rooms to choose from",
        floors.floors.len(),
        floors.selectable_rooms().len()
    );

    if args.list {
        print!("{}", room_listing(&floors));
        return Ok(());
    }

    let (Some(start), Some(end)) = (args.start.as_deref(), args.end.as_deref()) else {
        bail!("give a start and an end room, or --list to see them");
    };

    if args.floor {
        let Some(entry) = floors.locate_room(start) else {
            bail!("unknown room '{start}'");
        };
        let Some(plan) = floors.floor(entry.floor_id) else {
            bail!("unknown floor '{}'", entry.floor_id);
        };
        let path = find_floor_route(start, end, plan);
        if path.is_empty() {
            println!("no route on {}", plan.label());
        } else {
            println!("{}: {}", plan.label(), path.join(" -> "));
        }
        return Ok(());
    }

    let model = CostModel {
        floor_scale: args.floor_scale,
        ..CostModel::default()
    };
    let segments = find_route_with(start, end, &floors, &model);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&segments)?);
    } else {
        println!("{}", RouteSummary::new(&segments, &floors));
    }
    Ok(())
}
