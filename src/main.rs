use std::collections::HashMap;

use clap::Parser;

use city_generator::ascii;
use city_generator::export;
use city_generator::lights::LightCategory;
use city_generator::{CityPlan, CitySeeds, CityWorld, GenConfig};

#[derive(Parser, Debug)]
#[command(name = "city_generator")]
#[command(about = "Generate procedural isometric city tile grids")]
struct Args {
    /// Width of the grid in tiles
    #[arg(short = 'W', long, default_value = "300")]
    width: usize,

    /// Height of the grid in tiles
    #[arg(short = 'H', long, default_value = "300")]
    height: usize,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the map as ASCII to stdout
    #[arg(long)]
    ascii: bool,

    /// Export the map to a PNG file (one pixel per tile)
    #[arg(long)]
    export_map: Option<String>,

    /// Export the ASCII map to a text file
    #[arg(long)]
    export_ascii: Option<String>,

    /// Export the light catalog as JSON
    #[arg(long)]
    export_lights: Option<String>,

    /// Print tile histogram, light counts and walkable coverage
    #[arg(long)]
    stats: bool,
}

fn main() {
    let args = Args::parse();

    let seeds = match args.seed {
        Some(master) => CitySeeds::from_master(master),
        None => CitySeeds::default(),
    };
    println!("Generating {}x{} city, seed {}", args.width, args.height, seeds.master);

    let plan = CityPlan::reference_city();
    let config = GenConfig::default();
    let world = CityWorld::generate(args.width, args.height, seeds, &plan, &config);

    println!("  {} light sources derived", world.lights().len());

    if args.ascii {
        print!("{}", ascii::render_grid(world.grid()));
    }

    if let Some(path) = &args.export_ascii {
        match ascii::export_ascii(world.grid(), path) {
            Ok(()) => println!("  ASCII map written to {path}"),
            Err(e) => eprintln!("  failed to write {path}: {e}"),
        }
    }

    if let Some(path) = &args.export_map {
        match export::export_map(&world, path) {
            Ok(()) => println!("  map PNG written to {path}"),
            Err(e) => eprintln!("  failed to write {path}: {e}"),
        }
    }

    if let Some(path) = &args.export_lights {
        match export::export_lights(&world, path) {
            Ok(()) => println!("  light catalog written to {path}"),
            Err(e) => eprintln!("  failed to write {path}: {e}"),
        }
    }

    if args.stats {
        print_stats(&world, &plan);
    }
}

fn print_stats(world: &CityWorld, plan: &CityPlan) {
    let (width, height) = world.dimensions();

    let mut histogram: HashMap<&'static str, usize> = HashMap::new();
    for (_, _, tile) in world.grid().iter() {
        *histogram.entry(tile.display_name()).or_insert(0) += 1;
    }
    let mut rows: Vec<_> = histogram.into_iter().collect();
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    println!("\nTile histogram ({width}x{height}):");
    for (name, count) in rows {
        let pct = 100.0 * count as f64 / (width * height) as f64;
        println!("  {name:<18} {count:>7}  {pct:>5.1}%");
    }

    let mut per_category: HashMap<LightCategory, usize> = HashMap::new();
    for light in world.lights() {
        *per_category.entry(light.category).or_insert(0) += 1;
    }
    let mut light_rows: Vec<_> = per_category.into_iter().collect();
    light_rows.sort_by(|a, b| b.1.cmp(&a.1));
    println!("\nLights:");
    for (category, count) in light_rows {
        println!("  {category:<12?} {count:>6}");
    }

    println!("\nNamed streets:");
    for name in plan.street_names() {
        println!("  {name}");
    }

    let coverage = world.walkable_coverage();
    println!("\nWalkable coverage from spawn: {:.1}%", coverage * 100.0);
}
