//! Paddock - Entry Point
//!
//! Interactive driver for the farm simulation. It sets up logging, builds a
//! session from the CLI arguments, then runs a command loop for advancing
//! ticks, shopping, caring for animals and bulldozing.

use clap::Parser;
use paddock::catalog::placeables::PlaceableRegistry;
use paddock::core::config::SimulationConfig;
use paddock::core::error::Result;
use paddock::game::{GameState, DEFAULT_MAP_SIZE};
use paddock::shop;
use paddock::simulation::tick::run_tick;
use paddock::ui::state::{HudLog, LogCategory};

use std::io::{self, Write};
use std::path::PathBuf;

/// Fixed frame delta for REPL ticks, matching 60 fps
const FRAME_DT: f32 = 0.016;

#[derive(Parser, Debug)]
#[command(name = "paddock")]
#[command(about = "Tile-based farm and zoo simulation")]
struct Args {
    /// Seed for the session rng (same seed, same session)
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Map width in tiles
    #[arg(long, default_value_t = DEFAULT_MAP_SIZE.0)]
    width: u32,

    /// Map height in tiles
    #[arg(long, default_value_t = DEFAULT_MAP_SIZE.1)]
    height: u32,

    /// Starting money override
    #[arg(long)]
    money: Option<f64>,

    /// Extra item definitions (TOML) layered over the built-ins
    #[arg(long)]
    items: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("paddock=info")
        .init();

    let args = Args::parse();

    let mut config = SimulationConfig::default();
    if let Some(money) = args.money {
        config.starting_money = money;
    }
    let registry = match &args.items {
        Some(path) => PlaceableRegistry::from_toml_file(path)?,
        None => PlaceableRegistry::builtin(),
    };

    let mut state =
        GameState::new_session(args.seed, (args.width, args.height), config, registry)?;
    let mut log = HudLog::new();

    println!("\n=== PADDOCK ===");
    println!("A tile-based farm and zoo simulation");
    println!();
    println!("Commands:");
    println!("  tick / t                  - Advance simulation by one frame");
    println!("  run <n>                   - Run n frames");
    println!("  status / s                - Show money, income and map summary");
    println!("  animals                   - List every animal with stats");
    println!("  place <item> <x> <y>      - Buy and place a prop");
    println!("  fence <x> <y> <w> <h>     - Buy and place an enclosure");
    println!("  buy <species> <pen#>      - Buy an animal into enclosure #");
    println!("  feed <pen#> <animal#> <n> - Feed an animal (also: water, play, heal)");
    println!("  bulldoze <x> <y>          - Demolish whatever sits at (x, y)");
    println!("  scatter                   - Sprinkle more free decorations");
    println!("  log                       - Show recent purchases and demolitions");
    println!("  move <dx> <dy>            - Nudge the player/camera");
    println!("  quit / q                  - Exit");
    println!();

    loop {
        display_status(&state);

        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        let input = input.trim();

        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        if input == "tick" || input == "t" {
            run_tick(&mut state, FRAME_DT);
            println!("Tick {} complete.", state.tick);
            continue;
        }

        if input == "status" || input == "s" {
            display_detailed_status(&state);
            continue;
        }

        if input == "animals" {
            display_animals(&state);
            continue;
        }

        if input == "scatter" {
            let pool = state.registry.decoration_pool();
            let placed = state.map.scatter_decorations(
                5,
                10,
                &pool,
                &state.registry,
                &state.config,
                &mut state.rng,
            );
            println!("Scattered {} decorations.", placed);
            continue;
        }

        if input == "log" {
            for entry in log.entries() {
                println!("  [tick {}] {:?}: {}", entry.tick, entry.category, entry.message);
            }
            if log.is_empty() {
                println!("  (nothing yet)");
            }
            continue;
        }

        let parts: Vec<&str> = input.split_whitespace().collect();
        match parts.as_slice() {
            ["run", n] => match n.parse::<u32>() {
                Ok(n) => {
                    for _ in 0..n {
                        run_tick(&mut state, FRAME_DT);
                    }
                    println!("Completed {} frames. Now at tick {}.", n, state.tick);
                }
                Err(_) => println!("Usage: run <number>"),
            },
            ["place", name, x, y] => match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => {
                    let result = shop::buy_prop(&mut state, name, x, y)
                        .map(|id| format!("Placed {} at ({}, {}) [{:?}]", name, x, y, id));
                    report(&mut log, state.tick, LogCategory::Purchase, result);
                }
                _ => println!("Usage: place <item> <x> <y>"),
            },
            ["fence", x, y, w, h] => match (x.parse(), y.parse(), w.parse(), h.parse()) {
                (Ok(x), Ok(y), Ok(w), Ok(h)) => {
                    let result = shop::buy_enclosure(&mut state, x, y, w, h).map(|id| {
                        format!("Built a {}x{} enclosure at ({}, {}) [{:?}]", w, h, x, y, id)
                    });
                    report(&mut log, state.tick, LogCategory::Purchase, result);
                }
                _ => println!("Usage: fence <x> <y> <w> <h>"),
            },
            ["buy", species, pen] => match parse_pen(&state, pen) {
                Some(id) => {
                    let result = shop::buy_animal(&mut state, species, id)
                        .map(|animal| format!("A new {} settles in [{:?}]", species, animal));
                    report(&mut log, state.tick, LogCategory::Purchase, result);
                }
                None => println!("No such enclosure (see status for pen numbers)"),
            },
            [action @ ("feed" | "water" | "play" | "heal"), pen, animal, amount] => {
                match (parse_pen(&state, pen), animal.parse::<usize>(), amount.parse::<f32>()) {
                    (Some(id), Ok(index), Ok(amount)) => {
                        care(&mut state, action, id, index, amount)
                    }
                    _ => println!("Usage: {} <pen#> <animal#> <amount>", action),
                }
            }
            ["bulldoze", x, y] => match (x.parse(), y.parse()) {
                (Ok(x), Ok(y)) => {
                    let result = shop::bulldoze(&mut state, x, y)
                        .map(|fee| format!("Demolished for a {:.0} fee", fee));
                    report(&mut log, state.tick, LogCategory::Demolition, result);
                }
                _ => println!("Usage: bulldoze <x> <y>"),
            },
            ["move", dx, dy] => match (dx.parse::<f32>(), dy.parse::<f32>()) {
                (Ok(dx), Ok(dy)) => {
                    state.player.move_by(dx, dy, FRAME_DT);
                    println!(
                        "Player at ({:.1}, {:.1})",
                        state.player.position.x, state.player.position.y
                    );
                }
                _ => println!("Usage: move <dx> <dy>"),
            },
            _ => println!("Unknown command: {}", input),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Resolve a pen number (index into the enclosure list) to its id
fn parse_pen(state: &GameState, raw: &str) -> Option<paddock::core::types::PlaceableId> {
    let index: usize = raw.parse().ok()?;
    state.map.enclosures().get(index).map(|enclosure| enclosure.id)
}

fn report(
    log: &mut HudLog,
    tick: u64,
    category: LogCategory,
    result: shop::ShopResult<String>,
) {
    match result {
        Ok(message) => {
            println!("{}", message);
            log.push(tick, category, message);
        }
        Err(error) => println!("Cannot do that: {}", error),
    }
}

fn care(
    state: &mut GameState,
    action: &str,
    pen: paddock::core::types::PlaceableId,
    index: usize,
    amount: f32,
) {
    let Some(enclosure) = state.map.enclosure_mut(pen) else {
        println!("No such enclosure");
        return;
    };
    let Some(animal) = enclosure.animals_mut().get_mut(index) else {
        println!("No such animal in that pen");
        return;
    };
    match action {
        "feed" => animal.vitals.feed(amount),
        "water" => animal.vitals.give_water(amount),
        "play" => animal.vitals.play(amount),
        _ => animal.vitals.heal(amount),
    }
    println!(
        "{} #{}: hunger {:.0}, thirst {:.0}, happiness {:.0}, health {:.0}",
        animal.species, index, animal.vitals.hunger, animal.vitals.thirst,
        animal.vitals.happiness, animal.vitals.health
    );
}

fn display_status(state: &GameState) {
    println!(
        "\n[tick {}] money: {:.0} (+{:.1}/s) | pens: {} | animals: {} | props: {}",
        state.tick,
        state.economy.money,
        state.economy.income_per_second,
        state.map.enclosures().len(),
        state.animal_count(),
        state.map.props().len(),
    );
}

fn display_detailed_status(state: &GameState) {
    display_status(state);
    for (index, enclosure) in state.map.enclosures().iter().enumerate() {
        println!(
            "  pen #{index}: {}x{} at ({}, {}), {}/{} animals",
            enclosure.width,
            enclosure.height,
            enclosure.x,
            enclosure.y,
            enclosure.animals().len(),
            enclosure.max_animals,
        );
    }
    for prop in state.map.props() {
        println!("  prop: {} at ({}, {})", prop.name, prop.x, prop.y);
    }
}

fn display_animals(state: &GameState) {
    for (pen, enclosure) in state.map.enclosures().iter().enumerate() {
        for (index, animal) in enclosure.animals().iter().enumerate() {
            println!(
                "  pen #{} animal #{}: {} at ({:.1}, {:.1}) {:?} [{} f{}] hunger {:.0} thirst {:.0} happy {:.0} health {:.0}",
                pen,
                index,
                animal.species,
                animal.position.x,
                animal.position.y,
                animal.direction,
                animal.current_animation().name(),
                animal.frame,
                animal.vitals.hunger,
                animal.vitals.thirst,
                animal.vitals.happiness,
                animal.vitals.health,
            );
        }
    }
    if state.animal_count() == 0 {
        println!("  (no animals yet)");
    }
}
