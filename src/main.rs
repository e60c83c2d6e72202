//! Hearthvale - Entry Point
//!
//! Interactive console harness for the simulation engine: advance ticks,
//! inspect agents, trigger social interactions, save and load. Front ends
//! with real rendering drive the same [`World`] API this loop does.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use hearthvale::core::error::Result;
use hearthvale::social::InteractionKind;
use hearthvale::world::{ControlMode, PlayerConfig, World};

#[derive(Parser, Debug)]
#[command(name = "hearthvale", about = "Village life simulation console")]
struct Args {
    /// World generation seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Player character name
    #[arg(long, default_value = "Player")]
    name: String,

    /// Load this save instead of creating a new world
    #[arg(long)]
    load: Option<PathBuf>,

    /// Default path for the save/load commands
    #[arg(long, default_value = "savegame.json")]
    save_path: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("hearthvale=info")),
        )
        .init();

    let args = Args::parse();

    let player = PlayerConfig { name: args.name.clone(), ..PlayerConfig::default() };
    let mut world = World::village(player, args.seed)?;
    if let Some(path) = &args.load {
        world.load_from_file(path)?;
        tracing::info!(?path, "loaded save");
    }

    println!("\n=== HEARTHVALE ===");
    println!("A village life simulation with autonomous scheduled agents");
    println!();
    println!("Commands:");
    println!("  tick / t              - Advance one tick");
    println!("  run <n>               - Advance n ticks");
    println!("  walk <dx> <dy> <n>    - Move the player manually for n ticks");
    println!("  status / s            - Show the clock and the player");
    println!("  agents                - List the roster");
    println!("  info <name>           - What the player knows about an agent");
    println!("  interact <name> <1-3> - Chat / Flirt / Insult someone");
    println!("  meet <1-3>            - Interact with whoever is closest");
    println!("  possess <name>        - Take control of another agent");
    println!("  reroll <name>         - Reroll an agent's stats");
    println!("  log                   - Recent interaction log");
    println!("  save / load [path]    - Persist or restore the world");
    println!("  quit / q              - Exit");
    println!();

    loop {
        display_status(&world);
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "quit" | "q" => break,
            "tick" | "t" => world.update(1.0, ControlMode::Spectator),
            "run" => {
                let ticks = parts.get(1).and_then(|s| s.parse::<u32>().ok()).unwrap_or(1);
                for _ in 0..ticks {
                    world.update(1.0, ControlMode::Spectator);
                }
                println!("Ran {ticks} ticks.");
            }
            "walk" => match parse_walk(&parts) {
                Some((dx, dy, ticks)) => {
                    for _ in 0..ticks {
                        world.move_player(dx, dy, false);
                        world.update(1.0, ControlMode::Normal);
                    }
                }
                None => println!("Usage: walk <dx> <dy> <ticks>  (dx/dy in -1..=1)"),
            },
            "status" | "s" => display_player(&world),
            "agents" => display_roster(&world),
            "info" => match parts.get(1).and_then(|name| find_agent(&world, name)) {
                Some(index) => display_info(&world, index),
                None => println!("No such agent."),
            },
            "interact" => run_interaction(&mut world, &parts),
            "meet" => run_meet(&mut world, &parts),
            "possess" => match parts.get(1).and_then(|name| find_agent(&world, name)) {
                Some(index) => {
                    world.possess(index);
                    println!("You are now {}.", world.agents()[index].name);
                }
                None => println!("No such agent."),
            },
            "reroll" => match parts.get(1).and_then(|name| find_agent(&world, name)) {
                Some(index) => {
                    world.reroll_agent_stats(index);
                    println!("Stats rerolled for {}.", world.agents()[index].name);
                }
                None => println!("No such agent."),
            },
            "log" => {
                for entry in world.interaction_log().rev().take(10).collect::<Vec<_>>().into_iter().rev() {
                    println!("  {entry}");
                }
            }
            "save" => {
                let path = parts.get(1).map(PathBuf::from).unwrap_or(args.save_path.clone());
                match world.save_to_file(&path) {
                    Ok(()) => println!("Saved to {}.", path.display()),
                    Err(e) => println!("Save failed: {e}"),
                }
            }
            "load" => {
                let path = parts.get(1).map(PathBuf::from).unwrap_or(args.save_path.clone());
                match world.load_from_file(&path) {
                    Ok(()) => println!("Loaded {}.", path.display()),
                    Err(e) => println!("Load failed: {e}"),
                }
            }
            _ => println!("Unknown command: {command}"),
        }
    }

    Ok(())
}

fn parse_walk(parts: &[&str]) -> Option<(i8, i8, u32)> {
    let dx: i8 = parts.get(1)?.parse().ok()?;
    let dy: i8 = parts.get(2)?.parse().ok()?;
    let ticks: u32 = parts.get(3)?.parse().ok()?;
    if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) {
        return None;
    }
    Some((dx, dy, ticks))
}

fn find_agent(world: &World, name: &str) -> Option<usize> {
    world
        .agents()
        .iter()
        .position(|a| a.name.eq_ignore_ascii_case(name))
}

fn run_interaction(world: &mut World, parts: &[&str]) {
    let Some(actor) = world.player_index() else {
        println!("No player agent.");
        return;
    };
    let Some(choice) = parts.get(2).and_then(|s| s.parse::<u8>().ok()) else {
        println!("Usage: interact <name> <1|2|3>");
        return;
    };
    let Some(target) = parts.get(1).and_then(|name| find_agent(world, name)) else {
        println!("No such agent.");
        return;
    };
    match world.resolve_manual(actor, target, choice) {
        Some((kind, line)) => {
            let verb = match kind {
                InteractionKind::Chat => "say",
                InteractionKind::Flirt => "purr",
                InteractionKind::Insult => "snap",
            };
            println!("You {verb}: {line}");
        }
        None => println!("Nothing happens."),
    }
}

fn run_meet(world: &mut World, parts: &[&str]) {
    let Some(actor) = world.player_index() else {
        println!("No player agent.");
        return;
    };
    let Some(choice) = parts.get(1).and_then(|s| s.parse::<u8>().ok()) else {
        println!("Usage: meet <1|2|3>");
        return;
    };
    let Some(target) = world.closest_to(actor, 60.0) else {
        println!("Nobody close enough.");
        return;
    };
    let name = world.agents()[target].name.clone();
    match world.resolve_manual(actor, target, choice) {
        Some((kind, line)) => println!("You ({kind}) to {name}: {line}"),
        None => println!("Nothing happens."),
    }
}

fn display_status(world: &World) {
    let clock = world.clock();
    println!(
        "\n[Day {} | {:.0}/1200 | {} agents | {}]",
        clock.day(),
        clock.time_of_day(),
        world.agents().len(),
        if clock.is_night() { "night" } else { "day" },
    );
}

fn display_player(world: &World) {
    let Some(player) = world.player() else {
        println!("No player agent.");
        return;
    };
    println!(
        "{} the {} {} ({}), at ({:.0}, {:.0}), task {}",
        player.name,
        player.race,
        player.job,
        player.personality,
        player.position.x,
        player.position.y,
        player.job_state.task.as_str(),
    );
    let stats = &player.stats;
    println!(
        "  social {} intellect {} strength {} joy {} libido {} work_ethic {}",
        stats.social, stats.intellect, stats.strength, stats.joy, stats.libido, stats.work_ethic
    );
}

fn display_roster(world: &World) {
    for agent in world.agents() {
        let marker = if agent.is_player { "*" } else { " " };
        let speech = agent.speech_text.as_deref().unwrap_or("");
        println!(
            "{marker} {:<8} {:<10} {:<10} ({:>4.0},{:>4.0}) {:<7} {speech}",
            agent.name,
            agent.race.as_str(),
            agent.job.as_str(),
            agent.position.x,
            agent.position.y,
            agent.job_state.task.as_str(),
        );
    }
}

fn display_info(world: &World, index: usize) {
    let Some(player) = world.player() else {
        println!("No player agent.");
        return;
    };
    let info = world.agents()[index].known_info(player);
    let job = info.job.map_or("???".to_string(), |j| j.to_string());
    let personality = info.personality.map_or("???".to_string(), |p| p.to_string());
    let status = info.status.map_or("Self".to_string(), |s| s.to_string());
    println!("{} - {} - job: {job} - type: {personality} - {status}", info.name, info.race);
}
