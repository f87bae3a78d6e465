use airfield::airport::error::ErrorKind;
use airfield::logger;
use airfield::scenario::Scenario;
use airfield::tower::{Tower, TowerError};
use airfield::weather::Forecast;
use clap::Parser;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::{Context, Editor, Helper, Highlighter, Hinter, Validator};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tabled::settings::Style;

#[derive(Parser)]
struct Args {
    /// Path to the JSON scenario file
    #[arg(short, long, value_name = "FILE", default_value = "data/default.json")]
    scenario: PathBuf,

    /// Override the airport capacity from the scenario
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Seed the weather for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Log every tower decision to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Helper, Hinter, Highlighter, Validator)]
pub struct CompleteHelper {
    pub commands: Vec<String>,
}

impl Completer for CompleteHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, _pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .commands
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect();

        Ok((0, candidates))
    }
}

/// Pagers tried in order before falling back to plain output.
const PAGERS: &[(&str, &[&str])] = &[("less", &["-R"]), ("more", &[])];

/// Shows `content` through the first pager that spawns. When none exists on
/// PATH (minimal containers, some Windows shells) the content goes to `out`.
fn paginate(content: &str, pagers: &[(&str, &[&str])], out: &mut impl Write) -> std::io::Result<()> {
    let pager = pagers.iter().find_map(|(cmd, args)| {
        Command::new(cmd).args(*args).stdin(Stdio::piped()).spawn().ok()
    });

    let Some(mut pager) = pager else {
        return writeln!(out, "{}", content);
    };

    if let Some(mut stdin) = pager.stdin.take() {
        if let Err(e) = stdin.write_all(content.as_bytes()) {
            // user quit the pager early
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                eprintln!("Error writing to pager: {}", e);
            }
        }
    }

    pager.wait()?;
    Ok(())
}

fn print_fleet(tower: &Tower) {
    let mut table = tabled::Table::new(tower.fleet());
    table.with(Style::rounded());
    table.with(tabled::settings::Alignment::left());
    if tower.fleet().len() > 20 {
        if let Err(e) = paginate(&table.to_string(), PAGERS, &mut std::io::stdout()) {
            eprintln!("Error showing fleet: {}", e);
        }
    } else {
        println!("{}", table);
    }
}

fn report(err: &TowerError) {
    let msg = err.to_string();
    match err {
        TowerError::Airport(e) if e.kind() == ErrorKind::Weather => println!("{}", msg.yellow()),
        _ => println!("{}", msg.red()),
    }
}

fn print_status(tower: &Tower) {
    let airport = tower.airport();
    let weather = tower
        .forecast()
        .map(|f| f.to_string())
        .unwrap_or_else(|| "random".to_string());
    println!(
        "Grounded {}/{} | weather: {}",
        airport.len(),
        airport.capacity(),
        weather
    );
    if !airport.is_empty() {
        let planes: Vec<&str> = airport.planes().iter().map(|id| id.as_ref()).collect();
        println!("  {}", planes.join(", "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init(args.verbose);

    let mut scenario = Scenario::load_from_file(&args.scenario)?;
    if let Some(capacity) = args.capacity {
        scenario.capacity = Some(capacity);
    }
    if let Some(seed) = args.seed {
        scenario.reseed(seed);
    }
    let mut tower = Tower::from_scenario(scenario)?;
    println!(
        "Tower online. Loaded {} aircraft from {}",
        tower.fleet().len(),
        args.scenario.display()
    );

    let config = rustyline::Config::builder()
        .history_ignore_space(true)
        .completion_type(rustyline::CompletionType::List)
        .build();

    let helper = CompleteHelper {
        commands: ["ls", "land", "takeoff", "check", "weather", "status", "help", "exit"]
            .iter()
            .map(|c| c.to_string())
            .collect(),
    };

    let mut rl = Editor::with_config(config)?;
    rl.set_helper(Some(helper));

    loop {
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() { continue; }

                rl.add_history_entry(trimmed)?;

                let parts: Vec<&str> = trimmed.split_whitespace().collect();
                match parts[0] {
                    "ls" => print_fleet(&tower),
                    "land" => {
                        if let Some(id) = parts.get(1) {
                            match tower.land(id) {
                                Ok(planes) => println!("{} {} grounded", "Cleared to land.".green(), planes.len()),
                                Err(e) => report(&e),
                            }
                        } else {
                            println!("Usage: land <plane_id>");
                        }
                    },
                    "takeoff" => {
                        if let Some(id) = parts.get(1) {
                            match tower.take_off(id) {
                                Ok(msg) => println!("{}", msg.green()),
                                Err(e) => report(&e),
                            }
                        } else {
                            println!("Usage: takeoff <plane_id>");
                        }
                    },
                    "check" => {
                        if let Some(id) = parts.get(1) {
                            match tower.is_grounded(id) {
                                Ok(true) => println!("{} is in the airport", id),
                                Ok(false) => println!("{} is not in the airport", id),
                                Err(e) => report(&e),
                            }
                        } else {
                            println!("Usage: check <plane_id>");
                        }
                    },
                    "weather" => {
                        let forecast = match parts.get(1).copied() {
                            Some("clear") => Some(Some(Forecast::Clear)),
                            Some("stormy") => Some(Some(Forecast::Stormy)),
                            Some("random") => Some(None),
                            _ => None,
                        };
                        match forecast {
                            Some(forecast) => {
                                if let Err(e) = tower.set_forecast(forecast) {
                                    report(&e);
                                }
                                print_status(&tower);
                            }
                            None => println!("Usage: weather <clear|stormy|random>"),
                        }
                    },
                    "status" => print_status(&tower),
                    "help" | "?" => {
                        println!("\nAvailable Commands:");
                        println!("  ls                  - List the fleet and where each aircraft is");
                        println!("  land <id>           - Request landing for aircraft <id>");
                        println!("  takeoff <id>        - Request take off for aircraft <id>");
                        println!("  check <id>          - Report whether aircraft <id> is in the airport");
                        println!("  weather <w>         - Pin the weather: clear, stormy, or random");
                        println!("  status              - Show occupancy and weather");
                        println!("  help / ?            - Show this help menu");
                        println!("  exit / quit         - Close the tower\n");
                    },
                    "exit" | "quit" => break,
                    _ => println!("Unknown command: {}", parts[0]),
                }
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
