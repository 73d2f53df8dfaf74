// Copyright (C) 2020-2026 Andy Kurnia.

use wordtiles::{display, error, game_config, game_state, lexicon, rlhelper};

static HELP: &str = "commands:
  show                  print the board and tray
  json                  print the game state as json
  select i              select (or unselect) tray tile i
  place i x y           place tray tile i at column x, row y
  place x y             place the selected tile
  withdraw x y          take a pending tile back to the tray
  move x y x2 y2        move a pending tile
  trade [i...]          trade tray tiles (default: the selected tile)
  recall                take all pending tiles back
  end                   score and commit this turn
  check WORD            look up a word
  source FILE           run commands from a file
  exit";

fn parse_args<T: std::str::FromStr>(args: &[String]) -> Option<Vec<T>> {
    args.iter().map(|arg| arg.parse::<T>().ok()).collect()
}

// None means the arguments did not make a command.
fn parse_command(
    session: &game_state::GameSession,
    name: &str,
    args: &[String],
) -> Option<game_state::Command> {
    match (name, args.len()) {
        ("select", 1) => {
            let v = parse_args::<usize>(args)?;
            Some(game_state::Command::Select { tray_index: v[0] })
        }
        ("place", 3) => {
            let tray_index = args[0].parse::<usize>().ok()?;
            let v = parse_args::<i8>(&args[1..])?;
            Some(game_state::Command::Place {
                tray_index,
                x: v[0],
                y: v[1],
            })
        }
        ("place", 2) => {
            let v = parse_args::<i8>(args)?;
            Some(game_state::Command::Place {
                tray_index: session.selected()?,
                x: v[0],
                y: v[1],
            })
        }
        ("withdraw", 2) => {
            let v = parse_args::<i8>(args)?;
            Some(game_state::Command::Withdraw { x: v[0], y: v[1] })
        }
        ("move", 4) => {
            let v = parse_args::<i8>(args)?;
            Some(game_state::Command::Move {
                from_x: v[0],
                from_y: v[1],
                to_x: v[2],
                to_y: v[3],
            })
        }
        ("trade", 0) => Some(game_state::Command::Trade {
            tray_indices: session.selected().into_iter().collect(),
        }),
        ("trade", _) => Some(game_state::Command::Trade {
            tray_indices: parse_args::<usize>(args)?,
        }),
        ("recall", 0) => Some(game_state::Command::Recall),
        ("end", 0) => Some(game_state::Command::EndTurn),
        _ => None,
    }
}

fn load_config(path: Option<&String>) -> error::Returns<game_config::GameConfig> {
    match path {
        Some(path) => {
            let game_config = game_config::GameConfig::load(path)?;
            log::info!("loaded config from {}", path);
            Ok(game_config)
        }
        None => Ok(game_config::GameConfig::default()),
    }
}

#[tokio::main]
async fn main() -> error::Returns<()> {
    env_logger::init();
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() > 3 {
        println!(
            "args:
  shell [wordlist] [config.json]
    wordlist is a json array of words or one word per line.
    until it loads, every word is accepted."
        );
        return Ok(());
    }
    let game_config = load_config(args.get(2))?;
    let lexicon = std::sync::Arc::new(lexicon::Lexicon::new());
    match args.get(1) {
        Some(path) => {
            lexicon::spawn_load(lexicon.clone(), path.into());
        }
        None => log::warn!("no wordlist given, accepting all words"),
    }
    let mut session = game_state::GameSession::new(game_config, lexicon.clone())?;
    display::print_snapshot(&session.snapshot());

    let mut rl = rlhelper::new_rl_editor()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                    continue;
                }
            };
            let Some(name) = strings.first() else {
                continue;
            };
            let args = &strings[1..];
            match name.as_str() {
                "help" => {
                    println!("{}", HELP);
                }
                "exit" => {
                    break;
                }
                "show" => {
                    display::print_snapshot(&session.snapshot());
                }
                "json" => {
                    println!("{}", serde_json::to_string_pretty(&session.snapshot())?);
                }
                "check" => {
                    if let [word] = args {
                        println!(
                            "{} is {}{}",
                            word.to_uppercase(),
                            if lexicon.validate(word) {
                                "valid"
                            } else {
                                "invalid"
                            },
                            if lexicon.is_loaded() {
                                ""
                            } else {
                                " (dictionary not loaded)"
                            }
                        );
                    } else {
                        println!("need one word");
                    }
                }
                "source" => {
                    if let [filename] = args {
                        match std::fs::read_to_string(filename) {
                            Ok(whole_file) => {
                                let v = cmd_stack.len();
                                for (line_num, line) in whole_file.lines().enumerate() {
                                    cmd_stack.push((
                                        line.to_string(),
                                        Some((filename.clone(), line_num + 1)),
                                    ));
                                }
                                cmd_stack[v..].reverse();
                            }
                            Err(err) => {
                                println!("cannot open file: {:?}", err);
                            }
                        }
                    } else {
                        println!("need another arg");
                    }
                }
                _ => match parse_command(&session, name, args) {
                    Some(command) => {
                        let committed = command == game_state::Command::EndTurn;
                        match session.dispatch(command) {
                            Ok(_) if committed => {
                                display::print_snapshot(&session.snapshot());
                            }
                            _ => {
                                println!("{}", session.status());
                            }
                        }
                    }
                    None => {
                        println!("invalid input, help for help");
                    }
                },
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    log::info!(
        "final score {} after {} turns",
        session.score(),
        session.turns_played()
    );
    Ok(())
}
