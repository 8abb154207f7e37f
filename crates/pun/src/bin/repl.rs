use std::io::{self, BufRead, Write};
use std::path::Path;

use pun::{fresh_rng, load_config, Pun, PunContext};

fn render(pun: Pun) -> String {
    match pun {
        Pun::Text(text) => text,
        Pun::Apology(message) => message.to_string(),
        Pun::NoCandidates => "Failed to generate anything".to_string(),
    }
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let config = load_config(Path::new("pun.json"));

    // load the context once at startup (the expensive part)
    let ctx = PunContext::load(&config)?;

    // If a phrase is provided on the command line, run single-shot and exit.
    if !args.is_empty() {
        let phrase = args.join(" ");
        let mut rng = fresh_rng();
        println!("> {}", phrase);
        println!("{}", render(ctx.generate(&phrase, config.top_k, &mut rng)));
        return Ok(());
    }

    // Interactive loop. 'reroll' replays the last phrase with fresh
    // randomness, the way the original bot rerolled on a reaction.
    println!("Type a phrase for a pun, 'reroll' to retry the last one, 'quit' to exit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut last_phrase: Option<String> = None;
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("Bye");
            break;
        }

        let phrase = if line.eq_ignore_ascii_case("reroll") || line == "r" {
            match &last_phrase {
                Some(phrase) => phrase.clone(),
                None => {
                    println!("Nothing to reroll yet");
                    continue;
                }
            }
        } else {
            last_phrase = Some(line.to_string());
            line.to_string()
        };

        let mut rng = fresh_rng();
        println!("{}", render(ctx.generate(&phrase, config.top_k, &mut rng)));
        let _ = stdout.flush();
    }

    Ok(())
}
