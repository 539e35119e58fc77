use crate::{play, shell::Shell};
use flow::directory::{self, Input};
use model::{Category, Difficulty, Quiz};
use tokio::sync::mpsc;

fn parse_category(arg: &str) -> Option<Option<Category>> {
    if arg == "-" {
        return Some(None);
    }
    let lower = arg.to_ascii_lowercase();
    Category::ALL.into_iter().find(|category| category.as_str().to_ascii_lowercase().starts_with(&lower)).map(Some)
}

fn parse_difficulty(arg: &str) -> Option<Option<Difficulty>> {
    match arg {
        "-" => Some(None),
        "easy" => Some(Some(Difficulty::Easy)),
        "medium" => Some(Some(Difficulty::Medium)),
        "hard" => Some(Some(Difficulty::Hard)),
        _ => None,
    }
}

fn render(listing: &[Quiz]) {
    if listing.is_empty() {
        println!("No quizzes found.");
        return;
    }
    println!("{} quizzes:", listing.len());
    for (quiz, rank) in listing.iter().zip(1..) {
        let creator = quiz.created_by.as_ref().map_or("Unknown", |creator| creator.name.as_str());
        println!(
            "  {rank}. {} [{} / {}] by {creator}",
            quiz.title,
            quiz.category.as_str(),
            quiz.difficulty.as_str(),
        );
    }
}

const HELP: &str = "Commands: s <text> search, c <category|-> filter, d <easy|medium|hard|-> filter, <n> start, b back";

pub async fn run(shell: &mut Shell) {
    if shell.session.current_user().is_none() {
        println!("Please log in to view quizzes.");
        return;
    }

    let (inputs, inputs_rx) = mpsc::unbounded_channel();
    let (refetch_tx, mut refetches) = mpsc::unbounded_channel();
    tokio::spawn(directory::run(inputs_rx, refetch_tx));

    let mut listing: Vec<Quiz> = Vec::new();
    println!("{HELP}");

    loop {
        tokio::select! {
            filters = refetches.recv() => {
                let Some(mut filters) = filters else {
                    break;
                };
                // A burst of emissions only warrants the newest snapshot.
                while let Ok(next) = refetches.try_recv() {
                    filters = next;
                }
                match shell.session.api().quizzes(&filters).await {
                    Ok(list) => {
                        listing = list;
                        render(&listing);
                    }
                    Err(err) => println!("! Failed to load quizzes: {err}"),
                }
            }
            line = shell.line() => {
                let Some(line) = line else {
                    break;
                };
                let line = line.trim();
                let (command, arg) = match line.split_once(' ') {
                    Some((command, arg)) => (command, arg.trim()),
                    None => (line, ""),
                };

                match command {
                    "b" => break,
                    "s" => {
                        inputs.send(Input::Search(arg.to_owned())).ok();
                    }
                    "c" => match parse_category(arg) {
                        Some(category) => {
                            inputs.send(Input::Category(category)).ok();
                        }
                        None => println!("Unknown category."),
                    },
                    "d" => match parse_difficulty(arg) {
                        Some(difficulty) => {
                            inputs.send(Input::Difficulty(difficulty)).ok();
                        }
                        None => println!("Unknown difficulty."),
                    },
                    _ => match command.parse::<usize>() {
                        Ok(rank) => match rank.checked_sub(1).and_then(|at| listing.get(at)) {
                            Some(quiz) => {
                                let id = quiz.id.clone();
                                play::run(shell, &id).await;
                                println!("{HELP}");
                            }
                            None => println!("No quiz under that number."),
                        },
                        Err(_) => println!("{HELP}"),
                    },
                }
            }
        }
    }
    // Dropping the input sender tears the directory driver down with us.
}
