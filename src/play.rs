use crate::{boards, shell::Shell};
use flow::{Reporter, Update, CELEBRATION};
use model::Question;
use tokio::time;

fn render_question(index: usize, total: usize, question: &Question, time_left: u8) {
    println!("\nQuestion {}/{total}: {} ({time_left}s)", index + 1, question.prompt);
    for (rank, option) in question.options.iter().zip(1..) {
        println!("  {rank}. {option}");
    }
}

pub async fn run(shell: &mut Shell, quiz_id: &str) {
    let quiz = match shell.session.api().quiz(quiz_id).await {
        Ok(quiz) => quiz,
        Err(err) => {
            println!("! Failed to load quiz: {err}");
            return;
        }
    };

    let reporter = shell
        .session
        .token()
        .map(|token| Reporter::new(shell.session.api().clone(), token.into()));

    let title = quiz.title.clone();
    let questions = quiz.questions.clone();
    let mut stream = match shell.flow.start(quiz, reporter) {
        Ok(stream) => stream,
        Err(err) => {
            println!("! {err}");
            return;
        }
    };

    println!("\n=== {title} ===");
    println!("Type the option number to answer. Ctrl-C abandons the attempt.");

    let flow = shell.flow.clone();
    let outcome = loop {
        tokio::select! {
            update = stream.recv() => match update {
                None => return,
                Some(Update::Question { index, total, time_left }) => {
                    render_question(index, total, &questions[index], time_left);
                }
                Some(Update::Tick { time_left }) => {
                    if time_left <= 10 {
                        println!("  ...{time_left}s left");
                    }
                }
                Some(Update::Finished { score, total, celebratory }) => break (score, total, celebratory),
            },
            line = shell.line() => match line {
                None => {
                    flow.abandon(quiz_id);
                    return;
                }
                Some(text) => match text.trim().parse::<u8>() {
                    Ok(rank) if rank >= 1 => {
                        if let Err(err) = flow.answer(quiz_id, rank - 1) {
                            println!("! {err}");
                        }
                    }
                    _ => println!("Pick an option number."),
                },
            },
            _ = tokio::signal::ctrl_c() => {
                flow.abandon(quiz_id);
                println!("\nAttempt abandoned.");
                return;
            }
        }
    };

    let (score, total, celebratory) = outcome;
    println!("\nQuiz completed! Score: {score}/{total}");
    if celebratory {
        println!("*** Outstanding run! ***");
        time::sleep(CELEBRATION).await;
    }

    println!("[b] Back to quizzes  [p] View profile");
    loop {
        let Some(choice) = shell.prompt(">").await else {
            return;
        };
        match choice.as_str() {
            "b" => return,
            "p" => {
                boards::profile(shell).await;
                return;
            }
            _ => println!("[b] Back to quizzes  [p] View profile"),
        }
    }
}
