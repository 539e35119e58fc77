use crate::shell::Shell;
use flow::form::{QuizForm, OPTION_COUNT};
use model::{Category, Difficulty};

async fn pick_category(shell: &mut Shell) -> Option<Category> {
    for (category, rank) in Category::ALL.into_iter().zip(1..) {
        println!("  {rank}. {}", category.as_str());
    }
    loop {
        let choice = shell.prompt("Category").await?;
        let picked = choice
            .parse::<usize>()
            .ok()
            .and_then(|rank| rank.checked_sub(1))
            .and_then(|at| Category::ALL.get(at).copied());
        match picked {
            Some(category) => return Some(category),
            None => println!("Pick a number between 1 and {}.", Category::ALL.len()),
        }
    }
}

async fn pick_difficulty(shell: &mut Shell) -> Option<Difficulty> {
    loop {
        let choice = shell.prompt("Difficulty (easy/medium/hard)").await?;
        match choice.as_str() {
            "easy" => return Some(Difficulty::Easy),
            "medium" => return Some(Difficulty::Medium),
            "hard" => return Some(Difficulty::Hard),
            _ => println!("One of: easy, medium, hard."),
        }
    }
}

/// Fills in one question of the form: prompt, four options, answer key.
async fn edit_question(shell: &mut Shell, form: &mut QuizForm, index: usize) -> Option<()> {
    println!("-- Question {} --", index + 1);
    let prompt = shell.prompt("Prompt").await?;
    form.set_prompt(index, prompt).ok()?;
    for slot in 0..OPTION_COUNT {
        let text = shell.prompt(&format!("Option {}", slot + 1)).await?;
        form.set_option(index, slot, text).ok()?;
    }
    loop {
        let choice = shell.prompt("Correct option (1-4)").await?;
        let Some(slot) = choice.parse::<u8>().ok().and_then(|rank| rank.checked_sub(1)) else {
            println!("Pick an option number.");
            continue;
        };
        match form.set_answer(index, slot) {
            Ok(()) => return Some(()),
            Err(err) => println!("! {err}"),
        }
    }
}

pub async fn run(shell: &mut Shell) {
    if shell.session.current_user().is_none() {
        println!("Please log in to create a quiz.");
        return;
    }

    let mut form = QuizForm::new();
    let Some(title) = shell.prompt("Quiz title").await else {
        return;
    };
    form.title = title;
    let Some(category) = pick_category(shell).await else {
        return;
    };
    form.category = Some(category);
    let Some(difficulty) = pick_difficulty(shell).await else {
        return;
    };
    form.difficulty = Some(difficulty);

    if edit_question(shell, &mut form, 0).await.is_none() {
        return;
    }

    loop {
        println!("[a] Add question  [r <n>] Remove question  [s] Submit  [q] Cancel");
        let Some(line) = shell.prompt(">").await else {
            return;
        };
        let (command, arg) = match line.split_once(' ') {
            Some((command, arg)) => (command, arg.trim()),
            None => (line.as_str(), ""),
        };

        match command {
            "q" => return,
            "a" => {
                form.add_question();
                let index = form.questions().len() - 1;
                if edit_question(shell, &mut form, index).await.is_none() {
                    return;
                }
            }
            "r" => match arg.parse::<usize>().ok().and_then(|rank| rank.checked_sub(1)) {
                Some(index) => match form.remove_question(index) {
                    Ok(()) => println!("Question removed ({} left).", form.questions().len()),
                    Err(err) => println!("! {err}"),
                },
                None => println!("Give a question number."),
            },
            "s" => match form.build() {
                Ok(draft) => {
                    let Some(token) = shell.session.token().map(str::to_owned) else {
                        println!("Please log in to create a quiz.");
                        return;
                    };
                    match shell.session.api().create_quiz(&token, &draft).await {
                        Ok(_) => {
                            println!("Quiz created successfully!");
                            return;
                        }
                        Err(err) => println!("! Failed to create quiz: {err}"),
                    }
                }
                Err(err) => println!("! {err}"),
            },
            _ => {}
        }
    }
}
