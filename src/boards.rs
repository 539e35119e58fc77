use crate::shell::Shell;

pub async fn profile(shell: &mut Shell) {
    let Some(user) = shell.session.current_user() else {
        println!("Please log in to view your profile.");
        return;
    };
    let (name, email) = (user.name.clone(), user.email.clone());
    let Some(token) = shell.session.token().map(str::to_owned) else {
        println!("Please log in to view your profile.");
        return;
    };

    let scores = match shell.session.api().scores(&token).await {
        Ok(scores) => scores,
        Err(err) => {
            println!("! Failed to load scores: {err}");
            return;
        }
    };

    println!("\n=== {name} <{email}> ===");
    let taken = scores.len();
    let average = if taken == 0 {
        0.0
    } else {
        let percentages: f64 = scores
            .iter()
            .map(|row| f64::from(row.score) / f64::from(row.total_questions.max(1)) * 100.0)
            .sum();
        percentages / taken as f64
    };
    println!("Total quizzes: {taken}  Avg score: {average:.1}%");
    if taken >= 5 {
        println!("Badge: Quiz Master");
    }

    if scores.is_empty() {
        println!("No quizzes taken yet.");
        return;
    }
    println!("Quiz history:");
    for row in &scores {
        let title = row.quiz.as_ref().map_or("Unknown", |quiz| quiz.title.as_str());
        println!("  {title}: {}/{} ({})", row.score, row.total_questions, row.created_at);
    }
}

pub async fn leaderboard(shell: &mut Shell) {
    let leaders = match shell.session.api().leaderboard().await {
        Ok(leaders) => leaders,
        Err(err) => {
            println!("! Failed to load leaderboard: {err}");
            return;
        }
    };

    if leaders.is_empty() {
        println!("No leaders yet. Take a quiz!");
        return;
    }

    println!("\nRank  Name                  Quizzes  Total score");
    for (row, rank) in leaders.iter().zip(1..) {
        let medal = match rank {
            1 => " (gold)",
            2 => " (silver)",
            3 => " (bronze)",
            _ => "",
        };
        println!("  #{rank:<3} {:<21} {:<8} {}{medal}", row.name, row.total_quizzes, row.total_score);
    }
}
