use crate::{boards, browse, create};
use client::Session;
use flow::Flow;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Top-level view state: the session, the attempt registry, and the input
/// stream every view reads from.
pub struct Shell {
    pub session: Session,
    pub flow: Flow,
    lines: Lines<BufReader<Stdin>>,
}

impl Shell {
    fn new(session: Session) -> Self {
        Self { session, flow: Flow::new(), lines: BufReader::new(tokio::io::stdin()).lines() }
    }

    /// Next input line; `None` once stdin closes.
    pub async fn line(&mut self) -> Option<String> {
        self.lines.next_line().await.ok().flatten()
    }

    pub async fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{label}: ");
        let _ = io::stdout().flush();
        let line = self.line().await?;
        Some(line.trim().to_owned())
    }
}

pub async fn run(session: Session) -> anyhow::Result<()> {
    let mut shell = Shell::new(session);
    shell.session.resume().await;
    if let Some(user) = shell.session.current_user() {
        println!("Welcome back, {}!", user.name);
    }

    loop {
        println!();
        if shell.session.current_user().is_some() {
            println!("[1] Browse quizzes  [2] Create a quiz  [3] Profile  [4] Leaderboard  [5] Log out  [q] Quit");
        } else {
            println!("[1] Log in  [2] Register  [3] Leaderboard  [q] Quit");
        }
        let Some(choice) = shell.prompt(">").await else {
            break;
        };

        let authed = shell.session.current_user().is_some();
        match (authed, choice.as_str()) {
            (_, "q") => break,
            (false, "1") => login(&mut shell).await,
            (false, "2") => register(&mut shell).await,
            (false, "3") | (true, "4") => boards::leaderboard(&mut shell).await,
            (true, "1") => browse::run(&mut shell).await,
            (true, "2") => create::run(&mut shell).await,
            (true, "3") => boards::profile(&mut shell).await,
            (true, "5") => {
                shell.session.logout();
                println!("Logged out.");
            }
            _ => println!("Unknown option."),
        }
    }
    Ok(())
}

async fn login(shell: &mut Shell) {
    let Some(email) = shell.prompt("Email").await else {
        return;
    };
    let Some(password) = shell.prompt("Password").await else {
        return;
    };
    if shell.session.login(&email, &password).await {
        let name = shell.session.current_user().map_or_else(String::new, |user| user.name.clone());
        println!("Welcome, {name}!");
    } else {
        println!("! Login failed.");
    }
}

async fn register(shell: &mut Shell) {
    let Some(name) = shell.prompt("Name").await else {
        return;
    };
    let Some(email) = shell.prompt("Email").await else {
        return;
    };
    let Some(password) = shell.prompt("Password").await else {
        return;
    };
    if shell.session.register(&name, &email, &password).await {
        println!("Registered successfully!");
    } else {
        println!("! Registration failed.");
    }
}
