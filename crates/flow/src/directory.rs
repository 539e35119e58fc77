use model::{Category, Difficulty, Filters};
use std::future;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

/// Quiescence window applied to search input.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Filter edits coming from the directory view.
#[derive(Debug)]
pub enum Input {
    Search(String),
    Category(Option<Category>),
    Difficulty(Option<Difficulty>),
}

/// Applies filter edits and decides when the directory must refetch.
///
/// Search edits arm a deadline that every newer edit reschedules, so a burst
/// of keystrokes collapses into a single refetch once input goes quiet.
/// Category and difficulty changes apply immediately. Each emitted `Filters`
/// snapshot corresponds to exactly one refetch.
pub async fn run(mut inputs: mpsc::UnboundedReceiver<Input>, refetch: mpsc::UnboundedSender<Filters>) {
    let mut filters = Filters::default();
    let mut pending: Option<String> = None;
    let mut deadline: Option<Instant> = None;

    // The view populates itself once on entry.
    if refetch.send(filters.clone()).is_err() {
        return;
    }

    loop {
        let quiesced = async {
            match deadline {
                Some(at) => time::sleep_until(at).await,
                None => future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            input = inputs.recv() => match input {
                Some(Input::Search(text)) => {
                    pending = Some(text);
                    deadline = Some(Instant::now() + DEBOUNCE);
                }
                Some(Input::Category(category)) => {
                    filters.category = category;
                    if refetch.send(filters.clone()).is_err() {
                        return;
                    }
                }
                Some(Input::Difficulty(difficulty)) => {
                    filters.difficulty = difficulty;
                    if refetch.send(filters.clone()).is_err() {
                        return;
                    }
                }
                None => return,
            },
            _ = quiesced => {
                filters.search = pending.take().unwrap_or_default();
                deadline = None;
                if refetch.send(filters.clone()).is_err() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc::error::TryRecvError;

    async fn drain_initial(refetches: &mut mpsc::UnboundedReceiver<Filters>) {
        assert_eq!(refetches.recv().await, Some(Filters::default()));
    }

    #[tokio::test(start_paused = true)]
    async fn keystroke_burst_collapses_into_one_refetch() {
        let (inputs, inputs_rx) = mpsc::unbounded_channel();
        let (refetch_tx, mut refetches) = mpsc::unbounded_channel();
        tokio::spawn(run(inputs_rx, refetch_tx));
        drain_initial(&mut refetches).await;

        for text in ["h", "hi", "his", "hist"] {
            inputs.send(Input::Search(String::from(text))).unwrap();
            time::advance(Duration::from_millis(100)).await;
        }
        time::advance(DEBOUNCE).await;

        let filters = refetches.recv().await.unwrap();
        assert_eq!(filters.search, "hist");
        assert_eq!(filters.category, None);
        tokio::task::yield_now().await;
        assert_eq!(refetches.try_recv().unwrap_err(), TryRecvError::Empty);
    }

    #[tokio::test(start_paused = true)]
    async fn category_change_applies_immediately() {
        let (inputs, inputs_rx) = mpsc::unbounded_channel();
        let (refetch_tx, mut refetches) = mpsc::unbounded_channel();
        tokio::spawn(run(inputs_rx, refetch_tx));
        drain_initial(&mut refetches).await;

        inputs.send(Input::Category(Some(Category::Science))).unwrap();
        let filters = refetches.recv().await.unwrap();
        assert_eq!(filters.category, Some(Category::Science));
        assert_eq!(filters.search, "");

        inputs.send(Input::Difficulty(Some(Difficulty::Hard))).unwrap();
        let filters = refetches.recv().await.unwrap();
        assert_eq!(filters.difficulty, Some(Difficulty::Hard));
        assert_eq!(filters.category, Some(Category::Science));
    }

    #[tokio::test(start_paused = true)]
    async fn pending_search_waits_out_an_immediate_filter() {
        let (inputs, inputs_rx) = mpsc::unbounded_channel();
        let (refetch_tx, mut refetches) = mpsc::unbounded_channel();
        tokio::spawn(run(inputs_rx, refetch_tx));
        drain_initial(&mut refetches).await;

        inputs.send(Input::Search(String::from("rome"))).unwrap();
        inputs.send(Input::Category(Some(Category::History))).unwrap();

        // The category refetch fires first, still carrying the old search.
        let filters = refetches.recv().await.unwrap();
        assert_eq!(filters.category, Some(Category::History));
        assert_eq!(filters.search, "");

        time::advance(DEBOUNCE).await;
        let filters = refetches.recv().await.unwrap();
        assert_eq!(filters.search, "rome");
        assert_eq!(filters.category, Some(Category::History));
    }
}
