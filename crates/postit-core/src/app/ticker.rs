//! Progress ticker: the animated "Working ..." indicator.
//!
//! Subscribes to the upload task's phase channel rather than polling the task
//! for aliveness; the `tokio::select!` between the interval sleep and a phase
//! change is the single cancellation point.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::domain::TaskPhase;
use crate::ports::Notifier;

/// Render the indicator text for one tick: "Working" plus 1-3 dots, cycling
/// with the tick count modulo 3.
pub fn progress_frame(tick: u64) -> String {
    let dots = (tick % 3) + 1;
    format!("Working {}", ".".repeat(dots as usize))
}

/// Drive the progress indicator until the task completes.
///
/// Each tick replaces the indicator text; when the phase channel reports
/// `Completed` (or its sender is gone) the indicator is cleared exactly once
/// and the ticker exits. The ticker never blocks a thread: every tick is a
/// scheduled sleep on the runtime.
pub fn spawn_progress_ticker(
    notifier: Arc<dyn Notifier>,
    mut phase_rx: watch::Receiver<TaskPhase>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut tick: u64 = 0;
        loop {
            if !phase_rx.borrow().is_running() {
                break;
            }

            notifier.set_progress(&progress_frame(tick));
            tick += 1;

            tokio::select! {
                changed = phase_rx.changed() => {
                    // sender が drop された場合も完了とみなす
                    if changed.is_err() {
                        break;
                    }
                }
                _ = tokio::time::sleep(interval) => {}
            }
        }
        notifier.clear_progress();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use rstest::rstest;

    #[rstest]
    #[case(0, "Working .")]
    #[case(1, "Working ..")]
    #[case(2, "Working ...")]
    #[case(3, "Working .")]
    #[case(4, "Working ..")]
    #[case(5, "Working ...")]
    fn frames_cycle_one_two_three_dots(#[case] tick: u64, #[case] expected: &str) {
        assert_eq!(progress_frame(tick), expected);
    }

    #[derive(Default)]
    struct RecordingNotifier {
        progress: Mutex<Vec<String>>,
        clears: Mutex<u32>,
    }

    impl Notifier for RecordingNotifier {
        fn error_dialog(&self, _message: &str) {}
        fn message_dialog(&self, _message: &str) {}
        fn status_line(&self, _message: &str) {}

        fn set_progress(&self, message: &str) {
            self.progress.lock().unwrap().push(message.to_string());
        }

        fn clear_progress(&self) {
            *self.clears.lock().unwrap() += 1;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_advances_then_clears_exactly_once() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (phase_tx, phase_rx) = watch::channel(TaskPhase::Running);

        let ticker =
            spawn_progress_ticker(notifier.clone(), phase_rx, Duration::from_millis(500));

        // Let a few ticks elapse, then complete the task.
        tokio::time::sleep(Duration::from_millis(1600)).await;
        phase_tx.send(TaskPhase::Completed).unwrap();
        ticker.await.unwrap();

        let progress = notifier.progress.lock().unwrap().clone();
        assert_eq!(
            progress,
            vec!["Working .", "Working ..", "Working ...", "Working ."]
        );
        assert_eq!(*notifier.clears.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_on_already_completed_task_only_clears() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (_phase_tx, phase_rx) = watch::channel(TaskPhase::Completed);

        spawn_progress_ticker(notifier.clone(), phase_rx, Duration::from_millis(500))
            .await
            .unwrap();

        assert!(notifier.progress.lock().unwrap().is_empty());
        assert_eq!(*notifier.clears.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_sender_stops_the_ticker() {
        let notifier = Arc::new(RecordingNotifier::default());
        let (phase_tx, phase_rx) = watch::channel(TaskPhase::Running);

        let ticker =
            spawn_progress_ticker(notifier.clone(), phase_rx, Duration::from_millis(500));

        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(phase_tx);
        ticker.await.unwrap();

        assert_eq!(*notifier.clears.lock().unwrap(), 1);
    }
}
