//! Async battle driver
//!
//! Runs a session as a background task. Commands (attack actions) come in on
//! a bounded channel; events go out on an unbounded channel, with `Pace`
//! directives interpreted here as real delays so consumers see the stream at
//! presentation pace. Commands that arrive while a resolution is playing out
//! are rejected, not queued. A resolution always completes fully; there is
//! no mid-resolution abort.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Duration};

use crate::battle::action::AttackAction;
use crate::battle::event::BattleEvent;
use crate::battle::session::BattleSession;
use crate::character::player::Player;

/// Consumer-side handle to a running battle
#[derive(Debug)]
pub struct BattleHandle {
    commands: mpsc::Sender<AttackAction>,
    /// Ordered battle events, already paced
    pub events: mpsc::UnboundedReceiver<BattleEvent>,
}

impl BattleHandle {
    /// Submit the player's action for the current turn
    ///
    /// Returns false if the battle task has already finished.
    pub async fn submit(&self, action: AttackAction) -> bool {
        self.commands.send(action).await.is_ok()
    }
}

/// Background task that owns a battle session
#[derive(Debug)]
pub struct BattleRunner {
    session: BattleSession,
    commands: mpsc::Receiver<AttackAction>,
    events: mpsc::UnboundedSender<BattleEvent>,
}

impl BattleRunner {
    /// Spawn a battle as a background task
    ///
    /// The task owns both combatants until the battle reaches a terminal
    /// state; the join handle then yields the player back.
    pub fn spawn(session: BattleSession, opening: Vec<BattleEvent>) -> (JoinHandle<Player>, BattleHandle) {
        let (command_tx, command_rx) = mpsc::channel(1);
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let runner = Self {
            session,
            commands: command_rx,
            events: event_tx,
        };
        let join = tokio::spawn(runner.run(opening));
        (
            join,
            BattleHandle {
                commands: command_tx,
                events: event_rx,
            },
        )
    }

    async fn run(mut self, opening: Vec<BattleEvent>) -> Player {
        self.emit(opening).await;

        while !self.session.is_over() {
            let Some(action) = self.commands.recv().await else {
                // All handles dropped; abandon the battle.
                break;
            };
            match self.session.submit_action(action) {
                Ok(mut events) => {
                    // Hold the trailing turn-ready beat until stale commands
                    // are cleared, so a prompt next-turn submission is never
                    // mistaken for a mid-resolution one.
                    let turn_ready = match events.last() {
                        Some(BattleEvent::TurnReady { .. }) => events.pop(),
                        _ => None,
                    };
                    self.emit(events).await;
                    self.reject_stale_commands();
                    if let Some(ready) = turn_ready {
                        self.emit(vec![ready]).await;
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, ?action, "rejected action");
                }
            }
        }

        self.session.finish()
    }

    /// Forward events in order, sleeping on pacing directives. `Pace` itself
    /// is consumed here rather than forwarded; the delay is its meaning.
    async fn emit(&self, events: Vec<BattleEvent>) {
        for event in events {
            match event {
                BattleEvent::Pace { millis } => sleep(Duration::from_millis(millis)).await,
                other => {
                    if self.events.send(other).is_err() {
                        return;
                    }
                }
            }
        }
    }

    /// Drop commands that were submitted while the last resolution was
    /// still playing out. Serializes one action per turn.
    fn reject_stale_commands(&mut self) {
        while let Ok(stale) = self.commands.try_recv() {
            tracing::warn!(?stale, "action submitted mid-resolution, rejected");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::event::BattleOutcome;
    use crate::character::class::PlayerClass;
    use crate::enemy::Enemy;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn weak_battle() -> (BattleSession, Vec<BattleEvent>) {
        // Precise deals exactly 10; the battle ends on the first action.
        BattleSession::start(
            Player::new("Alex", PlayerClass::SousChef),
            Enemy::new("Stale Crouton", 10, 2, 1, &["Crumble", "Scrape"]),
            ChaCha8Rng::seed_from_u64(0),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_runner_plays_battle_to_completion() {
        let (session, opening) = weak_battle();
        let (join, mut handle) = BattleRunner::spawn(session, opening);

        let mut saw_turn_ready = false;
        let mut outcome = None;
        while let Some(event) = handle.events.recv().await {
            match event {
                BattleEvent::TurnReady { .. } if !saw_turn_ready => {
                    saw_turn_ready = true;
                    assert!(handle.submit(AttackAction::Precise).await);
                }
                BattleEvent::BattleEnded { outcome: o } => outcome = Some(o),
                BattleEvent::Pace { .. } => panic!("pace directives must not be forwarded"),
                _ => {}
            }
        }

        assert!(saw_turn_ready);
        assert_eq!(outcome, Some(BattleOutcome::Won));
        let player = join.await.expect("battle task panicked");
        assert_eq!(player.experience(), 15);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_arrive_in_resolution_order() {
        let (session, opening) = weak_battle();
        let (join, mut handle) = BattleRunner::spawn(session, opening);

        let mut log = Vec::new();
        let mut submitted = false;
        while let Some(event) = handle.events.recv().await {
            if matches!(event, BattleEvent::TurnReady { .. }) && !submitted {
                submitted = true;
                handle.submit(AttackAction::Precise).await;
            }
            log.push(event);
        }
        join.await.expect("battle task panicked");

        let preds: [fn(&BattleEvent) -> bool; 4] = [
            |e| matches!(e, BattleEvent::AttackDeclared { .. }),
            |e| matches!(e, BattleEvent::DamageDealt { .. }),
            |e| matches!(e, BattleEvent::ExperienceGained { .. }),
            |e| matches!(e, BattleEvent::BattleEnded { .. }),
        ];
        let positions: Vec<usize> = preds
            .iter()
            .map(|pred| log.iter().position(|e| pred(e)).expect("event missing"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_extra_submissions_mid_resolution_are_dropped() {
        // Sturdy enemy so the battle spans several turns.
        let (session, opening) = BattleSession::start(
            Player::new("Alex", PlayerClass::SousChef),
            Enemy::new("Iron Skillet", 100, 1, 5, &["Clang", "Bonk"]),
            ChaCha8Rng::seed_from_u64(0),
        );
        let (join, mut handle) = BattleRunner::spawn(session, opening);

        let mut log = Vec::new();
        while let Some(event) = handle.events.recv().await {
            if matches!(event, BattleEvent::TurnReady { .. }) {
                // The second send lands while the resolution plays out; it
                // must be discarded, never queued for the following turn.
                handle.submit(AttackAction::Precise).await;
                handle.submit(AttackAction::Precise).await;
            }
            log.push(event);
        }
        join.await.expect("battle task panicked");

        let attacks: Vec<usize> = log
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, BattleEvent::AttackDeclared { .. }))
            .map(|(i, _)| i)
            .collect();
        assert!(attacks.len() >= 2, "expected a multi-turn battle");
        for pair in attacks.windows(2) {
            let between = &log[pair[0] + 1..pair[1]];
            assert!(
                between
                    .iter()
                    .any(|e| matches!(e, BattleEvent::TurnReady { .. })),
                "two player attacks resolved without an intervening turn"
            );
        }
    }
}
