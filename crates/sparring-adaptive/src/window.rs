use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use sparring_core::MatchOutcome;

use crate::Direction;

/// Bounded FIFO of the most recent outcomes in a session.
///
/// When full, pushing drops the oldest outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOutcomeWindow")]
pub struct OutcomeWindow {
    capacity: usize,
    outcomes: VecDeque<MatchOutcome>,
}

#[derive(Deserialize)]
struct RawOutcomeWindow {
    capacity: usize,
    #[serde(default)]
    outcomes: VecDeque<MatchOutcome>,
}

impl From<RawOutcomeWindow> for OutcomeWindow {
    fn from(raw: RawOutcomeWindow) -> Self {
        let mut window = Self::new(raw.capacity);
        for outcome in raw.outcomes {
            window.push(outcome);
        }
        window
    }
}

impl OutcomeWindow {
    /// Creates an empty window. A zero capacity is raised to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            outcomes: VecDeque::with_capacity(capacity),
        }
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MatchOutcome> + '_ {
        self.outcomes.iter().copied()
    }

    pub fn push(&mut self, outcome: MatchOutcome) {
        if self.outcomes.len() == self.capacity
            && let Some(dropped) = self.outcomes.pop_front()
        {
            log::debug!("outcome window full, dropping oldest {dropped}");
        }
        self.outcomes.push_back(outcome);
    }

    pub fn clear(&mut self) {
        self.outcomes.clear();
    }

    /// Number of outcomes equal to `outcome`.
    #[must_use]
    pub fn count(&self, outcome: MatchOutcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }

    /// Share of the window equal to `outcome`, 0 for an empty window.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn ratio(&self, outcome: MatchOutcome) -> f32 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.count(outcome) as f32 / self.outcomes.len() as f32
    }

    /// How consistently the window supports moving in `direction`.
    ///
    /// `1 - opposing / len`, where a loss opposes [`Direction::Up`] and a win opposes
    /// [`Direction::Down`]. Draws oppose neither. An empty window is fully consistent.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn consistency(&self, direction: Direction) -> f32 {
        if self.outcomes.is_empty() {
            return 1.0;
        }
        let opposing = self.iter().filter(|&o| direction.is_opposed_by(o)).count();
        1.0 - opposing as f32 / self.outcomes.len() as f32
    }

    /// Stability of recent results in \[0, 1\], rounded to two decimals.
    ///
    /// Derived from the population standard deviation of the outcome scores (win 1,
    /// draw 0.5, loss 0), normalized by its maximum of 0.5. Windows of fewer than three
    /// games report a neutral 0.5.
    ///
    /// ```
    /// use sparring_adaptive::OutcomeWindow;
    /// use sparring_core::MatchOutcome::{Loss, Win};
    ///
    /// let mut window = OutcomeWindow::new(10);
    /// for outcome in [Win, Win, Win, Win] {
    ///     window.push(outcome);
    /// }
    /// assert_eq!(window.stability(), 1.0);
    ///
    /// for outcome in [Loss, Loss, Loss, Loss] {
    ///     window.push(outcome);
    /// }
    /// assert_eq!(window.stability(), 0.0);
    /// ```
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn stability(&self) -> f32 {
        const MAX_STD_DEV: f32 = 0.5;
        if self.outcomes.len() < 3 {
            return 0.5;
        }
        let n = self.outcomes.len() as f32;
        let mean = self.iter().map(MatchOutcome::score).sum::<f32>() / n;
        let variance = self
            .iter()
            .map(|o| (o.score() - mean).powi(2))
            .sum::<f32>()
            / n;
        let stability = 1.0 - (variance.sqrt() / MAX_STD_DEV).min(1.0);
        (stability * 100.0).round() / 100.0
    }
}
