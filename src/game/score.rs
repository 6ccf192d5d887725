use log::info;

/// Callback fired with the new best score whenever it is raised
pub type BestScoreCallback = Box<dyn FnMut(u32)>;

/// Running score for the current game plus the best score across games
pub struct ScoreTracker {
    score: u32,
    best: u32,
    on_best: Option<BestScoreCallback>,
}

impl ScoreTracker {
    pub fn new(best: u32) -> Self {
        Self {
            score: 0,
            best,
            on_best: None,
        }
    }

    /// Create a tracker that reports every best-score increase to `on_best`
    pub fn with_callback(best: u32, on_best: BestScoreCallback) -> Self {
        Self {
            score: 0,
            best,
            on_best: Some(on_best),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Add points to the running score
    ///
    /// Returns `true` if the best score was raised; the callback runs at
    /// most once per call.
    pub fn add(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        if self.score <= self.best {
            return false;
        }

        self.best = self.score;
        info!("new best score: {}", self.best);
        if let Some(on_best) = self.on_best.as_mut() {
            on_best(self.best);
        }
        true
    }

    /// Start a new game; the best score is kept
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Debug for ScoreTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreTracker")
            .field("score", &self.score)
            .field("best", &self.best)
            .field("has_callback", &self.on_best.is_some())
            .finish()
    }
}
