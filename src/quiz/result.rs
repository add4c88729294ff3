use serde::Serialize;
use std::time::Duration;

/// Tramo de resultado según el porcentaje de aciertos.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultTier {
    Perfect,
    Excellent,
    Good,
    NeedsRetry,
}

impl ResultTier {
    /// Se evalúa de mayor a menor: 100, >=80, >=60, resto.
    pub fn from_percentage(percentage: u32) -> Self {
        if percentage >= 100 {
            ResultTier::Perfect
        } else if percentage >= 80 {
            ResultTier::Excellent
        } else if percentage >= 60 {
            ResultTier::Good
        } else {
            ResultTier::NeedsRetry
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ResultTier::Perfect => "perfect",
            ResultTier::Excellent => "excellent",
            ResultTier::Good => "good",
            ResultTier::NeedsRetry => "needs-retry",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResultTier::Perfect => "🏆",
            ResultTier::Excellent => "🎉",
            ResultTier::Good => "👍",
            ResultTier::NeedsRetry => "📚",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ResultTier::Perfect => "¡Perfecto! Has acertado todas las preguntas.",
            ResultTier::Excellent => "¡Excelente! Dominas el tema.",
            ResultTier::Good => "¡Bien! Repasa los puntos en los que fallaste.",
            ResultTier::NeedsRetry => "Te conviene repasar la lección y volver a intentarlo.",
        }
    }
}

/// `round(score / total * 100)`; `total` nunca es 0 en una sesión válida.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 / total as f64 * 100.0).round() as u32
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub tier: ResultTier,
    pub elapsed: Duration,
}

impl QuizResult {
    pub fn new(score: usize, total: usize, elapsed: Duration) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            tier: ResultTier::from_percentage(percentage),
            elapsed,
        }
    }
}
