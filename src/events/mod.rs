use bevy::prelude::*;

use crate::components::shake::TraumaMode;

/// Event reporting a trauma impulse to the tracked camera's shake ledger.
///
/// Routed to the `MainCamera` entity by `apply_trauma_events`; gameplay code
/// only needs an `EventWriter<TraumaEvent>`.
#[derive(Event, Debug, Clone)]
pub struct TraumaEvent {
    /// Ledger source name; `None` targets the default source.
    pub source: Option<String>,
    /// Per-axis trauma amount, expected non-negative.
    pub amount: Vec2,
    /// How the amount combines with what the source already holds.
    pub mode: TraumaMode,
}

impl TraumaEvent {
    /// A uniform additive burst on the default source, the common case for
    /// one-off impacts.
    pub fn burst(amount: f32) -> Self {
        Self {
            source: None,
            amount: Vec2::splat(amount),
            mode: TraumaMode::Add,
        }
    }

    /// A per-axis impulse under a named source.
    pub fn from_source(source: impl Into<String>, amount: Vec2, mode: TraumaMode) -> Self {
        Self {
            source: Some(source.into()),
            amount,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_burst_targets_default_source() {
        let event = TraumaEvent::burst(30.0);
        assert!(event.source.is_none());
        assert_eq!(event.amount, Vec2::splat(30.0));
        assert_eq!(event.mode, TraumaMode::Add);
    }

    #[test]
    fn test_from_source_keeps_axes() {
        let event = TraumaEvent::from_source("impact", Vec2::new(10.0, 2.0), TraumaMode::KeepMax);
        assert_eq!(event.source.as_deref(), Some("impact"));
        assert_eq!(event.amount, Vec2::new(10.0, 2.0));
    }
}
