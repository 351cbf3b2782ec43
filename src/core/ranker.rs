use crate::core::classifier::PriorityModel;
use crate::core::features::extract_features;
use crate::core::scoring::{priority_from_rule_score, rule_score};
use crate::models::{EventRecord, RankedEvent, RuleWeights};

/// How per-event priorities are produced
///
/// Selected once, when the service is wired up: either the fixed rules alone,
/// or the rules blended with a pre-trained classifier.
#[derive(Debug, Clone)]
pub enum ScoreStrategy {
    RuleOnly,
    Blended(PriorityModel),
}

/// Ranks booked events by combined score
///
/// Combined score = rule score + ml score * ml weight, where the ml score is
/// zero under the rule-only strategy. Pure over its inputs; safe to share
/// across concurrent requests.
#[derive(Debug, Clone)]
pub struct Ranker {
    weights: RuleWeights,
    strategy: ScoreStrategy,
}

impl Ranker {
    pub fn new(weights: RuleWeights) -> Self {
        Self {
            weights,
            strategy: ScoreStrategy::RuleOnly,
        }
    }

    pub fn with_model(weights: RuleWeights, model: PriorityModel) -> Self {
        Self {
            weights,
            strategy: ScoreStrategy::Blended(model),
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(RuleWeights::default())
    }

    /// Score, label, and sort events by descending combined score
    ///
    /// The sort is stable: events with equal combined scores keep their input
    /// order. Source records are decorated, never altered.
    pub fn rank(&self, events: Vec<EventRecord>) -> Vec<RankedEvent> {
        let mut ranked: Vec<RankedEvent> = events
            .into_iter()
            .map(|mut event| {
                // Re-submitted payloads may carry stale decorations
                event.extra.remove("priority");
                event.extra.remove("score");

                let rule = rule_score(&event, &self.weights);

                let (ml, priority) = match &self.strategy {
                    ScoreStrategy::RuleOnly => (0, priority_from_rule_score(rule, &self.weights)),
                    ScoreStrategy::Blended(model) => {
                        let predicted = model.predict(&extract_features(&event));
                        (predicted.ml_score(), predicted)
                    }
                };

                RankedEvent {
                    event,
                    priority,
                    score: rule + ml * self.weights.ml_weight,
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn event(title: &str, event_type: &str, venue: &str, expected_count: i64) -> EventRecord {
        serde_json::from_value(serde_json::json!({
            "title": title,
            "eventType": event_type,
            "venue": venue,
            "expected_count": expected_count,
        }))
        .unwrap()
    }

    #[test]
    fn test_rule_only_ordering_and_priorities() {
        let ranker = Ranker::with_default_weights();

        let events = vec![
            event("Open Mic", "cultural", "Open Grounds", 10),
            event("Research Expo", "academic", "Main Auditorium", 150),
        ];

        let ranked = ranker.rank(events);

        assert_eq!(ranked[0].event.title, "Research Expo");
        assert_eq!(ranked[0].score, 5);
        assert_eq!(ranked[0].priority, Priority::High);
        assert_eq!(ranked[1].event.title, "Open Mic");
        assert_eq!(ranked[1].score, 0);
        assert_eq!(ranked[1].priority, Priority::Low);
    }

    #[test]
    fn test_equal_scores_preserve_input_order() {
        let ranker = Ranker::with_default_weights();

        let events = vec![
            event("First", "sports", "Lab 1", 10),
            event("Second", "sports", "Lab 2", 20),
            event("Third", "sports", "Lab 3", 30),
        ];

        let ranked = ranker.rank(events);
        let titles: Vec<&str> = ranked.iter().map(|r| r.event.title.as_str()).collect();

        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let ranker = Ranker::with_default_weights();

        let events = vec![
            event("A", "cultural", "Open Grounds", 10),
            event("B", "academic", "Main Auditorium", 150),
            event("C", "workshop", "Seminar Hall", 120),
        ];

        let once = ranker.rank(events);
        let titles_once: Vec<String> = once.iter().map(|r| r.event.title.clone()).collect();

        let again = ranker.rank(once.into_iter().map(|r| r.event).collect());
        let titles_again: Vec<String> = again.iter().map(|r| r.event.title.clone()).collect();

        assert_eq!(titles_once, titles_again);
    }

    #[test]
    fn test_medium_threshold() {
        let ranker = Ranker::with_default_weights();

        // Academic in a plain room: rule score 2
        let ranked = ranker.rank(vec![event("Colloquium", "academic", "Room 101", 40)]);

        assert_eq!(ranked[0].score, 2);
        assert_eq!(ranked[0].priority, Priority::Medium);
    }

    #[test]
    fn test_stale_decorations_are_replaced() {
        let ranker = Ranker::with_default_weights();

        // As if a previously ranked payload came back for re-ranking
        let stale: EventRecord = serde_json::from_value(serde_json::json!({
            "title": "Research Expo",
            "eventType": "academic",
            "venue": "Main Auditorium",
            "expected_count": 150,
            "priority": "Low",
            "score": 0,
        }))
        .unwrap();

        let ranked = ranker.rank(vec![stale]);
        let out = serde_json::to_value(&ranked[0]).unwrap();

        assert_eq!(out["priority"], "High");
        assert_eq!(out["score"], 5);
    }

    #[test]
    fn test_blended_strategy_weights_classifier() {
        // Single centroid pins every prediction to "high"
        let model: PriorityModel = serde_json::from_str(
            r#"{
                "scaler": {"mins": [0,0,0,0,0], "scales": [1,1,1,1,1]},
                "centroids": [{"label": "high", "point": [0,0,0,0,0]}]
            }"#,
        )
        .unwrap();
        let ranker = Ranker::with_model(RuleWeights::default(), model);

        let ranked = ranker.rank(vec![event("Open Mic", "cultural", "Open Grounds", 10)]);

        // rule 0 + ml 2 * weight 3
        assert_eq!(ranked[0].score, 6);
        assert_eq!(ranked[0].priority, Priority::High);
    }
}
