use crate::entities::Snapshot;

/// Experience gained since `baseline`; no baseline means no gains yet.
pub fn gains_since(current_total: i64, baseline: Option<&Snapshot>) -> i64 {
    baseline
        .map(|snapshot| current_total - snapshot.total_experience)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(total_experience: i64) -> Snapshot {
        Snapshot {
            lookup_id: "lookup".to_string(),
            player: "foolinslays".to_string(),
            total_experience,
            raw_payload: String::new(),
            recorded_at_ms: 0,
        }
    }

    #[test]
    fn gains_against_baseline() {
        assert_eq!(gains_since(1500, Some(&snapshot(1000))), 500);
    }

    #[test]
    fn no_baseline_means_zero() {
        assert_eq!(gains_since(1500, None), 0);
    }
}
