use std::collections::BTreeMap;

use tracing::warn;

use backend_domain::{
    combat_level, milestones, total_experience, CombatSkills, PlayerName, PlayerProfile,
    ScoreboardRecord, Skill, SkillLevel,
};

use crate::upstream::{bounded, upstream_limit};
use crate::{AppError, AppState};

pub async fn player_profile(
    state: &AppState,
    raw_username: Option<&str>,
) -> Result<PlayerProfile, AppError> {
    let raw = raw_username.unwrap_or_default();
    let player = PlayerName::parse(raw).map_err(|err| AppError::InvalidInput(err.to_string()))?;

    let fetched = bounded(
        upstream_limit(state),
        state.scoreboard.fetch_scoreboard(&player),
    )
    .await;
    let record = fetched
        .map_err(|err| err.to_string())
        .and_then(|csv| ScoreboardRecord::parse(&csv).map_err(|err| err.to_string()))
        .map_err(|reason| {
            state.metrics.record_upstream_failure();
            warn!(player = %player, "profile lookup failed: {}", reason);
            AppError::UpstreamUnavailable(format!("scoreboard lookup failed for '{}'", player))
        })?;

    let skills: BTreeMap<String, SkillLevel> = Skill::ALL
        .iter()
        .filter_map(|skill| {
            record.skill(*skill).map(|entry| {
                (
                    skill.as_str().to_string(),
                    SkillLevel {
                        level: entry.level.max(0),
                        xp: entry.experience,
                    },
                )
            })
        })
        .collect();

    let skill_map = match serde_json::to_value(&skills) {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(_) => serde_json::Map::new(),
        Err(err) => return Err(AppError::Internal(err.into())),
    };

    Ok(PlayerProfile {
        account_name: raw.trim().to_string(),
        combat_level: combat_level(&CombatSkills::from_levels(&skills)),
        total_experience: total_experience(&skill_map),
        milestones: milestones(&skills),
        skills,
        bosses: record.boss_kill_counts(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{scoreboard_payload, TestHarness};

    #[tokio::test]
    async fn profile_derives_combat_level_and_experience() {
        let harness = TestHarness::new();
        harness
            .scoreboard
            .respond_with(scoreboard_payload(16_965_421, &[(79, 42)]));
        let profile = player_profile(&harness.state, Some(" FoolinSlays "))
            .await
            .expect("profile");

        assert_eq!(profile.account_name, "FoolinSlays");
        assert_eq!(profile.skills.len(), 24);
        assert_eq!(profile.skills["attack"], SkillLevel { level: 70, xp: 737_627 });
        // every skill at 70: base 0.25 * (70 + 70 + 35) = 43.75, melee 0.325 * 140 = 45.5
        assert_eq!(profile.combat_level, 89);
        // overall is excluded from the client-side sum
        assert_eq!(profile.total_experience, 23 * 737_627);
        assert_eq!(profile.bosses.get("vorkath"), Some(&42));
        assert_eq!(profile.milestones.total_level, 1850);
        assert_eq!(profile.milestones.total_xp, 16_965_421);
        assert_eq!(profile.milestones.skills_70, 23);
        assert_eq!(profile.milestones.skills_80, 0);
        assert_eq!(profile.milestones.num_skills, 23);
        assert!(!profile.milestones.maxed);
        assert!(harness.snapshots.rows().is_empty());
    }

    #[tokio::test]
    async fn profile_requires_a_username() {
        let harness = TestHarness::new();
        let err = player_profile(&harness.state, Some(""))
            .await
            .expect_err("reject");
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert_eq!(harness.scoreboard.calls(), 0);
    }

    #[tokio::test]
    async fn profile_maps_scoreboard_failure() {
        let harness = TestHarness::new();
        harness.scoreboard.fail_with("503 Service Unavailable");
        let err = player_profile(&harness.state, Some("foolinslays"))
            .await
            .expect_err("fail");
        assert!(matches!(err, AppError::UpstreamUnavailable(_)));
    }
}
