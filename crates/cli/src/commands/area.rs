//! Print the local-area scan around the active hero.

use std::path::PathBuf;

use anyhow::Result;
use arena_content::SnapshotLoader;
use arena_core::{
    AreaSurvey, GameSnapshot, LocalAreaScanner, PolicyConfig, ScanTarget, TacticalEvaluation,
    estimate_aggression,
};
use clap::Parser;

/// Print the local-area scan around the active hero
#[derive(Parser)]
pub struct Area {
    /// Snapshot JSON in the host's format
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Only list cells with a kill or non-zero threat
    #[arg(short, long)]
    interesting: bool,
}

impl Area {
    pub fn execute(self, config: PolicyConfig) -> Result<()> {
        let snapshot = SnapshotLoader::load(&self.snapshot)?;
        let survey = LocalAreaScanner::survey(&snapshot, &config);

        for line in report(&snapshot, &survey, self.interesting) {
            println!("{line}");
        }
        Ok(())
    }
}

fn report(snapshot: &GameSnapshot, survey: &AreaSurvey, interesting_only: bool) -> Vec<String> {
    let hero = snapshot.hero();
    let mut lines = vec![format!(
        "hero {} ({}) at {} health {}",
        hero.id,
        hero.name,
        snapshot.hero_position(),
        hero.health
    )];

    for (root, cell) in survey.area.cells() {
        let (Some(position), Some(evaluation)) = (cell.position, &cell.evaluation) else {
            continue;
        };
        if interesting_only && !is_interesting(evaluation) {
            continue;
        }
        lines.push(format!(
            "{:<5} {} {}: {}",
            label(ScanTarget::Branch(root)),
            position,
            cell.tile_type,
            describe(evaluation)
        ));
    }

    if !interesting_only || is_interesting(&survey.own) {
        lines.push(format!("{:<5} {}", label(ScanTarget::Own), describe(&survey.own)));
    }

    for position in &survey.own.neighbours {
        let Some(other) = snapshot.board().tile(*position).and_then(|tile| tile.live_hero()) else {
            continue;
        };
        lines.push(format!(
            "neighbour {} ({}) at {} health {} aggression {}",
            other.id,
            other.team,
            position,
            other.health,
            estimate_aggression(other)
        ));
    }

    lines
}

fn label(target: ScanTarget) -> &'static str {
    match target {
        ScanTarget::Branch(direction) => direction.into(),
        ScanTarget::Own => "Own",
    }
}

fn is_interesting(evaluation: &TacticalEvaluation) -> bool {
    evaluation.kills > 0 || evaluation.threat != 0 || evaluation.distant_threat != 0
}

fn describe(evaluation: &TacticalEvaluation) -> String {
    let mut text = format!(
        "threat {} distant {} kills {}",
        evaluation.threat, evaluation.distant_threat, evaluation.kills
    );
    if let Some(direction) = evaluation.direction_to_well {
        text.push_str(&format!(" well {direction}"));
    }
    if let Some(direction) = evaluation.direction_to_attack {
        text.push_str(&format!(" attack {direction}"));
    }
    text
}

#[cfg(test)]
mod tests {
    use arena_core::{BoardBuilder, Hero, HeroId, Position, TeamId};

    use super::*;

    #[test]
    fn reports_own_tile_and_neighbours() {
        let snapshot = BoardBuilder::new(3)
            .hero(1, 1, Hero::new(HeroId(1), "me", TeamId(0), 100))
            .hero(1, 2, Hero::new(HeroId(2), "them", TeamId(1), 30).with_damage_done(30))
            .health_well(0, 1)
            .snapshot(Position::new(1, 1))
            .unwrap();
        let survey = LocalAreaScanner::survey(&snapshot, &PolicyConfig::default());

        let lines = report(&snapshot, &survey, true);
        assert_eq!(lines[0], "hero #1 (me) at (1, 1) health 100");
        assert!(lines.contains(&"Own   threat 0 distant 0 kills 1 well North attack East".to_string()));
        assert!(lines.contains(&"East  (1, 2) Hero: threat 0 distant 20 kills 0".to_string()));
        assert_eq!(
            lines.last().unwrap(),
            "neighbour #2 (team 1) at (1, 2) health 30 aggression 30"
        );
    }
}
