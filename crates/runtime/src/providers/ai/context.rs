//! Per-decision blackboard for the policy's behavior tree.
//!
//! [`HeroContext`] is built fresh for every snapshot. It owns the local-area
//! survey, memoises goal searches so a rule chain never runs the same BFS
//! twice, and collects the single [`Decision`] the tree commits to.

use std::collections::HashMap;

use arena_core::{
    AreaSurvey, Direction, GameSnapshot, Goal, Hero, LocalAreaScanner, Move, PathMatch,
    PolicyConfig, TacticalEvaluation, find_goal, grid,
};

use super::types::{Decision, HealthCap, Kin, Rule};

/// Context for one decision of the active hero.
///
/// The `'a` lifetime ties the context to the snapshot and configuration it
/// reads; both outlive the tree evaluation, which runs synchronously.
pub struct HeroContext<'a> {
    snapshot: &'a GameSnapshot,
    config: &'a PolicyConfig,
    survey: AreaSurvey,
    paths: HashMap<Goal, Option<PathMatch>>,
    decision: Option<Decision>,
}

impl<'a> HeroContext<'a> {
    /// Surveys the hero's surroundings and starts with no decision.
    pub fn new(snapshot: &'a GameSnapshot, config: &'a PolicyConfig) -> Self {
        Self {
            snapshot,
            config,
            survey: LocalAreaScanner::survey(snapshot, config),
            paths: HashMap::new(),
            decision: None,
        }
    }

    #[inline]
    pub fn snapshot(&self) -> &'a GameSnapshot {
        self.snapshot
    }

    #[inline]
    pub fn config(&self) -> &'a PolicyConfig {
        self.config
    }

    #[inline]
    pub fn hero(&self) -> &'a Hero {
        self.snapshot.hero()
    }

    #[inline]
    pub fn health(&self) -> u32 {
        self.hero().health
    }

    #[inline]
    pub fn survey(&self) -> &AreaSurvey {
        &self.survey
    }

    /// Tactical evaluation of the hero's own tile.
    #[inline]
    pub fn own(&self) -> &TacticalEvaluation {
        &self.survey.own
    }

    /// Nearest tile satisfying `goal`. Each goal is searched at most once per
    /// decision.
    pub fn path_to(&mut self, goal: Goal) -> Option<PathMatch> {
        let snapshot = self.snapshot;
        *self
            .paths
            .entry(goal)
            .or_insert_with(|| find_goal(snapshot, goal))
    }

    /// Live heroes on the four adjacent tiles, in scan order.
    pub fn adjacent_heroes(&self) -> impl Iterator<Item = (Direction, &'a Hero)> + use<'a> {
        let snapshot = self.snapshot;
        let me = snapshot.hero();
        grid::neighbors(snapshot.board(), snapshot.hero_position()).filter_map(
            move |(direction, tile)| {
                tile.live_hero()
                    .filter(|other| other.id != me.id)
                    .map(|other| (direction, other))
            },
        )
    }

    /// Adjacent live heroes of the given kin.
    pub fn adjacent(&self, kin: Kin) -> impl Iterator<Item = (Direction, &'a Hero)> + use<'a> {
        let me = self.hero();
        self.adjacent_heroes()
            .filter(move |(_, other)| kin.includes(me, other))
    }

    /// Weakest adjacent hero of `kin` whose health respects `cap`. Ties go to
    /// the first one in scan order.
    pub fn weakest_neighbour(&self, kin: Kin, cap: HealthCap) -> Option<(Direction, &'a Hero)> {
        let ceiling = match cap {
            HealthCap::Unbounded => u32::MAX,
            HealthCap::OwnHealth => self.health(),
            HealthCap::BelowFull => self.config.health.full.saturating_sub(1),
        };
        self.adjacent(kin)
            .filter(|(_, other)| other.health <= ceiling)
            .min_by_key(|(_, other)| other.health)
    }

    /// Records the move for this turn.
    ///
    /// # Panics
    ///
    /// Panics if a decision was already recorded. That means two action
    /// nodes succeeded in one evaluation, which is a bug in the tree.
    pub fn commit(&mut self, mv: Move, rule: Rule) {
        if let Some(previous) = self.decision {
            panic!(
                "decision already committed for hero {} ({} by {}), refusing {} by {}",
                self.hero().id,
                previous.mv,
                previous.rule,
                mv,
                rule
            );
        }
        tracing::trace!(hero = %self.hero().id, %rule, %mv, "rule fired");
        self.decision = Some(Decision::new(mv, rule));
    }

    pub fn has_decision(&self) -> bool {
        self.decision.is_some()
    }

    /// Consumes the context, returning the committed decision if any.
    pub fn take_decision(self) -> Option<Decision> {
        self.decision
    }
}
