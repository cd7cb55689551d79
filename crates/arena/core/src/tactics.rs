//! Tactical signals for a single tile.
//!
//! [`evaluate`] looks at the four neighbours of a tile and reports how
//! dangerous standing there would be, how many enemies could be finished
//! from there, and where the nearest well or exact-kill target sits. The
//! evaluation is read-only: it only inspects the board.

use arrayvec::ArrayVec;

use crate::action::Direction;
use crate::config::TacticsConfig;
use crate::grid;
use crate::state::{Board, Hero, Position, Tile};

/// Combat and opportunity signals around one tile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TacticalEvaluation {
    /// Expected pressure from adjacent heroes; negative next to healers.
    pub threat: i32,
    /// Non-zero when an enemy stands two steps away through open ground.
    pub distant_threat: i32,
    /// Adjacent enemies that could be finished off.
    pub kills: u32,
    /// Positions of the live heroes adjacent to the tile.
    pub neighbours: ArrayVec<Position, 4>,
    /// Direction of an adjacent health well.
    pub direction_to_well: Option<Direction>,
    /// Direction of the enemy the active hero can finish this turn. Only set
    /// when evaluating the active hero's own tile.
    pub direction_to_attack: Option<Direction>,
}

/// Scores the neighbourhood of `tile` from `hero`'s point of view.
///
/// Allies never add threat or count as kills, whatever their health; an
/// ally that has healed someone lowers the threat by `support_relief`.
pub fn evaluate(board: &Board, tile: &Tile, hero: &Hero, config: &TacticsConfig) -> TacticalEvaluation {
    let mut evaluation = TacticalEvaluation::default();
    // only the hero's own tile can claim the single exact-kill attack
    let mut attack_available = tile.is_occupied_by(hero);

    for (direction, neighbour) in grid::neighbors(board, tile.position) {
        if evaluation.distant_threat == 0
            && (neighbour.is_unoccupied() || neighbour.is_occupied_by(hero))
        {
            evaluation.distant_threat = distant_threat(board, neighbour, hero, config);
        }

        if neighbour.is_health_well() {
            evaluation.direction_to_well = Some(direction);
        }

        let Some(other) = neighbour.live_hero() else {
            continue;
        };
        if other.id == hero.id {
            continue;
        }

        evaluation.neighbours.push(neighbour.position);

        if other.is_ally_of(hero) {
            if other.health_given > 0 {
                evaluation.threat -= config.support_relief;
            }
            continue;
        }

        if other.health <= config.finishing_health {
            evaluation.kills += 1;
        } else if attack_available && other.health == config.exact_kill_health {
            evaluation.direction_to_attack = Some(direction);
            evaluation.kills += 1;
            attack_available = false;
        } else {
            evaluation.threat += strike_weight(hero, other, config);
        }
    }

    evaluation
}

/// `config.distant_threat` if a live enemy adjacent to `tile` could strike
/// at full strength, otherwise 0.
pub fn distant_threat(board: &Board, tile: &Tile, hero: &Hero, config: &TacticsConfig) -> i32 {
    let menaced = grid::neighbors(board, tile.position).any(|(_, neighbour)| {
        neighbour.live_hero().is_some_and(|other| {
            !other.is_ally_of(hero) && (!hero.has_acted() || other.has_acted())
        })
    });

    if menaced { config.distant_threat } else { 0 }
}

/// Threat an adjacent enemy adds: full weight when it strikes before the
/// hero can react, reduced when the hero moves first.
fn strike_weight(hero: &Hero, enemy: &Hero, config: &TacticsConfig) -> i32 {
    if !hero.has_acted() || enemy.has_acted() {
        config.exposed_threat
    } else {
        config.guarded_threat
    }
}

/// Rough damage-per-turn guess for a hero from its round statistics.
///
/// Heroes that have killed or dealt damage beyond plain 20-point hits are
/// treated as hard hitters (30); pure healers as harmless (0); everyone else
/// hits for 20.
pub fn estimate_aggression(hero: &Hero) -> u32 {
    if hero.damage_done % 20 != 0 || !hero.heroes_killed.is_empty() {
        30
    } else if hero.health_recovered > 0 && hero.damage_done == 0 {
        0
    } else {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BoardBuilder, HeroId, TeamId};

    const ME: Position = Position::new(2, 2);

    fn hero(id: u32, team: u32, health: u32) -> Hero {
        Hero::new(HeroId(id), format!("h{id}"), TeamId(team), health)
    }

    fn me() -> Hero {
        hero(1, 0, 100)
    }

    fn own_evaluation(builder: BoardBuilder) -> TacticalEvaluation {
        let board = builder.hero(ME.row, ME.col, me()).build();
        let tile = board.tile(ME).unwrap();
        evaluate(&board, tile, &me(), &TacticsConfig::default())
    }

    #[test]
    fn exact_thirty_enemy_sets_attack_direction() {
        let eval = own_evaluation(BoardBuilder::new(5).hero(2, 3, hero(2, 1, 30)));
        assert_eq!(eval.direction_to_attack, Some(Direction::East));
        assert_eq!(eval.kills, 1);
        assert_eq!(eval.neighbours.as_slice(), [Position::new(2, 3)]);
    }

    #[test]
    fn weak_enemy_counts_as_kill_without_attack_direction() {
        let eval = own_evaluation(BoardBuilder::new(5).hero(1, 2, hero(2, 1, 15)));
        assert_eq!(eval.kills, 1);
        assert_eq!(eval.direction_to_attack, None);
    }

    #[test]
    fn only_first_exact_thirty_enemy_claims_the_attack() {
        let eval = own_evaluation(
            BoardBuilder::new(5)
                .hero(1, 2, hero(2, 1, 30))
                .hero(3, 2, hero(3, 1, 30)),
        );
        assert_eq!(eval.direction_to_attack, Some(Direction::North));
        assert_eq!(eval.kills, 1);
        // second one is scored as a threat instead (hero has not acted yet)
        assert_eq!(eval.threat, TacticsConfig::DEFAULT_EXPOSED_THREAT);
    }

    #[test]
    fn exact_thirty_on_other_tiles_is_only_a_threat() {
        let board = BoardBuilder::new(5)
            .hero(ME.row, ME.col, me())
            .hero(0, 1, hero(2, 1, 30))
            .build();
        let tile = board.tile(Position::new(0, 2)).unwrap();
        let eval = evaluate(&board, tile, &me(), &TacticsConfig::default());
        assert_eq!(eval.kills, 0);
        assert_eq!(eval.direction_to_attack, None);
        assert_eq!(eval.threat, 30);
    }

    #[test]
    fn healer_ally_relieves_threat() {
        let eval = own_evaluation(
            BoardBuilder::new(5)
                .hero(2, 1, hero(2, 0, 90).with_health_given(10))
                .hero(2, 3, hero(3, 0, 10)),
        );
        assert_eq!(eval.threat, -40);
        // a wounded ally is not a kill
        assert_eq!(eval.kills, 0);
        assert_eq!(eval.neighbours.len(), 2);
    }

    #[test]
    fn threat_weight_depends_on_who_moves_first() {
        let config = TacticsConfig::default();
        let rested = hero(1, 0, 100).with_last_active_turn(4);
        let waiting_enemy = hero(2, 1, 90);
        let spent_enemy = hero(3, 1, 90).with_last_active_turn(2);

        assert_eq!(strike_weight(&me(), &waiting_enemy, &config), 30);
        assert_eq!(strike_weight(&rested, &waiting_enemy, &config), 20);
        assert_eq!(strike_weight(&rested, &spent_enemy, &config), 30);
    }

    #[test]
    fn dead_heroes_are_ignored() {
        let eval = own_evaluation(BoardBuilder::new(5).hero(2, 3, hero(2, 1, 10).dead()));
        assert_eq!(eval, TacticalEvaluation::default());
    }

    #[test]
    fn records_adjacent_well() {
        let eval = own_evaluation(BoardBuilder::new(5).health_well(3, 2));
        assert_eq!(eval.direction_to_well, Some(Direction::South));
    }

    #[test]
    fn distant_enemy_through_open_ground() {
        // enemy two steps north of the hero
        let eval = own_evaluation(BoardBuilder::new(5).hero(0, 2, hero(2, 1, 100)));
        assert_eq!(eval.distant_threat, TacticsConfig::DEFAULT_DISTANT_THREAT);
        assert_eq!(eval.threat, 0);
    }

    #[test]
    fn distant_threat_ignores_enemies_that_have_not_acted_when_hero_has() {
        let board = BoardBuilder::new(5).hero(0, 2, hero(2, 1, 100)).build();
        let rested = hero(1, 0, 100).with_last_active_turn(1);
        let tile = board.tile(Position::new(1, 2)).unwrap();
        assert_eq!(distant_threat(&board, tile, &rested, &TacticsConfig::default()), 0);
        assert_eq!(distant_threat(&board, tile, &me(), &TacticsConfig::default()), 20);
    }

    #[test]
    fn aggression_estimate() {
        assert_eq!(estimate_aggression(&hero(1, 0, 100)), 20);
        assert_eq!(estimate_aggression(&hero(1, 0, 100).with_damage_done(50)), 30);
        assert_eq!(estimate_aggression(&hero(1, 0, 100).with_kill(HeroId(9))), 30);
        assert_eq!(estimate_aggression(&hero(1, 0, 100).with_health_recovered(30)), 0);
        assert_eq!(
            estimate_aggression(&hero(1, 0, 100).with_damage_done(40).with_health_recovered(30)),
            20
        );
    }
}
