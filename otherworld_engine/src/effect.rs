//! Effect Module
//!
//! Timed stat modifiers (poison, healing, blessings...) and the once-per-turn tick
//! that applies them to a character's stats.
use std::cmp;

use log::info;
use otherworld_data::{EffectDef, StatKind};

/// Core numbers describing a character.
///
/// Fields are private: after construction the only writer is [`tick_effects`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStats {
    max_hp: i32,
    hp: i32,
    attack: i32,
    defense: i32,
}
impl CharacterStats {
    /// Create stats at full health.
    pub fn new(max_hp: i32, attack: i32, defense: i32) -> CharacterStats {
        CharacterStats {
            max_hp,
            hp: max_hp,
            attack,
            defense,
        }
    }

    /// Create stats with an explicit current hp, e.g. for a wounded character.
    pub fn with_hp(mut self, hp: i32) -> CharacterStats {
        self.hp = hp;
        self
    }

    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    pub fn hp(&self) -> i32 {
        self.hp
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Value of a single stat.
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
        }
    }

    /// Shift one stat by `delta`. Healing saturates at `max_hp`; damage is unbounded
    /// so an overkill shows up as negative hp.
    fn modified(mut self, stat: StatKind, delta: i32) -> CharacterStats {
        match stat {
            StatKind::Hp => {
                let raised = self.hp.saturating_add(delta);
                self.hp = if delta > 0 { cmp::min(raised, cmp::max(self.hp, self.max_hp)) } else { raised };
            },
            StatKind::Attack => self.attack = self.attack.saturating_add(delta),
            StatKind::Defense => self.defense = self.defense.saturating_add(delta),
        }
        self
    }
}

/// An active, time-bounded modifier of one stat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effect {
    pub name: String,
    pub stat: StatKind,
    /// Change applied to the stat each turn.
    pub magnitude: i32,
    /// Ticks left before the effect expires.
    pub remaining_duration: i32,
}
impl Effect {
    pub fn new(name: &str, stat: StatKind, magnitude: i32, duration: i32) -> Effect {
        Effect {
            name: name.to_string(),
            stat,
            magnitude,
            remaining_duration: duration,
        }
    }

    /// Applies this effect once, returning the modified stats and the decremented effect.
    pub fn apply(&self, stats: CharacterStats) -> (CharacterStats, Effect) {
        let next = Effect {
            remaining_duration: self.remaining_duration.saturating_sub(1),
            ..self.clone()
        };
        (stats.modified(self.stat, self.magnitude), next)
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_duration <= 0
    }
}

impl From<&EffectDef> for Effect {
    fn from(def: &EffectDef) -> Self {
        Effect::new(&def.name, def.stat, def.magnitude, def.duration)
    }
}

/// Outcome of one effect tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectTick {
    pub stats: CharacterStats,
    /// Effects still active after the tick, in their original order.
    pub effects: Vec<Effect>,
    /// One line per applied effect, plus a death notice if the owner died.
    pub log: Vec<String>,
    pub died: bool,
}

/// Apply every effect once, in the order they were added, then drop the exhausted ones.
///
/// Effects added with a duration of zero or less are still applied on this tick and
/// removed right after it.
pub fn tick_effects(stats: CharacterStats, effects: &[Effect], owner_name: &str) -> EffectTick {
    let mut running = stats;
    let mut ongoing = Vec::with_capacity(effects.len());
    let mut log = Vec::new();
    for fx in effects {
        let (updated_stats, updated_fx) = fx.apply(running);
        running = updated_stats;
        info!(
            "{owner_name} affected by '{}' ({} {:+}, {} turns left)",
            fx.name, fx.stat, fx.magnitude, updated_fx.remaining_duration
        );
        log.push(format!(
            "{owner_name} is under effect of {} - {} changed by {}.",
            fx.name, fx.stat, fx.magnitude
        ));
        if !updated_fx.is_expired() {
            ongoing.push(updated_fx);
        }
    }
    let died = running.is_dead();
    if died {
        info!("{owner_name} died with {} hp", running.hp());
        log.push(format!("{owner_name} died."));
    }
    EffectTick {
        stats: running,
        effects: ongoing,
        log,
        died,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_turn_effect_applies_once_then_expires() {
        let stats = CharacterStats::new(10, 3, 3);
        let fx = vec![Effect::new("bruise", StatKind::Hp, -1, 1)];

        let first = tick_effects(stats, &fx, "Tester");
        assert_eq!(first.stats.hp(), 9);
        assert!(first.effects.is_empty());
        assert_eq!(first.log.len(), 1);

        let second = tick_effects(first.stats, &first.effects, "Tester");
        assert_eq!(second.stats.hp(), 9);
        assert!(second.log.is_empty());
    }

    #[test]
    fn zero_or_negative_duration_is_removed_after_one_tick() {
        let stats = CharacterStats::new(10, 3, 3);
        let fx = vec![
            Effect::new("fizzle", StatKind::Hp, -1, 0),
            Effect::new("dud", StatKind::Hp, -1, -4),
        ];

        let first = tick_effects(stats, &fx, "Tester");
        assert_eq!(first.stats.hp(), 8);
        assert!(first.effects.is_empty());

        let second = tick_effects(first.stats, &first.effects, "Tester");
        assert_eq!(second.stats.hp(), 8);
    }

    #[test]
    fn longer_effects_count_down_in_order() {
        let stats = CharacterStats::new(10, 3, 3);
        let fx = vec![
            Effect::new("poison", StatKind::Hp, -2, 3),
            Effect::new("blessing", StatKind::Attack, 1, 2),
        ];

        let tick = tick_effects(stats, &fx, "Tester");
        assert_eq!(tick.stats.hp(), 8);
        assert_eq!(tick.stats.attack(), 4);
        assert_eq!(tick.effects[0].name, "poison");
        assert_eq!(tick.effects[0].remaining_duration, 2);
        assert_eq!(tick.effects[1].remaining_duration, 1);
        assert!(tick.log[0].contains("poison - hp changed by -2"));
    }

    #[test]
    fn healing_saturates_at_max_hp() {
        let stats = CharacterStats::new(10, 0, 0).with_hp(8);
        let tick = tick_effects(stats, &[Effect::new("salve", StatKind::Hp, 5, 1)], "Tester");
        assert_eq!(tick.stats.hp(), 10);
    }

    #[test]
    fn lethal_effect_reports_death_below_zero() {
        let stats = CharacterStats::new(10, 0, 0).with_hp(2);
        let tick = tick_effects(stats, &[Effect::new("venom", StatKind::Hp, -5, 1)], "Tester");
        assert_eq!(tick.stats.hp(), -3);
        assert!(tick.died);
        assert_eq!(tick.log.last().map(String::as_str), Some("Tester died."));
    }
}
