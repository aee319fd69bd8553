//! The bounded player attributes ("needs").

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named player attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Need {
    /// Hunger meter. Collapses at -1.
    Food,
    /// Thirst meter. Collapses at -1.
    Water,
    /// Fatigue meter. Collapses at -1.
    Energy,
    /// Fills up with eating, drinking and walking; an accident at 6.
    Bladder,
    /// Spendable currency.
    Resources,
    /// Opens the final door.
    Keycard,
    /// Story progress counter.
    Clues,
    /// Found in the hospital.
    Maps,
    /// Mental state. Collapses at -1.
    Sanity,
    /// Aggregate relationship score. Unbounded.
    Trust,
}

impl Need {
    /// Every need, in display order.
    pub const ALL: [Need; 10] = [
        Need::Food,
        Need::Water,
        Need::Energy,
        Need::Bladder,
        Need::Resources,
        Need::Keycard,
        Need::Clues,
        Need::Maps,
        Need::Sanity,
        Need::Trust,
    ];

    /// Needs whose depletion forces a collapse, in priority order.
    pub const CRITICAL: [Need; 4] = [Need::Food, Need::Water, Need::Energy, Need::Sanity];

    /// The display name, also used as the snapshot key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Need::Food => "Food",
            Need::Water => "Water",
            Need::Energy => "Energy",
            Need::Bladder => "Bladder",
            Need::Resources => "Resources",
            Need::Keycard => "Keycard",
            Need::Clues => "Clues",
            Need::Maps => "Maps",
            Need::Sanity => "Sanity",
            Need::Trust => "Trust",
        }
    }

    /// Inclusive `(min, max)` bound, or `None` for unbounded Trust.
    #[must_use]
    pub fn bounds(self) -> Option<(i32, i32)> {
        match self {
            Need::Food | Need::Water | Need::Energy | Need::Sanity => Some((-1, 10)),
            Need::Bladder => Some((0, 6)),
            Need::Clues => Some((0, 10)),
            Need::Maps => Some((0, 5)),
            Need::Keycard => Some((0, 1)),
            Need::Resources => Some((0, 999)),
            Need::Trust => None,
        }
    }

    /// The value shown as a full bar in the needs panel.
    #[must_use]
    pub fn gauge_max(self) -> i32 {
        match self {
            Need::Trust => 120,
            Need::Resources => 999,
            Need::Keycard => 1,
            Need::Maps => 5,
            _ => 10,
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current value of every need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Needs {
    /// Food level.
    pub food: i32,
    /// Water level.
    pub water: i32,
    /// Energy level.
    pub energy: i32,
    /// Bladder pressure.
    pub bladder: i32,
    /// Resources held.
    pub resources: i32,
    /// Keycard (0 or 1).
    pub keycard: i32,
    /// Clues found.
    pub clues: i32,
    /// Maps found.
    pub maps: i32,
    /// Sanity level.
    pub sanity: i32,
    /// Aggregate trust.
    pub trust: i32,
}

impl Default for Needs {
    fn default() -> Self {
        Self {
            food: 5,
            water: 5,
            energy: 5,
            bladder: 0,
            resources: 0,
            keycard: 0,
            clues: 0,
            maps: 0,
            sanity: 5,
            trust: 0,
        }
    }
}

impl Needs {
    /// Reads one need.
    #[must_use]
    pub fn get(&self, need: Need) -> i32 {
        match need {
            Need::Food => self.food,
            Need::Water => self.water,
            Need::Energy => self.energy,
            Need::Bladder => self.bladder,
            Need::Resources => self.resources,
            Need::Keycard => self.keycard,
            Need::Clues => self.clues,
            Need::Maps => self.maps,
            Need::Sanity => self.sanity,
            Need::Trust => self.trust,
        }
    }

    /// Mutable access to one need.
    pub fn slot(&mut self, need: Need) -> &mut i32 {
        match need {
            Need::Food => &mut self.food,
            Need::Water => &mut self.water,
            Need::Energy => &mut self.energy,
            Need::Bladder => &mut self.bladder,
            Need::Resources => &mut self.resources,
            Need::Keycard => &mut self.keycard,
            Need::Clues => &mut self.clues,
            Need::Maps => &mut self.maps,
            Need::Sanity => &mut self.sanity,
            Need::Trust => &mut self.trust,
        }
    }

    /// Overwrites one need without clamping.
    pub fn set(&mut self, need: Need, value: i32) {
        *self.slot(need) = value;
    }

    /// Display gauges for every need, in display order.
    #[must_use]
    pub fn gauges(&self) -> Vec<NeedGauge> {
        Need::ALL
            .iter()
            .map(|&need| NeedGauge::new(need, self.get(need)))
            .collect()
    }
}

/// One bar of the needs panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NeedGauge {
    /// Which need.
    pub need: Need,
    /// Current value.
    pub value: i32,
    /// Value drawn as a full bar.
    pub max: i32,
    /// Fill percentage in `[0, 100]`.
    pub percent: f64,
}

impl NeedGauge {
    fn new(need: Need, value: i32) -> Self {
        let max = need.gauge_max();
        let percent = (f64::from(value) / f64::from(max) * 100.0).clamp(0.0, 100.0);
        Self {
            need,
            value,
            max,
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_needs_match_a_fresh_game() {
        let needs = Needs::default();

        assert_eq!(needs.get(Need::Food), 5);
        assert_eq!(needs.get(Need::Water), 5);
        assert_eq!(needs.get(Need::Energy), 5);
        assert_eq!(needs.get(Need::Sanity), 5);
        assert_eq!(needs.get(Need::Bladder), 0);
        assert_eq!(needs.get(Need::Trust), 0);
    }

    #[test]
    fn test_set_and_get_address_the_same_field() {
        let mut needs = Needs::default();
        for (offset, need) in Need::ALL.iter().enumerate() {
            needs.set(*need, 100 + i32::try_from(offset).unwrap());
        }
        for (offset, need) in Need::ALL.iter().enumerate() {
            assert_eq!(needs.get(*need), 100 + i32::try_from(offset).unwrap());
        }
    }

    #[test]
    fn test_trust_is_the_only_unbounded_need() {
        let unbounded: Vec<Need> = Need::ALL
            .into_iter()
            .filter(|need| need.bounds().is_none())
            .collect();
        assert_eq!(unbounded, vec![Need::Trust]);
    }

    #[test]
    fn test_gauge_percent_is_clamped() {
        let mut needs = Needs::default();
        needs.trust = 240;
        needs.food = -1;

        let gauges = needs.gauges();
        let trust = gauges.iter().find(|g| g.need == Need::Trust).unwrap();
        let food = gauges.iter().find(|g| g.need == Need::Food).unwrap();

        assert_eq!(trust.max, 120);
        assert!((trust.percent - 100.0).abs() < f64::EPSILON);
        assert!(food.percent.abs() < f64::EPSILON);
    }

    #[test]
    fn test_needs_serialize_with_display_names() {
        let json = serde_json::to_value(Needs::default()).unwrap();
        assert_eq!(json["Food"], 5);
        assert_eq!(json["Resources"], 0);
        assert_eq!(json["Trust"], 0);
    }

    #[test]
    fn test_partial_needs_fill_missing_fields_with_defaults() {
        let needs: Needs = serde_json::from_value(serde_json::json!({ "Clues": 4 })).unwrap();
        assert_eq!(needs.clues, 4);
        assert_eq!(needs.food, 5);
    }
}
