//! Types for `user` selections.

use serde::Deserialize;

use crate::types::serde_helpers::{bool_from_int, empty_string_as_none, number_or_string};

/// Response of the `basic` selection.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBasic {
    /// Player gender.
    #[serde(default)]
    pub gender: String,
    /// Player level.
    pub level: u32,
    /// Player name.
    pub name: String,
    /// Player id.
    pub player_id: u64,
    /// Current status.
    pub status: Status,
}

/// Player status, e.g. "Okay", "Hospital" or "Traveling".
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    /// Status colour used by the game UI.
    #[serde(default)]
    pub color: String,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Longer explanation, absent for most states.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub details: Option<String>,
    /// Machine-readable state.
    pub state: String,
    /// Unix time the state ends, 0 if it does not.
    #[serde(default)]
    pub until: i64,
}

impl Status {
    /// Whether the player is free to act.
    pub fn is_okay(&self) -> bool {
        self.state == "Okay"
    }
}

/// Response of the `bars` selection.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBars {
    /// Server time the bars were read at.
    #[serde(default)]
    pub server_time: i64,
    pub energy: Bar,
    pub happy: Bar,
    pub life: Bar,
    pub nerve: Bar,
    /// Faction chain, if any.
    #[serde(default)]
    pub chain: Option<Chain>,
}

/// One regenerating bar.
#[derive(Debug, Clone, Deserialize)]
pub struct Bar {
    pub current: i64,
    pub maximum: i64,
    /// Amount gained per tick.
    #[serde(default)]
    pub increment: i64,
    /// Seconds between ticks.
    #[serde(default)]
    pub interval: i64,
    /// Seconds until the next tick.
    #[serde(default)]
    pub ticktime: i64,
    /// Seconds until the bar is full.
    #[serde(default)]
    pub fulltime: i64,
}

impl Bar {
    /// Whether the bar is at or above its maximum.
    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }
}

/// Faction chain state as seen in `bars`.
#[derive(Debug, Clone, Deserialize)]
pub struct Chain {
    pub current: i64,
    pub maximum: i64,
    /// Seconds until the chain times out.
    #[serde(default)]
    pub timeout: i64,
    /// Respect multiplier.
    #[serde(default, deserialize_with = "number_or_string::deserialize")]
    pub modifier: f64,
    /// Cooldown after the chain ended, in seconds.
    #[serde(default)]
    pub cooldown: i64,
}

/// Response of the `money` selection.
#[derive(Debug, Clone, Deserialize)]
pub struct UserMoney {
    #[serde(default)]
    pub cayman_bank: i64,
    #[serde(default)]
    pub city_bank: CityBank,
    #[serde(default)]
    pub company_funds: i64,
    #[serde(default)]
    pub daily_networth: i64,
    pub money_onhand: i64,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub vault_amount: i64,
}

/// City bank investment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityBank {
    pub amount: i64,
    /// Seconds until the investment matures.
    pub time_left: i64,
}

/// Response wrapper of the `ammo` selection.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AmmoResponse {
    #[serde(default)]
    pub ammo: Option<Vec<AmmoItem>>,
}

/// One stack of ammunition.
#[derive(Debug, Clone, Deserialize)]
pub struct AmmoItem {
    #[serde(rename = "ammoID")]
    pub ammo_id: u64,
    #[serde(default, deserialize_with = "bool_from_int::deserialize")]
    pub equipped: bool,
    pub quantity: u64,
    #[serde(default)]
    pub size: String,
    #[serde(rename = "type", default)]
    pub ammo_type: String,
    #[serde(rename = "typeID", default)]
    pub type_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_basic_deserialize() {
        let basic: UserBasic = serde_json::from_value(json!({
            "gender": "Male",
            "level": 15,
            "name": "Duke",
            "player_id": 4,
            "status": {
                "color": "red",
                "description": "In hospital for 12 mins",
                "details": "Mugged by someone",
                "state": "Hospital",
                "until": 1_700_000_000
            }
        }))
        .unwrap();

        assert_eq!(basic.player_id, 4);
        assert_eq!(basic.status.details.as_deref(), Some("Mugged by someone"));
        assert!(!basic.status.is_okay());
    }

    #[test]
    fn test_bars_without_chain() {
        let bars: UserBars = serde_json::from_value(json!({
            "server_time": 1_700_000_000,
            "energy": {"current": 150, "maximum": 150, "increment": 5, "interval": 600, "ticktime": 100, "fulltime": 0},
            "happy": {"current": 4000, "maximum": 5025, "increment": 5, "interval": 900, "ticktime": 300, "fulltime": 3000},
            "life": {"current": 100, "maximum": 7000, "increment": 420, "interval": 300, "ticktime": 30, "fulltime": 10000},
            "nerve": {"current": 10, "maximum": 60, "increment": 1, "interval": 300, "ticktime": 20, "fulltime": 14000}
        }))
        .unwrap();

        assert!(bars.energy.is_full());
        assert!(!bars.life.is_full());
        assert!(bars.chain.is_none());
    }

    #[test]
    fn test_money_with_missing_fields() {
        let money: UserMoney = serde_json::from_value(json!({
            "money_onhand": 2500,
            "points": 30
        }))
        .unwrap();

        assert_eq!(money.money_onhand, 2500);
        assert_eq!(money.city_bank.amount, 0);
    }

    #[test]
    fn test_ammo_item() {
        let response: AmmoResponse = serde_json::from_value(json!({
            "ammo": [
                {"ammoID": 3, "equipped": 1, "quantity": 250, "size": "9mm", "type": "Standard", "typeID": 1},
                {"ammoID": 7, "equipped": 0, "quantity": 40, "size": "12 Gauge", "type": "Hollow Point", "typeID": 2}
            ]
        }))
        .unwrap();

        let ammo = response.ammo.unwrap();
        assert!(ammo[0].equipped);
        assert!(!ammo[1].equipped);
        assert_eq!(ammo[1].ammo_type, "Hollow Point");
    }
}
