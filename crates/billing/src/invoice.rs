use serde::{Deserialize, Serialize};

use stagebill_repertory::PlayId;

/// One invoiced showing of a play to a given audience size.
///
/// `audience` is the seat count; `u32` encodes the non-negativity invariant
/// in the type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    #[serde(rename = "playID")]
    pub play_id: PlayId,
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<PlayId>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// Immutable billing input: a customer plus an ordered run of performances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    pub performances: Vec<Performance>,
}

impl Invoice {
    pub fn new(customer: impl Into<String>, performances: Vec<Performance>) -> Self {
        Self {
            customer: customer.into(),
            performances,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn performance_play_id_maps_to_the_wire_field() {
        let performance: Performance =
            serde_json::from_str(r#"{"playID": "hamlet", "audience": 55}"#).unwrap();
        assert_eq!(performance, Performance::new("hamlet", 55));
    }

    #[test]
    fn invoice_preserves_performance_order() {
        let invoice = Invoice::new(
            "BigCo",
            vec![
                Performance::new("hamlet", 55),
                Performance::new("as-like", 35),
                Performance::new("othello", 40),
            ],
        );
        let ids: Vec<&str> = invoice
            .performances
            .iter()
            .map(|p| p.play_id.as_str())
            .collect();
        assert_eq!(ids, ["hamlet", "as-like", "othello"]);
    }
}
