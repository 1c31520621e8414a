use serde::{Deserialize, Serialize};

/// Ett steg slik det ble skrapet fra siden, i dokumentrekkefølge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStep {
    pub text: String,
    pub source_position: u32, // linjenummer i kilde-HTML
}

impl RawStep {
    pub fn new(text: impl Into<String>, source_position: u32) -> Self {
        Self { text: text.into(), source_position }
    }
}

/// Posisjon innen én gruppe. Påvirker kun label på Ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepPosition {
    First,
    Middle,
    Last,
}

impl StepPosition {
    /// Første vinner over siste når gruppen har ett steg.
    pub fn for_index(index: usize, len: usize) -> Self {
        if index == 0 {
            StepPosition::First
        } else if index + 1 == len {
            StepPosition::Last
        } else {
            StepPosition::Middle
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RampLabel {
    Warmup,
    Cooldown,
    Ramp,
}

impl RampLabel {
    pub fn for_position(position: StepPosition) -> Self {
        match position {
            StepPosition::First => RampLabel::Warmup,
            StepPosition::Last => RampLabel::Cooldown,
            StepPosition::Middle => RampLabel::Ramp,
        }
    }

    /// Elementnavn i .zwo
    pub fn element_name(self) -> &'static str {
        match self {
            RampLabel::Warmup => "Warmup",
            RampLabel::Cooldown => "Cooldown",
            RampLabel::Ramp => "Ramp",
        }
    }
}

/// Ferdig klassifisert steg. Effekt er brøk av FTP (0.65 = 65 %).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ParsedStep {
    Ramp {
        duration_s: u32,
        power_low: f64,
        power_high: f64,
        cadence: Option<u32>,
        label: RampLabel,
    },
    SteadyState {
        duration_s: u32,
        power: f64,
        cadence: Option<u32>,
    },
    Intervals {
        repeat: u32,
        on_duration_s: u32,
        off_duration_s: u32,
        on_power: f64,
        off_power: f64,
        on_cadence: Option<u32>,
        off_cadence: Option<u32>,
    },
    FreeRide {
        duration_s: u32,
    },
}

impl ParsedStep {
    /// Kort navn brukt som metrics-label og i logg.
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedStep::Ramp { .. } => "ramp",
            ParsedStep::SteadyState { .. } => "steady_state",
            ParsedStep::Intervals { .. } => "intervals",
            ParsedStep::FreeRide { .. } => "free_ride",
        }
    }

    /// Total varighet i sekunder (intervaller: repeat * (on + off)).
    pub fn total_duration_s(&self) -> u64 {
        match *self {
            ParsedStep::Ramp { duration_s, .. }
            | ParsedStep::SteadyState { duration_s, .. }
            | ParsedStep::FreeRide { duration_s } => duration_s as u64,
            ParsedStep::Intervals { repeat, on_duration_s, off_duration_s, .. } => {
                repeat as u64 * (on_duration_s as u64 + off_duration_s as u64)
            }
        }
    }
}

/// Metadata som pakkes rundt stegene i hvert dokument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutMeta {
    pub author: String,
    pub description: String,
    pub sport_type: String,
}

impl Default for WorkoutMeta {
    fn default() -> Self {
        Self {
            author: "M. Afschrift".to_string(),
            description: "ToDo".to_string(),
            sport_type: "bike".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDocument {
    pub author: String,
    pub name: String,
    pub description: String,
    pub sport_type: String,
    pub tags: Vec<String>, // tom i praksis
    pub steps: Vec<ParsedStep>,
}

impl WorkoutDocument {
    pub fn total_duration_s(&self) -> u64 {
        self.steps.iter().map(ParsedStep::total_duration_s).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_for_index() {
        assert_eq!(StepPosition::for_index(0, 1), StepPosition::First);
        assert_eq!(StepPosition::for_index(0, 3), StepPosition::First);
        assert_eq!(StepPosition::for_index(1, 3), StepPosition::Middle);
        assert_eq!(StepPosition::for_index(2, 3), StepPosition::Last);
    }

    #[test]
    fn intervals_total_duration() {
        let s = ParsedStep::Intervals {
            repeat: 5,
            on_duration_s: 30,
            off_duration_s: 30,
            on_power: 1.2,
            off_power: 0.5,
            on_cadence: None,
            off_cadence: None,
        };
        assert_eq!(s.total_duration_s(), 300);
        assert_eq!(s.kind(), "intervals");
    }
}
