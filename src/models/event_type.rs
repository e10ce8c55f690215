use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed catalogue of event kinds stored in the log book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    DriverRegistration,
    FirstDayDriver,
    DriverResignation,
    Incident,
    Observation,
    Other,
}

/// Tags accepted on import only, with the canonical type they now map to.
const LEGACY_ALIASES: &[(&str, EventType)] = &[("delivery", EventType::DriverRegistration)];

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::DriverRegistration,
        EventType::FirstDayDriver,
        EventType::DriverResignation,
        EventType::Incident,
        EventType::Observation,
        EventType::Other,
    ];

    /// Parse a canonical tag (case-insensitive). Legacy aliases are rejected.
    pub fn et_from_str(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == wanted)
    }

    /// Parse a tag coming from an imported file: canonical tags first,
    /// then the legacy alias table.
    pub fn from_import_str(s: &str) -> Option<Self> {
        Self::et_from_str(s).or_else(|| {
            let wanted = s.trim().to_lowercase();
            LEGACY_ALIASES
                .iter()
                .find(|(alias, _)| *alias == wanted)
                .map(|(_, t)| *t)
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::DriverRegistration => "driver-registration",
            EventType::FirstDayDriver => "first-day-driver",
            EventType::DriverResignation => "driver-resignation",
            EventType::Incident => "incident",
            EventType::Observation => "observation",
            EventType::Other => "other",
        }
    }

    /// Human label shown in listings.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::DriverRegistration => "Alta de conductor",
            EventType::FirstDayDriver => "Primer día de conductor",
            EventType::DriverResignation => "Baja de conductor",
            EventType::Incident => "Incidencia",
            EventType::Observation => "Observación",
            EventType::Other => "Otro",
        }
    }

    /// Comma separated list of canonical tags, used in error messages.
    pub fn allowed_list() -> String {
        Self::ALL
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
