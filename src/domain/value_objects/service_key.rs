use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::errors::ValidationError;

/// Service a visitor can ask about through the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ServiceKey {
    YogaBeginners,
    PrenatalYoga,
    PostnatalYoga,
    SoundHealing,
    OnlineSessions,
    StudioCollaboration,
}

impl ServiceKey {
    /// Every key, in the order the form lists them
    pub const ALL: [ServiceKey; 6] = [
        ServiceKey::YogaBeginners,
        ServiceKey::PrenatalYoga,
        ServiceKey::PostnatalYoga,
        ServiceKey::SoundHealing,
        ServiceKey::OnlineSessions,
        ServiceKey::StudioCollaboration,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceKey::YogaBeginners => "yoga-beginners",
            ServiceKey::PrenatalYoga => "prenatal-yoga",
            ServiceKey::PostnatalYoga => "postnatal-yoga",
            ServiceKey::SoundHealing => "sound-healing",
            ServiceKey::OnlineSessions => "online-sessions",
            ServiceKey::StudioCollaboration => "studio-collaboration",
        }
    }

    /// Human readable option label
    pub fn label(self) -> &'static str {
        match self {
            ServiceKey::YogaBeginners => "Yoga for Beginners",
            ServiceKey::PrenatalYoga => "Prenatal Yoga",
            ServiceKey::PostnatalYoga => "Postnatal Yoga",
            ServiceKey::SoundHealing => "Sound Healing",
            ServiceKey::OnlineSessions => "Online Sessions",
            ServiceKey::StudioCollaboration => "Studio Collaboration",
        }
    }
}

impl FromStr for ServiceKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ServiceKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| ValidationError::UnknownServiceKey(value.to_string()))
    }
}

impl TryFrom<String> for ServiceKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ServiceKey> for &'static str {
    fn from(key: ServiceKey) -> Self {
        key.as_str()
    }
}

impl std::fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_their_names() {
        for key in ServiceKey::ALL {
            assert_eq!(key.as_str().parse::<ServiceKey>(), Ok(key));
        }
    }

    #[test]
    fn test_unknown_and_empty_keys_are_rejected() {
        assert_eq!(
            "reiki".parse::<ServiceKey>(),
            Err(ValidationError::UnknownServiceKey("reiki".to_string()))
        );
        assert!("".parse::<ServiceKey>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ServiceKey::SoundHealing.label(), "Sound Healing");
        assert_eq!(ServiceKey::StudioCollaboration.label(), "Studio Collaboration");
    }
}
