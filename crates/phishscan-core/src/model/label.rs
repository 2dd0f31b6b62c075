//! Binary verdict.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifier verdict: 0 = legitimate, 1 = phishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Label {
    Legitimate = 0,
    Phishing = 1,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn is_phishing(self) -> bool {
        self == Label::Phishing
    }
}

impl From<Label> for u8 {
    fn from(label: Label) -> Self {
        label.as_u8()
    }
}

impl From<bool> for Label {
    /// `true` means phishing.
    fn from(phishing: bool) -> Self {
        if phishing {
            Label::Phishing
        } else {
            Label::Legitimate
        }
    }
}

impl TryFrom<u8> for Label {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Label::Legitimate),
            1 => Ok(Label::Phishing),
            other => Err(format!("label must be 0 or 1, got {other}")),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Legitimate => write!(f, "legitimate URL"),
            Label::Phishing => write!(f, "phishing URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values() {
        assert_eq!(Label::Legitimate.as_u8(), 0);
        assert_eq!(Label::Phishing.as_u8(), 1);
        assert_eq!(Label::try_from(1u8), Ok(Label::Phishing));
        assert!(Label::try_from(2u8).is_err());
    }

    #[test]
    fn serializes_as_number() {
        let json = serde_json::to_string(&[Label::Legitimate, Label::Phishing]).unwrap();
        assert_eq!(json, "[0,1]");
        let back: Vec<Label> = serde_json::from_str("[1,0]").unwrap();
        assert_eq!(back, [Label::Phishing, Label::Legitimate]);
        assert!(serde_json::from_str::<Label>("7").is_err());
    }

    #[test]
    fn display() {
        assert_eq!(Label::Phishing.to_string(), "phishing URL");
        assert_eq!(Label::Legitimate.to_string(), "legitimate URL");
    }
}
