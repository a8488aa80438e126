use serde::Deserialize;

use super::activity::Activity;

pub const CHECKMARK: &str = "✓";
pub const CROSS: &str = "✗";

/// Only the exact label `COMING` counts as attending; any other value,
/// `null` or a missing field means not coming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum Decision {
    Coming,
    #[default]
    NotComing,
}

impl From<Option<String>> for Decision {
    fn from(value: Option<String>) -> Self {
        match value.as_deref() {
            Some("COMING") => Decision::Coming,
            _ => Decision::NotComing,
        }
    }
}

impl Decision {
    pub fn sentinel(&self) -> &'static str {
        match self {
            Decision::Coming => CHECKMARK,
            Decision::NotComing => CROSS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuestRef {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Attendance {
    pub guest: GuestRef,
    #[serde(default)]
    pub antwerp: Decision,
    #[serde(default)]
    pub ceremony: Decision,
    #[serde(default)]
    pub diner: Decision,
    #[serde(default)]
    pub party: Decision,
}

impl Attendance {
    pub fn guest_id(&self) -> i64 {
        self.guest.id
    }

    pub fn decision(&self, activity: Activity) -> Decision {
        match activity {
            Activity::Antwerp => self.antwerp,
            Activity::Ceremony => self.ceremony,
            Activity::Diner => self.diner,
            Activity::Party => self.party,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_submission_entry() {
        let attendance: Attendance = serde_json::from_value(serde_json::json!({
            "guest": { "id": 3, "firstName": "Sanne" },
            "antwerp": "COMING",
            "ceremony": "DECLINED",
            "diner": null,
        }))
        .unwrap();

        assert_eq!(attendance.guest_id(), 3);
        assert_eq!(attendance.decision(Activity::Antwerp), Decision::Coming);
        assert_eq!(attendance.decision(Activity::Ceremony), Decision::NotComing);
        assert_eq!(attendance.decision(Activity::Diner), Decision::NotComing);
        assert_eq!(attendance.decision(Activity::Party), Decision::NotComing);
    }

    #[test]
    fn test_only_exact_coming_is_checkmark() {
        assert_eq!(Decision::from(Some("COMING".to_owned())).sentinel(), CHECKMARK);
        assert_eq!(Decision::from(Some("coming".to_owned())).sentinel(), CROSS);
        assert_eq!(Decision::from(Some("DECLINED".to_owned())).sentinel(), CROSS);
        assert_eq!(Decision::from(None).sentinel(), CROSS);
    }

    #[test]
    fn test_missing_guest_id_is_rejected() {
        let result: Result<Attendance, _> =
            serde_json::from_value(serde_json::json!({ "guest": {}, "party": "COMING" }));
        assert!(result.is_err());
    }
}
