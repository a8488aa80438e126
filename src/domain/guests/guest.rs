use serde::Serialize;

use super::activity::ActivitySet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub household_id: i64,
    pub invited_for: ActivitySet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::guests::activity::Activity;

    #[test]
    fn test_guest_json_shape() {
        let guest = Guest {
            id: 3,
            first_name: "Sanne".to_owned(),
            last_name: "Peeters".to_owned(),
            household_id: 2,
            invited_for: [Activity::Ceremony, Activity::Party].into_iter().collect(),
        };

        assert_eq!(
            serde_json::to_value(&guest).unwrap(),
            serde_json::json!({
                "id": 3,
                "firstName": "Sanne",
                "lastName": "Peeters",
                "householdId": 2,
                "invitedFor": ["ceremony", "party"],
            })
        );
    }
}
