use serde::ser::{Serialize, SerializeMap, Serializer};

/// One extracurricular activity and the emails signed up for it.
///
/// `name` is the registry key and is serialized as the map key of
/// [`ActivityListing`], not as a field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            let email = email.into();
            if !self.is_participant(&email) {
                self.participants.push(email);
            }
        }
        self
    }

    pub fn is_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining places, clamped at zero. Capacity is informational only.
    pub fn spots_left(&self) -> usize {
        (self.max_participants as usize).saturating_sub(self.participants.len())
    }
}

/// Ordered snapshot of the registry, serialized as a JSON object keyed by
/// activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing(pub Vec<Activity>);

impl ActivityListing {
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for ActivityListing {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Chess Club", "Chess", "Fridays", 3)
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"])
    }

    #[test]
    fn with_participants_skips_duplicates() {
        let a = Activity::new("Chess Club", "Chess", "Fridays", 12)
            .with_participants(["a@x.edu", "b@x.edu", "a@x.edu"]);
        assert_eq!(a.participants, vec!["a@x.edu", "b@x.edu"]);
    }

    #[test]
    fn spots_left_clamps_at_zero() {
        let mut a = chess();
        assert_eq!(a.spots_left(), 1);
        a.participants.push("c@x.edu".into());
        a.participants.push("d@x.edu".into());
        assert_eq!(a.spots_left(), 0);
    }

    #[test]
    fn listing_serializes_as_ordered_object() {
        let listing = ActivityListing(vec![
            Activity::new("Zeta", "z", "Mon", 1),
            chess(),
        ]);
        let json = serde_json::to_string(&listing).unwrap();
        assert!(json.starts_with(r#"{"Zeta":{"description":"z""#));
        assert!(json.contains(
            r#""Chess Club":{"description":"Chess","schedule":"Fridays","max_participants":3,"participants":["michael@mergington.edu","daniel@mergington.edu"]}"#
        ));
        assert!(!json.contains(r#""name""#));
    }
}
