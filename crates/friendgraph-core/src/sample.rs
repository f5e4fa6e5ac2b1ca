//! The small social graph seeded by the scenario.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Friendship, Person};

/// People plus the FRIEND_OF edges between them, written in one batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SampleGraph {
    pub people: Vec<Person>,
    #[serde(default)]
    pub friendships: Vec<Friendship>,
}

impl Default for SampleGraph {
    /// Алиса is friends with Боб and Чарли; Чебурашка has no friends.
    fn default() -> Self {
        Self {
            people: vec![
                Person::new("Алиса", 30),
                Person::new("Боб", 25),
                Person::new("Чарли", 35),
                Person::new("Чебурашка", 99),
            ],
            friendships: vec![Friendship::new(0, 1), Friendship::new(0, 2)],
        }
    }
}

impl SampleGraph {
    /// Parse a sample graph from JSON and validate it.
    pub fn from_json(input: &str) -> Result<Self, CoreError> {
        let sample: Self = serde_json::from_str(input)?;
        sample.validate()?;
        Ok(sample)
    }

    /// Check that every friendship points at people in this sample.
    pub fn validate(&self) -> Result<(), CoreError> {
        let people = self.people.len();
        for f in &self.friendships {
            if f.from >= people || f.to >= people {
                return Err(CoreError::DanglingFriendship {
                    from: f.from,
                    to: f.to,
                    people,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_shape() {
        let sample = SampleGraph::default();
        assert_eq!(sample.people.len(), 4);
        assert_eq!(sample.friendships.len(), 2);
        sample.validate().unwrap();
    }

    #[test]
    fn default_sample_edges_leave_alice_only() {
        let sample = SampleGraph::default();
        assert_eq!(sample.people[0].name, "Алиса");
        assert_eq!(
            sample.friendships,
            vec![Friendship::new(0, 1), Friendship::new(0, 2)]
        );
        assert_eq!(sample.people[3], Person::new("Чебурашка", 99));
        assert!(sample.friendships.iter().all(|f| f.from != 3));
    }

    #[test]
    fn dangling_friendship_rejected() {
        let sample = SampleGraph {
            people: vec![Person::new("a", 1)],
            friendships: vec![Friendship::new(0, 3)],
        };
        let err = sample.validate().unwrap_err();
        assert!(matches!(
            err,
            CoreError::DanglingFriendship {
                from: 0,
                to: 3,
                people: 1
            }
        ));
    }

    #[test]
    fn from_json_without_friendships() {
        let sample =
            SampleGraph::from_json(r#"{"people": [{"name": "solo", "age": 40}]}"#).unwrap();
        assert_eq!(sample.people, vec![Person::new("solo", 40)]);
        assert!(sample.friendships.is_empty());
    }

    #[test]
    fn from_json_validates() {
        let input = r#"{
            "people": [{"name": "a", "age": 1}],
            "friendships": [{"from": 1, "to": 0}]
        }"#;
        assert!(matches!(
            SampleGraph::from_json(input),
            Err(CoreError::DanglingFriendship { .. })
        ));
    }

    #[test]
    fn from_json_rejects_garbage() {
        assert!(matches!(
            SampleGraph::from_json("not json"),
            Err(CoreError::Serialization(_))
        ));
    }
}
