/// A record other records refer to by id, shown to users by name.
pub trait Named {
    type Id: Copy + PartialEq;

    fn id(&self) -> Self::Id;
    fn name(&self) -> &str;
}

/// The name of the referenced record, or `-` when it is unset or unknown.
pub fn name_of<T: Named>(items: &[T], id: Option<T::Id>) -> &str {
    id.and_then(|id| items.iter().find(|item| item.id() == id))
        .map(|item| item.name())
        .unwrap_or("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PositionId, position::Position};

    fn positions() -> Vec<Position> {
        vec![
            Position {
                id: PositionId(1),
                name: "Security".into(),
                created_at: None,
                updated_at: None,
            },
            Position {
                id: PositionId(2),
                name: "Janitor".into(),
                created_at: None,
                updated_at: None,
            },
        ]
    }

    #[test]
    fn finds_name_by_id() {
        assert_eq!(name_of(&positions(), Some(PositionId(2))), "Janitor");
    }

    #[test]
    fn unknown_or_unset_is_dash() {
        assert_eq!(name_of(&positions(), Some(PositionId(9))), "-");
        assert_eq!(name_of(&positions(), None), "-");
    }
}
