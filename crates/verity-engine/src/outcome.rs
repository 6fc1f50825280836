//! Result of a command addressed at a submission or analysis by id.

/// Whether a command found its target.
///
/// Unknown ids are not errors: the command leaves the state unchanged and
/// reports `NotFound`. Callers that only care about the observable state can
/// ignore the value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an Outcome reports whether the command found its target"]
pub enum Outcome<T> {
    Applied(T),
    NotFound,
}

impl<T> Outcome<T> {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The applied value, if any.
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::NotFound => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Applied(value) => Outcome::Applied(f(value)),
            Self::NotFound => Outcome::NotFound,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_and_not_found() {
        let hit: Outcome<u32> = Outcome::Applied(3);
        assert!(hit.is_applied());
        assert_eq!(hit.clone().map(|n| n * 2), Outcome::Applied(6));
        assert_eq!(hit.applied(), Some(3));

        let miss: Outcome<u32> = Outcome::NotFound;
        assert!(miss.is_not_found());
        assert_eq!(miss.applied(), None);
    }

    #[test]
    fn from_option() {
        assert_eq!(Outcome::from(Some("x")), Outcome::Applied("x"));
        assert_eq!(Outcome::<&str>::from(None), Outcome::NotFound);
    }
}
