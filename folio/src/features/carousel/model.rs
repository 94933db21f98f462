use crate::icons;
use crate::route::Route;

/// Kind of content a card leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Profile,
    About,
    Projects,
    Certificates,
    TechStack,
    Contact,
}

/// One static, navigable entry in the card deck.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Destination {
    pub(crate) id: u16,
    pub(crate) title: &'static str,
    pub(crate) category: Category,
    pub(crate) route: Route,
    pub(crate) glyph: &'static [u8],
}

/// Construction-time deck invariant violations. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub(crate) enum DeckError {
    #[error("deck must contain at least one destination")]
    Empty,
    #[error("the first destination must be the profile card, found {0:?}")]
    ProfileNotFirst(Category),
    #[error("only index 0 may be a profile card, found another at {0}")]
    DuplicateProfile(usize),
}

/// The fixed ordered list of destinations. Immutable after construction.
#[derive(Debug, Clone)]
pub(crate) struct Deck {
    destinations: Vec<Destination>,
}

impl Deck {
    /// Validate and wrap an ordered destination list.
    pub(crate) fn new(
        destinations: Vec<Destination>,
    ) -> Result<Self, DeckError> {
        let first = destinations.first().ok_or(DeckError::Empty)?;
        if first.category != Category::Profile {
            return Err(DeckError::ProfileNotFirst(first.category));
        }
        for (index, destination) in destinations.iter().enumerate().skip(1) {
            if destination.category == Category::Profile {
                return Err(DeckError::DuplicateProfile(index));
            }
        }

        Ok(Self { destinations })
    }

    /// The compiled-in portfolio deck, profile card first.
    pub(crate) fn builtin() -> Result<Self, DeckError> {
        Self::new(vec![
            Destination {
                id: 0,
                title: "Arman Dev",
                category: Category::Profile,
                route: Route::Home,
                glyph: icons::CARD_PROFILE,
            },
            Destination {
                id: 1,
                title: "About Me",
                category: Category::About,
                route: Route::About,
                glyph: icons::CARD_ABOUT,
            },
            Destination {
                id: 2,
                title: "Projects",
                category: Category::Projects,
                route: Route::Projects,
                glyph: icons::CARD_PROJECTS,
            },
            Destination {
                id: 3,
                title: "Certificates",
                category: Category::Certificates,
                route: Route::Certificates,
                glyph: icons::CARD_CERTIFICATES,
            },
            Destination {
                id: 4,
                title: "Tech Stack",
                category: Category::TechStack,
                route: Route::TechStack,
                glyph: icons::CARD_TECH_STACK,
            },
            Destination {
                id: 5,
                title: "Contact",
                category: Category::Contact,
                route: Route::Contact,
                glyph: icons::CARD_CONTACT,
            },
        ])
    }

    pub(crate) fn len(&self) -> usize {
        self.destinations.len()
    }

    pub(crate) fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Destination at `index`. Indices come from modular arithmetic over
    /// `len()`, so the access cannot be out of range.
    pub(crate) fn get(&self, index: usize) -> &Destination {
        &self.destinations[index]
    }
}

#[cfg(test)]
mod tests {
    use super::{Category, Deck, DeckError, Destination};
    use crate::icons;
    use crate::route::Route;

    fn destination(category: Category) -> Destination {
        Destination {
            id: 9,
            title: "card",
            category,
            route: Route::About,
            glyph: icons::CARD_ABOUT,
        }
    }

    #[test]
    fn given_builtin_deck_when_constructed_then_profile_is_first() {
        let deck = Deck::builtin().expect("builtin deck must be valid");

        assert_eq!(deck.get(0).category, Category::Profile);
        assert_eq!(deck.len(), 6);
    }

    #[test]
    fn given_empty_list_when_constructing_then_empty_error_is_returned() {
        assert!(matches!(Deck::new(Vec::new()), Err(DeckError::Empty)));
    }

    #[test]
    fn given_profile_not_first_when_constructing_then_error_names_category() {
        let result = Deck::new(vec![destination(Category::About)]);

        assert!(matches!(
            result,
            Err(DeckError::ProfileNotFirst(Category::About))
        ));
    }

    #[test]
    fn given_second_profile_when_constructing_then_error_names_index() {
        let result = Deck::new(vec![
            destination(Category::Profile),
            destination(Category::About),
            destination(Category::Profile),
        ]);

        assert!(matches!(result, Err(DeckError::DuplicateProfile(2))));
    }
}
