mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::CarouselEvent;
pub(crate) use feature::CarouselFeature;
pub(crate) use model::{Category, Deck, Destination};
pub(crate) use state::{Direction, Neighbors, Transition};
