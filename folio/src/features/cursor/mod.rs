mod event;
mod feature;
mod state;

pub(crate) use event::CursorEvent;
pub(crate) use feature::CursorFeature;
