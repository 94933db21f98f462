mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::ContactEvent;
pub(crate) use feature::ContactFeature;
pub(crate) use state::SubmitStatus;
