mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::SidebarEvent;
pub(crate) use feature::SidebarFeature;
pub(crate) use model::{SIDEBAR_RAIL_WIDTH, SOCIAL_LINKS};
