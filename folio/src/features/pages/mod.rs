mod event;
mod feature;
mod model;
mod state;

pub(crate) use event::PagesEvent;
pub(crate) use feature::PagesFeature;
pub(crate) use model::{
    ABOUT_PARAGRAPHS, Certificate, INITIAL_REVEAL, Project, TECH_GROUPS,
};
