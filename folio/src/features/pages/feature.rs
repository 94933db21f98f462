use iced::Task;

use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::cursor::CursorEvent;

use super::event::PagesEvent;
use super::model::{CERTIFICATES, Certificate, PROJECTS, Project};
use super::state::PagesState;

/// Static page feature root owning the reveal counters.
pub(crate) struct PagesFeature {
    state: PagesState,
}

impl PagesFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: PagesState::new(PROJECTS.len(), CERTIFICATES.len()),
        }
    }

    pub(crate) fn visible_projects(&self) -> &'static [Project] {
        &PROJECTS[..self.state.projects_revealed()]
    }

    pub(crate) fn hidden_project_count(&self) -> usize {
        PROJECTS.len() - self.state.projects_revealed()
    }

    pub(crate) fn visible_certificates(&self) -> &'static [Certificate] {
        &CERTIFICATES[..self.state.certificates_revealed()]
    }

    pub(crate) fn hidden_certificate_count(&self) -> usize {
        CERTIFICATES.len() - self.state.certificates_revealed()
    }

    /// Back to the initial reveal, as on a fresh visit from home.
    pub(crate) fn reset(&mut self) {
        self.state.reset(PROJECTS.len(), CERTIFICATES.len());
    }
}

impl Feature for PagesFeature {
    type Event = PagesEvent;
    type Ctx<'a> = ();

    /// Reduce reveal events into counter updates.
    fn reduce<'a>(
        &mut self,
        event: PagesEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            PagesEvent::RevealAllProjects => {
                self.state.reveal_all_projects(PROJECTS.len());
                Task::none()
            },
            PagesEvent::RevealAllCertificates => {
                self.state.reveal_all_certificates(CERTIFICATES.len());
                Task::none()
            },
            PagesEvent::HoverChanged(over) => Task::done(
                AppEvent::Cursor(CursorEvent::HoverChanged(over)),
            ),
        }
    }
}
