use iced::Task;

use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::cursor::CursorEvent;

use super::event::SidebarEvent;
use super::model::SOCIAL_LINKS;
use super::state::SidebarState;

/// Social sidebar feature root owning the drawer state.
pub(crate) struct SidebarFeature {
    state: SidebarState,
}

impl SidebarFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: SidebarState::default(),
        }
    }

    pub(crate) fn is_drawer_open(&self) -> bool {
        self.state.is_drawer_open()
    }
}

impl Feature for SidebarFeature {
    type Event = SidebarEvent;
    type Ctx<'a> = ();

    /// Reduce sidebar events into drawer state changes and link launches.
    fn reduce<'a>(
        &mut self,
        event: SidebarEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            SidebarEvent::ToggleDrawer => {
                self.state.toggle_drawer();
                Task::none()
            },
            SidebarEvent::DismissDrawer => {
                self.state.dismiss_drawer();
                Task::none()
            },
            SidebarEvent::OpenLink(index) => {
                if let Some(link) = SOCIAL_LINKS.get(index) {
                    if let Err(err) = open::that_detached(link.url) {
                        log::warn!("could not open {}: {err}", link.url);
                    }
                }
                self.state.dismiss_drawer();
                Task::none()
            },
            SidebarEvent::HoverChanged(over) => Task::done(
                AppEvent::Cursor(CursorEvent::HoverChanged(over)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SidebarFeature;
    use crate::features::Feature;
    use crate::features::sidebar::SidebarEvent;

    #[test]
    fn given_toggle_events_when_reduced_then_drawer_state_flips() {
        let mut feature = SidebarFeature::new();

        let _task = feature.reduce(SidebarEvent::ToggleDrawer, &());
        assert!(feature.is_drawer_open());

        let _task = feature.reduce(SidebarEvent::DismissDrawer, &());
        assert!(!feature.is_drawer_open());
    }

    #[test]
    fn given_hover_report_when_reduced_then_drawer_state_is_untouched() {
        let mut feature = SidebarFeature::new();
        let _ = feature.reduce(SidebarEvent::ToggleDrawer, &());

        let _task = feature.reduce(SidebarEvent::HoverChanged(true), &());

        assert!(feature.is_drawer_open());
    }

    #[test]
    fn given_out_of_range_link_when_reduced_then_drawer_still_closes() {
        let mut feature = SidebarFeature::new();
        let _ = feature.reduce(SidebarEvent::ToggleDrawer, &());

        let _task = feature.reduce(SidebarEvent::OpenLink(usize::MAX), &());

        assert!(!feature.is_drawer_open());
    }
}
