use std::time::Duration;

use iced::Task;

use crate::app::Event as AppEvent;
use crate::features::Feature;
use crate::features::cursor::CursorEvent;

use super::event::ContactEvent;
use super::model::{
    ContactSubmission, NOTICE_DISMISS_MS, SUBMIT_LATENCY_MS,
};
use super::state::{ContactState, SubmitStatus};

/// Contact feature root owning form state and the submission simulation.
pub(crate) struct ContactFeature {
    state: ContactState,
}

impl ContactFeature {
    pub(crate) fn new() -> Self {
        Self {
            state: ContactState::default(),
        }
    }

    pub(crate) fn state(&self) -> &ContactState {
        &self.state
    }

    fn submit(&mut self) -> Task<AppEvent> {
        if self.state.is_empty()
            || self.state.status() == SubmitStatus::Submitting
        {
            return Task::none();
        }

        let payload = ContactSubmission {
            name: self.state.name().to_owned(),
            email: self.state.email().to_owned(),
            message: self.state.message_text().trim_end().to_owned(),
        };
        match serde_json::to_string(&payload) {
            Ok(json) => log::info!("contact submission (simulated): {json}"),
            Err(err) => log::warn!("contact payload not serializable: {err}"),
        }

        let generation = self.state.begin_submit();
        Task::perform(
            async {
                tokio::time::sleep(Duration::from_millis(SUBMIT_LATENCY_MS))
                    .await
            },
            move |_| {
                AppEvent::Contact(ContactEvent::SubmitCompleted { generation })
            },
        )
    }
}

impl Feature for ContactFeature {
    type Event = ContactEvent;
    type Ctx<'a> = ();

    /// Reduce form events into state updates and delayed follow-ups.
    fn reduce<'a>(
        &mut self,
        event: ContactEvent,
        _ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent> {
        match event {
            ContactEvent::NameChanged(value) => {
                self.state.set_name(value);
                Task::none()
            },
            ContactEvent::EmailChanged(value) => {
                self.state.set_email(value);
                Task::none()
            },
            ContactEvent::MessageEdited(action) => {
                self.state.edit_message(action);
                Task::none()
            },
            ContactEvent::SubmitPressed => self.submit(),
            ContactEvent::HoverChanged(over) => Task::done(
                AppEvent::Cursor(CursorEvent::HoverChanged(over)),
            ),
            ContactEvent::SubmitCompleted { generation } => {
                if !self.state.complete_submit(generation) {
                    return Task::none();
                }

                log::info!("contact submission acknowledged");
                Task::perform(
                    async {
                        tokio::time::sleep(Duration::from_millis(
                            NOTICE_DISMISS_MS,
                        ))
                        .await
                    },
                    move |_| {
                        AppEvent::Contact(ContactEvent::NoticeExpired {
                            generation,
                        })
                    },
                )
            },
            ContactEvent::NoticeExpired { generation } => {
                self.state.dismiss_notice(generation);
                Task::none()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use iced::widget::text_editor::{Action, Edit};

    use super::ContactFeature;
    use crate::features::Feature;
    use crate::features::contact::{ContactEvent, SubmitStatus};

    #[test]
    fn given_message_only_form_when_submit_pressed_then_round_starts() {
        let mut feature = ContactFeature::new();
        let action =
            Action::Edit(Edit::Paste(Arc::new(String::from("hi there"))));
        let _ = feature.reduce(ContactEvent::MessageEdited(action), &());

        let _task = feature.reduce(ContactEvent::SubmitPressed, &());

        assert_eq!(feature.state().status(), SubmitStatus::Submitting);
    }

    #[test]
    fn given_empty_form_when_submit_pressed_then_status_stays_idle() {
        let mut feature = ContactFeature::new();

        let _task = feature.reduce(ContactEvent::SubmitPressed, &());

        assert_eq!(feature.state().status(), SubmitStatus::Idle);
    }

    #[test]
    fn given_filled_form_when_submit_pressed_then_status_is_submitting() {
        let mut feature = ContactFeature::new();
        let _ = feature.reduce(
            ContactEvent::NameChanged(String::from("Ada")),
            &(),
        );

        let _task = feature.reduce(ContactEvent::SubmitPressed, &());

        assert_eq!(feature.state().status(), SubmitStatus::Submitting);
    }

    #[test]
    fn given_submitting_form_when_submit_pressed_again_then_no_new_round() {
        let mut feature = ContactFeature::new();
        let _ = feature.reduce(
            ContactEvent::NameChanged(String::from("Ada")),
            &(),
        );
        let _ = feature.reduce(ContactEvent::SubmitPressed, &());

        let _task = feature.reduce(ContactEvent::SubmitPressed, &());

        let _ = feature
            .reduce(ContactEvent::SubmitCompleted { generation: 1 }, &());
        assert_eq!(feature.state().status(), SubmitStatus::Succeeded);
    }
}
