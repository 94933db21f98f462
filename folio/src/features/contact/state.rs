use iced::widget::text_editor;

/// Where the simulated submission currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Contact form fields and submission progress. The generation counter
/// ties delayed completion/dismissal events to the submission that
/// scheduled them, so a stale event cannot clobber a newer one.
#[derive(Default)]
pub(crate) struct ContactState {
    name: String,
    email: String,
    message: text_editor::Content,
    status: SubmitStatus,
    generation: u64,
}

impl ContactState {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn email(&self) -> &str {
        &self.email
    }

    pub(crate) fn message(&self) -> &text_editor::Content {
        &self.message
    }

    /// Message body as plain text.
    pub(crate) fn message_text(&self) -> String {
        self.message.text()
    }

    pub(crate) fn status(&self) -> SubmitStatus {
        self.status
    }

    pub(crate) fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub(crate) fn set_email(&mut self, value: String) {
        self.email = value;
    }

    pub(crate) fn edit_message(&mut self, action: text_editor::Action) {
        self.message.perform(action);
    }

    /// Whether there is nothing worth submitting. An untouched editor
    /// reports a single newline, hence the trim.
    pub(crate) fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.email.trim().is_empty()
            && self.message.text().trim().is_empty()
    }

    /// Start a submission and return its generation tag.
    pub(crate) fn begin_submit(&mut self) -> u64 {
        self.generation += 1;
        self.status = SubmitStatus::Submitting;
        self.generation
    }

    /// Acknowledge the submission tagged `generation`. Resets the fields
    /// and shows the success notice; a stale tag is ignored.
    pub(crate) fn complete_submit(&mut self, generation: u64) -> bool {
        if generation != self.generation
            || self.status != SubmitStatus::Submitting
        {
            return false;
        }

        self.name.clear();
        self.email.clear();
        self.message = text_editor::Content::new();
        self.status = SubmitStatus::Succeeded;
        true
    }

    /// Clear the success notice scheduled by submission `generation`.
    pub(crate) fn dismiss_notice(&mut self, generation: u64) {
        if generation == self.generation
            && self.status == SubmitStatus::Succeeded
        {
            self.status = SubmitStatus::Idle;
        }
    }
}
