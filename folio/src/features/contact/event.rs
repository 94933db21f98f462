use iced::widget::text_editor;

/// Events emitted by the contact form and its delayed tasks.
#[derive(Debug, Clone)]
pub(crate) enum ContactEvent {
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    SubmitPressed,
    /// Pointer entered (`true`) or left (`false`) a field or button.
    HoverChanged(bool),
    /// Simulated latency elapsed for the tagged submission.
    SubmitCompleted { generation: u64 },
    /// Auto-dismiss timer fired for the tagged submission's notice.
    NoticeExpired { generation: u64 },
}
