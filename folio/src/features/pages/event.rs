/// Events emitted by the paginated page widgets.
#[derive(Debug, Clone, Copy)]
pub(crate) enum PagesEvent {
    RevealAllProjects,
    RevealAllCertificates,
    /// Pointer entered (`true`) or left (`false`) a reveal button.
    HoverChanged(bool),
}
