/// Events emitted by the social rail and its compact drawer.
#[derive(Debug, Clone, Copy)]
pub(crate) enum SidebarEvent {
    ToggleDrawer,
    DismissDrawer,
    /// Open the social link at this index in `SOCIAL_LINKS`.
    OpenLink(usize),
    /// Pointer entered (`true`) or left (`false`) a link or toggle.
    HoverChanged(bool),
}
