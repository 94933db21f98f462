/// Drawer state for the compact layout. The wide rail ignores it.
#[derive(Debug, Default)]
pub(crate) struct SidebarState {
    drawer_open: bool,
}

impl SidebarState {
    pub(crate) fn is_drawer_open(&self) -> bool {
        self.drawer_open
    }

    pub(crate) fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    pub(crate) fn dismiss_drawer(&mut self) {
        self.drawer_open = false;
    }
}
