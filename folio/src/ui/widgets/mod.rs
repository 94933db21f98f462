pub(crate) mod about;
pub(crate) mod carousel;
pub(crate) mod certificates;
pub(crate) mod contact_form;
pub(crate) mod cursor_overlay;
pub(crate) mod footer;
pub(crate) mod page_frame;
pub(crate) mod projects;
pub(crate) mod social_sidebar;
pub(crate) mod tech_stack;
