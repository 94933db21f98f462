use iced::Task;

use crate::app::Event as AppEvent;

pub(crate) mod carousel;
pub(crate) mod contact;
pub(crate) mod cursor;
pub(crate) mod pages;
pub(crate) mod sidebar;

/// Shared feature contract for stateful domain modules.
pub(crate) trait Feature {
    type Event;
    type Ctx<'a>
    where
        Self: 'a;

    /// Reduce a typed feature event into state mutations and routed app tasks.
    fn reduce<'a>(
        &mut self,
        event: Self::Event,
        ctx: &Self::Ctx<'a>,
    ) -> Task<AppEvent>;
}

/// Root container for the struct-based features.
pub(crate) struct Features {
    carousel: carousel::CarouselFeature,
    contact: contact::ContactFeature,
    cursor: cursor::CursorFeature,
    pages: pages::PagesFeature,
    sidebar: sidebar::SidebarFeature,
}

impl Features {
    /// Create a features container around the validated card deck.
    pub(crate) fn new(deck: carousel::Deck) -> Self {
        Self {
            carousel: carousel::CarouselFeature::new(deck),
            contact: contact::ContactFeature::new(),
            cursor: cursor::CursorFeature::new(),
            pages: pages::PagesFeature::new(),
            sidebar: sidebar::SidebarFeature::new(),
        }
    }

    /// Return read-only access to carousel feature state and queries.
    pub(crate) fn carousel(&self) -> &carousel::CarouselFeature {
        &self.carousel
    }

    /// Return mutable access for routing carousel events.
    pub(crate) fn carousel_mut(&mut self) -> &mut carousel::CarouselFeature {
        &mut self.carousel
    }

    /// Return read-only access to contact feature state.
    pub(crate) fn contact(&self) -> &contact::ContactFeature {
        &self.contact
    }

    /// Return mutable access for routing contact events.
    pub(crate) fn contact_mut(&mut self) -> &mut contact::ContactFeature {
        &mut self.contact
    }

    /// Return read-only access to cursor overlay state.
    pub(crate) fn cursor(&self) -> &cursor::CursorFeature {
        &self.cursor
    }

    /// Return mutable access for routing cursor events.
    pub(crate) fn cursor_mut(&mut self) -> &mut cursor::CursorFeature {
        &mut self.cursor
    }

    /// Return read-only access to page reveal state.
    pub(crate) fn pages(&self) -> &pages::PagesFeature {
        &self.pages
    }

    /// Return mutable access for routing page events.
    pub(crate) fn pages_mut(&mut self) -> &mut pages::PagesFeature {
        &mut self.pages
    }

    /// Return read-only access to social sidebar state.
    pub(crate) fn sidebar(&self) -> &sidebar::SidebarFeature {
        &self.sidebar
    }

    /// Return mutable access for routing sidebar events.
    pub(crate) fn sidebar_mut(&mut self) -> &mut sidebar::SidebarFeature {
        &mut self.sidebar
    }
}
