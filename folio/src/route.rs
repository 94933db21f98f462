/// Addressable destinations of the single-window app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    About,
    Projects,
    Certificates,
    TechStack,
    Contact,
}

impl Route {
    /// Stable path string used for identity and logging.
    pub(crate) fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::About => "/about",
            Self::Projects => "/projects",
            Self::Certificates => "/certificates",
            Self::TechStack => "/tech-stack",
            Self::Contact => "/contact",
        }
    }

    /// Human-readable title shown in page chrome.
    pub(crate) fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::Projects => "Projects",
            Self::Certificates => "Certificates",
            Self::TechStack => "Tech Stack",
            Self::Contact => "Get In Touch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn given_routes_when_reading_paths_then_each_is_unique() {
        let routes = [
            Route::Home,
            Route::About,
            Route::Projects,
            Route::Certificates,
            Route::TechStack,
            Route::Contact,
        ];

        for (i, a) in routes.iter().enumerate() {
            for b in routes.iter().skip(i + 1) {
                assert_ne!(a.path(), b.path());
            }
        }
    }
}
