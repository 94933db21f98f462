pub(crate) const CARD_PROFILE: &[u8] =
    include_bytes!("../assets/svg/profile.svg");
pub(crate) const CARD_ABOUT: &[u8] = include_bytes!("../assets/svg/about.svg");
pub(crate) const CARD_PROJECTS: &[u8] =
    include_bytes!("../assets/svg/projects.svg");
pub(crate) const CARD_CERTIFICATES: &[u8] =
    include_bytes!("../assets/svg/certificates.svg");
pub(crate) const CARD_TECH_STACK: &[u8] =
    include_bytes!("../assets/svg/tech-stack.svg");
pub(crate) const CARD_CONTACT: &[u8] =
    include_bytes!("../assets/svg/contact.svg");
pub(crate) const SOCIAL_GITHUB: &[u8] =
    include_bytes!("../assets/svg/github.svg");
pub(crate) const SOCIAL_LINKEDIN: &[u8] =
    include_bytes!("../assets/svg/linkedin.svg");
pub(crate) const SOCIAL_WEBSITE: &[u8] =
    include_bytes!("../assets/svg/globe.svg");
pub(crate) const SOCIAL_RESUME: &[u8] =
    include_bytes!("../assets/svg/resume.svg");
pub(crate) const DRAWER_MENU: &[u8] = include_bytes!("../assets/svg/menu.svg");
pub(crate) const DRAWER_CLOSE: &[u8] =
    include_bytes!("../assets/svg/close.svg");
pub(crate) const ARROW_LEFT: &[u8] =
    include_bytes!("../assets/svg/arrow-left.svg");
pub(crate) const ARROW_RIGHT: &[u8] =
    include_bytes!("../assets/svg/arrow-right.svg");
pub(crate) const NAV_HOME: &[u8] = include_bytes!("../assets/svg/home.svg");
