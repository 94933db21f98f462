use crate::icons;

/// Fixed width of the always-visible rail in the wide layout.
pub(crate) const SIDEBAR_RAIL_WIDTH: f32 = 52.0;

/// One external link shown in the social rail/drawer.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SocialLink {
    pub(crate) label: &'static str,
    pub(crate) url: &'static str,
    pub(crate) glyph: &'static [u8],
}

/// The compiled-in social links, top to bottom.
pub(crate) const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        url: "https://github.com/armandev",
        glyph: icons::SOCIAL_GITHUB,
    },
    SocialLink {
        label: "LinkedIn",
        url: "https://www.linkedin.com/in/armandev",
        glyph: icons::SOCIAL_LINKEDIN,
    },
    SocialLink {
        label: "Website",
        url: "https://armandev.dev",
        glyph: icons::SOCIAL_WEBSITE,
    },
    SocialLink {
        label: "Resume",
        url: "https://armandev.dev/resume.pdf",
        glyph: icons::SOCIAL_RESUME,
    },
];
