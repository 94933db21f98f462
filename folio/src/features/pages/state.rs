use super::model::INITIAL_REVEAL;

/// Reveal counters for the paginated pages. "Show N, then show all" is
/// the whole state machine here.
#[derive(Debug)]
pub(crate) struct PagesState {
    projects_revealed: usize,
    certificates_revealed: usize,
}

impl PagesState {
    pub(crate) fn new(project_count: usize, certificate_count: usize) -> Self {
        Self {
            projects_revealed: INITIAL_REVEAL.min(project_count),
            certificates_revealed: INITIAL_REVEAL.min(certificate_count),
        }
    }

    pub(crate) fn projects_revealed(&self) -> usize {
        self.projects_revealed
    }

    pub(crate) fn certificates_revealed(&self) -> usize {
        self.certificates_revealed
    }

    pub(crate) fn reveal_all_projects(&mut self, project_count: usize) {
        self.projects_revealed = project_count;
    }

    pub(crate) fn reveal_all_certificates(
        &mut self,
        certificate_count: usize,
    ) {
        self.certificates_revealed = certificate_count;
    }

    /// Back to the initial reveal, as on a fresh visit.
    pub(crate) fn reset(&mut self, project_count: usize, certificate_count: usize) {
        self.projects_revealed = INITIAL_REVEAL.min(project_count);
        self.certificates_revealed = INITIAL_REVEAL.min(certificate_count);
    }
}
