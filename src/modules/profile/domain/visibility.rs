use crate::profile::domain::entities::ProfileResponse;

impl ProfileResponse {
    /// Copy of the payload without the entries flagged as hidden.
    ///
    /// Only projects, documents and media carry a `hide` flag. Sections that
    /// were absent stay absent.
    pub fn public_view(&self) -> ProfileResponse {
        ProfileResponse {
            projects: self
                .projects
                .iter()
                .filter(|p| !p.is_hidden())
                .cloned()
                .collect(),
            documents: self.documents.as_ref().map(|docs| {
                docs.iter()
                    .filter(|d| !d.is_hidden())
                    .cloned()
                    .collect()
            }),
            media: self.media.as_ref().map(|media| {
                media
                    .iter()
                    .filter(|m| !m.is_hidden())
                    .cloned()
                    .collect()
            }),
            ..self.clone()
        }
    }
}
