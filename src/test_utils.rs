#[cfg(test)]
pub mod fixtures {
    use crate::services::catalogue_service::Catalogue;

    /// Notes for the first populated subsection of the bundled catalogue
    pub fn atoms_study_content() -> String {
        Catalogue::bundled()
            .expect("bundled catalogue should load")
            .subsection("atomic-structure", "1-1-1-atoms-elements-compounds")
            .expect("atoms subsection should exist")
            .study_content()
            .to_string()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_atoms_study_content() {
        let content = atoms_study_content();
        assert!(content.contains("What is an Atom?"));
    }
}
