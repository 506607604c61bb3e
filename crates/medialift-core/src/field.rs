//! Form-state holder for an image URL and its upload lifecycle.

/// Upload lifecycle for one image field.
///
/// Each field owns its own state value, so concurrent fields never contend;
/// there is no shared busy flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl UploadState {
    /// True while an ingest is outstanding for this field.
    pub fn is_busy(&self) -> bool {
        matches!(self, UploadState::InFlight)
    }
}

/// The caller's image form state: a public URL and the upload lifecycle for
/// the field. An empty URL means "no image".
#[derive(Debug, Clone, Default)]
pub struct ImageField {
    pub url: String,
    pub state: UploadState,
}

impl ImageField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_image(&self) -> bool {
        !self.url.is_empty()
    }

    /// Clear the held URL and reset the state.
    ///
    /// Local reset only: the stored object, if any, is left in place.
    pub fn clear(&mut self) {
        self.url.clear();
        self.state = UploadState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_idle_and_empty() {
        let field = ImageField::new();
        assert!(!field.has_image());
        assert_eq!(field.state, UploadState::Idle);
        assert!(!field.state.is_busy());
    }

    #[test]
    fn test_only_in_flight_is_busy() {
        assert!(UploadState::InFlight.is_busy());
        assert!(!UploadState::Idle.is_busy());
        assert!(!UploadState::Succeeded.is_busy());
        assert!(!UploadState::Failed.is_busy());
    }

    #[test]
    fn test_clear_resets_url_and_state() {
        let mut field = ImageField {
            url: "https://cdn.example.org/uploads/a.jpg".to_string(),
            state: UploadState::Succeeded,
        };
        field.clear();
        assert!(!field.has_image());
        assert_eq!(field.state, UploadState::Idle);
    }
}
