//! Request bodies for progress endpoints.

use serde::Deserialize;

/// Body of both completion toggles.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SetCompletionRequest {
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_flag_is_required() {
        assert!(serde_json::from_str::<SetCompletionRequest>("{}").is_err());
        let request: SetCompletionRequest =
            serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(request.completed);
    }
}
