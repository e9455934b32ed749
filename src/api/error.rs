// src/api/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx response. `path` includes the query string.
    #[error("{} {status}: {path}", http_prefix(.admin))]
    Http {
        status: u16,
        method: String,
        path: String,
        admin: bool,
    },

    #[error("Request failed for {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode request body for {path}: {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    #[error("Admin token is not set")]
    MissingToken,
}

fn http_prefix(admin: &bool) -> &'static str {
    if *admin { "ADMIN API" } else { "API error" }
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_display_matches_public_and_admin_wording() {
        let public = ApiError::Http { status: 404, method: s!("GET"), path: s!("/brands/nope"), admin: false };
        assert_eq!(public.to_string(), "API error 404: /brands/nope");
        assert!(public.is_not_found());

        let admin = ApiError::Http { status: 401, method: s!("GET"), path: s!("/admin/stats"), admin: true };
        assert_eq!(admin.to_string(), "ADMIN API 401: /admin/stats");
    }
}
