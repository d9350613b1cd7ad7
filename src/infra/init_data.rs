//! Decoding of the host launch parameters (`initData`).
//!
//! The host passes its launch context as an `application/x-www-form-urlencoded`
//! string whose `user` field is a JSON object. Only the user record is read;
//! the `hash` signature is meant for the receiving backend and is not checked.

use thiserror::Error;

use crate::domain::host_user::HostUser;

const USER_FIELD: &str = "user";

#[derive(Debug, Error)]
pub enum InitDataError {
    #[error("`user` field is not a valid user record: {0}")]
    InvalidUser(#[source] serde_json::Error),
}

/// Returns the user snapshot carried by `raw`, or `None` when the host sent no user.
pub fn user_from_init_data(raw: &str) -> Result<Option<HostUser>, InitDataError> {
    let query = raw.trim().trim_start_matches(['?', '#']);

    let Some(user_json) = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == USER_FIELD)
        .map(|(_, value)| value.into_owned())
    else {
        return Ok(None);
    };

    serde_json::from_str(&user_json)
        .map(Some)
        .map_err(InitDataError::InvalidUser)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "query_id=AAHdF6IQAAAAAN0XohDhrOrc&user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Vladislav%22%2C%22last_name%22%3A%22Kibenko%22%2C%22username%22%3A%22vdkfrost%22%2C%22language_code%22%3A%22ru%22%2C%22is_premium%22%3Atrue%7D&auth_date=1662771648&hash=c501b71e775f74ce10e377dea85a7ea24ecd640b223ea86dfe453e0eaed2e2b2";

    #[test]
    fn decodes_user_from_launch_query() {
        let user = user_from_init_data(SAMPLE)
            .expect("sample should decode")
            .expect("sample carries a user");

        assert_eq!(user.id, 279058397);
        assert_eq!(user.first_name, "Vladislav");
        assert_eq!(user.last_name.as_deref(), Some("Kibenko"));
        assert_eq!(user.username.as_deref(), Some("vdkfrost"));
        assert_eq!(user.language_code.as_deref(), Some("ru"));
    }

    #[test]
    fn tolerates_leading_query_marker() {
        let raw = format!("#{SAMPLE}");

        assert!(user_from_init_data(&raw)
            .expect("sample should decode")
            .is_some());
    }

    #[test]
    fn missing_user_field_yields_none() {
        assert_eq!(
            user_from_init_data("auth_date=1&hash=abc").expect("should decode"),
            None
        );
        assert_eq!(user_from_init_data("").expect("should decode"), None);
    }

    #[test]
    fn malformed_user_json_is_an_error() {
        let result = user_from_init_data("user=%7Bnot-json");

        assert!(matches!(result, Err(InitDataError::InvalidUser(_))));
    }

    #[test]
    fn user_without_first_name_is_an_error() {
        let result = user_from_init_data("user=%7B%22id%22%3A1%7D");

        assert!(matches!(result, Err(InitDataError::InvalidUser(_))));
    }
}
