use crate::profile::UserId;

#[derive(clap::Parser)]
#[clap(name = "profile-editor", about = "Edit the logged-in user's profile")]
pub struct Config {
    /// Base URL of the profile API.
    #[clap(long, env)]
    pub api_url: String,

    /// Id of the logged-in user.
    #[clap(long, env, parse(try_from_str = parse_user_id))]
    pub user_id: UserId,

    /// Bearer token sent with every request.
    #[clap(long, env)]
    pub api_token: Option<String>,

    #[clap(long, env, default_value_t = 30)]
    pub request_timeout_secs: u64,

    #[clap(subcommand)]
    pub command: crate::cli::Command,
}

fn parse_user_id(s: &str) -> Result<UserId, String> {
    s.parse::<i64>()
        .map(UserId)
        .map_err(|e| format!("invalid user id {s:?}: {e}"))
}

#[cfg(test)]
impl Config {
    pub fn for_test(api_url: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            user_id: UserId(42),
            api_token: None,
            request_timeout_secs: 30,
            command: crate::cli::Command::Show,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Command, ImageCommand};
    use clap::Parser;

    #[test]
    fn parses_edit_command() {
        let config = Config::try_parse_from([
            "profile-editor",
            "--api-url",
            "http://localhost:5000/api",
            "--user-id",
            "42",
            "edit",
            "--first-name",
            "Ada",
            "--gender",
            "Female",
        ])
        .unwrap();

        assert_eq!(UserId(42), config.user_id);
        assert_eq!(30, config.request_timeout_secs);
        match config.command {
            Command::Edit(edit) => {
                assert_eq!(Some("Ada".to_string()), edit.first_name);
                assert_eq!(Some("Female".to_string()), edit.gender);
                assert_eq!(None, edit.city);
            }
            _ => panic!("expected edit"),
        }
    }

    #[test]
    fn parses_image_delete() {
        let config = Config::try_parse_from([
            "profile-editor",
            "--api-url",
            "http://localhost:5000/api",
            "--user-id",
            "7",
            "image",
            "delete",
        ])
        .unwrap();

        assert!(matches!(
            config.command,
            Command::Image {
                command: ImageCommand::Delete
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_user_id() {
        assert!(Config::try_parse_from([
            "profile-editor",
            "--api-url",
            "http://localhost:5000/api",
            "--user-id",
            "ada",
            "show",
        ])
        .is_err());
    }
}
