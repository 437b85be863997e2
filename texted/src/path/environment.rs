//! Environment queries used by path resolution.
//!
//! The resolver only needs three facts from the outside world: the `HOME`
//! variable, the passwd home of the current user, and the working directory.
//! They sit behind the [`Environment`] trait so tests can pin them down.

use std::env;
use std::io;

use nix::unistd::{getuid, User};

use crate::error::PathError;

/// Source of the home and working directories.
#[cfg_attr(test, mockall::automock)]
pub trait Environment {
    /// Value of the `HOME` variable, if set.
    fn home_variable(&self) -> Option<String>;

    /// Home directory recorded in the user database for the current uid.
    fn user_record_home(&self) -> Option<String>;

    /// The current working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read, for example when it
    /// has been deleted, or when it is not valid UTF-8.
    fn current_dir(&self) -> io::Result<String>;
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn home_variable(&self) -> Option<String> {
        // A non-UTF-8 HOME is treated as unset so the passwd entry gets a say.
        env::var_os("HOME").and_then(|value| value.into_string().ok())
    }

    fn user_record_home(&self) -> Option<String> {
        let user = User::from_uid(getuid()).ok().flatten()?;
        user.dir.into_os_string().into_string().ok()
    }

    fn current_dir(&self) -> io::Result<String> {
        env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "current directory is not valid UTF-8",
                )
            })
    }
}

/// Look up the invoking user's home directory.
///
/// `HOME` wins when it is set, even if it is empty. Otherwise the user
/// database entry for the current uid is used. The result is not checked
/// for existence.
///
/// # Errors
///
/// Returns [`PathError::HomeUnresolved`] if neither source has a value.
///
/// # Examples
///
/// ```no_run
/// use texted::path::{home_dir, SystemEnvironment};
///
/// let home = home_dir(&SystemEnvironment).unwrap();
/// assert!(home.starts_with('/'));
/// ```
pub fn home_dir<E: Environment + ?Sized>(env: &E) -> Result<String, PathError> {
    env.home_variable()
        .or_else(|| env.user_record_home())
        .ok_or(PathError::HomeUnresolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_prefers_variable() {
        let mut env = MockEnvironment::new();
        env.expect_home_variable()
            .returning(|| Some("/home/alice".to_string()));
        env.expect_user_record_home().never();

        assert_eq!(home_dir(&env).unwrap(), "/home/alice");
    }

    #[test]
    fn test_home_falls_back_to_user_record() {
        let mut env = MockEnvironment::new();
        env.expect_home_variable().returning(|| None);
        env.expect_user_record_home()
            .times(1)
            .returning(|| Some("/var/lib/alice".to_string()));

        assert_eq!(home_dir(&env).unwrap(), "/var/lib/alice");
    }

    #[test]
    fn test_home_unresolved() {
        let mut env = MockEnvironment::new();
        env.expect_home_variable().returning(|| None);
        env.expect_user_record_home().returning(|| None);

        assert!(matches!(home_dir(&env), Err(PathError::HomeUnresolved)));
    }

    #[test]
    fn test_empty_home_variable_is_a_value() {
        let mut env = MockEnvironment::new();
        env.expect_home_variable().returning(|| Some(String::new()));
        env.expect_user_record_home().never();

        assert_eq!(home_dir(&env).unwrap(), "");
    }

    #[test]
    fn test_system_current_dir_matches_std() {
        let expected = env::current_dir().unwrap();
        let actual = SystemEnvironment.current_dir().unwrap();
        assert_eq!(std::path::Path::new(&actual), expected);
    }
}
