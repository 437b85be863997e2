//! The path resolver.
//!
//! Resolution runs in two phases. The first expands a leading `~`, `.` or
//! `..` into the home or working directory. The second removes dot segments
//! with [`eliminate_dot_segments`]. Only the first phase talks to the
//! environment, and it does so at most once per call.

use crate::error::PathError;
use crate::path::environment::{home_dir, Environment, SystemEnvironment};
use crate::path::normalize::{eliminate_dot_segments, strip_last_segment};

/// Default maximum path length in bytes, matching Linux `PATH_MAX`.
pub const MAX_PATH: usize = 4096;

/// Leading shorthand recognized by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shorthand {
    /// `~` or `~/...`
    Home,
    /// `.` or `./...`
    Current,
    /// `..` or `../...`
    Parent,
}

impl Shorthand {
    fn classify(input: &str) -> Option<Self> {
        if input == "~" || input.starts_with("~/") {
            Some(Self::Home)
        } else if input == "." || input.starts_with("./") {
            Some(Self::Current)
        } else if input == ".." || input.starts_with("../") {
            Some(Self::Parent)
        } else {
            None
        }
    }

    /// Number of input bytes the shorthand replaces.
    const fn width(self) -> usize {
        match self {
            Self::Home | Self::Current => 1,
            Self::Parent => 2,
        }
    }
}

/// Turns user-typed paths into normalized absolute paths.
///
/// The resolver is stateless apart from its configuration; every call queries
/// the environment afresh and returns a newly allocated string.
///
/// # Examples
///
/// ```no_run
/// use texted::path::PathResolver;
///
/// let resolver = PathResolver::new();
/// let resolved = resolver.resolve("~/notes/./todo.txt").unwrap();
/// assert!(resolved.ends_with("/notes/todo.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct PathResolver<E = SystemEnvironment> {
    env: E,
    max_path: usize,
}

impl PathResolver<SystemEnvironment> {
    /// Create a resolver over the real process environment.
    ///
    /// # Examples
    ///
    /// ```
    /// use texted::path::{PathResolver, MAX_PATH};
    ///
    /// let resolver = PathResolver::new();
    /// assert_eq!(resolver.max_path(), MAX_PATH);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_environment(SystemEnvironment)
    }
}

impl Default for PathResolver<SystemEnvironment> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Environment> PathResolver<E> {
    /// Create a resolver over a custom environment.
    #[must_use]
    pub fn with_environment(env: E) -> Self {
        Self {
            env,
            max_path: MAX_PATH,
        }
    }

    /// Set the maximum path length in bytes.
    ///
    /// Inputs and expansions must stay strictly below this bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use texted::path::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_max_path(256);
    /// assert!(resolver.resolve(&"a".repeat(300)).is_err());
    /// ```
    #[must_use]
    pub fn with_max_path(mut self, max_path: usize) -> Self {
        self.max_path = max_path;
        self
    }

    /// The configured maximum path length.
    #[must_use]
    pub fn max_path(&self) -> usize {
        self.max_path
    }

    /// The environment this resolver queries.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Resolve `input` into a normalized path.
    ///
    /// See the [module documentation](crate::path) for the exact rules.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `input` is `max_path` bytes or longer (`InputTooLong`)
    /// - `~` is used and no home directory is known (`HomeUnresolved`)
    /// - the working directory cannot be read (`CwdUnavailable`)
    /// - the expanded path would reach the bound (`ExpansionTooLong`)
    pub fn resolve(&self, input: &str) -> Result<String, PathError> {
        if input.len() > self.limit() {
            return Err(PathError::InputTooLong {
                len: input.len(),
                max: self.max_path,
            });
        }

        let (cur, anchored) = self.expand_prefix(input)?;
        let mut out = eliminate_dot_segments(&cur);

        // Parent references can eat everything, including the leading `/`.
        if out.is_empty() && anchored {
            out.push('/');
        }

        log::debug!("resolved path {input:?} to {out:?}");
        Ok(out)
    }

    fn limit(&self) -> usize {
        self.max_path.saturating_sub(1)
    }

    /// Phase one: substitute a leading shorthand.
    ///
    /// Returns the expanded path and whether it is rooted at `/`.
    fn expand_prefix(&self, input: &str) -> Result<(String, bool), PathError> {
        let Some(shorthand) = Shorthand::classify(input) else {
            return Ok((input.to_string(), input.starts_with('/')));
        };

        let mut cur = match shorthand {
            Shorthand::Home => home_dir(&self.env)?,
            Shorthand::Current | Shorthand::Parent => {
                self.env.current_dir().map_err(PathError::CwdUnavailable)?
            }
        };
        let anchored = cur.starts_with('/');
        if shorthand == Shorthand::Parent {
            strip_last_segment(&mut cur);
        }

        let len = input.len() + cur.len();
        if len > self.limit() {
            return Err(PathError::ExpansionTooLong {
                len,
                max: self.max_path,
            });
        }

        // A lone trailing separator after the shorthand is not carried over.
        let width = shorthand.width();
        if input.len() > width + 1 {
            cur.push_str(&input[width..]);
        }

        Ok((cur, anchored))
    }
}

/// Resolve `input` against the real environment with the default bound.
///
/// # Errors
///
/// See [`PathResolver::resolve`].
///
/// # Examples
///
/// ```
/// use texted::path::resolve_path;
///
/// assert_eq!(resolve_path("/usr/./local/lib/../bin").unwrap(), "/usr/local/bin");
/// ```
pub fn resolve_path(input: &str) -> Result<String, PathError> {
    PathResolver::new().resolve(input)
}
