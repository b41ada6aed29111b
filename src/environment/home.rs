//! Home directory resolution.

use std::path::{Path, PathBuf};

use super::{env_value, vars, EnvMap, HomeDirFn};

/// If `input` starts with a `~` that is followed by end, `/` or `\`,
/// return what comes after the `~`.
fn strip_tilde(input: &str) -> Option<&str> {
    let rest = input.strip_prefix('~')?;
    (rest.is_empty() || rest.starts_with(['/', '\\'])).then_some(rest)
}

fn accessor_home(homedir: HomeDirFn<'_>) -> Option<String> {
    homedir()
        .map(|path| path.to_string_lossy().trim().to_string())
        .filter(|path| !path.is_empty())
}

fn resolve_raw_home_dir(env: &EnvMap, homedir: HomeDirFn<'_>) -> Option<String> {
    if let Some(explicit) = env_value(env, vars::PROPEL_HOME) {
        let Some(rest) = strip_tilde(explicit) else {
            return Some(explicit.to_string());
        };
        let fallback = env_value(env, vars::HOME)
            .or_else(|| env_value(env, vars::USERPROFILE))
            .map(str::to_string)
            .or_else(|| accessor_home(homedir))?;
        return Some(format!("{fallback}{rest}"));
    }

    env_value(env, vars::HOME)
        .or_else(|| env_value(env, vars::USERPROFILE))
        .map(str::to_string)
        .or_else(|| accessor_home(homedir))
}

/// Make `path` absolute against the current directory, leaving it as is
/// when that fails.
pub(crate) fn absolutize(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Resolve the effective home directory as an absolute path.
///
/// Returns `None` when no source yields a value, including a `~`-relative
/// `PROPEL_HOME` with nothing to expand it against.
pub fn resolve_effective_home_dir(env: &EnvMap, homedir: HomeDirFn<'_>) -> Option<PathBuf> {
    resolve_raw_home_dir(env, homedir).map(absolutize)
}

/// Resolve the home directory, falling back to the current directory.
pub fn resolve_required_home_dir(env: &EnvMap, homedir: HomeDirFn<'_>) -> PathBuf {
    resolve_effective_home_dir(env, homedir).unwrap_or_else(|| {
        tracing::debug!("No home directory available, using current directory");
        std::env::current_dir().unwrap_or_default()
    })
}

/// Expand a leading `~` in `input` against the effective home directory.
///
/// Inputs without a leading `~` (or when no home can be resolved) are
/// returned unchanged.
///
/// # Example
///
/// ```
/// use propel::environment::{expand_home_prefix, EnvMap};
///
/// let mut env = EnvMap::new();
/// env.insert("PROPEL_HOME".into(), "/srv/propel-home".into());
///
/// assert_eq!(expand_home_prefix("~/x", &env, &|| None), "/srv/propel-home/x");
/// assert_eq!(expand_home_prefix("/tmp/x", &env, &|| None), "/tmp/x");
/// ```
pub fn expand_home_prefix(input: &str, env: &EnvMap, homedir: HomeDirFn<'_>) -> String {
    let Some(rest) = strip_tilde(input) else {
        return input.to_string();
    };
    match resolve_effective_home_dir(env, homedir) {
        Some(home) => format!("{}{rest}", home.display()),
        None => input.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn no_home() -> Option<PathBuf> {
        None
    }

    #[test]
    fn prefers_propel_home_over_home_and_userprofile() {
        let env = env(&[
            ("PROPEL_HOME", "/srv/propel-home"),
            ("HOME", "/home/other"),
            ("USERPROFILE", "C:/Users/other"),
        ]);
        assert_eq!(
            resolve_effective_home_dir(&env, &|| Some(PathBuf::from("/fallback"))),
            Some(PathBuf::from("/srv/propel-home"))
        );
    }

    #[test]
    fn falls_back_to_home_then_accessor() {
        let env_home = env(&[("HOME", "/home/alice")]);
        assert_eq!(
            resolve_effective_home_dir(&env_home, &no_home),
            Some(PathBuf::from("/home/alice"))
        );

        let empty = EnvMap::new();
        assert_eq!(
            resolve_effective_home_dir(&empty, &|| Some(PathBuf::from("/fallback"))),
            Some(PathBuf::from("/fallback"))
        );
    }

    #[test]
    fn falls_back_to_userprofile() {
        let env = env(&[("USERPROFILE", "/Users/alice")]);
        assert_eq!(
            resolve_effective_home_dir(&env, &no_home),
            Some(PathBuf::from("/Users/alice"))
        );
    }

    #[test]
    fn expands_propel_home_tilde() {
        let env = env(&[("PROPEL_HOME", "~/svc"), ("HOME", "/home/alice")]);
        assert_eq!(
            resolve_effective_home_dir(&env, &no_home),
            Some(PathBuf::from("/home/alice/svc"))
        );
    }

    #[test]
    fn tilde_home_without_fallback_is_unresolved() {
        let env = env(&[("PROPEL_HOME", "~")]);
        assert_eq!(resolve_effective_home_dir(&env, &no_home), None);
    }

    #[test]
    fn tilde_user_syntax_is_literal() {
        let env = env(&[("PROPEL_HOME", "/srv/~bob")]);
        assert_eq!(
            resolve_effective_home_dir(&env, &no_home),
            Some(PathBuf::from("/srv/~bob"))
        );
    }

    #[test]
    fn required_home_uses_cwd_without_sources() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_required_home_dir(&EnvMap::new(), &no_home), cwd);

        let tilde_only = env(&[("PROPEL_HOME", "~")]);
        assert_eq!(resolve_required_home_dir(&tilde_only, &no_home), cwd);
    }

    #[test]
    fn required_home_keeps_explicit_home() {
        let env = env(&[("PROPEL_HOME", "/custom/home")]);
        assert_eq!(
            resolve_required_home_dir(&env, &|| Some(PathBuf::from("/fallback"))),
            PathBuf::from("/custom/home")
        );
    }

    #[test]
    fn relative_home_is_made_absolute() {
        let env = env(&[("HOME", "relative/home")]);
        let resolved = resolve_effective_home_dir(&env, &no_home).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("relative/home"));
    }

    #[test]
    fn expand_uses_effective_home() {
        let env = env(&[("PROPEL_HOME", "/srv/propel-home")]);
        assert_eq!(expand_home_prefix("~/x", &env, &no_home), "/srv/propel-home/x");
        assert_eq!(expand_home_prefix("~", &env, &no_home), "/srv/propel-home");
    }

    #[test]
    fn expand_keeps_other_values() {
        let env = env(&[("HOME", "/home/alice")]);
        assert_eq!(expand_home_prefix("/tmp/x", &env, &no_home), "/tmp/x");
        assert_eq!(expand_home_prefix("~bob/x", &env, &no_home), "~bob/x");
        assert_eq!(expand_home_prefix("~/x", &EnvMap::new(), &no_home), "~/x");
    }
}
