//! Build configuration resolution.
//!
//! Values flow from CLI flags through environment overrides, most specific
//! wins: a platform-qualified variable (`LUAINC_macosx_base`) beats the
//! generic one (`LUAINC`), which beats the flag default. A `.env` file is
//! layered underneath by `main` via dotenvy; real environment variables
//! always win over `.env` entries.

use std::env;
use std::path::{Path, PathBuf};

/// The two platform branches of the luasocket Makefile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Macosx,
    Linux,
}

impl Platform {
    /// Branch for the host this binary was compiled for.
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Macosx
        } else {
            Platform::Linux
        }
    }

    /// Branch selected by a `--plat` flag value. Only the literal `macosx`
    /// takes the macOS branch; everything else (including cross targets
    /// like `mingw`) uses the Linux-side variable names.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "macosx" {
            Platform::Macosx
        } else {
            Platform::Linux
        }
    }

    /// Flag spelling of this branch.
    pub fn flag(&self) -> &'static str {
        match self {
            Platform::Macosx => "macosx",
            Platform::Linux => "linux",
        }
    }

    /// Makefile variable naming the Lua include directory for this branch.
    pub fn include_var(&self) -> &'static str {
        match self {
            Platform::Macosx => "LUAINC_macosx_base",
            Platform::Linux => "LUAINC_linux_base",
        }
    }

    /// Makefile variable naming the install prefix for this branch.
    pub fn prefix_var(&self) -> &'static str {
        match self {
            Platform::Macosx => "LUAPREFIX_macosx",
            Platform::Linux => "LUAPREFIX_linux",
        }
    }
}

/// Resolved per-invocation build configuration.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Value of the `PLAT=` token (the `PLAT` env var wins over the flag).
    pub plat: String,
    /// Platform branch, selected by the `--plat` flag alone.
    pub branch: Platform,
    /// Resolved Lua include directory.
    pub include_dir: String,
    /// Install prefix, relative to `luasocket/src` (hence the `../..` hop
    /// back out of the vendored tree).
    pub prefix: PathBuf,
    /// `DEBUG=` passthrough; present whenever `DEBUG` is set, even empty.
    pub debug: Option<String>,
}

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

impl BuildConfig {
    /// Resolve configuration from the CLI flags and the environment.
    pub fn resolve(plat_flag: &str, incl_flag: &str, build_flag: &str) -> Self {
        let branch = Platform::from_flag(plat_flag);

        let plat = env_or("PLAT", plat_flag);
        let include_base = env_or("LUAINC", incl_flag);
        let prefix_base = env_or("LUAPREFIX", build_flag);

        let include_dir = env_or(branch.include_var(), &include_base);
        let prefix = Path::new("..")
            .join("..")
            .join(env_or(branch.prefix_var(), &prefix_base));

        BuildConfig {
            plat,
            branch,
            include_dir,
            prefix,
            debug: env::var("DEBUG").ok(),
        }
    }

    /// Argument vector for the external make invocation.
    pub fn make_args(&self) -> Vec<String> {
        let mut args = vec![
            "install-both".to_string(),
            format!("PLAT={}", self.plat),
            format!("{}={}", self.branch.include_var(), self.include_dir),
            format!("{}={}", self.branch.prefix_var(), self.prefix.display()),
        ];
        if let Some(debug) = &self.debug {
            args.push(format!("DEBUG={debug}"));
        }
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DEBUG",
        "PLAT",
        "LUAINC",
        "LUAPREFIX",
        "LUAINC_macosx_base",
        "LUAPREFIX_macosx",
        "LUAINC_linux_base",
        "LUAPREFIX_linux",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn flag_defaults_reach_the_command_line() {
        clear_env();
        let config = BuildConfig::resolve("linux", "/usr/local/include", "build");
        assert_eq!(config.branch, Platform::Linux);

        let args = config.make_args();
        assert_eq!(args[0], "install-both");
        assert_eq!(args[1], "PLAT=linux");
        assert_eq!(args[2], "LUAINC_linux_base=/usr/local/include");
        assert_eq!(
            args[3],
            format!(
                "LUAPREFIX_linux={}",
                Path::new("..").join("..").join("build").display()
            )
        );
        assert_eq!(args.len(), 4);
    }

    #[test]
    #[serial]
    fn generic_env_overrides_flags() {
        clear_env();
        env::set_var("LUAINC", "/opt/lua/include");
        env::set_var("LUAPREFIX", "out");

        let config = BuildConfig::resolve("linux", "/usr/local/include", "build");
        assert_eq!(config.include_dir, "/opt/lua/include");
        assert!(config.prefix.ends_with("out"));
    }

    #[test]
    #[serial]
    fn platform_qualified_env_overrides_generic() {
        clear_env();
        env::set_var("LUAINC", "/opt/lua/include");
        env::set_var("LUAINC_macosx_base", "/opt/mac/include");
        env::set_var("LUAPREFIX_macosx", "mac-out");

        let config = BuildConfig::resolve("macosx", "/usr/local/include", "build");
        assert_eq!(config.branch, Platform::Macosx);
        assert_eq!(config.include_dir, "/opt/mac/include");
        assert!(config.prefix.ends_with("mac-out"));

        let args = config.make_args();
        assert!(args.iter().any(|a| a.starts_with("LUAINC_macosx_base=")));
        assert!(args.iter().any(|a| a.starts_with("LUAPREFIX_macosx=")));
    }

    #[test]
    #[serial]
    fn plat_env_overrides_flag_but_not_branch() {
        clear_env();
        env::set_var("PLAT", "mingw");

        let config = BuildConfig::resolve("linux", "/usr/local/include", "build");
        assert_eq!(config.plat, "mingw");
        assert_eq!(config.branch, Platform::Linux);
        assert!(config.make_args().contains(&"PLAT=mingw".to_string()));
    }

    #[test]
    #[serial]
    fn debug_token_only_when_set() {
        clear_env();
        let config = BuildConfig::resolve("linux", "/usr/local/include", "build");
        assert!(!config.make_args().iter().any(|a| a.starts_with("DEBUG=")));

        env::set_var("DEBUG", "1");
        let config = BuildConfig::resolve("linux", "/usr/local/include", "build");
        assert!(config.make_args().contains(&"DEBUG=1".to_string()));
    }

    #[test]
    fn only_macosx_flag_selects_macos_branch() {
        assert_eq!(Platform::from_flag("macosx"), Platform::Macosx);
        assert_eq!(Platform::from_flag("linux"), Platform::Linux);
        assert_eq!(Platform::from_flag("mingw"), Platform::Linux);
    }
}
