use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use super::errors::ConfigError;
use super::model::SidebarConfig;

const CONFIG_DIR: &str = "designbrnd";
const CONFIG_FILE: &str = "sidebar.json";

static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// What was found at the config location.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ConfigLoad {
    Loaded(SidebarConfig),
    Missing,
    /// The file exists but does not hold a config.
    Invalid {
        reason: String,
    },
}

impl ConfigLoad {
    /// The loaded config, or defaults for a missing or unreadable file.
    pub(crate) fn into_config(self) -> SidebarConfig {
        match self {
            ConfigLoad::Loaded(config) => config,
            ConfigLoad::Missing | ConfigLoad::Invalid { .. } => {
                SidebarConfig::default()
            },
        }
    }
}

/// Location of the sidebar config on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub(crate) fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `$HOME/.config/designbrnd/sidebar.json`, or the temp dir without
    /// `HOME`.
    pub(crate) fn user() -> Self {
        let base = match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(".config"),
            None => std::env::temp_dir(),
        };
        Self::at(base.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load(&self) -> Result<ConfigLoad, ConfigError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(ConfigLoad::Missing);
            },
            Err(err) => return Err(err.into()),
        };

        Ok(match serde_json::from_str::<SidebarConfig>(&data) {
            Ok(config) => ConfigLoad::Loaded(config),
            Err(err) => ConfigLoad::Invalid {
                reason: err.to_string(),
            },
        })
    }

    /// Replace the file contents with `config`.
    ///
    /// Each call writes its own temp file next to the target and renames it
    /// into place, so concurrent writers never share a partial file.
    pub(crate) fn save(
        &self,
        config: &SidebarConfig,
    ) -> Result<(), ConfigError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_vec_pretty(config)?;
        let staging = self.staging_path();
        if let Err(err) = fs::write(&staging, payload)
            .and_then(|()| fs::rename(&staging, &self.path))
        {
            let _ = fs::remove_file(&staging);
            return Err(err.into());
        }

        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from(CONFIG_FILE));
        self.path
            .with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
    }
}

/// Write `config` to the user config file.
pub(crate) fn save_config(config: &SidebarConfig) -> Result<(), ConfigError> {
    ConfigFile::user().save(config)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::thread;

    use designbrnd_nav::Project;

    use super::{ConfigFile, ConfigLoad};
    use crate::config::SidebarConfig;

    static SCRATCH_SEQ: AtomicU64 = AtomicU64::new(0);

    /// Directory removed again when the test ends.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(label: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "designbrnd-{label}-{}-{}",
                std::process::id(),
                SCRATCH_SEQ.fetch_add(1, Ordering::Relaxed)
            ));
            fs::create_dir_all(&dir).expect("scratch dir created");
            Self(dir)
        }

        fn file(&self) -> ConfigFile {
            ConfigFile::at(self.0.join("nested").join("sidebar.json"))
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    fn config_with(project: Project) -> SidebarConfig {
        let mut config = SidebarConfig::default();
        config.remember_project(project);
        config
    }

    #[test]
    fn given_picked_project_when_saved_then_reload_restores_it() {
        let scratch = Scratch::new("reload");
        let file = scratch.file();
        let config = config_with(Project::new("p2", "Foo Project"));

        file.save(&config).expect("save succeeds");

        let load = file.load().expect("load succeeds");
        assert_eq!(load, ConfigLoad::Loaded(config));
    }

    #[test]
    fn given_no_file_when_loading_then_defaults_are_used() {
        let scratch = Scratch::new("missing");

        let load =
            scratch.file().load().expect("missing file is not an error");

        assert_eq!(load, ConfigLoad::Missing);
        assert_eq!(load.into_config(), SidebarConfig::default());
    }

    #[test]
    fn given_partial_json_when_loading_then_missing_fields_default() {
        let scratch = Scratch::new("partial");
        let file = scratch.file();
        fs::create_dir_all(file.path().parent().expect("has parent"))
            .expect("parent created");
        fs::write(file.path(), r#"{ "initial_route": "/beads" }"#)
            .expect("payload written");

        let config = file.load().expect("load succeeds").into_config();

        assert_eq!(config.initial_route(), "/beads");
        assert_eq!(config.default_project(), &Project::default());
    }

    #[test]
    fn given_garbage_when_loading_then_reports_invalid_with_reason() {
        let scratch = Scratch::new("garbage");
        let file = scratch.file();
        fs::create_dir_all(file.path().parent().expect("has parent"))
            .expect("parent created");
        fs::write(file.path(), "{ not json").expect("payload written");

        match file.load().expect("bad json is not an io error") {
            ConfigLoad::Invalid { reason } => assert!(!reason.is_empty()),
            other => panic!("expected invalid load, got {other:?}"),
        }
    }

    #[test]
    fn given_concurrent_saves_when_racing_then_all_succeed_and_file_is_whole()
    {
        let scratch = Scratch::new("race");
        let file = scratch.file();
        let candidates: Vec<SidebarConfig> = (0..4)
            .map(|writer| {
                config_with(Project::new(
                    format!("p{writer}"),
                    format!("Project {writer}"),
                ))
            })
            .collect();

        thread::scope(|scope| {
            for config in &candidates {
                let file = &file;
                scope.spawn(move || {
                    for _ in 0..50 {
                        file.save(config).expect("concurrent save succeeds");
                    }
                });
            }
        });

        let saved = file.load().expect("load succeeds").into_config();
        assert!(candidates.contains(&saved));
        let leftovers = fs::read_dir(file.path().parent().expect("has parent"))
            .expect("dir readable")
            .count();
        assert_eq!(leftovers, 1);
    }
}
