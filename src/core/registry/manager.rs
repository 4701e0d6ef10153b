use super::format;
use super::record::{find_by_name, ProjectRecord};
use crate::utils::{debug_log, ProjError, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// File-backed project registry.
///
/// The backing file is created empty on first access. Reads take a shared
/// lock; `append` holds an exclusive lock across its duplicate check and
/// write so concurrent invocations cannot register the same name twice.
pub struct RegistryManager {
    path: PathBuf,
}

impl RegistryManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> Result<File> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    ProjError::config_error(format!(
                        "Failed to create registry directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| {
                ProjError::config_error(format!(
                    "Failed to open registry {}: {}",
                    self.path.display(),
                    e
                ))
            })
    }

    fn read_all(file: &mut File) -> Result<String> {
        let mut content = String::new();
        file.read_to_string(&mut content)?;
        Ok(content)
    }

    pub fn load(&self) -> Result<Vec<ProjectRecord>> {
        let mut file = self.open()?;
        FileExt::lock_shared(&file)?;
        let content = Self::read_all(&mut file);
        FileExt::unlock(&file)?;

        let records = format::parse(&content?)?;
        debug_log(&format!(
            "Loaded {} project(s) from {}",
            records.len(),
            self.path.display()
        ));
        Ok(records)
    }

    pub fn find(&self, name: &str) -> Result<Option<ProjectRecord>> {
        let records = self.load()?;
        Ok(find_by_name(&records, name).cloned())
    }

    pub fn append(&self, record: &ProjectRecord) -> Result<()> {
        let mut file = self.open()?;
        FileExt::lock_exclusive(&file)?;
        let result = Self::append_locked(&mut file, record);
        FileExt::unlock(&file)?;
        result?;

        debug_log(&format!(
            "Registered {} at {} in {}",
            record.name,
            record.directory,
            self.path.display()
        ));
        Ok(())
    }

    fn append_locked(file: &mut File, record: &ProjectRecord) -> Result<()> {
        let content = Self::read_all(file)?;
        let records = format::parse(&content)?;

        if let Some(existing) = find_by_name(&records, &record.name) {
            return Err(ProjError::duplicate_project(
                &existing.name,
                &existing.directory,
            ));
        }

        file.write_all(format::append_block(&content, record).as_bytes())?;
        file.sync_all()?;
        Ok(())
    }
}
