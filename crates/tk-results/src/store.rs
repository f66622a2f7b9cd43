//! Design case storage API.

use crate::types::SavedCase;
use crate::{ResultsError, ResultsResult};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Name → saved design case.
///
/// Owned by the presentation layer (a CLI session directory, a web session);
/// the sizing engine never sees it.
pub trait DesignStore {
    fn has_case(&self, name: &str) -> bool;

    fn save_case(&mut self, case: &SavedCase) -> ResultsResult<()>;

    fn load_case(&self, name: &str) -> ResultsResult<SavedCase>;

    /// All cases, ordered by name.
    fn list_cases(&self) -> ResultsResult<Vec<SavedCase>>;

    fn delete_case(&mut self, name: &str) -> ResultsResult<()>;
}

fn check_name(name: &str) -> ResultsResult<()> {
    let bad = name.trim().is_empty()
        || name.starts_with('.')
        || name.contains(['/', '\\', ':'])
        || name.chars().any(char::is_control);
    if bad {
        return Err(ResultsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Process-lifetime store.
#[derive(Debug, Clone, Default)]
pub struct MemoryDesignStore {
    cases: BTreeMap<String, SavedCase>,
}

impl MemoryDesignStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DesignStore for MemoryDesignStore {
    fn has_case(&self, name: &str) -> bool {
        self.cases.contains_key(name)
    }

    fn save_case(&mut self, case: &SavedCase) -> ResultsResult<()> {
        check_name(&case.name)?;
        self.cases.insert(case.name.clone(), case.clone());
        Ok(())
    }

    fn load_case(&self, name: &str) -> ResultsResult<SavedCase> {
        self.cases
            .get(name)
            .cloned()
            .ok_or_else(|| ResultsError::CaseNotFound {
                name: name.to_string(),
            })
    }

    fn list_cases(&self) -> ResultsResult<Vec<SavedCase>> {
        Ok(self.cases.values().cloned().collect())
    }

    fn delete_case(&mut self, name: &str) -> ResultsResult<()> {
        self.cases.remove(name);
        Ok(())
    }
}

/// One directory per case under `root_dir`, each holding `case.json`.
#[derive(Clone)]
pub struct FileDesignStore {
    root_dir: PathBuf,
}

impl FileDesignStore {
    pub fn new(root_dir: PathBuf) -> ResultsResult<Self> {
        if !root_dir.exists() {
            fs::create_dir_all(&root_dir)?;
        }
        Ok(Self { root_dir })
    }

    fn case_dir(&self, name: &str) -> PathBuf {
        self.root_dir.join(name)
    }

    fn case_path(&self, name: &str) -> PathBuf {
        self.case_dir(name).join("case.json")
    }
}

impl DesignStore for FileDesignStore {
    fn has_case(&self, name: &str) -> bool {
        check_name(name).is_ok() && self.case_path(name).exists()
    }

    fn save_case(&mut self, case: &SavedCase) -> ResultsResult<()> {
        check_name(&case.name)?;
        fs::create_dir_all(self.case_dir(&case.name))?;

        let json = serde_json::to_string_pretty(case)?;
        fs::write(self.case_path(&case.name), json)?;
        Ok(())
    }

    fn load_case(&self, name: &str) -> ResultsResult<SavedCase> {
        check_name(name)?;
        let path = self.case_path(name);

        if !path.exists() {
            return Err(ResultsError::CaseNotFound {
                name: name.to_string(),
            });
        }

        let content = fs::read_to_string(path)?;
        let case = serde_json::from_str(&content)?;
        Ok(case)
    }

    fn list_cases(&self) -> ResultsResult<Vec<SavedCase>> {
        let mut cases = Vec::new();

        if !self.root_dir.exists() {
            return Ok(cases);
        }

        for entry in fs::read_dir(&self.root_dir)? {
            let entry = entry?;
            if entry.path().is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                if let Ok(case) = self.load_case(&name) {
                    cases.push(case);
                }
            }
        }

        cases.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(cases)
    }

    fn delete_case(&mut self, name: &str) -> ResultsResult<()> {
        check_name(name)?;
        let dir = self.case_dir(name);
        if dir.exists() {
            fs::remove_dir_all(dir)?;
        }
        Ok(())
    }
}
