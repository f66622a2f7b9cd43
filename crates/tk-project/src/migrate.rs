//! Schema migration framework.

use crate::ProjectError;
use crate::schema::CaseFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut file: CaseFile) -> Result<CaseFile, ProjectError> {
    while file.version < LATEST_VERSION {
        file = migrate_one_version(file)?;
    }
    Ok(file)
}

fn migrate_one_version(file: CaseFile) -> Result<CaseFile, ProjectError> {
    match file.version {
        0 => migrate_v0_to_v1(file),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files were written from the web form, which took the fill level
/// in percent.
fn migrate_v0_to_v1(mut file: CaseFile) -> Result<CaseFile, ProjectError> {
    for case in &mut file.cases {
        if case.max_fill_fraction > 1.0 {
            case.max_fill_fraction /= 100.0;
        }
    }
    file.version = 1;
    Ok(file)
}
