use anyhow::{Context, Result};
use growunit_core::{codec, codec::WireFormat, GrowUnitError};
use growunit_schemas::GrowUnit;
use std::{
    collections::{btree_map::Entry, BTreeMap},
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// All grow units loaded from the given files, keyed by `Id`.
///
/// This is the owning collection for the units it holds, so it is where `Id`
/// uniqueness is enforced.
#[derive(Debug, Default)]
pub struct Catalog {
    pub units: BTreeMap<u64, GrowUnit>,
}

impl Catalog {
    /// Loads every file in `paths`. Directories are scanned (not recursively)
    /// for `.json`, `.yaml` and `.yml` files.
    pub fn load(paths: &[PathBuf]) -> Result<Self> {
        let mut catalog = Self::default();
        for path in paths {
            if path.is_dir() {
                for file in grow_unit_files_in(path)? {
                    catalog.load_file(&file)?;
                }
            } else {
                catalog.load_file(path)?;
            }
        }

        info!(units = catalog.units.len(), "grow unit catalog loaded");
        Ok(catalog)
    }

    fn load_file(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "loading grow unit file");
        let format = WireFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| GrowUnitError::FileIO(path.display().to_string(), e))?;
        let file = codec::file_from_str(format, &content)
            .with_context(|| format!("Failed to parse grow units from {:?}", path))?;

        for unit in file.grow_units {
            self.insert(unit)
                .with_context(|| format!("Failed to add grow units from {:?}", path))?;
        }
        Ok(())
    }

    pub fn insert(&mut self, unit: GrowUnit) -> Result<(), GrowUnitError> {
        match self.units.entry(unit.id) {
            Entry::Occupied(_) => Err(GrowUnitError::DuplicateId(unit.id)),
            Entry::Vacant(slot) => {
                slot.insert(unit);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: u64) -> Option<&GrowUnit> {
        self.units.get(&id)
    }
}

fn grow_unit_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?
    {
        let path = entry?.path();
        if path.is_file() && WireFormat::from_path(&path).is_ok() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
