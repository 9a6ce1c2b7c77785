//! The assembled curriculum and the builder that fills it.

use serde::Serialize;
use tracing::debug;

use crate::types::Module;

/// Read-only, insertion-ordered collection of modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Curriculum {
    modules: Vec<Module>,
}

impl Curriculum {
    pub fn count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Module at `index`, or `None` when out of range.
    pub fn by_index(&self, index: usize) -> Option<&Module> {
        self.modules.get(index)
    }

    /// First module whose id equals `id`.
    pub fn by_id(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }
}

impl<'a> IntoIterator for &'a Curriculum {
    type Item = &'a Module;
    type IntoIter = std::slice::Iter<'a, Module>;

    fn into_iter(self) -> Self::IntoIter {
        self.modules.iter()
    }
}

/// Mutable, capacity-bounded module list used during aggregation.
#[derive(Debug)]
pub struct CurriculumBuilder {
    modules: Vec<Module>,
    capacity: usize,
}

impl CurriculumBuilder {
    pub fn new(capacity: usize) -> Self {
        Self {
            modules: Vec::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Existing module with `id`, or a newly created one while capacity
    /// remains. `None` means the module table is full.
    pub fn module_mut(&mut self, id: &str) -> Option<&mut Module> {
        if let Some(index) = self.modules.iter().position(|module| module.id == id) {
            return self.modules.get_mut(index);
        }
        if self.modules.len() >= self.capacity {
            return None;
        }

        let module = Module::new(id);
        debug!("Created module: {}", module.display_name);
        self.modules.push(module);
        self.modules.last_mut()
    }

    /// Freeze into a curriculum, dropping modules that ended up empty.
    pub fn finish(self) -> Curriculum {
        let modules = self
            .modules
            .into_iter()
            .filter(|module| {
                let keep = module.has_content();
                if !keep {
                    debug!("Dropping module with no content: {}", module.id);
                }
                keep
            })
            .collect();
        Curriculum { modules }
    }
}
