use std::collections::BTreeMap;

use super::{SemanticError, Ty};

/// Declared variables. A name is defined at most once per table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    table: BTreeMap<String, Ty>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare_var(&mut self, name: &str, ty: Ty) -> Result<(), SemanticError> {
        if self.table.contains_key(name) {
            return Err(SemanticError::AlreadyDeclared(name.to_string()));
        }
        self.table.insert(name.to_string(), ty);
        Ok(())
    }

    pub fn get_var_type(&self, name: &str) -> Result<Ty, SemanticError> {
        self.table
            .get(name)
            .copied()
            .ok_or_else(|| SemanticError::NotDeclared(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Declarations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Ty)> {
        self.table.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    pub fn clear(&mut self) {
        self.table.clear();
    }
}
