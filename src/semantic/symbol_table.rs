use std::collections::{hash_map, HashMap};

use crate::{
    ast::types::Type,
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// A declared variable and the type of the value it currently holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub symbol_type: Type,
}

/// The single flat scope of a program.
#[derive(Debug, Default, Clone)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    pub fn declare(
        &mut self,
        name: &str,
        symbol_type: Type,
        current_position: Position,
    ) -> Result<(), Error> {
        if self.symbols.contains_key(name) {
            Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    variable: String::from(name),
                },
                current_position,
            ))
        } else {
            self.symbols.insert(
                String::from(name),
                Symbol {
                    name: String::from(name),
                    symbol_type,
                },
            );
            Ok(())
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Overwrites the recorded type of an existing symbol.
    pub fn retype(
        &mut self,
        name: &str,
        symbol_type: Type,
        current_position: Position,
    ) -> Result<(), Error> {
        match self.symbols.get_mut(name) {
            Some(symbol) => {
                symbol.symbol_type = symbol_type;
                Ok(())
            }
            None => Err(Error::new(
                ErrorImpl::UndeclaredVariable {
                    variable: String::from(name),
                },
                current_position,
            )),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn iter(&self) -> hash_map::Values<'_, String, Symbol> {
        self.symbols.values()
    }
}
