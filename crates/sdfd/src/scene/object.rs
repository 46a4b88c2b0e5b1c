use crate::error::EvalError;

use super::{ArgumentIndex, ArgumentKind, Operation, Primitive};

/// A single shape: its own primitives plus the operations combining them.
///
/// Operations run in index order and the last one's result is the field
/// value, so the list order doubles as the topological order of the DAG.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    pub primitives: Vec<Primitive>,
    pub operations: Vec<Operation>,
}

impl Object {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a primitive and returns a reference to it.
    pub fn push_primitive(&mut self, primitive: impl Into<Primitive>) -> ArgumentIndex {
        let index = next_index(self.primitives.len());
        self.primitives.push(primitive.into());
        ArgumentIndex::object_primitive(index)
    }

    /// Appends an operation and returns a reference to its result.
    pub fn push_operation(&mut self, operation: Operation) -> ArgumentIndex {
        let index = next_index(self.operations.len());
        self.operations.push(operation);
        ArgumentIndex::object_operation(index)
    }

    #[inline]
    pub fn min(&mut self, a: ArgumentIndex, b: ArgumentIndex) -> ArgumentIndex {
        self.push_operation(Operation::Min(a, b))
    }

    #[inline]
    pub fn max(&mut self, a: ArgumentIndex, b: ArgumentIndex) -> ArgumentIndex {
        self.push_operation(Operation::Max(a, b))
    }

    #[inline]
    pub fn neg(&mut self, a: ArgumentIndex) -> ArgumentIndex {
        self.push_operation(Operation::Neg(a))
    }

    #[inline]
    pub fn union(&mut self, a: ArgumentIndex, b: ArgumentIndex) -> ArgumentIndex {
        self.min(a, b)
    }

    #[inline]
    pub fn intersection(&mut self, a: ArgumentIndex, b: ArgumentIndex) -> ArgumentIndex {
        self.max(a, b)
    }

    /// `a` with `b` carved out: `max(a, -b)`. Pushes two operations.
    pub fn subtract(&mut self, a: ArgumentIndex, b: ArgumentIndex) -> ArgumentIndex {
        let not_b = self.neg(b);
        self.max(a, not_b)
    }

    /// Checks every argument of every operation, including the backward
    /// reference rule that evaluation does not enforce.
    ///
    /// `shared_len` is the length of the owning scene's primitive list.
    pub fn validate(&self, shared_len: usize) -> Result<(), EvalError> {
        for (operation_index, operation) in self.operations.iter().enumerate() {
            for arg in operation.args() {
                let index = arg.value as usize;
                match arg.kind {
                    ArgumentKind::ObjectPrimitive if index >= self.primitives.len() => {
                        return Err(EvalError::ObjectPrimitiveOutOfBounds {
                            index: arg.value,
                            len: self.primitives.len(),
                        });
                    }
                    ArgumentKind::ScenePrimitive if index >= shared_len => {
                        return Err(EvalError::ScenePrimitiveOutOfBounds {
                            index: arg.value,
                            len: shared_len,
                        });
                    }
                    ArgumentKind::ObjectOperation if index >= self.operations.len() => {
                        return Err(EvalError::OperationOutOfBounds {
                            index: arg.value,
                            len: self.operations.len(),
                        });
                    }
                    ArgumentKind::ObjectOperation if index >= operation_index => {
                        return Err(EvalError::ForwardReference {
                            operation: operation_index,
                            index: arg.value,
                        });
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

#[inline]
fn next_index(len: usize) -> u32 {
    debug_assert!(len < u32::MAX as usize, "too many entries for an argument index");
    len as u32
}
