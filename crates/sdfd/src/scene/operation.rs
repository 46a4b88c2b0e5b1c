use super::ArgumentIndex;

/// One combination step of an object's operation list.
///
/// Each variant carries exactly as many arguments as its arity, so a unary
/// operation has no unused slot.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Operation {
    /// Union.
    Min(ArgumentIndex, ArgumentIndex),
    /// Intersection.
    Max(ArgumentIndex, ArgumentIndex),
    /// Complement.
    Neg(ArgumentIndex),
}

/// Wire tag of an [`Operation`] variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u16)]
pub enum OperationKind {
    Min = 0,
    Max = 1,
    Neg = 2,
}

impl OperationKind {
    #[inline]
    pub const fn tag(self) -> u16 {
        self as u16
    }

    pub const fn from_tag(tag: u16) -> Option<Self> {
        match tag {
            0 => Some(OperationKind::Min),
            1 => Some(OperationKind::Max),
            2 => Some(OperationKind::Neg),
            _ => None,
        }
    }

    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            OperationKind::Min | OperationKind::Max => 2,
            OperationKind::Neg => 1,
        }
    }
}

impl Default for Operation {
    fn default() -> Self {
        Operation::placeholder(OperationKind::Min)
    }
}

impl Operation {
    #[inline]
    pub fn kind(&self) -> OperationKind {
        match self {
            Operation::Min(..) => OperationKind::Min,
            Operation::Max(..) => OperationKind::Max,
            Operation::Neg(_) => OperationKind::Neg,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.kind().arity()
    }

    /// Operation of the given kind with every argument set to object primitive 0.
    pub fn placeholder(kind: OperationKind) -> Self {
        let arg = ArgumentIndex::default();
        match kind {
            OperationKind::Min => Operation::Min(arg, arg),
            OperationKind::Max => Operation::Max(arg, arg),
            OperationKind::Neg => Operation::Neg(arg),
        }
    }

    /// Arguments in slot order.
    pub fn args(&self) -> impl Iterator<Item = ArgumentIndex> {
        let slots = match *self {
            Operation::Min(a, b) | Operation::Max(a, b) => [Some(a), Some(b)],
            Operation::Neg(a) => [Some(a), None],
        };
        slots.into_iter().flatten()
    }

    pub fn args_mut(&mut self) -> impl Iterator<Item = &mut ArgumentIndex> {
        let slots = match self {
            Operation::Min(a, b) | Operation::Max(a, b) => [Some(a), Some(b)],
            Operation::Neg(a) => [Some(a), None],
        };
        slots.into_iter().flatten()
    }

    /// Applies the operation, reading each argument through `resolve`.
    #[inline]
    pub fn apply<E>(&self, mut resolve: impl FnMut(ArgumentIndex) -> Result<f32, E>) -> Result<f32, E> {
        Ok(match *self {
            Operation::Min(a, b) => nan_min(resolve(a)?, resolve(b)?),
            Operation::Max(a, b) => nan_max(resolve(a)?, resolve(b)?),
            Operation::Neg(a) => -resolve(a)?,
        })
    }
}

// `f32::min`/`max` drop a NaN operand. A NaN here comes from reading an
// operation that has not run yet and has to reach the field value.
#[inline]
pub(crate) fn nan_min(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() { f32::NAN } else { a.min(b) }
}

#[inline]
fn nan_max(a: f32, b: f32) -> f32 {
    if a.is_nan() || b.is_nan() { f32::NAN } else { a.max(b) }
}
