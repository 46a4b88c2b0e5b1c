/// Where an operation argument reads its value from.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ArgumentKind {
    /// `Object::primitives[value]`.
    #[default]
    ObjectPrimitive,
    /// Result of `Object::operations[value]`; must be an earlier operation.
    ObjectOperation,
    /// `Scene::primitives[value]`, shared by every object of the scene.
    ScenePrimitive,
}

impl ArgumentKind {
    pub const fn name(self) -> &'static str {
        match self {
            ArgumentKind::ObjectPrimitive => "object primitive",
            ArgumentKind::ObjectOperation => "object operation",
            ArgumentKind::ScenePrimitive => "scene primitive",
        }
    }
}

/// Tagged reference to an operation operand.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ArgumentIndex {
    pub kind: ArgumentKind,
    pub value: u32,
}

impl ArgumentIndex {
    #[inline]
    pub const fn new(kind: ArgumentKind, value: u32) -> Self {
        Self { kind, value }
    }

    #[inline]
    pub const fn object_primitive(index: u32) -> Self {
        Self::new(ArgumentKind::ObjectPrimitive, index)
    }

    #[inline]
    pub const fn object_operation(index: u32) -> Self {
        Self::new(ArgumentKind::ObjectOperation, index)
    }

    #[inline]
    pub const fn scene_primitive(index: u32) -> Self {
        Self::new(ArgumentKind::ScenePrimitive, index)
    }
}
