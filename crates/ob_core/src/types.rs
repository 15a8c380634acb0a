//! Type descriptors and the process-wide type registry.

use crate::error::{ObjectError, ObjectResult};
use crate::object::ObjectRef;
use ahash::RandomState;
use hashbrown::HashMap;
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{PoisonError, RwLock};

type FastHashMap<K, V> = HashMap<K, V, RandomState>;

/// Hook run when a mortal object's count reaches zero.
pub type DeallocFn = unsafe fn(ObjectRef);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeFlags(u32);

impl TypeFlags {
    pub const NONE: TypeFlags = TypeFlags(0);
    /// Instances live for the whole process; releases are clamped instead of
    /// freeing at zero.
    pub const IMMORTAL: TypeFlags = TypeFlags(1 << 0);
    /// The kind may be used as a base for other kinds.
    pub const BASETYPE: TypeFlags = TypeFlags(1 << 1);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn union(self, other: TypeFlags) -> TypeFlags {
        TypeFlags(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, other: TypeFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

impl fmt::Debug for TypeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = Vec::new();
        if self.contains(TypeFlags::IMMORTAL) {
            names.push("IMMORTAL");
        }
        if self.contains(TypeFlags::BASETYPE) {
            names.push("BASETYPE");
        }
        write!(f, "TypeFlags({})", names.join(" | "))
    }
}

/// Immutable description of an object kind.
///
/// A descriptor's identity is its address: two objects are of the same kind
/// exactly when their headers point at the same descriptor.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub flags: TypeFlags,
    pub dealloc: Option<DeallocFn>,
}

impl TypeDescriptor {
    pub const fn new(name: &'static str, flags: TypeFlags, dealloc: Option<DeallocFn>) -> Self {
        Self {
            name,
            flags,
            dealloc,
        }
    }

    #[inline]
    pub fn is(&self, other: &TypeDescriptor) -> bool {
        std::ptr::eq(self, other)
    }

    #[inline]
    pub const fn is_immortal(&self) -> bool {
        self.flags.contains(TypeFlags::IMMORTAL)
    }
}

/// The boolean kind. Shared by both singletons, never subclassable.
///
/// Native code links against it as `PyBool_Type` and only ever compares its
/// address.
#[unsafe(export_name = "PyBool_Type")]
pub static BOOL_TYPE: TypeDescriptor = TypeDescriptor::new("bool", TypeFlags::IMMORTAL, None);

static GLOBAL: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::new);

/// Name to descriptor table.
pub struct TypeRegistry {
    types: RwLock<FastHashMap<&'static str, &'static TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            types: RwLock::new(HashMap::with_hasher(RandomState::new())),
        }
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static TypeRegistry {
        &GLOBAL
    }

    /// Registers `ty` under its name.
    ///
    /// Registering the same descriptor twice is a no-op.
    pub fn register(&self, ty: &'static TypeDescriptor) -> ObjectResult<()> {
        let mut types = self.types.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = types.get(ty.name) {
            return if existing.is(ty) {
                Ok(())
            } else {
                Err(ObjectError::DuplicateType { name: ty.name })
            };
        }
        types.insert(ty.name, ty);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&'static TypeDescriptor> {
        let types = self.types.read().unwrap_or_else(PoisonError::into_inner);
        types.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.types.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
