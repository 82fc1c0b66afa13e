//! Runtime type witnesses for generic components
//!
//! A component such as `CrudService<Client, ClientRepository>` declares which
//! parent it derives from and with which type arguments. The resolver walks
//! that chain and answers "what is the N-th type argument this component binds
//! for ancestor X", substituting pass-through parameters on the way up.
//!
//! ```rust,ignore
//! let mut resolver = TypeResolver::new();
//! resolver.declare(TypeDeclaration::new::<DataBase, Base>(vec![TypeArg::param(0), TypeArg::param(1)]))?;
//! resolver.declare(TypeDeclaration::new::<ClientService, DataBase>(vec![TypeArg::of::<Client>(), TypeArg::of::<i64>()]))?;
//! assert_eq!(resolver.resolve_of::<ClientService, Base>(1)?, TypeToken::of::<i64>());
//! ```

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;
use thiserror::Error;

// ============================================================================
// Type tokens
// ============================================================================

/// Identity of a Rust type plus its readable name
#[derive(Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
}

impl TypeToken {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified name, e.g. `contracts::domain::a001_client::aggregate::Client`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Name without module paths, e.g. `ListView<Client>`
    pub fn short_name(&self) -> String {
        let mut out = String::with_capacity(self.name.len());
        let mut segment = String::new();
        for ch in self.name.chars() {
            match ch {
                '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | '&' | ';' => {
                    out.push_str(last_path_segment(&segment));
                    segment.clear();
                    out.push(ch);
                }
                _ => segment.push(ch),
            }
        }
        out.push_str(last_path_segment(&segment));
        out
    }

    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeToken({})", self.name)
    }
}

impl fmt::Display for TypeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

// ============================================================================
// Declarations
// ============================================================================

/// Argument a type passes to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeArg {
    Concrete(TypeToken),
    /// Forwards the type's own argument at this index
    Param(usize),
}

impl TypeArg {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Concrete(TypeToken::of::<T>())
    }

    pub const fn param(index: usize) -> Self {
        Self::Param(index)
    }
}

/// "`ty` derives from `parent` with these arguments"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    pub ty: TypeToken,
    pub parent: TypeToken,
    pub args: Vec<TypeArg>,
}

impl TypeDeclaration {
    pub fn new<T: ?Sized + 'static, P: ?Sized + 'static>(args: Vec<TypeArg>) -> Self {
        Self {
            ty: TypeToken::of::<T>(),
            parent: TypeToken::of::<P>(),
            args,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeResolutionError {
    #[error("{concrete} does not derive from {ancestor}")]
    AncestorNotReached {
        concrete: &'static str,
        ancestor: &'static str,
    },

    #[error("{ancestor} has {arity} type arguments, index {index} requested for {concrete}")]
    IndexOutOfRange {
        concrete: &'static str,
        ancestor: &'static str,
        index: usize,
        arity: usize,
    },

    #[error("type argument {index} of {ancestor} is left unbound by {concrete}")]
    UnboundParameter {
        concrete: &'static str,
        ancestor: &'static str,
        index: usize,
    },

    #[error("declaration chain of {ty} is cyclic")]
    Cycle { ty: &'static str },

    #[error("{ty} is already declared with a different parent or arguments")]
    ConflictingDeclaration { ty: &'static str },

    #[error("{context}: expected {expected}, resolved {actual}")]
    Mismatch {
        context: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl TypeResolutionError {
    /// Fails with `Mismatch` unless `actual` is `expected`
    pub fn ensure(
        context: impl Into<String>,
        expected: TypeToken,
        actual: TypeToken,
    ) -> Result<(), Self> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::Mismatch {
                context: context.into(),
                expected: expected.name(),
                actual: actual.name(),
            })
        }
    }
}

// ============================================================================
// Resolver
// ============================================================================

type ResolutionKey = (TypeToken, TypeToken, usize);

/// Declarations plus a cache of resolved arguments
///
/// Declarations are registered during startup; afterwards the resolver is
/// shared read-only and resolution results are memoized.
#[derive(Debug, Default)]
pub struct TypeResolver {
    declarations: HashMap<TypeToken, TypeDeclaration>,
    cache: RwLock<HashMap<ResolutionKey, TypeToken>>,
}

impl TypeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a declaration; repeating an identical one is a no-op
    pub fn declare(&mut self, declaration: TypeDeclaration) -> Result<(), TypeResolutionError> {
        match self.declarations.get(&declaration.ty) {
            Some(existing) if *existing == declaration => Ok(()),
            Some(_) => Err(TypeResolutionError::ConflictingDeclaration {
                ty: declaration.ty.name(),
            }),
            None => {
                self.declarations.insert(declaration.ty, declaration);
                Ok(())
            }
        }
    }

    pub fn is_declared(&self, ty: TypeToken) -> bool {
        self.declarations.contains_key(&ty)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn resolve_of<C: ?Sized + 'static, A: ?Sized + 'static>(
        &self,
        index: usize,
    ) -> Result<TypeToken, TypeResolutionError> {
        self.resolve(TypeToken::of::<C>(), TypeToken::of::<A>(), index)
    }

    /// Type bound to `ancestor`'s argument `index` along `concrete`'s chain
    pub fn resolve(
        &self,
        concrete: TypeToken,
        ancestor: TypeToken,
        index: usize,
    ) -> Result<TypeToken, TypeResolutionError> {
        let key = (concrete, ancestor, index);
        if let Ok(cache) = self.cache.read() {
            if let Some(hit) = cache.get(&key) {
                return Ok(*hit);
            }
        }

        let resolved = self.walk(concrete, ancestor, index)?;

        if let Ok(mut cache) = self.cache.write() {
            cache.insert(key, resolved);
        }
        Ok(resolved)
    }

    fn walk(
        &self,
        concrete: TypeToken,
        ancestor: TypeToken,
        index: usize,
    ) -> Result<TypeToken, TypeResolutionError> {
        let mut current = concrete;
        // Arguments the current type received from its child; `None` = unbound
        let mut bindings: Vec<Option<TypeToken>> = Vec::new();
        let mut visited = HashSet::new();

        loop {
            if !visited.insert(current) {
                return Err(TypeResolutionError::Cycle { ty: current.name() });
            }

            let declaration = self.declarations.get(&current).ok_or(
                TypeResolutionError::AncestorNotReached {
                    concrete: concrete.name(),
                    ancestor: ancestor.name(),
                },
            )?;

            let args: Vec<Option<TypeToken>> = declaration
                .args
                .iter()
                .map(|arg| match arg {
                    TypeArg::Concrete(token) => Some(*token),
                    TypeArg::Param(i) => bindings.get(*i).copied().flatten(),
                })
                .collect();

            if declaration.parent == ancestor {
                let arity = args.len();
                let bound = args.get(index).copied().ok_or(
                    TypeResolutionError::IndexOutOfRange {
                        concrete: concrete.name(),
                        ancestor: ancestor.name(),
                        index,
                        arity,
                    },
                )?;
                return bound.ok_or(TypeResolutionError::UnboundParameter {
                    concrete: concrete.name(),
                    ancestor: ancestor.name(),
                    index,
                });
            }

            bindings = args;
            current = declaration.parent;
        }
    }
}
