//! Hook target capabilities.
//!
//! A hook target is a callable capability bound to one owning instance: a
//! settable field, a settable property, or an invokable method. Instead of
//! reflective member lookup, each capability carries a bound closure that
//! already knows how to reach its member; registration is just handing the
//! closure over.
//!
//! # Typed constructors
//!
//! The erased closure signatures work in [`HookValue`]s. The typed
//! constructors ([`HookCapability::field`], [`HookCapability::method1`], …)
//! build them from ordinary typed closures:
//!
//! ```rust,ignore
//! use hookline_framework::HookCapability;
//!
//! let volume = HookCapability::field::<i32>(move |v| state.lock().volume = v);
//! let reload = HookCapability::method0(|| reload_assets());
//! let rename = HookCapability::method1::<String>(move |name| rename_to(name));
//! ```

use std::fmt;
use std::sync::Arc;

use hookline_core::{HookValue, ParamKind};

/// Erased setter for field and property targets.
pub type SetterFn = Arc<dyn Fn(HookValue) + Send + Sync>;

/// Erased invoker for method targets.
///
/// Receives the coerced parameter, or `None` when no parameter was supplied
/// or the supplied one was not coercible.
pub type InvokerFn = Arc<dyn Fn(Option<HookValue>) + Send + Sync>;

/// A callable capability bound to one owning instance.
#[derive(Clone)]
pub enum HookCapability {
    /// A settable field. Requires a parameter; without one the target is
    /// skipped.
    Field {
        /// Declared parameter kind.
        kind: ParamKind,
        /// Bound assignment closure.
        set: SetterFn,
    },

    /// A settable property. Identical dispatch semantics to [`Self::Field`];
    /// kept distinct because registrations describe their members.
    Property {
        /// Declared parameter kind.
        kind: ParamKind,
        /// Bound assignment closure.
        set: SetterFn,
    },

    /// An invokable method.
    Method {
        /// Kind of the first declared parameter, or `None` for a zero-arg
        /// method. Only the first parameter is ever supplied.
        kind: Option<ParamKind>,
        /// Bound invocation closure.
        invoke: InvokerFn,
    },
}

/// A Rust type usable as a typed hook parameter.
pub trait HookParam: Default + Send + Sync + 'static {
    /// The wire-level kind this type declares.
    const KIND: ParamKind;

    /// Recovers the typed value from a coerced [`HookValue`].
    fn from_value(value: HookValue) -> Option<Self>;
}

impl HookParam for bool {
    const KIND: ParamKind = ParamKind::Bool;

    fn from_value(value: HookValue) -> Option<Self> {
        match value {
            HookValue::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl HookParam for i32 {
    const KIND: ParamKind = ParamKind::Int;

    fn from_value(value: HookValue) -> Option<Self> {
        match value {
            HookValue::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl HookParam for f32 {
    const KIND: ParamKind = ParamKind::Float;

    fn from_value(value: HookValue) -> Option<Self> {
        match value {
            HookValue::Float(v) => Some(v),
            _ => None,
        }
    }
}

impl HookParam for String {
    const KIND: ParamKind = ParamKind::Str;

    fn from_value(value: HookValue) -> Option<Self> {
        match value {
            HookValue::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl HookCapability {
    /// Builds a field capability from a typed setter closure.
    pub fn field<T: HookParam>(set: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::Field {
            kind: T::KIND,
            set: erase_setter(set),
        }
    }

    /// Builds a property capability from a typed setter closure.
    pub fn property<T: HookParam>(set: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::Property {
            kind: T::KIND,
            set: erase_setter(set),
        }
    }

    /// Builds a zero-argument method capability. A supplied parameter is
    /// ignored.
    pub fn method0(invoke: impl Fn() + Send + Sync + 'static) -> Self {
        Self::Method {
            kind: None,
            invoke: Arc::new(move |_| invoke()),
        }
    }

    /// Builds a single-argument method capability.
    ///
    /// An absent or uncoercible parameter invokes the method with `T`'s
    /// default value, so registrants always get called with a well-typed
    /// argument.
    pub fn method1<T: HookParam>(invoke: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self::Method {
            kind: Some(T::KIND),
            invoke: Arc::new(move |value| {
                invoke(value.and_then(T::from_value).unwrap_or_default())
            }),
        }
    }

    /// The parameter kind this capability declares, if any.
    pub fn param_kind(&self) -> Option<ParamKind> {
        match self {
            Self::Field { kind, .. } | Self::Property { kind, .. } => Some(*kind),
            Self::Method { kind, .. } => *kind,
        }
    }

    /// Short capability name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Field { .. } => "field",
            Self::Property { .. } => "property",
            Self::Method { .. } => "method",
        }
    }
}

fn erase_setter<T: HookParam>(set: impl Fn(T) + Send + Sync + 'static) -> SetterFn {
    Arc::new(move |value| {
        if let Some(typed) = T::from_value(value) {
            set(typed);
        }
    })
}

impl fmt::Debug for HookCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field { kind, .. } => f.debug_struct("Field").field("kind", kind).finish(),
            Self::Property { kind, .. } => f.debug_struct("Property").field("kind", kind).finish(),
            Self::Method { kind, .. } => f.debug_struct("Method").field("kind", kind).finish(),
        }
    }
}
