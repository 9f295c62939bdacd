//! Plain and parameterized trigger descriptors.

use super::state::Trigger;
use std::any::{self, Any, TypeId};
use std::fmt;
use std::marker::PhantomData;

/// Runtime tag for the argument type a parameterized trigger requires.
///
/// Equality compares the underlying [`TypeId`] only; the name is kept for
/// error messages.
#[derive(Clone, Copy)]
pub struct ArgumentType {
    id: TypeId,
    name: &'static str,
}

impl ArgumentType {
    /// Tag for the argument type `A`.
    pub fn of<A: Any>() -> Self {
        Self {
            id: TypeId::of::<A>(),
            name: any::type_name::<A>(),
        }
    }

    /// Tag for the runtime type of `value`.
    ///
    /// Only the [`TypeId`] is recoverable from a `dyn Any`, so the name is
    /// a placeholder.
    pub fn of_value(value: &dyn Any) -> Self {
        Self {
            id: Any::type_id(value),
            name: "<dynamic>",
        }
    }

    /// Whether `value` is an instance of this argument type.
    pub fn accepts(&self, value: &dyn Any) -> bool {
        Any::type_id(value) == self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ArgumentType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ArgumentType {}

impl fmt::Debug for ArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Trigger identity as matched by the engine.
///
/// A parameterized descriptor is a different entity from a plain one even
/// when the identities are equal: one must be fired with an argument, the
/// other without.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerDescriptor<T: Trigger> {
    Plain(T),
    Parameterized { trigger: T, argument: ArgumentType },
}

impl<T: Trigger> TriggerDescriptor<T> {
    /// The underlying trigger identity.
    pub fn trigger(&self) -> &T {
        match self {
            Self::Plain(trigger) | Self::Parameterized { trigger, .. } => trigger,
        }
    }

    /// Declared argument type, if parameterized.
    pub fn argument_type(&self) -> Option<ArgumentType> {
        match self {
            Self::Plain(_) => None,
            Self::Parameterized { argument, .. } => Some(*argument),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Self::Parameterized { .. })
    }

    /// Whether a fire carrying `argument` satisfies this descriptor.
    ///
    /// Plain descriptors accept only argument-less fires; parameterized
    /// descriptors accept only an argument of exactly the declared type.
    pub fn accepts(&self, argument: Option<&dyn Any>) -> bool {
        match (self, argument) {
            (Self::Plain(_), None) => true,
            (Self::Parameterized { argument: expected, .. }, Some(value)) => {
                expected.accepts(value)
            }
            (Self::Plain(_), Some(_)) | (Self::Parameterized { .. }, None) => false,
        }
    }
}

impl<T: Trigger> fmt::Display for TriggerDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(trigger) => f.write_str(trigger.name()),
            Self::Parameterized { trigger, argument } => {
                write!(f, "{}({})", trigger.name(), argument.name())
            }
        }
    }
}

/// Statically typed handle for a trigger that must be fired with an `A`.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{ArgumentType, ParameterizedTrigger};
///
/// let set_value = ParameterizedTrigger::<&'static str, i32>::new("set_value");
///
/// assert_eq!(set_value.trigger(), &"set_value");
/// assert_eq!(set_value.descriptor().argument_type(), Some(ArgumentType::of::<i32>()));
/// ```
pub struct ParameterizedTrigger<T: Trigger, A: Any> {
    trigger: T,
    _argument: PhantomData<fn(A)>,
}

impl<T: Trigger, A: Any> ParameterizedTrigger<T, A> {
    pub fn new(trigger: T) -> Self {
        Self {
            trigger,
            _argument: PhantomData,
        }
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    pub fn descriptor(&self) -> TriggerDescriptor<T> {
        TriggerDescriptor::Parameterized {
            trigger: self.trigger.clone(),
            argument: ArgumentType::of::<A>(),
        }
    }
}

impl<T: Trigger, A: Any> Clone for ParameterizedTrigger<T, A> {
    fn clone(&self) -> Self {
        Self::new(self.trigger.clone())
    }
}

impl<T: Trigger, A: Any> fmt::Debug for ParameterizedTrigger<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterizedTrigger")
            .field("trigger", &self.trigger)
            .field("argument", &any::type_name::<A>())
            .finish()
    }
}
