//! Macros for declaring state and trigger enums.

/// Generate a fieldless enum implementing [`State`](crate::core::State).
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
/// use switchyard::core::State;
///
/// state_enum! {
///     pub enum Door {
///         Open,
///         Closed,
///     }
/// }
///
/// assert_eq!(Door::Closed.name(), "Closed");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a fieldless enum implementing [`Trigger`](crate::core::Trigger).
///
/// # Example
///
/// ```
/// use switchyard::trigger_enum;
/// use switchyard::core::Trigger;
///
/// trigger_enum! {
///     pub enum DoorCommand {
///         Push,
///         Pull,
///     }
/// }
///
/// assert_eq!(DoorCommand::Push.name(), "Push");
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Trigger};

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    trigger_enum! {
        enum TestTrigger {
            Begin,
            Finish,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn trigger_enum_macro_generates_trait() {
        assert_eq!(TestTrigger::Begin.name(), "Begin");
        assert_eq!(TestTrigger::Finish.name(), "Finish");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }
}
