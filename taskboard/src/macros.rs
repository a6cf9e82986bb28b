//! `operation!` implements [`taskboard_operations::Operation`] for a command
//! struct from its verb, noun and description.

macro_rules! operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $description:literal) => {
        impl taskboard_operations::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $description
            }
        }
    };
}

pub(crate) use operation;
