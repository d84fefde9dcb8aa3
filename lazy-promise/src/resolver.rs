//! Dynamically typed construction of promises.
//!
//! [LazyPromise::new](crate::LazyPromise::new) is statically typed and cannot
//! be called with anything but a factory. Code sitting at a dynamically typed
//! boundary, for example a scripting bridge, instead passes a [Resolver] to
//! [LazyPromise::try_new](crate::LazyPromise::try_new) and handles the
//! [TypeError] a non-callable value produces.

use std::{any::Any, fmt};

use crate::lazy::Factory;
use crate::settle::{Reject, Resolve};

/// Box containing any non-callable object value.
pub type AnyBox = Box<dyn Any + Send + 'static>;

/// A dynamically typed value offered as a promise resolver.
///
/// Only [Resolver::Function] constructs a promise; every other variant
/// reports its dynamic type name in a [TypeError].
pub enum Resolver<T, E> {
    /// A callable factory.
    Function(Factory<T, E>),
    /// No value.
    Undefined,
    /// An explicit null value. Its dynamic type name is `object`.
    Null,
    /// A boolean value.
    Boolean(bool),
    /// A numeric value.
    Number(f64),
    /// A string value.
    String(String),
    /// Any other non-callable object.
    Object(AnyBox),
}

impl<T, E> fmt::Debug for Resolver<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct(match self {
            Self::Function(_) => "Function",
            Self::Undefined => "Undefined",
            Self::Null => "Null",
            Self::Boolean(_) => "Boolean",
            Self::Number(_) => "Number",
            Self::String(_) => "String",
            Self::Object(_) => "Object",
        })
        .finish()
    }
}

impl<T, E> Resolver<T, E> {
    /// Wraps a factory closure as a callable resolver.
    pub fn function<F>(factory: F) -> Self
    where
        F: FnOnce(Resolve<T, E>, Reject<T, E>) + Send + 'static,
    {
        Self::Function(Box::new(factory))
    }

    /// The lowercase dynamic type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Function(_) => "function",
            Self::Undefined => "undefined",
            Self::Null | Self::Object(_) => "object",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
        }
    }
}

/// A non-callable value was offered as a promise resolver.
///
/// The message format is a compatibility contract:
/// `Promise resolver <type> is not a function`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeError {
    ty: &'static str,
}

impl TypeError {
    pub(crate) fn not_a_function(ty: &'static str) -> Self {
        Self { ty }
    }

    /// The dynamic type name of the offending value.
    pub fn dynamic_type(&self) -> &'static str {
        self.ty
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Promise resolver {} is not a function", self.ty)
    }
}

impl std::error::Error for TypeError {}
