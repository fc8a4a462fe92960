//! TextTales terminal client library.
//!
//! A terminal front end for the TextTales blogging platform: landing and
//! home screens, sign-in/sign-up forms with inline validation, a
//! session-aware header, and a profile editor.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
