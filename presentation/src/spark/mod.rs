//! Interactive onboarding ("spark") session.

pub mod repl;
