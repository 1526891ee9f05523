//! Cache operations module

mod add;
mod lookup;
mod replay;
mod reset;

// Operations are implemented directly on OperationCache
